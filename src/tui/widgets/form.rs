//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown on the field border.
    pub label: String,
    /// Current text value, stored exactly as typed.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
}

impl FormField {
    /// Creates an empty form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self::with_value(label, required, "")
    }

    /// Creates a form field prefilled with `value`.
    pub fn with_value(label: impl Into<String>, required: bool, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            error: None,
            required,
        }
    }
}

/// A multi-field text form with focus management and an input lock.
///
/// While locked (a submission is in flight) all editing and focus
/// movement is ignored and the form renders dimmed. Editing a field
/// clears that field's error without re-validating — errors reappear
/// only on the next submit.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
    locked: bool,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focus: 0,
            locked: false,
        }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.locked || self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.locked || self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Appends a character to the focused field and clears its error.
    pub fn insert_char(&mut self, ch: char) {
        if self.locked {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
            field.error = None;
        }
    }

    /// Deletes the last character of the focused field and clears its error.
    pub fn delete_char(&mut self) {
        if self.locked {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
            field.error = None;
        }
    }

    /// Locks the form against input for the duration of a submission.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlocks the form once the submission has settled.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Returns `true` while the form is locked.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Returns the error message of the field at `index`, if any.
    pub fn error(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|f| f.error.as_deref())
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the raw value of the field at `index`, or an empty string
    /// if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns the value at `index` with surrounding whitespace removed.
    pub fn trimmed(&self, index: usize) -> &str {
        self.value(index).trim()
    }

    /// Returns the trimmed value at `index`, or `None` when it is empty.
    ///
    /// Used to build wire payloads where empty optional fields must be
    /// omitted rather than sent as empty strings.
    pub fn optional(&self, index: usize) -> Option<String> {
        let value = self.trimmed(index);
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus && !form.locked;

        let border_color = if form.locked {
            Color::DarkGray
        } else if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let value_style = if form.locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(&field.value, value_style)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Draw error below the field if there's space
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
