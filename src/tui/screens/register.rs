//! Registration screen — profile form, validation, and signup submission.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::RegistrationError;
use crate::identity::UserProfile;
use crate::model::{SignupRequest, validate_college_name, validate_email, validate_name};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::modal::{Alert, AlertKind, draw_alert};

/// Field index for the user's name.
const NAME: usize = 0;
/// Field index for the email address.
const EMAIL: usize = 1;
/// Field index for the college name.
const COLLEGE: usize = 2;
/// Field index for the phone number.
const PHONE: usize = 3;
/// Field index for the year of study.
const YEAR: usize = 4;
/// Field index for the gender.
const GENDER: usize = 5;

/// State for the registration screen.
///
/// Owns the form values, the per-field errors, the submission lock, and
/// the current modal alert. At most one submission is in flight at a
/// time; [`RegisterState::finish_submit`] releases the lock on every
/// outcome.
#[derive(Debug, Clone)]
pub struct RegisterState {
    form: Form,
    alert: Option<Alert>,
    submitting: bool,
}

impl RegisterState {
    /// Creates the registration form, prefilled from the identity
    /// session's cached profile.
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            form: Form::new(vec![
                FormField::with_value("Name", true, profile.display_name().unwrap_or_default()),
                FormField::with_value(
                    "Email",
                    true,
                    profile.email.as_deref().unwrap_or_default(),
                ),
                FormField::new("College Name", true),
                FormField::with_value(
                    "Phone Number",
                    false,
                    profile.phone_number.as_deref().unwrap_or_default(),
                ),
                FormField::new("Year of Study", false),
                FormField::new("Gender", false),
            ]),
            alert: None,
            submitting: false,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // A visible alert captures all input until dismissed.
        if let Some(alert) = &self.alert {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    let acknowledged_success = alert.kind == AlertKind::Success;
                    self.alert = None;
                    if acknowledged_success {
                        Action::Navigate(Screen::Home)
                    } else {
                        Action::None
                    }
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::F(1) if !self.submitting => Action::Navigate(Screen::Help),
            KeyCode::Esc if !self.submitting => Action::Quit,
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the current modal alert, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Returns `true` while a submission is in flight.
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Validates and assembles the signup payload.
    ///
    /// The guard makes Enter a no-op while a submission is already in
    /// flight, so at most one request can ever be outstanding.
    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }

        if !self.validate() {
            self.alert = Some(Alert::error(
                "Validation Error",
                "Please fill in all required fields correctly",
            ));
            return Action::None;
        }

        let request = SignupRequest {
            name: self.form.trimmed(NAME).to_string(),
            email: self.form.trimmed(EMAIL).to_string(),
            college_name: self.form.trimmed(COLLEGE).to_string(),
            phone_number: self.form.optional(PHONE),
            year: self.form.optional(YEAR),
            gender: self.form.optional(GENDER),
        };

        self.submitting = true;
        self.form.lock();
        Action::Submit(request)
    }

    /// Recomputes all field errors from the current values.
    ///
    /// Each required field is checked independently so the user sees
    /// every problem at once. Optional fields are never validated.
    fn validate(&mut self) -> bool {
        self.form.clear_errors();

        if let Err(e) = validate_name(self.form.value(NAME)) {
            self.form.set_error(NAME, e.to_string());
        }
        if let Err(e) = validate_email(self.form.value(EMAIL)) {
            self.form.set_error(EMAIL, e.to_string());
        }
        if let Err(e) = validate_college_name(self.form.value(COLLEGE)) {
            self.form.set_error(COLLEGE, e.to_string());
        }

        !self.form.has_errors()
    }

    /// Applies the outcome of an in-flight submission.
    ///
    /// Always releases the submission lock; on failure the form stays
    /// populated and editable so the user may retry.
    pub fn finish_submit(&mut self, result: Result<(), RegistrationError>) {
        self.submitting = false;
        self.form.unlock();
        self.alert = Some(match result {
            Ok(()) => Alert::success("Success", "Registration completed successfully"),
            Err(e) => Alert::error("Error", e.to_string()),
        });
    }
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_register(state: &RegisterState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Complete Your Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(18),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    let footer = if state.submitting() {
        Paragraph::new(Line::from("Submitting… please wait"))
            .style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new(Line::from(
            "Tab/Shift+Tab: next/prev  Enter: submit  F1: help  Esc: quit",
        ))
        .style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(footer, footer_area);

    if let Some(alert) = state.alert() {
        draw_alert(alert, frame, area);
    }
}
