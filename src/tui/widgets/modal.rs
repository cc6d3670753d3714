//! Modal alert widget — blocking overlay with a single OK dismissal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Which kind of outcome an [`Alert`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A blocking modal alert.
///
/// The screen showing an alert must route all input to its dismissal;
/// no other interaction is possible until the user acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    /// Creates a success alert.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: AlertKind::Success,
        }
    }

    /// Creates an error alert.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: AlertKind::Error,
        }
    }
}

/// Renders a centered alert box over the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(alert: &Alert, frame: &mut Frame, area: Rect) {
    let color = match alert.kind {
        AlertKind::Success => Color::Green,
        AlertKind::Error => Color::Red,
    };

    let width = (alert.message.len() as u16 + 6)
        .clamp(30, area.width.saturating_sub(4).max(30));
    let [h_centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [boxed] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(h_centered);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(""),
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::styled(
            "[ OK ]",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, boxed);
    frame.render_widget(paragraph, boxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_constructor_sets_kind() {
        let alert = Alert::success("Success", "done");
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.title, "Success");
        assert_eq!(alert.message, "done");
    }

    #[test]
    fn error_constructor_sets_kind() {
        let alert = Alert::error("Error", "boom");
        assert_eq!(alert.kind, AlertKind::Error);
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_alert(alert: &Alert, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_alert(alert, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_message_and_ok() {
            let alert = Alert::error("Validation Error", "Please fill in all required fields correctly");
            let output = render_alert(&alert, 70, 20);
            assert!(output.contains("Validation Error"), "title shown");
            assert!(
                output.contains("Please fill in all required"),
                "message shown"
            );
            assert!(output.contains("[ OK ]"), "OK button shown");
        }

        #[test]
        fn renders_in_small_area_without_panic() {
            let alert = Alert::success("Success", "Registration completed successfully");
            let output = render_alert(&alert, 34, 9);
            assert!(output.contains("Success"), "title shown even when cramped");
        }
    }
}
