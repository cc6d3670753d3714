//! Status bar widget — persistent one-line session context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the app state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusContext {
    /// Email of the signed-in identity, if known.
    pub email: String,
    /// Base URL of the registration backend.
    pub host: String,
    /// Whether a submission is currently in flight.
    pub submitting: bool,
}

/// Renders a one-line status bar showing the session context.
///
/// Display format (left-aligned, Cyan):
/// - Signed in:  `jo@campus.edu  →  http://localhost:8080`
/// - Signed out: `signed out  →  http://localhost:8080`
/// - In flight:  trailing `submitting…` (Yellow)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans: Vec<Span> = Vec::new();
    if ctx.email.is_empty() {
        spans.push(Span::styled("signed out", dim));
    } else {
        spans.push(Span::styled(ctx.email.clone(), cyan));
    }
    spans.push(Span::styled("  →  ", dim));
    spans.push(Span::styled(ctx.host.clone(), cyan));

    if ctx.submitting {
        spans.push(Span::styled("  submitting…", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
