//! Home screen — landing view after a completed registration.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    name: String,
}

impl HomeState {
    /// Creates a new home state with no greeting name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name used in the greeting (the name that was submitted).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the greeting name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// Home is a terminal screen: there is no path back to the
    /// registration form.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            _ => Action::None,
        }
    }
}

/// Renders the home screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_home(state: &HomeState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let greeting = if state.name().is_empty() {
        "Welcome!".to_string()
    } else {
        format!("Welcome, {}!", state.name())
    };

    let lines = vec![
        Line::styled(greeting, Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Your profile is registered."),
        Line::from(""),
        Line::styled("q/Esc: quit  F1: help", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Min(0)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}
