use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::api::{RegistrationError, SignupClient, submit_registration};
use crate::identity::{IdentityProvider, UserProfile};
use crate::model::SignupRequest;

use super::action::Action;
use super::error::AppError;
use super::screens::{HelpState, HomeState, RegisterState, draw_help, draw_home, draw_register};
use super::widgets::{StatusContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Complete and submit the profile form.
    Register,
    /// Landing view after a completed registration.
    Home,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// Owns the screen states and the submission channel. Submissions run as
/// a spawned task; their single outcome message is consumed by the event
/// loop, which releases the register screen's lock.
pub struct App {
    screen: Screen,
    register: RegisterState,
    home: HomeState,
    help: HelpState,
    client: SignupClient,
    identity: Arc<dyn IdentityProvider>,
    email: String,
    outcome_tx: mpsc::Sender<Result<(), RegistrationError>>,
    outcome_rx: mpsc::Receiver<Result<(), RegistrationError>>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Register`] screen,
    /// with the form prefilled from `profile`.
    pub fn new(
        client: SignupClient,
        identity: Arc<dyn IdentityProvider>,
        profile: &UserProfile,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(1);
        Self {
            screen: Screen::Register,
            register: RegisterState::new(profile),
            home: HomeState::new(),
            help: HelpState::new(),
            email: profile.email.clone().unwrap_or_default(),
            client,
            identity,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    /// Main event loop: draw, then wait for either a terminal event or a
    /// submission outcome.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut events = EventStream::new();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(outcome) = self.outcome_rx.recv() => self.finish_submission(outcome),
            }
        }
        Ok(())
    }

    /// Renders the current screen plus the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [screen_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Register => draw_register(&self.register, frame, screen_area),
            Screen::Home => draw_home(&self.home, frame, screen_area),
            Screen::Help => draw_help(&self.help, frame, screen_area),
        }

        let ctx = StatusContext {
            email: self.email.clone(),
            host: self.client.base_url().to_string(),
            submitting: self.register.submitting(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: dispatches to the active screen and applies
    /// the returned action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = match self.screen {
            Screen::Register => self.register.handle_key(key),
            Screen::Home => self.home.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply_action(action);
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.set_origin(self.screen);
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::Submit(request) => self.start_submission(request),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Spawns the submission task for one signup attempt.
    ///
    /// Exactly one outcome message is sent per started task, so the
    /// register screen's lock is always released.
    fn start_submission(&mut self, request: SignupRequest) {
        self.home.set_name(request.name.clone());
        let identity = Arc::clone(&self.identity);
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = submit_registration(identity.as_ref(), &client, &request).await;
            // Send only fails if the app is already shutting down.
            let _ = tx.send(outcome).await;
        });
    }

    fn finish_submission(&mut self, outcome: Result<(), RegistrationError>) {
        match &outcome {
            Ok(()) => tracing::info!("registration completed"),
            Err(e) => tracing::warn!(error = %e, "registration attempt failed"),
        }
        self.register.finish_submit(outcome);
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use crate::identity::IdentityError;

    use super::*;

    struct FakeIdentity {
        token: Option<String>,
    }

    #[async_trait]
    impl IdentityProvider for FakeIdentity {
        async fn profile(&self) -> UserProfile {
            UserProfile::default()
        }

        async fn access_token(&self) -> Option<String> {
            self.token.clone()
        }

        async fn update_metadata(
            &self,
            _entries: serde_json::Map<String, serde_json::Value>,
        ) -> Result<(), IdentityError> {
            Ok(())
        }

        async fn reload(&self) -> Result<(), IdentityError> {
            Ok(())
        }
    }

    fn make_app(base_url: &str, token: Option<&str>) -> App {
        let identity = Arc::new(FakeIdentity {
            token: token.map(String::from),
        });
        App::new(
            SignupClient::new(base_url),
            identity,
            &UserProfile::default(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn fill_required(app: &mut App) {
        for ch in "Jo Smith".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        app.handle_key(press(KeyCode::Tab));
        for ch in "jo@campus.edu".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
        app.handle_key(press(KeyCode::Tab));
        for ch in "State College".chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[tokio::test]
    async fn new_starts_on_register() {
        let app = make_app("http://localhost:8080", Some("tok"));
        assert_eq!(app.screen(), Screen::Register);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn esc_on_register_quits() {
        let mut app = make_app("http://localhost:8080", Some("tok"));
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let mut app = make_app("http://localhost:8080", Some("tok"));
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn f1_opens_help_and_records_origin() {
        let mut app = make_app("http://localhost:8080", Some("tok"));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.screen(), Screen::Register);
    }

    #[tokio::test]
    async fn successful_submission_lands_on_home() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/auth/signup")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let mut app = make_app(&server.url(), Some("tok"));
        fill_required(&mut app);
        app.handle_key(press(KeyCode::Enter));

        let outcome = app.outcome_rx.recv().await.expect("one outcome message");
        app.finish_submission(outcome);
        mock.assert_async().await;

        // Acknowledge the success alert.
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Home);

        // Home greets with the submitted name.
        assert_eq!(app.home.name(), "Jo Smith");
    }

    #[tokio::test]
    async fn missing_token_surfaces_error_alert() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/auth/signup")
            .expect(0)
            .create_async()
            .await;

        let mut app = make_app(&server.url(), None);
        fill_required(&mut app);
        app.handle_key(press(KeyCode::Enter));

        let outcome = app.outcome_rx.recv().await.expect("one outcome message");
        app.finish_submission(outcome);
        mock.assert_async().await;

        let alert = app.register.alert().expect("error alert");
        assert_eq!(alert.message, "Authentication token not available");

        // Dismissing a failure alert stays on the register screen.
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Register);
    }

    #[tokio::test]
    async fn rejected_submission_keeps_form_and_lock_released() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/auth/signup")
            .with_status(409)
            .with_body(r#"{"message":"Email already registered"}"#)
            .create_async()
            .await;

        let mut app = make_app(&server.url(), Some("tok"));
        fill_required(&mut app);
        app.handle_key(press(KeyCode::Enter));

        let outcome = app.outcome_rx.recv().await.expect("one outcome message");
        app.finish_submission(outcome);

        let alert = app.register.alert().expect("error alert");
        assert_eq!(alert.message, "Email already registered");
        assert!(!app.register.submitting());
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/auth/signup")
            .expect(0)
            .create_async()
            .await;

        let mut app = make_app(&server.url(), Some("tok"));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.register.alert().is_some(), "validation alert shown");
        mock.assert_async().await;
    }
}
