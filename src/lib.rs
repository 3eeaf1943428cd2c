//! # random-trivia
//!
//! A terminal trivia browser backed by a remote trivia API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use random_trivia::{ReqwestClient, Trivia, DEFAULT_ENDPOINT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReqwestClient::new()?;
//!     let trivia = Trivia::new(client, DEFAULT_ENDPOINT)?;
//!
//!     // Fetches on start-up and takes over the terminal until `q`.
//!     trivia.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod fetch;
mod models;
mod store;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;

pub use app::{evaluate, App, AppState, Verdict, ViewingContext};
pub use fetch::{
    decode_quiz_list, fetch_quiz_list, parse_endpoint, BoxError, FetchError, FetchOutcome,
    FetchService, HttpClient, ReqwestClient, DEFAULT_ENDPOINT,
};
pub use models::{difficulty_color, DifficultyColor, Question, QuizItem, QuizList};
pub use store::{ApplyResult, QuizStore};

use terminal::TerminalGuard;

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// A trivia session: the presentation state plus the service feeding it.
pub struct Trivia<C> {
    app: App,
    service: FetchService<C>,
    outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<C: HttpClient> Trivia<C> {
    /// Create a session that fetches from `endpoint`.
    ///
    /// The endpoint is checked here so a typo is reported before the
    /// terminal is taken over.
    pub fn new(client: C, endpoint: impl Into<String>) -> Result<Self, TriviaError> {
        let (service, outcomes) = FetchService::new(client, endpoint);
        parse_endpoint(service.endpoint())?;

        Ok(Self {
            app: App::new(),
            service,
            outcomes,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Kick off a background fetch.
    ///
    /// Spawns onto the current tokio runtime, so this panics if called
    /// outside one.
    pub fn refresh(&mut self) {
        refresh(&mut self.app, &self.service);
    }

    /// Wait for the next fetch outcome and apply it.
    pub async fn next_outcome(&mut self) -> Option<ApplyResult> {
        let outcome = self.outcomes.recv().await?;
        Some(self.app.apply_outcome(outcome))
    }

    /// Run in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), TriviaError> {
        let mut guard = TerminalGuard::enter()?;
        let mut events = EventStream::new();
        self.refresh();

        loop {
            guard.terminal().draw(|frame| ui::render(frame, &self.app))?;

            tokio::select! {
                Some(outcome) = self.outcomes.recv() => {
                    self.app.apply_outcome(outcome);
                }
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_input(&mut self.app, &self.service, key.code) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
            }
        }

        Ok(())
    }
}

fn refresh<C: HttpClient>(app: &mut App, service: &FetchService<C>) {
    match service.fetch_trivia() {
        Ok(generation) => app.fetch_issued(generation),
        Err(e) => app.fetch_failed(&e),
    }
}

/// Returns true if the app should exit.
fn handle_input<C: HttpClient>(app: &mut App, service: &FetchService<C>, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.state {
        AppState::List => handle_list_input(app, service, key),
        AppState::Detail => handle_detail_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }

    false
}

fn handle_list_input<C: HttpClient>(app: &mut App, service: &FetchService<C>, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_item(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_item(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(),
        KeyCode::Char('r') | KeyCode::Char('R') => refresh(app, service),
        _ => {}
    }
}

fn handle_detail_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_answer(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_answer(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter) {
        app.back();
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use super::*;

    const TWO_ITEMS: &str = r#"[
        {"category":"Science","id":"abc1","correctAnswer":"Mars","incorrectAnswers":["Venus","Jupiter"],"question":{"text":"Which planet is red?"},"tags":[],"type":"text","difficulty":"easy","regions":[],"isNiche":false},
        {"category":"History","id":"abc2","correctAnswer":"1066","incorrectAnswers":["1215"],"question":{"text":"Battle of Hastings?"},"tags":["battles"],"type":"text","difficulty":"legendary","regions":["GB"],"isNiche":true}
    ]"#;

    struct FixedClient(&'static str);

    impl HttpClient for FixedClient {
        async fn get(&self, _url: &Url) -> Result<Vec<u8>, BoxError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    async fn loaded() -> Trivia<FixedClient> {
        let mut trivia = Trivia::new(FixedClient(TWO_ITEMS), DEFAULT_ENDPOINT).unwrap();
        trivia.refresh();
        assert_eq!(trivia.next_outcome().await, Some(ApplyResult::Published(2)));
        trivia
    }

    fn press(trivia: &mut Trivia<FixedClient>, key: KeyCode) -> bool {
        handle_input(&mut trivia.app, &trivia.service, key)
    }

    fn highlighted(trivia: &Trivia<FixedClient>) -> String {
        let context = trivia.app().context().unwrap();
        context.answers()[context.cursor()].clone()
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let result = Trivia::new(FixedClient("[]"), "trivia.example.com");
        assert!(matches!(result, Err(TriviaError::Fetch(FetchError::Configuration { .. }))));
    }

    #[tokio::test]
    async fn test_refresh_publishes() {
        let trivia = loaded().await;
        assert_eq!(trivia.app().items().len(), 2);
        assert!(!trivia.app().store().is_loading());
    }

    #[tokio::test]
    async fn test_answer_flow() {
        let mut trivia = loaded().await;

        assert!(!press(&mut trivia, KeyCode::Char('j')));
        assert!(!press(&mut trivia, KeyCode::Enter));
        assert_eq!(trivia.app().state, AppState::Detail);
        assert_eq!(trivia.app().context().unwrap().item().id, "abc2");

        while highlighted(&trivia) != "1215" {
            press(&mut trivia, KeyCode::Down);
        }
        press(&mut trivia, KeyCode::Enter);
        assert_eq!(trivia.app().state, AppState::Result);
        assert_eq!(trivia.app().verdict(), Some(Verdict::Incorrect));

        press(&mut trivia, KeyCode::Esc);
        assert_eq!(trivia.app().state, AppState::Detail);
        press(&mut trivia, KeyCode::Esc);
        assert_eq!(trivia.app().state, AppState::List);
        assert!(trivia.app().context().is_none());
    }

    #[tokio::test]
    async fn test_refresh_key() {
        let mut trivia = loaded().await;
        assert!(!press(&mut trivia, KeyCode::Char('r')));
        assert!(trivia.app().store().is_loading());
        assert_eq!(trivia.next_outcome().await, Some(ApplyResult::Published(2)));
        assert_eq!(trivia.app().store().published_generation(), 2);
    }

    #[tokio::test]
    async fn test_quit_from_any_state() {
        let mut trivia = loaded().await;
        assert!(press(&mut trivia, KeyCode::Char('q')));

        press(&mut trivia, KeyCode::Enter);
        assert!(press(&mut trivia, KeyCode::Char('Q')));
    }
}
