use std::sync::Arc;

use crate::fetch::{FetchError, FetchOutcome};
use crate::models::QuizItem;
use crate::store::{ApplyResult, QuizStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the list of questions.
    List,
    /// An item is open and unanswered.
    Detail,
    /// An item is open and an answer has been chosen.
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// `Correct` only on exact text equality with the item's correct answer.
pub fn evaluate(item: &QuizItem, selected_answer: &str) -> Verdict {
    if selected_answer == item.correct_answer {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// Everything scoped to one open item.
///
/// Owns a copy of the item so a refresh can replace the list underneath it,
/// and shuffles the answers once on entry so the ordering stays put while
/// the item is open.
#[derive(Debug, Clone)]
pub struct ViewingContext {
    item: QuizItem,
    answers: Vec<String>,
    cursor: usize,
    selection: Option<String>,
}

impl ViewingContext {
    pub fn new(item: QuizItem) -> Self {
        let answers = item.all_answers();
        Self {
            item,
            answers,
            cursor: 0,
            selection: None,
        }
    }

    pub fn item(&self) -> &QuizItem {
        &self.item
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

/// Presentation controller: the published list plus list/detail/result navigation.
pub struct App {
    pub state: AppState,
    store: QuizStore,
    cursor: usize,
    context: Option<ViewingContext>,
}

impl App {
    pub fn new() -> Self {
        Self::with_store(QuizStore::new())
    }

    pub fn with_store(store: QuizStore) -> Self {
        Self {
            state: AppState::List,
            store,
            cursor: 0,
            context: None,
        }
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn items(&self) -> Arc<[QuizItem]> {
        self.store.items()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn context(&self) -> Option<&ViewingContext> {
        self.context.as_ref()
    }

    pub fn fetch_issued(&mut self, generation: u64) {
        self.store.note_issued(generation);
    }

    pub fn fetch_failed(&mut self, error: &FetchError) {
        self.store.note_error(error);
    }

    /// Apply a finished fetch. Call between frames, never while drawing.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> ApplyResult {
        let result = self.store.apply(outcome);
        if let ApplyResult::Published(count) = result {
            self.cursor = self.cursor.min(count.saturating_sub(1));
        }
        result
    }

    pub fn select_next_item(&mut self) {
        let count = self.store.items().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_item(&mut self) {
        let count = self.store.items().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Open the item under the list cursor.
    pub fn open_selected(&mut self) {
        if let Some(item) = self.store.items().get(self.cursor) {
            self.enter(item.clone());
        }
    }

    pub fn select_next_answer(&mut self) {
        if let Some(context) = self.context.as_mut() {
            context.cursor = (context.cursor + 1) % context.answers.len();
        }
    }

    pub fn select_previous_answer(&mut self) {
        if let Some(context) = self.context.as_mut() {
            let count = context.answers.len();
            context.cursor = (context.cursor + count - 1) % count;
        }
    }

    /// Choose the answer under the detail cursor.
    pub fn submit_answer(&mut self) {
        let Some(context) = self.context.as_ref() else {
            return;
        };
        let answer = context.answers[context.cursor].clone();
        let item = context.item.clone();
        self.select(answer, &item);
    }

    /// Record `answer` as the selection for `item` and show the result.
    ///
    /// Opens a fresh context for `item` unless an equal item is already open,
    /// so a republished item with the same id but new answers is evaluated
    /// against its own answers. Any earlier selection in the same context is
    /// overwritten.
    pub fn select(&mut self, answer: impl Into<String>, item: &QuizItem) {
        let same_item = self.context.as_ref().is_some_and(|c| c.item == *item);
        if !same_item {
            self.enter(item.clone());
        }

        if let Some(context) = self.context.as_mut() {
            context.selection = Some(answer.into());
            self.state = AppState::Result;
        }
    }

    /// Verdict for the open item's selection, if one has been made.
    pub fn verdict(&self) -> Option<Verdict> {
        let context = self.context.as_ref()?;
        let selection = context.selection.as_deref()?;
        Some(evaluate(&context.item, selection))
    }

    /// Result goes back to the open item; an open item goes back to the list.
    pub fn back(&mut self) {
        match self.state {
            AppState::Result => self.state = AppState::Detail,
            AppState::Detail => self.leave(),
            AppState::List => {}
        }
    }

    fn enter(&mut self, item: QuizItem) {
        log::debug!("viewing item {}", item.id);
        self.context = Some(ViewingContext::new(item));
        self.state = AppState::Detail;
    }

    fn leave(&mut self) {
        self.context = None;
        self.state = AppState::List;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
