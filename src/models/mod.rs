mod difficulty;
mod quiz_item;

pub use difficulty::{difficulty_color, DifficultyColor};
pub use quiz_item::{Question, QuizItem, QuizList};

#[cfg(test)]
pub(crate) use quiz_item::test_item;
