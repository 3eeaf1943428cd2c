use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::difficulty::{difficulty_color, DifficultyColor};

/// A decoded list of trivia questions, in the order the API returned them.
pub type QuizList = Vec<QuizItem>;

/// One trivia question as returned by the trivia API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub category: String,
    pub id: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub question: Question,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub regions: Vec<String>,
    pub is_niche: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub text: String,
}

impl QuizItem {
    /// All answers in a fresh random order.
    ///
    /// Every call reshuffles. Views that need a stable ordering should call
    /// this once and keep the result.
    pub fn all_answers(&self) -> Vec<String> {
        self.all_answers_with(&mut rand::thread_rng())
    }

    pub fn all_answers_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut answers = Vec::with_capacity(self.incorrect_answers.len() + 1);
        answers.extend(self.incorrect_answers.iter().cloned());
        answers.push(self.correct_answer.clone());
        answers.shuffle(rng);
        answers
    }

    pub fn difficulty_color(&self) -> DifficultyColor {
        difficulty_color(&self.difficulty)
    }
}

#[cfg(test)]
pub(crate) fn test_item(id: &str, correct: &str, incorrect: &[&str]) -> QuizItem {
    QuizItem {
        category: "Science".to_string(),
        id: id.to_string(),
        correct_answer: correct.to_string(),
        incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        question: Question {
            text: format!("Question {}?", id),
        },
        tags: Vec::new(),
        kind: "text".to_string(),
        difficulty: "easy".to_string(),
        regions: Vec::new(),
        is_niche: false,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const MARS: &str = r#"[{"category":"Science","id":"abc1","correctAnswer":"Mars","incorrectAnswers":["Venus","Jupiter"],"question":{"text":"Which planet is red?"},"tags":[],"type":"text","difficulty":"easy","regions":[],"isNiche":false}]"#;

    fn sorted(mut answers: Vec<String>) -> Vec<String> {
        answers.sort();
        answers
    }

    #[test]
    fn test_decode_api_shape() {
        let list: QuizList = serde_json::from_str(MARS).unwrap();
        assert_eq!(list.len(), 1);

        let item = &list[0];
        assert_eq!(item.id, "abc1");
        assert_eq!(item.correct_answer, "Mars");
        assert_eq!(item.question.text, "Which planet is red?");
        assert_eq!(item.kind, "text");
        assert!(!item.is_niche);
        assert_eq!(item.all_answers().len(), 3);
        assert_eq!(item.difficulty_color(), DifficultyColor::Green);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = MARS.replace(r#""isNiche":false"#, r#""isNiche":true,"extra":1"#);
        let list: QuizList = serde_json::from_str(&json).unwrap();
        assert!(list[0].is_niche);
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let json = MARS.replace(r#""correctAnswer":"Mars","#, "");
        assert!(serde_json::from_str::<QuizList>(&json).is_err());
    }

    #[test]
    fn test_all_answers_is_permutation() {
        let item = test_item("q1", "Mars", &["Venus", "Jupiter", "Saturn"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let answers = item.all_answers_with(&mut rng);
            assert_eq!(answers.len(), item.incorrect_answers.len() + 1);
            assert_eq!(
                sorted(answers),
                sorted(vec![
                    "Venus".to_string(),
                    "Jupiter".to_string(),
                    "Saturn".to_string(),
                    "Mars".to_string(),
                ])
            );
        }
    }

    #[test]
    fn test_all_answers_without_distractors() {
        let item = test_item("q2", "True", &[]);
        assert_eq!(item.all_answers(), vec!["True".to_string()]);
    }

    #[test]
    fn test_all_answers_reaches_every_position() {
        let item = test_item("q3", "Mars", &["Venus", "Jupiter", "Saturn"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let answers = item.all_answers_with(&mut rng);
            let position = answers.iter().position(|a| a == "Mars").unwrap();
            seen[position] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }
}
