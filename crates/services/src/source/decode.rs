use serde::Deserialize;
use tracing::{debug, warn};
use trivia_core::model::QuestionRecord;

use crate::error::SourceError;

/// Wire shape of one question item.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    answer: String,
    choices: Vec<String>,
    #[serde(default)]
    category: Option<String>,
}

impl RawQuestion {
    fn into_record(self) -> Result<QuestionRecord, trivia_core::model::QuestionError> {
        let record = QuestionRecord::new(self.question, self.choices, self.answer)?;
        Ok(match self.category {
            Some(category) => record.with_category(category),
            None => record,
        })
    }
}

/// Decode a JSON array of questions.
///
/// Items that fail validation are skipped and logged.
///
/// # Errors
///
/// Returns `SourceError::Decode` for malformed JSON and `SourceError::Empty`
/// when no item survives validation.
pub fn decode_questions(bytes: &[u8]) -> Result<Vec<QuestionRecord>, SourceError> {
    let raw: Vec<RawQuestion> = serde_json::from_slice(bytes)?;
    let received = raw.len();

    let questions: Vec<QuestionRecord> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match item.into_record() {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(position, error = %err, "skipping invalid question");
                None
            }
        })
        .collect();

    debug!(received, kept = questions.len(), "decoded question payload");

    if questions.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_items_in_order() {
        let json = br#"[
            {"question": "Capital of France?", "answer": "Paris", "choices": ["Paris", "Lyon"], "category": "world"},
            {"question": "2 + 2?", "answer": "4", "choices": ["3", "4", "5"]}
        ]"#;

        let questions = decode_questions(json).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question(), "Capital of France?");
        assert_eq!(questions[0].category(), Some("world"));
        assert_eq!(questions[1].answer(), "4");
        assert_eq!(questions[1].category(), None);
    }

    #[test]
    fn skips_items_that_fail_validation() {
        let json = br#"[
            {"question": "Bad", "answer": "x", "choices": ["a", "b"]},
            {"question": "Good", "answer": "a", "choices": ["a", "b"]},
            {"question": "Lonely", "answer": "a", "choices": ["a"]}
        ]"#;

        let questions = decode_questions(json).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question(), "Good");
    }

    #[test]
    fn all_invalid_is_empty() {
        let json = br#"[{"question": "Bad", "answer": "x", "choices": ["a", "b"]}]"#;
        assert!(matches!(decode_questions(json), Err(SourceError::Empty)));
        assert!(matches!(decode_questions(b"[]"), Err(SourceError::Empty)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            decode_questions(b"{\"question\": 1}"),
            Err(SourceError::Decode(_))
        ));
    }
}
