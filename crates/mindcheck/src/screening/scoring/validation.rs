use serde::Serialize;

use super::super::answers::AnswerSet;
use super::super::questionnaire::{QuestionId, OPTIONS_PER_QUESTION};

/// Why an answer set could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreError {
    #[error("answer set is missing {} required question(s): {}", .missing.len(), join(.missing))]
    Incomplete { missing: Vec<QuestionId> },
    #[error("answer for '{question}' is {value}, expected 0..=3")]
    OutOfRange { question: String, value: i64 },
    #[error("no coefficient for '{question}' option {choice}")]
    MissingCoefficient { question: QuestionId, choice: usize },
    #[error("risk probability is not a finite number")]
    NonFinite,
}

fn join(questions: &[QuestionId]) -> String {
    questions
        .iter()
        .map(|question| question.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Completeness first, then range over every recorded answer. On success returns
/// the chosen option per question in [`QuestionId::ALL`] order.
pub(crate) fn validate(answers: &AnswerSet) -> Result<[usize; 12], ScoreError> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(ScoreError::Incomplete { missing });
    }

    if let Some((question, value)) = answers.iter().find(|(_, value)| !in_range(*value)) {
        return Err(ScoreError::OutOfRange {
            question: question.to_string(),
            value,
        });
    }

    let mut choices = [0usize; 12];
    for question in QuestionId::ALL {
        let value = answers
            .get(question)
            .ok_or_else(|| ScoreError::Incomplete {
                missing: vec![question],
            })?;
        choices[question.index()] = value as usize;
    }

    Ok(choices)
}

fn in_range(value: i64) -> bool {
    (0..OPTIONS_PER_QUESTION as i64).contains(&value)
}
