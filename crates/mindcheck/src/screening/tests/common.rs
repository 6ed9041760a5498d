use crate::screening::answers::AnswerSet;
use crate::screening::questionnaire::QuestionId;
use crate::screening::scoring::RiskScore;

/// Logit of the all-zero answer set under the standard table.
pub(super) const ALL_ZERO_LOGIT: f64 = -3.8;
/// Logit of the all-three answer set under the standard table.
pub(super) const ALL_THREE_LOGIT: f64 = 4.4;

pub(super) fn logistic(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

pub(super) fn assert_close(actual: RiskScore, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < 1e-9,
        "expected {expected}, got {}",
        actual.value()
    );
}

pub(super) fn answers_without(question: QuestionId, value: i64) -> AnswerSet {
    let mut answers = AnswerSet::uniform(value);
    answers.remove(question);
    answers
}

/// A respondent reporting good socioeconomic standing but strained mood and social life.
pub(super) fn mixed_answers() -> AnswerSet {
    [
        (QuestionId::Income, 0),
        (QuestionId::Education, 1),
        (QuestionId::Employment, 0),
        (QuestionId::Sleep, 2),
        (QuestionId::Appetite, 1),
        (QuestionId::Energy, 2),
        (QuestionId::Mood, 3),
        (QuestionId::Interest, 2),
        (QuestionId::Anxiety, 2),
        (QuestionId::Relationships, 1),
        (QuestionId::Support, 1),
        (QuestionId::Isolation, 2),
    ]
    .into_iter()
    .collect()
}
