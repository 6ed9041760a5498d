use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::questionnaire::QuestionId;

/// A respondent's choice for one question as received from a collaborator.
///
/// Both fields are kept loose (free-form identifier, signed value) so malformed
/// input reaches the validation policy instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: i64,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: i64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// At most one answer per identifier; recording an identifier again replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    values: BTreeMap<String, i64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question answered with the same option. Handy for fixtures and demos.
    pub fn uniform(value: i64) -> Self {
        QuestionId::ALL
            .into_iter()
            .map(|id| (id, value))
            .collect()
    }

    /// Record an answer, returning the value it replaced. The identifier is stored
    /// verbatim, so `" mood "` does not satisfy `mood`.
    pub fn record(&mut self, question_id: impl Into<String>, value: i64) -> Option<i64> {
        self.values.insert(question_id.into(), value)
    }

    pub fn record_answer(&mut self, answer: Answer) -> Option<i64> {
        self.record(answer.question_id, answer.value)
    }

    pub fn remove(&mut self, question: QuestionId) -> Option<i64> {
        self.values.remove(question.as_str())
    }

    pub fn get(&self, question: QuestionId) -> Option<i64> {
        self.values.get(question.as_str()).copied()
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.values.contains_key(question.as_str())
    }

    /// Required questions with no recorded answer, in catalog order.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.contains(*id))
            .collect()
    }

    /// Identifiers that do not name a catalog question.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<QuestionId>().is_err())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.record_answer(answer);
        }
        set
    }
}

impl FromIterator<(QuestionId, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, i64)>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for (question, value) in iter {
            set.record(question.as_str(), value);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.values
            .into_iter()
            .map(|(question_id, value)| Answer { question_id, value })
            .collect()
    }
}
