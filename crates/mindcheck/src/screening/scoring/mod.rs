mod validation;
mod weights;

pub use validation::ScoreError;
pub use weights::WeightTable;

use serde::Serialize;
use tracing::debug;

use super::answers::AnswerSet;
use super::questionnaire::QuestionId;

/// Sigmoid-calibrated risk probability, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    pub const ZERO: RiskScore = RiskScore(0.0);

    /// Clamps into `[0, 1]`; non-finite input collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

/// Audit entry for one question's contribution to the logit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreContribution {
    pub question: QuestionId,
    pub choice: usize,
    pub weight: f64,
}

/// Stateless evaluator applying a weight table to an answer set.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    table: &'static WeightTable,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringEngine {
    pub const fn new(table: &'static WeightTable) -> Self {
        Self { table }
    }

    pub const fn standard() -> Self {
        Self::new(&WeightTable::STANDARD)
    }

    pub fn table(&self) -> &'static WeightTable {
        self.table
    }

    /// Score with the fail-safe policy: any validation or numeric failure yields zero.
    ///
    /// A zero result cannot be told apart from a genuinely minimal risk. Callers that
    /// need the reason use [`ScoringEngine::evaluate`].
    pub fn score(&self, answers: &AnswerSet) -> RiskScore {
        self.evaluate(answers).unwrap_or(RiskScore::ZERO)
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Result<RiskScore, ScoreError> {
        let contributions = self.explain(answers)?;
        self.probability(&contributions)
    }

    /// Sigmoid of the bias plus the given contributions, as produced by [`ScoringEngine::explain`].
    pub fn probability(&self, contributions: &[ScoreContribution]) -> Result<RiskScore, ScoreError> {
        let logit = contributions
            .iter()
            .fold(self.table.bias, |acc, contribution| acc + contribution.weight);

        let probability = sigmoid(logit).clamp(0.0, 1.0);
        if !probability.is_finite() {
            debug!(logit, "risk probability is not finite");
            return Err(ScoreError::NonFinite);
        }

        Ok(RiskScore(probability))
    }

    /// Per-question coefficients picked by the answers, in catalog order.
    pub fn explain(&self, answers: &AnswerSet) -> Result<Vec<ScoreContribution>, ScoreError> {
        let choices = validation::validate(answers).map_err(|err| {
            debug!(%err, "answer set rejected by scoring");
            err
        })?;

        let ignored: Vec<&str> = answers.unrecognized().collect();
        if !ignored.is_empty() {
            debug!(?ignored, "unrecognized identifiers ignored by scoring");
        }

        QuestionId::ALL
            .into_iter()
            .map(|question| {
                let choice = choices[question.index()];
                self.table
                    .coefficient(question, choice)
                    .map(|weight| ScoreContribution {
                        question,
                        choice,
                        weight,
                    })
                    .ok_or(ScoreError::MissingCoefficient { question, choice })
            })
            .collect()
    }
}

fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Risk probability for an answer set using the standard table; zero on invalid input.
pub fn compute_risk(answers: &AnswerSet) -> RiskScore {
    ScoringEngine::standard().score(answers)
}

/// Like [`compute_risk`] but reports why an answer set was rejected.
pub fn evaluate(answers: &AnswerSet) -> Result<RiskScore, ScoreError> {
    ScoringEngine::standard().evaluate(answers)
}
