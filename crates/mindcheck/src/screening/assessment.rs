use serde::Serialize;
use tracing::info;

use super::answers::AnswerSet;
use super::recommendations::{compute_recommendations, RiskTier};
use super::scoring::{RiskScore, ScoreContribution, ScoreError, ScoringEngine};

/// Outcome of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: RiskScore,
    pub tier: RiskTier,
    pub recommendations: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributions: Vec<ScoreContribution>,
    /// Set when the answers were rejected and the score fell back to zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<ScoreError>,
}

impl Assessment {
    /// Fail-safe assessment: invalid answers score zero and land in the low tier.
    pub fn from_answers(engine: &ScoringEngine, answers: &AnswerSet) -> Self {
        match Self::strict(engine, answers) {
            Ok(assessment) => assessment,
            Err(rejection) => {
                let score = RiskScore::ZERO;
                Self {
                    score,
                    tier: RiskTier::from_score(score),
                    recommendations: compute_recommendations(score),
                    contributions: Vec::new(),
                    rejection: Some(rejection),
                }
            }
        }
    }

    /// Assessment that surfaces validation failures instead of scoring them as zero.
    pub fn strict(engine: &ScoringEngine, answers: &AnswerSet) -> Result<Self, ScoreError> {
        let contributions = engine.explain(answers)?;
        let score = engine.probability(&contributions)?;
        let tier = RiskTier::from_score(score);

        info!(tier = tier.label(), score = score.value(), "assessment scored");

        Ok(Self {
            score,
            tier,
            recommendations: compute_recommendations(score),
            contributions,
            rejection: None,
        })
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}
