//! Questionnaire catalog, answer collection, scoring, and results.

pub mod answers;
mod assessment;
pub mod dataset;
pub mod presentation;
pub mod questionnaire;
pub mod recommendations;
pub mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerSet};
pub use assessment::Assessment;
pub use dataset::{score_dataset, score_dataset_path, DatasetError, DatasetScore};
pub use presentation::ResultsView;
pub use questionnaire::{Category, Question, QuestionId, Questionnaire, UnknownQuestion};
pub use recommendations::{compute_recommendations, RiskTier};
pub use scoring::{compute_risk, evaluate, RiskScore, ScoreError, ScoringEngine, WeightTable};
pub use session::{QuestionnaireSession, SessionError, SessionStep};
