use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::answers::AnswerSet;
use super::questionnaire::QuestionId;
use super::recommendations::RiskTier;
use super::scoring::{RiskScore, ScoringEngine};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not an integer answer for '{question}'")]
    InvalidValue {
        row: usize,
        question: QuestionId,
        value: String,
    },
}

/// Score of one dataset row. `row` counts data rows from 1, excluding the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetScore {
    pub row: usize,
    pub score: RiskScore,
    pub tier: RiskTier,
}

/// Score every row of a CSV whose header names the question identifiers.
///
/// Extra columns are ignored. A missing column or blank cell leaves that question
/// unanswered, which scores the row as zero like any other incomplete answer set.
pub fn score_dataset<R: Read>(
    engine: &ScoringEngine,
    reader: R,
) -> Result<Vec<DatasetScore>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns: Vec<(QuestionId, usize)> = QuestionId::ALL
        .into_iter()
        .filter_map(|question| {
            headers
                .iter()
                .position(|header| header == question.as_str())
                .map(|index| (question, index))
        })
        .collect();

    let mut scores = Vec::new();
    for (offset, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = offset + 1;

        let mut answers = AnswerSet::new();
        for (question, index) in &columns {
            let cell = record.get(*index).unwrap_or_default();
            if cell.is_empty() {
                continue;
            }
            let value = cell
                .parse::<i64>()
                .map_err(|_| DatasetError::InvalidValue {
                    row,
                    question: *question,
                    value: cell.to_string(),
                })?;
            answers.record(question.as_str(), value);
        }

        let score = engine.score(&answers);
        scores.push(DatasetScore {
            row,
            score,
            tier: RiskTier::from_score(score),
        });
    }

    info!(rows = scores.len(), "dataset scored");
    Ok(scores)
}

pub fn score_dataset_path<P: AsRef<Path>>(
    engine: &ScoringEngine,
    path: P,
) -> Result<Vec<DatasetScore>, DatasetError> {
    let file = std::fs::File::open(path)?;
    score_dataset(engine, file)
}

/// Row count per tier; tiers with no rows are omitted.
pub fn tier_counts(scores: &[DatasetScore]) -> BTreeMap<RiskTier, usize> {
    let mut counts = BTreeMap::new();
    for entry in scores {
        *counts.entry(entry.tier).or_insert(0) += 1;
    }
    counts
}
