use serde::Serialize;

use super::super::questionnaire::{QuestionId, OPTIONS_PER_QUESTION};

/// Linear-model coefficients: one row per question in [`QuestionId::ALL`] order,
/// one column per answer option, plus the intercept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    pub bias: f64,
    pub coefficients: [[f64; OPTIONS_PER_QUESTION]; 12],
}

impl WeightTable {
    /// Canonical coefficients. Lower options are protective, higher options add risk.
    pub const STANDARD: WeightTable = WeightTable {
        bias: -0.2,
        coefficients: [
            [-0.3, -0.1, 0.1, 0.3], // income
            [-0.2, -0.1, 0.1, 0.2], // education
            [-0.2, 0.0, 0.2, 0.3],  // employment
            [-0.3, 0.0, 0.2, 0.4],  // sleep
            [-0.2, 0.0, 0.2, 0.3],  // appetite
            [-0.3, -0.1, 0.2, 0.4], // energy
            [-0.4, -0.1, 0.2, 0.5], // mood
            [-0.3, 0.1, 0.3, 0.4],  // interest
            [-0.4, 0.0, 0.3, 0.5],  // anxiety
            [-0.3, -0.1, 0.2, 0.4], // relationships
            [-0.3, 0.0, 0.2, 0.4],  // support
            [-0.4, 0.0, 0.3, 0.5],  // isolation
        ],
    };

    /// Coefficient for a question/option pair, `None` when the option index is out of bounds.
    pub fn coefficient(&self, question: QuestionId, choice: usize) -> Option<f64> {
        self.coefficients
            .get(question.index())
            .and_then(|row| row.get(choice))
            .copied()
    }

    pub fn row(&self, question: QuestionId) -> Option<&[f64; OPTIONS_PER_QUESTION]> {
        self.coefficients.get(question.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_increase_with_option_index() {
        for question in QuestionId::ALL {
            let row = WeightTable::STANDARD.row(question).expect("row present");
            assert!(
                row.windows(2).all(|pair| pair[0] < pair[1]),
                "{question} coefficients should be strictly increasing"
            );
        }
    }

    #[test]
    fn coefficient_lookup_rejects_out_of_bounds_choice() {
        let table = &WeightTable::STANDARD;
        assert_eq!(table.coefficient(QuestionId::Mood, 3), Some(0.5));
        assert_eq!(table.coefficient(QuestionId::Mood, 4), None);
    }
}
