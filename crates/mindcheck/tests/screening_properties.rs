//! Property checks for the scoring policy and tiered recommendations.

use mindcheck::screening::recommendations::BASELINE_RECOMMENDATIONS;
use mindcheck::screening::{
    compute_recommendations, compute_risk, AnswerSet, QuestionId, RiskScore,
};
use proptest::prelude::*;

fn valid_answers() -> impl Strategy<Value = AnswerSet> {
    prop::array::uniform12(0i64..=3).prop_map(|values| {
        QuestionId::ALL
            .into_iter()
            .zip(values)
            .collect::<AnswerSet>()
    })
}

fn out_of_range_value() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 4i64..=i64::MAX]
}

proptest! {
    #[test]
    fn valid_answer_sets_score_within_unit_interval(answers in valid_answers()) {
        let score = compute_risk(&answers).value();
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(score > 0.0);
    }

    #[test]
    fn scoring_is_deterministic(answers in valid_answers()) {
        prop_assert_eq!(compute_risk(&answers), compute_risk(&answers));
    }

    #[test]
    fn any_missing_question_scores_zero(
        answers in valid_answers(),
        dropped in prop::sample::subsequence(QuestionId::ALL.to_vec(), 1..=12),
    ) {
        let mut answers = answers;
        for question in dropped {
            answers.remove(question);
        }
        prop_assert_eq!(compute_risk(&answers), RiskScore::ZERO);
    }

    #[test]
    fn any_out_of_range_value_scores_zero(
        answers in valid_answers(),
        index in 0usize..12,
        bad in out_of_range_value(),
    ) {
        let mut answers = answers;
        answers.record(QuestionId::ALL[index].as_str(), bad);
        prop_assert_eq!(compute_risk(&answers), RiskScore::ZERO);
    }

    #[test]
    fn recommendation_length_follows_tier(score in 0.0f64..=1.0) {
        let list = compute_recommendations(RiskScore::new(score));
        let expected = if score <= 0.3 {
            4
        } else if score <= 0.7 {
            8
        } else {
            12
        };
        prop_assert_eq!(list.len(), expected);
        prop_assert_eq!(&list[..4], &BASELINE_RECOMMENDATIONS[..]);
    }

    #[test]
    fn longer_lists_extend_shorter_ones(low in 0.0f64..=0.3, high in 0.300_001f64..=1.0) {
        let short = compute_recommendations(RiskScore::new(low));
        let long = compute_recommendations(RiskScore::new(high));
        prop_assert!(long.len() > short.len());
        prop_assert_eq!(&long[..short.len()], &short[..]);
    }
}
