use super::common::*;
use crate::screening::answers::AnswerSet;
use crate::screening::Assessment;
use crate::screening::questionnaire::QuestionId;
use crate::screening::recommendations::RiskTier;
use crate::screening::scoring::{compute_risk, evaluate, RiskScore, ScoreError, ScoringEngine};

#[test]
fn all_protective_answers_score_lowest_band() {
    let score = compute_risk(&AnswerSet::uniform(0));

    assert_close(score, logistic(ALL_ZERO_LOGIT));
    assert_eq!(RiskTier::from_score(score), RiskTier::Low);
}

#[test]
fn all_least_protective_answers_score_high() {
    let score = compute_risk(&AnswerSet::uniform(3));

    assert_close(score, logistic(ALL_THREE_LOGIT));
    assert!(score.value() > 0.7);
}

#[test]
fn missing_mood_scores_zero_regardless_of_other_answers() {
    for value in 0..=3 {
        let answers = answers_without(QuestionId::Mood, value);
        assert_eq!(compute_risk(&answers), RiskScore::ZERO);
    }
}

#[test]
fn padded_identifier_does_not_stand_in_for_mood() {
    let mut answers = answers_without(QuestionId::Mood, 3);
    answers.record(" mood ", 3);

    assert_eq!(compute_risk(&answers), RiskScore::ZERO);
    assert_eq!(
        evaluate(&answers),
        Err(ScoreError::Incomplete {
            missing: vec![QuestionId::Mood]
        })
    );
    assert_eq!(answers.unrecognized().collect::<Vec<_>>(), vec![" mood "]);
}

#[test]
fn missing_mood_is_reported_by_evaluate() {
    let answers = answers_without(QuestionId::Mood, 3);

    assert_eq!(
        evaluate(&answers),
        Err(ScoreError::Incomplete {
            missing: vec![QuestionId::Mood]
        })
    );
}

#[test]
fn empty_answer_set_scores_zero() {
    assert_eq!(compute_risk(&AnswerSet::new()), RiskScore::ZERO);
}

#[test]
fn out_of_range_values_score_zero() {
    for bad in [-1, 4, 17, i64::MIN, i64::MAX] {
        let mut answers = AnswerSet::uniform(3);
        answers.record("anxiety", bad);

        assert_eq!(compute_risk(&answers), RiskScore::ZERO, "value {bad}");
        match evaluate(&answers) {
            Err(ScoreError::OutOfRange { question, value }) => {
                assert_eq!(question, "anxiety");
                assert_eq!(value, bad);
            }
            other => panic!("expected out of range for {bad}, got {other:?}"),
        }
    }
}

#[test]
fn unrecognized_identifiers_do_not_shift_the_score() {
    let baseline = compute_risk(&mixed_answers());

    let mut with_extra = mixed_answers();
    with_extra.record("hobbies", 2);

    assert_eq!(compute_risk(&with_extra), baseline);
}

#[test]
fn resubmitting_an_answer_replaces_the_prior_value() {
    let mut answers = AnswerSet::uniform(0);
    let previous = answers.record("mood", 3);
    answers.record("mood", 0);

    assert_eq!(previous, Some(0));
    assert_eq!(answers.len(), 12);
    assert_eq!(compute_risk(&answers), compute_risk(&AnswerSet::uniform(0)));
}

#[test]
fn repeated_scoring_is_deterministic() {
    let answers = mixed_answers();
    let first = compute_risk(&answers);

    for _ in 0..10 {
        assert_eq!(compute_risk(&answers), first);
    }
}

#[test]
fn contributions_sum_to_logit_minus_bias() {
    let engine = ScoringEngine::standard();
    let answers = mixed_answers();

    let contributions = engine.explain(&answers).expect("valid answers");
    assert_eq!(contributions.len(), 12);
    assert_eq!(contributions[6].question, QuestionId::Mood);
    assert_eq!(contributions[6].choice, 3);
    assert_eq!(contributions[6].weight, 0.5);

    let logit = engine.table().bias + contributions.iter().map(|c| c.weight).sum::<f64>();
    assert!((logit - 0.9).abs() < 1e-9);
    assert_close(engine.score(&answers), logistic(0.9));
}

#[test]
fn higher_options_never_lower_the_score() {
    let engine = ScoringEngine::standard();

    for question in QuestionId::ALL {
        let mut previous = RiskScore::ZERO;
        for value in 0..=3 {
            let mut answers = AnswerSet::uniform(1);
            answers.record(question.as_str(), value);
            let score = engine.score(&answers);
            assert!(score > previous, "{question} option {value} should raise risk");
            previous = score;
        }
    }
}

#[test]
fn strict_assessment_scores_from_its_own_contributions() {
    let engine = ScoringEngine::standard();
    let answers = mixed_answers();

    let assessment = Assessment::strict(&engine, &answers).expect("valid answers");
    let logit = assessment
        .contributions
        .iter()
        .fold(engine.table().bias, |acc, contribution| acc + contribution.weight);

    assert_close(assessment.score, logistic(logit));
    assert_eq!(Ok(assessment.score), evaluate(&answers));
}
