use crate::screening::recommendations::{
    compute_recommendations, RiskTier, BASELINE_RECOMMENDATIONS, HIGH_RISK_RECOMMENDATIONS,
    MODERATE_RECOMMENDATIONS,
};
use crate::screening::scoring::RiskScore;

#[test]
fn low_scores_receive_baseline_only() {
    let list = compute_recommendations(RiskScore::new(0.1));

    assert_eq!(list, BASELINE_RECOMMENDATIONS.to_vec());
}

#[test]
fn moderate_scores_append_moderate_items() {
    let list = compute_recommendations(RiskScore::new(0.5));

    assert_eq!(list.len(), 8);
    assert_eq!(&list[..4], &BASELINE_RECOMMENDATIONS);
    assert_eq!(&list[4..], &MODERATE_RECOMMENDATIONS);
}

#[test]
fn high_scores_receive_every_item_in_order() {
    let list = compute_recommendations(RiskScore::new(0.95));

    assert_eq!(list.len(), 12);
    assert_eq!(&list[..4], &BASELINE_RECOMMENDATIONS);
    assert_eq!(&list[4..8], &MODERATE_RECOMMENDATIONS);
    assert_eq!(&list[8..], &HIGH_RISK_RECOMMENDATIONS);
}

#[test]
fn tier_boundaries_belong_to_lower_tier() {
    assert_eq!(RiskTier::from_score(RiskScore::new(0.3)), RiskTier::Low);
    assert_eq!(compute_recommendations(RiskScore::new(0.3)).len(), 4);

    assert_eq!(RiskTier::from_score(RiskScore::new(0.7)), RiskTier::Moderate);
    assert_eq!(compute_recommendations(RiskScore::new(0.7)).len(), 8);

    assert_eq!(
        RiskTier::from_score(RiskScore::new(0.700_000_1)),
        RiskTier::High
    );
}

#[test]
fn zero_and_one_map_to_extreme_tiers() {
    assert_eq!(compute_recommendations(RiskScore::ZERO).len(), 4);
    assert_eq!(compute_recommendations(RiskScore::new(1.0)).len(), 12);
}

#[test]
fn tiers_expose_display_labels() {
    assert_eq!(RiskTier::Low.label(), "Bajo");
    assert_eq!(RiskTier::Moderate.label(), "Moderado");
    assert_eq!(RiskTier::High.label(), "Alto");
    assert_eq!(RiskTier::High.color(), "red");
}
