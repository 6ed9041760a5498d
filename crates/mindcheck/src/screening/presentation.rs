//! Display-only chart data derived from an assessment.
//!
//! The per-category breakdown and the treatment projection are cosmetic: both
//! add random jitter, so they are produced from a caller-supplied RNG and never
//! feed back into scoring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::assessment::Assessment;
use super::questionnaire::Category;
use super::recommendations::RiskTier;
use super::scoring::RiskScore;

/// Lowest risk level the treated projection will fall to.
pub const PROJECTION_FLOOR: f64 = 20.0;
pub const PROJECTION_MONTHS: [&str; 6] = [
    "Actual", "1 mes", "2 meses", "3 meses", "4 meses", "5 meses",
];
const CATEGORY_JITTER: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBanner {
    pub tier: RiskTier,
    pub level: &'static str,
    pub color: &'static str,
    pub headline: String,
    pub detail: String,
}

impl RiskBanner {
    pub fn for_tier(tier: RiskTier) -> Self {
        let level = tier.label();
        Self {
            tier,
            level,
            color: tier.color(),
            headline: format!("Nivel de Riesgo: {level}"),
            detail: format!(
                "Basado en sus respuestas, se ha identificado un nivel de riesgo {}.",
                level.to_lowercase()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRisk {
    pub category: Category,
    pub label: &'static str,
    pub risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month: &'static str,
    pub with_treatment: f64,
    pub without_treatment: f64,
}

/// Everything the results page renders for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub banner: RiskBanner,
    pub score_pct: f64,
    pub recommendations: Vec<&'static str>,
    pub category_breakdown: Vec<CategoryRisk>,
    pub projection: Vec<ProjectionPoint>,
}

impl ResultsView {
    pub fn build<R: Rng + ?Sized>(assessment: &Assessment, rng: &mut R) -> Self {
        Self {
            banner: RiskBanner::for_tier(assessment.tier),
            score_pct: round_one_decimal(assessment.score.percent()),
            recommendations: assessment.recommendations.clone(),
            category_breakdown: category_breakdown(assessment.score, rng),
            projection: projection(assessment.score, rng),
        }
    }
}

/// RNG for chart jitter: reproducible when seeded, entropy-backed otherwise.
pub fn chart_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Overall score spread across the four sections with ±10 points of jitter, clamped to 0..=100.
pub fn category_breakdown<R: Rng + ?Sized>(score: RiskScore, rng: &mut R) -> Vec<CategoryRisk> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let jitter = rng.gen_range(-CATEGORY_JITTER..CATEGORY_JITTER);
            CategoryRisk {
                category,
                label: category.chart_label(),
                risk: (score.percent() + jitter).clamp(0.0, 100.0),
            }
        })
        .collect()
}

/// Monthly points a respondent could expect when following the recommendations.
pub fn improvement_rate(tier: RiskTier) -> f64 {
    match tier {
        RiskTier::Low => 5.0,
        RiskTier::Moderate => 10.0,
        RiskTier::High => 15.0,
    }
}

/// Six-month treated curve with diminishing, jittered improvements against a flat untreated line.
pub fn projection<R: Rng + ?Sized>(score: RiskScore, rng: &mut R) -> Vec<ProjectionPoint> {
    let baseline = score.percent();
    let rate = improvement_rate(RiskTier::from_score(score));
    let mut current = baseline;

    PROJECTION_MONTHS
        .into_iter()
        .enumerate()
        .map(|(month_index, month)| {
            if month_index > 0 {
                let improvement = (rate / month_index as f64) * rng.gen_range(0.75..1.25);
                let floor = PROJECTION_FLOOR.min(current);
                current = (current - improvement).max(floor);
            }

            ProjectionPoint {
                month,
                with_treatment: round_one_decimal(current),
                without_treatment: round_one_decimal(baseline),
            }
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
