use serde::Serialize;

use super::scoring::RiskScore;

/// Upper bound (inclusive) of the low tier.
pub const LOW_TIER_MAX: f64 = 0.3;
/// Upper bound (inclusive) of the moderate tier.
pub const MODERATE_TIER_MAX: f64 = 0.7;

pub const BASELINE_RECOMMENDATIONS: [&str; 4] = [
    "Mantener una rutina diaria estructurada",
    "Practicar ejercicio regularmente",
    "Mantener una dieta equilibrada",
    "Establecer horarios regulares de sueño",
];

pub const MODERATE_RECOMMENDATIONS: [&str; 4] = [
    "Considerar unirse a grupos de apoyo",
    "Practicar técnicas de manejo del estrés",
    "Mantener un diario de emociones",
    "Establecer metas pequeñas y alcanzables",
];

pub const HIGH_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Buscar ayuda profesional de inmediato",
    "Contactar a un terapeuta o psicólogo",
    "Informar a familiares o amigos cercanos sobre su situación",
    "Considerar una evaluación psiquiátrica",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Both bounds belong to the lower tier.
    pub fn from_score(score: RiskScore) -> Self {
        let value = score.value();
        if value <= LOW_TIER_MAX {
            Self::Low
        } else if value <= MODERATE_TIER_MAX {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Bajo",
            Self::Moderate => "Moderado",
            Self::High => "Alto",
        }
    }

    /// Colour key used by the results banner.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Moderate => "yellow",
            Self::High => "red",
        }
    }
}

/// Cumulative advice list: baseline, then moderate, then high-risk items as the tier rises.
pub fn compute_recommendations(score: RiskScore) -> Vec<&'static str> {
    let tier = RiskTier::from_score(score);
    let mut recommendations = Vec::with_capacity(12);

    recommendations.extend(BASELINE_RECOMMENDATIONS);
    if tier >= RiskTier::Moderate {
        recommendations.extend(MODERATE_RECOMMENDATIONS);
    }
    if tier == RiskTier::High {
        recommendations.extend(HIGH_RISK_RECOMMENDATIONS);
    }

    recommendations
}
