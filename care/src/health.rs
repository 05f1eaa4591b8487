//! Health badge for a plant, derived from its most recent analysis.
//!
//! DESIGN
//! ======
//! Every view that shows a badge (list rows, grid cards, the detail header)
//! calls [`classify`], so the same plant can never show two different states.

use std::fmt;

use crate::models::Recommendation;

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

/// Disease or symptom words that escalate a finding to [`HealthStatus::Diseased`].
pub const SEVERE_KEYWORDS: [&str; 5] = ["virus", "fungi", "rot", "blight", "bacterial"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Healthy,
    PotentialRisk,
    Diseased,
}

impl HealthStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::PotentialRisk => "Potential Risk",
            Self::Diseased => "Diseased",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a plant from its latest recommendation, if any.
///
/// A named disease decides on its own unless it mentions "healthy". With no
/// disease named, the structured symptoms list decides: non-empty means the
/// plant is not healthy. Raw (unparsed) suggestion text never contributes.
#[must_use]
pub fn classify(latest: Option<&Recommendation>) -> HealthStatus {
    let Some(rec) = latest else {
        return HealthStatus::Healthy;
    };

    let disease = rec.disease.as_deref().map_or("", str::trim);
    if disease.is_empty() {
        let symptoms = rec.suggestion_text.symptoms();
        if symptoms.is_empty() {
            return HealthStatus::Healthy;
        }
        return severity(disease, symptoms);
    }

    if disease.to_lowercase().contains("healthy") {
        return HealthStatus::Healthy;
    }
    severity(disease, &[])
}

fn severity(disease: &str, symptoms: &[String]) -> HealthStatus {
    let text = format!("{disease} {}", symptoms.join(" ")).to_lowercase();
    if SEVERE_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        HealthStatus::Diseased
    } else {
        HealthStatus::PotentialRisk
    }
}
