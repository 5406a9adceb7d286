//! Biological age from weighted, clamped z-scores.
//!
//! Each present metric is standardized against its catalog target so that a
//! positive z always means "worse than target". The weighted mean z is
//! converted to years at [`YEARS_PER_SD`] and added to chronological age.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::metric::MetricId;
use trueage_core::models::subject::Subject;

use crate::catalog::{self, Direction, MetricDefinition};
use crate::error::Unavailable;

/// Years of age adjustment per standard deviation of weighted deviation.
pub const YEARS_PER_SD: f64 = 5.0;

/// z-scores are clamped to ±this many standard deviations.
pub const Z_LIMIT: f64 = 3.0;

pub const MIN_BIO_AGE: f64 = 10.0;
pub const MAX_BIO_AGE: f64 = 110.0;

/// Whether a metric pushes the estimate above or below chronological age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Impact {
    Older,
    Younger,
}

/// One metric's share of the biological-age adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Contribution {
    pub id: MetricId,
    pub label: String,
    pub value: f64,
    pub target: f64,
    /// Clamped to `[-Z_LIMIT, Z_LIMIT]`; positive is worse than target.
    pub z: f64,
    pub normalized_weight: f64,
    pub years: f64,
    pub direction: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BioAgeScore {
    pub bio_age: f64,
    /// `bio_age - age`.
    pub delta: f64,
    /// 0.2–1, driven by how much of the catalog weight was measured.
    pub confidence: f64,
    /// Sorted by descending `|years|`, most impactful first.
    pub breakdown: Vec<Contribution>,
}

pub fn score_bio_age(subject: &Subject) -> Result<BioAgeScore, Unavailable> {
    let age = subject.age().ok_or(Unavailable::MissingAge)?;

    let included: Vec<(MetricDefinition, f64)> = MetricId::ALL
        .into_iter()
        .filter_map(|id| {
            let def = catalog::definition(id, subject.sex);
            let value = subject.metric(id)?;
            (value.is_finite() && def.standard_deviation.is_finite() && def.weight.is_finite())
                .then_some((def, value))
        })
        .collect();

    let total_weight: f64 = included.iter().map(|(def, _)| def.weight).sum();
    if total_weight <= 0.0 {
        return Err(Unavailable::NoUsableMetrics);
    }

    let mut weighted_z = 0.0;
    let mut breakdown: Vec<Contribution> = included
        .iter()
        .map(|(def, value)| {
            let raw_z = match def.direction {
                Direction::HigherWorse => (value - def.target) / def.standard_deviation,
                Direction::HigherBetter => (def.target - value) / def.standard_deviation,
            };
            let z = raw_z.clamp(-Z_LIMIT, Z_LIMIT);
            let normalized_weight = def.weight / total_weight;
            weighted_z += z * normalized_weight;

            Contribution {
                id: def.id,
                label: def.label.clone(),
                value: *value,
                target: def.target,
                z,
                normalized_weight,
                years: z * YEARS_PER_SD * normalized_weight,
                direction: if z >= 0.0 { Impact::Older } else { Impact::Younger },
            }
        })
        .collect();

    let bio_age = (age + weighted_z * YEARS_PER_SD).clamp(MIN_BIO_AGE, MAX_BIO_AGE);
    let confidence = confidence(
        total_weight / catalog::total_weight(subject.sex),
        breakdown.len(),
    );

    // Stable sort: ties keep catalog order.
    breakdown.sort_by(|a, b| b.years.abs().total_cmp(&a.years.abs()));

    Ok(BioAgeScore {
        bio_age,
        delta: bio_age - age,
        confidence,
        breakdown,
    })
}

/// Confidence from weight coverage, penalized when very few metrics are in.
pub fn confidence(coverage: f64, metric_count: usize) -> f64 {
    let coverage = coverage.clamp(0.0, 1.0);
    let mut confidence = (0.35 + 0.65 * coverage).clamp(0.2, 1.0);
    if metric_count < 5 {
        confidence *= 0.85;
    }
    if metric_count < 3 {
        confidence *= 0.7;
    }
    confidence.clamp(0.2, 1.0)
}
