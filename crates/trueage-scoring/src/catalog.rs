//! Reference values for every tracked metric.
//!
//! Targets are healthy-adult reference points, standard deviations set the
//! scale of one z unit, and weights set each metric's share of the
//! biological-age adjustment. Weights need not sum to 1; they are
//! renormalized over whatever is present at scoring time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::metric::MetricId;
use trueage_core::models::subject::Sex;

use self::Direction::{HigherBetter, HigherWorse};

/// Which way a metric moves when health gets worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    HigherWorse,
    HigherBetter,
}

/// A catalog number that may differ by sex. Categories without their own
/// row use the fallback, which covers an unset sex.
#[derive(Debug, Clone, Copy)]
pub struct SexKeyed {
    by_sex: &'static [(Sex, f64)],
    fallback: f64,
}

impl SexKeyed {
    pub const fn uniform(value: f64) -> Self {
        Self {
            by_sex: &[],
            fallback: value,
        }
    }

    pub const fn keyed(by_sex: &'static [(Sex, f64)], fallback: f64) -> Self {
        Self { by_sex, fallback }
    }

    pub fn resolve(&self, sex: Option<Sex>) -> f64 {
        sex.and_then(|sex| {
            self.by_sex
                .iter()
                .find(|(category, _)| *category == sex)
                .map(|(_, value)| *value)
        })
        .unwrap_or(self.fallback)
    }
}

/// Static catalog row.
#[derive(Debug, Clone, Copy)]
pub struct MetricEntry {
    pub id: MetricId,
    pub label: &'static str,
    pub unit: &'static str,
    pub target: SexKeyed,
    pub standard_deviation: f64,
    pub weight: SexKeyed,
    pub direction: Direction,
}

/// A catalog row resolved for one subject's sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MetricDefinition {
    pub id: MetricId,
    pub label: String,
    pub unit: String,
    pub target: f64,
    pub standard_deviation: f64,
    pub weight: f64,
    pub direction: Direction,
}

impl MetricEntry {
    pub fn resolve(&self, sex: Option<Sex>) -> MetricDefinition {
        MetricDefinition {
            id: self.id,
            label: self.label.to_string(),
            unit: self.unit.to_string(),
            target: self.target.resolve(sex),
            standard_deviation: self.standard_deviation,
            weight: self.weight.resolve(sex),
            direction: self.direction,
        }
    }
}

const fn row(
    id: MetricId,
    label: &'static str,
    unit: &'static str,
    target: SexKeyed,
    standard_deviation: f64,
    weight: f64,
    direction: Direction,
) -> MetricEntry {
    MetricEntry {
        id,
        label,
        unit,
        target,
        standard_deviation,
        weight: SexKeyed::uniform(weight),
        direction,
    }
}

// Rows are in `MetricId` declaration order so `entry` can index directly.
static CATALOG: [MetricEntry; 17] = [
    row(MetricId::Bmi, "BMI", "kg/m²", SexKeyed::uniform(22.0), 3.5, 0.10, HigherWorse),
    row(MetricId::Whtr, "Waist-to-height ratio", "", SexKeyed::uniform(0.46), 0.06, 0.10, HigherWorse),
    row(MetricId::Sbp, "Systolic blood pressure", "mmHg", SexKeyed::uniform(110.0), 12.0, 0.09, HigherWorse),
    row(MetricId::Dbp, "Diastolic blood pressure", "mmHg", SexKeyed::uniform(70.0), 8.0, 0.09, HigherWorse),
    row(MetricId::Rhr, "Resting heart rate", "bpm", SexKeyed::uniform(60.0), 10.0, 0.06, HigherWorse),
    row(
        MetricId::Vo2max,
        "VO2max",
        "mL/kg/min",
        SexKeyed::keyed(&[(Sex::Male, 42.0)], 35.0),
        8.0,
        0.09,
        HigherBetter,
    ),
    row(MetricId::Hdl, "HDL", "mg/dL", SexKeyed::uniform(60.0), 15.0, 0.07, HigherBetter),
    row(MetricId::Ldl, "LDL", "mg/dL", SexKeyed::uniform(70.0), 30.0, 0.08, HigherWorse),
    row(MetricId::Tg, "Triglycerides", "mg/dL", SexKeyed::uniform(90.0), 50.0, 0.05, HigherWorse),
    row(MetricId::Hba1c, "HbA1c", "%", SexKeyed::uniform(5.2), 0.4, 0.10, HigherWorse),
    row(MetricId::Fpg, "Fasting glucose", "mg/dL", SexKeyed::uniform(85.0), 10.0, 0.06, HigherWorse),
    row(MetricId::Crp, "hs-CRP", "mg/L", SexKeyed::uniform(0.6), 0.7, 0.08, HigherWorse),
    row(MetricId::Egfr, "eGFR", "mL/min/1.73m²", SexKeyed::uniform(100.0), 15.0, 0.07, HigherBetter),
    row(MetricId::Alt, "ALT", "U/L", SexKeyed::uniform(20.0), 10.0, 0.04, HigherWorse),
    row(MetricId::Ast, "AST", "U/L", SexKeyed::uniform(22.0), 8.0, 0.03, HigherWorse),
    row(
        MetricId::Uric,
        "Uric acid",
        "mg/dL",
        SexKeyed::keyed(&[(Sex::Male, 5.0)], 4.5),
        1.2,
        0.04,
        HigherWorse,
    ),
    row(MetricId::Sleep, "Sleep", "h", SexKeyed::uniform(7.5), 1.0, 0.02, HigherBetter),
];

/// Every catalog row, in `MetricId::ALL` order.
pub fn catalog() -> &'static [MetricEntry] {
    &CATALOG
}

pub fn entry(id: MetricId) -> &'static MetricEntry {
    &CATALOG[id as usize]
}

pub fn definition(id: MetricId, sex: Option<Sex>) -> MetricDefinition {
    entry(id).resolve(sex)
}

/// Sum of every catalog weight; the denominator of coverage.
pub fn total_weight(sex: Option<Sex>) -> f64 {
    CATALOG.iter().map(|e| e.weight.resolve(sex)).sum()
}
