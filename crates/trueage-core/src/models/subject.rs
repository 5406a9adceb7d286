use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::lifestyle::LifestyleInputs;
use super::metric::MetricId;
use super::sleep::SleepInputs;
use crate::derived;
use crate::error::CoreError;

/// Biological sex as used by the sex-specific reference equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse a form value; anything but `male` / `female` is unset.
    pub fn parse_form(value: &str) -> Option<Sex> {
        value.parse().ok()
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(CoreError::InvalidValue {
                field: "sex",
                value: other.to_string(),
            }),
        }
    }
}

/// One person's measurements for a single assessment.
///
/// Every numeric field is optional; lab values are already normalized to
/// mg/dL (see [`crate::units`]). Non-finite numbers are treated exactly like
/// `None` by every accessor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subject {
    /// Chronological age in years.
    pub age: Option<f64>,
    pub sex: Option<Sex>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    /// Systolic blood pressure, mmHg.
    pub systolic_bp: Option<f64>,
    /// Diastolic blood pressure, mmHg.
    pub diastolic_bp: Option<f64>,
    /// Resting heart rate, bpm.
    pub resting_hr: Option<f64>,
    /// Maximal oxygen uptake, mL/kg/min.
    pub vo2max: Option<f64>,
    /// Average nightly sleep, hours.
    pub sleep_hours: Option<f64>,
    /// Glycated hemoglobin, %.
    pub hba1c: Option<f64>,
    /// Fasting plasma glucose, mg/dL.
    pub fasting_glucose: Option<f64>,
    pub ldl: Option<f64>,
    pub hdl: Option<f64>,
    pub triglycerides: Option<f64>,
    /// High-sensitivity C-reactive protein, mg/L.
    pub hs_crp: Option<f64>,
    /// Serum creatinine, mg/dL.
    pub creatinine: Option<f64>,
    pub alt: Option<f64>,
    pub ast: Option<f64>,
    /// Uric acid, mg/dL.
    pub uric_acid: Option<f64>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl Subject {
    /// Chronological age, if known and finite.
    pub fn age(&self) -> Option<f64> {
        finite(self.age)
    }

    pub fn bmi(&self) -> Option<f64> {
        derived::bmi(finite(self.height_cm)?, finite(self.weight_kg)?)
    }

    pub fn waist_to_height(&self) -> Option<f64> {
        derived::waist_to_height(finite(self.height_cm)?, finite(self.waist_cm)?)
    }

    pub fn egfr(&self) -> Option<f64> {
        derived::egfr_ckd_epi_2021(self.age()?, self.sex, finite(self.creatinine)?)
    }

    /// The value of a tracked metric, deriving BMI, WHtR and eGFR on demand.
    pub fn metric(&self, id: MetricId) -> Option<f64> {
        match id {
            MetricId::Bmi => self.bmi(),
            MetricId::Whtr => self.waist_to_height(),
            MetricId::Sbp => finite(self.systolic_bp),
            MetricId::Dbp => finite(self.diastolic_bp),
            MetricId::Rhr => finite(self.resting_hr),
            MetricId::Vo2max => finite(self.vo2max),
            MetricId::Hdl => finite(self.hdl),
            MetricId::Ldl => finite(self.ldl),
            MetricId::Tg => finite(self.triglycerides),
            MetricId::Hba1c => finite(self.hba1c),
            MetricId::Fpg => finite(self.fasting_glucose),
            MetricId::Crp => finite(self.hs_crp),
            MetricId::Egfr => self.egfr(),
            MetricId::Alt => finite(self.alt),
            MetricId::Ast => finite(self.ast),
            MetricId::Uric => finite(self.uric_acid),
            MetricId::Sleep => finite(self.sleep_hours),
        }
    }
}

/// Everything the scorers read for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentInput {
    pub subject: Subject,
    pub lifestyle: LifestyleInputs,
    pub sleep: SleepInputs,
}
