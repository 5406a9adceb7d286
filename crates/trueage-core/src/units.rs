//! Lab unit normalization.
//!
//! Every lab value is scored in mg/dL. Conversions are one-directional:
//! values entered in the alternate unit are scaled into mg/dL, values
//! already in mg/dL pass through untouched. No rounding is applied.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// mmol/L → mg/dL for glucose.
pub const GLUCOSE_MMOL_FACTOR: f64 = 18.0;
/// mmol/L → mg/dL for LDL / HDL cholesterol.
pub const CHOLESTEROL_MMOL_FACTOR: f64 = 38.67;
/// mmol/L → mg/dL for triglycerides.
pub const TRIGLYCERIDES_MMOL_FACTOR: f64 = 88.57;
/// µmol/L per mg/dL for creatinine.
pub const CREATININE_UMOL_DIVISOR: f64 = 88.4;

/// Unit a glucose value was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GlucoseUnit {
    #[default]
    #[serde(rename = "mgdl")]
    MgDl,
    #[serde(rename = "mmol")]
    Mmol,
}

/// Unit a lipid panel (LDL, HDL, triglycerides) was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LipidUnit {
    #[default]
    #[serde(rename = "mgdl")]
    MgDl,
    #[serde(rename = "mmol")]
    Mmol,
}

/// Unit a serum creatinine value was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CreatinineUnit {
    #[default]
    #[serde(rename = "mgdl")]
    MgDl,
    #[serde(rename = "umol")]
    Umol,
}

// Form codes other than the alternate unit fall back to mg/dL, so parsing
// never fails.

impl FromStr for GlucoseUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "mmol" => Self::Mmol,
            _ => Self::MgDl,
        })
    }
}

impl FromStr for LipidUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "mmol" => Self::Mmol,
            _ => Self::MgDl,
        })
    }
}

impl FromStr for CreatinineUnit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "umol" => Self::Umol,
            _ => Self::MgDl,
        })
    }
}

impl GlucoseUnit {
    pub fn code(self) -> &'static str {
        match self {
            Self::MgDl => "mgdl",
            Self::Mmol => "mmol",
        }
    }
}

impl LipidUnit {
    pub fn code(self) -> &'static str {
        match self {
            Self::MgDl => "mgdl",
            Self::Mmol => "mmol",
        }
    }
}

impl CreatinineUnit {
    pub fn code(self) -> &'static str {
        match self {
            Self::MgDl => "mgdl",
            Self::Umol => "umol",
        }
    }
}

/// Fasting glucose in mg/dL. `None` if `value` is not finite.
pub fn glucose_to_mg_dl(value: f64, unit: GlucoseUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        GlucoseUnit::MgDl => value,
        GlucoseUnit::Mmol => value * GLUCOSE_MMOL_FACTOR,
    })
}

/// LDL or HDL cholesterol in mg/dL. `None` if `value` is not finite.
pub fn cholesterol_to_mg_dl(value: f64, unit: LipidUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        LipidUnit::MgDl => value,
        LipidUnit::Mmol => value * CHOLESTEROL_MMOL_FACTOR,
    })
}

/// Triglycerides in mg/dL. `None` if `value` is not finite.
pub fn triglycerides_to_mg_dl(value: f64, unit: LipidUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        LipidUnit::MgDl => value,
        LipidUnit::Mmol => value * TRIGLYCERIDES_MMOL_FACTOR,
    })
}

/// Serum creatinine in mg/dL. `None` if `value` is not finite.
pub fn creatinine_to_mg_dl(value: f64, unit: CreatinineUnit) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some(match unit {
        CreatinineUnit::MgDl => value,
        CreatinineUnit::Umol => value / CREATININE_UMOL_DIVISOR,
    })
}
