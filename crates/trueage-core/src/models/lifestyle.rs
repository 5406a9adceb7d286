use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokingStatus {
    None,
    Former,
    Current,
}

impl SmokingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SmokingStatus::None => "none",
            SmokingStatus::Former => "former",
            SmokingStatus::Current => "current",
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(SmokingStatus::None),
            "former" => Ok(SmokingStatus::Former),
            "current" => Ok(SmokingStatus::Current),
            other => Err(CoreError::InvalidValue {
                field: "smoking",
                value: other.to_string(),
            }),
        }
    }
}

/// Self-reported lifestyle questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifestyleInputs {
    /// Days per week with moderate-or-harder exercise.
    pub active_days: Option<f64>,
    /// Minutes per exercise session.
    pub minutes_per_session: Option<f64>,
    /// Fruit and vegetable servings per day.
    pub fruit_veg_servings: Option<f64>,
    pub smoking: Option<SmokingStatus>,
    /// Standard alcohol units per week.
    pub alcohol_units: Option<f64>,
    /// Hours spent sitting per day.
    pub sitting_hours: Option<f64>,
}
