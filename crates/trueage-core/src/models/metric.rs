use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the biomarker or lifestyle metrics tracked by the
/// biological-age model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MetricId {
    Bmi,
    Whtr,
    Sbp,
    Dbp,
    Rhr,
    Vo2max,
    Hdl,
    Ldl,
    Tg,
    Hba1c,
    Fpg,
    Crp,
    Egfr,
    Alt,
    Ast,
    Uric,
    Sleep,
}

impl MetricId {
    /// All metrics in catalog order.
    pub const ALL: [MetricId; 17] = [
        MetricId::Bmi,
        MetricId::Whtr,
        MetricId::Sbp,
        MetricId::Dbp,
        MetricId::Rhr,
        MetricId::Vo2max,
        MetricId::Hdl,
        MetricId::Ldl,
        MetricId::Tg,
        MetricId::Hba1c,
        MetricId::Fpg,
        MetricId::Crp,
        MetricId::Egfr,
        MetricId::Alt,
        MetricId::Ast,
        MetricId::Uric,
        MetricId::Sleep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricId::Bmi => "bmi",
            MetricId::Whtr => "whtr",
            MetricId::Sbp => "sbp",
            MetricId::Dbp => "dbp",
            MetricId::Rhr => "rhr",
            MetricId::Vo2max => "vo2max",
            MetricId::Hdl => "hdl",
            MetricId::Ldl => "ldl",
            MetricId::Tg => "tg",
            MetricId::Hba1c => "hba1c",
            MetricId::Fpg => "fpg",
            MetricId::Crp => "crp",
            MetricId::Egfr => "egfr",
            MetricId::Alt => "alt",
            MetricId::Ast => "ast",
            MetricId::Uric => "uric",
            MetricId::Sleep => "sleep",
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMetric(s.to_string()))
    }
}
