use std::env;
use std::net::SocketAddr;

use trueage_scoring::ScoringPolicy;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Service settings, read from `TRUEAGE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub policy: ScoringPolicy,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys take their defaults;
    /// values that are set but invalid are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("TRUEAGE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid TRUEAGE_BIND {bind_raw:?}: {e}"))?;

        let mut policy = ScoringPolicy::default();
        if let Some(limit) = get("TRUEAGE_ADVICE_LIMIT") {
            policy.advice_limit = limit
                .trim()
                .parse()
                .map_err(|e| eyre::eyre!("invalid TRUEAGE_ADVICE_LIMIT {limit:?}: {e}"))?;
        }
        if let Some(curve) = get("TRUEAGE_ACTIVITY_CURVE") {
            policy.activity_curve = curve.parse()?;
        }
        if let Some(weighting) = get("TRUEAGE_SLEEP_WEIGHTING") {
            policy.sleep_weighting = weighting.parse()?;
        }

        Ok(Self { bind, policy })
    }
}
