use trueage_scoring::ScoringPolicy;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub policy: ScoringPolicy,
}

impl AppState {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }
}
