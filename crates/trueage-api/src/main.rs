use tracing_subscriber::EnvFilter;

use trueage_api::config::ServiceConfig;
use trueage_api::router;
use trueage_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        bind = %config.bind,
        activity_curve = ?config.policy.activity_curve,
        sleep_weighting = ?config.policy.sleep_weighting,
        advice_limit = config.policy.advice_limit,
        "starting trueage-api"
    );

    let app = router(AppState::new(config.policy));
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
