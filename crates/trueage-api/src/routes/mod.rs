pub mod assess;
pub mod health;
pub mod metrics;
pub mod share;
