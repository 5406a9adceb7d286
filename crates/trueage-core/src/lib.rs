//! trueage-core
//!
//! Pure domain types for the TrueAge self-assessment engine: the subject
//! record, lifestyle and sleep questionnaires, unit normalization, derived
//! body metrics, and the flat form state used for save/load/share.
//! No scoring logic lives here; see `trueage-scoring`.

pub mod derived;
pub mod error;
pub mod models;
pub mod units;
