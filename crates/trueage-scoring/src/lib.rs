//! trueage-scoring
//!
//! The TrueAge scoring engine. Pure functions only: every scorer takes an
//! [`AssessmentInput`] snapshot and returns a result record or the reason
//! it is unavailable. Scorers are independent of each other and can run in
//! any order.

pub mod advice;
pub mod bio_age;
pub mod catalog;
pub mod composite;
pub mod error;
pub mod fitness;
pub mod lifestyle;
pub mod policy;
pub mod report;
pub mod scorers;
pub mod sleep;

use trueage_core::models::subject::AssessmentInput;

use error::Unavailable;

pub use policy::ScoringPolicy;
pub use report::{AssessmentReport, Outcome, assess};

/// Trait implemented by each scorer.
pub trait Scorer: Send + Sync {
    type Output;

    /// Stable identifier (e.g., "bio_age", "sleep").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Score one assessment.
    fn score(&self, input: &AssessmentInput) -> Result<Self::Output, Unavailable>;
}
