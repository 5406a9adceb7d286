use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trueage_core::models::subject::AssessmentInput;

use crate::Scorer;
use crate::advice::select_advice;
use crate::bio_age::BioAgeScore;
use crate::error::Unavailable;
use crate::fitness::FitnessAge;
use crate::lifestyle::LifestyleScore;
use crate::policy::ScoringPolicy;
use crate::scorers::{BioAgeScorer, FitnessScorer, LifestyleScorer, SleepScorer};
use crate::sleep::SleepScore;

/// A scorer result, or the reason it could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Available(T),
    Unavailable(Unavailable),
}

impl<T> Outcome<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            Outcome::Available(value) => Some(value),
            Outcome::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Outcome::Available(_))
    }
}

impl<T> From<Result<T, Unavailable>> for Outcome<T> {
    fn from(result: Result<T, Unavailable>) -> Self {
        match result {
            Ok(value) => Outcome::Available(value),
            Err(reason) => Outcome::Unavailable(reason),
        }
    }
}

/// Every score for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentReport {
    pub bio_age: Outcome<BioAgeScore>,
    pub lifestyle: Outcome<LifestyleScore>,
    pub fitness: Outcome<FitnessAge>,
    pub sleep: Outcome<SleepScore>,
    /// Recommendations for the biological-age factors; empty when the
    /// biological age is unavailable.
    pub advice: Vec<String>,
}

fn run<S: Scorer>(scorer: &S, input: &AssessmentInput) -> Outcome<S::Output> {
    let result = scorer.score(input);
    if let Err(reason) = &result {
        tracing::debug!(scorer = scorer.id(), name = scorer.name(), %reason, "score unavailable");
    }
    result.into()
}

/// Run all four scorers over one input.
pub fn assess(input: &AssessmentInput, policy: &ScoringPolicy) -> AssessmentReport {
    let bio_age = run(&BioAgeScorer, input);
    let lifestyle = run(&LifestyleScorer::new(policy.activity_curve), input);
    let fitness = run(&FitnessScorer, input);
    let sleep = run(&SleepScorer::new(policy.sleep_weighting), input);

    let advice = bio_age
        .available()
        .map(|score| select_advice(score, policy.advice_limit))
        .unwrap_or_default();

    AssessmentReport {
        bio_age,
        lifestyle,
        fitness,
        sleep,
        advice,
    }
}
