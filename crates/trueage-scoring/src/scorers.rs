//! [`Scorer`] implementations wrapping the scoring functions.

use trueage_core::models::subject::AssessmentInput;

use crate::Scorer;
use crate::bio_age::{BioAgeScore, score_bio_age};
use crate::error::Unavailable;
use crate::fitness::{FitnessAge, score_fitness};
use crate::lifestyle::{ActivityCurve, LifestyleScore, score_lifestyle};
use crate::sleep::{SleepScore, SleepWeighting, score_sleep};

pub struct BioAgeScorer;

impl Scorer for BioAgeScorer {
    type Output = BioAgeScore;

    fn id(&self) -> &str {
        "bio_age"
    }

    fn name(&self) -> &str {
        "Biological age"
    }

    fn score(&self, input: &AssessmentInput) -> Result<BioAgeScore, Unavailable> {
        score_bio_age(&input.subject)
    }
}

pub struct LifestyleScorer {
    curve: ActivityCurve,
}

impl LifestyleScorer {
    pub fn new(curve: ActivityCurve) -> Self {
        Self { curve }
    }
}

impl Scorer for LifestyleScorer {
    type Output = LifestyleScore;

    fn id(&self) -> &str {
        "lifestyle"
    }

    fn name(&self) -> &str {
        "Lifestyle age"
    }

    fn score(&self, input: &AssessmentInput) -> Result<LifestyleScore, Unavailable> {
        score_lifestyle(input.subject.age, &input.lifestyle, self.curve)
    }
}

pub struct FitnessScorer;

impl Scorer for FitnessScorer {
    type Output = FitnessAge;

    fn id(&self) -> &str {
        "fitness"
    }

    fn name(&self) -> &str {
        "Cardiorespiratory fitness age"
    }

    fn score(&self, input: &AssessmentInput) -> Result<FitnessAge, Unavailable> {
        score_fitness(&input.subject)
    }
}

pub struct SleepScorer {
    weighting: SleepWeighting,
}

impl SleepScorer {
    pub fn new(weighting: SleepWeighting) -> Self {
        Self { weighting }
    }
}

impl Scorer for SleepScorer {
    type Output = SleepScore;

    fn id(&self) -> &str {
        "sleep"
    }

    fn name(&self) -> &str {
        "Sleep score"
    }

    fn score(&self, input: &AssessmentInput) -> Result<SleepScore, Unavailable> {
        score_sleep(input.subject.sleep_hours, &input.sleep, self.weighting)
    }
}
