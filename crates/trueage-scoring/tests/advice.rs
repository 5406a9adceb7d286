use trueage_core::models::metric::MetricId;
use trueage_scoring::advice::{AFFIRMATION, advice_for, select_advice};
use trueage_scoring::bio_age::{BioAgeScore, Contribution, Impact};

fn contribution(id: MetricId, years: f64) -> Contribution {
    Contribution {
        id,
        label: id.to_string(),
        value: 0.0,
        target: 0.0,
        z: years,
        normalized_weight: 0.2,
        years,
        direction: if years >= 0.0 { Impact::Older } else { Impact::Younger },
    }
}

fn score(breakdown: Vec<Contribution>) -> BioAgeScore {
    BioAgeScore {
        bio_age: 40.0,
        delta: 0.0,
        confidence: 0.5,
        breakdown,
    }
}

#[test]
fn every_metric_has_advice() {
    for id in MetricId::ALL {
        assert!(!advice_for(id).is_empty(), "{id}");
    }
}

#[test]
fn top_three_worsening_metrics_truncated_to_limit() {
    let score = score(vec![
        contribution(MetricId::Ldl, 2.0),
        contribution(MetricId::Hdl, -1.5),
        contribution(MetricId::Sbp, 1.0),
        contribution(MetricId::Bmi, 0.5),
        contribution(MetricId::Crp, 0.4),
    ]);

    let mut expected: Vec<String> = Vec::new();
    for id in [MetricId::Ldl, MetricId::Sbp, MetricId::Bmi] {
        expected.extend(advice_for(id).iter().map(|s| s.to_string()));
    }

    assert_eq!(select_advice(&score, 6), expected);
    assert_eq!(select_advice(&score, 5), expected[..5].to_vec());
    assert_eq!(select_advice(&score, 20).len(), 6);
}

#[test]
fn affirmation_when_nothing_ages() {
    let score = score(vec![
        contribution(MetricId::Vo2max, -2.0),
        contribution(MetricId::Tg, 0.0),
    ]);
    assert_eq!(select_advice(&score, 5), vec![AFFIRMATION.to_string()]);
}
