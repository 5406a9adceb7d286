use proptest::prelude::*;
use trueage_core::models::form_state::FormState;
use trueage_core::models::metric::MetricId;
use trueage_core::models::subject::{Sex, Subject};
use trueage_scoring::bio_age::{Impact, confidence, score_bio_age};
use trueage_scoring::error::Unavailable;

fn close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() < tol
}

#[test]
fn missing_age_is_unavailable() {
    let subject = Subject {
        systolic_bp: Some(130.0),
        ..Subject::default()
    };
    assert_eq!(score_bio_age(&subject), Err(Unavailable::MissingAge));
}

#[test]
fn no_metrics_is_unavailable() {
    let subject = Subject {
        age: Some(40.0),
        sex: Some(Sex::Male),
        ..Subject::default()
    };
    assert_eq!(score_bio_age(&subject), Err(Unavailable::NoUsableMetrics));
}

#[test]
fn non_finite_values_are_excluded() {
    let subject = Subject {
        age: Some(40.0),
        ldl: Some(f64::NAN),
        hdl: Some(f64::INFINITY),
        ..Subject::default()
    };
    assert_eq!(score_bio_age(&subject), Err(Unavailable::NoUsableMetrics));
}

#[test]
fn extreme_deviation_is_clamped_to_three_sd() {
    let subject = Subject {
        age: Some(40.0),
        height_cm: Some(100.0),
        weight_kg: Some(100.0),
        ..Subject::default()
    };

    let score = score_bio_age(&subject).unwrap();
    let bmi = &score.breakdown[0];
    assert_eq!(bmi.id, MetricId::Bmi);
    assert_eq!(bmi.z, 3.0);
    assert_eq!(bmi.normalized_weight, 1.0);
    assert!(close(bmi.years, 15.0, 1e-9));
    assert_eq!(bmi.direction, Impact::Older);
    assert!(close(score.bio_age, 55.0, 1e-9));
    assert!(close(score.delta, 15.0, 1e-9));
}

#[test]
fn single_metric_confidence_takes_both_penalties() {
    let subject = Subject {
        age: Some(40.0),
        height_cm: Some(100.0),
        weight_kg: Some(100.0),
        ..Subject::default()
    };
    let score = score_bio_age(&subject).unwrap();
    let expected = (0.35 + 0.65 * (0.10 / 1.17)) * 0.85 * 0.7;
    assert!(close(score.confidence, expected, 1e-9));
}

#[test]
fn higher_better_metric_below_target_ages() {
    let subject = Subject {
        age: Some(50.0),
        hdl: Some(30.0),
        ..Subject::default()
    };
    let score = score_bio_age(&subject).unwrap();
    assert!(close(score.breakdown[0].z, 2.0, 1e-9));
    assert!(close(score.bio_age, 60.0, 1e-9));
}

#[test]
fn bio_age_is_clamped_to_plausible_range() {
    let old = Subject {
        age: Some(105.0),
        hba1c: Some(12.0),
        ..Subject::default()
    };
    let score = score_bio_age(&old).unwrap();
    assert_eq!(score.bio_age, 110.0);
    assert!(close(score.delta, 5.0, 1e-9));

    let young = Subject {
        age: Some(8.0),
        hdl: Some(120.0),
        ..Subject::default()
    };
    let score = score_bio_age(&young).unwrap();
    assert_eq!(score.bio_age, 10.0);
    assert_eq!(score.breakdown[0].direction, Impact::Younger);
}

#[test]
fn weights_renormalize_over_present_metrics() {
    let subject = Subject {
        age: Some(40.0),
        systolic_bp: Some(134.0),
        ldl: Some(70.0),
        ..Subject::default()
    };
    let score = score_bio_age(&subject).unwrap();
    let total: f64 = score.breakdown.iter().map(|c| c.normalized_weight).sum();
    assert!(close(total, 1.0, 1e-12));

    // sbp: z = 2, weight 0.09 / 0.17
    let expected_years = 2.0 * 5.0 * 0.09 / 0.17;
    assert_eq!(score.breakdown[0].id, MetricId::Sbp);
    assert!(close(score.breakdown[0].years, expected_years, 1e-9));
    assert!(close(score.delta, expected_years, 1e-9));
}

#[test]
fn full_demo_has_full_confidence() {
    let parsed = FormState::demo().to_input();
    let score = score_bio_age(&parsed.input.subject).unwrap();
    assert_eq!(score.breakdown.len(), 17);
    assert!(close(score.confidence, 1.0, 1e-9));
    assert!(score.bio_age > 30.0 && score.bio_age < 40.0, "{}", score.bio_age);
}

#[test]
fn confidence_penalties_apply_below_five_and_three() {
    assert!(close(confidence(1.0, 17), 1.0, 1e-12));
    assert!(close(confidence(1.0, 4), 0.85, 1e-12));
    assert!(close(confidence(1.0, 2), 0.85 * 0.7, 1e-12));
    assert_eq!(confidence(0.0, 1), 0.35 * 0.85 * 0.7);
    assert_eq!(confidence(-1.0, 1), confidence(0.0, 1));
}

#[test]
fn overflowing_bmi_is_not_a_usable_metric() {
    let subject = Subject {
        age: Some(40.0),
        height_cm: Some(1e-200),
        weight_kg: Some(72.0),
        ..Subject::default()
    };
    assert_eq!(subject.metric(MetricId::Bmi), None);
    assert_eq!(score_bio_age(&subject), Err(Unavailable::NoUsableMetrics));
}

#[test]
fn overflowing_egfr_is_not_a_usable_metric() {
    let subject = Subject {
        age: Some(-200_000.0),
        sex: Some(Sex::Male),
        creatinine: Some(1.0),
        ..Subject::default()
    };
    assert_eq!(subject.metric(MetricId::Egfr), None);
    assert_eq!(score_bio_age(&subject), Err(Unavailable::NoUsableMetrics));
}

#[test]
fn overflowing_metric_is_dropped_but_others_still_count() {
    let subject = Subject {
        age: Some(40.0),
        height_cm: Some(1e-200),
        weight_kg: Some(72.0),
        systolic_bp: Some(115.0),
        ..Subject::default()
    };
    let score = score_bio_age(&subject).unwrap();
    assert_eq!(score.breakdown.len(), 1);
    assert_eq!(score.breakdown[0].id, MetricId::Sbp);
}

fn optional(range: std::ops::Range<f64>) -> impl Strategy<Value = Option<f64>> {
    prop::option::of(range)
}

prop_compose! {
    fn any_subject()(
        age in 0.0f64..130.0,
        male in any::<bool>(),
        height in optional(120.0..210.0),
        weight in optional(30.0..250.0),
        sbp in optional(70.0..260.0),
        hdl in optional(5.0..150.0),
        ldl in optional(10.0..400.0),
        vo2 in optional(5.0..90.0),
        crp in optional(0.0..60.0),
        cr in optional(0.0..8.0),
        sleep in optional(0.0..16.0),
    ) -> Subject {
        Subject {
            age: Some(age),
            sex: Some(if male { Sex::Male } else { Sex::Female }),
            height_cm: height,
            weight_kg: weight,
            systolic_bp: sbp,
            hdl,
            ldl,
            vo2max: vo2,
            hs_crp: crp,
            creatinine: cr,
            sleep_hours: sleep,
            ..Subject::default()
        }
    }
}

prop_compose! {
    fn extreme_subject()(
        age in prop_oneof![-1e6f64..1e6, Just(-200_000.0)],
        male in any::<bool>(),
        height in prop_oneof![1e-300f64..1e-100, 1e100f64..1e300, 0.0f64..300.0],
        weight in prop_oneof![1e100f64..1e300, 0.0f64..300.0],
        waist in optional(0.0..1e300),
        cr in prop_oneof![1e-300f64..1e-100, 0.0f64..10.0],
    ) -> Subject {
        Subject {
            age: Some(age),
            sex: Some(if male { Sex::Male } else { Sex::Female }),
            height_cm: Some(height),
            weight_kg: Some(weight),
            waist_cm: waist,
            creatinine: Some(cr),
            ..Subject::default()
        }
    }
}

proptest! {
    #[test]
    fn extreme_inputs_never_yield_non_finite_values(subject in extreme_subject()) {
        match score_bio_age(&subject) {
            Ok(score) => {
                prop_assert!(score.bio_age.is_finite());
                prop_assert!(score.breakdown.iter().all(|c| c.value.is_finite()));
                prop_assert!(score.breakdown.iter().all(|c| c.years.is_finite()));
            }
            Err(reason) => prop_assert_eq!(reason, Unavailable::NoUsableMetrics),
        }
    }

    #[test]
    fn scores_stay_in_range_and_sorted(subject in any_subject()) {
        match score_bio_age(&subject) {
            Ok(score) => {
                prop_assert!(score.breakdown.iter().all(|c| c.value.is_finite()));
                prop_assert!((10.0..=110.0).contains(&score.bio_age));
                prop_assert!((0.2..=1.0).contains(&score.confidence));
                prop_assert!(!score.breakdown.is_empty());
                for c in &score.breakdown {
                    prop_assert!((-3.0..=3.0).contains(&c.z));
                }
                for pair in score.breakdown.windows(2) {
                    prop_assert!(pair[0].years.abs() >= pair[1].years.abs());
                }
            }
            Err(reason) => prop_assert_eq!(reason, Unavailable::NoUsableMetrics),
        }
    }
}
