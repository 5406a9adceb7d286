use trueage_core::models::form_state::FormState;
use trueage_core::models::lifestyle::{LifestyleInputs, SmokingStatus};
use trueage_scoring::error::Unavailable;
use trueage_scoring::lifestyle::{ActivityCurve, activity_minutes, score_lifestyle};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-3
}

#[test]
fn activity_minutes_are_capped() {
    let inputs = LifestyleInputs {
        active_days: Some(7.0),
        minutes_per_session: Some(120.0),
        ..LifestyleInputs::default()
    };
    assert_eq!(activity_minutes(&inputs), Some(600.0));

    let half = LifestyleInputs {
        active_days: Some(3.0),
        ..LifestyleInputs::default()
    };
    assert_eq!(activity_minutes(&half), None);
}

#[test]
fn tiered_curve_breakpoints() {
    let curve = ActivityCurve::Tiered;
    assert_eq!(curve.score(0.0), 0.0);
    assert!(close(curve.score(75.0), 40.0));
    assert!(close(curve.score(150.0), 80.0));
    assert!(close(curve.score(225.0), 90.0));
    assert!(close(curve.score(300.0), 100.0));
    assert_eq!(curve.score(600.0), 100.0);
}

#[test]
fn proportional_curve_is_a_share_of_300() {
    let curve = ActivityCurve::Proportional;
    assert!(close(curve.score(150.0), 50.0));
    assert_eq!(curve.score(450.0), 100.0);
}

#[test]
fn demo_lifestyle_with_tiered_curve() {
    let input = FormState::demo().to_input().input;
    let score = score_lifestyle(input.subject.age, &input.lifestyle, ActivityCurve::Tiered).unwrap();

    // 160 min → 81.33, fruit/veg 80, smoking 100, alcohol 100, sitting 62.5
    assert!(close(score.score, 83.8417));
    assert!(close(score.delta, -6.7683));
    assert!(close(score.ls_age, 35.0 - 6.7683));
    assert_eq!(score.tips, vec!["Eat five servings of fruit and vegetables a day"]);
}

#[test]
fn demo_lifestyle_with_proportional_curve() {
    let input = FormState::demo().to_input().input;
    let score =
        score_lifestyle(input.subject.age, &input.lifestyle, ActivityCurve::Proportional).unwrap();
    assert!(close(score.score, 74.0417));
}

#[test]
fn single_component_drives_the_score() {
    let inputs = LifestyleInputs {
        smoking: Some(SmokingStatus::Current),
        ..LifestyleInputs::default()
    };
    let score = score_lifestyle(Some(40.0), &inputs, ActivityCurve::Tiered).unwrap();
    assert!(close(score.score, 20.0));
    assert!(close(score.delta, 6.0));
    assert!(close(score.ls_age, 46.0));
    assert_eq!(score.tips, vec!["Quit smoking"]);
}

#[test]
fn quitting_smoking_lowers_delta() {
    let base = LifestyleInputs {
        active_days: Some(2.0),
        minutes_per_session: Some(30.0),
        fruit_veg_servings: Some(2.0),
        alcohol_units: Some(10.0),
        sitting_hours: Some(9.0),
        ..LifestyleInputs::default()
    };

    let deltas: Vec<f64> = [SmokingStatus::Current, SmokingStatus::Former, SmokingStatus::None]
        .into_iter()
        .map(|status| {
            let inputs = LifestyleInputs {
                smoking: Some(status),
                ..base.clone()
            };
            score_lifestyle(Some(45.0), &inputs, ActivityCurve::Tiered)
                .unwrap()
                .delta
        })
        .collect();

    assert!(deltas[0] > deltas[1]);
    assert!(deltas[1] > deltas[2]);
}

#[test]
fn alcohol_and_sitting_tiers() {
    let score_with = |alcohol: f64, sitting: f64| {
        let inputs = LifestyleInputs {
            alcohol_units: Some(alcohol),
            sitting_hours: Some(sitting),
            ..LifestyleInputs::default()
        };
        score_lifestyle(Some(30.0), &inputs, ActivityCurve::Tiered)
            .unwrap()
            .score
    };

    // alcohol weight 0.10, sitting weight 0.15
    assert!(close(score_with(7.0, 2.0), 100.0));
    assert!(close(score_with(14.0, 12.0), (0.10 * 80.0 + 0.15 * 20.0) / 0.25));
    assert!(close(score_with(21.0, 6.0), (0.10 * 60.0 + 0.15 * 70.0) / 0.25));
    assert!(close(score_with(30.0, 1.0), (0.10 * 30.0 + 0.15 * 100.0) / 0.25));
}

#[test]
fn unavailable_without_age_or_components() {
    let inputs = LifestyleInputs {
        smoking: Some(SmokingStatus::None),
        ..LifestyleInputs::default()
    };
    assert_eq!(
        score_lifestyle(None, &inputs, ActivityCurve::Tiered),
        Err(Unavailable::MissingAge)
    );
    assert_eq!(
        score_lifestyle(Some(40.0), &LifestyleInputs::default(), ActivityCurve::Tiered),
        Err(Unavailable::NoUsableComponents)
    );
}

#[test]
fn curve_names_parse() {
    assert_eq!("tiered".parse::<ActivityCurve>().unwrap(), ActivityCurve::Tiered);
    assert_eq!(
        "proportional".parse::<ActivityCurve>().unwrap(),
        ActivityCurve::Proportional
    );
    assert!("linear".parse::<ActivityCurve>().is_err());
}
