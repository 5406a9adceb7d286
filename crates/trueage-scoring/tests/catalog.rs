use trueage_core::models::metric::MetricId;
use trueage_core::models::subject::Sex;
use trueage_scoring::catalog::{Direction, catalog, definition, total_weight};

#[test]
fn catalog_rows_follow_metric_order() {
    let ids: Vec<MetricId> = catalog().iter().map(|e| e.id).collect();
    assert_eq!(ids, MetricId::ALL.to_vec());
}

#[test]
fn every_row_has_positive_sd_and_weight() {
    for entry in catalog() {
        let def = entry.resolve(None);
        assert!(def.standard_deviation > 0.0, "{}", def.id);
        assert!(def.weight > 0.0 && def.weight <= 1.0, "{}", def.id);
    }
}

#[test]
fn weights_sum_to_fixed_constant() {
    for sex in [None, Some(Sex::Male), Some(Sex::Female)] {
        assert!((total_weight(sex) - 1.17).abs() < 1e-9);
    }
}

#[test]
fn sex_keyed_targets_resolve_per_category() {
    assert_eq!(definition(MetricId::Vo2max, Some(Sex::Male)).target, 42.0);
    assert_eq!(definition(MetricId::Vo2max, Some(Sex::Female)).target, 35.0);
    assert_eq!(definition(MetricId::Vo2max, None).target, 35.0);
    assert_eq!(definition(MetricId::Uric, Some(Sex::Male)).target, 5.0);
    assert_eq!(definition(MetricId::Uric, Some(Sex::Female)).target, 4.5);
    assert_eq!(definition(MetricId::Bmi, Some(Sex::Female)).target, 22.0);
}

#[test]
fn protective_metrics_are_higher_better() {
    let better: Vec<MetricId> = catalog()
        .iter()
        .filter(|e| e.direction == Direction::HigherBetter)
        .map(|e| e.id)
        .collect();
    assert_eq!(
        better,
        vec![MetricId::Vo2max, MetricId::Hdl, MetricId::Egfr, MetricId::Sleep]
    );
}
