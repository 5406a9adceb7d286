use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use trueage_core::models::metric::MetricId;
use trueage_core::models::subject::Sex;
use trueage_scoring::advice::advice_for;
use trueage_scoring::catalog::{self, Direction, MetricDefinition};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SexQuery {
    sex: Option<String>,
}

impl SexQuery {
    fn sex(&self) -> Option<Sex> {
        self.sex.as_deref().and_then(Sex::parse_form)
    }
}

#[derive(Serialize)]
pub struct MetricSummary {
    id: MetricId,
    label: &'static str,
    direction: Direction,
}

#[derive(Serialize)]
pub struct MetricDetail {
    definition: MetricDefinition,
    advice: Vec<&'static str>,
}

pub async fn list_metrics() -> Json<Vec<MetricSummary>> {
    let metrics: Vec<MetricSummary> = catalog::catalog()
        .iter()
        .map(|entry| MetricSummary {
            id: entry.id,
            label: entry.label,
            direction: entry.direction,
        })
        .collect();
    Json(metrics)
}

pub async fn get_metric_detail(
    Path(id): Path<String>,
    Query(query): Query<SexQuery>,
) -> Result<Json<MetricDetail>, ApiError> {
    let id: MetricId = id.parse()?;

    Ok(Json(MetricDetail {
        definition: catalog::definition(id, query.sex()),
        advice: advice_for(id).to_vec(),
    }))
}
