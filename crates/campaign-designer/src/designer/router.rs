use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::allocation::{base_weight, channel_weight, compute_budget_allocation, WEIGHT_SCALE};
use super::domain::{CampaignConfiguration, Channel, Objective};
use super::plan::CampaignDraft;
use super::scoring::compute_score;
use super::service::{CampaignDesignerService, DesignerServiceError, PlanPublisher};

/// Router builder exposing the designer calculator and plan submission.
pub fn designer_router<P>(service: Arc<CampaignDesignerService<P>>) -> Router
where
    P: PlanPublisher + 'static,
{
    Router::new()
        .route("/api/v1/designer/channels", get(channels_handler))
        .route("/api/v1/designer/score", post(score_handler))
        .route("/api/v1/designer/allocation", post(allocation_handler))
        .route("/api/v1/designer/evaluate", post(evaluate_handler::<P>))
        .route("/api/v1/designer/plans", post(submit_handler::<P>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelCatalogEntry {
    pub(crate) channel: Channel,
    pub(crate) default_weight: f64,
    pub(crate) lead_gen_weight: f64,
    pub(crate) ecommerce_sales_weight: f64,
    pub(crate) app_installs_weight: f64,
    pub(crate) awareness_weight: f64,
}

fn as_fraction(weight: u32) -> f64 {
    f64::from(weight) / f64::from(WEIGHT_SCALE)
}

pub(crate) async fn channels_handler() -> Json<Vec<ChannelCatalogEntry>> {
    let catalog = Channel::CATALOG
        .into_iter()
        .map(|channel| ChannelCatalogEntry {
            channel,
            default_weight: as_fraction(base_weight(channel)),
            lead_gen_weight: as_fraction(channel_weight(channel, Objective::LeadGen)),
            ecommerce_sales_weight: as_fraction(channel_weight(channel, Objective::EcommerceSales)),
            app_installs_weight: as_fraction(channel_weight(channel, Objective::AppInstalls)),
            awareness_weight: as_fraction(channel_weight(channel, Objective::Awareness)),
        })
        .collect();
    Json(catalog)
}

pub(crate) async fn score_handler(Json(config): Json<CampaignConfiguration>) -> Response {
    (StatusCode::OK, Json(compute_score(&config))).into_response()
}

pub(crate) async fn allocation_handler(Json(config): Json<CampaignConfiguration>) -> Response {
    (StatusCode::OK, Json(compute_budget_allocation(&config))).into_response()
}

pub(crate) async fn evaluate_handler<P>(
    State(service): State<Arc<CampaignDesignerService<P>>>,
    Json(config): Json<CampaignConfiguration>,
) -> Response
where
    P: PlanPublisher + 'static,
{
    (StatusCode::OK, Json(service.evaluate(&config))).into_response()
}

pub(crate) async fn submit_handler<P>(
    State(service): State<Arc<CampaignDesignerService<P>>>,
    Json(draft): Json<CampaignDraft>,
) -> Response
where
    P: PlanPublisher + 'static,
{
    match service.submit(draft) {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(DesignerServiceError::Draft(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(DesignerServiceError::Publish(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
