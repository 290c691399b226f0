use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPlanPublisher};
use crate::routes::with_designer_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use campaign_designer::config::AppConfig;
use campaign_designer::designer::CampaignDesignerService;
use campaign_designer::error::AppError;
use campaign_designer::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let publisher = Arc::new(InMemoryPlanPublisher::default());
    let designer_service = Arc::new(CampaignDesignerService::new(
        publisher,
        config.designer.clone(),
    ));

    let app = with_designer_routes(designer_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        plan_name_max = config.designer.plan_name_max,
        "campaign designer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
