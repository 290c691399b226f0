use campaign_designer::designer::{
    CampaignConfiguration, CampaignPlan, PlanPublisher, PublishError,
};
use campaign_designer::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps submitted plans in memory until a backend client is wired in.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPlanPublisher {
    plans: Arc<Mutex<Vec<CampaignPlan>>>,
}

impl PlanPublisher for InMemoryPlanPublisher {
    fn publish(&self, plan: &CampaignPlan) -> Result<(), PublishError> {
        let mut guard = self
            .plans
            .lock()
            .map_err(|_| PublishError::Unavailable("plan store poisoned".to_string()))?;
        guard.push(plan.clone());
        info!(name = %plan.name, stored = guard.len(), "campaign plan stored");
        Ok(())
    }
}

impl InMemoryPlanPublisher {
    pub(crate) fn plans(&self) -> Vec<CampaignPlan> {
        self.plans.lock().map(|plans| plans.clone()).unwrap_or_default()
    }
}

pub(crate) fn parse_configuration(raw: &str) -> Result<CampaignConfiguration, AppError> {
    serde_json::from_str(raw).map_err(AppError::from)
}

pub(crate) fn load_configuration(path: &Path) -> Result<CampaignConfiguration, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_configuration(&raw)
}
