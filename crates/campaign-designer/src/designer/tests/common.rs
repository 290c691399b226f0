use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::config::DesignerConfig;
use crate::designer::domain::{CampaignConfiguration, Objective, PrimaryKpi};
use crate::designer::plan::{CampaignDraft, CampaignPlan};
use crate::designer::service::{CampaignDesignerService, PlanPublisher, PublishError};

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// B2B lead generation plan used throughout the wizard walkthrough.
pub(super) fn lead_gen_config() -> CampaignConfiguration {
    CampaignConfiguration {
        objective: Objective::LeadGen,
        primary_kpi: PrimaryKpi::Cpl,
        total_budget: 15_000,
        daily_budget: 500,
        duration_days: 42,
        channels: strings(&["Search", "Meta", "LinkedIn"]),
        geo: strings(&["CA-ON", "CA-BC"]),
        target_audience_text: "PMs".to_string(),
        audience_interests: strings(&["Technology"]),
        audience_job_titles: Vec::new(),
        audience_industries: Vec::new(),
        kpi_target: 35.0,
    }
}

/// Configuration with nothing filled in beyond the required enums.
pub(super) fn blank_config(objective: Objective) -> CampaignConfiguration {
    CampaignConfiguration::new(objective, PrimaryKpi::Cpa)
}

pub(super) fn draft(name: &str) -> CampaignDraft {
    CampaignDraft {
        name: name.to_string(),
        configuration: lead_gen_config(),
        selected_template: None,
    }
}

pub(super) fn designer_config() -> DesignerConfig {
    DesignerConfig { plan_name_max: 40 }
}

#[derive(Default)]
pub(super) struct MemoryPublisher {
    pub(super) plans: Mutex<Vec<CampaignPlan>>,
}

impl MemoryPublisher {
    pub(super) fn published(&self) -> Vec<CampaignPlan> {
        self.plans.lock().expect("publisher mutex poisoned").clone()
    }
}

impl PlanPublisher for MemoryPublisher {
    fn publish(&self, plan: &CampaignPlan) -> Result<(), PublishError> {
        self.plans
            .lock()
            .expect("publisher mutex poisoned")
            .push(plan.clone());
        Ok(())
    }
}

pub(super) struct OfflinePublisher;

impl PlanPublisher for OfflinePublisher {
    fn publish(&self, _plan: &CampaignPlan) -> Result<(), PublishError> {
        Err(PublishError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn memory_service() -> (
    Arc<CampaignDesignerService<MemoryPublisher>>,
    Arc<MemoryPublisher>,
) {
    let publisher = Arc::new(MemoryPublisher::default());
    let service = Arc::new(CampaignDesignerService::new(
        publisher.clone(),
        designer_config(),
    ));
    (service, publisher)
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
