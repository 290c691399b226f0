use super::allocation::{compute_budget_allocation, ChannelAllocation};
use super::domain::{CampaignConfiguration, Objective, PrimaryKpi};
use super::scoring::compute_score;
use crate::config::DesignerConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wizard submission: a plan name plus the configuration being saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub name: String,
    pub configuration: CampaignConfiguration,
    /// Wizard template the configuration started from, if any.
    #[serde(default)]
    pub selected_template: Option<String>,
}

impl CampaignDraft {
    /// Check the structural limits a saved plan must meet.
    ///
    /// Degenerate values (zero budget, no channels) are left to the scorer.
    pub fn validate(&self, config: &DesignerConfig) -> Result<(), DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let length = name.chars().count();
        if length > config.plan_name_max {
            return Err(DraftError::NameTooLong {
                length,
                max: config.plan_name_max,
            });
        }

        if !self.configuration.kpi_target.is_finite() {
            return Err(DraftError::InvalidKpiTarget);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("campaign name is required")]
    MissingName,
    #[error("campaign name is {length} characters; the limit is {max}")]
    NameTooLong { length: usize, max: usize },
    #[error("KPI target must be a finite number")]
    InvalidKpiTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBudget {
    pub total: i64,
    pub daily: i64,
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTargeting {
    pub geo: Vec<String>,
    pub audience: String,
}

/// Exported campaign plan, in the shape the campaign backend accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    pub name: String,
    pub objective: Objective,
    pub primary_kpi: PrimaryKpi,
    pub budget: PlanBudget,
    pub channels: Vec<ChannelAllocation>,
    pub targeting: PlanTargeting,
    pub kpi_target: f64,
    pub design_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_template: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CampaignPlan {
    pub fn from_configuration(
        name: impl Into<String>,
        config: &CampaignConfiguration,
        created_at: DateTime<Utc>,
    ) -> Self {
        let score = compute_score(config);

        Self {
            name: name.into(),
            objective: config.objective,
            primary_kpi: config.primary_kpi,
            budget: PlanBudget {
                total: config.total_budget,
                daily: config.daily_budget,
                duration: config.duration_days,
            },
            channels: compute_budget_allocation(config),
            targeting: PlanTargeting {
                geo: config.geo.clone(),
                audience: config.target_audience_text.clone(),
            },
            kpi_target: config.kpi_target,
            design_score: score.score,
            selected_template: None,
            created_at,
        }
    }

    pub fn with_template(mut self, template: Option<String>) -> Self {
        self.selected_template = template.filter(|name| !name.trim().is_empty());
        self
    }
}
