use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::allocation::{compute_budget_allocation, BudgetAllocation};
use super::domain::{CampaignConfiguration, Channel};
use super::plan::{CampaignDraft, CampaignPlan, DraftError};
use super::scoring::{compute_score, ScoreResult};
use crate::config::DesignerConfig;

/// Outbound hook that hands a finished plan to the campaign backend.
pub trait PlanPublisher: Send + Sync {
    fn publish(&self, plan: &CampaignPlan) -> Result<(), PublishError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("campaign backend rejected the plan: {0}")]
    Rejected(String),
    #[error("campaign backend unavailable: {0}")]
    Unavailable(String),
}

/// Score and allocation computed together for one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub score: ScoreResult,
    pub allocation: BudgetAllocation,
}

/// Service composing the scorer, allocator, and plan publisher.
pub struct CampaignDesignerService<P> {
    publisher: Arc<P>,
    config: DesignerConfig,
}

impl<P> CampaignDesignerService<P>
where
    P: PlanPublisher + 'static,
{
    pub fn new(publisher: Arc<P>, config: DesignerConfig) -> Self {
        Self { publisher, config }
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    /// Recompute score and allocation; safe to call on every form change.
    pub fn evaluate(&self, configuration: &CampaignConfiguration) -> DesignReport {
        let score = compute_score(configuration);
        let allocation = compute_budget_allocation(configuration);

        let dropped = configuration.channels.len()
            - configuration
                .channels
                .iter()
                .filter(|name| Channel::from_label(name.as_str()).is_some())
                .count();
        if dropped > 0 {
            debug!(dropped, "ignoring channels outside the catalog");
        }

        debug!(
            objective = ?configuration.objective,
            score = score.score,
            channels = allocation.len(),
            "evaluated campaign design"
        );

        DesignReport { score, allocation }
    }

    /// Validate a draft, export it as a plan, and publish it.
    pub fn submit(&self, draft: CampaignDraft) -> Result<CampaignPlan, DesignerServiceError> {
        draft.validate(&self.config)?;

        let plan = CampaignPlan::from_configuration(
            draft.name.trim(),
            &draft.configuration,
            Utc::now(),
        )
        .with_template(draft.selected_template);

        if let Err(err) = self.publisher.publish(&plan) {
            warn!(name = %plan.name, error = %err, "campaign plan publish failed");
            return Err(err.into());
        }

        info!(
            name = %plan.name,
            design_score = plan.design_score,
            "campaign plan published"
        );
        Ok(plan)
    }
}

/// Error raised by the designer service.
#[derive(Debug, thiserror::Error)]
pub enum DesignerServiceError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}
