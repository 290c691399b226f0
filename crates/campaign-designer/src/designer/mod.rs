//! Campaign designer calculator.
//!
//! Scoring and allocation are pure functions of a [`CampaignConfiguration`]
//! snapshot; the service and router wrap them for the wizard's HTTP calls and
//! for exporting finished plans.

pub mod allocation;
pub mod domain;
pub mod plan;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use allocation::{
    base_weight, channel_weight, compute_budget_allocation, BudgetAllocation, ChannelAllocation,
};
pub use domain::{CampaignConfiguration, Channel, Objective, PrimaryKpi};
pub use plan::{CampaignDraft, CampaignPlan, DraftError, PlanBudget, PlanTargeting};
pub use router::designer_router;
pub use scoring::{
    compute_score, score_breakdown, CheckOutcome, Feedback, FeedbackPolarity, ScoreCheck,
    ScoreResult,
};
pub use service::{
    CampaignDesignerService, DesignReport, DesignerServiceError, PlanPublisher, PublishError,
};
