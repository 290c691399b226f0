use super::super::domain::{CampaignConfiguration, Channel, Objective};
use super::{CheckOutcome, Feedback};
use serde::{Deserialize, Serialize};

pub(crate) const STRONG_BUDGET: i64 = 10_000;
pub(crate) const WORKABLE_BUDGET: i64 = 5_000;
pub(crate) const MAX_FOCUSED_GEOS: usize = 5;

/// Scoring checks in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCheck {
    ObjectiveAlignment,
    BudgetSufficiency,
    BudgetPacing,
    ChannelDiversity,
    AudienceCompleteness,
    GeographicFocus,
    Duration,
    KpiTarget,
}

impl ScoreCheck {
    pub const ORDER: [ScoreCheck; 8] = [
        ScoreCheck::ObjectiveAlignment,
        ScoreCheck::BudgetSufficiency,
        ScoreCheck::BudgetPacing,
        ScoreCheck::ChannelDiversity,
        ScoreCheck::AudienceCompleteness,
        ScoreCheck::GeographicFocus,
        ScoreCheck::Duration,
        ScoreCheck::KpiTarget,
    ];

    pub fn max_points(&self) -> i32 {
        match self {
            ScoreCheck::ObjectiveAlignment => 15,
            ScoreCheck::BudgetSufficiency => 10,
            ScoreCheck::BudgetPacing => 10,
            ScoreCheck::ChannelDiversity => 15,
            ScoreCheck::AudienceCompleteness => 15,
            ScoreCheck::GeographicFocus => 10,
            ScoreCheck::Duration => 10,
            ScoreCheck::KpiTarget => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCheck::ObjectiveAlignment => "Objective alignment",
            ScoreCheck::BudgetSufficiency => "Budget sufficiency",
            ScoreCheck::BudgetPacing => "Budget pacing",
            ScoreCheck::ChannelDiversity => "Channel diversity",
            ScoreCheck::AudienceCompleteness => "Audience completeness",
            ScoreCheck::GeographicFocus => "Geographic focus",
            ScoreCheck::Duration => "Duration",
            ScoreCheck::KpiTarget => "KPI target",
        }
    }
}

pub(crate) fn evaluate_checks(config: &CampaignConfiguration) -> Vec<CheckOutcome> {
    ScoreCheck::ORDER
        .into_iter()
        .map(|check| match check {
            ScoreCheck::ObjectiveAlignment => objective_alignment(config),
            ScoreCheck::BudgetSufficiency => budget_sufficiency(config),
            ScoreCheck::BudgetPacing => budget_pacing(config),
            ScoreCheck::ChannelDiversity => channel_diversity(config),
            ScoreCheck::AudienceCompleteness => audience_completeness(config),
            ScoreCheck::GeographicFocus => geographic_focus(config),
            ScoreCheck::Duration => duration(config),
            ScoreCheck::KpiTarget => kpi_target(config),
        })
        .collect()
}

/// Canonical best-fit channels per objective.
const ALIGNMENT_RULES: [(Objective, &[Channel], &str); 4] = [
    (
        Objective::LeadGen,
        &[Channel::Search],
        "Search captures high-intent leads",
    ),
    (
        Objective::EcommerceSales,
        &[Channel::PerformanceMax],
        "Performance Max fits e-commerce sales goals",
    ),
    (
        Objective::Awareness,
        &[Channel::YouTube],
        "YouTube builds reach for awareness",
    ),
    (
        Objective::AppInstalls,
        &[Channel::Meta, Channel::TikTok],
        "Meta or TikTok drive efficient app installs",
    ),
];

fn objective_alignment(config: &CampaignConfiguration) -> CheckOutcome {
    let mut points = 0;
    let mut feedback = Vec::new();

    // Every rule is checked; matches accumulate rather than short-circuit.
    for (objective, channels, message) in ALIGNMENT_RULES {
        let matched = config.objective == objective
            && channels.iter().any(|channel| config.has_channel(*channel));
        if matched {
            points += 15;
            feedback.push(Feedback::satisfied(message));
        }
    }

    if feedback.is_empty() {
        let suggestion = ALIGNMENT_RULES
            .iter()
            .find(|(objective, _, _)| *objective == config.objective)
            .map(|(_, channels, _)| {
                channels
                    .iter()
                    .map(|channel| channel.label())
                    .collect::<Vec<_>>()
                    .join(" or ")
            })
            .unwrap_or_default();
        feedback.push(Feedback::improve(format!(
            "Add {} to align channels with {}",
            suggestion,
            config.objective.label().to_lowercase()
        )));
    }

    CheckOutcome {
        check: ScoreCheck::ObjectiveAlignment,
        points,
        feedback,
    }
}

fn budget_sufficiency(config: &CampaignConfiguration) -> CheckOutcome {
    let (points, feedback) = if config.total_budget >= STRONG_BUDGET {
        (
            10,
            Feedback::satisfied("Budget supports testing across channels"),
        )
    } else if config.total_budget >= WORKABLE_BUDGET {
        (
            5,
            Feedback::improve("Budget is workable; $10,000 or more allows broader testing"),
        )
    } else {
        (
            0,
            Feedback::improve("Budget under $5,000 limits how much each channel can learn"),
        )
    };

    CheckOutcome {
        check: ScoreCheck::BudgetSufficiency,
        points,
        feedback: vec![feedback],
    }
}

fn budget_pacing(config: &CampaignConfiguration) -> CheckOutcome {
    let total = config.total_budget;
    let daily = config.daily_budget;
    let planned = daily.saturating_mul(config.duration_days);

    let (points, feedback) = if total <= 0 || daily <= 0 {
        (0, Feedback::improve("Set both a total and a daily budget"))
    } else if planned <= total {
        (
            10,
            Feedback::satisfied(format!(
                "Daily budget fits the total over {} days",
                config.duration_days
            )),
        )
    } else {
        (
            0,
            Feedback::improve(format!(
                "Daily budget over {} days ({}) exceeds the total budget ({})",
                config.duration_days, planned, total
            )),
        )
    };

    CheckOutcome {
        check: ScoreCheck::BudgetPacing,
        points,
        feedback: vec![feedback],
    }
}

fn channel_diversity(config: &CampaignConfiguration) -> CheckOutcome {
    let count = config.channel_count();
    let (points, feedback) = match count {
        0 => (0, Feedback::improve("Select at least one channel")),
        1 => (
            5,
            Feedback::improve("A single channel concentrates risk; add one or two more"),
        ),
        2 => (10, Feedback::improve("Add a third channel to diversify reach")),
        3..=5 => (
            15,
            Feedback::satisfied(format!("{count} channels give a balanced mix")),
        ),
        _ => (
            0,
            Feedback::improve(format!(
                "{count} channels spread the budget thin; keep it to five or fewer"
            )),
        ),
    };

    CheckOutcome {
        check: ScoreCheck::ChannelDiversity,
        points,
        feedback: vec![feedback],
    }
}

fn audience_completeness(config: &CampaignConfiguration) -> CheckOutcome {
    let mut points = 0;
    let mut feedback = Vec::with_capacity(2);

    if config.has_audience_text() && !config.audience_interests.is_empty() {
        points += 10;
        feedback.push(Feedback::satisfied("Audience described with interests"));
    } else if config.has_audience_text() {
        points += 5;
        feedback.push(Feedback::improve("Add interests to sharpen audience targeting"));
    } else {
        feedback.push(Feedback::improve("Describe the target audience"));
    }

    if !config.audience_job_titles.is_empty() || !config.audience_industries.is_empty() {
        points += 5;
        feedback.push(Feedback::satisfied(
            "Job titles or industries narrow the audience",
        ));
    } else {
        feedback.push(Feedback::improve(
            "Add job titles or industries for firmographic targeting",
        ));
    }

    CheckOutcome {
        check: ScoreCheck::AudienceCompleteness,
        points,
        feedback,
    }
}

fn geographic_focus(config: &CampaignConfiguration) -> CheckOutcome {
    let count = config.geo.len();
    let (points, feedback) = if count == 0 {
        (0, Feedback::improve("Add at least one target location"))
    } else if count <= MAX_FOCUSED_GEOS {
        (
            10,
            Feedback::satisfied(format!("Focused on {count} location(s)")),
        )
    } else {
        (
            5,
            Feedback::improve(format!(
                "{count} locations dilute spend; consider focusing on five or fewer"
            )),
        )
    };

    CheckOutcome {
        check: ScoreCheck::GeographicFocus,
        points,
        feedback: vec![feedback],
    }
}

fn duration(config: &CampaignConfiguration) -> CheckOutcome {
    let days = config.duration_days;
    let (points, feedback) = if (30..=90).contains(&days) {
        (
            10,
            Feedback::satisfied(format!("{days} days leaves room to optimize")),
        )
    } else if days >= 14 {
        (
            5,
            Feedback::improve("A 30 to 90 day flight gives algorithms time to optimize"),
        )
    } else {
        (
            0,
            Feedback::improve("Campaigns under 14 days rarely exit the learning phase"),
        )
    };

    CheckOutcome {
        check: ScoreCheck::Duration,
        points,
        feedback: vec![feedback],
    }
}

fn kpi_target(config: &CampaignConfiguration) -> CheckOutcome {
    let kpi = config.primary_kpi.label();
    let (points, feedback) = if config.kpi_target > 0.0 {
        (5, Feedback::satisfied(format!("{kpi} target set")))
    } else {
        (0, Feedback::improve(format!("Set a {kpi} target to measure success")))
    };

    CheckOutcome {
        check: ScoreCheck::KpiTarget,
        points,
        feedback: vec![feedback],
    }
}
