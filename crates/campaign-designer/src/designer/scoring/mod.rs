mod rules;

use super::domain::CampaignConfiguration;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::ScoreCheck;

/// Score every configuration starts from before checks add points.
pub const BASE_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 100;

/// Whether a feedback line confirms a strength or asks for a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPolarity {
    Satisfied,
    NeedsImprovement,
}

impl FeedbackPolarity {
    pub fn glyph(&self) -> &'static str {
        match self {
            FeedbackPolarity::Satisfied => "✓",
            FeedbackPolarity::NeedsImprovement => "⚠",
        }
    }
}

/// One human-readable line produced by a scoring check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub polarity: FeedbackPolarity,
    pub message: String,
}

impl Feedback {
    pub(crate) fn satisfied(message: impl Into<String>) -> Self {
        Self {
            polarity: FeedbackPolarity::Satisfied,
            message: message.into(),
        }
    }

    pub(crate) fn improve(message: impl Into<String>) -> Self {
        Self {
            polarity: FeedbackPolarity::NeedsImprovement,
            message: message.into(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.polarity == FeedbackPolarity::Satisfied
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity.glyph(), self.message)
    }
}

/// Design score in `0..=100` with feedback in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub feedback: Vec<Feedback>,
}

impl ScoreResult {
    /// Feedback rendered with its polarity glyph, as the wizard displays it.
    pub fn feedback_lines(&self) -> Vec<String> {
        self.feedback.iter().map(ToString::to_string).collect()
    }

    pub fn needs_improvement(&self) -> impl Iterator<Item = &Feedback> {
        self.feedback.iter().filter(|item| !item.is_satisfied())
    }
}

/// Points and feedback contributed by a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: ScoreCheck,
    pub points: i32,
    pub feedback: Vec<Feedback>,
}

/// Run every check in order and clamp the accumulated score.
pub fn compute_score(config: &CampaignConfiguration) -> ScoreResult {
    let outcomes = rules::evaluate_checks(config);

    let mut total = BASE_SCORE;
    let mut feedback = Vec::new();
    for outcome in outcomes {
        total += outcome.points;
        feedback.extend(outcome.feedback);
    }

    ScoreResult {
        score: total.clamp(0, MAX_SCORE) as u8,
        feedback,
    }
}

/// Per-check breakdown, useful for explaining a score.
pub fn score_breakdown(config: &CampaignConfiguration) -> Vec<CheckOutcome> {
    rules::evaluate_checks(config)
}
