use super::common::*;
use crate::designer::domain::Objective;
use crate::designer::scoring::{
    compute_score, score_breakdown, FeedbackPolarity, ScoreCheck, BASE_SCORE,
};

fn points_for(config: &crate::designer::CampaignConfiguration, check: ScoreCheck) -> i32 {
    score_breakdown(config)
        .into_iter()
        .find(|outcome| outcome.check == check)
        .map(|outcome| outcome.points)
        .expect("check evaluated")
}

#[test]
fn lead_gen_walkthrough_scores_high_despite_overspend() {
    let config = lead_gen_config();

    let result = compute_score(&config);

    assert!(result.score >= 80);
    assert_eq!(result.score, 100);
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 15);
    assert_eq!(points_for(&config, ScoreCheck::BudgetSufficiency), 10);
    // 500 a day for 42 days is 21,000 against a 15,000 total.
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 0);
    assert_eq!(points_for(&config, ScoreCheck::ChannelDiversity), 15);
    assert_eq!(points_for(&config, ScoreCheck::AudienceCompleteness), 10);
    assert_eq!(points_for(&config, ScoreCheck::GeographicFocus), 10);
    assert_eq!(points_for(&config, ScoreCheck::Duration), 10);
    assert_eq!(points_for(&config, ScoreCheck::KpiTarget), 5);
}

#[test]
fn feedback_follows_check_order() {
    let result = compute_score(&lead_gen_config());

    let polarities: Vec<FeedbackPolarity> =
        result.feedback.iter().map(|item| item.polarity).collect();
    assert_eq!(
        polarities,
        vec![
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::NeedsImprovement,
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::NeedsImprovement,
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::Satisfied,
            FeedbackPolarity::Satisfied,
        ]
    );
    assert!(result.feedback[0].message.contains("Search"));
    assert!(result.feedback[2].message.contains("21000"));
}

#[test]
fn feedback_lines_carry_polarity_glyph() {
    let result = compute_score(&lead_gen_config());
    let lines = result.feedback_lines();

    assert!(lines[0].starts_with("✓ "));
    assert!(lines[2].starts_with("⚠ "));
    assert_eq!(result.needs_improvement().count(), 2);
}

#[test]
fn blank_configuration_keeps_base_score() {
    let result = compute_score(&blank_config(Objective::Awareness));

    assert_eq!(i32::from(result.score), BASE_SCORE);
    assert_eq!(result.feedback.len(), 9);
    assert!(result
        .feedback
        .iter()
        .all(|item| item.polarity == FeedbackPolarity::NeedsImprovement));
    assert!(result.feedback[0].message.contains("YouTube"));
}

#[test]
fn empty_channel_selection_asks_for_a_channel() {
    let mut config = lead_gen_config();
    config.channels.clear();

    let outcome = score_breakdown(&config)
        .into_iter()
        .find(|outcome| outcome.check == ScoreCheck::ChannelDiversity)
        .expect("diversity evaluated");

    assert_eq!(outcome.points, 0);
    assert_eq!(outcome.feedback.len(), 1);
    assert!(outcome.feedback[0].message.contains("at least one channel"));
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 0);
}

#[test]
fn budget_sufficiency_rises_with_total_budget() {
    let mut config = blank_config(Objective::LeadGen);
    let mut previous = None;

    for (total, expected) in [(4_999, 0), (5_000, 5), (9_999, 5), (10_000, 10), (50_000, 10)] {
        config.total_budget = total;
        let points = points_for(&config, ScoreCheck::BudgetSufficiency);
        assert_eq!(points, expected, "total budget {total}");
        if let Some(last) = previous {
            assert!(points >= last);
        }
        previous = Some(points);
    }

    config.total_budget = 4_000;
    let low = compute_score(&config).score;
    config.total_budget = 12_000;
    let high = compute_score(&config).score;
    assert_eq!(high - low, 10);
}

#[test]
fn zero_budgets_earn_nothing_for_budget_checks() {
    let mut config = lead_gen_config();
    config.total_budget = 0;
    config.daily_budget = 0;

    assert_eq!(points_for(&config, ScoreCheck::BudgetSufficiency), 0);
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 0);
}

#[test]
fn pacing_accepts_daily_spend_that_exactly_fills_total() {
    let mut config = blank_config(Objective::LeadGen);
    config.total_budget = 10_000;
    config.daily_budget = 100;
    config.duration_days = 100;
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 10);

    config.duration_days = 101;
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 0);
}

#[test]
fn pacing_passes_non_positive_duration_with_positive_budgets() {
    let mut config = blank_config(Objective::LeadGen);
    config.total_budget = 10_000;
    config.daily_budget = 100;
    config.duration_days = 0;
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 10);

    config.duration_days = -5;
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 10);

    config.daily_budget = 0;
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 0);
}

#[test]
fn negative_budget_degrades_without_error() {
    let mut config = lead_gen_config();
    config.total_budget = -2_500;

    let result = compute_score(&config);

    assert_eq!(points_for(&config, ScoreCheck::BudgetSufficiency), 0);
    assert_eq!(points_for(&config, ScoreCheck::BudgetPacing), 0);
    assert!(result.score <= 100);
}

#[test]
fn app_installs_align_with_meta_or_tiktok() {
    let mut config = blank_config(Objective::AppInstalls);
    config.channels = strings(&["TikTok"]);
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 15);

    config.channels = strings(&["Meta", "TikTok"]);
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 15);

    config.channels = strings(&["Search"]);
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 0);
}

#[test]
fn alignment_requires_matching_objective() {
    let mut config = blank_config(Objective::EcommerceSales);
    config.channels = strings(&["Search", "YouTube"]);
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 0);

    config.channels.push("Performance Max".to_string());
    assert_eq!(points_for(&config, ScoreCheck::ObjectiveAlignment), 15);
}

#[test]
fn channel_diversity_bands() {
    let catalog = [
        "Search", "Meta", "LinkedIn", "YouTube", "TikTok", "Display", "Email",
    ];
    let expected = [0, 5, 10, 15, 15, 15, 0, 0];
    let mut config = blank_config(Objective::Awareness);

    for (count, points) in expected.into_iter().enumerate() {
        config.channels = strings(&catalog[..count]);
        assert_eq!(
            points_for(&config, ScoreCheck::ChannelDiversity),
            points,
            "{count} channels"
        );
    }
}

#[test]
fn job_titles_add_points_independently() {
    let mut config = blank_config(Objective::LeadGen);
    config.audience_job_titles = strings(&["VP Marketing"]);
    assert_eq!(points_for(&config, ScoreCheck::AudienceCompleteness), 5);

    config.target_audience_text = "Operations leaders".to_string();
    assert_eq!(points_for(&config, ScoreCheck::AudienceCompleteness), 10);

    config.audience_job_titles.clear();
    config.audience_industries = strings(&["Logistics"]);
    config.audience_interests = strings(&["Supply chain"]);
    assert_eq!(points_for(&config, ScoreCheck::AudienceCompleteness), 15);
}

#[test]
fn geographic_focus_bands() {
    let mut config = blank_config(Objective::Awareness);
    assert_eq!(points_for(&config, ScoreCheck::GeographicFocus), 0);

    config.geo = strings(&["US-CA"]);
    assert_eq!(points_for(&config, ScoreCheck::GeographicFocus), 10);

    config.geo = strings(&["US-CA", "US-NY", "US-TX", "US-WA", "US-FL"]);
    assert_eq!(points_for(&config, ScoreCheck::GeographicFocus), 10);

    config.geo.push("US-IL".to_string());
    assert_eq!(points_for(&config, ScoreCheck::GeographicFocus), 5);
}

#[test]
fn duration_bands() {
    let mut config = blank_config(Objective::Awareness);
    for (days, expected) in [
        (0, 0),
        (13, 0),
        (14, 5),
        (29, 5),
        (30, 10),
        (90, 10),
        (91, 5),
        (120, 5),
    ] {
        config.duration_days = days;
        assert_eq!(
            points_for(&config, ScoreCheck::Duration),
            expected,
            "{days} days"
        );
    }
}

#[test]
fn kpi_target_must_be_positive() {
    let mut config = blank_config(Objective::LeadGen);
    assert_eq!(points_for(&config, ScoreCheck::KpiTarget), 0);

    config.kpi_target = 0.5;
    assert_eq!(points_for(&config, ScoreCheck::KpiTarget), 5);
}

#[test]
fn complete_configuration_is_clamped_to_one_hundred() {
    let mut config = lead_gen_config();
    config.total_budget = 20_000;
    config.daily_budget = 400;
    config.duration_days = 45;
    config.audience_job_titles = strings(&["Product Manager"]);

    let raw: i32 = BASE_SCORE
        + score_breakdown(&config)
            .iter()
            .map(|outcome| outcome.points)
            .sum::<i32>();
    assert_eq!(raw, 120);
    assert_eq!(compute_score(&config).score, 100);
}

#[test]
fn check_points_never_exceed_their_maximum() {
    let mut config = lead_gen_config();
    config.audience_job_titles = strings(&["Product Manager"]);

    for outcome in score_breakdown(&config) {
        assert!(outcome.points >= 0);
        assert!(outcome.points <= outcome.check.max_points());
        assert!(!outcome.feedback.is_empty());
    }
}

#[test]
fn scoring_is_deterministic() {
    let config = lead_gen_config();
    let first = compute_score(&config);
    for _ in 0..10 {
        assert_eq!(compute_score(&config), first);
    }
}
