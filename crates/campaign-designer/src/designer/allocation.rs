use super::domain::{CampaignConfiguration, Channel, Objective};
use serde::{Deserialize, Serialize};

/// Weights are expressed in basis points so shares stay exact.
pub const WEIGHT_SCALE: u32 = 10_000;

/// Weight a channel carries when no objective override applies.
pub fn base_weight(channel: Channel) -> u32 {
    match channel {
        Channel::Search => 3_000,
        Channel::Meta => 2_500,
        Channel::LinkedIn | Channel::YouTube => 1_500,
        Channel::PerformanceMax | Channel::TikTok | Channel::Display => 1_000,
        Channel::Email | Channel::Sms => 500,
    }
}

/// Channel weight after objective-specific overrides.
pub fn channel_weight(channel: Channel, objective: Objective) -> u32 {
    match (channel, objective) {
        (Channel::Search, Objective::LeadGen) => 4_000,
        (Channel::LinkedIn, Objective::LeadGen) => 2_000,
        (Channel::YouTube, Objective::Awareness) => 3_000,
        (Channel::PerformanceMax, Objective::EcommerceSales) => 3_000,
        _ => base_weight(channel),
    }
}

/// Budget share assigned to one selected channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAllocation {
    pub channel: Channel,
    pub percentage: u32,
    pub amount: i64,
}

pub type BudgetAllocation = Vec<ChannelAllocation>;

/// Split the total budget across selected catalog channels by weight.
///
/// Unknown channel names are skipped. Output follows selection order.
pub fn compute_budget_allocation(config: &CampaignConfiguration) -> BudgetAllocation {
    let weighted: Vec<(Channel, i128)> = config
        .known_channels()
        .into_iter()
        .map(|channel| (channel, i128::from(channel_weight(channel, config.objective))))
        .collect();

    let weight_sum: i128 = weighted.iter().map(|(_, weight)| weight).sum();
    if weight_sum == 0 {
        return Vec::new();
    }

    let mut percentages: Vec<i128> = weighted
        .iter()
        .map(|(_, weight)| round_half_up(weight * 100, weight_sum))
        .collect();

    let drift: i128 = percentages.iter().sum::<i128>() - 100;
    if drift.abs() > 1 {
        percentages = largest_remainder(&weighted, weight_sum);
    }

    let total = i128::from(config.total_budget);
    weighted
        .iter()
        .zip(percentages)
        .map(|((channel, weight), percentage)| ChannelAllocation {
            channel: *channel,
            percentage: percentage as u32,
            amount: round_half_up(weight * total, weight_sum) as i64,
        })
        .collect()
}

/// `numerator / denominator` rounded with halves towards positive infinity.
fn round_half_up(numerator: i128, denominator: i128) -> i128 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Apportion exactly 100 points, handing leftovers to the largest remainders.
fn largest_remainder(weighted: &[(Channel, i128)], weight_sum: i128) -> Vec<i128> {
    let mut shares: Vec<i128> = weighted
        .iter()
        .map(|(_, weight)| weight * 100 / weight_sum)
        .collect();

    let mut order: Vec<usize> = (0..weighted.len()).collect();
    // Stable sort keeps selection order among equal remainders.
    order.sort_by_key(|&index| std::cmp::Reverse(weighted[index].1 * 100 % weight_sum));

    let leftover = 100 - shares.iter().sum::<i128>();
    for index in order.into_iter().take(leftover.max(0) as usize) {
        shares[index] += 1;
    }
    shares
}
