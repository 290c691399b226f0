use serde::{Deserialize, Serialize};

/// Stated goal of a campaign; drives channel alignment and weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    LeadGen,
    EcommerceSales,
    AppInstalls,
    Awareness,
}

impl Objective {
    pub fn label(&self) -> &'static str {
        match self {
            Objective::LeadGen => "Lead Generation",
            Objective::EcommerceSales => "E-commerce Sales",
            Objective::AppInstalls => "App Installs",
            Objective::Awareness => "Brand Awareness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryKpi {
    #[serde(rename = "CPL")]
    Cpl,
    #[serde(rename = "CPA")]
    Cpa,
    #[serde(rename = "ROAS")]
    Roas,
    #[serde(rename = "CTR")]
    Ctr,
    Reach,
}

impl PrimaryKpi {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryKpi::Cpl => "CPL",
            PrimaryKpi::Cpa => "CPA",
            PrimaryKpi::Roas => "ROAS",
            PrimaryKpi::Ctr => "CTR",
            PrimaryKpi::Reach => "Reach",
        }
    }
}

/// Closed catalog of marketing channels the wizard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    Search,
    Meta,
    LinkedIn,
    YouTube,
    #[serde(rename = "Performance Max")]
    PerformanceMax,
    TikTok,
    Display,
    Email,
    #[serde(rename = "SMS")]
    Sms,
}

impl Channel {
    pub const CATALOG: [Channel; 9] = [
        Channel::Search,
        Channel::Meta,
        Channel::LinkedIn,
        Channel::YouTube,
        Channel::PerformanceMax,
        Channel::TikTok,
        Channel::Display,
        Channel::Email,
        Channel::Sms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Search => "Search",
            Channel::Meta => "Meta",
            Channel::LinkedIn => "LinkedIn",
            Channel::YouTube => "YouTube",
            Channel::PerformanceMax => "Performance Max",
            Channel::TikTok => "TikTok",
            Channel::Display => "Display",
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }

    /// Exact-spelling lookup; anything outside the catalog yields `None`.
    pub fn from_label(raw: &str) -> Option<Channel> {
        Channel::CATALOG
            .into_iter()
            .find(|channel| channel.label() == raw)
    }
}

/// Snapshot of every wizard field the scorer reads.
///
/// Budgets are whole currency units. Negative budgets and non-positive
/// durations are accepted and simply earn no points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignConfiguration {
    pub objective: Objective,
    pub primary_kpi: PrimaryKpi,
    #[serde(default)]
    pub total_budget: i64,
    #[serde(default)]
    pub daily_budget: i64,
    #[serde(default)]
    pub duration_days: i64,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub geo: Vec<String>,
    #[serde(default)]
    pub target_audience_text: String,
    #[serde(default)]
    pub audience_interests: Vec<String>,
    #[serde(default)]
    pub audience_job_titles: Vec<String>,
    #[serde(default)]
    pub audience_industries: Vec<String>,
    #[serde(default)]
    pub kpi_target: f64,
}

impl CampaignConfiguration {
    pub fn new(objective: Objective, primary_kpi: PrimaryKpi) -> Self {
        Self {
            objective,
            primary_kpi,
            total_budget: 0,
            daily_budget: 0,
            duration_days: 0,
            channels: Vec::new(),
            geo: Vec::new(),
            target_audience_text: String::new(),
            audience_interests: Vec::new(),
            audience_job_titles: Vec::new(),
            audience_industries: Vec::new(),
            kpi_target: 0.0,
        }
    }

    /// Catalog channels in selection order, skipping unknown names and repeats.
    pub fn known_channels(&self) -> Vec<Channel> {
        let mut resolved: Vec<Channel> = Vec::with_capacity(self.channels.len());
        for name in &self.channels {
            if let Some(channel) = Channel::from_label(name) {
                if !resolved.contains(&channel) {
                    resolved.push(channel);
                }
            }
        }
        resolved
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channels.iter().any(|name| name == channel.label())
    }

    /// Count of distinct selected names, known or not.
    pub fn channel_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.channels.len());
        for name in &self.channels {
            if !seen.contains(&name.as_str()) {
                seen.push(name);
            }
        }
        seen.len()
    }

    pub fn has_audience_text(&self) -> bool {
        !self.target_audience_text.is_empty()
    }
}
