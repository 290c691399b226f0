use crate::infra::{load_configuration, InMemoryPlanPublisher};
use campaign_designer::config::DesignerConfig;
use campaign_designer::designer::{
    CampaignConfiguration, CampaignDesignerService, CampaignDraft, CampaignPlan, DesignReport,
    Objective, PrimaryKpi,
};
use campaign_designer::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a campaign configuration JSON file
    #[arg(long)]
    pub(crate) config: PathBuf,
    /// Export the result as a named campaign plan
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Wizard template recorded on the exported plan
    #[arg(long, requires = "name")]
    pub(crate) template: Option<String>,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Skip exporting the sample design as a plan
    #[arg(long)]
    pub(crate) skip_plan: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        config,
        name,
        template,
        json,
    } = args;

    let configuration = load_configuration(&config)?;
    let publisher = Arc::new(InMemoryPlanPublisher::default());
    let service = CampaignDesignerService::new(publisher, DesignerConfig::default());

    match name {
        Some(name) => {
            let plan = service.submit(CampaignDraft {
                name,
                configuration,
                selected_template: template,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", render_plan_summary(&plan));
            }
        }
        None => {
            let report = service.evaluate(&configuration);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render_design_report(&configuration, &report);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { json, skip_plan } = args;

    let configuration = demo_configuration();
    let publisher = Arc::new(InMemoryPlanPublisher::default());
    let service = CampaignDesignerService::new(publisher.clone(), DesignerConfig::default());

    let report = service.evaluate(&configuration);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Campaign designer demo");
        render_design_report(&configuration, &report);
    }

    if skip_plan {
        return Ok(());
    }

    let plan = match service.submit(CampaignDraft {
        name: "Q4 B2B pipeline".to_string(),
        configuration,
        selected_template: Some("b2b-lead-gen".to_string()),
    }) {
        Ok(plan) => plan,
        Err(err) => {
            println!("\nPlan export failed: {}", err);
            return Ok(());
        }
    };

    println!("\n{} plan(s) stored", publisher.plans().len());
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan_summary(&plan));
    }

    Ok(())
}

/// The B2B lead generation walkthrough used in stakeholder demos.
pub(crate) fn demo_configuration() -> CampaignConfiguration {
    CampaignConfiguration {
        objective: Objective::LeadGen,
        primary_kpi: PrimaryKpi::Cpl,
        total_budget: 15_000,
        daily_budget: 500,
        duration_days: 42,
        channels: vec![
            "Search".to_string(),
            "Meta".to_string(),
            "LinkedIn".to_string(),
        ],
        geo: vec!["CA-ON".to_string(), "CA-BC".to_string()],
        target_audience_text: "PMs".to_string(),
        audience_interests: vec!["Technology".to_string()],
        audience_job_titles: Vec::new(),
        audience_industries: Vec::new(),
        kpi_target: 35.0,
    }
}

pub(crate) fn render_design_report(configuration: &CampaignConfiguration, report: &DesignReport) {
    println!(
        "Objective: {} | Primary KPI: {} | Budget {} total, {} daily over {} days",
        configuration.objective.label(),
        configuration.primary_kpi.label(),
        configuration.total_budget,
        configuration.daily_budget,
        configuration.duration_days
    );

    println!("\nDesign score: {}/100", report.score.score);
    for line in report.score.feedback_lines() {
        println!("- {}", line);
    }

    if report.allocation.is_empty() {
        println!("\nBudget allocation: no catalog channels selected");
    } else {
        println!("\nBudget allocation");
        for entry in &report.allocation {
            println!(
                "- {}: {}% ({})",
                entry.channel.label(),
                entry.percentage,
                entry.amount
            );
        }
    }
}

pub(crate) fn render_plan_summary(plan: &CampaignPlan) -> String {
    let mut out = format!(
        "Exported plan '{}' (design score {})\n",
        plan.name, plan.design_score
    );
    out.push_str(&format!(
        "Objective: {} | Primary KPI: {} target {}\n",
        plan.objective.label(),
        plan.primary_kpi.label(),
        plan.kpi_target
    ));
    out.push_str(&format!(
        "Budget {} total, {} daily over {} days\n",
        plan.budget.total, plan.budget.daily, plan.budget.duration
    ));
    if let Some(template) = &plan.selected_template {
        out.push_str(&format!("Template: {}\n", template));
    }
    for entry in &plan.channels {
        out.push_str(&format!(
            "- {}: {}% ({})\n",
            entry.channel.label(),
            entry.percentage,
            entry.amount
        ));
    }
    out.push_str(&format!("Created {}\n", plan.created_at.to_rfc3339()));
    out
}
