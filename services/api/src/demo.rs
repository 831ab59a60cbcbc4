use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use onboard_iq::assessment::{
    score_intake, synthesize_plan, ImplementationPlan, IntakeResponse, PlanRequest,
    ReadinessAssessment,
};
use onboard_iq::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to an intake questionnaire JSON file
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Also synthesize the implementation plan from the intake
    #[arg(long)]
    pub(crate) plan: bool,
    /// Anchor date for plan synthesis (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Anchor date for plan synthesis (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the implementation-plan portion of the demo
    #[arg(long)]
    pub(crate) skip_plan: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let intake: IntakeResponse = serde_json::from_str(&raw)?;

    let assessment = score_intake(&intake);
    render_assessment(&assessment);

    if args.plan {
        let today = args.today.unwrap_or_else(|| Local::now().date_naive());
        let plan = synthesize_plan(&PlanRequest::from_intake(&intake), today);
        render_plan(&plan);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Onboarding assessment demo");

    let intake = sample_intake()?;
    let assessment = score_intake(&intake);
    render_assessment(&assessment);

    if args.skip_plan {
        return Ok(());
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let plan = synthesize_plan(&PlanRequest::from_intake(&intake), today);
    render_plan(&plan);

    Ok(())
}

/// A mid-band standard intake: mostly answered, with a few realistic gaps
/// so the demo output shows partial credit and rationale trails.
fn sample_intake() -> Result<IntakeResponse, AppError> {
    let intake = serde_json::json!({
        "persona": "standard",
        "sections": {
            "company_profile": {
                "company_name": "Meridian Outdoor Brands",
                "industry": "Consumer retail",
                "company_size": "201-1000",
                "primary_contact": "Sam Delgado, Legal Operations Manager",
                "operating_regions": ["North America", "EMEA"],
            },
            "contract_operations": {
                "monthly_contract_volume": "51-200",
                "current_process": "Spreadsheets and shared drives",
                "pain_points": ["Renewals slip through", "No approval visibility"],
                "approval_workflow": "Legal reviews everything over 25k",
                "complexity": "high",
                "workflow_complexity": "moderate",
            },
            "templates_documents": {
                "template_count": "11-50",
                "template_formats": ["DOCX", "PDF"],
                "sample_documents_provided": "Yes, five recent MSAs shared",
            },
            "integrations": {
                "integration_need": "Required for CRM and signature",
                "requested_systems": ["Salesforce", "DocuSign"],
                "api_access_confirmed": "yes",
                "technical_contact": "Ravi Patel, IT Integrations",
            },
            "data_migration": {
                "legacy_volume": "medium",
                "data_location": "Legacy CLM export and shared drives",
                "csv_export_capability": "yes",
                "csv_migration_required": "yes",
            },
            "stakeholders": {
                "executive_sponsor": "General Counsel sponsors the rollout",
                "primary_legal_contact": "Sam Delgado, Legal Operations Manager",
                "known_risks": ["Stakeholder availability"],
                "go_live_expectation": "8-12 weeks",
            },
        },
    });

    Ok(serde_json::from_value(intake)?)
}

fn render_assessment(assessment: &ReadinessAssessment) {
    println!(
        "\nReadiness assessment ({} persona)",
        assessment.persona.label()
    );
    println!(
        "Overall score: {} -> {}",
        assessment.score.overall, assessment.status.label
    );
    println!("  {}", assessment.status.description);

    println!("\nSection breakdown");
    for (key, section) in &assessment.sections {
        println!("- {}: {}", key.label(), section.score);
        for (criterion, explanation) in &section.rationale {
            println!("    {criterion}: {explanation}");
        }
    }
}

fn render_plan(plan: &ImplementationPlan) {
    println!("\nImplementation plan");
    println!(
        "Estimated timeline: {} (recommended go-live {})",
        plan.estimated_timeline, plan.recommended_go_live
    );

    for phase in &plan.phases {
        println!(
            "\nPhase {}: {} ({})",
            phase.number, phase.name, phase.duration
        );
        if !phase.dependencies.is_empty() {
            println!("  Depends on: {}", phase.dependencies.join(", "));
        }
        for activity in &phase.activities {
            println!("  - {activity}");
        }
    }

    if !plan.internal_notes.is_empty() {
        println!("\nInternal notes");
        for note in &plan.internal_notes {
            println!("- {note}");
        }
    }
}
