use crate::infra::{
    default_scoring_config, InMemoryAssessmentRepository, InMemoryLeadRepository,
};
use clap::{Args, ValueEnum};
use riskcheck::assessment::{
    AnswerSubmission, AssessmentService, Catalog, LeadSubmission, ModuleId,
};
use riskcheck::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answer profile used to fill in the checkup.
    #[arg(long, value_enum, default_value = "mixed")]
    pub(crate) profile: DemoProfile,
    /// Catalog module to run the checkup against.
    #[arg(long, default_value = "clbh")]
    pub(crate) module: String,
    /// Skip the lead capture portion of the demo.
    #[arg(long)]
    pub(crate) skip_lead: bool,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy)]
pub(crate) enum DemoProfile {
    /// Best answer everywhere.
    Cautious,
    /// Answers cycle across the option tiers.
    #[default]
    Mixed,
    /// Worst answer everywhere.
    Exposed,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        module,
        skip_lead,
    } = args;

    let catalog = Arc::new(Catalog::standard());
    let service = Arc::new(AssessmentService::new(
        catalog.clone(),
        Arc::new(InMemoryAssessmentRepository::default()),
        Arc::new(InMemoryLeadRepository::default()),
        default_scoring_config(),
    ));

    let module = ModuleId(module);
    let submissions = profile_answers(&catalog, profile);

    println!("Contractor legal checkup demo ({profile:?} profile)");
    let created = service.create(vec![module.clone()])?;
    println!("- Opened assessment {} ({})", created.id.0, created.status.label());

    let record = service.submit(&created.id, &submissions)?;
    let Some(result) = record.result.as_ref() else {
        // submit() freezes a result on success; reaching this means the
        // record came back corrupted.
        println!(
            "- Assessment {} is {} but carries no result; aborting",
            record.id.0,
            record.status.label()
        );
        return Ok(());
    };
    println!("- Assessment is now {}", record.status.label());

    println!(
        "- Scored {}/{} ({}%) -> {} | confidence {}%",
        result.total_score,
        result.max_possible_score,
        result.score_percentage,
        result.risk_level.label(),
        result.confidence
    );
    println!("Area breakdown:");
    for area in &result.area_scores {
        println!(
            "  - {}: {}/{} -> {}{}",
            area.area_name,
            area.score,
            area.max_score,
            area.risk_level.label(),
            if area.trigger_flags.is_empty() {
                String::new()
            } else {
                format!(" ({} flags)", area.trigger_flags.len())
            }
        );
    }

    if !result.top_risks.is_empty() {
        println!("Top risks:");
        for risk in &result.top_risks {
            println!(
                "  - [{}] {} ({})",
                risk.severity.label(),
                risk.title,
                risk.area_name
            );
        }
    }
    if !result.action_plan.is_empty() {
        println!("Action plan:");
        for item in &result.action_plan {
            println!(
                "  {}. {} [{} urgency]",
                item.priority,
                item.action,
                item.urgency.label()
            );
        }
    }

    if skip_lead {
        return Ok(());
    }

    println!("\nLead capture demo");
    let lead = service.capture_lead(LeadSubmission {
        name: "Demo Contractor".to_string(),
        email: "demo@example.com".to_string(),
        phone: "555-0100".to_string(),
        business_name: "Demo Builders LLC".to_string(),
        state: "IA".to_string(),
        modules: vec![module],
        situation: "Walkthrough of the checkup flow".to_string(),
        assessment_id: Some(created.id),
    })?;
    println!(
        "- Captured lead {} with score {}",
        lead.id.0,
        lead.score.as_deref().unwrap_or("n/a")
    );

    Ok(())
}

fn profile_answers(catalog: &Catalog, profile: DemoProfile) -> Vec<AnswerSubmission> {
    let tiers = ["green", "yellow", "red"];
    catalog
        .all_questions()
        .enumerate()
        .map(|(index, question)| AnswerSubmission {
            question_id: question.id.clone(),
            value: match profile {
                DemoProfile::Cautious => "green".to_string(),
                DemoProfile::Mixed => tiers[index % tiers.len()].to_string(),
                DemoProfile::Exposed => "red".to_string(),
            },
        })
        .collect()
}
