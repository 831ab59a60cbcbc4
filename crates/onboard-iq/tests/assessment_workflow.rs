use chrono::{Duration, NaiveDate};
use onboard_iq::assessment::{
    score_intake, synthesize_plan, IntakeResponse, Persona, PlanRequest, SectionKey,
};

fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid anchor date")
}

fn enterprise_intake() -> IntakeResponse {
    let value = serde_json::json!({
        "persona": "enterprise",
        "sections": {
            "company_profile": {
                "company_name": "Helios Energy Holdings",
                "industry": "Energy",
                "company_size": "1000+",
                "primary_contact": "Ingrid Larsen, Deputy General Counsel",
                "operating_regions": ["North America", "EMEA", "APAC"],
            },
            "contract_operations": {
                "monthly_contract_volume": "200+",
                "current_process": "Hybrid of legacy CLM and spreadsheets",
                "pain_points": ["Approval bottlenecks", "No renewal visibility"],
                "approval_workflow": "Legal, finance, and trading desk sign-off",
                "complexity": "high",
                "workflow_complexity": "complex",
            },
            "templates_documents": {
                "template_count": "50+",
                "template_formats": ["DOCX", "PDF"],
                "standard_clause_library": "Clause library maintained by the legal ops team",
                "sample_documents_provided": "Yes, a dozen PPAs and MSAs shared",
            },
            "integrations": {
                "integration_need": "Required for CRM and ERP",
                "requested_systems": ["Salesforce", "SAP"],
                "api_access_confirmed": "yes",
                "technical_contact": "Omar Haddad, Enterprise Architecture",
                "security_review_status": "in progress",
                "custom_development": "yes",
                "custom_development_details": "Clause-extraction feed into the trading risk system",
            },
            "data_migration": {
                "legacy_volume": "large",
                "data_location": "Legacy CLM database plus SharePoint archives",
                "csv_export_capability": "yes",
                "csv_migration_required": "yes",
                "data_owner": "Priya Nair, Contracts Operations",
            },
            "stakeholders": {
                "executive_sponsor": "General Counsel sponsors the rollout",
                "decision_maker": "Ingrid Larsen, Deputy General Counsel",
                "primary_legal_contact": "Ingrid Larsen, Deputy General Counsel",
                "training_plan": "Phased enablement by business unit",
                "known_risks": ["Security review delays", "Integration dependencies"],
                "go_live_expectation": "8-12 weeks",
            },
            "security_compliance": {
                "security_review_process": "in progress",
                "compliance_frameworks": ["SOC 2", "ISO 27001"],
                "sso_provider": "Azure AD SAML single sign-on",
                "data_residency_requirements": "EU trading entities stay in Frankfurt",
            },
        },
    });

    serde_json::from_value(value).expect("intake deserializes")
}

#[test]
fn enterprise_intake_scores_with_full_breakdown() {
    let intake = enterprise_intake();
    let assessment = score_intake(&intake);

    assert_eq!(assessment.persona, Persona::Enterprise);
    assert_eq!(assessment.score.breakdown.len(), 7);
    assert!(!assessment.status.label.is_empty());

    // SAP is on the high-sensitivity list and the security review is still
    // in progress, so the integrations rationale records the penalty.
    let integrations = &assessment.sections[&SectionKey::Integrations];
    assert!(integrations.rationale["security_review"].contains("high"));

    // The overall score is exactly the recomputed weighted sum.
    let expected: f64 = assessment
        .score
        .breakdown
        .iter()
        .map(|(key, score)| {
            let weight = match key {
                SectionKey::CompanyProfile => 0.05,
                SectionKey::ContractOperations => 0.15,
                SectionKey::TemplatesDocuments => 0.15,
                SectionKey::Integrations => 0.20,
                SectionKey::DataMigration => 0.15,
                SectionKey::Stakeholders => 0.15,
                SectionKey::SecurityCompliance => 0.15,
            };
            f64::from(*score) * weight
        })
        .sum();
    assert_eq!(assessment.score.overall, expected.round() as u8);
}

#[test]
fn enterprise_intake_plans_an_eleven_week_rollout() {
    let intake = enterprise_intake();
    let request = PlanRequest::from_intake(&intake);
    let plan = synthesize_plan(&request, anchor_date());

    // High complexity (1.3) against an 8-12 week expectation (1.1):
    // 8 * 1.3 * 1.1 = 11.44, rounded to 11 weeks.
    assert_eq!(plan.estimated_timeline, "11 weeks");
    assert_eq!(
        plan.recommended_go_live,
        anchor_date() + Duration::weeks(11)
    );

    for (index, phase) in plan.phases.iter().enumerate() {
        assert_eq!(phase.number, index as u32 + 1);
        assert!(!phase.activities.is_empty());
    }

    let names: Vec<&str> = plan.phases.iter().map(|phase| phase.name).collect();
    let custom_index = names
        .iter()
        .position(|name| *name == "Custom Development")
        .expect("custom development phase present");
    assert_eq!(names[custom_index - 1], "Workflow Configuration");

    let discovery = plan
        .phases
        .iter()
        .find(|phase| phase.name == "Discovery & Kickoff")
        .expect("discovery phase present");
    assert!(discovery
        .activities
        .iter()
        .any(|task| task.contains("extended discovery workshops")));
    assert!(discovery
        .activities
        .iter()
        .any(|task| task.contains("security team")));

    let migration = plan
        .phases
        .iter()
        .find(|phase| phase.name == "Data Migration")
        .expect("migration phase present");
    assert!(migration.activities.iter().any(|task| task.contains("CSV")));
    assert!(plan
        .internal_notes
        .iter()
        .any(|note| note.contains("UAT hours")));
    assert!(plan
        .internal_notes
        .iter()
        .any(|note| note.contains("trading risk system")));

    let integrations = plan
        .phases
        .iter()
        .find(|phase| phase.name == "Integrations")
        .expect("integrations phase present");
    assert!(integrations
        .activities
        .iter()
        .any(|task| task.contains("Salesforce")));
    let engineering_tasks = integrations
        .activities
        .iter()
        .filter(|task| task.contains("engineering capacity"))
        .count();
    assert_eq!(engineering_tasks, 1);
}

#[test]
fn sparse_standard_intake_degrades_instead_of_failing() {
    let value = serde_json::json!({
        "sections": {
            "company_profile": {
                "company_name": "Quill & Co",
            },
        },
    });
    let intake: IntakeResponse = serde_json::from_value(value).expect("intake deserializes");

    let assessment = score_intake(&intake);
    assert_eq!(assessment.persona, Persona::Standard);
    assert_eq!(assessment.score.breakdown.len(), 6);
    assert_eq!(assessment.status.label, "Not Ready");

    let plan = synthesize_plan(&PlanRequest::from_intake(&intake), anchor_date());
    assert_eq!(plan.estimated_timeline, "8 weeks");
    let names: Vec<&str> = plan.phases.iter().map(|phase| phase.name).collect();
    assert!(!names.contains(&"Data Migration"));
    assert!(!names.contains(&"Integrations"));
    assert!(plan.internal_notes.is_empty());
}
