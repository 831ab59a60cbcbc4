use crate::assessment::intake::{IntakeResponse, Persona, SectionKey};
use serde_json::{json, Map, Value};

pub(super) fn as_section(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("section object")
}

/// Best-tier answers for one section: every field present, best literal,
/// all gates open. Each of these must score exactly 100.
pub(super) fn best_section(key: SectionKey) -> Map<String, Value> {
    let value = match key {
        SectionKey::CompanyProfile => json!({
            "company_name": "Northwind Legal Group",
            "industry": "Legal Services",
            "company_size": "1000+",
            "primary_contact": "Dana Whitfield, General Counsel",
            "operating_regions": ["North America", "EMEA", "APAC"],
        }),
        SectionKey::ContractOperations => json!({
            "monthly_contract_volume": "200+",
            "current_process": "Dedicated contract tool",
            "pain_points": ["Slow approvals", "No version control", "Renewals slip"],
            "approval_workflow": "Two-step legal and finance approval",
            "renewal_tracking": "Automated reminders",
        }),
        SectionKey::TemplatesDocuments => json!({
            "template_count": "11-50",
            "template_formats": ["DOCX", "PDF", "Markdown"],
            "standard_clause_library": "Central clause library maintained in SharePoint",
            "sample_documents_provided": "Yes, ten recent samples shared",
        }),
        SectionKey::Integrations => json!({
            "integration_need": "Required for CRM and signature",
            "requested_systems": ["Salesforce", "DocuSign", "Slack"],
            "api_access_confirmed": "yes",
            "technical_contact": "Priya Raman, Integrations Lead",
            "security_review_status": "approved",
        }),
        SectionKey::DataMigration => json!({
            "legacy_volume": "none",
            "data_location": "AWS S3 archive and SharePoint",
            "csv_export_capability": "yes",
            "data_owner": "Miguel Torres, Operations",
        }),
        SectionKey::Stakeholders => json!({
            "executive_sponsor": "Chief Legal Officer sponsors the rollout",
            "decision_maker": "Alex Chen, VP Legal Operations",
            "training_plan": "Dedicated enablement program",
            "change_management_channels": ["Town halls", "Slack updates"],
            "go_live_expectation": "8-12 weeks",
        }),
        SectionKey::SecurityCompliance => json!({
            "security_review_process": "approved",
            "compliance_frameworks": ["SOC 2", "ISO 27001", "GDPR", "HIPAA"],
            "sso_provider": "Okta SAML single sign-on",
            "data_residency_requirements": "EU data must stay in Frankfurt",
        }),
    };
    as_section(value)
}

pub(super) fn best_intake(persona: Persona) -> IntakeResponse {
    let roster: &[SectionKey] = match persona {
        Persona::Standard => &[
            SectionKey::CompanyProfile,
            SectionKey::ContractOperations,
            SectionKey::TemplatesDocuments,
            SectionKey::Integrations,
            SectionKey::DataMigration,
            SectionKey::Stakeholders,
        ],
        Persona::Enterprise => &[
            SectionKey::CompanyProfile,
            SectionKey::ContractOperations,
            SectionKey::TemplatesDocuments,
            SectionKey::Integrations,
            SectionKey::DataMigration,
            SectionKey::Stakeholders,
            SectionKey::SecurityCompliance,
        ],
    };

    let mut intake = IntakeResponse {
        persona,
        ..IntakeResponse::default()
    };
    for key in roster {
        intake
            .sections
            .insert(key.as_str().to_string(), best_section(*key));
    }
    intake
}
