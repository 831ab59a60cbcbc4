//! Per-section scorers. Each scorer is a pure function over one raw
//! section object and returns a 0-100 score with a rationale entry per
//! criterion. Point tables are fixed so that the best answer on every
//! criterion, with all gates open, sums to exactly 100 per section.

use super::super::classifiers::{
    classify_completeness, classify_multi_select, enum_points, normalized_text, presence_points,
    selected_strings, Completeness,
};
use super::SectionScore;
use crate::assessment::intake::SectionKey;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub(crate) fn score_section(key: SectionKey, section: &Map<String, Value>) -> SectionScore {
    match key {
        SectionKey::CompanyProfile => score_company_profile(section),
        SectionKey::ContractOperations => score_contract_operations(section),
        SectionKey::TemplatesDocuments => score_templates_documents(section),
        SectionKey::Integrations => score_integrations(section),
        SectionKey::DataMigration => score_data_migration(section),
        SectionKey::Stakeholders => score_stakeholders(section),
        SectionKey::SecurityCompliance => score_security_compliance(section),
    }
}

/// Accumulates criterion contributions and their explanations. Penalties
/// may push the running total negative; `finish` floors the score at 0.
struct SectionTally {
    points: i32,
    rationale: BTreeMap<String, String>,
}

impl SectionTally {
    fn new() -> Self {
        Self {
            points: 0,
            rationale: BTreeMap::new(),
        }
    }

    fn add(&mut self, criterion: &str, points: u32, note: String) {
        self.points += points as i32;
        self.rationale.insert(criterion.to_string(), note);
    }

    fn subtract(&mut self, criterion: &str, points: u32, note: String) {
        self.points -= points as i32;
        self.rationale.insert(criterion.to_string(), note);
    }

    fn presence(&mut self, section: &Map<String, Value>, field: &str, full: u32) {
        let value = section.get(field);
        let points = presence_points(value, full);
        let note = match classify_completeness(value) {
            Completeness::Complete => format!("answered in full ({points} of {full} pts)"),
            Completeness::Partial => format!("brief answer ({points} of {full} pts)"),
            Completeness::Missing => format!("not provided (0 of {full} pts)"),
        };
        self.add(field, points, note);
    }

    fn enumerated(
        &mut self,
        section: &Map<String, Value>,
        field: &str,
        table: &[(&str, u32)],
        unmapped: u32,
    ) {
        let value = section.get(field);
        let points = enum_points(value, table, unmapped);
        let note = match normalized_text(value) {
            None => "not provided (0 pts)".to_string(),
            Some(raw) if points == unmapped
                && !table.iter().any(|(label, _)| raw.contains(label)) =>
            {
                format!("unrecognized answer '{raw}' scored at mid-tier ({points} pts)")
            }
            Some(raw) => format!("'{raw}' scored {points} pts"),
        };
        self.add(field, points, note);
    }

    fn multi_select(
        &mut self,
        section: &Map<String, Value>,
        field: &str,
        base: u32,
        increment: u32,
        cap: u32,
    ) {
        let value = section.get(field);
        let count = selected_strings(value).len();
        let points = classify_multi_select(value, base, increment, cap);
        let note = if count == 0 {
            "no selections (0 pts)".to_string()
        } else {
            format!("{count} selection(s) for {points} pts (cap {cap})")
        };
        self.add(field, points, note);
    }

    fn finish(self) -> SectionScore {
        SectionScore {
            score: self.points.clamp(0, 100) as u8,
            rationale: self.rationale,
        }
    }
}

const INDUSTRY_POINTS: &[(&str, u32)] = &[
    ("legal", 20),
    ("financial", 20),
    ("healthcare", 18),
    ("technology", 16),
    ("manufacturing", 14),
    ("retail", 12),
];

const COMPANY_SIZE_POINTS: &[(&str, u32)] = &[
    ("1000+", 20),
    ("201-1000", 18),
    ("51-200", 14),
    ("1-50", 10),
];

fn score_company_profile(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.presence(section, "company_name", 20);
    tally.enumerated(section, "industry", INDUSTRY_POINTS, 10);
    tally.enumerated(section, "company_size", COMPANY_SIZE_POINTS, 10);
    tally.presence(section, "primary_contact", 20);
    tally.multi_select(section, "operating_regions", 10, 5, 20);
    tally.finish()
}

const CONTRACT_VOLUME_POINTS: &[(&str, u32)] = &[
    ("200+", 25),
    ("51-200", 20),
    ("11-50", 15),
    ("1-10", 10),
];

const CURRENT_PROCESS_POINTS: &[(&str, u32)] = &[
    ("automated", 25),
    ("dedicated", 25),
    ("hybrid", 18),
    ("spreadsheet", 18),
    ("manual", 10),
];

const RENEWAL_TRACKING_POINTS: &[(&str, u32)] = &[
    ("automated", 15),
    ("calendar", 10),
    ("manual", 10),
    ("none", 5),
];

fn score_contract_operations(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.enumerated(section, "monthly_contract_volume", CONTRACT_VOLUME_POINTS, 15);
    tally.enumerated(section, "current_process", CURRENT_PROCESS_POINTS, 12);
    tally.multi_select(section, "pain_points", 10, 5, 20);
    tally.presence(section, "approval_workflow", 15);
    tally.enumerated(section, "renewal_tracking", RENEWAL_TRACKING_POINTS, 8);
    tally.finish()
}

const TEMPLATE_COUNT_POINTS: &[(&str, u32)] = &[("11-50", 30), ("50+", 20), ("1-10", 15)];

fn score_templates_documents(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.enumerated(section, "template_count", TEMPLATE_COUNT_POINTS, 15);
    tally.multi_select(section, "template_formats", 10, 5, 20);
    tally.presence(section, "standard_clause_library", 25);
    tally.presence(section, "sample_documents_provided", 25);
    tally.finish()
}

const API_ACCESS_POINTS: &[(&str, u32)] = &[("yes", 25), ("partial", 15), ("no", 5)];

const SECURITY_SENSITIVITY_HIGH: &[&str] = &["sap", "oracle", "workday"];
const SECURITY_SENSITIVITY_MEDIUM: &[&str] = &["salesforce", "netsuite", "dynamics"];
const SECURITY_SENSITIVITY_LOW: &[&str] = &["slack", "sharepoint", "google drive"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SensitivityTier {
    High,
    Medium,
    Low,
}

impl SensitivityTier {
    const fn penalty(self) -> u32 {
        match self {
            Self::High => 15,
            Self::Medium => 10,
            Self::Low => 5,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Highest sensitivity tier among the requested systems, matched by
/// case-insensitive substring against the fixed sensitive-system list.
fn sensitivity_of(systems: &[&str]) -> Option<SensitivityTier> {
    let matches_any = |list: &[&str]| {
        systems.iter().any(|system| {
            let system = system.to_lowercase();
            list.iter().any(|sensitive| system.contains(sensitive))
        })
    };

    if matches_any(SECURITY_SENSITIVITY_HIGH) {
        Some(SensitivityTier::High)
    } else if matches_any(SECURITY_SENSITIVITY_MEDIUM) {
        Some(SensitivityTier::Medium)
    } else if matches_any(SECURITY_SENSITIVITY_LOW) {
        Some(SensitivityTier::Low)
    } else {
        None
    }
}

const INTEGRATION_GATE_POINTS: u32 = 30;

/// Gated section: when the customer opts out of integrations the gate's
/// own points are all the section can earn. That reduced maximum is
/// intentional and load-bearing; do not normalize it back to 100.
fn score_integrations(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();

    let gate = normalized_text(section.get("integration_need"));
    match &gate {
        Some(_) => tally.add(
            "integration_need",
            INTEGRATION_GATE_POINTS,
            format!("answered ({INTEGRATION_GATE_POINTS} pts)"),
        ),
        None => tally.add("integration_need", 0, "not provided (0 pts)".to_string()),
    }

    let opted_out = gate
        .as_deref()
        .map(|raw| raw.contains("none") || raw.contains("not needed"))
        .unwrap_or(false);
    if opted_out {
        tally.rationale.insert(
            "integration_need".to_string(),
            format!(
                "integrations not needed; section capped at the gate's {INTEGRATION_GATE_POINTS} pts"
            ),
        );
        return tally.finish();
    }

    let systems = selected_strings(section.get("requested_systems"));
    let api_answer = normalized_text(section.get("api_access_confirmed"));
    let api_denied = match api_answer.as_deref() {
        None => true,
        Some(raw) => raw.starts_with("no"),
    };
    let technical_contact_missing =
        classify_completeness(section.get("technical_contact")) == Completeness::Missing;

    // Blocking rule: integrations requested without API access or a
    // technical contact cannot be onboarded, whatever else was answered.
    if !systems.is_empty() && api_denied && technical_contact_missing {
        let mut rationale = BTreeMap::new();
        rationale.insert(
            "blocked".to_string(),
            format!(
                "{} integration(s) requested with no API access and no technical contact; section scored 0",
                systems.len()
            ),
        );
        return SectionScore {
            score: 0,
            rationale,
        };
    }

    tally.multi_select(section, "requested_systems", 15, 5, 25);
    tally.enumerated(section, "api_access_confirmed", API_ACCESS_POINTS, 15);
    tally.presence(section, "technical_contact", 20);

    let security_approved = normalized_text(section.get("security_review_status"))
        .map(|raw| raw.contains("approved"))
        .unwrap_or(false);
    if !security_approved {
        if let Some(tier) = sensitivity_of(&systems) {
            let penalty = tier.penalty();
            tally.subtract(
                "security_review",
                penalty,
                format!(
                    "{} sensitivity system requested without an approved security review (-{penalty} pts)",
                    tier.label()
                ),
            );
        }
    }

    tally.finish()
}

const LEGACY_VOLUME_POINTS: &[(&str, u32)] = &[
    ("none", 30),
    ("small", 25),
    ("medium", 18),
    ("large", 10),
];

const CSV_EXPORT_POINTS: &[(&str, u32)] = &[("yes", 25), ("partial", 12), ("no", 5)];

fn score_data_migration(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.enumerated(section, "legacy_volume", LEGACY_VOLUME_POINTS, 18);
    tally.presence(section, "data_location", 25);
    tally.enumerated(section, "csv_export_capability", CSV_EXPORT_POINTS, 12);
    tally.presence(section, "data_owner", 20);
    tally.finish()
}

const TRAINING_PLAN_POINTS: &[(&str, u32)] = &[
    ("dedicated", 20),
    ("blended", 15),
    ("self", 12),
    ("none", 5),
];

fn score_stakeholders(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.presence(section, "executive_sponsor", 25);

    // No dedicated decision-maker field existed in early questionnaires;
    // the primary legal contact stands in when the field is absent.
    let dedicated = section
        .get("decision_maker")
        .filter(|value| classify_completeness(Some(value)) != Completeness::Missing);
    match dedicated {
        Some(value) => {
            let points = presence_points(Some(value), 25);
            tally.add(
                "decision_maker",
                points,
                format!("named decision maker ({points} of 25 pts)"),
            );
        }
        None => {
            let proxy = section.get("primary_legal_contact");
            let points = presence_points(proxy, 25);
            let note = if points == 0 {
                "no decision maker or legal contact named (0 of 25 pts)".to_string()
            } else {
                format!("primary legal contact used as decision-maker proxy ({points} of 25 pts)")
            };
            tally.add("decision_maker", points, note);
        }
    }

    tally.enumerated(section, "training_plan", TRAINING_PLAN_POINTS, 10);
    tally.multi_select(section, "change_management_channels", 10, 5, 15);
    tally.presence(section, "go_live_expectation", 15);
    tally.finish()
}

const SECURITY_REVIEW_POINTS: &[(&str, u32)] = &[
    ("approved", 30),
    ("scheduled", 20),
    ("in progress", 15),
    ("not started", 5),
];

fn score_security_compliance(section: &Map<String, Value>) -> SectionScore {
    let mut tally = SectionTally::new();
    tally.enumerated(section, "security_review_process", SECURITY_REVIEW_POINTS, 15);
    tally.multi_select(section, "compliance_frameworks", 15, 5, 30);
    tally.presence(section, "sso_provider", 20);
    tally.presence(section, "data_residency_requirements", 20);
    tally.finish()
}
