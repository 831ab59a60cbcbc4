//! Static contribution tables for the plan synthesizer, keyed by decision
//! axis. Every axis resolves raw questionnaire text to an enum tier with
//! a documented default, so the synthesizer stays total over its input.

use super::PhaseKind;

fn normalized(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Deployment complexity. Scales the baseline timeline and may add
/// discovery and testing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    pub fn resolve(raw: Option<&str>) -> Self {
        match normalized(raw) {
            Some(value) if value.contains("high") => Self::High,
            Some(value) if value.contains("low") => Self::Low,
            _ => Self::Medium,
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.3,
        }
    }

    pub fn extra_tasks(self) -> &'static [(PhaseKind, &'static str)] {
        match self {
            Self::Low | Self::Medium => &[],
            Self::High => &[
                (
                    PhaseKind::Discovery,
                    "Run extended discovery workshops covering every contract type and business unit.",
                ),
                (
                    PhaseKind::TestingUat,
                    "Schedule additional regression cycles for the high-complexity rollout.",
                ),
            ],
        }
    }
}

/// Go-live expectation buckets. Defaults to the second bucket when the
/// answer matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoLiveTier {
    UnderFourWeeks,
    FourToEightWeeks,
    EightToTwelveWeeks,
    Flexible,
}

impl GoLiveTier {
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(value) = normalized(raw) else {
            return Self::FourToEightWeeks;
        };
        if value.contains("8-12") {
            Self::EightToTwelveWeeks
        } else if value.contains("4-8") {
            Self::FourToEightWeeks
        } else if value.contains("under 4") || value.contains("asap") || value.contains("<4") {
            Self::UnderFourWeeks
        } else if value.contains("12+") || value.contains("flexible") || value.contains("no rush") {
            Self::Flexible
        } else {
            Self::FourToEightWeeks
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::UnderFourWeeks => 0.75,
            Self::FourToEightWeeks => 1.0,
            Self::EightToTwelveWeeks => 1.1,
            Self::Flexible => 1.25,
        }
    }

    pub fn extra_tasks(self) -> &'static [(PhaseKind, &'static str)] {
        match self {
            Self::UnderFourWeeks => &[(
                PhaseKind::Discovery,
                "Confirm accelerated-timeline scope cuts with the project sponsor.",
            )],
            Self::FourToEightWeeks | Self::EightToTwelveWeeks | Self::Flexible => &[],
        }
    }
}

/// Template library size. Accepts either a literal tier name or a
/// count-range string ("1-10", "11-50", "50+").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVolumeTier {
    Small,
    Medium,
    Large,
}

impl TemplateVolumeTier {
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(value) = normalized(raw) else {
            return Self::Small;
        };
        if value.contains("large") {
            return Self::Large;
        }
        if value.contains("medium") {
            return Self::Medium;
        }
        if value.contains("small") {
            return Self::Small;
        }

        let Some(bound) = last_number(&value) else {
            return Self::Small;
        };
        if value.contains('+') {
            // Open range: "50+" and beyond is a large library.
            if bound > 10 {
                Self::Large
            } else {
                Self::Medium
            }
        } else if bound <= 10 {
            Self::Small
        } else if bound <= 50 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn tasks(self) -> &'static [&'static str] {
        const SMALL: &[&str] =
            &["Convert the starter template set and validate merge fields."];
        const MEDIUM: &[&str] = &[
            "Convert the starter template set and validate merge fields.",
            "Batch-convert remaining templates with a clause-mapping review.",
        ];
        const LARGE: &[&str] = &[
            "Convert the starter template set and validate merge fields.",
            "Batch-convert remaining templates with a clause-mapping review.",
            "Stagger template conversion into weekly batches with owner sign-off.",
        ];
        match self {
            Self::Small => SMALL,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
        }
    }
}

fn last_number(raw: &str) -> Option<u32> {
    raw.split(|c: char| !c.is_ascii_digit())
        .filter(|chunk| !chunk.is_empty())
        .last()
        .and_then(|chunk| chunk.parse().ok())
}

/// Approval-workflow complexity, substring-matched with a simple default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowComplexityTier {
    Simple,
    Medium,
    Complex,
}

impl WorkflowComplexityTier {
    pub fn resolve(raw: Option<&str>) -> Self {
        match normalized(raw) {
            Some(value) if value.contains("complex") || value.contains("advanced") => Self::Complex,
            Some(value) if value.contains("medium") || value.contains("moderate") => Self::Medium,
            _ => Self::Simple,
        }
    }

    pub fn tasks(self) -> &'static [&'static str] {
        const SIMPLE: &[&str] = &["Configure the standard two-step approval workflow."];
        const MEDIUM: &[&str] = &[
            "Configure the standard two-step approval workflow.",
            "Model conditional routing rules for department-specific approvals.",
        ];
        const COMPLEX: &[&str] = &[
            "Configure the standard two-step approval workflow.",
            "Model conditional routing rules for department-specific approvals.",
            "Workshop multi-stage approval matrices with parallel reviewer groups.",
        ];
        match self {
            Self::Simple => SIMPLE,
            Self::Medium => MEDIUM,
            Self::Complex => COMPLEX,
        }
    }
}

/// Legacy contract migration volume. "None" removes the migration phase
/// entirely: every migration contribution is skipped, not filtered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationVolumeTier {
    None,
    Small,
    Medium,
    Large,
}

impl MigrationVolumeTier {
    pub fn resolve(raw: Option<&str>) -> Self {
        match normalized(raw) {
            Some(value) if value.contains("large") => Self::Large,
            Some(value) if value.contains("medium") => Self::Medium,
            Some(value) if value.contains("small") => Self::Small,
            _ => Self::None,
        }
    }

    pub fn tasks(self) -> &'static [&'static str] {
        const SMALL: &[&str] = &["Export legacy contracts and import the active subset."];
        const MEDIUM: &[&str] = &[
            "Export legacy contracts and import the active subset.",
            "Migrate historical contracts in two validated batches.",
        ];
        const LARGE: &[&str] = &[
            "Export legacy contracts and import the active subset.",
            "Migrate historical contracts in two validated batches.",
            "Plan the full historical migration with weekly reconciliation checkpoints.",
        ];
        match self {
            Self::None => &[],
            Self::Small => SMALL,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
        }
    }
}

/// Tasks added when the customer must engineer a CSV export for
/// migration.
pub const CSV_MIGRATION_TASKS: &[&str] = &[
    "Build CSV transformation scripts against the import schema.",
    "Dry-run the CSV import on a staging workspace and reconcile record counts.",
];

/// Informational only; surfaces in internal notes, never in scoring.
pub const CSV_MIGRATION_UAT_NOTE: &str =
    "CSV migration engineering adds an estimated 12 UAT hours.";

pub fn csv_migration_required(raw: Option<&str>) -> bool {
    normalized(raw)
        .map(|value| value.starts_with('y'))
        .unwrap_or(false)
}

/// Fixed task list injected as a dedicated phase when custom development
/// is requested with concrete details.
pub const CUSTOM_DEVELOPMENT_TASKS: &[&str] = &[
    "Draft the technical design covering the requested customizations.",
    "Implement and code-review custom components on a dedicated branch.",
    "Run focused acceptance tests on custom functionality before UAT.",
];

pub fn custom_development_requested(flag: Option<&str>, details: Option<&str>) -> bool {
    let requested = normalized(flag)
        .map(|value| value.starts_with('y'))
        .unwrap_or(false);
    let has_details = details.map(|value| !value.trim().is_empty()).unwrap_or(false);
    requested && has_details
}

/// Supported integration connectors. Each selected type contributes its
/// own fixed task list; unrecognized entries are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationType {
    Salesforce,
    Docusign,
    MicrosoftDynamics,
    Netsuite,
    Sap,
    Slack,
}

impl IntegrationType {
    pub fn resolve(raw: &str) -> Option<Self> {
        let value = raw.trim().to_lowercase();
        if value.contains("salesforce") {
            Some(Self::Salesforce)
        } else if value.contains("docusign") {
            Some(Self::Docusign)
        } else if value.contains("dynamics") {
            Some(Self::MicrosoftDynamics)
        } else if value.contains("netsuite") {
            Some(Self::Netsuite)
        } else if value.contains("sap") {
            Some(Self::Sap)
        } else if value.contains("slack") {
            Some(Self::Slack)
        } else {
            None
        }
    }

    pub const fn engineering_required(self) -> bool {
        matches!(self, Self::Sap | Self::Netsuite | Self::MicrosoftDynamics)
    }

    pub fn tasks(self) -> &'static [&'static str] {
        match self {
            Self::Salesforce => &[
                "Install the Salesforce managed package and map opportunity fields.",
                "Validate bi-directional sync on a sandbox org.",
            ],
            Self::Docusign => {
                &["Enable the DocuSign connector and route signature envelopes through it."]
            }
            Self::MicrosoftDynamics => {
                &["Configure the Dynamics 365 connector and entity mappings."]
            }
            Self::Netsuite => &["Scope the NetSuite integration through the middleware connector."],
            Self::Sap => &["Scope SAP touchpoints with the customer's basis team."],
            Self::Slack => &["Enable Slack notifications for approval and signature events."],
        }
    }
}

/// Added once when any selected integration needs engineering effort.
pub const INTEGRATION_ENGINEERING_TASK: &str =
    "Allocate integration engineering capacity for connector customization.";

/// Risk tags use a finite normalized vocabulary; unknown tags are no-ops.
pub fn normalize_risk_tag(raw: &str) -> String {
    let mut tag = String::with_capacity(raw.len());
    let mut last_was_separator = true;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            tag.extend(ch.to_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            tag.push('_');
            last_was_separator = true;
        }
    }
    tag.trim_end_matches('_').to_string()
}

pub fn risk_contribution(tag: &str) -> Option<(PhaseKind, &'static str)> {
    match tag {
        "security_review_delays" => Some((
            PhaseKind::Discovery,
            "Engage the customer security team early to pre-book review windows.",
        )),
        "legal_approval_bottleneck" => Some((
            PhaseKind::WorkflowConfiguration,
            "Map legal approval checkpoints and agree on escalation paths up front.",
        )),
        "data_quality_concerns" => Some((
            PhaseKind::Discovery,
            "Profile legacy contract data and flag records needing cleanup before import.",
        )),
        "stakeholder_availability" => Some((
            PhaseKind::Discovery,
            "Lock recurring stakeholder checkpoints into calendars for the full rollout.",
        )),
        "budget_constraints" => Some((
            PhaseKind::Discovery,
            "Align on a phased rollout that front-loads the highest-value modules.",
        )),
        "integration_dependencies" => Some((
            PhaseKind::Integrations,
            "Confirm third-party system owners and sandbox access before build starts.",
        )),
        _ => None,
    }
}
