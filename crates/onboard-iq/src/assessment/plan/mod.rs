//! Rule-based implementation-plan synthesis. Pure and total: any
//! unrecognized tier resolves to its default and only shrinks the plan.

mod rules;

pub use rules::{
    csv_migration_required, custom_development_requested, normalize_risk_tag, risk_contribution,
    ComplexityTier, GoLiveTier, IntegrationType, MigrationVolumeTier, TemplateVolumeTier,
    WorkflowComplexityTier, CSV_MIGRATION_TASKS, CSV_MIGRATION_UAT_NOTE,
    CUSTOM_DEVELOPMENT_TASKS, INTEGRATION_ENGINEERING_TASK,
};

use super::intake::{IntakeResponse, SectionKey};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The eight canonical phases plus the on-demand Custom Development
/// phase. `position` fixes the output ordering regardless of which axis
/// created a phase first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Discovery,
    PlatformConfiguration,
    TemplateMigration,
    WorkflowConfiguration,
    CustomDevelopment,
    DataMigration,
    Integrations,
    TestingUat,
    TrainingGoLive,
}

impl PhaseKind {
    pub const fn canonical() -> [Self; 8] {
        [
            Self::Discovery,
            Self::PlatformConfiguration,
            Self::TemplateMigration,
            Self::WorkflowConfiguration,
            Self::DataMigration,
            Self::Integrations,
            Self::TestingUat,
            Self::TrainingGoLive,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery & Kickoff",
            Self::PlatformConfiguration => "Platform Configuration",
            Self::TemplateMigration => "Template Migration",
            Self::WorkflowConfiguration => "Workflow Configuration",
            Self::CustomDevelopment => "Custom Development",
            Self::DataMigration => "Data Migration",
            Self::Integrations => "Integrations",
            Self::TestingUat => "Testing & UAT",
            Self::TrainingGoLive => "Training & Go-Live",
        }
    }

    pub const fn duration_label(self) -> &'static str {
        match self {
            Self::Discovery => "1-2 weeks",
            Self::PlatformConfiguration => "1-2 weeks",
            Self::TemplateMigration => "2-3 weeks",
            Self::WorkflowConfiguration => "1-2 weeks",
            Self::CustomDevelopment => "3-4 weeks",
            Self::DataMigration => "2-4 weeks",
            Self::Integrations => "2-3 weeks",
            Self::TestingUat => "1-2 weeks",
            Self::TrainingGoLive => "1 week",
        }
    }

    const fn position(self) -> usize {
        match self {
            Self::Discovery => 0,
            Self::PlatformConfiguration => 1,
            Self::TemplateMigration => 2,
            Self::WorkflowConfiguration => 3,
            Self::CustomDevelopment => 4,
            Self::DataMigration => 5,
            Self::Integrations => 6,
            Self::TestingUat => 7,
            Self::TrainingGoLive => 8,
        }
    }

    /// Unconditional phases carry baseline work in every plan; the
    /// conditional phases start empty so filtering can drop them.
    fn baseline_activities(self) -> &'static [&'static str] {
        match self {
            Self::Discovery => &[
                "Run the onboarding kickoff and confirm success criteria with the customer team.",
                "Inventory current contract repositories, intake channels, and signing tools.",
            ],
            Self::PlatformConfiguration => &[
                "Provision the workspace with roles, permissions, and notification defaults.",
                "Configure contract types, metadata fields, and numbering schemes.",
            ],
            Self::TestingUat => &[
                "Execute UAT scripts covering intake, approval, and signature flows.",
                "Triage UAT findings and confirm fixes with the customer.",
            ],
            Self::TrainingGoLive => &[
                "Deliver role-based training for legal, sales, and admin users.",
                "Run the go-live checklist and switch production traffic to the platform.",
            ],
            Self::TemplateMigration
            | Self::WorkflowConfiguration
            | Self::CustomDevelopment
            | Self::DataMigration
            | Self::Integrations => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Pending,
    InProgress,
    Completed,
}

impl PhaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// One phase of the synthesized plan. Numbers are contiguous from 1 and
/// every phase carries at least one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImplementationPlanPhase {
    pub number: u32,
    pub name: &'static str,
    pub duration: &'static str,
    pub activities: Vec<String>,
    pub dependencies: Vec<&'static str>,
    pub status: PhaseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImplementationPlan {
    pub recommended_go_live: NaiveDate,
    pub estimated_timeline: String,
    pub phases: Vec<ImplementationPlanPhase>,
    pub internal_notes: Vec<String>,
}

/// Raw planning payload. Every field is optional text straight from the
/// questionnaire; resolution to tiers happens inside the synthesizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub template_volume: Option<String>,
    #[serde(default)]
    pub workflow_complexity: Option<String>,
    #[serde(default)]
    pub custom_development: Option<String>,
    #[serde(default)]
    pub custom_development_details: Option<String>,
    #[serde(default)]
    pub csv_migration_required: Option<String>,
    #[serde(default)]
    pub migration_volume: Option<String>,
    #[serde(default)]
    pub integration_types: Vec<String>,
    #[serde(default)]
    pub go_live_expectation: Option<String>,
}

impl PlanRequest {
    /// Field mapping from the intake questionnaire to the planning
    /// payload.
    pub fn from_intake(intake: &IntakeResponse) -> Self {
        let text = |key: SectionKey, field: &str| {
            intake
                .field(key, field)
                .and_then(Value::as_str)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };
        let list = |key: SectionKey, field: &str| {
            super::classifiers::selected_strings(intake.field(key, field))
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            complexity: text(SectionKey::ContractOperations, "complexity"),
            risks: list(SectionKey::Stakeholders, "known_risks"),
            template_volume: text(SectionKey::TemplatesDocuments, "template_count"),
            workflow_complexity: text(SectionKey::ContractOperations, "workflow_complexity"),
            custom_development: text(SectionKey::Integrations, "custom_development"),
            custom_development_details: text(
                SectionKey::Integrations,
                "custom_development_details",
            ),
            csv_migration_required: text(SectionKey::DataMigration, "csv_migration_required"),
            migration_volume: text(SectionKey::DataMigration, "legacy_volume"),
            integration_types: list(SectionKey::Integrations, "requested_systems"),
            go_live_expectation: text(SectionKey::Stakeholders, "go_live_expectation"),
        }
    }
}

const BASE_TIMELINE_WEEKS: f64 = 8.0;

struct PhaseDraft {
    kind: PhaseKind,
    activities: Vec<String>,
}

/// Per-call phase accumulator. Canonical phases are seeded up front;
/// non-canonical targets are created on first use.
struct PlanBuilder {
    drafts: Vec<PhaseDraft>,
}

impl PlanBuilder {
    fn new() -> Self {
        let drafts = PhaseKind::canonical()
            .into_iter()
            .map(|kind| PhaseDraft {
                kind,
                activities: kind
                    .baseline_activities()
                    .iter()
                    .map(|activity| activity.to_string())
                    .collect(),
            })
            .collect();
        Self { drafts }
    }

    fn push(&mut self, kind: PhaseKind, activity: &str) {
        if let Some(draft) = self.drafts.iter_mut().find(|draft| draft.kind == kind) {
            draft.activities.push(activity.to_string());
            return;
        }
        self.drafts.push(PhaseDraft {
            kind,
            activities: vec![activity.to_string()],
        });
    }

    /// Drop empty phases, order by the fixed phase positions, renumber
    /// from 1, and chain each phase onto its predecessor.
    fn finish(self) -> Vec<ImplementationPlanPhase> {
        let mut drafts: Vec<PhaseDraft> = self
            .drafts
            .into_iter()
            .filter(|draft| !draft.activities.is_empty())
            .collect();
        drafts.sort_by_key(|draft| draft.kind.position());

        let mut phases = Vec::with_capacity(drafts.len());
        let mut previous: Option<&'static str> = None;
        for (index, draft) in drafts.into_iter().enumerate() {
            let name = draft.kind.label();
            phases.push(ImplementationPlanPhase {
                number: index as u32 + 1,
                name,
                duration: draft.kind.duration_label(),
                activities: draft.activities,
                dependencies: previous.map(|dep| vec![dep]).unwrap_or_default(),
                status: PhaseStatus::Pending,
            });
            previous = Some(name);
        }
        phases
    }
}

/// Build an implementation plan for one payload. `today` anchors the
/// recommended go-live date; passing it explicitly keeps the output
/// reproducible.
pub fn synthesize_plan(request: &PlanRequest, today: NaiveDate) -> ImplementationPlan {
    let mut builder = PlanBuilder::new();
    let mut internal_notes = Vec::new();

    let complexity = ComplexityTier::resolve(request.complexity.as_deref());
    for (kind, task) in complexity.extra_tasks() {
        builder.push(*kind, task);
    }

    for raw in &request.risks {
        let tag = normalize_risk_tag(raw);
        if let Some((kind, task)) = risk_contribution(&tag) {
            builder.push(kind, task);
        }
    }

    let template_volume = TemplateVolumeTier::resolve(request.template_volume.as_deref());
    for task in template_volume.tasks() {
        builder.push(PhaseKind::TemplateMigration, task);
    }

    let workflow = WorkflowComplexityTier::resolve(request.workflow_complexity.as_deref());
    for task in workflow.tasks() {
        builder.push(PhaseKind::WorkflowConfiguration, task);
    }

    if custom_development_requested(
        request.custom_development.as_deref(),
        request.custom_development_details.as_deref(),
    ) {
        for task in rules::CUSTOM_DEVELOPMENT_TASKS {
            builder.push(PhaseKind::CustomDevelopment, task);
        }
        if let Some(details) = &request.custom_development_details {
            internal_notes.push(format!("Custom development requested: {}", details.trim()));
        }
    }

    // "None" skips every migration contribution outright, including the
    // CSV engineering tasks and their UAT note, so the phase stays empty.
    let migration = MigrationVolumeTier::resolve(request.migration_volume.as_deref());
    if migration != MigrationVolumeTier::None {
        for task in migration.tasks() {
            builder.push(PhaseKind::DataMigration, task);
        }
        if csv_migration_required(request.csv_migration_required.as_deref()) {
            for task in rules::CSV_MIGRATION_TASKS {
                builder.push(PhaseKind::DataMigration, task);
            }
            internal_notes.push(rules::CSV_MIGRATION_UAT_NOTE.to_string());
        }
    }

    let mut engineering_effort = false;
    for raw in &request.integration_types {
        let Some(integration) = IntegrationType::resolve(raw) else {
            continue;
        };
        for task in integration.tasks() {
            builder.push(PhaseKind::Integrations, task);
        }
        engineering_effort |= integration.engineering_required();
    }
    if engineering_effort {
        builder.push(PhaseKind::Integrations, rules::INTEGRATION_ENGINEERING_TASK);
    }

    let go_live = GoLiveTier::resolve(request.go_live_expectation.as_deref());
    for (kind, task) in go_live.extra_tasks() {
        builder.push(*kind, task);
    }

    let estimated_weeks =
        (BASE_TIMELINE_WEEKS * complexity.multiplier() * go_live.multiplier()).round() as i64;
    let recommended_go_live = today + Duration::weeks(estimated_weeks);

    ImplementationPlan {
        recommended_go_live,
        estimated_timeline: format!("{estimated_weeks} weeks"),
        phases: builder.finish(),
        internal_notes,
    }
}
