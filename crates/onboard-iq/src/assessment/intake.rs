use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Questionnaire shape the intake was collected under. Each persona owns
/// its own section roster, weight table, and status-band copy; the roster
/// and weights always switch together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    Standard,
    Enterprise,
}

impl Persona {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Enterprise => "Enterprise",
        }
    }
}

/// Identifier for one questionnaire section.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    CompanyProfile,
    ContractOperations,
    TemplatesDocuments,
    Integrations,
    DataMigration,
    Stakeholders,
    SecurityCompliance,
}

impl SectionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompanyProfile => "company_profile",
            Self::ContractOperations => "contract_operations",
            Self::TemplatesDocuments => "templates_documents",
            Self::Integrations => "integrations",
            Self::DataMigration => "data_migration",
            Self::Stakeholders => "stakeholders",
            Self::SecurityCompliance => "security_compliance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyProfile => "Company Profile",
            Self::ContractOperations => "Contract Operations",
            Self::TemplatesDocuments => "Templates & Documents",
            Self::Integrations => "Integrations",
            Self::DataMigration => "Data Migration",
            Self::Stakeholders => "Stakeholders",
            Self::SecurityCompliance => "Security & Compliance",
        }
    }
}

/// One submitted questionnaire. Sections and fields are kept as raw JSON
/// so absent, partial, and oddly-typed answers flow through the
/// classifiers instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeResponse {
    #[serde(default)]
    pub persona: Persona,
    #[serde(default)]
    pub sections: BTreeMap<String, Map<String, Value>>,
}

impl IntakeResponse {
    /// A missing section behaves like an empty object downstream.
    pub fn section(&self, key: SectionKey) -> Option<&Map<String, Value>> {
        self.sections.get(key.as_str())
    }

    pub fn field(&self, key: SectionKey, name: &str) -> Option<&Value> {
        self.section(key).and_then(|section| section.get(name))
    }
}
