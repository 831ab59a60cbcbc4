use super::super::intake::{Persona, SectionKey};
use std::collections::BTreeMap;

/// Persona weight tables. Each table sums to exactly 1.0; the roster and
/// the weights swap together when the persona changes.
const STANDARD_WEIGHTS: &[(SectionKey, f64)] = &[
    (SectionKey::CompanyProfile, 0.10),
    (SectionKey::ContractOperations, 0.20),
    (SectionKey::TemplatesDocuments, 0.20),
    (SectionKey::Integrations, 0.15),
    (SectionKey::DataMigration, 0.15),
    (SectionKey::Stakeholders, 0.20),
];

const ENTERPRISE_WEIGHTS: &[(SectionKey, f64)] = &[
    (SectionKey::CompanyProfile, 0.05),
    (SectionKey::ContractOperations, 0.15),
    (SectionKey::TemplatesDocuments, 0.15),
    (SectionKey::Integrations, 0.20),
    (SectionKey::DataMigration, 0.15),
    (SectionKey::Stakeholders, 0.15),
    (SectionKey::SecurityCompliance, 0.15),
];

pub(crate) fn persona_weights(persona: Persona) -> &'static [(SectionKey, f64)] {
    match persona {
        Persona::Standard => STANDARD_WEIGHTS,
        Persona::Enterprise => ENTERPRISE_WEIGHTS,
    }
}

/// Weighted round-half-up aggregation. Sections absent from the breakdown
/// contribute zero.
pub(crate) fn aggregate(breakdown: &BTreeMap<SectionKey, u8>, weights: &[(SectionKey, f64)]) -> u8 {
    let total: f64 = weights
        .iter()
        .map(|(key, weight)| f64::from(breakdown.get(key).copied().unwrap_or(0)) * weight)
        .sum();
    total.round() as u8
}
