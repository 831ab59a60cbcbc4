mod sections;
mod status;
mod weights;

pub use status::StatusClassification;
pub(crate) use sections::score_section;
pub(crate) use status::classify_status;
pub(crate) use weights::{aggregate, persona_weights};

use super::intake::{IntakeResponse, Persona, SectionKey};
use serde::Serialize;
use serde_json::Map;
use std::collections::BTreeMap;

/// Score for one questionnaire section plus the trail explaining every
/// criterion's contribution, for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub score: u8,
    pub rationale: BTreeMap<String, String>,
}

/// Weighted overall score with the per-section breakdown it was built
/// from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessScore {
    pub overall: u8,
    pub breakdown: BTreeMap<SectionKey, u8>,
}

/// Full scoring output for one intake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessAssessment {
    pub persona: Persona,
    pub score: ReadinessScore,
    pub sections: BTreeMap<SectionKey, SectionScore>,
    pub status: StatusClassification,
}

/// Score every section of the active persona's roster, aggregate with the
/// persona weight table, and classify the overall score into a status
/// band.
pub fn score_intake(intake: &IntakeResponse) -> ReadinessAssessment {
    let empty = Map::new();
    let weights = persona_weights(intake.persona);

    let mut sections = BTreeMap::new();
    let mut breakdown = BTreeMap::new();
    for (key, _) in weights {
        let section = intake.section(*key).unwrap_or(&empty);
        let scored = sections::score_section(*key, section);
        breakdown.insert(*key, scored.score);
        sections.insert(*key, scored);
    }

    let overall = aggregate(&breakdown, weights);
    let status = classify_status(overall, intake.persona);

    ReadinessAssessment {
        persona: intake.persona,
        score: ReadinessScore { overall, breakdown },
        sections,
        status,
    }
}
