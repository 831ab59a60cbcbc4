use super::super::intake::Persona;
use serde::Serialize;

/// Label and description band the overall score falls into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusClassification {
    pub label: &'static str,
    pub description: &'static str,
}

/// One score band. Bands are listed in descending floor order and cover
/// [0, 100] contiguously for every persona.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusBand {
    pub(crate) floor: u8,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
}

const STANDARD_BANDS: [StatusBand; 4] = [
    StatusBand {
        floor: 80,
        label: "Ready to Launch",
        description: "Strong readiness across the questionnaire; onboarding can start immediately.",
    },
    StatusBand {
        floor: 60,
        label: "On Track",
        description: "Most prerequisites are in place; close the remaining gaps during kickoff.",
    },
    StatusBand {
        floor: 40,
        label: "Needs Preparation",
        description: "Several foundational items are missing; schedule a preparation sprint before kickoff.",
    },
    StatusBand {
        floor: 0,
        label: "Not Ready",
        description: "Core prerequisites are absent; revisit the questionnaire with the customer before planning onboarding.",
    },
];

const ENTERPRISE_BANDS: [StatusBand; 4] = [
    StatusBand {
        floor: 80,
        label: "Deployment Ready",
        description: "Enterprise prerequisites are satisfied; proceed to deployment planning.",
    },
    StatusBand {
        floor: 60,
        label: "Conditionally Ready",
        description: "Ready pending a small set of security or integration follow-ups.",
    },
    StatusBand {
        floor: 40,
        label: "Foundational Gaps",
        description: "Key enterprise controls are unresolved; run discovery workshops before committing dates.",
    },
    StatusBand {
        floor: 0,
        label: "Discovery Required",
        description: "Too little is known to plan an enterprise rollout; start with a structured discovery engagement.",
    },
];

pub(crate) fn status_bands(persona: Persona) -> &'static [StatusBand; 4] {
    match persona {
        Persona::Standard => &STANDARD_BANDS,
        Persona::Enterprise => &ENTERPRISE_BANDS,
    }
}

/// First band whose floor is at or below the overall score applies. The
/// zero-floor band matches every u8, so this is total.
pub(crate) fn classify_status(overall: u8, persona: Persona) -> StatusClassification {
    let bands = status_bands(persona);
    let band = bands
        .iter()
        .find(|band| overall >= band.floor)
        .unwrap_or(&bands[3]);

    StatusClassification {
        label: band.label,
        description: band.description,
    }
}
