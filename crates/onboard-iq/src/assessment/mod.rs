//! Readiness scoring and implementation planning for onboarding intakes.
//!
//! Everything here is deterministic: the same [`IntakeResponse`] (and, for
//! the planner, the same `today`) always produces the same output. The
//! AI-narrative layer of the product consumes these results elsewhere; no
//! generative component participates in scoring or planning.

pub mod classifiers;
pub mod intake;
pub mod plan;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use intake::{IntakeResponse, Persona, SectionKey};
pub use plan::{
    synthesize_plan, ImplementationPlan, ImplementationPlanPhase, PhaseKind, PhaseStatus,
    PlanRequest,
};
pub use scoring::{
    score_intake, ReadinessAssessment, ReadinessScore, SectionScore, StatusClassification,
};
