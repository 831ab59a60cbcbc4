//! Deterministic core of the CLM onboarding assessment service.
//!
//! The [`assessment`] module holds the readiness-scoring engine and the
//! implementation-plan synthesizer. Both are pure functions over a
//! structured intake questionnaire; the HTTP and CLI shells live in the
//! `onboard-iq-api` service crate.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
