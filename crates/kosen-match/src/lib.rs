//! Matching of prospective students to Japanese colleges of technology (kosen).
//!
//! The crate exposes the college catalog, the questionnaire answer model, the
//! rule-based match scorer, and the HTTP surface that serves diagnoses.

pub mod catalog;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;
