//! Scoring engine and report generator for the GlowPath student assessment.
//!
//! `compute_assessment` turns 56 Likert answers into RIASEC, Big Five and
//! values profiles; `generate_report` renders those profiles as a Markdown
//! report.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{compute_assessment, generate_report};
