//! Scenario report generation.
//!
//! Turns a stored scenario and its full projection into an A4 PDF written
//! under a reports directory.

/// Error types.
pub mod error;
/// Money and percentage formatting.
pub mod format;
/// Report generator.
pub mod generator;
/// Report sections as styled lines.
pub mod layout;
/// PDF writer.
pub mod pdf;

pub use error::ReportError;
pub use generator::{ReportArtifact, ReportGenerator, ScenarioReport};
pub use layout::{LineStyle, ReportLine};
