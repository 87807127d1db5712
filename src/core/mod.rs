//! Label generation engine.
//!
//! Pipeline for one component:
//!
//! 1. `markup`: load the template into an owned tree
//! 2. `extract`: replace user-facing text with placeholders, collect labels
//!    (names come from `naming`)
//! 3. `emit`: render the labeled template, `labels.js` and `labels.xml`
//!
//! `generator` runs the pipeline against the filesystem.

pub mod emit;
pub mod extract;
pub mod generator;
pub mod markup;
pub mod naming;

pub use extract::{Extraction, ExtractionRules, LabelTable, RunMetrics};
pub use generator::{AbortReason, GenerateOutcome, GenerateRequest, GenerationReport, generate};
pub use naming::NamingStyle;
