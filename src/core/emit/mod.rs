//! Serializers for the three generated files.
//!
//! - `markup`: the labeled template
//! - `module`: `labels.js`, one import per label plus a `label` export
//! - `metadata`: `labels.xml`, a `CustomLabels` metadata document

mod markup;
mod metadata;
mod module;

pub use markup::emit_markup;
pub use metadata::{DEFAULT_LANGUAGE, MetadataOptions, emit_metadata};
pub use module::emit_module;

/// File name of the generated label module.
pub const MODULE_FILE_NAME: &str = "labels.js";

/// File name of the generated label metadata.
pub const METADATA_FILE_NAME: &str = "labels.xml";
