//! lwc-labels - custom label extraction for Lightning Web Components
//!
//! lwc-labels is a CLI tool and library that moves hardcoded text out of a
//! component's HTML template into custom labels. It writes a labeled copy of
//! the template, a `labels.js` module importing every label, and a
//! `labels.xml` metadata file ready to merge into `CustomLabels`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (prompts, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Markup loading, extraction, emitters and the headless generator

pub mod cli;
pub mod config;
pub mod core;
