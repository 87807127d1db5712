//! Owned markup tree for component templates.
//!
//! Component templates are fragments (a single `<template>` root, custom
//! elements, self-closing tags), not HTML documents, so the loader runs the
//! html5ever tokenizer but builds the tree as written instead of running the
//! HTML5 tree-construction algorithm.
//!
//! Text and attribute values hold decoded text; the serializer escapes them.
//!
//! - `parser`: html5ever token sink + tree builder, never fails
//! - `serializer`: indented, one-node-per-line rendering

mod parser;
mod serializer;

pub use parser::parse_markup;
pub use serializer::{SerializeOptions, serialize};

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Elements whose content is raw text and never parsed as markup.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for bare attributes such as `disabled` (and for `x=""`).
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    /// Written as `<x />` in the source.
    pub self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Value of the attribute, `None` when absent or bare.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// Set the attribute value, appending it when absent.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }

    pub fn is_raw_text(&self) -> bool {
        RAW_TEXT_ELEMENTS.contains(&self.name.as_str())
    }
}

/// Read and parse a markup file.
pub fn load_markup_file(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markup file: {}", path.display()))?;
    Ok(parse_markup(&content))
}
