//! Label extraction pass.
//!
//! Consumes a parsed template and produces a new one in which button labels
//! and user-facing text are replaced by `{label.<name>}` placeholders, plus
//! the table of labels that were extracted.
//!
//! The pass runs in two steps over the tree, in this order:
//!
//! 1. button `label` attributes (names get the `btn` prefix)
//! 2. text nodes accepted by [`should_process_text`]
//!
//! Button labels go first so the text step sees placeholders, not literals,
//! on buttons whose visible text repeats their label.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::markup::{Document, Element, Node};
use super::naming::{NamingStyle, make_label_name};

/// Matches text that is already an expression (`{label.x}`, `{greeting}`).
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{\s*.*\s*\}").unwrap());

pub const BUTTON_PREFIX: &str = "btn";
pub const LABEL_ATTRIBUTE: &str = "label";

pub fn default_text_elements() -> Vec<String> {
    [
        "p", "a", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "label", "th", "td",
    ]
    .map(String::from)
    .to_vec()
}

pub fn default_button_elements() -> Vec<String> {
    ["lightning-button", "button"].map(String::from).to_vec()
}

pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(text)
}

/// Placeholder referencing `name`, e.g. `{label.btnSave}`.
pub fn placeholder(name: &str) -> String {
    format!("{{label.{}}}", name)
}

/// Which elements the pass looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRules {
    /// Elements whose direct text children are user-facing.
    pub text_elements: Vec<String>,
    /// Elements whose `label` attribute is user-facing.
    pub button_elements: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            text_elements: default_text_elements(),
            button_elements: default_button_elements(),
        }
    }
}

impl ExtractionRules {
    pub fn is_text_element(&self, name: &str) -> bool {
        self.text_elements.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    pub fn is_button(&self, name: &str) -> bool {
        self.button_elements.iter().any(|b| b.eq_ignore_ascii_case(name))
    }
}

/// Label name to raw source text, in first-seen order.
///
/// Inserting an existing name replaces its text but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous text for `name`, if any.
    pub fn insert(&mut self, name: String, text: String) -> Option<String> {
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, text)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, text));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, text)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Unique label names.
    pub total_labels: usize,
    pub button_labels: usize,
    pub text_elements: usize,
}

/// Two different texts that produced the same label name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCollision {
    pub name: String,
    /// Text that was dropped.
    pub previous: String,
    /// Text that is kept.
    pub text: String,
}

#[derive(Debug)]
pub struct Extraction {
    pub document: Document,
    pub labels: LabelTable,
    pub metrics: RunMetrics,
    pub collisions: Vec<LabelCollision>,
}

/// Decide whether a text node becomes a label.
///
/// `parent` is `None` for text at the top level of the document.
pub fn should_process_text(text: &str, parent: Option<&Element>, rules: &ExtractionRules) -> bool {
    let text = text.trim();
    if text.is_empty() || is_placeholder(text) {
        return false;
    }

    let Some(parent) = parent else {
        return false;
    };
    if parent.is_raw_text() {
        return false;
    }

    // Button text is only taken when it repeats the button's own label.
    let is_button_label_text =
        rules.is_button(&parent.name) && parent.attr(LABEL_ATTRIBUTE) == Some(text);
    rules.is_text_element(&parent.name) || is_button_label_text
}

/// Run both extraction steps over `document`.
pub fn extract(document: Document, rules: &ExtractionRules, style: NamingStyle) -> Extraction {
    let mut pass = ExtractionPass {
        rules,
        style,
        labels: LabelTable::new(),
        metrics: RunMetrics::default(),
        collisions: Vec::new(),
    };

    let children = pass.label_buttons(document.children);
    let children = pass.label_texts(children, None);
    pass.metrics.total_labels = pass.labels.len();

    Extraction {
        document: Document { children },
        labels: pass.labels,
        metrics: pass.metrics,
        collisions: pass.collisions,
    }
}

struct ExtractionPass<'a> {
    rules: &'a ExtractionRules,
    style: NamingStyle,
    labels: LabelTable,
    metrics: RunMetrics,
    collisions: Vec<LabelCollision>,
}

impl ExtractionPass<'_> {
    fn label_buttons(&mut self, nodes: Vec<Node>) -> Vec<Node> {
        nodes
            .into_iter()
            .map(|node| match node {
                Node::Element(mut element) => {
                    if self.rules.is_button(&element.name) {
                        self.label_button(&mut element);
                    }
                    element.children = self.label_buttons(std::mem::take(&mut element.children));
                    Node::Element(element)
                }
                other => other,
            })
            .collect()
    }

    fn label_button(&mut self, element: &mut Element) {
        let label = element.attr(LABEL_ATTRIBUTE).unwrap_or_default().to_string();
        if label.is_empty() || is_placeholder(&label) {
            return;
        }
        let name = make_label_name(&label, Some(BUTTON_PREFIX), self.style);
        if name.is_empty() {
            return;
        }

        self.metrics.button_labels += 1;
        element.set_attr(LABEL_ATTRIBUTE, placeholder(&name));
        self.record(name, label);
    }

    fn label_texts(&mut self, nodes: Vec<Node>, parent: Option<&Element>) -> Vec<Node> {
        nodes
            .into_iter()
            .map(|node| match node {
                Node::Text(text) => self.label_text(text, parent),
                Node::Element(mut element) => {
                    let children = std::mem::take(&mut element.children);
                    element.children = self.label_texts(children, Some(&element));
                    Node::Element(element)
                }
                other => other,
            })
            .collect()
    }

    fn label_text(&mut self, text: String, parent: Option<&Element>) -> Node {
        if !should_process_text(&text, parent, self.rules) {
            return Node::Text(text);
        }
        let trimmed = text.trim();
        let name = make_label_name(trimmed, None, self.style);
        if name.is_empty() {
            return Node::Text(text);
        }

        self.metrics.text_elements += 1;
        let node = Node::Text(placeholder(&name));
        self.record(name, trimmed.to_string());
        node
    }

    fn record(&mut self, name: String, text: String) {
        if let Some(previous) = self.labels.insert(name.clone(), text.clone())
            && previous != text
        {
            self.collisions.push(LabelCollision {
                name,
                previous,
                text,
            });
        }
    }
}
