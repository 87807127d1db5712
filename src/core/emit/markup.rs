use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::markup::{Document, SerializeOptions, serialize};

/// `attr="{expr}"` in serialized output.
static QUOTED_EXPRESSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"="\{(.*?)\}""#).unwrap());

/// Serialize the labeled template.
///
/// Templates require attribute expressions unquoted (`label={label.btnSave}`),
/// which the tree serializer cannot express, so quoted expressions are
/// rewritten after serialization.
pub fn emit_markup(document: &Document, options: &SerializeOptions) -> String {
    let serialized = serialize(document, options);
    unquote_expressions(&serialized)
}

fn unquote_expressions(markup: &str) -> String {
    QUOTED_EXPRESSION_REGEX
        .replace_all(markup, |caps: &Captures| format!("={{{}}}", &caps[1]))
        .into_owned()
}
