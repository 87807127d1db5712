use super::{Document, Element, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render the document with one node per line.
///
/// Text is trimmed and whitespace-only text is dropped, so the output layout
/// does not depend on the source layout. Text and attribute values are
/// escaped; raw text (`script`/`style`) is kept verbatim.
pub fn serialize(document: &Document, options: &SerializeOptions) -> String {
    let mut out = String::new();
    for node in &document.children {
        write_node(node, 0, options, &mut out);
    }
    out
}

fn write_node(node: &Node, depth: usize, options: &SerializeOptions, out: &mut String) {
    let pad = " ".repeat(depth * options.indent);
    match node {
        Node::Text(text) => {
            for line in text.lines().map(trim_ascii).filter(|l| !l.is_empty()) {
                out.push_str(&pad);
                out.push_str(&escape(line, false));
                out.push('\n');
            }
        }
        Node::Comment(comment) => {
            out.push_str(&format!("{}<!--{}-->\n", pad, comment));
        }
        Node::Doctype(decl) => {
            out.push_str(&format!("{}<!{}>\n", pad, decl));
        }
        Node::Element(element) => write_element(element, &pad, depth, options, out),
    }
}

fn write_element(
    element: &Element,
    pad: &str,
    depth: usize,
    options: &SerializeOptions,
    out: &mut String,
) {
    let close = format!("</{}>", element.name);

    if element.is_void() {
        out.push_str(&format!("{}{}\n", pad, start_tag(element, false)));
        return;
    }

    if element.self_closing && element.children.is_empty() {
        out.push_str(&format!("{}{}\n", pad, start_tag(element, true)));
        return;
    }

    if element.is_raw_text() {
        let content: String = element
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        let content = content.trim_start_matches(['\n', '\r']).trim_end();
        if content.trim().is_empty() {
            out.push_str(&format!("{}{}{}\n", pad, start_tag(element, false), close));
        } else {
            out.push_str(&format!(
                "{}{}\n{}\n{}{}\n",
                pad,
                start_tag(element, false),
                content,
                pad,
                close
            ));
        }
        return;
    }

    let has_content = element.children.iter().any(|n| match n {
        Node::Text(t) => !trim_ascii(t).is_empty(),
        _ => true,
    });
    if !has_content {
        out.push_str(&format!("{}{}{}\n", pad, start_tag(element, false), close));
        return;
    }

    out.push_str(&format!("{}{}\n", pad, start_tag(element, false)));
    for child in &element.children {
        write_node(child, depth + 1, options, out);
    }
    out.push_str(&format!("{}{}\n", pad, close));
}

fn start_tag(element: &Element, self_closing: bool) -> String {
    let mut tag = format!("<{}", element.name);
    for attr in &element.attributes {
        tag.push(' ');
        tag.push_str(&attr.name);
        if let Some(value) = &attr.value {
            tag.push_str(&format!("=\"{}\"", escape(value, true)));
        }
    }
    tag.push_str(if self_closing { " />" } else { ">" });
    tag
}

/// `&nbsp;` is written back as a reference so it stays visible in the file.
fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '<' if !attribute => escaped.push_str("&lt;"),
            '>' if !attribute => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Non-breaking spaces are content, not layout.
fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}
