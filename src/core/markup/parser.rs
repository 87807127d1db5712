use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use super::{Attribute, Document, Element, Node};

/// Parse template markup into a [`Document`].
///
/// Tokenizing is done by html5ever, so character references are decoded in
/// text and attribute values and tag and attribute names are lower-cased.
/// The tree is built as written: stray closing tags are dropped, unclosed
/// elements are closed at end of input, and no implied elements are added.
pub fn parse_markup(source: &str) -> Document {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(source));

    let tokenizer = Tokenizer::new(TemplateSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let builder = std::mem::take(&mut *tokenizer.sink.builder.borrow_mut());
    builder.finish()
}

#[derive(Default)]
struct TemplateSink {
    builder: RefCell<TreeBuilder>,
}

impl TokenSink for TemplateSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let mut builder = self.builder.borrow_mut();
        match token {
            Token::TagToken(tag) if tag.kind == TagKind::EndTag => builder.close(&tag.name),
            Token::TagToken(tag) => {
                let element = element_from_tag(tag);
                if element.is_void() || element.self_closing {
                    builder.push(Node::Element(element));
                } else if let Some(kind) = raw_kind(&element.name) {
                    builder.open(element);
                    return TokenSinkResult::RawData(kind);
                } else {
                    builder.open(element);
                }
            }
            Token::CharacterTokens(text) => builder.push_text(&text),
            Token::CommentToken(text) => builder.push(Node::Comment(text.to_string())),
            Token::DoctypeToken(doctype) => {
                let decl = match doctype.name {
                    Some(name) => format!("DOCTYPE {}", name),
                    None => "DOCTYPE".to_string(),
                };
                builder.push(Node::Doctype(decl));
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// The tokenizer only enters raw text states when told to.
fn raw_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

fn element_from_tag(tag: Tag) -> Element {
    let mut element = Element::new(tag.name.to_string());
    element.self_closing = tag.self_closing;
    element.attributes = tag
        .attrs
        .into_iter()
        .map(|attr| {
            let value = attr.value.to_string();
            Attribute {
                name: attr.name.local.to_string(),
                value: (!value.is_empty()).then_some(value),
            }
        })
        .collect();

    // `<c-child value={x}/>`: an unquoted value swallows the slash.
    if !element.self_closing
        && let Some(last) = element.attributes.last_mut()
        && let Some(value) = last.value.as_mut()
        && value.starts_with('{')
        && value.ends_with("}/")
    {
        value.pop();
        element.self_closing = true;
    }

    element
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, node: Node) {
        self.children_mut().push(node);
    }

    fn push_text(&mut self, text: &str) {
        let children = self.children_mut();
        if let Some(Node::Text(prev)) = children.last_mut() {
            prev.push_str(text);
        } else {
            children.push(Node::Text(text.to_string()));
        }
    }

    fn open(&mut self, element: Element) {
        self.open.push(element);
    }

    /// Close the innermost open element named `name`, implicitly closing
    /// everything opened after it. Unmatched closing tags are ignored.
    fn close(&mut self, name: &str) {
        let Some(index) = self.open.iter().rposition(|e| e.name == name) else {
            return;
        };
        while self.open.len() > index {
            self.pop();
        }
    }

    fn pop(&mut self) {
        if let Some(element) = self.open.pop() {
            self.push(Node::Element(element));
        }
    }

    fn finish(mut self) -> Document {
        while !self.open.is_empty() {
            self.pop();
        }
        Document {
            children: self.root,
        }
    }
}
