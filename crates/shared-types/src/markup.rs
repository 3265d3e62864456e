//! In-memory markup tree for rendered components.
//!
//! A [`MarkupNode`] is what a component looks like once rendered: a tag, its
//! attributes, and its children. It serializes to JSON (`type` / `props` /
//! `children`) for snapshot files and to markup text via [`MarkupNode::to_html`],
//! and [`MarkupNode::parse`] reads the markup text produced by the SSR renderer
//! back into a tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::MarkupError;

/// Elements that never have children and are written self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// A rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupNode {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub props: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupChild>,
}

/// A child of a [`MarkupNode`]: either a text run or a nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupChild {
    Text(String),
    Element(MarkupNode),
}

impl MarkupNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            props: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Append a text run, merging it into a preceding text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(MarkupChild::Element(child));
        self
    }

    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(MarkupChild::Text(prev)) => prev.push_str(&text),
            _ => self.children.push(MarkupChild::Text(text)),
        }
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                MarkupChild::Text(t) => out.push_str(t),
                MarkupChild::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Direct element children, skipping text runs.
    pub fn elements(&self) -> impl Iterator<Item = &MarkupNode> {
        self.children.iter().filter_map(|c| match c {
            MarkupChild::Element(e) => Some(e),
            MarkupChild::Text(_) => None,
        })
    }

    /// First element with the given tag, depth-first, including `self`.
    pub fn find(&self, tag: &str) -> Option<&MarkupNode> {
        if self.tag.eq_ignore_ascii_case(tag) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find(tag))
    }

    /// First element whose `id` attribute equals `id`, depth-first.
    pub fn find_by_id(&self, id: &str) -> Option<&MarkupNode> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find_by_id(id))
    }

    /// Serialize to markup text.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.props {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, true, out);
            out.push('"');
        }
        if self.children.is_empty() && is_void(&self.tag) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                MarkupChild::Text(t) => escape_into(t, false, out),
                MarkupChild::Element(e) => e.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Parse a single root element from markup text.
    ///
    /// Leading and trailing whitespace, comments and a doctype around the root
    /// are ignored. Anything else outside the root is an error.
    pub fn parse(src: &str) -> Result<MarkupNode, MarkupError> {
        let mut parser = Parser { src, pos: 0 };
        parser.skip_misc()?;
        match parser.peek() {
            None => return Err(MarkupError::empty()),
            Some('<') => {}
            Some(c) => return Err(MarkupError::unexpected_char(parser.pos, c, "'<'")),
        }
        let node = parser.parse_element()?;
        parser.skip_misc()?;
        if parser.pos < src.len() {
            return Err(MarkupError::trailing_content(parser.pos));
        }
        Ok(node)
    }
}

impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn escape_into(s: &str, in_attr: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn expect(&mut self, want: char, what: &str) -> Result<(), MarkupError> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(MarkupError::unexpected_char(self.pos - c.len_utf8(), c, what)),
            None => Err(MarkupError::unexpected_eof(self.pos, what)),
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn skip_comment(&mut self) -> Result<(), MarkupError> {
        let start = self.pos;
        match self.rest()[4..].find("-->") {
            Some(end) => {
                self.pos += 4 + end + 3;
                Ok(())
            }
            None => Err(MarkupError::unexpected_eof(start, "'-->'")),
        }
    }

    /// Whitespace, comments and `<!DOCTYPE ...>` outside the root element.
    fn skip_misc(&mut self) -> Result<(), MarkupError> {
        loop {
            self.skip_ws();
            if self.rest().starts_with("<!--") {
                self.skip_comment()?;
            } else if self.rest().starts_with("<!") {
                let start = self.pos;
                match self.rest().find('>') {
                    Some(end) => self.pos += end + 1,
                    None => return Err(MarkupError::unexpected_eof(start, "'>'")),
                }
            } else {
                return Ok(());
            }
        }
    }

    fn parse_name(&mut self, what: &str) -> Result<String, MarkupError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
        ) {
            self.bump();
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(MarkupError::unexpected_char(self.pos, c, what)),
                None => Err(MarkupError::unexpected_eof(self.pos, what)),
            };
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn parse_element(&mut self) -> Result<MarkupNode, MarkupError> {
        self.expect('<', "'<'")?;
        let mut node = MarkupNode::new(self.parse_name("a tag name")?);

        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(MarkupError::unexpected_eof(self.pos, "'>'")),
                Some('>') => {
                    self.bump();
                    break;
                }
                Some('/') => {
                    self.bump();
                    self.expect('>', "'>' after '/'")?;
                    return Ok(node);
                }
                Some(_) => {
                    let name = self.parse_name("an attribute name")?;
                    self.skip_ws();
                    let value = if self.peek() == Some('=') {
                        self.bump();
                        self.skip_ws();
                        self.parse_attr_value()?
                    } else {
                        String::new()
                    };
                    node.props.insert(name, value);
                }
            }
        }

        if is_void(&node.tag) {
            // Tolerate an explicit close tag on void elements.
            let close = format!("</{}>", node.tag);
            if self
                .rest()
                .get(..close.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(&close))
            {
                self.pos += close.len();
            }
            return Ok(node);
        }

        loop {
            match self.peek() {
                None => {
                    return Err(MarkupError::unexpected_eof(
                        self.pos,
                        format!("'</{}>'", node.tag),
                    ))
                }
                Some('<') if self.rest().starts_with("<!--") => self.skip_comment()?,
                Some('<') if self.rest().starts_with("</") => {
                    let at = self.pos;
                    self.pos += 2;
                    let close = self.parse_name("a closing tag name")?;
                    self.skip_ws();
                    self.expect('>', "'>'")?;
                    if !close.eq_ignore_ascii_case(&node.tag) {
                        return Err(MarkupError::mismatched_tag(at, &node.tag, &close));
                    }
                    return Ok(node);
                }
                Some('<') => {
                    let child = self.parse_element()?;
                    node.children.push(MarkupChild::Element(child));
                }
                Some(_) => {
                    let text = self.parse_text()?;
                    node.push_text(text);
                }
            }
        }
    }

    fn parse_attr_value(&mut self) -> Result<String, MarkupError> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                match self.rest().find(q) {
                    Some(end) => {
                        self.pos += end + 1;
                        decode_entities(&self.src[start..start + end], start)
                    }
                    None => Err(MarkupError::unexpected_eof(start, format!("closing {q}"))),
                }
            }
            Some(c) if c == '>' || c.is_whitespace() => {
                Err(MarkupError::unexpected_char(self.pos, c, "an attribute value"))
            }
            Some(_) => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c != '>' && !c.is_whitespace()) {
                    self.bump();
                }
                decode_entities(&self.src[start..self.pos], start)
            }
            None => Err(MarkupError::unexpected_eof(self.pos, "an attribute value")),
        }
    }

    fn parse_text(&mut self) -> Result<String, MarkupError> {
        let start = self.pos;
        let end = self.rest().find('<').map_or(self.src.len(), |i| start + i);
        self.pos = end;
        decode_entities(&self.src[start..end], start)
    }
}

/// Longest named or numeric reference we look for before treating `&` literally.
const MAX_ENTITY_LEN: usize = 32;

fn decode_entities(raw: &str, base: usize) -> Result<String, MarkupError> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut offset = base;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        offset += amp;
        rest = &rest[amp..];
        let semi = rest[1..]
            .find(';')
            .filter(|&i| i <= MAX_ENTITY_LEN && !rest[1..1 + i].contains(char::is_whitespace));
        let Some(semi) = semi else {
            // Bare ampersand.
            out.push('&');
            rest = &rest[1..];
            offset += 1;
            continue;
        };
        let entity = &rest[1..1 + semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => match entity.strip_prefix('#') {
                Some(num) => {
                    let code = match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse::<u32>().ok(),
                    };
                    code.and_then(char::from_u32)
                }
                None => None,
            },
        };
        match decoded {
            Some(c) => out.push(c),
            None => return Err(MarkupError::invalid_entity(offset, entity)),
        }
        let consumed = semi + 2;
        rest = &rest[consumed..];
        offset += consumed;
    }
    out.push_str(rest);
    Ok(out)
}
