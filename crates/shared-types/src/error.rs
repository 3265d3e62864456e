use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of markup parsing errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarkupErrorKind {
    Empty,
    UnexpectedEof,
    UnexpectedChar,
    MismatchedTag,
    InvalidEntity,
    TrailingContent,
}

impl fmt::Display for MarkupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupErrorKind::Empty => write!(f, "Empty"),
            MarkupErrorKind::UnexpectedEof => write!(f, "UnexpectedEof"),
            MarkupErrorKind::UnexpectedChar => write!(f, "UnexpectedChar"),
            MarkupErrorKind::MismatchedTag => write!(f, "MismatchedTag"),
            MarkupErrorKind::InvalidEntity => write!(f, "InvalidEntity"),
            MarkupErrorKind::TrailingContent => write!(f, "TrailingContent"),
        }
    }
}

/// Structured error returned when markup text cannot be read back into a
/// [`MarkupNode`](crate::markup::MarkupNode).
///
/// `position` is the byte offset into the input where the problem was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkupError {
    pub kind: MarkupErrorKind,
    pub message: String,
    pub position: usize,
}

impl MarkupError {
    pub fn empty() -> Self {
        Self {
            kind: MarkupErrorKind::Empty,
            message: "input contains no element".to_string(),
            position: 0,
        }
    }

    pub fn unexpected_eof(position: usize, expected: impl Into<String>) -> Self {
        Self {
            kind: MarkupErrorKind::UnexpectedEof,
            message: format!("input ended while expecting {}", expected.into()),
            position,
        }
    }

    pub fn unexpected_char(position: usize, found: char, expected: impl Into<String>) -> Self {
        Self {
            kind: MarkupErrorKind::UnexpectedChar,
            message: format!("found {:?}, expected {}", found, expected.into()),
            position,
        }
    }

    pub fn mismatched_tag(position: usize, open: &str, close: &str) -> Self {
        Self {
            kind: MarkupErrorKind::MismatchedTag,
            message: format!("<{open}> closed by </{close}>"),
            position,
        }
    }

    pub fn invalid_entity(position: usize, entity: &str) -> Self {
        Self {
            kind: MarkupErrorKind::InvalidEntity,
            message: format!("unknown character reference &{entity};"),
            position,
        }
    }

    pub fn trailing_content(position: usize) -> Self {
        Self {
            kind: MarkupErrorKind::TrailingContent,
            message: "content after the root element".to_string(),
            position,
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (at byte {})", self.kind, self.message, self.position)
    }
}

impl std::error::Error for MarkupError {}
