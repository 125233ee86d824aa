//! Path segment tokens and the single-use segment cursor.
//!
//! # Responsibilities
//! - Classify pattern tokens (root sentinel, literal, parameter, wildcard)
//! - Walk an input path left to right without copying or mutating it
//!
//! # Design Decisions
//! - The `""` sentinel is a dedicated variant, never an empty literal
//! - Comparisons are case-sensitive; identifier scoring lowercases on its own
//! - Exhaustion is signaled by `""`, not by an error

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One token of a route pattern or redirect source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The `""` token: "no further segment" / default root.
    Root,
    /// A static token compared by exact string equality.
    Literal(String),
    /// A `:name` token binding one non-empty path token to `name`.
    Param(String),
    /// The `*` token.
    Wildcard,
}

impl Segment {
    /// Classify a raw token.
    pub fn parse(token: &str) -> Self {
        if token.is_empty() {
            Segment::Root
        } else if token == "*" {
            Segment::Wildcard
        } else if let Some(name) = token.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else {
            Segment::Literal(token.to_string())
        }
    }

    /// Parse a whole sequence of raw tokens.
    pub fn parse_all<S: AsRef<str>>(tokens: &[S]) -> Vec<Segment> {
        tokens.iter().map(|t| Segment::parse(t.as_ref())).collect()
    }

    /// Returns true if the token text of this segment equals `token` exactly.
    ///
    /// `Root` equals `""`, `Wildcard` equals `"*"` and `Param(name)` equals `":name"`.
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            Segment::Root => token.is_empty(),
            Segment::Literal(lit) => lit == token,
            Segment::Param(name) => token.strip_prefix(':') == Some(name.as_str()),
            Segment::Wildcard => token == "*",
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Segment::Root)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Root => Ok(()),
            Segment::Literal(lit) => f.write_str(lit),
            Segment::Param(name) => write!(f, ":{}", name),
            Segment::Wildcard => f.write_str("*"),
        }
    }
}

impl From<&str> for Segment {
    fn from(token: &str) -> Self {
        Segment::parse(token)
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Segment::parse(&token))
    }
}

/// Single-use cursor over an ordered sequence of path tokens.
///
/// Borrows the caller's slice and advances a position counter, so the
/// caller's sequence is never touched.
#[derive(Debug)]
pub struct SegmentCursor<'a, S> {
    segments: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> SegmentCursor<'a, S> {
    pub fn new(segments: &'a [S]) -> Self {
        Self { segments, pos: 0 }
    }

    /// Take the next token, or `""` once every token has been consumed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &'a str {
        match self.segments.get(self.pos) {
            Some(segment) => {
                self.pos += 1;
                segment.as_ref()
            }
            None => "",
        }
    }

    /// Number of tokens not yet consumed.
    #[cfg(test)]
    fn remaining(&self) -> usize {
        self.segments.len().saturating_sub(self.pos)
    }
}
