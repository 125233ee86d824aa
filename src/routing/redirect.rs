//! Redirect rules.
//!
//! # Design Decisions
//! - A rule without a destination never matches (disabled placeholder)
//! - `*` in `from` matches any suffix, including none
//! - Without a wildcard the lengths must agree exactly
//! - List order breaks ties: first match wins

use serde::{Deserialize, Serialize};

use crate::routing::segment::Segment;

/// Rewrites a requested path to another path before chain resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub from: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<String>>,
}

impl Redirect {
    pub fn new<S: AsRef<str>>(from: &[S], to: Option<Vec<String>>) -> Self {
        Self {
            from: Segment::parse_all(from),
            to,
        }
    }
}

/// Returns true if `redirect` applies to `path`.
pub fn matches_redirect<S: AsRef<str>>(path: &[S], redirect: &Redirect) -> bool {
    if redirect.to.is_none() {
        return false;
    }

    let from = &redirect.from;
    if from.len() > path.len() {
        return false;
    }

    for (expected, actual) in from.iter().zip(path) {
        if *expected == Segment::Wildcard {
            return true;
        }
        if !expected.matches_token(actual.as_ref()) {
            return false;
        }
    }
    from.len() == path.len()
}

/// First redirect in list order that applies to `path`.
pub fn find_route_redirect<'a, S: AsRef<str>>(
    path: &[S],
    redirects: &'a [Redirect],
) -> Option<&'a Redirect> {
    redirects.iter().find(|r| matches_redirect(path, r))
}
