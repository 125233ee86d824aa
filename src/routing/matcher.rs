//! Chain matching logic.
//!
//! # Responsibilities
//! - Score how well a list of route identifiers lines up with a chain
//! - Walk path tokens through a chain's patterns, binding `:name` segments
//!
//! # Design Decisions
//! - Entries are matched strictly left to right, never reordered or skipped
//! - Identifier scoring stops at the first mismatch but keeps the partial score
//! - Literal path comparison is case-sensitive, identifiers are not
//! - Malformed chains lose the match instead of raising an error

use crate::routing::chain::{RouteChain, RouteId};
use crate::routing::params::{merge_params, Params};
use crate::routing::segment::{Segment, SegmentCursor};

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Score the alignment of `ids` with `chain`; 0 means nothing lines up.
pub fn matches_ids(ids: &[RouteId], chain: &RouteChain) -> u32 {
    let mut score = 0;

    for (route_id, entry) in ids.iter().zip(chain.iter()) {
        if !eq_ignore_case(&route_id.id, &entry.id) {
            break;
        }

        // Only entries whose pattern has as many tokens as the request has params.
        if let Some(params) = route_id.params.as_ref() {
            if params.len() == entry.path.len() {
                for (key, segment) in params.keys().zip(&entry.path) {
                    match segment {
                        Segment::Param(name) if eq_ignore_case(key, name) => score += 1,
                        _ => break,
                    }
                }
            }
        }

        score += 1;
    }

    score
}

/// Match path tokens against `chain`, binding parameters.
///
/// Returns the very same chain (see [`RouteChain::same`]) when nothing was
/// bound, a rebuilt chain with merged params otherwise, or `None` on mismatch.
/// Tokens left over after the last entry are accepted unless that entry is a
/// default (`""`) route, which requires the path to be fully consumed.
pub fn matches_path<S: AsRef<str>>(path: &[S], chain: &RouteChain) -> Option<RouteChain> {
    let mut cursor = SegmentCursor::new(path);
    let mut matches_default = false;
    let mut bound: Option<Vec<Option<Params>>> = None;

    for (i, entry) in chain.iter().enumerate() {
        if entry.path.first().is_some_and(Segment::is_root) {
            matches_default = true;
            continue;
        }

        for segment in &entry.path {
            let token = cursor.next();
            match segment {
                Segment::Param(name) => {
                    if token.is_empty() {
                        return None;
                    }
                    let all = bound.get_or_insert_with(|| vec![None; chain.len()]);
                    all[i]
                        .get_or_insert_with(Params::new)
                        .insert(name.as_str(), token);
                }
                literal => {
                    if !literal.matches_token(token) {
                        return None;
                    }
                }
            }
        }
        matches_default = false;
    }

    if matches_default && !cursor.next().is_empty() {
        return None;
    }

    match bound {
        None => Some(chain.clone()),
        Some(all) => Some(
            chain
                .iter()
                .zip(all)
                .map(|(entry, params)| {
                    entry.with_merged_params(merge_params(entry.params.as_ref(), params.as_ref()))
                })
                .collect(),
        ),
    }
}
