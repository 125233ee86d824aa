//! Route entries, chains and identifier requests.
//!
//! # Responsibilities
//! - Model one nested navigation target as an ordered chain of entries
//! - Carry lifecycle hooks through matching without invoking them
//! - Flatten a nested route tree into its root-to-leaf chains
//!
//! # Design Decisions
//! - Chains are `Arc`-backed and immutable; cloning shares the entries
//! - `RouteChain::same` exposes referential identity for cheap "unchanged" checks
//! - Entry ids are lowercased on construction (identity is case-insensitive)

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::routing::params::Params;
use crate::routing::segment::Segment;

/// Outcome of a `beforeEnter` / `beforeLeave` hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationHookResult {
    Proceed,
    Cancel,
    /// Navigate to this path instead.
    Redirect(String),
}

/// Opaque lifecycle hook attached to a route entry.
///
/// Consumers invoke hooks found on a resolved chain; matching never does.
pub trait LifecycleHook: Send + Sync + fmt::Debug {
    fn call(&self) -> NavigationHookResult;
}

pub type Hook = Arc<dyn LifecycleHook>;

fn same_hook(a: &Option<Hook>, b: &Option<Hook>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

fn lowercase_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.to_lowercase())
}

/// One node of a route chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(deserialize_with = "lowercase_id")]
    pub id: String,
    /// This entry's own pattern, relative to its parent.
    pub path: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    #[serde(skip)]
    pub before_enter: Option<Hook>,
    #[serde(skip)]
    pub before_leave: Option<Hook>,
}

impl RouteEntry {
    pub fn new(id: impl Into<String>, path: Vec<Segment>) -> Self {
        Self {
            id: id.into().to_lowercase(),
            path,
            params: None,
            before_enter: None,
            before_leave: None,
        }
    }

    /// Build an entry from raw pattern tokens (`["tabs", ":id"]`).
    pub fn from_tokens<S: AsRef<str>>(id: impl Into<String>, tokens: &[S]) -> Self {
        Self::new(id, Segment::parse_all(tokens))
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_before_enter(mut self, hook: Hook) -> Self {
        self.before_enter = Some(hook);
        self
    }

    pub fn with_before_leave(mut self, hook: Hook) -> Self {
        self.before_leave = Some(hook);
        self
    }

    /// Same entry with its parameters replaced; hooks are carried over.
    pub(crate) fn with_merged_params(&self, params: Option<Params>) -> Self {
        Self {
            id: self.id.clone(),
            path: self.path.clone(),
            params,
            before_enter: self.before_enter.clone(),
            before_leave: self.before_leave.clone(),
        }
    }
}

impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.path == other.path
            && self.params == other.params
            && same_hook(&self.before_enter, &other.before_enter)
            && same_hook(&self.before_leave, &other.before_leave)
    }
}

/// Ordered root-to-leaf sequence of route entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChain {
    entries: Arc<[RouteEntry]>,
}

impl RouteChain {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// True if both handles point at the same underlying chain.
    pub fn same(a: &RouteChain, b: &RouteChain) -> bool {
        Arc::ptr_eq(&a.entries, &b.entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Lowercased ids of every entry, root to leaf.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }
}

impl Deref for RouteChain {
    type Target = [RouteEntry];

    fn deref(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl From<Vec<RouteEntry>> for RouteChain {
    fn from(entries: Vec<RouteEntry>) -> Self {
        RouteChain::new(entries)
    }
}

impl FromIterator<RouteEntry> for RouteChain {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        RouteChain::new(iter.into_iter().collect())
    }
}

impl Serialize for RouteChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for RouteChain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<RouteEntry>::deserialize(deserializer).map(RouteChain::new)
    }
}

/// An identifier-based navigation request for one level of the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteId {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }
}

/// A declared route with nested child routes.
#[derive(Debug, Clone)]
pub struct RouteNode {
    pub entry: RouteEntry,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn new(entry: RouteEntry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, node: RouteNode) -> Self {
        self.children.push(node);
        self
    }
}

/// Flatten a route tree into one chain per leaf, depth-first in declaration order.
pub fn flatten_route_tree(nodes: &[RouteNode]) -> Vec<RouteChain> {
    let mut chains = Vec::new();
    let mut prefix = Vec::new();
    for node in nodes {
        flatten_node(&mut prefix, &mut chains, node);
    }
    chains
}

fn flatten_node(prefix: &mut Vec<RouteEntry>, chains: &mut Vec<RouteChain>, node: &RouteNode) {
    prefix.push(node.entry.clone());
    if node.children.is_empty() {
        chains.push(RouteChain::new(prefix.clone()));
    } else {
        for child in &node.children {
            flatten_node(prefix, chains, child);
        }
    }
    prefix.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Deny;

    impl LifecycleHook for Deny {
        fn call(&self) -> NavigationHookResult {
            NavigationHookResult::Cancel
        }
    }

    #[test]
    fn test_entry_id_is_lowercased() {
        let entry = RouteEntry::from_tokens("Tab-One", &["tab1"]);
        assert_eq!(entry.id, "tab-one");

        let parsed: RouteEntry = serde_json::from_str(r#"{"id": "PAGE", "path": [""]}"#).unwrap();
        assert_eq!(parsed.id, "page");
        assert_eq!(parsed.path, vec![Segment::Root]);
    }

    #[test]
    fn test_chain_identity_vs_equality() {
        let chain = RouteChain::new(vec![RouteEntry::from_tokens("a", &["a"])]);
        let shared = chain.clone();
        let rebuilt = RouteChain::new(vec![RouteEntry::from_tokens("a", &["a"])]);

        assert!(RouteChain::same(&chain, &shared));
        assert!(!RouteChain::same(&chain, &rebuilt));
        assert_eq!(chain, rebuilt);
    }

    #[test]
    fn test_hooks_compare_by_pointer() {
        let hook: Hook = Arc::new(Deny);
        let a = RouteEntry::from_tokens("a", &["a"]).with_before_enter(hook.clone());
        let b = RouteEntry::from_tokens("a", &["a"]).with_before_enter(hook);
        let c = RouteEntry::from_tokens("a", &["a"]).with_before_enter(Arc::new(Deny));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(
            a.before_enter.as_ref().map(|h| h.call()),
            Some(NavigationHookResult::Cancel)
        );
    }

    #[test]
    fn test_flatten_route_tree() {
        let tree = vec![
            RouteNode::new(RouteEntry::from_tokens("tabs", &["tabs"]))
                .child(RouteNode::new(RouteEntry::from_tokens("home", &["home"])))
                .child(
                    RouteNode::new(RouteEntry::from_tokens("users", &["users"]))
                        .child(RouteNode::new(RouteEntry::from_tokens("user", &[":id"]))),
                ),
            RouteNode::new(RouteEntry::from_tokens("login", &["login"])),
        ];

        let chains = flatten_route_tree(&tree);
        let ids: Vec<Vec<&str>> = chains.iter().map(|c| c.ids()).collect();
        assert_eq!(
            ids,
            vec![
                vec!["tabs", "home"],
                vec!["tabs", "users", "user"],
                vec!["login"],
            ]
        );
    }

    #[test]
    fn test_chain_serializes_without_hooks() {
        let chain = RouteChain::new(vec![
            RouteEntry::from_tokens("a", &[":id"]).with_before_leave(Arc::new(Deny))
        ]);
        assert_eq!(
            serde_json::to_string(&chain).unwrap(),
            r#"[{"id":"a","path":[":id"]}]"#
        );
    }
}
