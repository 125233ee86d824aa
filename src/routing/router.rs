//! Chain resolution.
//!
//! # Responsibilities
//! - Pick the best chain for a path (priority scored) or for identifiers
//! - Apply redirects ahead of path resolution
//! - Hold an immutable routing snapshot that can be swapped on reload
//!
//! # Design Decisions
//! - Strictly greater score wins, so equal scores keep the earliest chain
//! - No match is a normal outcome (`None`), never an error
//! - Redirects are applied once; the target is not checked again
//! - Snapshots are immutable; reload swaps the whole `Router` atomically

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Serialize;

use crate::config::RouterConfig;
use crate::observability::metrics;
use crate::routing::chain::{RouteChain, RouteId};
use crate::routing::matcher::{matches_ids, matches_path};
use crate::routing::params::merge_params;
use crate::routing::path::{chain_to_path, generate_path};
use crate::routing::priority::compute_priority;
use crate::routing::redirect::{find_route_redirect, Redirect};

/// Highest-priority chain matching `path`, with bound params merged in.
pub fn router_path_to_chain<S: AsRef<str>>(path: &[S], chains: &[RouteChain]) -> Option<RouteChain> {
    let mut best: Option<RouteChain> = None;
    let mut best_score = 0;

    for chain in chains {
        if let Some(matched) = matches_path(path, chain) {
            let score = compute_priority(&matched);
            if score > best_score {
                best_score = score;
                best = Some(matched);
            }
        }
    }

    best
}

/// Best-aligned chain for `ids`, params merged from each entry's defaults and
/// the corresponding request. At least one identifier must align.
pub fn router_ids_to_chain(ids: &[RouteId], chains: &[RouteChain]) -> Option<RouteChain> {
    let mut best: Option<&RouteChain> = None;
    let mut max_matches = 0;

    for chain in chains {
        let score = matches_ids(ids, chain);
        if score > max_matches {
            best = Some(chain);
            max_matches = score;
        }
    }

    best.map(|chain| {
        chain
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let requested = ids.get(i).and_then(|id| id.params.as_ref());
                entry.with_merged_params(merge_params(entry.params.as_ref(), requested))
            })
            .collect()
    })
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The path as requested.
    pub requested: Vec<String>,
    /// The path chains were matched against (after any redirect).
    pub path: Vec<String>,
    pub redirected: bool,
    pub chain: Option<RouteChain>,
}

/// Outcome of identifier-based navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub chain: RouteChain,
    /// Concrete path of `chain`, `None` if a parameter value is missing.
    pub path: Option<Vec<String>>,
}

/// Immutable snapshot of configured chains and redirects.
#[derive(Debug, Clone, Default)]
pub struct Router {
    chains: Vec<RouteChain>,
    redirects: Vec<Redirect>,
}

impl Router {
    pub fn new(chains: Vec<RouteChain>, redirects: Vec<Redirect>) -> Self {
        Self { chains, redirects }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.chains(), config.redirects())
    }

    pub fn chains(&self) -> &[RouteChain] {
        &self.chains
    }

    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Apply the first matching redirect, then resolve the resulting path.
    pub fn resolve_path<S: AsRef<str>>(&self, path: &[S]) -> Resolution {
        let requested: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();

        let target = find_route_redirect(&requested, &self.redirects).and_then(|r| r.to.clone());
        let redirected = target.is_some();
        if let Some(to) = target.as_ref() {
            tracing::debug!(
                from = %generate_path(&requested),
                to = %generate_path(to),
                "Redirect applied"
            );
            metrics::record_redirect();
        }
        let path = target.unwrap_or_else(|| requested.clone());

        let chain = router_path_to_chain(&path, &self.chains);
        metrics::record_resolution("path", chain.is_some());

        match chain.as_ref() {
            Some(c) => tracing::debug!(path = %generate_path(&path), ids = ?c.ids(), "Path resolved"),
            None => tracing::debug!(path = %generate_path(&path), "No chain matches path"),
        }

        Resolution {
            requested,
            path,
            redirected,
            chain,
        }
    }

    /// Resolve identifier navigation and compute the path to display for it.
    pub fn resolve_ids(&self, ids: &[RouteId]) -> Option<Navigation> {
        let chain = router_ids_to_chain(ids, &self.chains);
        metrics::record_resolution("ids", chain.is_some());

        let Some(chain) = chain else {
            tracing::debug!(requested = ids.len(), "No chain matches route ids");
            return None;
        };

        let path = chain_to_path(&chain);
        if path.is_none() {
            tracing::warn!(ids = ?chain.ids(), "Matched chain is missing parameter values for its path");
        }
        tracing::debug!(ids = ?chain.ids(), "Route ids resolved");

        Some(Navigation { chain, path })
    }
}

/// A `Router` snapshot that can be replaced while readers hold the old one.
pub struct SharedRouter {
    inner: ArcSwap<Router>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            inner: ArcSwap::from_pointee(router),
        }
    }

    /// Current snapshot; stays valid for as long as the caller holds it.
    pub fn load(&self) -> Arc<Router> {
        self.inner.load_full()
    }

    pub fn replace(&self, router: Router) {
        tracing::info!(
            chains = router.chains.len(),
            redirects = router.redirects.len(),
            "Routing table replaced"
        );
        self.inner.store(Arc::new(router));
    }
}

impl fmt::Debug for SharedRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRouter")
            .field("router", &self.inner.load_full())
            .finish()
    }
}
