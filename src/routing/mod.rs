//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Path navigation:
//!     path segments
//!     → redirect.rs (first matching redirect rewrites the path)
//!     → matcher.rs (walk each chain, bind :params)
//!     → priority.rs (score every successful match)
//!     → router.rs (keep the best score)
//!     → Return: RouteChain or no match
//!
//! Identifier navigation:
//!     [RouteId]
//!     → matcher.rs (score id/param alignment per chain)
//!     → router.rs (keep the best score, merge requested params)
//!     → path.rs (chain → concrete path)
//! ```
//!
//! # Design Decisions
//! - Pure, synchronous functions over immutable inputs
//! - Deterministic: same input always yields the same chain
//! - Equal scores: first configured chain wins
//! - Unmodified chains are returned by identity

pub mod chain;
pub mod matcher;
pub mod params;
pub mod path;
pub mod priority;
pub mod redirect;
pub mod router;
pub mod segment;

pub use chain::{
    flatten_route_tree, Hook, LifecycleHook, NavigationHookResult, RouteChain, RouteEntry,
    RouteId, RouteNode,
};
pub use matcher::{matches_ids, matches_path};
pub use params::{merge_params, Params};
pub use path::{chain_to_path, generate_path, parse_path};
pub use priority::compute_priority;
pub use redirect::{find_route_redirect, matches_redirect, Redirect};
pub use router::{
    router_ids_to_chain, router_path_to_chain, Navigation, Resolution, Router, SharedRouter,
};
pub use segment::{Segment, SegmentCursor};
