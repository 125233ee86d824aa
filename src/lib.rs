//! Route chain matching library.
//!
//! Resolves a requested path, or a requested list of route ids, to the
//! chain of nested routes that should activate, binding `:params` and
//! applying redirects along the way.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Navigation, Params, Resolution, RouteChain, RouteEntry, RouteId, Router};
