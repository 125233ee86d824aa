//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and redirect counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, watch mode)
//! ```

pub mod logging;
pub mod metrics;
