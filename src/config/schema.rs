//! Configuration schema definitions.
//!
//! Routes are declared as a tree (`children`), with paths written as
//! strings (`"/tabs/:id"`). The tree is flattened into one chain per leaf.

use serde::{Deserialize, Serialize};

use crate::routing::{
    flatten_route_tree, parse_path, Params, Redirect, RouteChain, RouteEntry, RouteNode, Segment,
};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Top-level route declarations.
    pub routes: Vec<RouteConfig>,

    /// Redirect rules, checked in order.
    pub redirects: Vec<RedirectConfig>,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

impl RouterConfig {
    /// Every root-to-leaf chain declared by `routes`.
    pub fn chains(&self) -> Vec<RouteChain> {
        let nodes: Vec<RouteNode> = self.routes.iter().map(RouteConfig::to_node).collect();
        flatten_route_tree(&nodes)
    }

    pub fn redirects(&self) -> Vec<Redirect> {
        self.redirects.iter().map(RedirectConfig::to_redirect).collect()
    }
}

/// One declared route and its nested children.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier, matched case-insensitively.
    pub id: String,

    /// Path relative to the parent route; empty or `/` declares a default route.
    #[serde(default)]
    pub path: String,

    /// Default parameter values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfig>,
}

impl RouteConfig {
    /// Pattern segments of this route's own path.
    pub fn segments(&self) -> Vec<Segment> {
        Segment::parse_all(&parse_path(&self.path))
    }

    pub fn to_node(&self) -> RouteNode {
        let mut entry = RouteEntry::new(&self.id, self.segments());
        entry.params = self.params.clone();

        RouteNode {
            entry,
            children: self.children.iter().map(RouteConfig::to_node).collect(),
        }
    }
}

/// Redirect rule; a rule without `to` is kept but never applies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedirectConfig {
    /// Source path, may end in `*`.
    pub from: String,

    /// Destination path.
    #[serde(default)]
    pub to: Option<String>,
}

impl RedirectConfig {
    pub fn to_redirect(&self) -> Redirect {
        Redirect::new(&parse_path(&self.from), self.to.as_deref().map(parse_path))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level for this crate when `RUST_LOG` is unset.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Expose Prometheus metrics while watching.
    pub metrics_enabled: bool,

    /// Metrics listener address (e.g., "127.0.0.1:9100").
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[redirects]]
from = "/"
to = "/tabs/home"

[[redirects]]
from = "/legacy/*"

[[routes]]
id = "Tabs"
path = "/tabs"

[[routes.children]]
id = "home"
path = "/home"

[[routes.children]]
id = "user"
path = "/users/:id"
params = { tab = "posts" }

[observability]
log_format = "json"
"#;

    #[test]
    fn test_deserialize_sample() {
        let config: RouterConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].children.len(), 2);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_chains_from_tree() {
        let config: RouterConfig = toml::from_str(SAMPLE).unwrap();
        let chains = config.chains();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].ids(), vec!["tabs", "home"]);
        assert_eq!(
            chains[1][1].path,
            vec![Segment::Literal("users".into()), Segment::Param("id".into())]
        );
        assert_eq!(
            chains[1][1].params.as_ref().and_then(|p| p.get("tab")),
            Some("posts")
        );
    }

    #[test]
    fn test_redirects_from_config() {
        let config: RouterConfig = toml::from_str(SAMPLE).unwrap();
        let redirects = config.redirects();
        assert_eq!(redirects[0].from, vec![Segment::Root]);
        assert_eq!(redirects[0].to, Some(vec!["tabs".into(), "home".into()]));
        assert_eq!(redirects[1].from, vec![Segment::Literal("legacy".into()), Segment::Wildcard]);
        assert_eq!(redirects[1].to, None);
    }

    #[test]
    fn test_empty_path_is_default_route() {
        let route = RouteConfig {
            id: "index".into(),
            path: String::new(),
            params: None,
            children: Vec::new(),
        };
        assert_eq!(route.segments(), vec![Segment::Root]);
    }

    #[test]
    fn test_empty_config() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert!(config.chains().is_empty());
        assert!(config.redirects().is_empty());
    }
}
