//! Shared fixtures for integration tests.

use chain_router::routing::{Params, Redirect, RouteChain, RouteEntry};
use chain_router::RouterConfig;

/// Route table of a small tabbed app.
pub const APP_CONFIG: &str = r#"
[[redirects]]
from = "/"
to = "/tabs/home"

[[redirects]]
from = "/old-users/*"
to = "/tabs/users"

[[redirects]]
from = "/disabled/*"

[[routes]]
id = "tabs"
path = "/tabs"

[[routes.children]]
id = "home"
path = "/home"

[[routes.children]]
id = "users"
path = "/users"

[[routes.children.children]]
id = "user-list"
path = ""

[[routes.children.children]]
id = "user"
path = "/:id"
params = { tab = "posts" }

[[routes.children.children]]
id = "user-settings"
path = "/settings"

[[routes]]
id = "login"
path = "/login"
"#;

#[allow(dead_code)]
pub fn app_config() -> RouterConfig {
    chain_router::config::parse_config(APP_CONFIG).expect("fixture config is valid")
}

#[allow(dead_code)]
pub fn chain(entries: &[(&str, &[&str])]) -> RouteChain {
    entries
        .iter()
        .map(|(id, path)| RouteEntry::from_tokens(*id, path))
        .collect()
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs.iter().copied().collect()
}

#[allow(dead_code)]
pub fn redirect(from: &[&str], to: &[&str]) -> Redirect {
    Redirect::new(from, Some(to.iter().map(|s| s.to_string()).collect()))
}
