//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject patterns the matcher can only ever treat as dead routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Only applies to loaded files; chains passed straight to the matcher are
//!   never validated and simply fail to match

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{RedirectConfig, RouteConfig, RouterConfig};
use crate::routing::{parse_path, Segment};

/// A semantic problem in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route at {location} has an empty id")]
    EmptyRouteId { location: String },

    #[error("route '{route}' has a parameter without a name")]
    EmptyParamName { route: String },

    #[error("route '{route}' declares parameter '{name}' more than once")]
    DuplicateParam { route: String, name: String },

    #[error("route '{route}' uses '*', which only redirects support")]
    WildcardInRoute { route: String },

    #[error("redirect from '{from}' has segments after '*'")]
    SegmentsAfterWildcard { from: String },
}

/// Check a parsed configuration, collecting every error found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (i, route) in config.routes.iter().enumerate() {
        validate_route(route, &format!("routes[{}]", i), &mut errors);
    }
    for redirect in &config.redirects {
        validate_redirect(redirect, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(route: &RouteConfig, location: &str, errors: &mut Vec<ValidationError>) {
    if route.id.trim().is_empty() {
        errors.push(ValidationError::EmptyRouteId {
            location: location.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for segment in route.segments() {
        match segment {
            Segment::Param(name) if name.is_empty() => {
                errors.push(ValidationError::EmptyParamName {
                    route: route.id.clone(),
                });
            }
            Segment::Param(name) => {
                if !seen.insert(name.clone()) {
                    errors.push(ValidationError::DuplicateParam {
                        route: route.id.clone(),
                        name,
                    });
                }
            }
            Segment::Wildcard => errors.push(ValidationError::WildcardInRoute {
                route: route.id.clone(),
            }),
            Segment::Literal(_) | Segment::Root => {}
        }
    }

    for (i, child) in route.children.iter().enumerate() {
        validate_route(child, &format!("{}.children[{}]", location, i), errors);
    }
}

fn validate_redirect(redirect: &RedirectConfig, errors: &mut Vec<ValidationError>) {
    let from = parse_path(&redirect.from);
    if let Some(pos) = from.iter().position(|s| s == "*") {
        if pos + 1 < from.len() {
            errors.push(ValidationError::SegmentsAfterWildcard {
                from: redirect.from.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, path: &str) -> RouteConfig {
        RouteConfig {
            id: id.into(),
            path: path.into(),
            params: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = RouterConfig::default();
        let mut tabs = route("tabs", "/tabs");
        tabs.children.push(route("user", "/users/:id"));
        config.routes.push(tabs);
        config.redirects.push(RedirectConfig {
            from: "/old/*".into(),
            to: Some("/tabs".into()),
        });
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        let mut parent = route("", "/:");
        parent.children.push(route("child", "/:id/:id/*"));
        config.routes.push(parent);
        config.redirects.push(RedirectConfig {
            from: "/a/*/b".into(),
            to: Some("/".into()),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyRouteId {
                    location: "routes[0]".into()
                },
                ValidationError::EmptyParamName { route: String::new() },
                ValidationError::DuplicateParam {
                    route: "child".into(),
                    name: "id".into()
                },
                ValidationError::WildcardInRoute {
                    route: "child".into()
                },
                ValidationError::SegmentsAfterWildcard {
                    from: "/a/*/b".into()
                },
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::DuplicateParam {
            route: "user".into(),
            name: "id".into(),
        };
        assert_eq!(err.to_string(), "route 'user' declares parameter 'id' more than once");
    }
}
