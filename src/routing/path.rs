//! Conversions between path strings, segment sequences and chains.

use crate::routing::chain::RouteChain;
use crate::routing::segment::Segment;

/// Split a path string into segments.
///
/// Anything from `?` on is ignored. Empty pieces are dropped and an empty
/// path becomes the root sentinel `[""]`.
pub fn parse_path(path: &str) -> Vec<String> {
    let pathname = path.split('?').next().unwrap_or_default();
    let segments: Vec<String> = pathname
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if segments.is_empty() {
        vec![String::new()]
    } else {
        segments
    }
}

/// Join segments back into an absolute path string.
pub fn generate_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{}", joined)
}

/// Build the concrete path a chain points at, substituting entry params.
///
/// Returns `None` when a `:name` segment has no (or an empty) value.
pub fn chain_to_path(chain: &RouteChain) -> Option<Vec<String>> {
    let mut path = Vec::new();
    for entry in chain.iter() {
        for segment in &entry.path {
            match segment {
                Segment::Param(name) => {
                    let value = entry
                        .params
                        .as_ref()
                        .and_then(|p| p.get(name))
                        .filter(|v| !v.is_empty())?;
                    path.push(value.to_string());
                }
                Segment::Root => {}
                other => path.push(other.to_string()),
            }
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::chain::RouteEntry;
    use crate::routing::params::Params;

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("/tabs/42/"), vec!["tabs", "42"]);
        assert_eq!(parse_path("tabs//42"), vec!["tabs", "42"]);
        assert_eq!(parse_path("/search?q=rust"), vec!["search"]);
        assert_eq!(parse_path("/ a / b "), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_root_path() {
        assert_eq!(parse_path("/"), vec![""]);
        assert_eq!(parse_path(""), vec![""]);
        assert_eq!(parse_path("?x=1"), vec![""]);
    }

    #[test]
    fn test_generate_path() {
        assert_eq!(generate_path(&["tabs", "42"]), "/tabs/42");
        assert_eq!(generate_path(&[""]), "/");
    }

    #[test]
    fn test_chain_to_path() {
        let params: Params = [("id", "42")].into_iter().collect();
        let chain = RouteChain::new(vec![
            RouteEntry::from_tokens("root", &[""]),
            RouteEntry::from_tokens("users", &["users"]),
            RouteEntry::from_tokens("user", &[":id"]).with_params(params),
        ]);
        assert_eq!(chain_to_path(&chain), Some(vec!["users".into(), "42".into()]));
    }

    #[test]
    fn test_chain_to_path_missing_param() {
        let chain = RouteChain::new(vec![RouteEntry::from_tokens("user", &["users", ":id"])]);
        assert_eq!(chain_to_path(&chain), None);

        let empty: Params = [("id", "")].into_iter().collect();
        let chain = RouteChain::new(vec![
            RouteEntry::from_tokens("user", &[":id"]).with_params(empty)
        ]);
        assert_eq!(chain_to_path(&chain), None);
    }
}
