//! Route and URL helpers.
//!
//! Routes are site paths like `/` or `/landing/sant-cugat`. They are kept
//! in a canonical form: one leading slash, no trailing slash (except root).

/// Normalize a route to canonical form.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize_route("landing/a/"), "/landing/a");
/// assert_eq!(normalize_route(""), "/");
/// ```
pub fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Relative output directory for a route (`/` maps to the output root).
#[inline]
pub fn route_dir(route: &str) -> &str {
    route.trim_matches('/')
}

/// Drop any `?query` or `#fragment` suffix from a URL path.
#[inline]
pub fn strip_query_fragment(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("landing/sant-cugat"), "/landing/sant-cugat");
        assert_eq!(normalize_route("/landing/sant-cugat/"), "/landing/sant-cugat");
    }

    #[test]
    fn test_route_dir() {
        assert_eq!(route_dir("/"), "");
        assert_eq!(route_dir("/landing/a"), "landing/a");
    }

    #[test]
    fn test_strip_query_fragment() {
        assert_eq!(strip_query_fragment("/a.png?v=2"), "/a.png");
        assert_eq!(strip_query_fragment("/doc.pdf#page=3"), "/doc.pdf");
        assert_eq!(strip_query_fragment("/plain.svg"), "/plain.svg");
    }
}
