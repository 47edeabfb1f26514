//! Deployment-dependent locations: router base path and backend URL.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/app` for a sub-path
/// deployment), routes are mounted beneath it. Local builds without
/// `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Root URL of the recommendation backend.
///
/// Taken from `BUDTENDER_API_URL` at compile time, defaulting to the local
/// development server.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("BUDTENDER_API_URL"))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_with(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(budtender_core::constants::DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::router_base;

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/app/"),
            Some(String::from("/app"))
        );
    }

    #[test]
    fn api_base_trims_and_defaults() {
        assert_eq!(super::api_base_with(None), "http://localhost:8001");
        assert_eq!(super::api_base_with(Some("  ")), "http://localhost:8001");
        assert_eq!(
            super::api_base_with(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }
}
