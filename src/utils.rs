// src/utils.rs
use gloo_utils::window;

/// Path prefix used when the site is published under a sub-path.
const DEPLOY_PREFIX: &str = "/wtf-site";

/// Base path for the given page pathname: empty locally, the deployment
/// prefix when served from it.
pub fn base_path_for(pathname: &str) -> &'static str {
    if pathname == DEPLOY_PREFIX || pathname.starts_with(&format!("{}/", DEPLOY_PREFIX)) {
        DEPLOY_PREFIX
    } else {
        ""
    }
}

pub fn get_base_url() -> String {
    let pathname = window().location().pathname().unwrap_or_default();
    base_path_for(&pathname).to_string()
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build an asset URL with the correct base path.
pub fn resource_url(path: &str) -> String {
    join_url(&get_base_url(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_for() {
        assert_eq!(base_path_for("/"), "");
        assert_eq!(base_path_for("/index.html"), "");
        assert_eq!(base_path_for("/wtf-site"), "/wtf-site");
        assert_eq!(base_path_for("/wtf-site/"), "/wtf-site");
        assert_eq!(base_path_for("/wtf-site-old/"), "");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("", "apple.png"), "/apple.png");
        assert_eq!(join_url("", "/apple.png"), "/apple.png");
        assert_eq!(join_url("/wtf-site", "logo.png"), "/wtf-site/logo.png");
        assert_eq!(join_url("/wtf-site/", "/logo.png"), "/wtf-site/logo.png");
        assert_eq!(
            join_url("/wtf-site", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
