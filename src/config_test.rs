use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("http://api.test///");
    assert_eq!(config.base_url, "http://api.test");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("http://api.test/");
    assert_eq!(config.endpoint("/login"), "http://api.test/login");
    assert_eq!(config.endpoint("validate-token"), "http://api.test/validate-token");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let config = ApiConfig::new("https://example.com/auth");
    assert_eq!(config.endpoint("login"), "https://example.com/auth/login");
}

#[test]
fn from_env_never_yields_empty_base() {
    let config = ApiConfig::from_env();
    assert!(!config.base_url.is_empty());
    assert!(!config.base_url.ends_with('/'));
}

#[test]
fn default_base_url_points_at_local_api() {
    assert_eq!(ApiConfig::new(DEFAULT_BASE_URL).endpoint("login"), "http://localhost:3001/login");
}
