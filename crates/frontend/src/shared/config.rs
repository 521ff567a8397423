use serde::Deserialize;

use crate::dashboards::d410_yard_heatmap::heat::GradientVariant;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub heatmap: HeatmapConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend base URL. Empty means "same host as the page, port 3000".
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeatmapConfig {
    /// Auto-refresh period while the toggle is on
    pub poll_interval_secs: u32,
    /// Gradient used until the user picks another one
    pub gradient: GradientVariant,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[heatmap]
poll_interval_secs = 30
gradient = "red-white"
"#;

/// Build-time override of the backend URL
const BACKEND_URL_OVERRIDE: Option<&str> = option_env!("YARD_BACKEND_URL");

/// Load the client configuration.
///
/// Order: embedded defaults, then `YARD_BACKEND_URL` captured at build time,
/// then (if the URL is still empty) the page location.
pub fn load_config() -> Result<ClientConfig, toml::de::Error> {
    let mut config = parse_config(DEFAULT_CONFIG)?;

    if let Some(url) = BACKEND_URL_OVERRIDE.filter(|u| !u.trim().is_empty()) {
        log::info!("Using backend URL from YARD_BACKEND_URL: {}", url);
        config.api.base_url = url.to_string();
    }

    if config.api.base_url.trim().is_empty() {
        config.api.base_url = api_base_from_location();
    }

    config.api.base_url = normalize_base_url(&config.api.base_url);
    Ok(config)
}

fn parse_config(raw: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(raw)
}

/// Fallback used when the embedded defaults cannot be parsed
pub fn fallback_config() -> ClientConfig {
    ClientConfig {
        api: ApiConfig {
            base_url: normalize_base_url(&api_base_from_location()),
        },
        heatmap: HeatmapConfig {
            poll_interval_secs: 30,
            gradient: GradientVariant::RedWhite,
        },
    }
}

/// Backend on the page host, port 3000
///
/// Returns an empty string outside the browser.
fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.heatmap.poll_interval_secs, 30);
        assert_eq!(config.heatmap.gradient, GradientVariant::RedWhite);
    }

    #[test]
    fn test_gradient_parses_kebab_case() {
        let raw = r#"
[api]
base_url = "http://yard.local:3001/"

[heatmap]
poll_interval_secs = 5
gradient = "red-black"
"#;
        let config = parse_config(raw).unwrap();
        assert_eq!(config.heatmap.gradient, GradientVariant::RedBlack);
        assert_eq!(normalize_base_url(&config.api.base_url), "http://yard.local:3001");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[api]\nbase_url = \"\"\n").is_err());
    }
}
