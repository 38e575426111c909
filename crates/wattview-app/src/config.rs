//! Application configuration (wattview.toml).
//!
//! The explicit, immutable configuration object handed to
//! [`crate::bootstrap`]: history mode, the ordered route declarations, and
//! the optional not-found fallback component.

use serde::{Deserialize, Serialize};
use wattview_router::RouteSpec;

use crate::history::HistoryMode;

/// Top-level configuration.
///
/// ```toml
/// [app]
/// history = "path"
/// not-found = "not-found"
///
/// [[routes]]
/// path = "/"
/// name = "DefaultHome"
/// component = "default-home"
///
/// [[routes]]
/// path = "/:macaddress"
/// name = "DeviceDetail"
/// component = "device-detail"
/// props = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppSection {
    /// Navigation-history strategy, path-based by default.
    #[serde(default)]
    pub history: HistoryMode,
    /// Component rendered when no route matches. When unset, `NotFound`
    /// surfaces to the caller instead.
    #[serde(default)]
    pub not_found: Option<String>,
}

/// One declared route, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub component: String,
    #[serde(default)]
    pub props: bool,
}

impl AppConfig {
    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_str(&content)?)
    }

    /// The built-in dashboard table.
    ///
    /// Literal-prefixed patterns are declared before the bare
    /// `/:macaddress` capture: resolution is first-match-wins in
    /// declaration order, so `/realtime` must be a page, not a device.
    pub fn dashboard() -> Self {
        Self {
            app: AppSection {
                history: HistoryMode::Path,
                not_found: Some("not-found".to_string()),
            },
            routes: vec![
                RouteEntry {
                    path: "/".to_string(),
                    name: "DefaultHome".to_string(),
                    component: "default-home".to_string(),
                    props: false,
                },
                RouteEntry {
                    path: "/realtime/:macaddress?".to_string(),
                    name: "RealTimeConsumption".to_string(),
                    component: "realtime-consumption".to_string(),
                    props: true,
                },
                RouteEntry {
                    path: "/cost-analysis/:macaddress?".to_string(),
                    name: "CostAnalysis".to_string(),
                    component: "cost-analysis".to_string(),
                    props: true,
                },
                RouteEntry {
                    path: "/:macaddress".to_string(),
                    name: "DeviceDetail".to_string(),
                    component: "device-detail".to_string(),
                    props: true,
                },
            ],
        }
    }

    /// The route declarations as resolver records.
    pub fn route_specs(&self) -> Vec<RouteSpec> {
        self.routes
            .iter()
            .map(|entry| {
                RouteSpec::new(
                    entry.path.as_str(),
                    entry.name.as_str(),
                    entry.component.as_str(),
                )
                .with_props(entry.props)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_str(
            r#"
            [app]
            history = "hash"
            not-found = "not-found"

            [[routes]]
            path = "/"
            name = "DefaultHome"
            component = "default-home"

            [[routes]]
            path = "/:macaddress"
            name = "DeviceDetail"
            component = "device-detail"
            props = true
            "#,
        )
        .unwrap();

        assert_eq!(config.app.history, HistoryMode::Hash);
        assert_eq!(config.app.not_found.as_deref(), Some("not-found"));
        assert_eq!(config.routes.len(), 2);
        assert!(!config.routes[0].props);
        assert!(config.routes[1].props);
    }

    #[test]
    fn test_props_defaults_to_false() {
        let config = AppConfig::from_str(
            r#"
            [[routes]]
            path = "/"
            name = "DefaultHome"
            component = "default-home"
            "#,
        )
        .unwrap();

        assert!(!config.routes[0].props);
        assert_eq!(config.app.history, HistoryMode::Path);
        assert_eq!(config.app.not_found, None);
    }

    #[test]
    fn test_dashboard_declares_bare_capture_last() {
        let config = AppConfig::dashboard();
        let last = config.routes.last().unwrap();
        assert_eq!(last.path, "/:macaddress");
    }

    #[test]
    fn test_route_specs_preserve_order() {
        let specs = AppConfig::dashboard().route_specs();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "DefaultHome",
                "RealTimeConsumption",
                "CostAnalysis",
                "DeviceDetail"
            ]
        );
    }
}
