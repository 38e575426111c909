//! Navigation-history strategy.
//!
//! How the current route is represented in the browsing context: in the
//! URL path itself, or in the fragment after `#`. Chosen once at bootstrap,
//! never combined.

use serde::{Deserialize, Serialize};

/// Path-based or hash-based history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryMode {
    /// The route path is the location's path portion; query and fragment
    /// are ignored.
    #[default]
    Path,
    /// The route path lives in the fragment (`#/realtime/…`); the
    /// location's own path portion is ignored. No fragment means `/`.
    Hash,
}

impl HistoryMode {
    /// Extracts the resolvable route path from a location string.
    ///
    /// Pure function: no side effects, deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use wattview_app::HistoryMode;
    ///
    /// assert_eq!(HistoryMode::Path.route_path("/realtime?period=day"), "/realtime");
    /// assert_eq!(HistoryMode::Path.route_path("/realtime#top"), "/realtime");
    ///
    /// assert_eq!(HistoryMode::Hash.route_path("/index.html#/realtime"), "/realtime");
    /// assert_eq!(HistoryMode::Hash.route_path("/index.html"), "/");
    /// ```
    pub fn route_path(&self, location: &str) -> String {
        match self {
            HistoryMode::Path => {
                let path = location.split(&['?', '#'][..]).next().unwrap_or("");
                if path.is_empty() {
                    "/".to_string()
                } else {
                    path.to_string()
                }
            }
            HistoryMode::Hash => match location.split_once('#') {
                Some((_, fragment)) => {
                    let fragment = fragment.split('?').next().unwrap_or("");
                    if fragment.is_empty() {
                        "/".to_string()
                    } else if fragment.starts_with('/') {
                        fragment.to_string()
                    } else {
                        format!("/{fragment}")
                    }
                }
                None => "/".to_string(),
            },
        }
    }
}
