//! # Wattview App
//!
//! Application shell around [`wattview_router`]: page component registry,
//! navigation-history strategy, TOML configuration, and a bootstrap
//! function that wires them into a running [`App`].
//!
//! Bootstrap is explicit and runs once: the configuration object goes in,
//! the application value comes out. Nothing is stored as ambient state and
//! the route table is immutable after construction.
//!
//! ```rust
//! use std::sync::Arc;
//! use wattview_app::{bootstrap, AppConfig, ComponentRegistry, PageComponent};
//!
//! struct Home;
//!
//! impl PageComponent for Home {
//!     fn name(&self) -> &'static str {
//!         "default-home"
//!     }
//!
//!     fn render(&self, _props: serde_json::Value) -> anyhow::Result<String> {
//!         Ok("<main>Home</main>".to_string())
//!     }
//! }
//!
//! let config = AppConfig::from_str(
//!     r#"
//!     [[routes]]
//!     path = "/"
//!     name = "DefaultHome"
//!     component = "default-home"
//!     "#,
//! )
//! .unwrap();
//!
//! let registry = ComponentRegistry::new().with(Arc::new(Home));
//! let mut app = bootstrap(config, registry).unwrap();
//!
//! let view = app.navigate("/").unwrap();
//! assert_eq!(view.html, "<main>Home</main>");
//! ```

pub mod component;
pub mod config;
pub mod history;
pub mod navigator;

use anyhow::Context;
use tracing::info;
use wattview_router::RouteTable;

pub use component::{ComponentRegistry, PageComponent};
pub use config::{AppConfig, AppSection, RouteEntry};
pub use history::HistoryMode;
pub use navigator::{Navigator, RenderedView};

/// A bootstrapped application: immutable route table, component registry,
/// history mode, and the navigator.
#[derive(Debug)]
pub struct App {
    table: RouteTable,
    registry: ComponentRegistry,
    history: HistoryMode,
    not_found: Option<String>,
    navigator: Navigator,
}

/// Builds the route table from the configuration and wires the application
/// together. Runs once at startup; the returned [`App`] owns everything and
/// no reconfiguration happens after.
pub fn bootstrap(config: AppConfig, registry: ComponentRegistry) -> anyhow::Result<App> {
    let table = RouteTable::from_specs(config.route_specs())
        .context("route configuration is invalid")?;

    info!(
        routes = table.len(),
        history = ?config.app.history,
        "route table built"
    );

    Ok(App {
        table,
        registry,
        history: config.app.history,
        not_found: config.app.not_found,
        navigator: Navigator::new(),
    })
}

impl App {
    /// The immutable route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The configured history mode.
    pub fn history(&self) -> HistoryMode {
        self.history
    }

    /// Records a navigation request without settling it. An unsettled
    /// earlier request is superseded: last navigation wins.
    pub fn request(&mut self, location: impl Into<String>) {
        self.navigator.request(location);
    }

    /// Settles the pending navigation request, if any.
    pub fn settle(&mut self) -> anyhow::Result<()> {
        self.navigator.settle(
            &self.table,
            &self.registry,
            self.history,
            self.not_found.as_deref(),
        )
    }

    /// Requests and settles in one step, returning the rendered view.
    pub fn navigate(&mut self, location: impl Into<String>) -> anyhow::Result<&RenderedView> {
        self.request(location);
        self.settle()?;
        self.navigator
            .current()
            .ok_or_else(|| anyhow::anyhow!("navigation settled without a view"))
    }

    /// The most recently settled view.
    pub fn current(&self) -> Option<&RenderedView> {
        self.navigator.current()
    }
}
