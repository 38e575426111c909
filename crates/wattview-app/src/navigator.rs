//! Navigation requests and the last-navigation-wins policy.
//!
//! Navigation is single-threaded and event-driven: each request is handled
//! to completion (resolve, then render) before the next one. A request that
//! arrives before the previous one has settled supersedes it; the old
//! request is simply discarded.

use anyhow::anyhow;
use serde_json::json;
use tracing::{debug, info};
use wattview_router::{Params, RouteTable};

use crate::component::ComponentRegistry;
use crate::history::HistoryMode;

/// The outcome of a settled navigation: what was rendered and for which
/// route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// Name of the matched route, or `None` when the not-found fallback
    /// was rendered.
    pub route: Option<String>,
    /// The resolved route path (after history-mode extraction).
    pub path: String,
    /// Captured parameters of the match; empty for the fallback.
    pub params: Params,
    /// Markup produced by the page component.
    pub html: String,
}

/// Holds at most one pending navigation request and the current view.
#[derive(Debug, Default)]
pub struct Navigator {
    pending: Option<String>,
    current: Option<RenderedView>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a navigation request, superseding any request that has not
    /// settled yet: last navigation wins.
    pub fn request(&mut self, location: impl Into<String>) {
        let location = location.into();
        if let Some(superseded) = self.pending.replace(location) {
            debug!(%superseded, "navigation superseded before settling");
        }
    }

    /// Whether a request is waiting to be settled.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Settles the pending request: extracts the route path per the history
    /// mode, resolves it, renders the page component, and installs the
    /// result as the current view. A no-op when nothing is pending.
    ///
    /// On `NotFound`, renders `not_found` when configured (the component
    /// receives the failed path as its only prop); otherwise the error
    /// surfaces to the caller and the current view is left unchanged.
    pub fn settle(
        &mut self,
        table: &RouteTable,
        registry: &ComponentRegistry,
        history: HistoryMode,
        not_found: Option<&str>,
    ) -> anyhow::Result<()> {
        let Some(location) = self.pending.take() else {
            return Ok(());
        };

        let path = history.route_path(&location);

        match table.resolve(&path) {
            Ok(resolution) => {
                let component = registry.get(resolution.route.component()).ok_or_else(|| {
                    anyhow!(
                        "route `{}` refers to unregistered component `{}`",
                        resolution.route.name(),
                        resolution.route.component()
                    )
                })?;

                let props = if resolution.route.props() {
                    resolution.params.to_props()
                } else {
                    json!({})
                };

                let html = component.render(props)?;
                info!(route = resolution.route.name(), %path, "navigation settled");

                self.current = Some(RenderedView {
                    route: Some(resolution.route.name().to_string()),
                    path,
                    params: resolution.params,
                    html,
                });
                Ok(())
            }
            Err(not_found_err) => match not_found {
                Some(fallback) => {
                    let component = registry.get(fallback).ok_or_else(|| {
                        anyhow!("not-found fallback component `{fallback}` is not registered")
                    })?;

                    let html = component.render(json!({ "path": path.clone() }))?;
                    info!(%path, "no route matched, rendered fallback");

                    self.current = Some(RenderedView {
                        route: None,
                        path,
                        params: Params::new(),
                        html,
                    });
                    Ok(())
                }
                None => Err(not_found_err.into()),
            },
        }
    }

    /// The most recently settled view.
    pub fn current(&self) -> Option<&RenderedView> {
        self.current.as_ref()
    }
}
