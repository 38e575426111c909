//! # Wattview Router
//!
//! Declarative route table and resolver for the Wattview energy dashboard.
//! Maps a requested path to a page component plus extracted path parameters.
//!
//! ## Features
//!
//! - **Literal segments** - `/realtime`, `/cost-analysis`
//! - **Captures** - `/:macaddress` binds exactly one non-empty segment
//! - **Optional captures** - `/realtime/:macaddress?` matches with or
//!   without the trailing segment, and marks the capture absent when omitted
//! - **Declaration order wins** - routes are tried in the order they were
//!   declared; the first full alignment is the match
//! - **Named routes** - unique names for reverse lookup and URL generation
//! - **Props passthrough flag** - per route, forward captures to the
//!   component or not
//! - **Eager validation** - malformed patterns and duplicate names are
//!   construction-time errors, never resolution-time surprises
//!
//! ## Quick Start
//!
//! ```rust
//! use wattview_router::{RouteSpec, RouteTable};
//!
//! let table = RouteTable::from_specs([
//!     RouteSpec::new("/", "DefaultHome", "default-home"),
//!     RouteSpec::new("/realtime/:macaddress?", "RealTimeConsumption", "realtime").with_props(true),
//!     RouteSpec::new("/:macaddress", "DeviceDetail", "device-detail").with_props(true),
//! ])
//! .unwrap();
//!
//! let resolution = table.resolve("/realtime/AA:BB:CC:DD:EE:FF").unwrap();
//! assert_eq!(resolution.route.name(), "RealTimeConsumption");
//! assert_eq!(resolution.params.get("macaddress"), Some("AA:BB:CC:DD:EE:FF"));
//!
//! // No alignment anywhere in the table
//! assert!(table.resolve("/unknown/path/segments").is_err());
//! ```
//!
//! ## Pattern Syntax
//!
//! | Pattern | Matches | Notes |
//! |---------|---------|-------|
//! | `/` | `/` | no captures |
//! | `/:macaddress` | `/AA:BB:CC:DD:EE:FF` | required capture |
//! | `/realtime/:macaddress?` | `/realtime`, `/realtime/AA:…` | optional trailing capture |
//! | `/cost-analysis/:macaddress?` | `/cost-analysis`, `/cost-analysis/AA:…` | optional trailing capture |
//!
//! ## Matching Order
//!
//! There is no specificity score. The table is an ordered list and the first
//! route whose pattern fully aligns with the path wins, so declarations with
//! literal prefixes belong before a bare capture like `/:macaddress`.

pub mod error;
pub mod params;
pub mod path;
pub mod route;

use std::collections::HashMap;

pub use error::{NotFound, PatternError, TableError};
pub use params::{ParamValue, Params};
pub use route::pattern::PatternSegment;
pub use route::{RouteDef, RouteSpec};

/// The outcome of resolving a path: the matched route and the captured
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub route: RouteDef,
    pub params: Params,
}

/// Ordered, immutable table of route definitions.
///
/// Built once at application bootstrap and never mutated after; resolution
/// is a pure read. Route names are unique and usable for reverse lookup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Builds a table from already-parsed definitions.
    ///
    /// Fails on an empty or duplicate route name. Declaration order is
    /// preserved and is the tie-breaker at resolution time.
    pub fn new(routes: Vec<RouteDef>) -> Result<Self, TableError> {
        let mut by_name = HashMap::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            if route.name().is_empty() {
                return Err(TableError::EmptyName);
            }
            if by_name.insert(route.name().to_string(), index).is_some() {
                return Err(TableError::DuplicateName(route.name().to_string()));
            }
        }

        Ok(Self { routes, by_name })
    }

    /// Builds a table from declaration records, validating every pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wattview_router::{RouteSpec, RouteTable, TableError};
    ///
    /// let err = RouteTable::from_specs([
    ///     RouteSpec::new("/", "DefaultHome", "default-home"),
    ///     RouteSpec::new("/:macaddress", "DefaultHome", "device-detail"),
    /// ])
    /// .unwrap_err();
    ///
    /// assert_eq!(err, TableError::DuplicateName("DefaultHome".to_string()));
    /// ```
    pub fn from_specs(specs: impl IntoIterator<Item = RouteSpec>) -> Result<Self, TableError> {
        let routes = specs
            .into_iter()
            .map(|spec| {
                RouteDef::from_spec(&spec).map_err(|source| TableError::Pattern {
                    pattern: spec.path.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(routes)
    }

    /// Resolves a path to the first route whose pattern fully aligns.
    ///
    /// Routes are tried in declaration order with short-circuit evaluation.
    /// Pure function of (table, path): no side effects, so resolving the
    /// same path twice yields identical results.
    ///
    /// # Errors
    ///
    /// [`NotFound`] when no pattern aligns. Recoverable: fallback policy
    /// belongs to the caller. A path that is not in resolvable form
    /// (missing the leading `/`, empty, `//`) cannot align with any
    /// pattern and also resolves to [`NotFound`].
    pub fn resolve(&self, path: &str) -> Result<Resolution, NotFound> {
        if !path::is_valid_path(&path::normalize_path(path)) {
            return Err(NotFound {
                path: path.to_string(),
            });
        }

        self.routes
            .iter()
            .find_map(|route| {
                route.matches(path).map(|params| Resolution {
                    route: route.clone(),
                    params,
                })
            })
            .ok_or_else(|| NotFound {
                path: path.to_string(),
            })
    }

    /// Looks up a route by its unique name.
    pub fn route(&self, name: &str) -> Option<&RouteDef> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    /// Generates a URL for a named route by substituting parameters.
    ///
    /// Returns `None` for an unknown name or a missing required capture.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use wattview_router::{RouteSpec, RouteTable};
    ///
    /// let table = RouteTable::from_specs([
    ///     RouteSpec::new("/realtime/:macaddress?", "RealTimeConsumption", "realtime"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     table.href("RealTimeConsumption", &HashMap::new()),
    ///     Some("/realtime".to_string())
    /// );
    /// ```
    pub fn href(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.route(name).and_then(|route| route.href(params))
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard_table() -> RouteTable {
        RouteTable::from_specs([
            RouteSpec::new("/", "DefaultHome", "default-home"),
            RouteSpec::new("/realtime/:macaddress?", "RealTimeConsumption", "realtime")
                .with_props(true),
            RouteSpec::new("/cost-analysis/:macaddress?", "CostAnalysis", "cost-analysis")
                .with_props(true),
            RouteSpec::new("/:macaddress", "DeviceDetail", "device-detail").with_props(true),
        ])
        .unwrap()
    }

    #[test]
    fn test_declaration_order_wins() {
        let table = dashboard_table();

        // `/realtime` is declared before `/:macaddress`, so the literal
        // prefix wins even though both patterns align.
        let resolution = table.resolve("/realtime").unwrap();
        assert_eq!(resolution.route.name(), "RealTimeConsumption");
        assert!(resolution.params.is_absent("macaddress"));
    }

    #[test]
    fn test_bare_capture_is_last_resort() {
        let table = dashboard_table();

        let resolution = table.resolve("/AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(resolution.route.name(), "DeviceDetail");
        assert_eq!(resolution.params.get("macaddress"), Some("AA:BB:CC:DD:EE:FF"));
    }

    #[test]
    fn test_not_found_carries_path() {
        let table = dashboard_table();

        let err = table.resolve("/unknown/path/segments").unwrap_err();
        assert_eq!(err.path, "/unknown/path/segments");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = dashboard_table();

        let first = table.resolve("/cost-analysis/AA:BB").unwrap();
        let second = table.resolve("/cost-analysis/AA:BB").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_named_lookup() {
        let table = dashboard_table();

        assert_eq!(
            table.route("CostAnalysis").map(|r| r.pattern()),
            Some("/cost-analysis/:macaddress?")
        );
        assert!(table.route("Unknown").is_none());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = RouteTable::from_specs([RouteSpec::new("/", "", "default-home")]).unwrap_err();
        assert_eq!(err, TableError::EmptyName);
    }

    #[test]
    fn test_bad_pattern_is_a_construction_error() {
        let err =
            RouteTable::from_specs([RouteSpec::new("realtime", "RealTime", "realtime")])
                .unwrap_err();
        assert!(matches!(err, TableError::Pattern { .. }));
    }
}
