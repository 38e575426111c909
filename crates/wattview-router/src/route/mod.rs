//! Route definitions and segment alignment.

pub mod pattern;

use std::collections::HashMap;

use crate::error::PatternError;
use crate::params::Params;
use crate::path::normalize_path;
use self::pattern::{parse_pattern, PatternSegment};

/// A route declaration record: the configuration contract exposed to the
/// surrounding application.
///
/// `props` defaults to `false`; captured parameters are only forwarded to
/// the component when it is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: String,
    pub name: String,
    pub component: String,
    pub props: bool,
}

impl RouteSpec {
    /// Creates a declaration with `props` disabled.
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component: component.into(),
            props: false,
        }
    }

    /// Enables or disables props passthrough for this route.
    pub fn with_props(mut self, props: bool) -> Self {
        self.props = props;
        self
    }
}

/// A validated route: pattern, unique name, component reference, and the
/// props passthrough flag.
///
/// The component reference is an opaque registry key; the resolver never
/// inspects or constructs the renderable behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pattern: String,
    segments: Vec<PatternSegment>,
    name: String,
    component: String,
    props: bool,
}

impl RouteDef {
    /// Parses a pattern into a route definition.
    ///
    /// Validation is eager; see [`parse_pattern`] for the rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use wattview_router::RouteDef;
    ///
    /// let route = RouteDef::parse("/:macaddress", "DeviceDetail", "device-detail")
    ///     .unwrap()
    ///     .with_props(true);
    ///
    /// assert_eq!(route.pattern(), "/:macaddress");
    /// assert_eq!(route.name(), "DeviceDetail");
    /// assert!(route.props());
    /// ```
    pub fn parse(
        pattern: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let segments = parse_pattern(&pattern)?;

        Ok(Self {
            pattern,
            segments,
            name: name.into(),
            component: component.into(),
            props: false,
        })
    }

    /// Builds a definition from a declaration record.
    pub fn from_spec(spec: &RouteSpec) -> Result<Self, PatternError> {
        Ok(
            Self::parse(spec.path.as_str(), spec.name.as_str(), spec.component.as_str())?
                .with_props(spec.props),
        )
    }

    /// Enables or disables props passthrough.
    pub fn with_props(mut self, props: bool) -> Self {
        self.props = props;
        self
    }

    /// The pattern string this route was declared with.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The unique route name used for reverse lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque component registry key.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Whether captured parameters are forwarded to the component.
    pub fn props(&self) -> bool {
        self.props
    }

    /// The parsed pattern segments, in order.
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Aligns a path against this route's pattern.
    ///
    /// Returns the captured parameters on a full alignment, `None`
    /// otherwise. Literal segments match exactly and case-sensitively; a
    /// capture consumes exactly one non-empty segment; an optional capture
    /// consumes zero or one trailing segment and is marked absent when
    /// omitted. Trailing slashes on the path are normalized away first.
    ///
    /// Pure function of (route, path): no side effects, deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use wattview_router::RouteDef;
    ///
    /// let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime").unwrap();
    ///
    /// assert!(route.matches("/realtime").is_some());
    /// assert!(route.matches("/realtime/AA:BB:CC:DD:EE:FF").is_some());
    /// assert!(route.matches("/cost-analysis").is_none());
    /// assert!(route.matches("/realtime/AA:BB/extra").is_none());
    /// ```
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path = normalize_path(path);
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut params = Params::new();
        let mut path_idx = 0;

        for segment in &self.segments {
            match segment {
                PatternSegment::Literal(literal) => {
                    if path_idx >= path_segments.len() || path_segments[path_idx] != literal {
                        return None;
                    }
                    path_idx += 1;
                }
                PatternSegment::Capture(name) => {
                    if path_idx >= path_segments.len() {
                        return None;
                    }
                    params.bind(name, path_segments[path_idx].to_string());
                    path_idx += 1;
                }
                PatternSegment::OptionalCapture(name) => {
                    // Only ever the trailing pattern segment; consume the
                    // trailing path segment if there is one.
                    if path_idx < path_segments.len() {
                        params.bind(name, path_segments[path_idx].to_string());
                        path_idx += 1;
                    } else {
                        params.mark_absent(name);
                    }
                }
            }
        }

        // Full alignment: no leftover path segments.
        if path_idx == path_segments.len() {
            Some(params)
        } else {
            None
        }
    }

    /// Generates a URL for this route by substituting parameters.
    ///
    /// Every required capture must be supplied; an omitted optional capture
    /// drops the trailing segment. Returns `None` when a required capture
    /// is missing or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use wattview_router::RouteDef;
    ///
    /// let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime").unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("macaddress".to_string(), "AA:BB:CC:DD:EE:FF".to_string());
    ///
    /// assert_eq!(route.href(&params), Some("/realtime/AA:BB:CC:DD:EE:FF".to_string()));
    /// assert_eq!(route.href(&HashMap::new()), Some("/realtime".to_string()));
    /// ```
    pub fn href(&self, params: &HashMap<String, String>) -> Option<String> {
        let segments: Option<Vec<String>> = self
            .segments
            .iter()
            .map(|segment| match segment {
                PatternSegment::Literal(literal) => Some(literal.clone()),
                PatternSegment::Capture(name) => params.get(name).cloned(),
                PatternSegment::OptionalCapture(name) => {
                    Some(params.get(name).cloned().unwrap_or_default())
                }
            })
            .collect();

        segments.map(|segments| {
            let filtered: Vec<String> = segments.into_iter().filter(|s| !s.is_empty()).collect();

            if filtered.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", filtered.join("/"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_root() {
        let route = RouteDef::parse("/", "DefaultHome", "default-home").unwrap();
        let params = route.matches("/").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_capture_binds_single_segment() {
        let route = RouteDef::parse("/:macaddress", "DeviceDetail", "device-detail").unwrap();

        let params = route.matches("/AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(params.get("macaddress"), Some("AA:BB:CC:DD:EE:FF"));

        assert!(route.matches("/").is_none());
        assert!(route.matches("/a/b").is_none());
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime")
            .unwrap();
        assert!(route.matches("/Realtime").is_none());
    }

    #[test]
    fn test_optional_capture_absent_marker() {
        let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime")
            .unwrap();

        let params = route.matches("/realtime").unwrap();
        assert!(params.is_absent("macaddress"));

        let params = route.matches("/realtime/AA:BB").unwrap();
        assert_eq!(params.get("macaddress"), Some("AA:BB"));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime")
            .unwrap();
        assert!(route.matches("/realtime/").is_some());
    }

    #[test]
    fn test_no_leftover_segments() {
        let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime")
            .unwrap();
        assert!(route.matches("/realtime/AA:BB/today").is_none());
    }

    #[test]
    fn test_href_required_capture() {
        let route = RouteDef::parse("/:macaddress", "DeviceDetail", "device-detail").unwrap();

        let mut params = HashMap::new();
        params.insert("macaddress".to_string(), "AA:BB".to_string());
        assert_eq!(route.href(&params), Some("/AA:BB".to_string()));

        assert_eq!(route.href(&HashMap::new()), None);
    }

    #[test]
    fn test_href_root() {
        let route = RouteDef::parse("/", "DefaultHome", "default-home").unwrap();
        assert_eq!(route.href(&HashMap::new()), Some("/".to_string()));
    }

    #[test]
    fn test_from_spec_defaults() {
        let spec = RouteSpec::new("/", "DefaultHome", "default-home");
        let route = RouteDef::from_spec(&spec).unwrap();
        assert!(!route.props());

        let spec = spec.with_props(true);
        let route = RouteDef::from_spec(&spec).unwrap();
        assert!(route.props());
    }
}
