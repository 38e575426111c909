//! Captured route parameters.
//!
//! A [`Params`] map distinguishes a *bound* capture from an optional capture
//! that was *absent* from the path. A name missing from the map entirely was
//! never a capture of the matched route.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// The value bound to a single capture name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// The capture matched a path segment.
    Bound(String),
    /// An optional capture was omitted from the path. Distinct from an
    /// empty value: the segment was not there at all.
    Absent,
}

/// Mapping from capture names to extracted path segment values.
///
/// # Examples
///
/// ```
/// use wattview_router::RouteDef;
///
/// let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime").unwrap();
///
/// let params = route.matches("/realtime/AA:BB:CC:DD:EE:FF").unwrap();
/// assert_eq!(params.get("macaddress"), Some("AA:BB:CC:DD:EE:FF"));
///
/// let params = route.matches("/realtime").unwrap();
/// assert_eq!(params.get("macaddress"), None);
/// assert!(params.is_absent("macaddress"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, name: &str, value: String) {
        self.values.insert(name.to_string(), ParamValue::Bound(value));
    }

    pub(crate) fn mark_absent(&mut self, name: &str) {
        self.values.insert(name.to_string(), ParamValue::Absent);
    }

    /// Returns the bound value for a capture name.
    ///
    /// Returns `None` both for absent optional captures and for names the
    /// route never captured; use [`Params::is_absent`] to tell them apart.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Bound(value)) => Some(value),
            _ => None,
        }
    }

    /// Whether `name` is an optional capture that was omitted from the path.
    pub fn is_absent(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ParamValue::Absent))
    }

    /// Whether `name` was a capture of the matched route, bound or absent.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of captures, bound and absent.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all captures in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Converts the captures into a JSON object for props passthrough.
    ///
    /// Bound captures become strings; absent optional captures become
    /// `null`, so a component can still see that the capture exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use wattview_router::RouteDef;
    ///
    /// let route = RouteDef::parse("/realtime/:macaddress?", "RealTimeConsumption", "realtime").unwrap();
    /// let params = route.matches("/realtime").unwrap();
    ///
    /// assert_eq!(params.to_props(), serde_json::json!({ "macaddress": null }));
    /// ```
    pub fn to_props(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.values {
            let json = match value {
                ParamValue::Bound(value) => Value::String(value.clone()),
                ParamValue::Absent => Value::Null,
            };
            object.insert(name.clone(), json);
        }
        Value::Object(object)
    }
}
