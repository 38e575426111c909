//! Built-in demo pages for the wattview binary.
//!
//! Stand-ins for the dashboard's real page components. Each one renders a
//! small HTML fragment; pages with props read `macaddress` out of them and
//! fall back to an all-devices view when it is null or missing.

use std::sync::Arc;

use serde_json::Value;
use wattview_app::{ComponentRegistry, PageComponent};

fn macaddress(props: &Value) -> Option<&str> {
    props.get("macaddress").and_then(Value::as_str)
}

struct DefaultHome;

impl PageComponent for DefaultHome {
    fn name(&self) -> &'static str {
        "default-home"
    }

    fn render(&self, _props: Value) -> anyhow::Result<String> {
        Ok("<main class=\"home\"><h1>Wattview</h1><p>Select a device</p></main>".to_string())
    }
}

struct DeviceDetail;

impl PageComponent for DeviceDetail {
    fn name(&self) -> &'static str {
        "device-detail"
    }

    fn render(&self, props: Value) -> anyhow::Result<String> {
        let mac = macaddress(&props).unwrap_or("unknown device");
        Ok(format!(
            "<section class=\"device\"><h1>Device {mac}</h1></section>"
        ))
    }
}

struct RealTimeConsumption;

impl PageComponent for RealTimeConsumption {
    fn name(&self) -> &'static str {
        "realtime-consumption"
    }

    fn render(&self, props: Value) -> anyhow::Result<String> {
        let scope = macaddress(&props).unwrap_or("all devices");
        Ok(format!(
            "<section class=\"realtime\"><h1>Real-time consumption</h1><p>{scope}</p></section>"
        ))
    }
}

struct CostAnalysis;

impl PageComponent for CostAnalysis {
    fn name(&self) -> &'static str {
        "cost-analysis"
    }

    fn render(&self, props: Value) -> anyhow::Result<String> {
        let scope = macaddress(&props).unwrap_or("all devices");
        Ok(format!(
            "<section class=\"costs\"><h1>Cost analysis</h1><p>{scope}</p></section>"
        ))
    }
}

struct NotFoundPage;

impl PageComponent for NotFoundPage {
    fn name(&self) -> &'static str {
        "not-found"
    }

    fn render(&self, props: Value) -> anyhow::Result<String> {
        let path = props.get("path").and_then(Value::as_str).unwrap_or("?");
        Ok(format!(
            "<main class=\"not-found\"><h1>Nothing at {path}</h1></main>"
        ))
    }
}

/// Registry with every demo page registered.
pub fn registry() -> ComponentRegistry {
    ComponentRegistry::new()
        .with(Arc::new(DefaultHome))
        .with(Arc::new(DeviceDetail))
        .with(Arc::new(RealTimeConsumption))
        .with(Arc::new(CostAnalysis))
        .with(Arc::new(NotFoundPage))
}
