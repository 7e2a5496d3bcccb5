//! Typed window content
//!
//! On the wire a window carries a `type` tag and a free-form `data` object.
//! Here the pair becomes one enum so each panel gets a payload whose shape
//! is known at compile time. Tags this build does not know are kept verbatim
//! in [`WindowContent::Unknown`] so they survive a save/load cycle and render
//! as a diagnostic placeholder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for a gate-in window (installing an external integration)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateInData {
    /// Name of the tool being gated in, e.g. "Notion"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Payload for the 3D workflow graph window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

/// Payload for the copilot chat window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopilotData {
    /// Conversation to resume, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Prompt to pre-fill in the input box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_prompt: Option<String>,
}

/// Payload for the agent dashboard window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDashboardData {
    /// Agent to select on open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

/// Content hosted by a window, keyed by its `type` tag
#[derive(Clone, Debug, PartialEq)]
pub enum WindowContent {
    GateIn(GateInData),
    /// Retired 2D flow editor; still accepted so old layouts load
    Flow,
    Flow3d(FlowData),
    Copilot(CopilotData),
    Adapters,
    AgentDashboard(AgentDashboardData),
    /// Tag not known to this build
    Unknown {
        kind: String,
        data: Value,
    },
}

impl Default for WindowContent {
    fn default() -> Self {
        WindowContent::Copilot(CopilotData::default())
    }
}

impl WindowContent {
    /// The wire tag for this content
    pub fn kind(&self) -> &str {
        match self {
            WindowContent::GateIn(_) => "gateIn",
            WindowContent::Flow => "flow",
            WindowContent::Flow3d(_) => "flow3d",
            WindowContent::Copilot(_) => "copilot",
            WindowContent::Adapters => "adapters",
            WindowContent::AgentDashboard(_) => "agentDashboard",
            WindowContent::Unknown { kind, .. } => kind,
        }
    }
}

/// Wire shape: `{ "type": "...", "data": { ... } }`
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    data: Value,
}

fn payload<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, serde_json::Error> {
    // Creators often omit `data` entirely for windows with optional payloads
    let data = if data.is_null() { Value::Object(Map::new()) } else { data };
    serde_json::from_value(data)
}

impl TryFrom<RawContent> for WindowContent {
    type Error = serde_json::Error;

    fn try_from(raw: RawContent) -> Result<Self, Self::Error> {
        let content = match raw.kind.as_str() {
            "gateIn" => WindowContent::GateIn(payload(raw.data)?),
            "flow" => WindowContent::Flow,
            "flow3d" => WindowContent::Flow3d(payload(raw.data)?),
            "copilot" => WindowContent::Copilot(payload(raw.data)?),
            "adapters" => WindowContent::Adapters,
            "agentDashboard" => WindowContent::AgentDashboard(payload(raw.data)?),
            _ => WindowContent::Unknown {
                kind: raw.kind,
                data: raw.data,
            },
        };
        Ok(content)
    }
}

impl From<WindowContent> for RawContent {
    fn from(content: WindowContent) -> Self {
        let kind = content.kind().to_string();
        let data = match content {
            WindowContent::GateIn(d) => serde_json::to_value(d),
            WindowContent::Flow3d(d) => serde_json::to_value(d),
            WindowContent::Copilot(d) => serde_json::to_value(d),
            WindowContent::AgentDashboard(d) => serde_json::to_value(d),
            WindowContent::Flow | WindowContent::Adapters => Ok(Value::Null),
            WindowContent::Unknown { data, .. } => Ok(data),
        };
        RawContent {
            kind,
            // Plain structs of optional strings always encode
            data: data.unwrap_or(Value::Null),
        }
    }
}

impl Serialize for WindowContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawContent::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WindowContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawContent::deserialize(deserializer)?;
        WindowContent::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_tags_decode_to_typed_payloads() {
        let content: WindowContent =
            serde_json::from_value(json!({ "type": "gateIn", "data": { "target": "Notion" } })).unwrap();
        assert_eq!(
            content,
            WindowContent::GateIn(GateInData { target: Some("Notion".to_string()) })
        );

        let content: WindowContent = serde_json::from_value(json!({ "type": "adapters" })).unwrap();
        assert_eq!(content, WindowContent::Adapters);
    }

    #[test]
    fn test_missing_data_uses_empty_payload() {
        let content: WindowContent = serde_json::from_value(json!({ "type": "copilot" })).unwrap();
        assert_eq!(content, WindowContent::Copilot(CopilotData::default()));
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let value = json!({ "type": "spreadsheet", "data": { "rows": 3 } });
        let content: WindowContent = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(content.kind(), "spreadsheet");
        assert_eq!(serde_json::to_value(&content).unwrap(), value);
    }

    #[test]
    fn test_bad_payload_is_rejected() {
        let result: Result<WindowContent, _> =
            serde_json::from_value(json!({ "type": "gateIn", "data": { "target": 42 } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_content_omits_data() {
        let value = serde_json::to_value(&WindowContent::Flow).unwrap();
        assert_eq!(value, json!({ "type": "flow" }));
    }
}
