//! Payloads carried through item args from one view to the other.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::model::Timestamp;

/// Where the hourly view should start listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HourlyAnchor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
}

impl HourlyAnchor {
    pub fn at(start: Timestamp) -> Self {
        Self { start: Some(start) }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Empty input is the absent anchor.
    pub fn decode(data: &str) -> Result<Self, serde_json::Error> {
        decode_or_default(data)
    }

    /// Decode a payload handed back by the launcher. Anything unreadable is
    /// logged and treated as no anchor at all.
    pub fn from_payload(data: Option<&str>) -> Self {
        lenient(data, "hourly anchor")
    }
}

/// Payload of the daily view's `do` mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_open: Option<String>,
}

impl DailyAction {
    pub fn open(url: impl Into<String>) -> Self {
        Self {
            to_open: Some(url.into()),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(data: &str) -> Result<Self, serde_json::Error> {
        decode_or_default(data)
    }

    pub fn from_payload(data: Option<&str>) -> Self {
        lenient(data, "daily action")
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(data: &str) -> Result<T, serde_json::Error> {
    if data.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(data)
}

fn lenient<T: DeserializeOwned + Default>(data: Option<&str>, what: &str) -> T {
    let Some(data) = data else {
        return T::default();
    };

    decode_or_default(data).unwrap_or_else(|err| {
        tracing::warn!(payload = data, error = %err, "ignoring malformed {what}");
        T::default()
    })
}
