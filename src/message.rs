// src/message.rs
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Current UTC time in the `2026-01-31T12:00:00.000Z` shape clients expect.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location as sent by clients. Either coordinate may be missing or null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LocationInput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationInput {
    /// `None` unless both coordinates are present.
    pub fn complete(self) -> Option<Location> {
        Some(Location {
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub role: HistoryRole,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: HistoryRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: HistoryRole::Assistant, content: content.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub location: Option<LocationInput>,
    #[serde(default, alias = "history")]
    pub conversation_history: Option<Vec<HistoryEntry>>,
    pub session_id: Option<String>,
    /// Ask the server to open a fresh session and return its id.
    #[serde(default)]
    pub new_session: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub suggestions: Vec<String>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DebugRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebugResponse {
    pub success: bool,
    pub response: String,
    pub suggestions: Vec<String>,
    pub timestamp: String,
    pub debug: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub flood: RiskLevel,
    pub cyclone: RiskLevel,
    pub earthquake: RiskLevel,
    pub landslide: RiskLevel,
}

#[derive(Debug, Default, Deserialize)]
pub struct RiskQuery {
    pub location: Option<LocationInput>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskResponse {
    pub success: bool,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    pub location: Option<LocationInput>,
    pub disaster_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub safety_level: RiskLevel,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesResponse {
    pub success: bool,
    pub routes: Vec<Route>,
    pub nearest_shelters: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}
