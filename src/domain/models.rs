use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Best-effort resolution outcome. Any subset of fields may be missing.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChannelInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ChannelInfo {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title.is_none() && self.url.is_none()
    }
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticChecks {
    pub has_env_key: bool,
    pub api_reachable: bool,
    pub channel_found: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticDebug {
    pub resolved_channel: ChannelInfo,
}

/// Envelope returned by `diagnose`.
///
/// `ok` only says a usable key existed for this run (configured or override).
/// It stays `true` when the channel could not be resolved; read `checks` for that.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub ok: bool,
    pub checks: DiagnosticChecks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_masked: Option<String>,
    pub used_override_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DiagnosticDebug>,
}
