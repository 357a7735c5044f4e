use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CANONICAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^UC[A-Za-z0-9_-]{20,}$").expect("valid canonical id pattern"));
static URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("valid url pattern"));
static CHANNEL_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)/channel/(UC[A-Za-z0-9_-]{20,})").expect("valid channel path pattern")
});

/// Lexical classification of a user-supplied channel reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChannelRef {
    CanonicalId(String),
    Url(String),
    Handle(String),
    Unknown(Option<String>),
}

impl ChannelRef {
    pub fn kind(&self) -> &'static str {
        match self {
            ChannelRef::CanonicalId(_) => "canonical_id",
            ChannelRef::Url(_) => "url",
            ChannelRef::Handle(_) => "handle",
            ChannelRef::Unknown(_) => "unknown",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ChannelRef::CanonicalId(v) | ChannelRef::Url(v) | ChannelRef::Handle(v) => Some(v),
            ChannelRef::Unknown(v) => v.as_deref(),
        }
    }
}

/// Rules are tried in order: canonical id, url, handle. First match wins.
pub fn classify(raw: Option<&str>) -> ChannelRef {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return ChannelRef::Unknown(None);
    };
    let s = raw.trim().to_string();
    if CANONICAL_ID.is_match(&s) {
        ChannelRef::CanonicalId(s)
    } else if URL_PREFIX.is_match(&s) {
        ChannelRef::Url(s)
    } else if s.starts_with('@') {
        ChannelRef::Handle(s)
    } else {
        ChannelRef::Unknown(Some(s))
    }
}

/// Pulls the `UC…` id out of a `/channel/UC…` path segment.
pub fn extract_channel_id(url: &str) -> Option<String> {
    CHANNEL_PATH
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
