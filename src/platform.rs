use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: SearchItemId,
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub channel_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    pub channel_title: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChannelList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChannelItem {
    pub snippet: Option<ChannelSnippet>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChannelSnippet {
    pub title: Option<String>,
}

/// Outcome of a call that reached the platform.
///
/// `Rejected` is a soft failure (non-2xx). Faults that never produced a usable
/// response are `TransportError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Accepted(T),
    Rejected { status: u16 },
}

impl<T> Reply<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Reply::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Reply::Accepted(v) => Some(v),
            Reply::Rejected { .. } => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the platform API used by the resolver and the probe.
///
/// The key is passed per call so callers decide which credential each request uses.
pub trait ChannelApi {
    fn ping(&self, channel_id: &str, key: &str) -> Result<Reply<()>, TransportError>;

    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
        key: &str,
    ) -> Result<Reply<SearchList>, TransportError>;

    fn channel_details(
        &self,
        channel_id: &str,
        key: &str,
    ) -> Result<Reply<ChannelList>, TransportError>;
}

pub struct HttpChannelApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpChannelApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<Reply<String>, TransportError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        // reqwest embeds the request URL in its errors; the URL carries the key.
        let request_err = |e: reqwest::Error| TransportError::Request {
            endpoint,
            source: e.without_url(),
        };
        let resp = self
            .client
            .get(url)
            .query(query)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(request_err)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "platform rejected request");
            return Ok(Reply::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(Reply::Accepted(resp.text().map_err(request_err)?))
    }

    /// A `null` body decodes as an empty list.
    fn get_json<T: DeserializeOwned + Default>(
        &self,
        endpoint: &'static str,
        query: &[(&str, &str)],
    ) -> Result<Reply<T>, TransportError> {
        match self.get(endpoint, query)? {
            Reply::Accepted(body) => serde_json::from_str::<Option<T>>(&body)
                .map(|parsed| Reply::Accepted(parsed.unwrap_or_default()))
                .map_err(|source| TransportError::Decode { endpoint, source }),
            Reply::Rejected { status } => Ok(Reply::Rejected { status }),
        }
    }
}

impl ChannelApi for HttpChannelApi {
    fn ping(&self, channel_id: &str, key: &str) -> Result<Reply<()>, TransportError> {
        let reply = self.get("channels", &[("part", "id"), ("id", channel_id), ("key", key)])?;
        Ok(match reply {
            Reply::Accepted(_) => Reply::Accepted(()),
            Reply::Rejected { status } => Reply::Rejected { status },
        })
    }

    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
        key: &str,
    ) -> Result<Reply<SearchList>, TransportError> {
        let max = max_results.to_string();
        self.get_json(
            "search",
            &[
                ("part", "snippet"),
                ("type", "channel"),
                ("maxResults", max.as_str()),
                ("q", query),
                ("key", key),
            ],
        )
    }

    fn channel_details(
        &self,
        channel_id: &str,
        key: &str,
    ) -> Result<Reply<ChannelList>, TransportError> {
        self.get_json(
            "channels",
            &[("part", "snippet"), ("id", channel_id), ("key", key)],
        )
    }
}
