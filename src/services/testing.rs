//! In-memory `ChannelApi` for unit tests. Records every call with the key it used.

use crate::platform::{
    ChannelApi, ChannelItem, ChannelList, ChannelSnippet, Reply, SearchItem, SearchItemId,
    SearchList, SearchSnippet, TransportError,
};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ping { channel_id: String, key: String },
    Search { query: String, max_results: u32, key: String },
    Details { channel_id: String, key: String },
}

#[derive(Clone)]
pub enum Canned<T> {
    Reply(Reply<T>),
    Fault,
}

pub struct FakeApi {
    pub ping: Canned<()>,
    pub search: Canned<SearchList>,
    pub details: Canned<ChannelList>,
    calls: RefCell<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            ping: Canned::Reply(Reply::Accepted(())),
            search: Canned::Reply(Reply::Accepted(SearchList::default())),
            details: Canned::Reply(Reply::Accepted(ChannelList::default())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn with_search(mut self, search: Canned<SearchList>) -> Self {
        self.search = search;
        self
    }

    pub fn with_details(mut self, details: Canned<ChannelList>) -> Self {
        self.details = details;
        self
    }

    pub fn with_ping(mut self, ping: Canned<()>) -> Self {
        self.ping = ping;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search { .. }))
            .count()
    }

    pub fn detail_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Details { .. }))
            .count()
    }

    pub fn keys_used(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| match c {
                Call::Ping { key, .. } | Call::Search { key, .. } | Call::Details { key, .. } => {
                    key
                }
            })
            .collect()
    }

    fn answer<T: Clone>(canned: &Canned<T>) -> Result<Reply<T>, TransportError> {
        match canned {
            Canned::Reply(r) => Ok(r.clone()),
            Canned::Fault => Err(decode_fault()),
        }
    }
}

pub fn decode_fault() -> TransportError {
    let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    TransportError::Decode {
        endpoint: "fake",
        source,
    }
}

pub fn search_hit(channel_id: &str, title: Option<&str>) -> Canned<SearchList> {
    Canned::Reply(Reply::Accepted(SearchList {
        items: vec![SearchItem {
            id: SearchItemId {
                channel_id: Some(channel_id.to_string()),
            },
            snippet: Some(SearchSnippet {
                channel_title: title.map(str::to_string),
            }),
        }],
    }))
}

pub fn details_hit(title: &str) -> Canned<ChannelList> {
    Canned::Reply(Reply::Accepted(ChannelList {
        items: vec![ChannelItem {
            snippet: Some(ChannelSnippet {
                title: Some(title.to_string()),
            }),
        }],
    }))
}

pub fn rejected<T>(status: u16) -> Canned<T> {
    Canned::Reply(Reply::Rejected { status })
}

impl ChannelApi for FakeApi {
    fn ping(&self, channel_id: &str, key: &str) -> Result<Reply<()>, TransportError> {
        self.calls.borrow_mut().push(Call::Ping {
            channel_id: channel_id.to_string(),
            key: key.to_string(),
        });
        Self::answer(&self.ping)
    }

    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
        key: &str,
    ) -> Result<Reply<SearchList>, TransportError> {
        self.calls.borrow_mut().push(Call::Search {
            query: query.to_string(),
            max_results,
            key: key.to_string(),
        });
        Self::answer(&self.search)
    }

    fn channel_details(
        &self,
        channel_id: &str,
        key: &str,
    ) -> Result<Reply<ChannelList>, TransportError> {
        self.calls.borrow_mut().push(Call::Details {
            channel_id: channel_id.to_string(),
            key: key.to_string(),
        });
        Self::answer(&self.details)
    }
}
