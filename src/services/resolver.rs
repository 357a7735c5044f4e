use crate::domain::constants::{channel_url, SEARCH_MAX_RESULTS};
use crate::domain::models::ChannelInfo;
use crate::platform::{ChannelApi, TransportError};
use crate::services::reference::{classify, extract_channel_id, ChannelRef};

/// How far resolution has progressed. Each step only runs from the stage it can improve.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Unresolved,
    IdKnown { id: String, url: Option<String> },
    TitleKnown { id: String, title: String, url: String },
}

impl Stage {
    fn into_info(self) -> ChannelInfo {
        match self {
            Stage::Unresolved => ChannelInfo::default(),
            Stage::IdKnown { id, url } => ChannelInfo {
                id: Some(id),
                title: None,
                url,
            },
            Stage::TitleKnown { id, title, url } => ChannelInfo {
                id: Some(id),
                title: Some(title),
                url: Some(url),
            },
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

fn extract(reference: &ChannelRef) -> Stage {
    let id = match reference {
        ChannelRef::CanonicalId(id) => Some(id.clone()),
        ChannelRef::Url(url) => extract_channel_id(url),
        ChannelRef::Handle(_) | ChannelRef::Unknown(_) => None,
    };
    match id {
        Some(id) => Stage::IdKnown { id, url: None },
        None => Stage::Unresolved,
    }
}

fn search(api: &dyn ChannelApi, raw: &str, key: &str) -> Result<Stage, TransportError> {
    let Some(list) = api.search_channels(raw, SEARCH_MAX_RESULTS, key)?.accepted() else {
        tracing::debug!("channel search rejected");
        return Ok(Stage::Unresolved);
    };
    let Some(first) = list.items.into_iter().next() else {
        tracing::debug!("channel search returned no items");
        return Ok(Stage::Unresolved);
    };
    let (Some(snippet), Some(id)) = (first.snippet, first.id.channel_id) else {
        return Ok(Stage::Unresolved);
    };
    let url = channel_url(&id);
    Ok(match non_empty(snippet.channel_title) {
        Some(title) => Stage::TitleKnown { id, title, url },
        None => Stage::IdKnown { id, url: Some(url) },
    })
}

fn backfill(
    api: &dyn ChannelApi,
    id: String,
    url: Option<String>,
    key: &str,
) -> Result<Stage, TransportError> {
    let Some(list) = api.channel_details(&id, key)?.accepted() else {
        tracing::debug!(%id, "channel detail lookup rejected");
        return Ok(Stage::IdKnown { id, url });
    };
    // An empty title is reported as absent rather than as "".
    let title = non_empty(
        list.items
            .into_iter()
            .next()
            .and_then(|item| item.snippet)
            .and_then(|s| s.title),
    );
    let url = channel_url(&id);
    Ok(match title {
        Some(title) => Stage::TitleKnown { id, title, url },
        None => Stage::IdKnown { id, url: Some(url) },
    })
}

/// Turns a raw id, url, handle or free text into a channel id plus display metadata.
///
/// Rejected lookups leave fields empty. Only transport faults are returned as errors.
pub fn resolve(api: &dyn ChannelApi, raw: &str, key: &str) -> Result<ChannelInfo, TransportError> {
    let reference = classify(Some(raw));
    tracing::debug!(kind = reference.kind(), "classified channel reference");

    let mut stage = extract(&reference);
    if stage == Stage::Unresolved {
        stage = search(api, raw, key)?;
    }
    if let Stage::IdKnown { id, url } = stage {
        stage = backfill(api, id, url, key)?;
    }

    let info = stage.into_info();
    tracing::debug!(found = info.id.is_some(), "channel resolution finished");
    Ok(info)
}
