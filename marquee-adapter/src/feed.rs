use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the gallery's items are published.
pub const WORK_ITEMS_PATH: &str = "resources/work-items.json";

/// One portfolio entry shown in the work gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub project: String,
    pub client: String,
    pub image: String,
    pub services: String,
    pub stack: String,
}

/// A raw response from a [`FeedSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(String),
    #[error("feed responded with status {0}")]
    Status(u16),
    #[error("feed body is not a list of work items")]
    Decode(#[from] serde_json::Error),
}

/// Fetches a static resource. Implemented by the embedding layer (fetch, file system, ...).
pub trait FeedSource {
    fn fetch(&self, path: &str) -> Result<FeedResponse, FeedError>;
}

impl<F> FeedSource for F
where
    F: Fn(&str) -> Result<FeedResponse, FeedError>,
{
    fn fetch(&self, path: &str) -> Result<FeedResponse, FeedError> {
        self(path)
    }
}

/// Decodes a feed response into work items.
pub fn parse_work_items(response: FeedResponse) -> Result<Vec<WorkItem>, FeedError> {
    if !response.is_success() {
        return Err(FeedError::Status(response.status));
    }
    Ok(serde_json::from_str(&response.body)?)
}

pub fn fetch_work_items(source: &impl FeedSource, path: &str) -> Result<Vec<WorkItem>, FeedError> {
    let response = source.fetch(path)?;
    parse_work_items(response)
}

/// Loads the work items, treating any failure as an empty feed.
///
/// Failures are logged and never retried.
pub fn load_work_items(source: &impl FeedSource, path: &str) -> Vec<WorkItem> {
    match fetch_work_items(source, path) {
        Ok(items) => {
            adebug!(path, count = items.len(), "loaded work items");
            items
        }
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        Err(err) => {
            awarn!(path, error = %err, "error loading work items");
            Vec::new()
        }
    }
}
