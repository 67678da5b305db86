use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusEntry;

/// A curated feed entry returned in the output.
/// Fully self-contained and serializable; no ownership ties back to the
/// corpus snapshot it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedEntry {
    pub title: String,
    pub description: String,
    pub link: String,
    pub category: String,
    /// Raw front-matter date string; empty when the entry carried none.
    /// Never the ranking sentinel.
    pub date: String,
    /// Minutes, always positive (defaulted when the source had none).
    #[serde(rename = "readingTime")]
    pub reading_time: u32,
}

/// Metadata describing the outcome of one curation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationMetadata {
    pub requested: usize,

    pub documents_considered: usize,
    pub documents_eligible: usize,
    pub documents_returned: usize,
    /// Eligible entries whose last-update date was missing or unparsable
    /// and therefore ranked at the epoch sentinel.
    pub dates_defaulted: usize,

    /// Why the feed degraded to empty, when it did. The engine records the
    /// cause here instead of logging; observability belongs to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded: Option<CurationError>,
}

/// The final result of a curation pass. An empty `entries` list is the sole
/// degradation signal; callers substitute their own fallback content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationResult {
    pub entries: Vec<CuratedEntry>,
    pub curation: CurationMetadata,
}

impl CurationResult {
    /// Empty feed with the degradation cause recorded for the caller's
    /// observability sink.
    pub fn degraded(requested: usize, cause: CurationError) -> Self {
        CurationResult {
            entries: Vec::new(),
            curation: CurationMetadata {
                requested,
                documents_considered: 0,
                documents_eligible: 0,
                documents_returned: 0,
                dates_defaulted: 0,
                degraded: Some(cause),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Internal: an eligible entry decorated with its ordering key.
/// Holds a reference to the original entry to avoid cloning prematurely.
#[derive(Debug, Clone)]
pub struct RankedEntry<'a> {
    pub entry: &'a CorpusEntry,

    /// Parsed last-update date; `None` when missing or unparsable, which
    /// ranks at the epoch sentinel.
    pub recency: Option<NaiveDate>,

    /// Position in the filter's output, the tie-break key.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum CurationError {
    /// Snapshot absent or shaped in a way the engine cannot read.
    #[error("snapshot missing or malformed")]
    MissingData,
}
