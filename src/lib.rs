//! Deterministic article curation engine for documentation sites.
//!
//! `curation-core` turns a corpus snapshot supplied by a hosting framework
//! into a bounded "latest articles" feed: eligibility filtering, stable
//! recency ranking, and presentation formatting, in that order. All
//! operations are deterministic — identical inputs always produce identical
//! outputs — and no failure escapes the engine boundary: a degraded input
//! yields an empty feed, never an error.
//!
//! Callers receiving an empty feed substitute their own fallback content;
//! the engine has no knowledge of it.

pub mod corpus;
pub mod curation;
pub mod types;

pub use corpus::{CorpusEntry, FrontMatter, LastUpdate, Snapshot, VersionSlice};
pub use curation::{
    CurationEngine, DateParser, IsoDateParser, DEFAULT_FEED_LEN, DEFAULT_READING_TIME,
};
pub use types::{CuratedEntry, CurationError, CurationMetadata, CurationResult, EntryId};
