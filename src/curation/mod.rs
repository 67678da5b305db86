pub mod filter;
pub mod formatting;
pub mod ranking;

pub use filter::{filter_eligible, is_eligible};
pub use formatting::{derive_category, format_entries, DEFAULT_READING_TIME};
pub use ranking::{rank_by_recency, sentinel_epoch, DateParser, IsoDateParser};

use crate::corpus::Snapshot;
use crate::types::feed::{CurationMetadata, CurationResult};

/// Feed length used when the caller does not say otherwise.
pub const DEFAULT_FEED_LEN: usize = 3;

/// The curation pipeline: eligibility filter, stable recency ranking,
/// presentation formatting, in strict sequence. Holds no state across
/// invocations; every call is a pure function of its snapshot and count.
pub struct CurationEngine<P> {
    date_parser: P,
    default_reading_time: u32,
}

impl Default for CurationEngine<IsoDateParser> {
    fn default() -> Self {
        Self {
            date_parser: IsoDateParser,
            default_reading_time: DEFAULT_READING_TIME,
        }
    }
}

impl<P> CurationEngine<P>
where
    P: DateParser,
{
    pub fn new(date_parser: P) -> Self {
        Self {
            date_parser,
            default_reading_time: DEFAULT_READING_TIME,
        }
    }

    pub fn with_reading_time_default(date_parser: P, minutes: u32) -> Self {
        Self {
            date_parser,
            default_reading_time: minutes,
        }
    }

    /// Run the full pipeline on a typed snapshot. Total: never fails.
    pub fn curate(&self, snapshot: &Snapshot, requested: usize) -> CurationResult {
        let docs = snapshot.docs();

        // 1. Eligibility Phase
        let eligible = filter_eligible(docs);
        let documents_eligible = eligible.len();

        // 2. Ordering Phase
        let ranked = rank_by_recency(eligible, &self.date_parser);
        let dates_defaulted = ranked.iter().filter(|r| r.recency.is_none()).count();

        // 3. Formatting Phase
        let entries = format_entries(&ranked, requested, self.default_reading_time);

        let curation = CurationMetadata {
            requested,
            documents_considered: docs.len(),
            documents_eligible,
            documents_returned: entries.len(),
            dates_defaulted,
            degraded: None,
        };

        CurationResult { entries, curation }
    }

    /// `curate` with the default feed length.
    pub fn latest(&self, snapshot: &Snapshot) -> CurationResult {
        self.curate(snapshot, DEFAULT_FEED_LEN)
    }

    /// Lenient boundary for untyped snapshots. Negative counts clamp to
    /// zero; an unreadable snapshot degrades to an empty feed with the
    /// cause recorded in the metadata. Nothing above this boundary ever
    /// observes an error.
    pub fn curate_raw(&self, raw: &serde_json::Value, requested: i64) -> CurationResult {
        let requested = usize::try_from(requested).unwrap_or(0);
        match Snapshot::from_value(raw) {
            Ok(snapshot) => self.curate(&snapshot, requested),
            Err(cause) => CurationResult::degraded(requested, cause),
        }
    }
}
