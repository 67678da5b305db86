use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};

use crate::corpus::CorpusEntry;
use crate::types::feed::RankedEntry;

/// Fallback ordering date for entries without a usable last-update date.
/// `NaiveDate::default()` is 1970-01-01, the Unix epoch start.
pub fn sentinel_epoch() -> NaiveDate {
    NaiveDate::default()
}

pub trait DateParser {
    /// Parse a raw date string; `None` means "rank like missing".
    fn parse(&self, raw: &str) -> Option<NaiveDate>;
}

/// v0: ISO-8601 calendar dates, plus RFC 3339 datetimes taken by their date
/// part. Anything else ranks at the epoch sentinel.
#[derive(Default)]
pub struct IsoDateParser;

impl DateParser for IsoDateParser {
    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = raw.parse::<NaiveDate>() {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

/// Total reordering by last-update date, most recent first.
///
/// Ties (including both-missing dates) keep the filter's relative order.
/// Stability is guaranteed structurally: each entry carries its input
/// position into the comparator, so determinism never depends on which sort
/// algorithm the standard library happens to use.
pub fn rank_by_recency<'a, P>(eligible: Vec<&'a CorpusEntry>, parser: &P) -> Vec<RankedEntry<'a>>
where
    P: DateParser,
{
    let mut ranked: Vec<RankedEntry<'a>> = eligible
        .into_iter()
        .enumerate()
        .map(|(position, entry)| RankedEntry {
            entry,
            recency: entry
                .last_update_date()
                .and_then(|raw| parser.parse(raw)),
            position,
        })
        .collect();

    // Sort globally by (date desc, input position asc)
    ranked.sort_by(|a, b| {
        let date_cmp = b
            .recency
            .unwrap_or_else(sentinel_epoch)
            .cmp(&a.recency.unwrap_or_else(sentinel_epoch));
        if date_cmp != Ordering::Equal {
            date_cmp
        } else {
            a.position.cmp(&b.position)
        }
    });

    debug_assert!(ranked.windows(2).all(|w| {
        let a = w[0].recency.unwrap_or_else(sentinel_epoch);
        let b = w[1].recency.unwrap_or_else(sentinel_epoch);
        a > b || (a == b && w[0].position < w[1].position)
    }));

    ranked
}
