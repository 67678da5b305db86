use crate::types::feed::{CuratedEntry, RankedEntry};

/// Reading time, in minutes, assigned when front matter carries none.
pub const DEFAULT_READING_TIME: u32 = 5;

/// Truncate to the first `count` ranked entries and reshape each into the
/// output contract. No entry is dropped beyond the truncation; we own the
/// output fields because the feed outlives the snapshot it came from.
pub fn format_entries(
    ranked: &[RankedEntry<'_>],
    count: usize,
    default_reading_time: u32,
) -> Vec<CuratedEntry> {
    ranked
        .iter()
        .take(count)
        .map(|r| {
            let entry = r.entry;
            CuratedEntry {
                title: entry.title.clone(),
                // The filter already guarantees a description; empty here is
                // defensive only
                description: entry.usable_description().unwrap_or("").to_string(),
                link: entry.permalink.clone(),
                category: derive_category(entry.id.taxonomy_group()),
                // Raw string passthrough, never the ranking sentinel
                date: entry.last_update_date().unwrap_or("").to_string(),
                reading_time: entry
                    .reading_time_minutes()
                    .and_then(|m| u32::try_from(m).ok())
                    .filter(|m| *m > 0)
                    .unwrap_or(default_reading_time),
            }
        })
        .collect()
}

/// `distributed-systems` -> `Distributed Systems`. Only the first character
/// of each `-`-separated word is forced uppercase; the rest keep their
/// original casing.
pub fn derive_category(group: &str) -> String {
    group
        .split('-')
        .map(uppercase_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
