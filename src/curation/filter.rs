use crate::corpus::CorpusEntry;

/// Eligibility pass: one linear scan, order-preserving, no side effects.
pub fn filter_eligible(entries: &[CorpusEntry]) -> Vec<&CorpusEntry> {
    entries.iter().filter(|entry| is_eligible(entry)).collect()
}

/// An entry qualifies when it has a usable description, is not an intro
/// placeholder, and is not a draft.
pub fn is_eligible(entry: &CorpusEntry) -> bool {
    entry.usable_description().is_some()
        && !entry.id.is_intro_placeholder()
        && !entry.is_draft()
}
