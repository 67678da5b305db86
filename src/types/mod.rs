pub mod feed;
pub mod identifiers;

pub use feed::{CuratedEntry, CurationError, CurationMetadata, CurationResult, RankedEntry};
pub use identifiers::EntryId;
