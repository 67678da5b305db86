pub mod entry;
pub mod snapshot;

pub use crate::types::identifiers::EntryId;
pub use entry::{CorpusEntry, FrontMatter, LastUpdate};
pub use snapshot::{Snapshot, VersionSlice};
