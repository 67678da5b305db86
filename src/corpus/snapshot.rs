use serde::{Deserialize, Serialize};

use crate::corpus::entry::CorpusEntry;
use crate::types::feed::CurationError;

/// The immutable corpus view handed to one engine invocation.
///
/// The hosting framework shapes it as `{ "versions": [ { "docs": [...] } ] }`;
/// the engine reads only `versions[0].docs` and treats every other shape as
/// "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub versions: Vec<VersionSlice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionSlice {
    pub docs: Vec<CorpusEntry>,
}

impl Snapshot {
    pub fn new(docs: Vec<CorpusEntry>) -> Self {
        Snapshot {
            versions: vec![VersionSlice { docs }],
        }
    }

    /// Documents of the current version; empty when the snapshot carries none.
    pub fn docs(&self) -> &[CorpusEntry] {
        self.versions
            .first()
            .map(|v| v.docs.as_slice())
            .unwrap_or(&[])
    }

    /// Lenient boundary for untyped snapshots. Any shape the engine cannot
    /// read counts as missing data, never as an error the caller must handle.
    pub fn from_value(raw: &serde_json::Value) -> Result<Self, CurationError> {
        Snapshot::deserialize(raw).map_err(|_| CurationError::MissingData)
    }
}
