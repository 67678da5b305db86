use serde::{Deserialize, Serialize};

/// Opaque hierarchical entry id; segments separated by `/`, first segment
/// is the taxonomy group.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        EntryId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `/`-delimited segment; the whole id when there is no separator.
    pub fn taxonomy_group(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }

    /// Ids ending in the literal segment `intro` denote section placeholders
    /// rather than articles. Tested both as a trailing `/intro` path
    /// component and as a bare trailing substring.
    pub fn is_intro_placeholder(&self) -> bool {
        self.0.ends_with("/intro") || self.0.ends_with("intro")
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        EntryId(raw.to_string())
    }
}

impl From<String> for EntryId {
    fn from(raw: String) -> Self {
        EntryId(raw)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
