use serde::{Deserialize, Serialize};

use crate::types::identifiers::EntryId;

/// One document record as supplied by the hosting framework.
///
/// Every field is lenient: a record missing fields deserializes with
/// defaults rather than failing, so one odd entry never poisons the
/// snapshot. The engine reads these records and never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusEntry {
    pub id: EntryId,
    pub title: String,
    pub description: Option<String>,
    pub permalink: String,
    #[serde(rename = "frontMatter")]
    pub front_matter: Option<FrontMatter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub description: Option<String>,
    /// Carried through from the source records; not consulted by ranking.
    pub keywords: Vec<String>,
    pub draft: Option<bool>,
    pub reading_time: Option<i64>,
    pub last_update: Option<LastUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastUpdate {
    pub date: Option<String>,
}

impl CorpusEntry {
    /// Top-level description when non-empty, else the front-matter one.
    pub fn usable_description(&self) -> Option<&str> {
        non_empty(self.description.as_deref()).or_else(|| {
            non_empty(
                self.front_matter
                    .as_ref()
                    .and_then(|fm| fm.description.as_deref()),
            )
        })
    }

    pub fn is_draft(&self) -> bool {
        self.front_matter
            .as_ref()
            .and_then(|fm| fm.draft)
            .unwrap_or(false)
    }

    /// Raw last-update date string, unparsed.
    pub fn last_update_date(&self) -> Option<&str> {
        self.front_matter
            .as_ref()?
            .last_update
            .as_ref()?
            .date
            .as_deref()
    }

    pub fn reading_time_minutes(&self) -> Option<i64> {
        self.front_matter.as_ref()?.reading_time
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
