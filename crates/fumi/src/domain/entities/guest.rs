//! Guest - Invited guest and the letter addressed to them
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// One entry of the guest directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRecord {
    pub id: String,
    pub kanji_name: String,
    pub kana_name: String,
    pub message: String,
}

/// Guest matched for this visitor; the unit stored in the session cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGuest {
    pub name: String,
    pub message: String,
}

impl GuestRecord {
    pub fn new(
        id: impl Into<String>,
        kanji_name: impl Into<String>,
        kana_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kanji_name: kanji_name.into(),
            kana_name: kana_name.into(),
            message: message.into(),
        }
    }

    /// True if either name equals the given search key
    pub fn matches(&self, key: &str) -> bool {
        self.kanji_name == key || self.kana_name == key
    }
}

impl From<&GuestRecord> for ResolvedGuest {
    fn from(record: &GuestRecord) -> Self {
        Self {
            name: record.kanji_name.clone(),
            message: record.message.clone(),
        }
    }
}
