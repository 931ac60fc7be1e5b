//! LookupFailure - Why a name search came back empty

use serde::{Deserialize, Serialize};

/// User-facing lookup failure shown in the error toast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// No directory entry matched the typed name
    NotFound,
    /// Directory could not be fetched or parsed
    DirectoryUnavailable,
}

impl LookupFailure {
    /// Message displayed to the visitor
    pub fn message(&self) -> &'static str {
        match self {
            LookupFailure::NotFound => {
                "お名前が見つかりません。入力ミスがないかご確認ください。"
            }
            LookupFailure::DirectoryUnavailable => {
                "ゲスト情報を取得できませんでした。時間をおいて再度お試しください。"
            }
        }
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
