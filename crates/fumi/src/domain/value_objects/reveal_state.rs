//! RevealState - Where the envelope flow currently is

use serde::{Deserialize, Serialize};

/// State of the reveal flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Waiting for a name
    #[default]
    Idle,
    /// Directory lookup in flight
    Searching,
    /// Envelope animating, either opening or closing
    Opening,
    /// Letter on screen
    Reading,
}

impl RevealState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RevealState::Idle)
    }
}

impl std::fmt::Display for RevealState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealState::Idle => write!(f, "idle"),
            RevealState::Searching => write!(f, "searching"),
            RevealState::Opening => write!(f, "opening"),
            RevealState::Reading => write!(f, "reading"),
        }
    }
}
