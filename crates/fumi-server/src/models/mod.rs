//! Fumi API Data Models
//!
//! - Guest: directory entry as served over HTTP

mod guest;

pub use guest::*;
