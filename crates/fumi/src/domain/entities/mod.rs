//! Domain Entities
//!
//! - GuestRecord: one invited guest and their letter
//! - ResolvedGuest: what the visitor sees once matched

mod guest;

pub use guest::*;
