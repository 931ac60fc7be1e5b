//! Value Objects
//!
//! Immutable value types used across the domain.

mod lookup_failure;
mod reveal_state;
mod search_key;

pub use lookup_failure::*;
pub use reveal_state::*;
pub use search_key::*;
