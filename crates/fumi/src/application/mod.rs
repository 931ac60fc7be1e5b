//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the directory, the local store and the reveal state machine.

mod greeting_session;
mod session_cache;

pub use greeting_session::GreetingSession;
pub use session_cache::{SessionCache, CACHE_KEY};
