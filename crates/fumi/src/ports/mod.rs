//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with the outside world (directory source, storage, time).
//!
//! In-memory implementations live next to each trait; network and file
//! backed ones live in the binaries.

mod clock;
mod guest_directory;
mod key_value_store;

// Re-exports
pub use clock::*;
pub use guest_directory::*;
pub use key_value_store::*;
