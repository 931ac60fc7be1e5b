//! Domain Services
//!
//! - resolver: match a typed name against the directory
//! - reveal: envelope/letter state machine
//! - timeline: deadline-ordered queue of delayed steps
//! - reset: hidden tap counter that wipes the session cache

mod reset;
mod resolver;
mod reveal;
mod timeline;

pub use reset::*;
pub use resolver::*;
pub use reveal::*;
pub use timeline::*;
