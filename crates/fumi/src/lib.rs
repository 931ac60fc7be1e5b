//! Fumi Domain Library
//!
//! Core domain types and interfaces for the wedding greeting letter.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: GuestRecord, ResolvedGuest
//!   - `value_objects/`: SearchKey, RevealState, LookupFailure
//!   - `services/`: resolver, reveal state machine, reset tap counter
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `GuestDirectory`: where guest records come from
//!   - `KeyValueStore`: client-local persistent storage
//!   - `Clock`: time source for timed transitions
//!
//! - **Application** (`application/`): Use cases wiring ports and domain
//!   - `SessionCache`: persisted resolved guest
//!   - `GreetingSession`: one visitor's lookup-and-reveal flow
//!
//! # Usage
//!
//! ```rust,ignore
//! use fumi::{GreetingSession, RevealEvent, SystemClock};
//!
//! let mut session = GreetingSession::start(directory, store, SystemClock, Default::default());
//! session.handle(RevealEvent::EditName("すずき たろう".into()))?;
//! let actions = session.submit().await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{GreetingSession, SessionCache, CACHE_KEY};
pub use domain::{
    normalize, resolve, DomainError, GuestRecord, LookupFailure, ResetTapCounter, ResolvedGuest,
    RevealAction, RevealEvent, RevealMachine, RevealState, RevealTimings, SearchKey,
    TapOutcome,
};
pub use ports::{
    Clock, GuestDirectory, KeyValueStore, ManualClock, MemoryStore, StaticDirectory, SystemClock,
};
