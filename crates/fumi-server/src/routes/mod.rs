//! Fumi API Routes
//!
//! - /api/guests - Guest directory (read-only)

pub mod guests;
pub mod swagger;
