//! Guest Resolver
//!
//! Exact match of a normalized name against kanji or kana names,
//! first hit in directory order wins.

use crate::domain::entities::GuestRecord;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::normalize;

/// Resolve raw input to a directory entry
pub fn resolve<'a>(raw_input: &str, directory: &'a [GuestRecord]) -> Result<&'a GuestRecord, DomainError> {
    let key = normalize(raw_input);
    if key.is_empty() {
        return Err(DomainError::EmptyInput);
    }

    directory
        .iter()
        .find(|record| record.matches(key.as_str()))
        .ok_or_else(|| DomainError::NotFound(key.to_string()))
}
