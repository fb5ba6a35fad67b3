//! Runtime helpers called from `#[derive(RecordBuilder)]` expansions.
//!
//! Generated `build()` bodies route every required slot through
//! [`required`] and every finished record through [`finish`], so that
//! construction is observable through `tracing` without each expansion
//! carrying its own logging.

use crate::error::RecordError;

/// Take the value out of a required slot, or fail with `InvalidState`.
pub fn required<T>(
    record: &'static str,
    field: &'static str,
    slot: Option<T>,
) -> Result<T, RecordError> {
    slot.ok_or_else(|| {
        tracing::debug!(record, field, "required field left unset at build");
        RecordError::invalid_state(record, field)
    })
}

/// Hand back a freshly materialized record.
pub fn finish<R>(record: &'static str, value: R) -> R {
    tracing::trace!(record, "record materialized");
    value
}
