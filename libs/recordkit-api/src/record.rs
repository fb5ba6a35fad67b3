use crate::error::RecordError;

/// Immutable record with a generated staging builder.
///
/// Implemented by `#[derive(RecordBuilder)]`. The derive also generates
/// inherent methods with the same names, so callers rarely need this trait
/// in scope; it exists for code that works over any record.
pub trait Record: Sized {
    type Builder: RecordBuilder<Record = Self>;

    /// Type name, as used in error messages and trace events.
    const NAME: &'static str;

    /// Fresh builder with every field unset.
    fn builder() -> Self::Builder;

    /// Builder seeded with every field of `self`.
    fn to_builder(&self) -> Self::Builder;
}

/// Staging builder for a [`Record`].
pub trait RecordBuilder: Default {
    type Record;

    /// Materialize the staged values into a new record.
    fn build(self) -> Result<Self::Record, RecordError>;
}

/// Copy-with-override over any record: seed a builder from `record`, let
/// `stage` adjust it, then build. `record` itself is never touched.
pub fn copy_with<R, F>(record: &R, stage: F) -> Result<R, RecordError>
where
    R: Record,
    F: FnOnce(&mut R::Builder),
{
    let mut staging = record.to_builder();
    stage(&mut staging);
    staging.build()
}
