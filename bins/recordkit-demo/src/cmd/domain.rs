use recordkit_api::RecordBuilder;

/// Record with a builder and seeded builder, but no `with_*` helpers.
#[derive(Debug, Clone, PartialEq, Eq, RecordBuilder)]
pub struct PersonRecord {
    #[record(copy)]
    id: u32,
    #[record(into)]
    name: String,
}

/// Record that also carries copy-with helpers.
#[derive(Debug, Clone, PartialEq, Eq, RecordBuilder)]
#[record(with, new)]
pub struct NewPersonRecord {
    #[record(copy)]
    id: u32,
    #[record(into)]
    name: String,
}

/// Mutable data class: no-args and all-args constructors, setters, builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, RecordBuilder)]
#[record(new, setters)]
pub struct PersonB {
    #[record(copy)]
    id: u32,
    #[record(into)]
    name: String,
}
