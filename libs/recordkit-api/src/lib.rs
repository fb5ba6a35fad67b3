// Lets the derive's `::recordkit_api::..` paths resolve inside this crate too.
extern crate self as recordkit_api;

pub mod builder;
pub mod error;
pub mod record;

pub use error::{ErrorKind, RecordError};
pub use record::{copy_with, Record, RecordBuilder};
pub use recordkit_api_derive::RecordBuilder;
