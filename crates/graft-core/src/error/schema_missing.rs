use super::Error;

/// Error when a populate call has neither an explicit schema nor one
/// attached to the request context.
#[derive(Debug)]
pub(super) struct SchemaMissing;

impl std::error::Error for SchemaMissing {}

impl core::fmt::Display for SchemaMissing {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("schema for populate not found")
    }
}

impl Error {
    /// Creates a schema missing error.
    pub fn schema_missing() -> Error {
        Error::from(super::ErrorKind::SchemaMissing(SchemaMissing))
    }

    /// Returns `true` if this error is a schema missing error.
    pub fn is_schema_missing(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaMissing(_))
    }
}
