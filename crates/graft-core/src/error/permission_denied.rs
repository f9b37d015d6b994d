use super::Error;

/// Error when the root of a population schema requires a permission the
/// caller was not granted.
///
/// Raised before any service is queried, so the payload is left untouched.
/// The required marker is not part of the error.
#[derive(Debug)]
pub(super) struct PermissionDenied {}

impl std::error::Error for PermissionDenied {}

impl core::fmt::Display for PermissionDenied {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("permissions do not allow this population")
    }
}

impl Error {
    /// Creates a permission denied error.
    pub fn permission_denied() -> Error {
        Error::from(super::ErrorKind::PermissionDenied(PermissionDenied {}))
    }

    /// Returns `true` if this error is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PermissionDenied(_))
    }
}
