use super::Error;

/// Error when a relation names a service the application does not expose.
#[derive(Debug)]
pub(super) struct ServiceNotFound {
    service: Box<str>,
}

impl std::error::Error for ServiceNotFound {}

impl core::fmt::Display for ServiceNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "service not found: {}", self.service)
    }
}

impl Error {
    /// Creates a service not found error.
    pub fn service_not_found(service: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ServiceNotFound(ServiceNotFound {
            service: service.into().into(),
        }))
    }

    /// Returns `true` if this error is a service not found error.
    pub fn is_service_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ServiceNotFound(_))
    }
}
