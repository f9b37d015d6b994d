use super::Error;

/// Error when a service's `find` fails.
///
/// Wraps the error reported by the service implementation (HTTP client,
/// database driver, ...) and keeps its source chain.
#[derive(Debug)]
pub(super) struct FetchFailed {
    service: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for FetchFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}.find failed: ", self.service)?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed `find` against `service`.
    ///
    /// Service implementations should use this to convert client-specific
    /// errors into graft errors.
    pub fn fetch_failed(
        service: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::FetchFailed(FetchFailed {
            service: service.into().into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a fetch failure.
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FetchFailed(_))
    }
}
