use super::Error;

/// Error when population or serializer configuration cannot be parsed.
#[derive(Debug)]
pub(super) struct InvalidConfig {
    inner: serde_json::Error,
}

impl std::error::Error for InvalidConfig {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.inner)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_config(err: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfig { inner: err }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfig(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::invalid_config(err)
    }
}
