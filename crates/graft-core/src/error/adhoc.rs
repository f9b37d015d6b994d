use super::Error;

/// An error built from a formatted message with no further structure.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad hoc error from format arguments. Prefer [`err!`](crate::err).
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(message) => message.to_string(),
            None => args.to_string(),
        };
        Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }
}
