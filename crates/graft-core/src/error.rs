mod adhoc;
mod fetch_failed;
mod invalid_config;
mod permission_denied;
mod schema_missing;
mod service_not_found;

use adhoc::AdhocError;
use fetch_failed::FetchFailed;
use invalid_config::InvalidConfig;
use permission_denied::PermissionDenied;
use schema_missing::SchemaMissing;
use service_not_found::ServiceNotFound;
use std::sync::Arc;

/// Returns early with an ad hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while populating or depopulating records.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let Some(inner) = err.inner.take() else {
            unreachable!()
        };

        let inner = match Arc::try_unwrap(inner) {
            Ok(mut inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.cause = Some(self);
                inner
            }
            // The consequent is shared; keep it intact and chain a copy of
            // its message instead.
            Err(shared) => ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
                cause: Some(self),
            },
        };

        Error {
            inner: Some(Arc::new(inner)),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut root = self;
        for err in self.chain() {
            root = err;
        }
        root
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::FetchFailed(err) => Some(err),
            ErrorKind::InvalidConfig(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    FetchFailed(FetchFailed),
    InvalidConfig(InvalidConfig),
    PermissionDenied(PermissionDenied),
    SchemaMissing(SchemaMissing),
    ServiceNotFound(ServiceNotFound),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            FetchFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConfig(err) => core::fmt::Display::fmt(err, f),
            PermissionDenied(err) => core::fmt::Display::fmt(err, f),
            SchemaMissing(err) => core::fmt::Display::fmt(err, f),
            ServiceNotFound(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown graft error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
