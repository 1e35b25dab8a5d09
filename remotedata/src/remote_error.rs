use std::borrow::Cow;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// The payload carried by [`RemoteData::Error`](crate::RemoteData::Error).
///
/// Every failure that reaches a `RemoteData` is normalized into one of these
/// variants, so consumers only ever deal with a single error type.
#[derive(Error, Debug, Clone, Default)]
pub enum RemoteError {
    /// A failure whose reason was not an error value, wrapped as a message.
    #[error("{0}")]
    Message(String),

    /// A failure that already was an error value, kept as-is.
    #[error(transparent)]
    Source(Arc<dyn StdError + Send + Sync + 'static>),

    /// No error was supplied.
    #[default]
    #[error("unspecified error")]
    Unspecified,

    /// The operation panicked before it could settle.
    #[error("operation panicked: {0}")]
    Panicked(String),

    /// There was no runtime to drive the operation on.
    #[error("no tokio runtime to run the operation on")]
    NoRuntime,
}

/// An error known only by its message, e.g. after crossing a serialization
/// boundary.
#[derive(Error, Debug)]
#[error("{0}")]
struct Detached(String);

impl RemoteError {
    pub fn message(message: impl Into<String>) -> Self {
        RemoteError::Message(message.into())
    }

    /// Wraps an error value without converting it.
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        RemoteError::Source(Arc::new(error))
    }

    pub fn is_message(&self) -> bool {
        matches!(self, RemoteError::Message(_))
    }

    pub fn is_source(&self) -> bool {
        matches!(self, RemoteError::Source(_))
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, RemoteError::Unspecified)
    }

    pub fn is_panicked(&self) -> bool {
        matches!(self, RemoteError::Panicked(_))
    }

    pub fn is_no_runtime(&self) -> bool {
        matches!(self, RemoteError::NoRuntime)
    }
}

// Source errors compare by identity of the shared error value.
impl PartialEq for RemoteError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RemoteError::Message(a), RemoteError::Message(b)) => a == b,
            (RemoteError::Source(a), RemoteError::Source(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (RemoteError::Unspecified, RemoteError::Unspecified) => true,
            (RemoteError::Panicked(a), RemoteError::Panicked(b)) => a == b,
            (RemoteError::NoRuntime, RemoteError::NoRuntime) => true,
            _ => false,
        }
    }
}

impl Eq for RemoteError {}

/// A reason an asynchronous operation failed with.
///
/// Reasons that already are error values stay error values; anything else
/// is wrapped into [`RemoteError::Message`]. Normalization borrows the reason
/// so the raw value can still be handed to an `on_error` hook afterwards.
///
/// Error types of your own can be made rejections with
/// [`impl_rejection!`](crate::impl_rejection).
pub trait Rejection {
    fn to_remote_error(&self) -> RemoteError;
}

impl Rejection for RemoteError {
    fn to_remote_error(&self) -> RemoteError {
        self.clone()
    }
}

impl Rejection for Arc<dyn StdError + Send + Sync + 'static> {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::Source(Arc::clone(self))
    }
}

impl Rejection for String {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::Message(self.clone())
    }
}

impl Rejection for &'static str {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::Message((*self).to_string())
    }
}

impl Rejection for Cow<'static, str> {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::Message(self.to_string())
    }
}

// io::Error is not Clone, so an equivalent error with the same kind is built.
impl Rejection for std::io::Error {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::from_error(std::io::Error::new(self.kind(), self.to_string()))
    }
}

impl Rejection for Box<dyn StdError + Send + Sync + 'static> {
    fn to_remote_error(&self) -> RemoteError {
        RemoteError::from_error(Detached(self.to_string()))
    }
}

/// Implements [`Rejection`] for `Clone` error types, keeping each reason as
/// a [`RemoteError::Source`].
///
/// ```
/// use remotedata::{impl_rejection, Rejection};
///
/// #[derive(Debug, Clone, thiserror::Error)]
/// #[error("quota exceeded")]
/// struct QuotaError;
///
/// impl_rejection!(QuotaError);
///
/// assert!(QuotaError.to_remote_error().is_source());
/// ```
#[macro_export]
macro_rules! impl_rejection {
    ($($error:ty),+ $(,)?) => {
        $(
            impl $crate::Rejection for $error {
                fn to_remote_error(&self) -> $crate::RemoteError {
                    $crate::RemoteError::from_error(::std::clone::Clone::clone(self))
                }
            }
        )+
    };
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
enum ErrorKind {
    Message,
    Source,
    Unspecified,
    Panicked,
    NoRuntime,
}

/// Wire form of a [`RemoteError`]: its variant next to its message.
/// A `Source` comes back as a source error carrying only the message.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorRepr {
    kind: ErrorKind,
    message: String,
}

#[cfg(feature = "serde")]
impl serde::Serialize for RemoteError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, message) = match self {
            RemoteError::Message(message) => (ErrorKind::Message, message.clone()),
            RemoteError::Source(source) => (ErrorKind::Source, source.to_string()),
            RemoteError::Unspecified => (ErrorKind::Unspecified, String::new()),
            RemoteError::Panicked(message) => (ErrorKind::Panicked, message.clone()),
            RemoteError::NoRuntime => (ErrorKind::NoRuntime, String::new()),
        };
        ErrorRepr { kind, message }.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RemoteError {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ErrorRepr { kind, message } = ErrorRepr::deserialize(deserializer)?;
        Ok(match kind {
            ErrorKind::Message => RemoteError::Message(message),
            ErrorKind::Source => RemoteError::from_error(Detached(message)),
            ErrorKind::Unspecified => RemoteError::Unspecified,
            ErrorKind::Panicked => RemoteError::Panicked(message),
            ErrorKind::NoRuntime => RemoteError::NoRuntime,
        })
    }
}
