use crate::{Cases, FoldCases, Rejection, RemoteError};

/// The lifecycle of a value obtained from an asynchronous source.
///
/// Exactly one variant is active at a time. A `RemoteData` is never mutated
/// to move between states; the owner of the state slot receives a new value
/// for every transition (`NotAsked -> Loading -> Error | Success`).
///
/// `NotAsked` is the default and acts as the "no data yet" sentinel. Being a
/// unit variant, it can never be confused with a success payload, even when
/// `T` itself is something like `Option<_>` or `()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "state", content = "value", rename_all = "snake_case")
)]
pub enum RemoteData<T> {
    #[default]
    NotAsked,
    Loading,
    Error(RemoteError),
    Success(T),
}

impl<T> RemoteData<T> {
    pub fn not_asked() -> Self {
        RemoteData::NotAsked
    }

    pub fn loading() -> Self {
        RemoteData::Loading
    }

    pub fn success(value: T) -> Self {
        RemoteData::Success(value)
    }

    pub fn error(error: RemoteError) -> Self {
        RemoteData::Error(error)
    }

    pub fn fail_with_message(message: impl Into<String>) -> Self {
        RemoteData::Error(RemoteError::message(message))
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, RemoteData::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RemoteData::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// Returns true once the fetch has terminated, successfully or not.
    pub fn is_complete(&self) -> bool {
        matches!(self, RemoteData::Error(_) | RemoteData::Success(_))
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, RemoteData::NotAsked | RemoteData::Loading)
    }

    pub fn value(self) -> Option<T> {
        match self {
            RemoteData::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_ref(&self) -> Option<&T> {
        match self {
            RemoteData::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_ref(&self) -> Option<&RemoteError> {
        match self {
            RemoteData::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the success payload. The error payload is cloned, which only
    /// bumps a reference count for shared error values.
    pub fn as_ref(&self) -> RemoteData<&T> {
        match self {
            RemoteData::NotAsked => RemoteData::NotAsked,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Error(error) => RemoteData::Error(error.clone()),
            RemoteData::Success(value) => RemoteData::Success(value),
        }
    }

    /// Dispatches to the handler matching the active variant.
    ///
    /// Accepts either an explicit [`Cases`] table or a
    /// [`DefaultCases`](crate::DefaultCases) table.
    pub fn fold<R, C>(self, cases: C) -> R
    where
        C: FoldCases<T, R>,
    {
        match self {
            RemoteData::NotAsked => cases.not_asked(),
            RemoteData::Loading => cases.loading(),
            RemoteData::Error(error) => cases.error(error),
            RemoteData::Success(value) => cases.success(value),
        }
    }

    /// Transforms a success payload, passing every other variant through.
    ///
    /// `f` runs at most once, and only for `Success`. A panic in `f` is not
    /// turned into an `Error` variant.
    pub fn derive<U, F>(self, f: F) -> RemoteData<U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Cases {
            not_asked: || RemoteData::NotAsked,
            loading: || RemoteData::Loading,
            error: RemoteData::Error,
            success: |value: T| RemoteData::Success(f(value)),
        })
    }

    /// Calls `f` with the success payload and returns its raw result.
    ///
    /// Returns `None` without calling `f` for every other variant.
    pub fn apply<R, F>(self, f: F) -> Option<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            RemoteData::Success(value) => Some(f(value)),
            _ => None,
        }
    }

    /// Extracts the success payload, or `None`.
    ///
    /// Meant for code paths that already know the state is `Success`. Prefer
    /// [`fold`](Self::fold) when every state has to be handled.
    pub fn must(self) -> Option<T> {
        self.value()
    }
}

impl<T, E> From<Result<T, E>> for RemoteData<T>
where
    E: Rejection,
{
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => RemoteData::Success(value),
            Err(reason) => RemoteData::Error(reason.to_remote_error()),
        }
    }
}

impl<T> From<RemoteData<T>> for Option<T> {
    fn from(value: RemoteData<T>) -> Self {
        value.value()
    }
}

/// Lifts a plain value into a `Success`.
pub fn always<T>(value: T) -> RemoteData<T> {
    RemoteData::Success(value)
}

/// Lifts an error into an `Error`. Without one, [`RemoteError::Unspecified`]
/// is used.
pub fn never<T>(error: Option<RemoteError>) -> RemoteData<T> {
    RemoteData::Error(error.unwrap_or_default())
}

/// See [`RemoteData::must`].
pub fn must<T>(data: RemoteData<T>) -> Option<T> {
    data.must()
}

/// See [`RemoteData::derive`].
pub fn derive<T, U, F>(data: RemoteData<T>, f: F) -> RemoteData<U>
where
    F: FnOnce(T) -> U,
{
    data.derive(f)
}

/// See [`RemoteData::apply`].
pub fn apply<T, R, F>(data: RemoteData<T>, f: F) -> Option<R>
where
    F: FnOnce(T) -> R,
{
    data.apply(f)
}
