use crate::{RemoteData, RemoteError};

/// A table of handlers, one per [`RemoteData`] variant.
///
/// Every method consumes the table, so a single `fold` can only ever run one
/// handler.
pub trait FoldCases<T, R> {
    fn not_asked(self) -> R;
    fn loading(self) -> R;
    fn error(self, error: RemoteError) -> R;
    fn success(self, value: T) -> R;
}

/// The explicit table: all four handlers are required fields.
///
/// ```
/// use remotedata::{fold, Cases, RemoteData, RemoteError};
///
/// let label = fold(
///     RemoteData::<u32>::NotAsked,
///     Cases {
///         not_asked: || "N",
///         loading: || "L",
///         error: |_: RemoteError| "E",
///         success: |_: u32| "S",
///     },
/// );
/// assert_eq!(label, "N");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cases<N, L, E, S> {
    pub not_asked: N,
    pub loading: L,
    pub error: E,
    pub success: S,
}

impl<T, R, N, L, E, S> FoldCases<T, R> for Cases<N, L, E, S>
where
    N: FnOnce() -> R,
    L: FnOnce() -> R,
    E: FnOnce(RemoteError) -> R,
    S: FnOnce(T) -> R,
{
    fn not_asked(self) -> R {
        (self.not_asked)()
    }

    fn loading(self) -> R {
        (self.loading)()
    }

    fn error(self, error: RemoteError) -> R {
        (self.error)(error)
    }

    fn success(self, value: T) -> R {
        (self.success)(value)
    }
}

/// The default table: a mandatory fallback plus optional overrides.
///
/// For the active variant, its override runs if one was given, otherwise the
/// fallback does.
///
/// ```
/// use remotedata::{always, fold, DefaultCases};
///
/// let value = fold(always(42), DefaultCases::new(|| 0).success(|v| v));
/// assert_eq!(value, 42);
/// ```
pub struct DefaultCases<'a, T, R> {
    default: Box<dyn FnOnce() -> R + 'a>,
    not_asked: Option<Box<dyn FnOnce() -> R + 'a>>,
    loading: Option<Box<dyn FnOnce() -> R + 'a>>,
    error: Option<Box<dyn FnOnce(RemoteError) -> R + 'a>>,
    success: Option<Box<dyn FnOnce(T) -> R + 'a>>,
}

impl<'a, T, R> DefaultCases<'a, T, R> {
    pub fn new<D>(default: D) -> Self
    where
        D: FnOnce() -> R + 'a,
    {
        DefaultCases {
            default: Box::new(default),
            not_asked: None,
            loading: None,
            error: None,
            success: None,
        }
    }

    pub fn not_asked<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.not_asked = Some(Box::new(handler));
        self
    }

    pub fn loading<F>(mut self, handler: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        self.loading = Some(Box::new(handler));
        self
    }

    pub fn error<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(RemoteError) -> R + 'a,
    {
        self.error = Some(Box::new(handler));
        self
    }

    pub fn success<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(T) -> R + 'a,
    {
        self.success = Some(Box::new(handler));
        self
    }
}

impl<T, R> FoldCases<T, R> for DefaultCases<'_, T, R> {
    fn not_asked(self) -> R {
        match self.not_asked {
            Some(handler) => handler(),
            None => (self.default)(),
        }
    }

    fn loading(self) -> R {
        match self.loading {
            Some(handler) => handler(),
            None => (self.default)(),
        }
    }

    fn error(self, error: RemoteError) -> R {
        match self.error {
            Some(handler) => handler(error),
            None => (self.default)(),
        }
    }

    fn success(self, value: T) -> R {
        match self.success {
            Some(handler) => handler(value),
            None => (self.default)(),
        }
    }
}

/// Runs exactly the handler in `cases` that matches the variant of `data`.
///
/// See [`RemoteData::fold`].
pub fn fold<T, R, C>(data: RemoteData<T>, cases: C) -> R
where
    C: FoldCases<T, R>,
{
    data.fold(cases)
}
