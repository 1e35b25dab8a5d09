use crate::{Rejection, RemoteData, RemoteError};
use pin_project::pin_project;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tracing::{debug, warn};

type Hook = Box<dyn FnOnce() + Send>;
type ValueHook<V> = Box<dyn FnOnce(V) + Send>;

/// Receives the lifecycle events of an adapted operation.
///
/// Implemented by [`PromiseOptions`] and [`LocalPromiseOptions`].
pub trait LifecycleHooks<T, E> {
    /// Runs right after the sink received `Loading`.
    fn loading(&mut self);

    /// Whether [`success`](Self::success) wants the value. When it does, the
    /// sink receives a clone.
    fn observes_success(&self) -> bool;

    /// Runs right after the sink received `Success`.
    fn success(&mut self, value: T);

    /// Runs right after the sink received `Error`, with the raw reason.
    fn error(&mut self, reason: E);
}

/// Optional lifecycle hooks for [`promise`] and [`track`].
///
/// Each hook fires at most once, right after the sink has received the state
/// it belongs to.
pub struct PromiseOptions<T, E> {
    on_loading: Option<Hook>,
    on_error: Option<ValueHook<E>>,
    on_success: Option<ValueHook<T>>,
}

impl<T, E> PromiseOptions<T, E> {
    pub fn new() -> Self {
        PromiseOptions {
            on_loading: None,
            on_error: None,
            on_success: None,
        }
    }

    /// Called once, synchronously, after the `Loading` state was delivered.
    pub fn on_loading<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_loading = Some(Box::new(hook));
        self
    }

    /// Called once on rejection with the raw reason, before normalization.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(E) + Send + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Called once on resolution with the resolved value.
    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.on_success = Some(Box::new(hook));
        self
    }
}

impl<T, E> Default for PromiseOptions<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> LifecycleHooks<T, E> for PromiseOptions<T, E> {
    fn loading(&mut self) {
        if let Some(hook) = self.on_loading.take() {
            hook();
        }
    }

    fn observes_success(&self) -> bool {
        self.on_success.is_some()
    }

    fn success(&mut self, value: T) {
        if let Some(hook) = self.on_success.take() {
            hook(value);
        }
    }

    fn error(&mut self, reason: E) {
        if let Some(hook) = self.on_error.take() {
            hook(reason);
        }
    }
}

/// Hooks for [`track`] that may borrow or hold thread-local state, such as
/// `Rc<RefCell<_>>`. They cannot be used with [`promise`].
pub struct LocalPromiseOptions<'a, T, E> {
    on_loading: Option<Box<dyn FnOnce() + 'a>>,
    on_error: Option<Box<dyn FnOnce(E) + 'a>>,
    on_success: Option<Box<dyn FnOnce(T) + 'a>>,
}

impl<'a, T, E> LocalPromiseOptions<'a, T, E> {
    pub fn new() -> Self {
        LocalPromiseOptions {
            on_loading: None,
            on_error: None,
            on_success: None,
        }
    }

    pub fn on_loading<F>(mut self, hook: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        self.on_loading = Some(Box::new(hook));
        self
    }

    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(E) + 'a,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(T) + 'a,
    {
        self.on_success = Some(Box::new(hook));
        self
    }
}

impl<T, E> Default for LocalPromiseOptions<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> LifecycleHooks<T, E> for LocalPromiseOptions<'_, T, E> {
    fn loading(&mut self) {
        if let Some(hook) = self.on_loading.take() {
            hook();
        }
    }

    fn observes_success(&self) -> bool {
        self.on_success.is_some()
    }

    fn success(&mut self, value: T) {
        if let Some(hook) = self.on_success.take() {
            hook(value);
        }
    }

    fn error(&mut self, reason: E) {
        if let Some(hook) = self.on_error.take() {
            hook(reason);
        }
    }
}

/// The terminal half of an adapted operation, returned by [`track`].
///
/// Resolves once the wrapped operation settled and the sink received the
/// terminal state. Polling it again afterwards is a no-op.
#[pin_project(project = SettleProj)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Settle<F, K, H> {
    #[pin]
    operation: F,
    sink: K,
    hooks: H,
    settled: bool,
}

impl<F, K, H, T, E> Future for Settle<F, K, H>
where
    F: Future<Output = Result<T, E>>,
    K: FnMut(RemoteData<T>),
    H: LifecycleHooks<T, E>,
    T: Clone,
    E: Rejection,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let SettleProj {
            operation,
            sink,
            hooks,
            settled,
        } = self.project();

        if *settled {
            return Poll::Ready(());
        }

        let polled = panic::catch_unwind(AssertUnwindSafe(move || operation.poll(cx)));
        let outcome = match polled {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(outcome)) => outcome,
            Err(payload) => {
                *settled = true;
                let message = panic_message(&*payload);
                warn!("remote operation panicked: {message}");
                sink(RemoteData::Error(RemoteError::Panicked(message)));
                return Poll::Ready(());
            }
        };
        *settled = true;

        match outcome {
            Ok(value) => {
                debug!("remote operation settled: success");
                if hooks.observes_success() {
                    sink(RemoteData::Success(value.clone()));
                    hooks.success(value);
                } else {
                    sink(RemoteData::Success(value));
                }
            }
            Err(reason) => {
                let error = reason.to_remote_error();
                debug!("remote operation settled: error: {error}");
                sink(RemoteData::Error(error));
                hooks.error(reason);
            }
        }
        Poll::Ready(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Adapts `operation` without spawning it.
///
/// Before returning, the sink receives `Loading` and the loading hook runs.
/// The returned [`Settle`] future delivers the terminal state when driven to
/// completion on any executor. Neither the sink nor the hooks need to be
/// `Send`; see [`LocalPromiseOptions`].
pub fn track<T, E, F, K, H>(
    operation: F,
    mut sink: K,
    mut hooks: H,
) -> (RemoteData<T>, Settle<F, K, H>)
where
    F: Future<Output = Result<T, E>>,
    K: FnMut(RemoteData<T>),
    H: LifecycleHooks<T, E>,
    T: Clone,
    E: Rejection,
{
    debug!("remote operation loading");
    sink(RemoteData::Loading);
    hooks.loading();

    let settle = Settle {
        operation,
        sink,
        hooks,
        settled: false,
    };
    (RemoteData::Loading, settle)
}

/// Bridges `operation` into a sequence of [`RemoteData`] states.
///
/// The sink receives `Loading` before this returns, then exactly one of
/// `Success` or `Error` once the operation settles on the tokio runtime.
/// Failures never escape: a rejection reason is normalized through
/// [`Rejection`], and a panic becomes [`RemoteError::Panicked`].
///
/// Called outside of a tokio runtime, the operation is dropped unpolled: the
/// sink receives a single [`RemoteError::NoRuntime`] error, which is also
/// returned, and no hook runs.
pub fn promise<T, E, F, K, H>(operation: F, mut sink: K, hooks: H) -> RemoteData<T>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    K: FnMut(RemoteData<T>) + Send + 'static,
    H: LifecycleHooks<T, E> + Send + 'static,
    T: Clone + Send + 'static,
    E: Rejection + Send + 'static,
{
    let handle = match Handle::try_current() {
        Ok(handle) => handle,
        Err(error) => {
            warn!("remote operation not started: {error}");
            let failed = RemoteData::Error(RemoteError::NoRuntime);
            sink(failed.clone());
            return failed;
        }
    };

    let (loading, settle) = track(operation, sink, hooks);
    handle.spawn(settle);
    loading
}
