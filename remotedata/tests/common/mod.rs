use futures_signals::signal::{Mutable, SignalExt};
use remotedata::RemoteData;

/// An external state slot, standing in for whatever the host application
/// keeps its state in.
#[derive(Clone)]
pub struct Slot<T> {
    state: Mutable<RemoteData<T>>,
}

impl<T: Clone + Send + Sync + 'static> Slot<T> {
    pub fn new() -> Self {
        Slot {
            state: Mutable::new(RemoteData::NotAsked),
        }
    }

    pub fn get(&self) -> RemoteData<T> {
        self.state.get_cloned()
    }

    pub fn sink(&self) -> impl FnMut(RemoteData<T>) + Send + 'static {
        let state = self.state.clone();
        move |data| state.set(data)
    }

    /// Collects the observed states until one of them is complete.
    pub async fn until_complete(&self) -> Vec<RemoteData<T>> {
        let mut observed = Vec::new();
        self.state
            .signal_cloned()
            .stop_if(|data| data.is_complete())
            .for_each(|data| {
                observed.push(data);
                async {}
            })
            .await;
        observed
    }
}
