use crate::RemoteData;
use std::sync::{Arc, Mutex};

mod remote_data_test;

/// A sink that records every state it receives.
#[derive(Clone)]
pub struct Recorder<T> {
    states: Arc<Mutex<Vec<RemoteData<T>>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Recorder {
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sink(&self) -> impl FnMut(RemoteData<T>) + Send + 'static {
        let states = self.states.clone();
        move |data| states.lock().unwrap().push(data)
    }

    pub fn states(&self) -> Vec<RemoteData<T>> {
        self.states.lock().unwrap().clone()
    }
}

/// Collects hook invocations in the order they happen.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn push(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}
