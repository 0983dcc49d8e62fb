use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        // The reducer cannot leave a half-applied state behind, so a poisoned
        // lock still guards a consistent value.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let guard = self.lock();
        f(&guard)
    }
}
