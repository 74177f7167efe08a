use std::cell::{Cell, RefCell};

use super::{LogStore, RecordStore};
use crate::errors::{AppError, AppResult};

/// Volatile store, handy for tests and dry runs.
/// `fail_saves` simulates a backend whose writes are rejected.
#[derive(Default)]
pub struct MemoryStore {
    inner: RefCell<LogStore>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new(initial: LogStore) -> Self {
        Self {
            inner: RefCell::new(initial),
            ..Default::default()
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    pub fn snapshot(&self) -> LogStore {
        self.inner.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl RecordStore for MemoryStore {
    fn try_load(&self) -> AppResult<LogStore> {
        Ok(self.inner.borrow().clone())
    }

    fn try_save(&self, store: &LogStore) -> AppResult<()> {
        if self.fail_saves.get() {
            return Err(AppError::Other("memory store is read-only".into()));
        }
        *self.inner.borrow_mut() = store.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
