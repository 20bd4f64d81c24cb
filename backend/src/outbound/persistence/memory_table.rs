//! Mutex-guarded record table shared by the in-memory repositories.
//!
//! Identifiers start at 1, increase monotonically and are never reused, even
//! after deletes. Every operation holds the lock for exactly one record
//! mutation, which gives the per-record atomicity the repository ports
//! promise.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

/// Raised when a previous holder of the table lock panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record table lock poisoned")]
pub struct TablePoisoned;

struct TableState<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

/// Ordered in-memory table keyed by store-assigned identifiers.
pub(crate) struct MemoryTable<T> {
    state: Mutex<TableState<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Clone> MemoryTable<T> {
    fn lock(&self) -> Result<MutexGuard<'_, TableState<T>>, TablePoisoned> {
        self.state.lock().map_err(|_| TablePoisoned)
    }

    /// Snapshot every row in ascending identifier order.
    pub(crate) fn all(&self) -> Result<Vec<T>, TablePoisoned> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    /// Reserve the next identifier and store the row `build` produces for it.
    pub(crate) fn insert_with(&self, build: impl FnOnce(i64) -> T) -> Result<T, TablePoisoned> {
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id += 1;
        let row = build(id);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    pub(crate) fn get(&self, id: i64) -> Result<Option<T>, TablePoisoned> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    /// Mutate a row in place and return the new value, or `None` if absent.
    pub(crate) fn modify(
        &self,
        id: i64,
        change: impl FnOnce(&mut T),
    ) -> Result<Option<T>, TablePoisoned> {
        let mut state = self.lock()?;
        Ok(state.rows.get_mut(&id).map(|row| {
            change(row);
            row.clone()
        }))
    }

    pub(crate) fn remove(&self, id: i64) -> Result<bool, TablePoisoned> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}
