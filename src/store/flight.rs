use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::catalog::CatalogState;
use super::error::{Action, StoreError};

/// Read the catalog, recovering the data if a writer panicked.
pub(crate) fn read(lock: &RwLock<CatalogState>) -> RwLockReadGuard<'_, CatalogState> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write the catalog, recovering the data if a writer panicked.
pub(crate) fn write(lock: &RwLock<CatalogState>) -> RwLockWriteGuard<'_, CatalogState> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// What: Scoped ownership of one action category's in-flight flag.
///
/// Details:
/// - Acquiring fails with `StoreError::Busy` when the flag is already set.
/// - Dropping clears the flag, so it is released on success, error and panic alike.
/// - Holds only a reference to the lock, never a guard, so it can live across `.await`.
pub(crate) struct FlightGuard<'a> {
    lock: &'a RwLock<CatalogState>,
    action: Action,
}

impl<'a> FlightGuard<'a> {
    pub(crate) fn acquire(
        lock: &'a RwLock<CatalogState>,
        action: Action,
    ) -> Result<Self, StoreError> {
        let mut state = write(lock);
        if state.in_flight.get(action) {
            tracing::debug!(%action, "rejecting re-entrant store action");
            return Err(StoreError::Busy(action));
        }
        state.in_flight.set(action, true);
        Ok(Self { lock, action })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        write(self.lock).in_flight.set(self.action, false);
    }
}
