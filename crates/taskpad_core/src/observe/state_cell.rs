//! Single-slot observable cell.
//!
//! # Responsibility
//! - Hold one latest value and notify subscribers synchronously on every
//!   publication.
//! - Replay the current value to late subscribers at registration time.
//!
//! # Invariants
//! - Subscriber callbacks run after the cell's lock is released, so a
//!   callback may read or mutate the same cell without deadlocking.
//! - A dropped `Subscription` never receives another notification.
//! - Every value handed out is a clone; the guarded value is never exposed
//!   by reference beyond the `modify`/`read` closures.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Outcome of a [`StateCell::modify`] closure: whether the mutation is
/// published to subscribers or kept silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation<R> {
    /// The value changed; notify all subscribers with a fresh snapshot.
    Publish(R),
    /// The value is unchanged (or the change must stay invisible); no
    /// notification is sent.
    Keep(R),
}

struct CellState<T> {
    value: T,
    next_token: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

struct CellInner<T> {
    state: Mutex<CellState<T>>,
}

impl<T> CellInner<T> {
    fn lock(&self) -> MutexGuard<'_, CellState<T>> {
        // A caller panicking inside `modify` poisons the lock; the value
        // itself is still a valid snapshot, so keep serving it.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn unsubscribe(&self, token: u64) {
        let mut state = self.lock();
        state.subscribers.retain(|(id, _)| *id != token);
    }
}

/// Shared latest-value container with synchronous publish-on-write.
///
/// Cloning a `StateCell` yields another handle to the same slot. The cell
/// itself is the only owner of the mutable value; all read paths clone.
pub struct StateCell<T> {
    inner: Arc<CellInner<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> StateCell<T> {
    /// Creates a cell holding `initial` as its current value.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(CellInner {
                state: Mutex::new(CellState {
                    value: initial,
                    next_token: 0,
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Reads the current value under the lock without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.lock().value)
    }

    /// Replaces the current value and notifies every subscriber.
    pub fn set(&self, value: T) {
        self.modify(|slot| {
            *slot = value;
            Mutation::Publish(())
        });
    }

    /// Mutates the value under the lock.
    ///
    /// The closure decides through [`Mutation`] whether subscribers are
    /// notified. Notification happens after the lock is released, with a
    /// snapshot taken at publication time, so interleaved writers observe
    /// a total order of publications matching lock acquisition order.
    pub fn modify<R>(&self, f: impl FnOnce(&mut T) -> Mutation<R>) -> R {
        let (result, pending) = {
            let mut state = self.inner.lock();
            match f(&mut state.value) {
                Mutation::Publish(result) => {
                    let snapshot = state.value.clone();
                    let subscribers: Vec<Callback<T>> = state
                        .subscribers
                        .iter()
                        .map(|(_, callback)| Arc::clone(callback))
                        .collect();
                    (result, Some((snapshot, subscribers)))
                }
                Mutation::Keep(result) => (result, None),
            }
        };

        if let Some((snapshot, subscribers)) = pending {
            for callback in subscribers {
                callback(&snapshot);
            }
        }

        result
    }

    /// Registers `f` and synchronously replays the current value to it.
    ///
    /// The returned [`Subscription`] must be kept alive for as long as
    /// notifications are wanted; dropping it unsubscribes.
    #[must_use = "dropping the subscription stops notifications"]
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let callback: Callback<T> = Arc::new(f);
        let (token, replay) = {
            let mut state = self.inner.lock();
            let token = state.next_token;
            state.next_token += 1;
            state.subscribers.push((token, Arc::clone(&callback)));
            (token, state.value.clone())
        };
        // Replay outside the lock so the callback may touch the cell.
        callback(&replay);
        Subscription {
            cell: Arc::downgrade(&self.inner),
            token,
        }
    }

    /// Returns a read-only handle exposing only `get` and `subscribe`.
    pub fn reader(&self) -> StateReader<T> {
        StateReader {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Read-only handle over a [`StateCell`].
///
/// This is the "live snapshot handle" handed to observers: always holds a
/// current value, updated on every publication, with no write access.
pub struct StateReader<T> {
    inner: Arc<CellInner<T>>,
}

impl<T> Clone for StateReader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> StateReader<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Registers `f` and synchronously replays the current value to it.
    #[must_use = "dropping the subscription stops notifications"]
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        StateCell {
            inner: Arc::clone(&self.inner),
        }
        .subscribe(f)
    }
}

/// Active registration of one subscriber; unsubscribes on drop.
pub struct Subscription<T> {
    cell: Weak<CellInner<T>>,
    token: u64,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.upgrade() {
            cell.unsubscribe(self.token);
        }
    }
}
