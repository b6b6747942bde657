//! Single-slot move register
//!
//! The agent overwrites the slot every time it has a better answer; the
//! harness reads it once when the turn's deadline passes. Each write is one
//! store under a `parking_lot` mutex, so a reader on a timer thread always
//! sees a whole move, never a partially updated one.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

#[derive(Debug)]
struct Slot<A> {
    latest: Mutex<Option<A>>,
    writes: AtomicU64,
}

/// Cloneable handle to one turn's output slot
#[derive(Debug)]
pub struct MoveReporter<A> {
    slot: Arc<Slot<A>>,
}

impl<A> Clone for MoveReporter<A> {
    fn clone(&self) -> Self {
        MoveReporter {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A> Default for MoveReporter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> MoveReporter<A> {
    pub fn new() -> Self {
        MoveReporter {
            slot: Arc::new(Slot {
                latest: Mutex::new(None),
                writes: AtomicU64::new(0),
            }),
        }
    }

    /// Replace the current answer
    pub fn put(&self, action: A)
    where
        A: std::fmt::Debug,
    {
        trace!("[REPORT] {:?}", action);
        *self.slot.latest.lock() = Some(action);
        self.slot.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy of the current answer
    pub fn latest(&self) -> Option<A>
    where
        A: Clone,
    {
        self.slot.latest.lock().clone()
    }

    /// Remove and return the current answer
    pub fn take(&self) -> Option<A> {
        self.slot.latest.lock().take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.latest.lock().is_none()
    }

    /// Number of writes since creation
    pub fn writes(&self) -> u64 {
        self.slot.writes.load(Ordering::Relaxed)
    }
}
