//! Frames-in-flight admission gate.
//!
//! A counting gate over N slots. The producer blocks in `acquire` while every slot
//! is in flight; GPU completion handlers call `release` from whichever thread the
//! backend uses.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex, MutexGuard};

use super::SlotId;

/// How long `acquire_with` sleeps between pump calls while all slots are busy.
const PUMP_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct FlowState {
    free: usize,
    in_flight: Vec<bool>,
    next: SlotId,
}

impl FlowState {
    /// Claims the next free slot in round-robin order, skipping slots still in flight.
    fn take(&mut self) -> Option<SlotId> {
        if self.free == 0 {
            return None;
        }

        let n = self.in_flight.len();
        let id = (0..n)
            .map(|offset| (self.next + offset) % n)
            .find(|&i| !self.in_flight[i])?;

        self.in_flight[id] = true;
        self.free -= 1;
        self.next = (id + 1) % n;
        Some(id)
    }
}

/// Bounds the number of frame slots simultaneously un-released.
#[derive(Debug)]
pub struct FlowController {
    state: Mutex<FlowState>,
    released: Condvar,
}

impl FlowController {
    /// # Panics
    /// Panics if `slots` is zero.
    pub fn new(slots: usize) -> Self {
        assert!(slots > 0, "flow controller needs at least one slot");
        Self {
            state: Mutex::new(FlowState {
                free: slots,
                in_flight: vec![false; slots],
                next: 0,
            }),
            released: Condvar::new(),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.state.lock().in_flight.len()
    }

    /// Slots currently available to `acquire`.
    pub fn free(&self) -> usize {
        self.state.lock().free
    }

    pub fn is_in_flight(&self, slot: SlotId) -> bool {
        self.state
            .lock()
            .in_flight
            .get(slot)
            .copied()
            .unwrap_or(false)
    }

    /// Claims a slot without blocking.
    pub fn try_acquire(&self) -> Option<SlotId> {
        self.state.lock().take()
    }

    /// Blocks until a slot is free and claims it.
    ///
    /// Completions must be delivered by another thread.
    pub fn acquire(&self) -> SlotId {
        let mut state = self.state.lock();
        loop {
            if let Some(id) = state.take() {
                return id;
            }
            self.released.wait(&mut state);
        }
    }

    /// Like [`acquire`](Self::acquire) but calls `pump` while waiting.
    ///
    /// Backends that deliver completions only when polled (wgpu on native) pass a
    /// pump that polls the device; the lock is not held while it runs.
    pub fn acquire_with<F: FnMut()>(&self, mut pump: F) -> SlotId {
        let mut state = self.state.lock();
        loop {
            if let Some(id) = state.take() {
                return id;
            }
            MutexGuard::unlocked(&mut state, &mut pump);
            if state.free > 0 {
                continue;
            }
            let _timed_out = self.released.wait_for(&mut state, PUMP_INTERVAL);
        }
    }

    /// Returns `slot` to the pool and wakes one waiter.
    ///
    /// # Panics
    /// Panics if `slot` is not currently acquired (double release or release
    /// without acquire).
    pub fn release(&self, slot: SlotId) {
        let mut state = self.state.lock();
        let acquired = state.in_flight.get(slot).copied().unwrap_or(false);
        assert!(acquired, "release of slot {slot}, which is not acquired");

        state.in_flight[slot] = false;
        state.free += 1;
        drop(state);

        self.released.notify_one();
    }

    /// Blocks until every slot has been released, pumping while waiting.
    pub fn drain_with<F: FnMut()>(&self, mut pump: F) {
        let mut state = self.state.lock();
        while state.free < state.in_flight.len() {
            MutexGuard::unlocked(&mut state, &mut pump);
            if state.free == state.in_flight.len() {
                break;
            }
            let _timed_out = self.released.wait_for(&mut state, PUMP_INTERVAL);
        }
    }
}

/// Releases one acquired slot exactly once.
///
/// Handed to the submission path and moved into the GPU completion callback.
/// If it is dropped unused (frame skipped, callback discarded) the slot is
/// released on drop, since no GPU work references it.
#[derive(Debug)]
#[must_use = "dropping a release handle frees its slot immediately"]
pub struct ReleaseHandle {
    flow: Option<Arc<FlowController>>,
    slot: SlotId,
}

impl ReleaseHandle {
    pub(crate) fn new(flow: Arc<FlowController>, slot: SlotId) -> Self {
        Self {
            flow: Some(flow),
            slot,
        }
    }

    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(flow) = self.flow.take() {
            flow.release(self.slot);
        }
    }
}

impl Drop for ReleaseHandle {
    fn drop(&mut self) {
        self.release_once();
    }
}
