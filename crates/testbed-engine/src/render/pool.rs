use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::coords::Viewport;

use super::{FlowController, FrameSlot, ReleaseHandle, SlotId};

/// Fixed ring of frame slots gated by a [`FlowController`].
///
/// Slots are created once and reused for the pool's lifetime. A slot is written
/// by the producer only while leased; once the lease is handed to the
/// submission path it belongs to the GPU until its [`ReleaseHandle`] fires.
///
/// The gate is never exposed: a slot claimed on it directly would have no
/// release handle and never come back.
#[derive(Debug)]
pub struct SlotPool {
    slots: Vec<FrameSlot>,
    flow: Arc<FlowController>,
    viewport: Viewport,
}

impl SlotPool {
    /// # Panics
    /// Panics if `frames_in_flight` is zero.
    pub fn new(frames_in_flight: usize, max_vertices: usize, viewport: Viewport) -> Self {
        let slots = (0..frames_in_flight)
            .map(|id| FrameSlot::new(id, max_vertices))
            .collect();

        Self {
            slots,
            flow: Arc::new(FlowController::new(frames_in_flight)),
            viewport,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots not currently leased or in flight.
    #[inline]
    pub fn free(&self) -> usize {
        self.flow.free()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Viewport handed to slots at their next acquisition.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Blocks until a slot is free, then leases it cleared.
    ///
    /// Nothing is pumped while waiting, so releases must arrive from another
    /// thread. With a wgpu device on native, completions are only delivered
    /// by `device.poll`; use [`acquire_with`](Self::acquire_with) there or
    /// this blocks forever once every slot is in flight.
    pub fn acquire(&mut self) -> SlotLease<'_> {
        let id = self.flow.acquire();
        self.lease(id)
    }

    /// Like [`acquire`](Self::acquire), pumping completions while blocked.
    pub fn acquire_with<F: FnMut()>(&mut self, pump: F) -> SlotLease<'_> {
        let id = self.flow.acquire_with(pump);
        self.lease(id)
    }

    /// Blocks until every leased slot has been released.
    pub fn drain_with<F: FnMut()>(&self, pump: F) {
        self.flow.drain_with(pump);
    }

    fn lease(&mut self, id: SlotId) -> SlotLease<'_> {
        let slot = &mut self.slots[id];
        slot.reset(self.viewport);

        SlotLease {
            slot,
            release: ReleaseHandle::new(Arc::clone(&self.flow), id),
        }
    }
}

/// Exclusive write access to one acquired slot.
///
/// Dropping a lease without submitting it releases the slot.
#[derive(Debug)]
pub struct SlotLease<'a> {
    slot: &'a mut FrameSlot,
    release: ReleaseHandle,
}

impl<'a> SlotLease<'a> {
    #[inline]
    pub fn id(&self) -> SlotId {
        self.slot.id()
    }

    /// Ends the write phase: the slot becomes read-only and its release handle
    /// is handed to whoever completes the frame.
    pub fn into_parts(self) -> (&'a FrameSlot, ReleaseHandle) {
        let SlotLease { slot, release } = self;
        (slot, release)
    }
}

impl Deref for SlotLease<'_> {
    type Target = FrameSlot;

    fn deref(&self) -> &FrameSlot {
        self.slot
    }
}

impl DerefMut for SlotLease<'_> {
    fn deref_mut(&mut self) -> &mut FrameSlot {
        self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};
    use crate::render::DrawRequest;

    fn pool() -> SlotPool {
        SlotPool::new(3, 64, Viewport::new(320.0, 240.0))
    }

    #[test]
    fn leases_cycle_through_slots() {
        let mut pool = pool();
        let mut seen = Vec::new();
        for _ in 0..6 {
            let lease = pool.acquire();
            seen.push(lease.id());
            let (_, release) = lease.into_parts();
            release.release();
        }
        assert_eq!(seen, [0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn acquisition_clears_previous_frame() {
        let mut pool = SlotPool::new(1, 64, Viewport::new(320.0, 240.0));
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)];

        let mut lease = pool.acquire();
        lease.set_color(ColorRgba::white());
        lease.draw(DrawRequest::LineList(&pts)).unwrap();
        assert_eq!(lease.commands().len(), 1);
        drop(lease);

        let lease = pool.acquire();
        assert_eq!(lease.cursor(), 0);
        assert!(lease.commands().is_empty());
        assert_eq!(lease.capacity(), 64);
    }

    #[test]
    fn in_flight_slots_stay_claimed() {
        let mut pool = pool();
        let handles: Vec<ReleaseHandle> = (0..3).map(|_| pool.acquire().into_parts().1).collect();
        assert_eq!(pool.free(), 0);
        assert!(pool.flow.try_acquire().is_none());

        drop(handles);
        assert_eq!(pool.free(), 3);
    }

    #[test]
    fn viewport_applies_from_next_acquisition() {
        let mut pool = pool();
        pool.set_viewport(Viewport::new(1024.0, 768.0));
        let lease = pool.acquire();
        assert_eq!(lease.viewport(), Viewport::new(1024.0, 768.0));
    }
}
