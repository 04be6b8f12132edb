use std::cell::Cell;
use std::rc::Rc;

/// A normalized viewer-offset sample produced once per tracked frame.
///
/// `x` and `y` are the horizontal/vertical offset of the viewer's head
/// from screen center, roughly in `[-1, 1]`. `z` is a positive proximity
/// scalar (inverse of apparent face size; larger = closer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    /// Horizontal offset from screen center (positive = viewer's right).
    pub x: f32,
    /// Vertical offset from screen center (positive = up).
    pub y: f32,
    /// Proximity scalar (larger = closer to the screen).
    pub z: f32,
}

impl HeadPose {
    /// Construct a pose sample from raw tracker output.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Pull-based pose delivery, polled once per render tick.
///
/// Returning `None` means no face has been detected yet — the consumer
/// must leave its state unchanged, never error out.
pub trait PoseSource {
    /// The most recent pose sample, if any.
    fn latest_pose(&self) -> Option<HeadPose>;
}

/// A shared single-value pose slot for the cooperative event-loop model.
///
/// The tracker callback publishes into the slot between frames; the render
/// loop polls it once per tick. The slot holds at most one value — a new
/// sample replaces the old one, so stale poses are never queued. Reading
/// does not consume: the last known pose persists until replaced, matching
/// the tracker contract that a frame without a detected face leaves the
/// camera where it was.
///
/// Clones share the same slot, so the tracker side and the render side can
/// each hold a handle.
#[derive(Debug, Clone, Default)]
pub struct SharedPoseSlot {
    slot: Rc<Cell<Option<HeadPose>>>,
}

impl SharedPoseSlot {
    /// Create an empty slot (no pose seen yet).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a fresh sample, replacing any previous one.
    pub fn publish(&self, pose: HeadPose) {
        self.slot.set(Some(pose));
    }
}

impl PoseSource for SharedPoseSlot {
    fn latest_pose(&self) -> Option<HeadPose> {
        self.slot.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_yields_none() {
        let slot = SharedPoseSlot::new();
        assert_eq!(slot.latest_pose(), None);
    }

    #[test]
    fn publish_replaces_previous_sample() {
        let slot = SharedPoseSlot::new();
        slot.publish(HeadPose::new(0.1, 0.2, 1.0));
        slot.publish(HeadPose::new(0.5, -0.3, 2.0));
        assert_eq!(slot.latest_pose(), Some(HeadPose::new(0.5, -0.3, 2.0)));
    }

    #[test]
    fn reading_does_not_consume() {
        let slot = SharedPoseSlot::new();
        slot.publish(HeadPose::new(0.1, 0.2, 1.0));
        assert!(slot.latest_pose().is_some());
        assert!(slot.latest_pose().is_some());
    }

    #[test]
    fn clones_share_the_slot() {
        let tracker_side = SharedPoseSlot::new();
        let render_side = tracker_side.clone();
        tracker_side.publish(HeadPose::new(0.0, 0.0, 1.5));
        assert_eq!(
            render_side.latest_pose(),
            Some(HeadPose::new(0.0, 0.0, 1.5))
        );
    }
}
