//! Scroll-offset tracking and active-index resolution.
//!
//! The feed container snaps one item per viewport, so the continuous scroll
//! position `scroll_top / container_height` rounds to the slot currently in
//! view. The tracker keeps the last resolved slot and only reports a
//! transition when the slot actually changes, which filters out the stream of
//! intermediate offsets produced by a fast flick.

/// Continuous feed position. `None` when the container cannot be measured
/// (unmounted, zero height), which callers treat as a guarded no-op.
pub fn scroll_position(scroll_top: f64, container_height: f64) -> Option<f64> {
    if !container_height.is_finite() || container_height <= 0.0 || !scroll_top.is_finite() {
        return None;
    }
    Some(scroll_top / container_height)
}

/// Round a continuous position to a feed slot, clamped to the item range.
/// `None` for an empty feed.
pub fn resolve_active_index(position: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let max = (len - 1) as f64;
    Some(position.round().clamp(0.0, max) as usize)
}

/// Active-index change produced by a scroll observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTransition {
    pub previous: Option<usize>,
    pub current: usize,
}

/// Observes raw scroll offsets and emits a transition whenever the resolved
/// slot differs from the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedScrollTracker {
    len: usize,
    active: Option<usize>,
}

impl FeedScrollTracker {
    /// A non-empty feed starts with slot 0 in view.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: if len > 0 { Some(0) } else { None },
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Feed one scroll measurement through the tracker. Returns the slot
    /// transition, if any; unmeasurable containers and repeat observations of
    /// the current slot produce nothing.
    pub fn observe(&mut self, scroll_top: f64, container_height: f64) -> Option<IndexTransition> {
        let position = scroll_position(scroll_top, container_height)?;
        let candidate = resolve_active_index(position, self.len)?;
        if Some(candidate) == self.active {
            return None;
        }
        let previous = self.active;
        self.active = Some(candidate);
        Some(IndexTransition {
            previous,
            current: candidate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 800.0;

    #[test]
    fn whole_viewport_offsets_map_to_their_slot() {
        let mut tracker = FeedScrollTracker::new(6);
        for k in 1..6usize {
            let transition = tracker.observe(k as f64 * H, H).expect("slot change");
            assert_eq!(transition.current, k);
            assert_eq!(transition.previous, Some(k - 1));
        }
    }

    #[test]
    fn fractional_offsets_round_to_the_nearest_slot() {
        assert_eq!(resolve_active_index(0.4, 6), Some(0));
        assert_eq!(resolve_active_index(0.6, 6), Some(1));
        assert_eq!(resolve_active_index(2.5, 6), Some(3));
    }

    #[test]
    fn positions_past_the_end_clamp_to_the_last_slot() {
        assert_eq!(resolve_active_index(9.7, 4), Some(3));
        assert_eq!(resolve_active_index(-1.2, 4), Some(0));
    }

    #[test]
    fn empty_feed_resolves_no_slot() {
        assert_eq!(resolve_active_index(0.0, 0), None);
        let mut tracker = FeedScrollTracker::new(0);
        assert_eq!(tracker.active_index(), None);
        assert_eq!(tracker.observe(120.0, H), None);
    }

    #[test]
    fn unmeasurable_container_observes_nothing() {
        let mut tracker = FeedScrollTracker::new(3);
        assert_eq!(tracker.observe(100.0, 0.0), None);
        assert_eq!(tracker.observe(100.0, -5.0), None);
        assert_eq!(tracker.observe(100.0, f64::NAN), None);
        assert_eq!(tracker.observe(f64::NAN, H), None);
        assert_eq!(tracker.active_index(), Some(0));
    }

    #[test]
    fn repeat_observations_of_the_current_slot_are_silent() {
        let mut tracker = FeedScrollTracker::new(3);
        assert_eq!(tracker.observe(0.0, H), None);
        assert_eq!(tracker.observe(10.0, H), None);
        assert!(tracker.observe(H, H).is_some());
        assert_eq!(tracker.observe(H + 15.0, H), None);
    }
}
