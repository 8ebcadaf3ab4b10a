//! Session-wide user-gesture tracking.
//!
//! Browsers refuse unmuted autoplay until the page has seen at least one user
//! gesture. The gate records the first click, touch, scroll, or explicit
//! play/unmute action and stays set for the rest of the session; there is no
//! way to clear it. Consumers never poll the gate directly, they receive an
//! [`Interaction`] snapshot taken at decision time.

/// Write-once record of whether any user gesture has occurred this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionGate {
    interacted: bool,
}

impl InteractionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user gesture. Idempotent; returns whether this call was the
    /// first writer.
    pub fn mark(&mut self) -> bool {
        let first = !self.interacted;
        self.interacted = true;
        first
    }

    pub fn has_occurred(&self) -> bool {
        self.interacted
    }

    /// Immutable value handed to playback decisions.
    pub fn snapshot(&self) -> Interaction {
        Interaction {
            interacted: self.interacted,
        }
    }
}

/// Point-in-time copy of the gate, passed down to whoever needs to decide
/// between a muted and an unmuted play attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    interacted: bool,
}

impl Interaction {
    pub fn has_occurred(&self) -> bool {
        self.interacted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let gate = InteractionGate::new();
        assert!(!gate.has_occurred());
        assert!(!gate.snapshot().has_occurred());
    }

    #[test]
    fn first_writer_wins_later_marks_are_noops() {
        let mut gate = InteractionGate::new();
        assert!(gate.mark());
        assert!(!gate.mark());
        assert!(!gate.mark());
        assert!(gate.has_occurred());
    }

    #[test]
    fn snapshot_reflects_the_flip() {
        let mut gate = InteractionGate::new();
        let before = gate.snapshot();
        gate.mark();
        let after = gate.snapshot();
        assert!(!before.has_occurred());
        assert!(after.has_occurred());
    }
}
