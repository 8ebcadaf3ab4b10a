//! Per-item playback state machine and the arena that enforces the
//! one-item-playing rule.
//!
//! Every feed item owns one [`PlaybackState`]. The [`FeedPlayback`] arena is
//! the single writer: activating a slot always deactivates the previous
//! holder in the same call, so at most one item can ever be `Playing`.
//! Play attempts resolve asynchronously in the browser; each attempt carries
//! a [`PlayRequest`] ticket stamped with the item's token at dispatch time,
//! and a resolution whose token no longer matches the live one is dropped on
//! arrival. That closes the race where a fast scroll activates item A then B
//! and A's delayed "started playing" confirmation lands after B took over.

use crate::feed::gate::Interaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// No resource requested yet.
    Idle,
    /// Resource requested, not yet confirmed playable.
    Loading,
    /// Resource actively advancing.
    Playing,
    /// Resource positioned but not advancing, either by explicit pause or
    /// because the environment rejected the play attempt.
    Paused,
    /// Load or decode failed. Sticky until the item is activated again, at
    /// which point a fresh load is attempted.
    Errored,
}

/// Mute is orthogonal to the phase: `muted` is what the media element should
/// currently be, `preferred_muted` is the user's last explicit choice and is
/// what an unmuted-capable activation goes back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    phase: PlaybackPhase,
    muted: bool,
    preferred_muted: bool,
    token: u64,
    loaded: bool,
    /// A play attempt has been commanded and its outcome has not arrived yet.
    pending: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            // Muted until a gesture proves otherwise; preference starts
            // unmuted so the first post-gesture activation attempts sound.
            muted: true,
            preferred_muted: false,
            token: 0,
            loaded: false,
            pending: false,
        }
    }
}

impl PlaybackState {
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_errored(&self) -> bool {
        self.phase == PlaybackPhase::Errored
    }

    fn effective_muted(&self, interaction: Interaction) -> bool {
        self.preferred_muted || !interaction.has_occurred()
    }
}

/// Ticket captured by an asynchronous play attempt. The token pins the
/// attempt to the command that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRequest {
    pub index: usize,
    pub token: u64,
    pub muted: bool,
}

/// How the environment answered a play attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// Autoplay policy or similar refused to start playback. Expected and
    /// recoverable by a user click; never an error.
    Rejected,
}

/// Result of a user play/pause click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Playback was paused synchronously.
    Paused,
    /// A new play attempt should be issued with this ticket.
    Play(PlayRequest),
    /// Click on an errored or non-active item; nothing to do.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlaybackSlot {
    id: String,
    state: PlaybackState,
}

/// Arena of playback records, one per feed item, keyed by feed position with
/// the item id kept for outbound reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPlayback {
    slots: Vec<PlaybackSlot>,
    active: Option<usize>,
}

impl FeedPlayback {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            slots: ids
                .into_iter()
                .map(|id| PlaybackSlot {
                    id,
                    state: PlaybackState::default(),
                })
                .collect(),
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn state(&self, index: usize) -> Option<&PlaybackState> {
        self.slots.get(index).map(|slot| &slot.state)
    }

    pub fn state_for(&self, id: &str) -> Option<&PlaybackState> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.state)
    }

    pub fn states(&self) -> impl Iterator<Item = &PlaybackState> {
        self.slots.iter().map(|slot| &slot.state)
    }

    /// Ticket for the outstanding attempt on the active slot, if there is
    /// one. The media layer uses this to issue the play call for whatever
    /// command last touched the slot; once the attempt resolves (or a pause
    /// supersedes it) the ticket disappears.
    pub fn play_request(&self, index: usize) -> Option<PlayRequest> {
        if self.active != Some(index) {
            return None;
        }
        let state = self.state(index)?;
        if state.is_errored() || !state.pending {
            return None;
        }
        Some(PlayRequest {
            index,
            token: state.token,
            muted: state.muted,
        })
    }

    /// Make `index` the active slot: synchronously deactivate the previous
    /// holder, then start an activation attempt. Returns the play ticket, or
    /// `None` when the index is out of range or already active.
    pub fn set_active(&mut self, index: usize, interaction: Interaction) -> Option<PlayRequest> {
        if index >= self.slots.len() || self.active == Some(index) {
            return None;
        }
        if let Some(previous) = self.active.take() {
            self.deactivate_slot(previous);
        }
        self.active = Some(index);
        Some(self.activate_slot(index, interaction))
    }

    /// Synchronous, unconditional pause + mute. Any in-flight attempt for the
    /// slot is invalidated; its eventual resolution is dropped on arrival.
    pub fn deactivate(&mut self, index: usize) {
        if index >= self.slots.len() {
            return;
        }
        if self.active == Some(index) {
            self.active = None;
        }
        self.deactivate_slot(index);
    }

    /// Apply the outcome of an asynchronous play attempt. A stale ticket
    /// (token superseded by a later command) is silently discarded.
    pub fn resolve_play(&mut self, request: PlayRequest, outcome: PlayOutcome) {
        let Some(slot) = self.slots.get_mut(request.index) else {
            return;
        };
        if slot.state.token != request.token {
            return;
        }
        slot.state.pending = false;
        match outcome {
            PlayOutcome::Started => {
                slot.state.phase = PlaybackPhase::Playing;
                slot.state.loaded = true;
            }
            PlayOutcome::Rejected => slot.state.phase = PlaybackPhase::Paused,
        }
    }

    /// User click on the active item. Playing pauses synchronously, and so
    /// does a commanded-but-unconfirmed play (the click cancels the pending
    /// attempt); anything else (re)attempts playback with the user's mute
    /// preference. The caller has already marked the interaction gate, so
    /// `interaction` normally reports a gesture.
    pub fn toggle_play(&mut self, index: usize, interaction: Interaction) -> ToggleAction {
        if self.active != Some(index) {
            return ToggleAction::Ignored;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return ToggleAction::Ignored;
        };
        match slot.state.phase {
            PlaybackPhase::Errored => ToggleAction::Ignored,
            PlaybackPhase::Playing => {
                slot.state.token += 1;
                slot.state.phase = PlaybackPhase::Paused;
                slot.state.pending = false;
                ToggleAction::Paused
            }
            PlaybackPhase::Idle | PlaybackPhase::Loading | PlaybackPhase::Paused => {
                if slot.state.pending {
                    // Still waiting on an attempt the user asked for; this
                    // click takes it back rather than stacking another one.
                    slot.state.token += 1;
                    slot.state.phase = PlaybackPhase::Paused;
                    slot.state.pending = false;
                    return ToggleAction::Paused;
                }
                slot.state.token += 1;
                if !slot.state.loaded {
                    slot.state.phase = PlaybackPhase::Loading;
                }
                slot.state.muted = slot.state.effective_muted(interaction);
                slot.state.pending = true;
                ToggleAction::Play(PlayRequest {
                    index,
                    token: slot.state.token,
                    muted: slot.state.muted,
                })
            }
        }
    }

    /// Flip the mute preference. Returns the new effective muted value, which
    /// the media layer mirrors onto the element (restoring full volume when
    /// unmuting). Unmuting counts as a gesture, so the caller marks the gate
    /// before taking the snapshot. The phase is untouched.
    pub fn toggle_mute(&mut self, index: usize, interaction: Interaction) -> Option<bool> {
        let slot = self.slots.get_mut(index)?;
        slot.state.preferred_muted = !slot.state.muted;
        slot.state.muted = slot.state.effective_muted(interaction);
        Some(slot.state.muted)
    }

    /// The resource failed to fetch or decode. Sticky until the next
    /// activation; the token bump drops any in-flight play resolution.
    pub fn load_failed(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.state.token += 1;
            slot.state.phase = PlaybackPhase::Errored;
            slot.state.loaded = false;
            slot.state.pending = false;
        }
    }

    /// Resource data arrived. Clears a stale error; the phase otherwise waits
    /// for the pending play attempt to resolve.
    pub fn load_ready(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.state.loaded = true;
            if slot.state.phase == PlaybackPhase::Errored {
                slot.state.phase = PlaybackPhase::Paused;
            }
        }
    }

    fn activate_slot(&mut self, index: usize, interaction: Interaction) -> PlayRequest {
        let state = &mut self.slots[index].state;
        state.token += 1;
        if !state.loaded {
            // Covers Idle as well as a fresh attempt out of Errored.
            state.phase = PlaybackPhase::Loading;
        }
        state.muted = state.effective_muted(interaction);
        state.pending = true;
        PlayRequest {
            index,
            token: state.token,
            muted: state.muted,
        }
    }

    fn deactivate_slot(&mut self, index: usize) {
        let state = &mut self.slots[index].state;
        state.token += 1;
        state.muted = true;
        state.pending = false;
        match state.phase {
            // Never activated, or failed and still showing the fallback.
            PlaybackPhase::Idle | PlaybackPhase::Errored => {}
            _ => state.phase = PlaybackPhase::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::gate::InteractionGate;

    fn arena(len: usize) -> FeedPlayback {
        FeedPlayback::new((0..len).map(|i| format!("item-{i}")))
    }

    fn no_gesture() -> Interaction {
        InteractionGate::new().snapshot()
    }

    fn gesture() -> Interaction {
        let mut gate = InteractionGate::new();
        gate.mark();
        gate.snapshot()
    }

    fn playing_count(feed: &FeedPlayback) -> usize {
        feed.states().filter(|s| s.is_playing()).count()
    }

    #[test]
    fn activation_before_any_gesture_is_forced_muted() {
        let mut feed = arena(3);
        let request = feed.set_active(0, no_gesture()).expect("request");
        assert!(request.muted);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Loading);
        assert!(feed.state(0).unwrap().muted());
    }

    #[test]
    fn activation_after_a_gesture_uses_the_unmuted_default() {
        let mut feed = arena(3);
        let request = feed.set_active(0, gesture()).expect("request");
        assert!(!request.muted);
    }

    #[test]
    fn at_most_one_item_plays_across_rapid_transitions() {
        let mut feed = arena(4);
        let r0 = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(r0, PlayOutcome::Started);
        assert_eq!(playing_count(&feed), 1);

        let r1 = feed.set_active(1, gesture()).unwrap();
        assert_eq!(playing_count(&feed), 0);
        feed.resolve_play(r1, PlayOutcome::Started);

        let r2 = feed.set_active(2, gesture()).unwrap();
        feed.resolve_play(r2, PlayOutcome::Started);
        assert_eq!(playing_count(&feed), 1);
        assert!(feed.state(2).unwrap().is_playing());
    }

    #[test]
    fn stale_confirmation_after_a_newer_activation_is_dropped() {
        let mut feed = arena(2);
        let r0 = feed.set_active(0, gesture()).unwrap();
        let r1 = feed.set_active(1, gesture()).unwrap();

        // Item 0's delayed success lands after item 1 took over.
        feed.resolve_play(r0, PlayOutcome::Started);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
        assert!(!feed.state(0).unwrap().is_playing());

        feed.resolve_play(r1, PlayOutcome::Started);
        assert_eq!(playing_count(&feed), 1);
        assert!(feed.state(1).unwrap().is_playing());
    }

    #[test]
    fn autoplay_rejection_parks_the_item_paused_not_errored() {
        let mut feed = arena(2);
        let request = feed.set_active(0, no_gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Rejected);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn deactivate_is_synchronous_and_unconditional() {
        let mut feed = arena(2);
        let request = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Started);

        feed.deactivate(0);
        let state = feed.state(0).unwrap();
        assert_eq!(state.phase(), PlaybackPhase::Paused);
        assert!(state.muted());
        assert_eq!(feed.active_index(), None);
    }

    #[test]
    fn resolution_arriving_after_deactivate_is_dropped() {
        let mut feed = arena(2);
        let request = feed.set_active(0, gesture()).unwrap();
        feed.deactivate(0);
        feed.resolve_play(request, PlayOutcome::Started);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn load_failure_is_sticky_until_reactivation() {
        let mut feed = arena(3);
        let r0 = feed.set_active(0, gesture()).unwrap();
        feed.load_failed(0);
        assert!(feed.state(0).unwrap().is_errored());

        // In-flight success from before the failure no longer applies.
        feed.resolve_play(r0, PlayOutcome::Started);
        assert!(feed.state(0).unwrap().is_errored());

        // Scrolling away keeps the error visible.
        feed.set_active(1, gesture());
        assert!(feed.state(0).unwrap().is_errored());

        // Coming back attempts a fresh load and can recover fully.
        let retry = feed.set_active(0, gesture()).expect("fresh attempt");
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Loading);
        feed.load_ready(0);
        feed.resolve_play(retry, PlayOutcome::Started);
        assert!(feed.state(0).unwrap().is_playing());
        assert_eq!(playing_count(&feed), 1);
    }

    #[test]
    fn toggle_pauses_playing_and_resumes_with_the_preference() {
        let mut feed = arena(2);
        let request = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Started);

        assert_eq!(feed.toggle_play(0, gesture()), ToggleAction::Paused);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);

        let ToggleAction::Play(resume) = feed.toggle_play(0, gesture()) else {
            panic!("expected a play ticket");
        };
        assert!(!resume.muted);
        feed.resolve_play(resume, PlayOutcome::Started);
        assert!(feed.state(0).unwrap().is_playing());
    }

    #[test]
    fn toggle_rejection_stays_paused() {
        let mut feed = arena(1);
        let request = feed.set_active(0, no_gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Rejected);

        let ToggleAction::Play(retry) = feed.toggle_play(0, gesture()) else {
            panic!("expected a play ticket");
        };
        feed.resolve_play(retry, PlayOutcome::Rejected);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn toggle_cancels_an_unconfirmed_attempt() {
        let mut feed = arena(1);
        let issued = feed.set_active(0, gesture()).unwrap();

        // The activation attempt has not resolved yet; a click withdraws it.
        assert_eq!(feed.toggle_play(0, gesture()), ToggleAction::Paused);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
        assert_eq!(feed.play_request(0), None);

        // The withdrawn ticket is stale now and resolves to nothing.
        feed.resolve_play(issued, PlayOutcome::Started);
        assert_eq!(feed.state(0).unwrap().phase(), PlaybackPhase::Paused);
    }

    #[test]
    fn toggle_ignores_inactive_and_errored_items() {
        let mut feed = arena(3);
        feed.set_active(0, gesture());
        assert_eq!(feed.toggle_play(2, gesture()), ToggleAction::Ignored);

        feed.load_failed(0);
        assert_eq!(feed.toggle_play(0, gesture()), ToggleAction::Ignored);
    }

    #[test]
    fn unmute_before_any_gesture_cannot_stick() {
        let mut feed = arena(1);
        feed.set_active(0, no_gesture());
        // The gate has not flipped, so even an explicit unmute request keeps
        // the effective state muted.
        let muted = feed.toggle_mute(0, no_gesture()).unwrap();
        assert!(muted);

        // Once the gate is set, the same request takes effect.
        let muted = feed.toggle_mute(0, gesture()).unwrap();
        assert!(!muted);
    }

    #[test]
    fn mute_preference_survives_reactivation() {
        let mut feed = arena(2);
        let request = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Started);
        // User mutes item 0 explicitly.
        assert_eq!(feed.toggle_mute(0, gesture()), Some(true));

        feed.set_active(1, gesture());
        let back = feed.set_active(0, gesture()).unwrap();
        assert!(back.muted);
    }

    #[test]
    fn toggle_mute_does_not_change_the_phase() {
        let mut feed = arena(1);
        let request = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(request, PlayOutcome::Started);
        feed.toggle_mute(0, gesture());
        assert!(feed.state(0).unwrap().is_playing());
    }

    #[test]
    fn out_of_range_commands_are_guarded_noops() {
        let mut feed = arena(2);
        assert_eq!(feed.set_active(5, gesture()), None);
        feed.deactivate(5);
        assert_eq!(feed.toggle_mute(5, gesture()), None);
        feed.load_failed(5);
        feed.load_ready(5);
        assert_eq!(feed.active_index(), None);
        assert!(feed.states().all(|s| s.phase() == PlaybackPhase::Idle));
    }

    #[test]
    fn deactivate_leaves_a_never_activated_slot_idle() {
        let mut feed = arena(2);
        feed.set_active(0, gesture());
        feed.deactivate(1);
        assert_eq!(feed.state(1).unwrap().phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn play_request_only_exists_for_the_active_playable_slot() {
        let mut feed = arena(2);
        assert_eq!(feed.play_request(0), None);
        let issued = feed.set_active(0, gesture()).unwrap();
        assert_eq!(feed.play_request(0), Some(issued));
        assert_eq!(feed.play_request(1), None);

        feed.load_failed(0);
        assert_eq!(feed.play_request(0), None);
    }

    #[test]
    fn play_request_disappears_once_the_attempt_settles() {
        let mut feed = arena(1);
        let issued = feed.set_active(0, gesture()).unwrap();
        feed.resolve_play(issued, PlayOutcome::Started);
        assert_eq!(feed.play_request(0), None);

        // Pausing clears the ticket issued by the resume that preceded it.
        assert_eq!(feed.toggle_play(0, gesture()), ToggleAction::Paused);
        let ToggleAction::Play(resume) = feed.toggle_play(0, gesture()) else {
            panic!("expected a play ticket");
        };
        assert_eq!(feed.play_request(0), Some(resume));
        assert_eq!(feed.toggle_play(0, gesture()), ToggleAction::Paused);
        assert_eq!(feed.play_request(0), None);
    }

    #[test]
    fn states_are_addressable_by_item_id() {
        let mut feed = FeedPlayback::new(["a".to_string(), "b".to_string()]);
        feed.set_active(1, gesture());
        assert_eq!(
            feed.state_for("b").map(PlaybackState::phase),
            Some(PlaybackPhase::Loading)
        );
        assert!(feed.state_for("missing").is_none());
    }
}
