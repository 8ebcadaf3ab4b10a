use crate::api::MediaItem;
use crate::components::{FeedPlaybackSignal, Icon, InteractionSignal};
use crate::diagnostics::log_event;
use crate::feed::{PlaybackPhase, PreloadHint, ToggleAction};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlVideoElement};

#[cfg(target_arch = "wasm32")]
use crate::feed::{FeedPlayback, PlayOutcome, PlayRequest};

/// One feed item's media surface. Owns the `<video>` element for the item's
/// lifetime and translates arena state into element commands: activation
/// issues a play attempt with the ticket the arena stamped, deactivation
/// silences the element immediately, clicks and the mute button feed user
/// intent back into the arena.
#[component]
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables, unused_mut))]
pub fn VideoPlayer(item: MediaItem, index: usize) -> Element {
    let mut playback = use_context::<FeedPlaybackSignal>().0;
    let interaction = use_context::<InteractionSignal>().0;

    let video_id = format!("feed-video-{}", item.id);

    let (phase, muted) = {
        let feed = playback.read();
        let state = feed.state_for(&item.id);
        (
            state.map(|s| s.phase()).unwrap_or(PlaybackPhase::Idle),
            state.map(|s| s.muted()).unwrap_or(true),
        )
    };
    let preload = PreloadHint::for_item(index, playback.read().active_index());

    // Token of the attempt most recently handed to the element, so re-runs of
    // the effect below do not re-issue the same play call.
    #[cfg(target_arch = "wasm32")]
    let last_attempt = use_hook(|| Rc::new(Cell::new(None::<u64>)));

    // Mirror arena commands onto the media element. An outstanding ticket
    // means "issue a play attempt"; losing the active slot means silence and
    // freeze right now, while any in-flight attempt dies against its stale
    // token when it eventually resolves.
    #[cfg(target_arch = "wasm32")]
    {
        let video_id = video_id.clone();
        let last_attempt = last_attempt.clone();
        use_effect(move || {
            let request = playback.read().play_request(index);
            let active = playback.read().active_index() == Some(index);
            let Some(video) = video_element(&video_id) else {
                return;
            };
            match request {
                Some(request) => {
                    if last_attempt.get() == Some(request.token) {
                        return;
                    }
                    last_attempt.set(Some(request.token));
                    issue_play(&video, request, playback);
                }
                None => {
                    if !active {
                        video.set_muted(true);
                        let _ = video.pause();
                        last_attempt.set(None);
                    }
                }
            }
        });
    }

    let on_click = {
        let video_id = video_id.clone();
        #[cfg(target_arch = "wasm32")]
        let last_attempt = last_attempt.clone();
        move |_| {
            let mut interaction = interaction.clone();
            if !interaction.peek().has_occurred() {
                interaction.write().mark();
            }
            let snapshot = interaction.peek().snapshot();
            let action = playback.write().toggle_play(index, snapshot);

            #[cfg(target_arch = "wasm32")]
            {
                let Some(video) = video_element(&video_id) else {
                    return;
                };
                match action {
                    ToggleAction::Paused => {
                        let _ = video.pause();
                        last_attempt.set(None);
                    }
                    ToggleAction::Play(request) => {
                        last_attempt.set(Some(request.token));
                        issue_play(&video, request, playback);
                    }
                    ToggleAction::Ignored => {}
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = action;
        }
    };

    let on_mute_toggle = {
        let video_id = video_id.clone();
        move |evt: Event<MouseData>| {
            // Keep the click from also toggling play/pause underneath.
            evt.stop_propagation();
            let mut interaction = interaction.clone();
            // An explicit unmute is itself a gesture.
            if !interaction.peek().has_occurred() {
                interaction.write().mark();
            }
            let snapshot = interaction.peek().snapshot();
            let Some(now_muted) = playback.write().toggle_mute(index, snapshot) else {
                return;
            };
            #[cfg(target_arch = "wasm32")]
            if let Some(video) = video_element(&video_id) {
                video.set_muted(now_muted);
                if !now_muted {
                    video.set_volume(1.0);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = now_muted;
        }
    };

    let on_error = {
        let url = item.url.clone();
        move |_| {
            log_event("feed-video", &format!("failed to load {url}"));
            playback.write().load_failed(index);
        }
    };
    let on_loaded = move |_| playback.write().load_ready(index);

    let mute_label = if muted { "Unmute" } else { "Mute" };

    rsx! {
        div { class: "player-surface", onclick: on_click,
            div { class: "player-fallback" }

            if phase != PlaybackPhase::Errored {
                video {
                    id: "{video_id}",
                    src: "{item.url}",
                    poster: "{item.thumbnail}",
                    preload: "{preload.as_attr()}",
                    muted,
                    r#loop: true,
                    playsinline: true,
                    onerror: on_error,
                    onloadeddata: on_loaded,
                }
            } else {
                div { class: "player-error",
                    p { "Video unavailable" }
                    p { class: "hint", "This video could not be loaded" }
                }
            }

            if phase != PlaybackPhase::Playing && phase != PlaybackPhase::Errored {
                div { class: "play-overlay",
                    div { class: "badge",
                        Icon {
                            name: "play".to_string(),
                            class: "icon-play".to_string(),
                        }
                    }
                }
            }

            if phase == PlaybackPhase::Playing {
                button {
                    class: "mute-toggle",
                    aria_label: "{mute_label}",
                    onclick: on_mute_toggle,
                    if muted {
                        Icon {
                            name: "volume-off".to_string(),
                            class: "icon-sm".to_string(),
                        }
                    } else {
                        Icon {
                            name: "volume-on".to_string(),
                            class: "icon-sm".to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn video_element(id: &str) -> Option<HtmlVideoElement> {
    let document = window()?.document()?;
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Hand one play attempt to the element. The outcome is routed back through
/// the arena with the ticket captured here; the arena drops it if anything
/// newer has touched the item since.
#[cfg(target_arch = "wasm32")]
fn issue_play(video: &HtmlVideoElement, request: PlayRequest, mut playback: Signal<FeedPlayback>) {
    video.set_volume(1.0);
    video.set_muted(request.muted);
    match video.play() {
        Ok(promise) => {
            spawn(async move {
                let outcome = match wasm_bindgen_futures::JsFuture::from(promise).await {
                    Ok(_) => PlayOutcome::Started,
                    Err(_) => PlayOutcome::Rejected,
                };
                playback.write().resolve_play(request, outcome);
            });
        }
        Err(_) => {
            // Reached from inside an effect that is still reading the arena;
            // defer the write one tick to avoid a borrow loop.
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(0).await;
                playback
                    .write()
                    .resolve_play(request, PlayOutcome::Rejected);
            });
        }
    }
}
