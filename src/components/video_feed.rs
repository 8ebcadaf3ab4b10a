use crate::api::MediaItem;
use crate::components::{
    BoostIntentSignal, FeedPlaybackSignal, Icon, InteractionSignal, VideoPlayer,
};
use crate::feed::{FeedPlayback, FeedScrollTracker, InteractionGate};
use crate::utils::format_count;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

pub const FEED_CONTAINER_ID: &str = "feed-scroll";

/// The snap-scrolling feed. Owns the scroll container, feeds its offset
/// through the tracker, and applies the resulting active-index transitions to
/// the playback arena; everything per-item happens inside [`VideoPlayer`].
#[component]
pub fn VideoFeed() -> Element {
    let items = use_context::<Signal<Vec<MediaItem>>>();
    let mut playback = use_context::<FeedPlaybackSignal>().0;
    let interaction = use_context::<InteractionSignal>().0;
    let boost_intent = use_context::<BoostIntentSignal>().0;

    let tracker = use_signal(|| FeedScrollTracker::new(items.peek().len()));

    // Activate the first item once the feed is mounted. No gesture has
    // happened yet on a fresh load, so this attempt starts muted.
    use_effect(move || {
        if items.read().is_empty() {
            return;
        }
        if playback.peek().active_index().is_none() {
            let snapshot = interaction.peek().snapshot();
            playback.write().set_active(0, snapshot);
        }
    });

    let on_scroll = move |_| handle_feed_scroll(tracker, interaction, playback);

    rsx! {
        div {
            id: FEED_CONTAINER_ID,
            class: "feed-scroll",
            onscroll: on_scroll,
            for (index , item) in items.read().iter().cloned().enumerate() {
                div { key: "{item.id}", class: "feed-slot",
                    div { class: "player-frame",
                        VideoPlayer { item: item.clone(), index }

                        div { class: "item-overlay",
                            div { class: "creator-row",
                                div {
                                    class: "avatar",
                                    style: "background-image: url({item.creator.avatar})",
                                }
                                p { class: "handle", "@{item.creator.username}" }
                                // Follow and boost entry points only make sense
                                // on the item currently in view.
                                if playback.read().active_index() == Some(index) {
                                    button { class: "follow-button", "Follow" }
                                    button {
                                        class: "boost-button",
                                        onclick: {
                                            let item = item.clone();
                                            let mut boost_intent = boost_intent.clone();
                                            move |evt: Event<MouseData>| {
                                                evt.stop_propagation();
                                                boost_intent.set(Some(item.clone()));
                                            }
                                        },
                                        Icon {
                                            name: "stars".to_string(),
                                            class: "icon-sm".to_string(),
                                        }
                                        span { "Boost" }
                                    }
                                }
                            }
                            p { class: "title", "{item.title}" }
                        }

                        div { class: "action-rail",
                            button { class: "action",
                                div { class: "bubble",
                                    Icon {
                                        name: "heart".to_string(),
                                        class: "icon-sm".to_string(),
                                    }
                                }
                                span { "{format_count(item.likes)}" }
                            }
                            button { class: "action",
                                div { class: "bubble",
                                    Icon {
                                        name: "comment".to_string(),
                                        class: "icon-sm".to_string(),
                                    }
                                }
                                span { "{format_count(item.comments)}" }
                            }
                            button { class: "action",
                                div { class: "bubble",
                                    Icon {
                                        name: "share".to_string(),
                                        class: "icon-sm".to_string(),
                                    }
                                }
                                span { "{format_count(item.shares)}" }
                            }
                            button {
                                class: "action",
                                onclick: {
                                    let item = item.clone();
                                    let mut boost_intent = boost_intent.clone();
                                    move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        boost_intent.set(Some(item.clone()));
                                    }
                                },
                                div { class: "bubble boost",
                                    Icon {
                                        name: "stars".to_string(),
                                        class: "icon-sm".to_string(),
                                    }
                                }
                                span { "{format_count(item.boosts)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Scroll handler body: every scroll is a gesture, and a slot change
/// deactivates the old item and activates the new one in the same step.
#[cfg(target_arch = "wasm32")]
fn handle_feed_scroll(
    mut tracker: Signal<FeedScrollTracker>,
    mut interaction: Signal<InteractionGate>,
    mut playback: Signal<FeedPlayback>,
) {
    if !interaction.peek().has_occurred() {
        interaction.write().mark();
    }

    let Some(container) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FEED_CONTAINER_ID))
    else {
        return;
    };
    let scroll_top = container.scroll_top() as f64;
    let height = container.client_height() as f64;

    let transition = tracker.write().observe(scroll_top, height);
    if let Some(transition) = transition {
        let snapshot = interaction.peek().snapshot();
        playback.write().set_active(transition.current, snapshot);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_feed_scroll(
    _tracker: Signal<FeedScrollTracker>,
    _interaction: Signal<InteractionGate>,
    _playback: Signal<FeedPlayback>,
) {
}
