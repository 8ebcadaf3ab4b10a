use crate::api::{demo_feed, MediaItem};
use crate::components::{BoostModal, Header, VideoFeed};
use crate::feed::{FeedPlayback, InteractionGate};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

// Newtype wrappers so each piece of shared state keeps a distinct context type.
#[derive(Clone, Copy)]
pub struct InteractionSignal(pub Signal<InteractionGate>);
#[derive(Clone, Copy)]
pub struct FeedPlaybackSignal(pub Signal<FeedPlayback>);
#[derive(Clone, Copy)]
pub struct BoostIntentSignal(pub Signal<Option<MediaItem>>);

#[component]
pub fn AppShell() -> Element {
    let items = use_signal(|| demo_feed().to_vec());
    let playback =
        use_signal(|| FeedPlayback::new(demo_feed().iter().map(|item| item.id.clone())));
    let interaction = use_signal(InteractionGate::new);
    let boost_intent = use_signal(|| None::<MediaItem>);

    // Provide state via context
    use_context_provider(|| items);
    use_context_provider(|| FeedPlaybackSignal(playback));
    use_context_provider(|| InteractionSignal(interaction));
    use_context_provider(|| BoostIntentSignal(boost_intent));

    // Document-level click/touch listeners flip the interaction gate no matter
    // where on the page the gesture lands. Registered once, released on drop.
    #[cfg(target_arch = "wasm32")]
    {
        let listeners = use_hook(|| {
            Rc::new(RefCell::new(Vec::<(
                &'static str,
                Closure<dyn FnMut(web_sys::Event)>,
            )>::new()))
        });

        let registry = listeners.clone();
        let gate = interaction.clone();
        use_effect(move || {
            if !registry.borrow().is_empty() {
                return;
            }
            let Some(document) = window().and_then(|w| w.document()) else {
                return;
            };

            let runtime = Runtime::current();
            for event in ["click", "touchstart"] {
                let runtime = runtime.clone();
                let mut gate = gate.clone();
                let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    if !gate.peek().has_occurred() {
                        gate.write().mark();
                    }
                }) as Box<dyn FnMut(_)>);
                let _ = document
                    .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                registry.borrow_mut().push((event, callback));
            }
        });

        let registry = listeners.clone();
        use_drop(move || {
            let Some(document) = window().and_then(|w| w.document()) else {
                return;
            };
            for (event, callback) in registry.borrow_mut().drain(..) {
                let _ = document
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        });
    }

    rsx! {
        div { class: "app-root",
            Header {}
            VideoFeed {}
        }

        // Boost overlay - rendered only while an item is selected
        BoostModal {}
    }
}
