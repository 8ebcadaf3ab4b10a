use crate::api::{submit_boost, BoostRequest};
use crate::components::BoostIntentSignal;
use dioxus::prelude::*;

const PRESET_AMOUNTS: [f64; 4] = [1.0, 5.0, 10.0, 20.0];

/// Picks the amount a confirm would submit: a custom entry wins over the
/// selected preset, and only representable numbers count. Positivity is the
/// payment collaborator's concern, not ours.
fn resolve_amount(custom: &str, selected: Option<f64>) -> Option<f64> {
    let custom = custom.trim();
    if !custom.is_empty() {
        return custom.parse::<f64>().ok().filter(|value| value.is_finite());
    }
    selected
}

/// Overlay for boosting the creator of the selected item. Confirming emits a
/// single `BoostRequest` command toward the payment collaborator and closes.
#[component]
pub fn BoostModal() -> Element {
    let mut intent = use_context::<BoostIntentSignal>().0;
    let mut selected = use_signal(|| None::<f64>);
    let mut custom = use_signal(String::new);

    let Some(item) = intent.read().clone() else {
        return rsx! {};
    };

    let amount = resolve_amount(&custom.read(), *selected.read());
    let confirm_label = match amount {
        Some(amount) => format!("Boost ${amount}"),
        None => "Boost".to_string(),
    };

    let mut close = move || {
        intent.set(None);
        selected.set(None);
        custom.set(String::new());
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| close(),
            div {
                class: "boost-modal",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { "Boost @{item.creator.username}!" }
                p { class: "subtitle", "Support this creator instantly" }

                div { class: "amounts",
                    for preset in PRESET_AMOUNTS {
                        button {
                            key: "{preset}",
                            class: if *selected.read() == Some(preset) && custom.read().is_empty() { "selected" } else { "" },
                            onclick: move |_| {
                                selected.set(Some(preset));
                                custom.set(String::new());
                            },
                            "${preset}"
                        }
                    }
                }

                input {
                    class: "custom-amount",
                    r#type: "number",
                    min: "1",
                    step: "1",
                    placeholder: "Enter custom amount",
                    value: "{custom}",
                    oninput: move |evt| custom.set(evt.value()),
                }

                div { class: "actions",
                    button { class: "cancel", onclick: move |_| close(), "Cancel" }
                    button {
                        class: "confirm",
                        disabled: amount.is_none(),
                        onclick: {
                            let creator_id = item.creator.id.clone();
                            move |_| {
                                let Some(amount) = resolve_amount(&custom.peek(), *selected.peek())
                                else {
                                    return;
                                };
                                submit_boost(&BoostRequest::new(creator_id.clone(), amount));
                                close();
                            }
                        },
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_applies_when_no_custom_entry() {
        assert_eq!(resolve_amount("", Some(5.0)), Some(5.0));
        assert_eq!(resolve_amount("   ", Some(10.0)), Some(10.0));
        assert_eq!(resolve_amount("", None), None);
    }

    #[test]
    fn custom_entry_overrides_the_preset() {
        assert_eq!(resolve_amount("42", Some(5.0)), Some(42.0));
        assert_eq!(resolve_amount("3.5", None), Some(3.5));
    }

    #[test]
    fn unrepresentable_entries_do_not_resolve() {
        assert_eq!(resolve_amount("lots", Some(5.0)), None);
        assert_eq!(resolve_amount("inf", None), None);
        assert_eq!(resolve_amount("NaN", None), None);
    }

    #[test]
    fn positivity_is_left_to_the_payment_collaborator() {
        assert_eq!(resolve_amount("-3", None), Some(-3.0));
        assert_eq!(resolve_amount("0", None), Some(0.0));
    }
}
