use crate::components::Icon;
use dioxus::prelude::*;

/// Fixed top bar. Presentation only; the search form is a shell and the menu
/// button has no drawer behind it yet.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "feed-header",
            div { class: "brand",
                button { aria_label: "Open menu",
                    Icon {
                        name: "menu".to_string(),
                        class: "icon-md".to_string(),
                    }
                }
                svg {
                    width: "28",
                    height: "20",
                    view_box: "0 0 28 20",
                    fill: "currentColor",
                    path { d: "M27.324 3.125c-.324-.913-.88-1.72-1.668-2.316C23.96 0 14 0 14 0S4.039 0 2.344.809c-.788.596-1.344 1.403-1.668 2.316C0 4.417 0 10 0 10s0 5.583.676 6.875c.324.913.88 1.72 1.668 2.316C4.04 20 14 20 14 20s9.961 0 11.656-.809c.788-.596 1.344-1.403 1.668-2.316C28 15.583 28 10 28 10s0-5.583-.676-6.875ZM11.2 14.286V5.714L18.4 10l-7.2 4.286Z" }
                }
                span { "Streamfeed" }
            }

            div { class: "search",
                input { r#type: "text", placeholder: "Search" }
                button { aria_label: "Search",
                    Icon {
                        name: "search".to_string(),
                        class: "icon-md".to_string(),
                    }
                }
            }

            button { aria_label: "More options",
                Icon {
                    name: "more".to_string(),
                    class: "icon-md".to_string(),
                }
            }
        }
    }
}
