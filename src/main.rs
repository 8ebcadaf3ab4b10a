use dioxus::prelude::*;

mod api;
mod components;
mod diagnostics;
mod feed;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#0f0f0f" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
