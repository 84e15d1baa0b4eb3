use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page { class: "flex-col items-center justify-center gap-4",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "text-sm", "No page exists at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary w-36", "Go Home" }
        }
    }
}
