use dioxus::prelude::*;

use crate::client::components::{Footer, Navbar};
use crate::client::router::Route;

/// Layout wrapper for every route: navbar, page body, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen",
            Navbar {}
            main { class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
