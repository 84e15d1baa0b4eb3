use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer bg-base-200 p-8 flex flex-wrap justify-between",
            div {
                p { class: "font-semibold", "CampusGate" }
                p { class: "text-sm",
                    "Connecting students with courses from trusted partner institutions."
                }
            }
            ul { class: "flex gap-4 text-sm",
                li { Link { to: Route::Courses {}, "Course Catalog" } }
                li { Link { to: Route::Partners {}, "Partner Institutions" } }
                li { Link { to: Route::About {}, "About Us" } }
            }
        }
    }
}
