use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        Title { "About | CampusGate" }
        Meta {
            name: "description",
            content: "What CampusGate does and how it works."
        }
        Page {
            div { class: "max-w-2xl flex flex-col gap-4 py-8",
                h1 { class: "text-3xl font-bold", "About CampusGate" }
                p {
                    "CampusGate is an admissions middleware: a single place where students
                    discover courses from our partner institutions, submit applications, and
                    follow their progress, while institution administrators review and decide
                    on each application."
                }
                p {
                    "Students apply once with their contact details and the details travel
                    with the application, so reviewers always see exactly what was submitted.
                    Decisions appear in the student's dashboard the moment they are made."
                }
                p {
                    "Partner institutions keep full control of their catalog: courses and
                    institution profiles are managed from the admin console."
                }
                Link { to: Route::Courses {}, class: "btn btn-primary w-48", "Explore Courses" }
            }
        }
    }
}
