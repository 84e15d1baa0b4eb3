use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{CourseCard, Page};
use crate::client::router::Route;
use crate::model::Course;
use crate::store::AppState;

#[component]
pub fn Home() -> Element {
    let store = use_context::<Signal<AppState>>();

    let featured: Vec<Course> = store
        .read()
        .courses
        .iter()
        .filter(|c| c.featured)
        .cloned()
        .collect();
    let course_count = store.read().courses.len();
    let partner_count = store.read().partners.len();

    rsx! {
        Title { "CampusGate" }
        Meta {
            name: "description",
            content: "Education admissions portal connecting students with partner institution courses."
        }
        Page { class: "flex-col items-center gap-12",
            div { class: "flex flex-col items-center gap-4 py-16 text-center",
                h1 { class: "text-4xl font-bold", "Find Your Course. Shape Your Future." }
                p { class: "max-w-xl",
                    "Browse programs from {partner_count} partner institutions, apply in minutes,
                    and track every application from one dashboard."
                }
                div { class: "flex gap-2",
                    Link { to: Route::Courses {}, class: "btn btn-primary w-44",
                        "Browse {course_count} Courses"
                    }
                    Link { to: Route::Partners {}, class: "btn btn-outline w-44",
                        "Our Partners"
                    }
                }
            }
            if !featured.is_empty() {
                div { class: "w-full max-w-[1200px] flex flex-col gap-4",
                    h2 { class: "text-2xl font-semibold", "Featured Courses" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        for course in featured {
                            CourseCard { key: "{course.id}", course }
                        }
                    }
                }
            }
        }
    }
}
