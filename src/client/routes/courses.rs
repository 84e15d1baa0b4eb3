use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::client::components::{CourseCard, Page};
use crate::store::query::{self, CourseFilter, CourseSortKey};
use crate::store::AppState;

/// The public course catalog: search box, institution/type/mode filters,
/// sort select, and the card grid. Every dimension left unset matches
/// everything; dimensions AND-combine.
#[component]
pub fn Courses() -> Element {
    let store = use_context::<Signal<AppState>>();

    let mut search = use_signal(String::new);
    let mut institution = use_signal(String::new);
    let mut course_type = use_signal(String::new);
    let mut mode = use_signal(String::new);
    let mut sort_by = use_signal(|| CourseSortKey::Title.to_string());

    let courses = store.read().courses.clone();
    let institutions = query::institutions(&courses);
    let course_types = query::course_types(&courses);
    let modes = query::modes(&courses);

    let filter = CourseFilter {
        search: search(),
        institution: institution(),
        course_type: course_type(),
        mode: mode(),
    };
    let sort_key: CourseSortKey = sort_by().parse().unwrap_or_default();
    let results = query::catalog(&courses, &filter, sort_key);
    let result_count = results.len();

    rsx! {
        Title { "Courses | CampusGate" }
        Meta {
            name: "description",
            content: "Browse and filter courses from CampusGate partner institutions."
        }
        Page {
            div { class: "w-full max-w-[1440px] grid grid-cols-1 lg:grid-cols-4 gap-8 py-4",
                div { class: "lg:col-span-1",
                    div { class: "card bg-base-100 shadow-md p-6 flex flex-col gap-4 sticky top-4",
                        div { class: "flex items-center justify-between",
                            h2 { class: "text-lg font-semibold", "Filters" }
                            button {
                                class: "btn btn-ghost btn-xs",
                                onclick: move |_| {
                                    search.set(String::new());
                                    institution.set(String::new());
                                    course_type.set(String::new());
                                    mode.set(String::new());
                                },
                                "Clear All"
                            }
                        }
                        label { class: "input input-bordered flex items-center gap-2",
                            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                            input {
                                class: "grow",
                                placeholder: "Search courses...",
                                value: "{search}",
                                oninput: move |e| search.set(e.value()),
                            }
                        }
                        select {
                            class: "select select-bordered w-full",
                            value: "{institution}",
                            onchange: move |e| institution.set(e.value()),
                            option { value: "", "All Institutions" }
                            for name in institutions {
                                option { value: "{name}", "{name}" }
                            }
                        }
                        select {
                            class: "select select-bordered w-full",
                            value: "{course_type}",
                            onchange: move |e| course_type.set(e.value()),
                            option { value: "", "All Types" }
                            for name in course_types {
                                option { value: "{name}", "{name}" }
                            }
                        }
                        select {
                            class: "select select-bordered w-full",
                            value: "{mode}",
                            onchange: move |e| mode.set(e.value()),
                            option { value: "", "All Modes" }
                            for name in modes {
                                option { value: "{name}", "{name}" }
                            }
                        }
                    }
                }
                div { class: "lg:col-span-3 flex flex-col gap-4",
                    div { class: "flex items-center justify-between",
                        p { class: "text-sm", "{result_count} courses" }
                        select {
                            class: "select select-bordered select-sm",
                            value: "{sort_by}",
                            onchange: move |e| sort_by.set(e.value()),
                            option { value: "title", "Sort by Title" }
                            option { value: "institution", "Sort by Institution" }
                            option { value: "type", "Sort by Type" }
                            option { value: "duration", "Sort by Duration" }
                        }
                    }
                    if results.is_empty() {
                        div { class: "text-center py-16",
                            p { class: "text-lg font-medium", "No courses match your filters" }
                            p { class: "text-sm", "Try adjusting your search or clearing a filter." }
                        }
                    } else {
                        div { class: "grid grid-cols-1 xl:grid-cols-2 gap-6",
                            for course in results {
                                CourseCard { key: "{course.id}", course }
                            }
                        }
                    }
                }
            }
        }
    }
}
