use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClock, FaLocationDot};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{ApplyForm, StatusBadge};
use crate::client::router::Route;
use crate::model::{ApplicationStatus, Course, CourseMode};
use crate::store::{AppState, SessionState};

#[component]
pub fn CourseCard(course: Course) -> Element {
    let mut store = use_context::<Signal<AppState>>();
    let session = use_context::<Signal<SessionState>>();
    let nav = use_navigator();
    let mut show_form = use_signal(|| false);

    let user = session.read().user.clone();
    let existing = user
        .as_ref()
        .and_then(|u| store.read().find_application(&u.id, &course.id));
    let existing_id = existing.as_ref().map(|a| a.id.clone()).unwrap_or_default();

    let mode_badge = match course.mode {
        CourseMode::Online => "badge badge-success",
        CourseMode::Offline => "badge badge-error",
        CourseMode::Hybrid => "badge badge-warning",
    };

    rsx! {
        div { class: "card bg-base-100 shadow-md hover:shadow-xl transition-shadow overflow-hidden",
            figure { class: "relative",
                img {
                    class: "w-full h-48 object-cover",
                    src: "{course.image}",
                    alt: "{course.title}",
                }
                span { class: "badge badge-primary absolute top-4 left-4", "{course.course_type}" }
                span { class: "{mode_badge} absolute top-4 right-4", "{course.mode}" }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{course.title}" }
                p { class: "text-sm font-medium", "{course.institution}" }
                p { class: "text-sm", "{course.description}" }
                div { class: "flex gap-4 text-sm",
                    span { class: "flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaClock }
                        "{course.duration}"
                    }
                    span { class: "flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{course.mode}"
                    }
                }
                div { class: "card-actions justify-end items-center",
                    if let Some(application) = existing {
                        StatusBadge { status: application.status }
                        if application.status == ApplicationStatus::Pending {
                            button {
                                class: "btn btn-outline btn-error btn-sm",
                                onclick: move |_| {
                                    tracing::info!("withdrawing application {existing_id}");
                                    store.write().remove_application(&existing_id);
                                },
                                "Withdraw"
                            }
                        }
                    } else {
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| {
                                if user.is_none() {
                                    nav.push(Route::Login {});
                                } else {
                                    show_form.set(true);
                                }
                            },
                            "Apply Now"
                        }
                    }
                }
            }
        }
        if show_form() {
            ApplyForm {
                course: course.clone(),
                on_close: move |_| show_form.set(false),
            }
        }
    }
}
