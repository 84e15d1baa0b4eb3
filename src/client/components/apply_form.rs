use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::{ApplicationDraft, Course};
use crate::store::{AppState, SessionState};

/// Modal form for submitting an application to a course.
///
/// Name and email come from the session user; phone and address are
/// editable here because login does not collect them. Everything entered
/// is captured into the application as a snapshot.
#[component]
pub fn ApplyForm(course: Course, on_close: EventHandler<()>) -> Element {
    let mut store = use_context::<Signal<AppState>>();
    let session = use_context::<Signal<SessionState>>();

    let session_user = session.read().user.clone();
    let mut phone = use_signal(|| {
        session_user
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut address = use_signal(|| {
        session_user
            .as_ref()
            .and_then(|u| u.address.clone())
            .unwrap_or_default()
    });

    let Some(user) = session_user else {
        return rsx! {};
    };

    let submit_user = user.clone();
    let submit_course = course.clone();

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Apply for {course.title}" }
                p { class: "text-sm py-2", "{course.institution} • {course.duration} • {course.mode}" }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: move |_| {
                        let application = store.write().submit_application(ApplicationDraft {
                            student_id: submit_user.id.clone(),
                            course_id: submit_course.id.clone(),
                            student_name: submit_user.full_name.clone(),
                            student_email: submit_user.email.clone(),
                            student_phone: phone(),
                            student_address: address(),
                            course_title: submit_course.title.clone(),
                            institution: submit_course.institution.clone(),
                        });
                        tracing::info!("submitted application {}", application.id);
                        on_close.call(());
                    },
                    label { class: "form-control",
                        span { class: "label-text", "Full Name" }
                        input {
                            class: "input input-bordered",
                            value: "{user.full_name}",
                            readonly: true,
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Email" }
                        input {
                            class: "input input-bordered",
                            value: "{user.email}",
                            readonly: true,
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Phone" }
                        input {
                            class: "input input-bordered",
                            r#type: "tel",
                            required: true,
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Address" }
                        input {
                            class: "input input-bordered",
                            required: true,
                            value: "{address}",
                            oninput: move |e| address.set(e.value()),
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Submit Application" }
                    }
                }
            }
        }
    }
}
