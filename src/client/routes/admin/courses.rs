use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::model::{Course, CourseMode};
use crate::store::AppState;

const FALLBACK_IMAGE: &str =
    "https://images.pexels.com/photos/3184460/pexels-photo-3184460.jpeg?auto=compress&cs=tinysrgb&w=500";

/// Course catalog management: list plus an add/edit form over the full
/// course record. Saving an edit replaces the record wholesale.
#[component]
pub fn CourseManagement() -> Element {
    let mut store = use_context::<Signal<AppState>>();

    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut institution = use_signal(String::new);
    let mut course_type = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut mode = use_signal(|| CourseMode::Online.to_string());
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut featured = use_signal(|| false);

    // Callback so both the submit and cancel handlers can share it.
    let reset_form = use_callback(move |_: ()| {
        editing.set(None);
        show_form.set(false);
        title.set(String::new());
        institution.set(String::new());
        course_type.set(String::new());
        duration.set(String::new());
        mode.set(CourseMode::Online.to_string());
        description.set(String::new());
        image.set(String::new());
        featured.set(false);
    });

    let courses = store.read().courses.clone();
    let total = courses.len();

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex items-center justify-between",
                p { class: "text-sm", "{total} courses" }
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 12, height: 12, icon: FaPlus }
                    "Add Course"
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Institution" }
                            th { "Type" }
                            th { "Mode" }
                            th { "" }
                        }
                    }
                    tbody {
                        {courses.iter().map(|course| {
                            let edit_course = course.clone();
                            let delete_id = course.id.clone();
                            rsx! {
                                tr { key: "{course.id}",
                                    td {
                                        p { class: "font-medium", "{course.title}" }
                                        if course.featured {
                                            span { class: "badge badge-primary badge-sm", "Featured" }
                                        }
                                    }
                                    td { "{course.institution}" }
                                    td { "{course.course_type}" }
                                    td { "{course.mode}" }
                                    td {
                                        div { class: "flex gap-2",
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                onclick: move |_| {
                                                    editing.set(Some(edit_course.id.clone()));
                                                    title.set(edit_course.title.clone());
                                                    institution.set(edit_course.institution.clone());
                                                    course_type.set(edit_course.course_type.clone());
                                                    duration.set(edit_course.duration.clone());
                                                    mode.set(edit_course.mode.to_string());
                                                    description.set(edit_course.description.clone());
                                                    image.set(edit_course.image.clone());
                                                    featured.set(edit_course.featured);
                                                    show_form.set(true);
                                                },
                                                Icon { width: 12, height: 12, icon: FaPenToSquare }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                onclick: move |_| {
                                                    tracing::info!("deleting course {delete_id}");
                                                    store.write().delete_course(&delete_id);
                                                },
                                                Icon { width: 12, height: 12, icon: FaTrash }
                                            }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
            if show_form() {
                div { class: "modal modal-open",
                    div { class: "modal-box",
                        h3 { class: "text-lg font-bold",
                            if editing().is_some() { "Edit Course" } else { "Add Course" }
                        }
                        form {
                            class: "flex flex-col gap-3",
                            onsubmit: move |_| {
                                let mut state = store.write();
                                let id = match editing() {
                                    Some(id) => id,
                                    None => state.mint_id(),
                                };
                                let course = Course {
                                    id: id.clone(),
                                    title: title(),
                                    institution: institution(),
                                    course_type: course_type(),
                                    duration: duration(),
                                    mode: mode().parse().unwrap_or(CourseMode::Online),
                                    description: description(),
                                    image: if image().is_empty() {
                                        FALLBACK_IMAGE.to_string()
                                    } else {
                                        image()
                                    },
                                    featured: featured(),
                                };
                                if editing().is_some() {
                                    tracing::info!("updating course {id}");
                                    state.update_course(&id, course);
                                } else {
                                    tracing::info!("adding course {id}");
                                    state.add_course(course);
                                }
                                drop(state);
                                reset_form.call(());
                            },
                            label { class: "form-control",
                                span { class: "label-text", "Title" }
                                input {
                                    class: "input input-bordered",
                                    required: true,
                                    value: "{title}",
                                    oninput: move |e| title.set(e.value()),
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3",
                                label { class: "form-control",
                                    span { class: "label-text", "Institution" }
                                    input {
                                        class: "input input-bordered",
                                        required: true,
                                        value: "{institution}",
                                        oninput: move |e| institution.set(e.value()),
                                    }
                                }
                                label { class: "form-control",
                                    span { class: "label-text", "Type" }
                                    input {
                                        class: "input input-bordered",
                                        required: true,
                                        placeholder: "B.Tech, MBA, ...",
                                        value: "{course_type}",
                                        oninput: move |e| course_type.set(e.value()),
                                    }
                                }
                                label { class: "form-control",
                                    span { class: "label-text", "Duration" }
                                    input {
                                        class: "input input-bordered",
                                        required: true,
                                        placeholder: "2 years",
                                        value: "{duration}",
                                        oninput: move |e| duration.set(e.value()),
                                    }
                                }
                                label { class: "form-control",
                                    span { class: "label-text", "Mode" }
                                    select {
                                        class: "select select-bordered",
                                        value: "{mode}",
                                        onchange: move |e| mode.set(e.value()),
                                        option { value: "Online", "Online" }
                                        option { value: "Offline", "Offline" }
                                        option { value: "Hybrid", "Hybrid" }
                                    }
                                }
                            }
                            label { class: "form-control",
                                span { class: "label-text", "Description" }
                                textarea {
                                    class: "textarea textarea-bordered",
                                    required: true,
                                    value: "{description}",
                                    oninput: move |e| description.set(e.value()),
                                }
                            }
                            label { class: "form-control",
                                span { class: "label-text", "Image URL" }
                                input {
                                    class: "input input-bordered",
                                    r#type: "url",
                                    value: "{image}",
                                    oninput: move |e| image.set(e.value()),
                                }
                            }
                            label { class: "flex items-center gap-2 py-1",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox checkbox-sm",
                                    checked: featured(),
                                    onchange: move |e| featured.set(e.checked()),
                                }
                                span { class: "label-text", "Featured on the home page" }
                            }
                            div { class: "modal-action",
                                button {
                                    class: "btn",
                                    r#type: "button",
                                    onclick: move |_| reset_form.call(()),
                                    "Cancel"
                                }
                                button { class: "btn btn-primary", r#type: "submit", "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}
