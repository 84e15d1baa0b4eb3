use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::model::Partner;
use crate::store::AppState;

/// Partner directory management, same list-plus-form shape as the course
/// console.
#[component]
pub fn PartnerManagement() -> Element {
    let mut store = use_context::<Signal<AppState>>();

    let mut editing = use_signal(|| Option::<String>::None);
    let mut show_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut profile_image = use_signal(String::new);
    let mut description = use_signal(String::new);

    let reset_form = use_callback(move |_: ()| {
        editing.set(None);
        show_form.set(false);
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        address.set(String::new());
        profile_image.set(String::new());
        description.set(String::new());
    });

    let partners = store.read().partners.clone();
    let total = partners.len();

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex items-center justify-between",
                p { class: "text-sm", "{total} partners" }
                button {
                    class: "btn btn-primary btn-sm flex gap-2",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    Icon { width: 12, height: 12, icon: FaPlus }
                    "Add Partner"
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "" }
                        }
                    }
                    tbody {
                        {partners.iter().map(|partner| {
                            let edit_partner = partner.clone();
                            let delete_id = partner.id.clone();
                            rsx! {
                                tr { key: "{partner.id}",
                                    td { p { class: "font-medium", "{partner.name}" } }
                                    td { "{partner.email}" }
                                    td { "{partner.phone}" }
                                    td {
                                        div { class: "flex gap-2",
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                onclick: move |_| {
                                                    editing.set(Some(edit_partner.id.clone()));
                                                    name.set(edit_partner.name.clone());
                                                    email.set(edit_partner.email.clone());
                                                    phone.set(edit_partner.phone.clone());
                                                    address.set(edit_partner.address.clone());
                                                    profile_image.set(edit_partner.profile_image.clone());
                                                    description.set(
                                                        edit_partner.description.clone().unwrap_or_default(),
                                                    );
                                                    show_form.set(true);
                                                },
                                                Icon { width: 12, height: 12, icon: FaPenToSquare }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                onclick: move |_| {
                                                    tracing::info!("deleting partner {delete_id}");
                                                    store.write().delete_partner(&delete_id);
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
                            if editing().is_some() { "Edit Partner" } else { "Add Partner" }
                        }
                        form {
                            class: "flex flex-col gap-3",
                            onsubmit: move |_| {
                                let mut state = store.write();
                                let id = match editing() {
                                    Some(id) => id,
                                    None => state.mint_id(),
                                };
                                let partner = Partner {
                                    id: id.clone(),
                                    name: name(),
                                    email: email(),
                                    phone: phone(),
                                    address: address(),
                                    profile_image: profile_image(),
                                    description: if description().is_empty() {
                                        None
                                    } else {
                                        Some(description())
                                    },
                                };
                                if editing().is_some() {
                                    tracing::info!("updating partner {id}");
                                    state.update_partner(&id, partner);
                                } else {
                                    tracing::info!("adding partner {id}");
                                    state.add_partner(partner);
                                }
                                drop(state);
                                reset_form.call(());
                            },
                            label { class: "form-control",
                                span { class: "label-text", "Name" }
                                input {
                                    class: "input input-bordered",
                                    required: true,
                                    value: "{name}",
                                    oninput: move |e| name.set(e.value()),
                                }
                            }
                            div { class: "grid grid-cols-2 gap-3",
                                label { class: "form-control",
                                    span { class: "label-text", "Email" }
                                    input {
                                        class: "input input-bordered",
                                        r#type: "email",
                                        required: true,
                                        value: "{email}",
                                        oninput: move |e| email.set(e.value()),
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
                            label { class: "form-control",
                                span { class: "label-text", "Profile Image URL" }
                                input {
                                    class: "input input-bordered",
                                    r#type: "url",
                                    value: "{profile_image}",
                                    oninput: move |e| profile_image.set(e.value()),
                                }
                            }
                            label { class: "form-control",
                                span { class: "label-text", "Description" }
                                textarea {
                                    class: "textarea textarea-bordered",
                                    value: "{description}",
                                    oninput: move |e| description.set(e.value()),
                                }
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
