use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::model::User;
use crate::store::SessionState;

/// There is no authentication backend: any credentials are accepted and a
/// session user is fabricated from the form. The administrator toggle sets
/// the role that the dashboard routes gate on.
#[component]
pub fn Login() -> Element {
    let mut session = use_context::<Signal<SessionState>>();
    let nav = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut as_admin = use_signal(|| false);

    rsx! {
        Title { "Login | CampusGate" }
        Meta {
            name: "description",
            content: "Sign in to apply for courses and track your applications."
        }
        Page { class: "items-center justify-center",
            div { class: "card bg-base-100 shadow-md w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title", "Sign In" }
                    form {
                        class: "flex flex-col gap-3",
                        onsubmit: move |_| {
                            // Ids only need to be unique within the session.
                            let suffix: String = rand::rng()
                                .sample_iter(&Alphanumeric)
                                .take(8)
                                .map(char::from)
                                .collect();
                            let user = User {
                                id: format!("user-{suffix}"),
                                email: email(),
                                full_name: full_name(),
                                phone: None,
                                address: None,
                                is_admin: as_admin(),
                            };
                            tracing::info!("fabricated session user {}", user.id);
                            let is_admin = user.is_admin;
                            session.write().login(user);
                            if is_admin {
                                nav.push(Route::AdminDashboard {});
                            } else {
                                nav.push(Route::StudentDashboard {});
                            }
                        },
                        label { class: "form-control",
                            span { class: "label-text", "Full Name" }
                            input {
                                class: "input input-bordered",
                                required: true,
                                value: "{full_name}",
                                oninput: move |e| full_name.set(e.value()),
                            }
                        }
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
                            span { class: "label-text", "Password" }
                            input {
                                class: "input input-bordered",
                                r#type: "password",
                                required: true,
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        label { class: "flex items-center gap-2 py-1",
                            input {
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: as_admin(),
                                onchange: move |e| as_admin.set(e.checked()),
                            }
                            span { class: "label-text", "Sign in as administrator" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Login" }
                    }
                }
            }
        }
    }
}
