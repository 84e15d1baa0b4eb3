use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaGraduationCap, FaRightFromBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::router::Route;
use crate::store::{AppState, SessionState};

#[component]
pub fn Navbar() -> Element {
    let store = use_context::<Signal<AppState>>();
    let mut session = use_context::<Signal<SessionState>>();
    let nav = use_navigator();

    let user = session.read().user.clone();
    let unread = user
        .as_ref()
        .map(|u| store.read().unread_notification_count(&u.id))
        .unwrap_or(0);
    let bell_target = if session.read().is_admin() {
        Route::AdminDashboard {}
    } else {
        Route::StudentDashboard {}
    };

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2 px-2",
                    Icon { width: 24, height: 24, icon: FaGraduationCap }
                    p { class: "text-xl font-semibold", "CampusGate" }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "flex gap-4",
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Courses {}, "Courses" } }
                    li { Link { to: Route::Partners {}, "Partners" } }
                    li { Link { to: Route::About {}, "About" } }
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = user {
                    div { class: "flex items-center gap-3",
                        Link {
                            to: bell_target,
                            class: "indicator p-1",
                            Icon { width: 20, height: 20, icon: FaBell }
                            if unread > 0 {
                                span { class: "badge badge-primary badge-sm indicator-item",
                                    "{unread}"
                                }
                            }
                        }
                        p { class: "text-sm", "{user.full_name}" }
                        button {
                            class: "btn btn-outline btn-sm flex gap-2",
                            onclick: move |_| {
                                tracing::info!("session user logged out");
                                session.write().logout();
                                nav.push(Route::Home {});
                            },
                            Icon { width: 16, height: 16, icon: FaRightFromBracket }
                            "Logout"
                        }
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary btn-sm w-24",
                        "Login"
                    }
                }
            }
        }
    }
}
