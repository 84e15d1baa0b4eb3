use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaBookOpen, FaUser};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{Page, StatusBadge};
use crate::client::router::Route;
use crate::model::{ApplicationStatus, User};
use crate::store::{AppState, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Applications,
    Notifications,
    Profile,
}

/// The student dashboard. Requires a logged-in non-admin user; anyone else
/// is redirected per the role-gating policy.
#[component]
pub fn StudentDashboard() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let nav = use_navigator();
    let mut tab = use_signal(|| Tab::Applications);

    let Some(user) = session.read().user.clone() else {
        nav.replace(Route::Login {});
        return rsx! {};
    };
    if user.is_admin {
        nav.replace(Route::AdminDashboard {});
        return rsx! {};
    }

    rsx! {
        Title { "Dashboard | CampusGate" }
        Meta {
            name: "description",
            content: "Track your course applications and notifications."
        }
        Page {
            div { class: "w-full max-w-[1000px] flex flex-col gap-6 py-4",
                h1 { class: "text-3xl font-bold", "Welcome back, {user.full_name}" }
                div { role: "tablist", class: "tabs tabs-bordered",
                    button {
                        role: "tab",
                        class: if tab() == Tab::Applications { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Applications),
                        Icon { width: 14, height: 14, icon: FaBookOpen }
                        "My Applications"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Notifications { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Notifications),
                        Icon { width: 14, height: 14, icon: FaBell }
                        "Notifications"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Profile { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Profile),
                        Icon { width: 14, height: 14, icon: FaUser }
                        "Profile"
                    }
                }
                {match tab() {
                    Tab::Applications => rsx! { ApplicationsTab { user: user.clone() } },
                    Tab::Notifications => rsx! { NotificationsTab { user: user.clone() } },
                    Tab::Profile => rsx! { ProfileTab { user: user.clone() } },
                }}
            }
        }
    }
}

#[component]
fn ApplicationsTab(user: User) -> Element {
    let mut store = use_context::<Signal<AppState>>();
    let applications = store.read().user_applications(&user.id);
    let total = applications.len();
    let pending = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Pending)
        .count();

    rsx! {
        div { class: "flex flex-col gap-4",
            p { class: "text-sm", "{total} applications, {pending} pending" }
            if applications.is_empty() {
                div { class: "card bg-base-100 shadow-md p-8 text-center flex flex-col items-center gap-2",
                    Icon { width: 32, height: 32, icon: FaBookOpen }
                    p { class: "font-medium", "No applications yet" }
                    p { class: "text-sm", "Explore the catalog and submit your first application." }
                    Link { to: Route::Courses {}, class: "btn btn-primary w-44", "Browse Courses" }
                }
            } else {
                {applications.iter().map(|application| {
                    let application_id = application.id.clone();
                    let withdrawable = application.status == ApplicationStatus::Pending;
                    let applied_on = application.applied_at.format("%b %e, %Y").to_string();
                    rsx! {
                        div { key: "{application.id}",
                            class: "card bg-base-100 shadow-md p-4 flex flex-row items-center justify-between",
                            div { class: "flex flex-col gap-1",
                                p { class: "font-semibold", "{application.course_title}" }
                                p { class: "text-sm", "{application.institution}" }
                                p { class: "text-xs", "Applied {applied_on}" }
                            }
                            div { class: "flex items-center gap-3",
                                StatusBadge { status: application.status }
                                if withdrawable {
                                    button {
                                        class: "btn btn-outline btn-error btn-sm",
                                        onclick: move |_| {
                                            tracing::info!("withdrawing application {application_id}");
                                            store.write().remove_application(&application_id);
                                        },
                                        "Withdraw"
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn NotificationsTab(user: User) -> Element {
    let mut store = use_context::<Signal<AppState>>();
    let notifications = store.read().user_notifications(&user.id);

    rsx! {
        div { class: "flex flex-col gap-2",
            if notifications.is_empty() {
                div { class: "card bg-base-100 shadow-md p-8 text-center",
                    p { class: "font-medium", "No notifications" }
                    p { class: "text-sm", "Updates about your applications will appear here." }
                }
            } else {
                {notifications.iter().map(|notification| {
                    let notification_id = notification.id.clone();
                    let received_at = notification.created_at.format("%b %e, %Y %H:%M").to_string();
                    let card = if notification.read {
                        "card bg-base-100 shadow-sm p-4 cursor-pointer"
                    } else {
                        "card bg-base-200 shadow-md p-4 cursor-pointer border-l-4 border-primary"
                    };
                    rsx! {
                        div { key: "{notification.id}",
                            class: "{card}",
                            onclick: move |_| store.write().mark_notification_read(&notification_id),
                            div { class: "flex items-center justify-between",
                                p { class: "font-semibold", "{notification.title}" }
                                p { class: "text-xs", "{received_at}" }
                            }
                            p { class: "text-sm", "{notification.message}" }
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn ProfileTab(user: User) -> Element {
    let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());
    let address = user.address.clone().unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div { class: "card bg-base-100 shadow-md p-6 flex flex-col gap-2",
            h3 { class: "text-lg font-semibold", "Profile" }
            p { class: "text-sm", "Name: {user.full_name}" }
            p { class: "text-sm", "Email: {user.email}" }
            p { class: "text-sm", "Phone: {phone}" }
            p { class: "text-sm", "Address: {address}" }
        }
    }
}
