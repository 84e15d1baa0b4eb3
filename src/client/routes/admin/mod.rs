pub mod applications;
pub mod courses;
pub mod partners;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBell, FaBookOpen, FaBuildingColumns, FaChartLine, FaClock, FaInbox, FaPlus,
};
use dioxus_free_icons::Icon;

use crate::client::components::{Page, StatusBadge};
use crate::client::router::Route;
use crate::model::{ApplicationStatus, Notification, User};
use crate::store::query::{count_by_status, recent_applications};
use crate::store::{AppState, SessionState};

use applications::ApplicationReview;
use courses::CourseManagement;
use partners::PartnerManagement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Applications,
    Courses,
    Partners,
}

/// The admin console. Requires a logged-in admin user; anyone else is
/// redirected per the role-gating policy.
#[component]
pub fn AdminDashboard() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let nav = use_navigator();
    let mut tab = use_signal(|| Tab::Overview);

    let Some(user) = session.read().user.clone() else {
        nav.replace(Route::Login {});
        return rsx! {};
    };
    if !user.is_admin {
        nav.replace(Route::StudentDashboard {});
        return rsx! {};
    }

    rsx! {
        Title { "Admin | CampusGate" }
        Meta {
            name: "description",
            content: "Review applications and manage the course and partner catalog."
        }
        Page {
            div { class: "w-full max-w-[1200px] flex flex-col gap-6 py-4",
                h1 { class: "text-3xl font-bold", "Admin Console" }
                div { role: "tablist", class: "tabs tabs-bordered",
                    button {
                        role: "tab",
                        class: if tab() == Tab::Overview { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Overview),
                        Icon { width: 14, height: 14, icon: FaChartLine }
                        "Overview"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Applications { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Applications),
                        Icon { width: 14, height: 14, icon: FaInbox }
                        "Applications"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Courses { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Courses),
                        Icon { width: 14, height: 14, icon: FaBookOpen }
                        "Courses"
                    }
                    button {
                        role: "tab",
                        class: if tab() == Tab::Partners { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Partners),
                        Icon { width: 14, height: 14, icon: FaBuildingColumns }
                        "Partners"
                    }
                }
                {match tab() {
                    Tab::Overview => rsx! {
                        Overview { user: user.clone(), on_navigate: move |t| tab.set(t) }
                    },
                    Tab::Applications => rsx! { ApplicationReview {} },
                    Tab::Courses => rsx! { CourseManagement {} },
                    Tab::Partners => rsx! { PartnerManagement {} },
                }}
            }
        }
    }
}

/// Landing tab of the console: headline counts, the newest applications,
/// the admin's unread notifications, and shortcuts into the other tabs.
#[component]
fn Overview(user: User, on_navigate: EventHandler<Tab>) -> Element {
    let mut store = use_context::<Signal<AppState>>();

    let state = store.read();
    let course_count = state.courses.len();
    let partner_count = state.partners.len();
    let application_count = state.applications.len();
    let pending_count = count_by_status(&state.applications, ApplicationStatus::Pending);
    let recent = recent_applications(&state.applications, 5);
    let unread_count = state.unread_notification_count(&user.id);
    let unread: Vec<Notification> = state
        .user_notifications(&user.id)
        .into_iter()
        .filter(|n| !n.read)
        .take(3)
        .collect();
    drop(state);

    rsx! {
        div { class: "flex flex-col gap-6",
            div { class: "grid grid-cols-2 lg:grid-cols-4 gap-4",
                div { class: "card bg-base-100 shadow-md p-4 flex flex-row items-center gap-3",
                    Icon { width: 24, height: 24, icon: FaBookOpen }
                    div { class: "flex flex-col",
                        p { class: "text-sm", "Total Courses" }
                        p { class: "text-2xl font-bold", "{course_count}" }
                    }
                }
                div { class: "card bg-base-100 shadow-md p-4 flex flex-row items-center gap-3",
                    Icon { width: 24, height: 24, icon: FaBuildingColumns }
                    div { class: "flex flex-col",
                        p { class: "text-sm", "Partner Institutions" }
                        p { class: "text-2xl font-bold", "{partner_count}" }
                    }
                }
                div { class: "card bg-base-100 shadow-md p-4 flex flex-row items-center gap-3",
                    Icon { width: 24, height: 24, icon: FaChartLine }
                    div { class: "flex flex-col",
                        p { class: "text-sm", "Total Applications" }
                        p { class: "text-2xl font-bold", "{application_count}" }
                    }
                }
                div { class: "card bg-base-100 shadow-md p-4 flex flex-row items-center gap-3",
                    Icon { width: 24, height: 24, icon: FaClock }
                    div { class: "flex flex-col",
                        p { class: "text-sm", "Pending Applications" }
                        p { class: "text-2xl font-bold", "{pending_count}" }
                    }
                }
            }
            div { class: "card bg-base-100 shadow-md p-6 flex flex-col gap-3",
                div { class: "flex items-center justify-between",
                    h3 { class: "text-lg font-semibold", "Recent Applications" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_navigate.call(Tab::Applications),
                        "View All"
                    }
                }
                if recent.is_empty() {
                    p { class: "text-sm text-center py-4", "No applications yet" }
                } else {
                    {recent.iter().map(|application| {
                        let applied_on = application.applied_at.format("%b %e, %Y").to_string();
                        rsx! {
                            div { key: "{application.id}",
                                class: "flex items-center justify-between bg-base-200 rounded-lg p-3",
                                div { class: "flex flex-col",
                                    p { class: "font-medium", "{application.student_name}" }
                                    p { class: "text-sm", "{application.course_title}" }
                                    p { class: "text-xs", "Applied {applied_on}" }
                                }
                                StatusBadge { status: application.status }
                            }
                        }
                    })}
                }
            }
            if !unread.is_empty() {
                div { class: "card bg-base-100 shadow-md p-6 flex flex-col gap-3",
                    div { class: "flex items-center gap-2",
                        Icon { width: 16, height: 16, icon: FaBell }
                        h3 { class: "text-lg font-semibold", "Recent Notifications" }
                        span { class: "badge badge-error badge-sm", "{unread_count}" }
                    }
                    {unread.iter().map(|notification| {
                        let notification_id = notification.id.clone();
                        let received_at = notification.created_at.format("%b %e, %Y %H:%M").to_string();
                        rsx! {
                            div { key: "{notification.id}",
                                class: "p-3 bg-base-200 rounded-lg border-l-4 border-primary cursor-pointer",
                                onclick: move |_| store.write().mark_notification_read(&notification_id),
                                p { class: "font-medium", "{notification.title}" }
                                p { class: "text-sm", "{notification.message}" }
                                p { class: "text-xs", "{received_at}" }
                            }
                        }
                    })}
                }
            }
            div { class: "card bg-base-100 shadow-md p-6 flex flex-col gap-3",
                h3 { class: "text-lg font-semibold", "Quick Actions" }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-3",
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| on_navigate.call(Tab::Courses),
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Add New Course"
                    }
                    button {
                        class: "btn btn-secondary flex gap-2",
                        onclick: move |_| on_navigate.call(Tab::Partners),
                        Icon { width: 12, height: 12, icon: FaPlus }
                        "Add Partner"
                    }
                    button {
                        class: "btn btn-accent flex gap-2",
                        onclick: move |_| on_navigate.call(Tab::Applications),
                        Icon { width: 12, height: 12, icon: FaInbox }
                        "Review Applications"
                    }
                }
            }
        }
    }
}
