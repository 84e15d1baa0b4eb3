use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaMagnifyingGlass, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::StatusBadge;
use crate::model::{Application, ApplicationDecision, ApplicationStatus};
use crate::store::query::{count_by_status, ApplicationFilter};
use crate::store::AppState;

/// Application review queue: search and status filter over every
/// submitted application, with approve/reject actions on pending rows.
#[component]
pub fn ApplicationReview() -> Element {
    let mut store = use_context::<Signal<AppState>>();
    let mut search = use_signal(String::new);
    let mut status = use_signal(String::new);

    let applications = store.read().applications.clone();
    let filter = ApplicationFilter {
        search: search(),
        status: status().parse().ok(),
    };
    let results: Vec<Application> = applications
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect();

    let pending = count_by_status(&applications, ApplicationStatus::Pending);
    let approved = count_by_status(&applications, ApplicationStatus::Approved);
    let rejected = count_by_status(&applications, ApplicationStatus::Rejected);

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap items-center gap-4",
                div { class: "flex gap-2",
                    span { class: "badge badge-warning", "{pending} Pending" }
                    span { class: "badge badge-success", "{approved} Approved" }
                    span { class: "badge badge-error", "{rejected} Rejected" }
                }
                label { class: "input input-bordered flex items-center gap-2 w-72",
                    Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    input {
                        class: "grow",
                        placeholder: "Search applications...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                    }
                }
                select {
                    class: "select select-bordered select-sm",
                    value: "{status}",
                    onchange: move |e| status.set(e.value()),
                    option { value: "", "All Statuses" }
                    option { value: "pending", "Pending" }
                    option { value: "approved", "Approved" }
                    option { value: "rejected", "Rejected" }
                }
            }
            if results.is_empty() {
                div { class: "card bg-base-100 shadow-md p-8 text-center",
                    p { class: "font-medium", "No applications found" }
                    p { class: "text-sm",
                        if filter.is_empty() {
                            "No applications have been submitted yet."
                        } else {
                            "Try adjusting your search or filter criteria."
                        }
                    }
                }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Course" }
                                th { "Applied" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            {results.iter().map(|application| {
                                let approve_id = application.id.clone();
                                let reject_id = application.id.clone();
                                let decidable = application.status == ApplicationStatus::Pending;
                                let applied_on = application.applied_at.format("%b %e, %Y").to_string();
                                rsx! {
                                    tr { key: "{application.id}",
                                        td {
                                            div { class: "flex flex-col",
                                                p { class: "font-medium", "{application.student_name}" }
                                                p { class: "text-xs", "{application.student_email}" }
                                            }
                                        }
                                        td {
                                            div { class: "flex flex-col",
                                                p { "{application.course_title}" }
                                                p { class: "text-xs", "{application.institution}" }
                                            }
                                        }
                                        td { "{applied_on}" }
                                        td { StatusBadge { status: application.status } }
                                        td {
                                            if decidable {
                                                div { class: "flex gap-2",
                                                    button {
                                                        class: "btn btn-success btn-xs flex gap-1",
                                                        onclick: move |_| {
                                                            tracing::info!("approving application {approve_id}");
                                                            store.write().update_application_status(
                                                                &approve_id,
                                                                ApplicationDecision::Approved,
                                                            );
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaCheck }
                                                        "Approve"
                                                    }
                                                    button {
                                                        class: "btn btn-error btn-xs flex gap-1",
                                                        onclick: move |_| {
                                                            tracing::info!("rejecting application {reject_id}");
                                                            store.write().update_application_status(
                                                                &reject_id,
                                                                ApplicationDecision::Rejected,
                                                            );
                                                        },
                                                        Icon { width: 12, height: 12, icon: FaXmark }
                                                        "Reject"
                                                    }
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
        }
    }
}
