use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaClock, FaXmark};
use dioxus_free_icons::Icon;

use crate::model::ApplicationStatus;

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> Element {
    let class = match status {
        ApplicationStatus::Pending => "badge badge-warning",
        ApplicationStatus::Approved => "badge badge-success",
        ApplicationStatus::Rejected => "badge badge-error",
    };

    rsx! {
        span { class: "{class} gap-1",
            {match status {
                ApplicationStatus::Pending => rsx! { Icon { width: 12, height: 12, icon: FaClock } },
                ApplicationStatus::Approved => rsx! { Icon { width: 12, height: 12, icon: FaCheck } },
                ApplicationStatus::Rejected => rsx! { Icon { width: 12, height: 12, icon: FaXmark } },
            }}
            "{status}"
        }
    }
}
