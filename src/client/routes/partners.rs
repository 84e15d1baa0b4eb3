use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::client::components::{Page, PartnerCard};
use crate::model::Partner;
use crate::store::{query, AppState};

#[component]
pub fn Partners() -> Element {
    let store = use_context::<Signal<AppState>>();
    let mut search = use_signal(String::new);

    let results: Vec<Partner> = store
        .read()
        .partners
        .iter()
        .filter(|p| query::partner_matches(p, &search()))
        .cloned()
        .collect();
    let result_count = results.len();

    rsx! {
        Title { "Partners | CampusGate" }
        Meta {
            name: "description",
            content: "The partner institutions whose courses are listed on CampusGate."
        }
        Page {
            div { class: "w-full max-w-[1200px] flex flex-col gap-6 py-4",
                div { class: "flex items-center justify-between gap-4",
                    h1 { class: "text-3xl font-bold", "Partner Institutions" }
                    label { class: "input input-bordered flex items-center gap-2 w-72",
                        Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            placeholder: "Search partners...",
                            value: "{search}",
                            oninput: move |e| search.set(e.value()),
                        }
                    }
                }
                p { class: "text-sm", "{result_count} partners" }
                if results.is_empty() {
                    div { class: "text-center py-16",
                        p { class: "text-lg font-medium", "No partners match your search" }
                    }
                } else {
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        for partner in results {
                            PartnerCard { key: "{partner.id}", partner }
                        }
                    }
                }
            }
        }
    }
}
