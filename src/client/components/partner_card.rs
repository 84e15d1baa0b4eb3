use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaLocationDot, FaPhone};
use dioxus_free_icons::Icon;

use crate::model::Partner;

#[component]
pub fn PartnerCard(partner: Partner) -> Element {
    rsx! {
        div { class: "card bg-base-100 shadow-md hover:shadow-xl transition-shadow",
            div { class: "card-body",
                div { class: "flex items-center gap-4",
                    div { class: "avatar",
                        div { class: "w-16 rounded-full",
                            img {
                                src: "{partner.profile_image}",
                                alt: "{partner.name}",
                            }
                        }
                    }
                    h3 { class: "card-title", "{partner.name}" }
                }
                if let Some(description) = &partner.description {
                    p { class: "text-sm", "{description}" }
                }
                ul { class: "flex flex-col gap-1 text-sm",
                    li { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaEnvelope }
                        "{partner.email}"
                    }
                    li { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaPhone }
                        "{partner.phone}"
                    }
                    li { class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{partner.address}"
                    }
                }
            }
        }
    }
}
