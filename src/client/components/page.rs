use dioxus::prelude::*;

/// Full-height shell every route renders inside. The page body sits in a
/// flex row that centers it horizontally by default; pass a class to take
/// over the layout (column pages, vertically centered forms).
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("justify-center");

    rsx!(
        div {
            class: "min-h-screen p-4 flex {class}",
            {children}
        }
    )
}
