//! Fatal load error, shown in place of the map.

use dioxus::prelude::*;

#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            style: "padding: 24px; margin: 8px 0; text-align: center; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
            p { style: "margin: 0 0 4px 0; font-weight: bold;", "The map could not be drawn." }
            p { style: "margin: 0; font-size: 13px;", "{message}" }
        }
    }
}
