//! Banner shown while the page runs on generated sample data.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DemoModeBanner() -> Element {
    let state = use_context::<AppState>();
    let source = state.data_source.read().clone();

    match source {
        Some(source) if source.is_demo() => rsx! {
            div {
                class: "demo-banner",
                role: "status",
                style: "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082; border-radius: 4px; font-size: 13px;",
                "{source}"
            }
        },
        _ => rsx! {},
    }
}
