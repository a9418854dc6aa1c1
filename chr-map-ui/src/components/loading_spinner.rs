//! Placeholder shown while geography and health data load.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading",
            style: "height: 400px; display: flex; flex-direction: column; justify-content: center; align-items: center; gap: 8px; color: #666; background: #fafafa;",
            div {
                style: "width: 28px; height: 28px; border: 3px solid #ddd; border-top-color: #4A90D9; border-radius: 50%;",
            }
            span { "Loading county boundaries and health data..." }
        }
    }
}
