//! Reset control.

use crate::state::AppState;
use chr_view::ViewEvent;
use dioxus::prelude::*;

/// Restores the default year, metric, state filter and zoom.
#[component]
pub fn ResetButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            id: "reset-button",
            style: "padding: 4px 12px; cursor: pointer;",
            onclick: move |_| state.dispatch(ViewEvent::Reset),
            "Reset"
        }
    }
}
