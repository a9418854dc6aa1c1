//! Year slider for the map.

use crate::state::AppState;
use chr_view::ViewEvent;
use dioxus::prelude::*;

#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let year = use_memo(move || state.view.read().year);
    let (min, max) = state.year_range();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.dispatch(ViewEvent::SelectYear(year));
        }
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px;",
            label {
                r#for: "year-slider",
                style: "font-weight: bold;",
                "Year:"
            }
            input {
                id: "year-slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{year}",
                oninput: on_input,
            }
            span { id: "year-display", "{year}" }
        }
    }
}
