//! County detail modal with its own year slider.
//!
//! Closes on the close button, a click on the backdrop (not the content) or
//! Escape. The backdrop takes focus when it opens so key presses reach it.

use crate::state::AppState;
use chr_view::modal::NO_YEAR_DATA;
use chr_view::{ModalView, ViewEvent};
use dioxus::prelude::*;

const VALUE_STYLE: &str = "font-weight: bold; color: #222;";
const MISSING_STYLE: &str = "color: #999; font-style: italic;";

#[component]
pub fn CountyModal() -> Element {
    let mut state = use_context::<AppState>();
    let Some(selected) = state.view.read().selected.clone() else {
        return rsx! {};
    };

    let record = match state.db.read().as_ref() {
        Some(db) => db
            .query_county_year(&selected.fips, selected.modal_year)
            .unwrap_or_else(|e| {
                log::warn!("[chr] modal lookup for {} failed: {}", selected.fips, e);
                None
            }),
        None => None,
    };
    let modal = ModalView::build(&selected, record.as_ref());
    let (min, max) = state.year_range();

    let on_year = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.dispatch(ViewEvent::SelectModalYear(year));
        }
    };

    let on_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            state.dispatch(ViewEvent::CloseModal);
        }
    };

    rsx! {
        div {
            id: "county-modal",
            tabindex: "-1",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 1000; outline: none;",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    log::warn!("[chr] modal could not take focus, Escape will not close it: {:?}", e);
                }
            },
            onclick: move |_| state.dispatch(ViewEvent::CloseModal),
            onkeydown: on_key,
            div {
                class: "modal-content",
                style: "background: #fff; border-radius: 8px; padding: 20px 24px; width: min(520px, 92vw); max-height: 85vh; overflow-y: auto; position: relative; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    style: "position: absolute; top: 8px; right: 12px; border: none; background: none; font-size: 22px; cursor: pointer; color: #666;",
                    onclick: move |_| state.dispatch(ViewEvent::CloseModal),
                    "\u{00d7}"
                }
                h2 { id: "modal-county-name", style: "margin: 0;", "{modal.county}" }
                p { id: "modal-county-state", style: "margin: 2px 0 12px 0; color: #666;", "{modal.state}" }
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 12px;",
                    label { r#for: "modal-year-slider", style: "font-weight: bold;", "Year:" }
                    input {
                        id: "modal-year-slider",
                        r#type: "range",
                        min: "{min}",
                        max: "{max}",
                        step: "1",
                        value: "{modal.year}",
                        oninput: on_year,
                    }
                    span { id: "modal-year-display", "{modal.year}" }
                }
                div {
                    id: "modal-metrics-container",
                    if !modal.has_record {
                        p { style: "color: #999; text-align: center;", "{NO_YEAR_DATA}" }
                    }
                    for row in modal.rows.iter() {
                        div {
                            class: "metric-row",
                            style: "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid #f0f0f0;",
                            div { class: "metric-name", "{row.icon} {row.label}" }
                            div {
                                class: if row.missing { "metric-value na" } else { "metric-value" },
                                style: if row.missing { MISSING_STYLE } else { VALUE_STYLE },
                                "{row.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
