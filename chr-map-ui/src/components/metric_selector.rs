//! Dropdown selector for the mapped metric.

use crate::state::AppState;
use chr_core::Metric;
use chr_view::ViewEvent;
use dioxus::prelude::*;

#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = use_memo(move || state.view.read().metric);

    let on_change = move |evt: Event<FormData>| match Metric::from_key(&evt.value()) {
        Some(metric) => state.dispatch(ViewEvent::SelectMetric(metric)),
        None => log::warn!("[chr] unknown metric key '{}'", evt.value()),
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px;",
            label {
                r#for: "metric-selector",
                style: "font-weight: bold;",
                "Metric:"
            }
            select {
                id: "metric-selector",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: metric.key(),
                        selected: metric == selected(),
                        {metric.name()}
                    }
                }
            }
        }
    }
}
