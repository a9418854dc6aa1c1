//! Summary statistics for the mapped metric and year.

use crate::state::AppState;
use chr_view::panels::NO_INSIGHTS_DATA;
use chr_view::Insights;
use dioxus::prelude::*;

#[component]
pub fn InsightsPanel() -> Element {
    let state = use_context::<AppState>();
    let metric = use_memo(move || state.view.read().metric);
    let year = use_memo(move || state.view.read().year);
    let insights = Insights::build(&state.year_records.read(), metric(), year());

    rsx! {
        div {
            id: "insights-content",
            style: "padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px; font-size: 13px;",
            h3 { style: "margin: 0 0 6px 0; font-size: 15px;", "Insights" }
            {
                match insights {
                    Insights::NoData => rsx! { p { "{NO_INSIGHTS_DATA}" } },
                    Insights::Stats { metric_name, year, mean, median, min, max, count } => rsx! {
                        p {
                            strong { "{metric_name}" }
                            " statistics for "
                            strong { "{year}" }
                            ":"
                        }
                        ul {
                            style: "margin: 4px 0; padding-left: 20px;",
                            li { strong { "Mean: " } "{mean}" }
                            li { strong { "Median: " } "{median}" }
                            li { strong { "Range: " } "{min} to {max}" }
                            li { strong { "Counties with data: " } "{count}" }
                        }
                        p {
                            style: "color: #666;",
                            "Use the controls above to explore different health metrics and years."
                        }
                    },
                }
            }
        }
    }
}
