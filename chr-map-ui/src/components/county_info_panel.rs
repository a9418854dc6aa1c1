//! Side panel describing the last hovered county.

use crate::state::AppState;
use chr_view::panels::{InfoPanel, INFO_PROMPT, NO_COUNTY_DATA};
use dioxus::prelude::*;

#[component]
pub fn CountyInfoPanel() -> Element {
    let state = use_context::<AppState>();
    let (inspected, metric, year) = {
        let view = state.view.read();
        (view.inspected.clone(), view.metric, view.year)
    };
    let panel = {
        let records = state.year_records.read();
        let record = inspected
            .as_deref()
            .and_then(|fips| records.iter().find(|r| r.fips == fips));
        InfoPanel::build(inspected.as_deref(), record, metric, year)
    };

    rsx! {
        div {
            id: "county-info",
            style: "padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px; font-size: 13px; min-height: 80px;",
            h3 { style: "margin: 0 0 6px 0; font-size: 15px;", "County Details" }
            {
                match panel {
                    InfoPanel::Prompt => rsx! { p { style: "color: #666;", "{INFO_PROMPT}" } },
                    InfoPanel::NoData => rsx! { p { em { "{NO_COUNTY_DATA}" } } },
                    InfoPanel::County { title, primary, year, secondary } => rsx! {
                        p { strong { "{title}" } }
                        p { strong { "{primary.label}: " } "{primary.value}" }
                        p { strong { "Year: " } "{year}" }
                        for line in secondary {
                            p { strong { "{line.label}: " } "{line.value}" }
                        }
                    },
                }
            }
        }
    }
}
