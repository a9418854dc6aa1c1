//! Gradient legend under the map.

use crate::state::AppState;
use chr_view::LegendModel;
use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 100.0;
const MARGIN_X: f64 = 100.0;
const MARGIN_TOP: f64 = 30.0;
const BAR_HEIGHT: f64 = 20.0;

#[component]
pub fn Legend() -> Element {
    let state = use_context::<AppState>();
    let metric = use_memo(move || state.view.read().metric);
    let legend = LegendModel::build(metric());
    let bar_width = WIDTH - 2.0 * MARGIN_X;
    let title_x = bar_width / 2.0;
    let tick_x: Vec<f64> = legend.ticks.iter().map(|t| t.position * bar_width).collect();

    rsx! {
        svg {
            id: "legend-svg",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            style: "width: 100%; max-width: 600px; height: auto; display: block;",
            defs {
                linearGradient {
                    id: "legend-gradient",
                    for stop in legend.stops.iter() {
                        stop {
                            offset: "{stop.offset_percent}%",
                            stop_color: "{stop.color}",
                        }
                    }
                }
            }
            g {
                transform: "translate({MARGIN_X},{MARGIN_TOP})",
                text {
                    x: "{title_x}",
                    y: "-5",
                    text_anchor: "middle",
                    font_weight: "bold",
                    font_size: "13",
                    "{legend.title}"
                }
                rect {
                    width: "{bar_width}",
                    height: "{BAR_HEIGHT}",
                    fill: "url(#legend-gradient)",
                }
                for (tick, x) in legend.ticks.iter().zip(tick_x) {
                    g {
                        transform: "translate({x},{BAR_HEIGHT})",
                        line { y2: "6", stroke: "#000" }
                        text {
                            y: "18",
                            text_anchor: "middle",
                            font_size: "10",
                            "{tick.label}"
                        }
                    }
                }
            }
        }
    }
}
