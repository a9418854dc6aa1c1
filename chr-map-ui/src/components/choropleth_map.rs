//! The county choropleth.
//!
//! Paths are projected once at load; each render only recomputes fills and
//! strokes through [`Scene::build`]. Wheel zooms around the pointer, drag
//! pans, and the click ending a drag does not open the modal. Pointer
//! positions are converted from CSS pixels to viewBox units using the
//! rendered width of the svg.

use crate::config::MapConfig;
use crate::state::AppState;
use chr_geo::zoom::{wheel_factor, DragGesture, SCALE_EXTENT};
use chr_view::{CountyPaint, Scene, SelectedCounty, ViewEvent};
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use std::rc::Rc;

/// Open the modal for `fips`, naming it from its records or the map.
fn select_county(mut state: AppState, fips: &str) {
    let history = match state.db.read().as_ref() {
        Some(db) => db.query_county_history(fips).unwrap_or_else(|e| {
            log::warn!("[chr] history lookup for {} failed: {}", fips, e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    let feature_name = state.map.read().as_ref().and_then(|map| {
        map.counties
            .iter()
            .find(|c| c.fips == fips)
            .and_then(|c| c.name.clone())
    });
    let selected = SelectedCounty::resolve(fips, feature_name.as_deref(), &history, state.latest_year());
    state.dispatch(ViewEvent::SelectCounty(selected));
}

/// `swallow_click` is set when the last press turned into a drag.
#[component]
fn CountyPath(paint: CountyPaint, transition: String, swallow_click: Signal<bool>) -> Element {
    let mut state = use_context::<AppState>();
    let hovered = paint.fips.clone();
    let clicked = paint.fips.clone();

    rsx! {
        path {
            class: "county",
            d: "{paint.path}",
            fill: "{paint.fill}",
            stroke: "{paint.stroke.color}",
            stroke_width: "{paint.stroke.width}",
            style: "transition: {transition}; cursor: pointer; vector-effect: non-scaling-stroke;",
            onmouseover: move |_| state.dispatch(ViewEvent::HoverCounty(Some(hovered.clone()))),
            onmouseout: move |_| state.dispatch(ViewEvent::HoverCounty(None)),
            onclick: move |_| {
                if !swallow_click() {
                    select_county(state, &clicked);
                }
            },
        }
    }
}

#[component]
pub fn ChoroplethMap() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<MapConfig>();
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut drag: Signal<Option<DragGesture>> = use_signal(|| None);
    let mut swallow_click = use_signal(|| false);
    // viewBox units per CSS pixel
    let mut units_per_px = use_signal(|| 1.0_f64);

    let view = state.view.read().clone();
    let scene = match state.map.read().as_ref() {
        Some(map) => Scene::build(map, &state.year_records.read(), &view),
        None => return rsx! {},
    };
    let transition = config.fill_transition();
    let (width, height) = (config.width, config.height);

    let on_mounted = move |evt: MountedEvent| async move {
        let data = evt.data();
        if let Ok(rect) = data.get_client_rect().await {
            if rect.size.width > 0.0 {
                units_per_px.set(width / rect.size.width);
            }
        }
        mounted.set(Some(data));
    };

    let on_wheel = move |evt: WheelEvent| {
        evt.prevent_default();
        let (delta_y, mode) = match evt.delta() {
            WheelDelta::Pixels(v) => (v.y, 0),
            WheelDelta::Lines(v) => (v.y, 1),
            WheelDelta::Pages(v) => (v.y, 2),
        };
        let factor = wheel_factor(delta_y, mode, evt.modifiers().ctrl());
        let client = evt.client_coordinates();
        spawn(async move {
            let mut anchor = (width / 2.0, height / 2.0);
            if let Some(data) = mounted() {
                if let Ok(rect) = data.get_client_rect().await {
                    if rect.size.width > 0.0 {
                        let scale = width / rect.size.width;
                        units_per_px.set(scale);
                        anchor = ((client.x - rect.origin.x) * scale, (client.y - rect.origin.y) * scale);
                    }
                }
            }
            let zoom = state.view.read().zoom.zoom_at(factor, anchor, SCALE_EXTENT);
            state.dispatch(ViewEvent::Zoom(zoom));
        });
    };

    let on_mouse_down = move |evt: MouseEvent| {
        let p = evt.client_coordinates();
        swallow_click.set(false);
        drag.set(Some(DragGesture::new((p.x, p.y))));
    };

    let on_mouse_move = move |evt: MouseEvent| {
        let Some(mut gesture) = drag() else {
            return;
        };
        let p = evt.client_coordinates();
        let (dx, dy) = gesture.move_to((p.x, p.y));
        drag.set(Some(gesture));
        if (dx, dy) == (0.0, 0.0) {
            return;
        }
        let scale = units_per_px();
        let zoom = state.view.read().zoom.pan(dx * scale, dy * scale);
        state.dispatch(ViewEvent::Zoom(zoom));
    };

    // mouseup runs before the browser's click on the county under the pointer
    let on_mouse_up = move |_| {
        if let Some(gesture) = drag() {
            swallow_click.set(gesture.swallows_click());
        }
        drag.set(None);
    };

    rsx! {
        svg {
            id: "map-svg",
            view_box: "{scene.view_box}",
            style: "width: 100%; height: auto; display: block; background: #fafafa; cursor: grab; user-select: none;",
            onmounted: on_mounted,
            onwheel: on_wheel,
            onmousedown: on_mouse_down,
            onmousemove: on_mouse_move,
            onmouseup: on_mouse_up,
            onmouseleave: move |_| drag.set(None),
            g {
                class: "counties",
                transform: "{scene.transform}",
                for paint in scene.counties {
                    CountyPath {
                        key: "{paint.fips}",
                        paint: paint.clone(),
                        transition: transition.clone(),
                        swallow_click,
                    }
                }
            }
            g {
                class: "states",
                transform: "{scene.transform}",
                path {
                    class: "state-boundary",
                    d: "{scene.state_borders}",
                    fill: "none",
                    stroke: "#fff",
                    stroke_width: "1.5",
                    stroke_linejoin: "round",
                    style: "pointer-events: none; vector-effect: non-scaling-stroke;",
                }
            }
        }
    }
}
