//! Static SVG output: the choropleth plus its legend in one document.

use crate::legend::LegendModel;
use crate::scene::Scene;
use anyhow::Context;
use std::io::Write;

/// Height of the legend strip below the map.
const LEGEND_HEIGHT: f64 = 100.0;
const LEGEND_MARGIN_X: f64 = 100.0;
const LEGEND_MARGIN_TOP: f64 = 30.0;
const LEGEND_BAR_HEIGHT: f64 = 20.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write `scene` as a standalone SVG document of `width` x `height` with
/// `legend` drawn underneath.
pub fn write_svg<W: Write>(mut out: W, scene: &Scene, legend: &LegendModel, width: f64, height: f64) -> anyhow::Result<()> {
    let total_height = height + LEGEND_HEIGHT;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{total_height}" viewBox="0 0 {width} {total_height}">"#
    )?;
    writeln!(out, "<style>text {{ font-family: sans-serif; font-size: 11px; }}</style>")?;

    writeln!(out, r#"<g class="counties" transform="{}">"#, scene.transform)?;
    for county in &scene.counties {
        writeln!(
            out,
            r#"<path class="county" data-fips="{}" fill="{}" stroke="{}" stroke-width="{}" d="{}"/>"#,
            escape(&county.fips),
            county.fill,
            county.stroke.color,
            county.stroke.width,
            county.path
        )?;
    }
    writeln!(out, "</g>")?;
    if !scene.state_borders.is_empty() {
        writeln!(
            out,
            r##"<g class="states" transform="{}"><path fill="none" stroke="#fff" stroke-width="1.5" stroke-linejoin="round" d="{}"/></g>"##,
            scene.transform, scene.state_borders
        )?;
    }

    write_legend(&mut out, legend, width, height)?;
    writeln!(out, "</svg>")?;
    out.flush().context("failed to flush SVG output")?;
    Ok(())
}

fn write_legend<W: Write>(out: &mut W, legend: &LegendModel, width: f64, top: f64) -> anyhow::Result<()> {
    let bar_width = (width - 2.0 * LEGEND_MARGIN_X).max(0.0);

    writeln!(out, r#"<defs><linearGradient id="legend-gradient">"#)?;
    for stop in &legend.stops {
        writeln!(out, r#"<stop offset="{}%" stop-color="{}"/>"#, stop.offset_percent, stop.color)?;
    }
    writeln!(out, "</linearGradient></defs>")?;

    writeln!(
        out,
        r#"<g class="legend" transform="translate({},{})">"#,
        LEGEND_MARGIN_X,
        top + LEGEND_MARGIN_TOP
    )?;
    writeln!(
        out,
        r#"<text x="{}" y="-5" text-anchor="middle" font-weight="bold">{}</text>"#,
        bar_width / 2.0,
        escape(legend.title)
    )?;
    writeln!(
        out,
        r#"<rect width="{bar_width}" height="{LEGEND_BAR_HEIGHT}" fill="url(#legend-gradient)"/>"#
    )?;
    for tick in &legend.ticks {
        let x = tick.position * bar_width;
        writeln!(
            out,
            r##"<line x1="{x}" x2="{x}" y1="{LEGEND_BAR_HEIGHT}" y2="{}" stroke="#000"/>"##,
            LEGEND_BAR_HEIGHT + 6.0
        )?;
        writeln!(
            out,
            r#"<text x="{x}" y="{}" text-anchor="middle">{}</text>"#,
            LEGEND_BAR_HEIGHT + 18.0,
            escape(&tick.label)
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}
