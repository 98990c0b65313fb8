//! Inline SVG rendering of the ideology spectrum chart.

use std::f64::consts::PI;
use std::fmt::Write;

use super::escape_html;
use crate::domain::dashboard::{ChartPoint, SpectrumChart};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 150.0;
const MARGIN: f64 = 40.0;
const TRACK_Y: f64 = 60.0;
const AXIS_Y: f64 = 105.0;

/// Horizontal pixel position of a score.
fn x_for(chart: &SpectrumChart, value: f64) -> f64 {
    MARGIN + chart.axis_fraction(value) * (WIDTH - 2.0 * MARGIN)
}

/// Five-pointed star centred on `(cx, cy)`.
fn star_points(cx: f64, cy: f64, outer: f64) -> String {
    let inner = outer * 0.45;
    (0..10)
        .map(|i| {
            let angle = -PI / 2.0 + f64::from(i) * PI / 5.0;
            let r = if i % 2 == 0 { outer } else { inner };
            format!("{:.1},{:.1}", cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_dot(svg: &mut String, chart: &SpectrumChart, point: &ChartPoint) -> std::fmt::Result {
    write!(
        svg,
        r#"<circle class="endpoint" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"><title>{}</title></circle>"#,
        x_for(chart, point.value),
        TRACK_Y,
        f64::from(point.marker.size()) / 2.0,
        point.marker.color(),
        escape_html(&point.label),
    )
}

/// Renders the chart as a standalone `<svg>` element.
pub fn render_spectrum_svg(chart: &SpectrumChart) -> Result<String, std::fmt::Error> {
    let mut svg = String::new();
    write!(
        svg,
        r#"<svg class="spectrum" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}">"#,
        w = WIDTH,
        h = HEIGHT,
        title = escape_html(chart.title),
    )?;
    write!(svg, "<title>{}</title>", escape_html(chart.title))?;

    // axis with integer ticks
    write!(
        svg,
        r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#888" stroke-width="1"/>"##,
        MARGIN,
        WIDTH - MARGIN,
        y = AXIS_Y,
    )?;
    let mut tick = chart.axis_min.ceil();
    while tick <= chart.axis_max {
        let x = x_for(chart, tick);
        write!(
            svg,
            r##"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="#888"/><text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text>"##,
            AXIS_Y,
            AXIS_Y + 5.0,
            AXIS_Y + 18.0,
            tick,
            x = x,
        )?;
        tick += 1.0;
    }
    write!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
        WIDTH / 2.0,
        HEIGHT - 5.0,
        escape_html(chart.axis_title),
    )?;

    // track between the endpoints
    write!(
        svg,
        r#"<line class="track" x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="grey" stroke-width="10" stroke-linecap="round"/>"#,
        x_for(chart, chart.conservative.value),
        x_for(chart, chart.liberal.value),
        y = TRACK_Y,
    )?;
    write_dot(&mut svg, chart, &chart.conservative)?;
    write_dot(&mut svg, chart, &chart.liberal)?;

    let selection = &chart.selection;
    write!(
        svg,
        r#"<polygon class="selection" points="{}" fill="{}" stroke="black" stroke-width="1"><title>{}</title></polygon>"#,
        star_points(
            x_for(chart, selection.value),
            TRACK_Y,
            f64::from(selection.marker.size()) / 2.0
        ),
        selection.marker.color(),
        escape_html(&selection.label),
    )?;

    svg.push_str("</svg>");
    Ok(svg)
}
