//! SVG output for the World Sampler.

use std::fmt::Write;

use bayes_model::markup::{escape_xml, fmt_num};
use bayes_model::{PointStyle, Rgb, SamplePoint, WorldStats};

/// Renders worlds as a standalone SVG document.
///
/// Circles are emitted in insertion order, so later worlds paint on top.
/// `outline` draws a 1px stroke on one world (the hovered one). An empty
/// point set renders an empty canvas.
pub fn render_worlds(
    width: f64,
    height: f64,
    points: &[SamplePoint],
    styles: &[PointStyle],
    outline: Option<(usize, Rgb)>,
) -> String {
    let width = sanitize_dimension(width);
    let height = sanitize_dimension(height);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(width),
        h = fmt_num(height)
    );

    for (index, (point, style)) in points.iter().zip(styles).enumerate() {
        let stroke = match outline {
            Some((hovered, color)) if hovered == index => {
                format!(r#" stroke="{}" stroke-width="1""#, color)
            }
            _ => String::new(),
        };
        let _ = writeln!(
            svg,
            r#"  <circle data-world="{id}" cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" opacity="{opacity}"{stroke}/>"#,
            id = point.id,
            cx = fmt_num(point.x),
            cy = fmt_num(point.y),
            r = fmt_num(style.radius),
            fill = style.fill,
            opacity = fmt_num(style.opacity),
            stroke = stroke,
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders the four statistics as an SVG text block.
pub fn render_stats_panel(stats: &WorldStats) -> String {
    let rows = stats.display_rows();
    let width = 120.0 * rows.len() as f64;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="48" viewBox="0 0 {w} 48">"#,
        w = fmt_num(width)
    );
    for (column, (label, value)) in rows.iter().enumerate() {
        let x = 60.0 + 120.0 * column as f64;
        let _ = writeln!(
            svg,
            r#"  <text x="{x}" y="18" text-anchor="middle" font-weight="600">{label}</text>"#,
            x = fmt_num(x),
            label = escape_xml(label)
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{x}" y="40" text-anchor="middle">{value}</text>"#,
            x = fmt_num(x),
            value = escape_xml(value)
        );
    }
    svg.push_str("</svg>\n");
    svg
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
