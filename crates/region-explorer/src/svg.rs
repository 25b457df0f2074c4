//! SVG output for the Region Explorer.

use std::fmt::Write;

use bayes_model::markup::{escape_xml, fmt_num};

use crate::config::{CanvasConfig, LabelConfig};
use crate::layout::VennLayout;
use crate::styles::{CircleStyle, RegionStyles};

const CLIP_ID: &str = "intersection-clip";

/// Renders the diagram as a standalone SVG document.
///
/// The overlay is a circle on E's center, slightly larger than E so it
/// covers both strokes, clipped to H. A degenerate layout renders an empty
/// canvas.
pub fn render_venn(
    layout: &VennLayout,
    styles: &RegionStyles,
    canvas: &CanvasConfig,
    labels: &LabelConfig,
) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background-color:{bg};border:{bw}px solid {border}">"#,
        w = fmt_num(layout.width),
        h = fmt_num(layout.height),
        bg = canvas.background,
        bw = fmt_num(canvas.border_width),
        border = canvas.border,
    );

    if layout.is_degenerate() {
        svg.push_str("</svg>\n");
        return svg;
    }

    let r = layout.radius;
    write_circle(&mut svg, "h-circle", layout.h_center.x, layout.h_center.y, r, &styles.h);
    write_circle(&mut svg, "e-circle", layout.e_center.x, layout.e_center.y, r, &styles.e);

    let _ = writeln!(
        svg,
        r#"  <defs><clipPath id="{id}"><circle cx="{cx}" cy="{cy}" r="{r}"/></clipPath></defs>"#,
        id = CLIP_ID,
        cx = fmt_num(layout.h_center.x),
        cy = fmt_num(layout.h_center.y),
        r = fmt_num(r),
    );
    let _ = writeln!(
        svg,
        r#"  <circle class="intersection-highlight" cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" fill-opacity="{opacity}" clip-path="url(#{id})"/>"#,
        cx = fmt_num(layout.e_center.x),
        cy = fmt_num(layout.e_center.y),
        r = fmt_num(r + 2.0),
        fill = styles.overlay.fill,
        opacity = fmt_num(styles.overlay.opacity),
        id = CLIP_ID,
    );

    let h_label = layout.h_label();
    let e_label = layout.e_label();
    write_label(&mut svg, labels, h_label.x, h_label.y, &styles.h, "H");
    write_label(&mut svg, labels, e_label.x, e_label.y, &styles.e, "E");

    svg.push_str("</svg>\n");
    svg
}

fn write_circle(svg: &mut String, class: &str, cx: f64, cy: f64, r: f64, style: &CircleStyle) {
    let _ = writeln!(
        svg,
        r#"  <circle class="{class}" cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" fill-opacity="{fo}" stroke="{stroke}" stroke-width="{sw}" stroke-opacity="{so}"/>"#,
        class = class,
        cx = fmt_num(cx),
        cy = fmt_num(cy),
        r = fmt_num(r),
        fill = style.fill,
        fo = fmt_num(style.fill_opacity),
        stroke = style.stroke,
        sw = fmt_num(style.stroke_width),
        so = fmt_num(style.stroke_opacity),
    );
}

fn write_label(svg: &mut String, labels: &LabelConfig, x: f64, y: f64, style: &CircleStyle, text: &str) {
    let font_style = if labels.italic { "italic" } else { "normal" };
    let _ = writeln!(
        svg,
        r#"  <text x="{x}" y="{y}" text-anchor="middle" font-size="{size}" font-family="{family}" font-style="{font_style}" fill="{fill}">{text}</text>"#,
        x = fmt_num(x),
        y = fmt_num(y),
        size = fmt_num(labels.font_size),
        family = escape_xml(&labels.font_family),
        font_style = font_style,
        fill = style.stroke,
        text = text,
    );
}
