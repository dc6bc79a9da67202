use std::fmt::Write;

use cube_color::Srgb;
use cube_types::LatticeCoord;
use iso_scene::{Background, Quad, SceneSink};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes a replayed scene into standalone SVG markup.
///
/// Each voxel becomes a `<g>` carrying its id and lattice coordinate, with
/// one `<polygon>` per visible face. Optional metadata is written into a
/// `<metadata>` element ahead of the drawing.
#[derive(Debug, Clone)]
pub struct SvgSink {
    width: f64,
    height: f64,
    scale: f64,
    metadata: Option<String>,
    body: String,
}

impl SvgSink {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            metadata: None,
            body: String::new(),
        }
    }

    /// Attach a JSON blob to be emitted inside `<metadata>`.
    pub fn set_metadata(&mut self, json: impl Into<String>) {
        self.metadata = Some(json.into());
    }
}

impl SceneSink for SvgSink {
    fn clear(&mut self) {
        self.body.clear();
        self.scale = 1.0;
    }

    fn set_scale(&mut self, factor: f64) {
        self.scale = factor;
    }

    fn draw_background(&mut self, background: &Background) {
        // Writing to a String cannot fail.
        let _ = writeln!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(background.x),
            fmt_num(background.y),
            fmt_num(background.width),
            fmt_num(background.height),
            background.fill,
        );
    }

    fn begin_voxel(&mut self, id: u64, coord: LatticeCoord) {
        let _ = writeln!(
            self.body,
            r#"  <g data-id="{id}" data-x="{}" data-y="{}" data-z="{}">"#,
            coord.x, coord.y, coord.z,
        );
    }

    fn draw_quad(&mut self, quad: &Quad, stroke: Srgb, stroke_width: f64) {
        let points = quad
            .points
            .iter()
            .map(|[x, y]| format!("{},{}", fmt_num(*x), fmt_num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.body,
            r#"    <polygon points="{points}" fill="{}" stroke="{stroke}" stroke-width="{}" stroke-linejoin="round"/>"#,
            quad.fill,
            fmt_num(stroke_width),
        );
    }

    fn end_voxel(&mut self) {
        self.body.push_str("  </g>\n");
    }

    fn serialized(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-scale="{}">"#,
            fmt_num(self.scale),
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        if let Some(metadata) = &self.metadata {
            let _ = writeln!(out, "  <metadata>{}</metadata>", escape_text(metadata));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Two decimals, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
