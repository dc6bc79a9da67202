use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode SVG markup as a `data:` URL suitable for a download link.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}
