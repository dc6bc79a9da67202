use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cube_types::{GenerateParams, Shape};
use iso_scene::SceneSink;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scene_engine::{EngineConfig, SceneCompositor};
use scene_export::*;

fn compositor(size: usize, shape: Shape, probability: f64) -> SceneCompositor {
    let mut compositor = SceneCompositor::new(EngineConfig::default());
    compositor.attach().unwrap();
    compositor
        .generate(
            GenerateParams::new(size, shape, probability, "#c86432"),
            &mut ChaCha8Rng::seed_from_u64(11),
        )
        .unwrap();
    compositor
}

// ── SVG markup ───────────────────────────────────────────────────────────

#[test]
fn svg_has_namespace_and_canvas_size() {
    let c = compositor(3, Shape::Asymmetric, 1.0);
    let svg = export_svg(c.scene().unwrap(), &ExportMetadata::new("test")).unwrap();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="800""#));
    assert!(svg.contains(r#"data-scale="100""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn one_group_and_three_polygons_per_voxel() {
    let c = compositor(3, Shape::Asymmetric, 1.0);
    let svg = export_svg(c.scene().unwrap(), &ExportMetadata::new("test")).unwrap();
    assert_eq!(svg.matches("<g ").count(), 27);
    assert_eq!(svg.matches("<polygon ").count(), 81);
    assert_eq!(svg.matches("<rect ").count(), 1);
    assert!(svg.contains(r#"data-x="2" data-y="2" data-z="2""#));
}

#[test]
fn polygons_use_palette_fills_and_dark_stroke() {
    let c = compositor(3, Shape::Asymmetric, 1.0);
    let palette = *c.palette().unwrap();
    let svg = export_svg(c.scene().unwrap(), &ExportMetadata::new("test")).unwrap();
    assert!(svg.contains(&format!(r#"fill="{}""#, palette.base)));
    assert!(svg.contains(&format!(r#"fill="{}""#, palette.light_shade)));
    assert!(svg.contains(&format!(r#"stroke="{}" stroke-width="6""#, palette.dark_shade)));
    assert!(svg.contains(&format!(r#"fill="{}"/>"#, palette.background)));
}

#[test]
fn empty_scene_exports_background_only() {
    let c = compositor(3, Shape::Asymmetric, 0.0);
    let svg = export_svg(c.scene().unwrap(), &ExportMetadata::new("test")).unwrap();
    assert_eq!(svg.matches("<g ").count(), 0);
    assert_eq!(svg.matches("<rect ").count(), 1);
}

#[test]
fn removed_voxels_are_not_exported() {
    let mut c = compositor(3, Shape::Asymmetric, 1.0);
    c.select_at([400.0, 400.0]).unwrap().unwrap();
    let svg = export_svg(c.scene().unwrap(), &ExportMetadata::new("test")).unwrap();
    assert_eq!(svg.matches("<g ").count(), 26);
    assert!(!svg.contains(r#"data-x="2" data-y="2" data-z="2""#));
}

// ── Metadata ─────────────────────────────────────────────────────────────

#[test]
fn metadata_records_params_and_live_voxel_count() {
    let mut c = compositor(5, Shape::Symmetric, 0.5);
    let key = c.scene().unwrap().iter().next().unwrap().0;
    c.remove_voxel(key).unwrap();
    let composition = c.composition().unwrap();
    let metadata = ExportMetadata::new("cube-sculptor")
        .with_params(composition.params.clone())
        .with_palette(composition.palette);

    let svg = export_svg(&composition.scene, &metadata).unwrap();
    let start = svg.find("<metadata>").unwrap() + "<metadata>".len();
    let end = svg.find("</metadata>").unwrap();
    let json: serde_json::Value = serde_json::from_str(&svg[start..end]).unwrap();

    assert_eq!(json["generator"], "cube-sculptor");
    assert_eq!(json["params"]["size"], 5);
    assert_eq!(json["params"]["shape"], "symmetric");
    assert_eq!(json["palette"]["base"], "#c86432");
    assert_eq!(json["voxel_count"], composition.scene.len());
}

// ── Files and data URLs ──────────────────────────────────────────────────

#[test]
fn write_svg_saves_cube_svg() {
    let dir = tempfile::tempdir().unwrap();
    let c = compositor(3, Shape::Symmetric, 0.5);
    let path = write_svg(c.scene().unwrap(), &ExportMetadata::new("test"), dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), SVG_FILE_NAME);
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<svg xmlns="));
}

#[test]
fn write_to_missing_dir_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope").join("deeper");
    let c = compositor(3, Shape::Symmetric, 0.5);
    let err = write_svg(c.scene().unwrap(), &ExportMetadata::new("test"), &missing).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[test]
fn data_url_round_trips_markup() {
    let url = svg_data_url("<svg/>");
    let payload = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), b"<svg/>");
}

#[test]
fn sink_clear_resets_body() {
    let c = compositor(3, Shape::Asymmetric, 1.0);
    let mut sink = SvgSink::new(800.0, 800.0);
    c.render(&mut sink).unwrap();
    c.render(&mut sink).unwrap();
    assert_eq!(sink.serialized().matches("<g ").count(), 27);
}
