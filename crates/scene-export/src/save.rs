use std::fs;
use std::path::{Path, PathBuf};

use iso_scene::{Scene, SceneSink};
use tracing::info;

use crate::errors::ExportError;
use crate::metadata::ExportMetadata;
use crate::svg::SvgSink;

/// File name used for saved sculptures.
pub const SVG_FILE_NAME: &str = "cube.svg";

/// Render `scene` to a standalone SVG document with embedded metadata.
pub fn export_svg(scene: &Scene, metadata: &ExportMetadata) -> Result<String, ExportError> {
    let mut metadata = metadata.clone();
    metadata.voxel_count = scene.len();
    let json =
        serde_json::to_string(&metadata).map_err(|e| ExportError::Metadata(e.to_string()))?;

    let mut sink = SvgSink::new(scene.width(), scene.height());
    scene.render_to(&mut sink);
    sink.set_metadata(json);
    Ok(sink.serialized())
}

/// Export `scene` and write it to `dir/cube.svg`. Returns the written path.
pub fn write_svg(
    scene: &Scene,
    metadata: &ExportMetadata,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let svg = export_svg(scene, metadata)?;
    let path = dir.join(SVG_FILE_NAME);
    fs::write(&path, svg.as_bytes()).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), voxels = scene.len(), "wrote svg");
    Ok(path)
}
