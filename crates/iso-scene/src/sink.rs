use cube_color::Srgb;
use cube_types::LatticeCoord;

use crate::primitive::{Background, Quad};

/// A host drawing surface that a [`Scene`](crate::Scene) can be replayed into.
///
/// Implemented by vector serializers (SVG) and by retained-mode canvases in
/// the UI layer. Calls arrive as: `clear`, `set_scale`, `draw_background`,
/// then one `begin_voxel` / three `draw_quad` / `end_voxel` group per voxel.
pub trait SceneSink {
    /// Drop everything drawn so far.
    fn clear(&mut self);

    /// Record the voxel scale factor (`scene_scale / n`).
    fn set_scale(&mut self, factor: f64);

    fn draw_background(&mut self, background: &Background);

    /// Open a group for one voxel.
    fn begin_voxel(&mut self, id: u64, coord: LatticeCoord);

    fn draw_quad(&mut self, quad: &Quad, stroke: Srgb, stroke_width: f64);

    fn end_voxel(&mut self);

    /// The sink's contents as vector markup.
    fn serialized(&self) -> String;
}
