use cube_color::ColorPalette;
use cube_types::LatticeCoord;
use nalgebra::{Matrix2x3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::primitive::{fill_for, PlaneView, Quad, VoxelPrimitive};

/// Canvas and scale parameters for projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSettings {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Screen size of the whole sculpture; divided by `n` to get the voxel scale.
    pub scene_scale: f64,
    pub stroke_width: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 800.0,
            scene_scale: 300.0,
            stroke_width: 6.0,
        }
    }
}

/// Maps lattice coordinates to isometric screen positions.
///
/// `x` runs along the "right" diagonal, `y` along the "left" diagonal and
/// `z` straight up. The lattice origin sits at the canvas centre.
#[derive(Debug, Clone, PartialEq)]
pub struct IsoProjector {
    basis: Matrix2x3<f64>,
    origin: Vector2<f64>,
    scale: f64,
    stroke_width: f64,
}

impl IsoProjector {
    /// Projector for an `n`-sided lattice. The scale is `scene_scale / n`
    /// so the sculpture footprint does not depend on `n`.
    pub fn new(n: usize, settings: &ProjectionSettings) -> Self {
        let cos30 = 3.0_f64.sqrt() / 2.0;
        let sin30 = 0.5;
        #[rustfmt::skip]
        let basis = Matrix2x3::new(
            cos30, -cos30,  0.0,
            sin30,  sin30, -1.0,
        );
        Self {
            basis,
            origin: Vector2::new(settings.canvas_width / 2.0, settings.canvas_height / 2.0),
            scale: settings.scene_scale / n.max(1) as f64,
            stroke_width: settings.stroke_width,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen position of the lattice point `(right, left, top)`.
    pub fn to_screen(&self, right: f64, left: f64, top: f64) -> [f64; 2] {
        let p = self.origin + self.basis * Vector3::new(right, left, top) * self.scale;
        [p.x, p.y]
    }

    /// The three visible quads of the unit cube at `coord`.
    ///
    /// All three share the cube's corner nearest the viewer,
    /// `(x+1, y+1, z+1)`.
    pub fn project(&self, coord: LatticeCoord, palette: &ColorPalette) -> VoxelPrimitive {
        let (x, y, z) = (coord.x as f64, coord.y as f64, coord.z as f64);
        let (x1, y1, z1) = (x + 1.0, y + 1.0, z + 1.0);

        let quad = |plane: PlaneView, corners: [[f64; 3]; 4]| Quad {
            plane,
            points: corners.map(|[r, l, t]| self.to_screen(r, l, t)),
            fill: fill_for(plane, palette),
        };

        VoxelPrimitive {
            coord,
            faces: [
                quad(PlaneView::Top, [[x, y, z1], [x1, y, z1], [x1, y1, z1], [x, y1, z1]]),
                quad(PlaneView::Front, [[x1, y, z], [x1, y1, z], [x1, y1, z1], [x1, y, z1]]),
                quad(PlaneView::Side, [[x, y1, z], [x1, y1, z], [x1, y1, z1], [x, y1, z1]]),
            ],
            stroke: palette.dark_shade,
            stroke_width: self.stroke_width,
        }
    }
}
