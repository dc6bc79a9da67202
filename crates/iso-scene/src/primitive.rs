use cube_color::{ColorPalette, Srgb};
use cube_types::LatticeCoord;
use serde::{Deserialize, Serialize};

/// Which visible face of a voxel a quad represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaneView {
    /// Upward face, filled with the base color.
    Top,
    /// Right-hand face, filled with the light shade.
    Front,
    /// Left-hand face, filled with the dark shade.
    Side,
}

/// A filled quadrilateral in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub plane: PlaneView,
    /// Corners in winding order, screen coordinates (y grows downward).
    pub points: [[f64; 2]; 4],
    pub fill: Srgb,
}

impl Quad {
    /// Point-in-convex-quad test. Points on an edge count as inside.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        let mut sign = 0.0_f64;
        for k in 0..4 {
            let [ax, ay] = self.points[k];
            let [bx, by] = self.points[(k + 1) % 4];
            let cross = (bx - ax) * (point[1] - ay) - (by - ay) * (point[0] - ax);
            if cross.abs() <= f64::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }
}

/// The three visible quads of one voxel plus the lattice cell it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelPrimitive {
    pub coord: LatticeCoord,
    /// Top, front and side quads, in that order.
    pub faces: [Quad; 3],
    pub stroke: Srgb,
    pub stroke_width: f64,
}

impl VoxelPrimitive {
    /// Repaint fills and stroke from `palette` without touching geometry.
    pub fn repaint(&mut self, palette: &ColorPalette) {
        for face in &mut self.faces {
            face.fill = fill_for(face.plane, palette);
        }
        self.stroke = palette.dark_shade;
    }

    pub fn contains(&self, point: [f64; 2]) -> bool {
        self.faces.iter().any(|face| face.contains(point))
    }
}

/// Fill color for a face orientation.
pub fn fill_for(plane: PlaneView, palette: &ColorPalette) -> Srgb {
    match plane {
        PlaneView::Top => palette.base,
        PlaneView::Front => palette.light_shade,
        PlaneView::Side => palette.dark_shade,
    }
}

/// Backdrop rectangle, much larger than the canvas so it reads as infinite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Srgb,
}

impl Background {
    /// A rectangle extending `extent` canvas sizes past every edge of a
    /// `width`×`height` canvas.
    pub fn covering(width: f64, height: f64, extent: f64, fill: Srgb) -> Self {
        Self {
            x: -extent * width,
            y: -extent * height,
            width: (2.0 * extent + 1.0) * width,
            height: (2.0 * extent + 1.0) * height,
            fill,
        }
    }
}
