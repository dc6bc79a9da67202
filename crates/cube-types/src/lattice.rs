use serde::{Deserialize, Serialize};

/// An integer position in the N×N×N lattice.
///
/// `x` maps to the "right" isometric axis, `y` to "left" and `z` to "top".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticeCoord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LatticeCoord {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// True if the coordinate lies on at least one face of a cube of side `n`.
    pub fn is_on_surface(&self, n: usize) -> bool {
        let last = n.saturating_sub(1);
        self.x == 0 || self.y == 0 || self.z == 0 || self.x == last || self.y == last || self.z == last
    }
}

/// One of the six faces of the cube.
///
/// `CubeFace::ALL` is the precedence order used when a cell lies on several
/// faces at once (edges and corners): the first face that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CubeFace {
    XMin,
    XMax,
    YMin,
    YMax,
    ZMin,
    ZMax,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::XMin,
        CubeFace::XMax,
        CubeFace::YMin,
        CubeFace::YMax,
        CubeFace::ZMin,
        CubeFace::ZMax,
    ];

    /// Does `coord` lie on this face of a cube of side `n`?
    pub fn contains(&self, coord: LatticeCoord, n: usize) -> bool {
        let last = n.saturating_sub(1);
        match self {
            CubeFace::XMin => coord.x == 0,
            CubeFace::XMax => coord.x == last,
            CubeFace::YMin => coord.y == 0,
            CubeFace::YMax => coord.y == last,
            CubeFace::ZMin => coord.z == 0,
            CubeFace::ZMax => coord.z == last,
        }
    }

    /// The first face in precedence order that contains `coord`, if any.
    pub fn first_containing(coord: LatticeCoord, n: usize) -> Option<CubeFace> {
        Self::ALL.into_iter().find(|face| face.contains(coord, n))
    }

    /// The lattice cell at in-face position `(a, b)`.
    ///
    /// The two in-face axes are taken in x, y, z order with the face's own
    /// axis dropped: `(y, z)` for x faces, `(x, z)` for y faces, `(x, y)` for z faces.
    pub fn cell(&self, a: usize, b: usize, n: usize) -> LatticeCoord {
        let last = n.saturating_sub(1);
        match self {
            CubeFace::XMin => LatticeCoord::new(0, a, b),
            CubeFace::XMax => LatticeCoord::new(last, a, b),
            CubeFace::YMin => LatticeCoord::new(a, 0, b),
            CubeFace::YMax => LatticeCoord::new(a, last, b),
            CubeFace::ZMin => LatticeCoord::new(a, b, 0),
            CubeFace::ZMax => LatticeCoord::new(a, b, last),
        }
    }

    /// Whether the face pattern is read with both in-face indices mirrored.
    ///
    /// Min faces read `pattern[n-1-a][n-1-b]`, max faces read `pattern[a][b]`.
    pub fn is_mirrored(&self) -> bool {
        matches!(self, CubeFace::XMin | CubeFace::YMin | CubeFace::ZMin)
    }
}
