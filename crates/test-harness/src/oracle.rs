//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail instead of
//! panicking, so a caller can collect every failure in one pass.

use cube_color::{ColorPalette, ShadeFamily};
use cube_types::{CubeFace, FacePattern, InteriorMode, LatticeCoord, OccupancyGrid};
use iso_scene::Scene;

/// Absolute tolerance for OKLCh comparisons.
const COLOR_TOL: f64 = 1e-9;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::pass(name, detail)
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }
}

/// Show at most five offending items.
fn first_few<T: std::fmt::Debug>(items: &[T]) -> String {
    format!("{:?}", &items[..items.len().min(5)])
}

// ── Pattern Oracles ─────────────────────────────────────────────────────────

/// Check the pattern is invariant under all eight symmetries of the square.
pub fn check_dihedral_symmetry(pattern: &FacePattern) -> OracleVerdict {
    let n = pattern.size();
    let last = n.saturating_sub(1);
    let mut broken = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let v = pattern.get(i, j);
            let images = [
                (j, i),
                (last - i, j),
                (i, last - j),
                (last - i, last - j),
                (j, last - i),
                (last - j, i),
                (last - j, last - i),
            ];
            if images.iter().any(|&(a, b)| pattern.get(a, b) != v) {
                broken.push((i, j));
            }
        }
    }

    if broken.is_empty() {
        OracleVerdict::pass("dihedral_symmetry", format!("{n}×{n} pattern is D4-invariant"))
    } else {
        OracleVerdict::fail(
            "dihedral_symmetry",
            format!("{} cells break symmetry: {}", broken.len(), first_few(&broken)),
        )
    }
}

/// Check the pattern is neither all-true nor all-false.
pub fn check_not_degenerate(pattern: &FacePattern) -> OracleVerdict {
    let set = pattern.count_true();
    let total = pattern.size() * pattern.size();
    if pattern.is_uniform() {
        OracleVerdict::fail("not_degenerate", format!("{set} of {total} cells set"))
    } else {
        OracleVerdict::pass_val(
            "not_degenerate",
            format!("{set} of {total} cells set"),
            set as f64,
        )
    }
}

// ── Grid Oracles ────────────────────────────────────────────────────────────

/// Check every face of the grid shows the pattern, mirrored on min faces.
pub fn check_face_slices(grid: &OccupancyGrid, pattern: &FacePattern) -> OracleVerdict {
    let n = grid.size();
    if pattern.size() != n {
        return OracleVerdict::fail(
            "face_slices",
            format!("pattern is {}×{} but grid is {n}³", pattern.size(), pattern.size()),
        );
    }

    let mut mismatches = Vec::new();
    for face in CubeFace::ALL {
        let slice = grid.face_slice(face);
        for a in 0..n {
            for b in 0..n {
                let expected = if face.is_mirrored() {
                    pattern.get(n - 1 - a, n - 1 - b)
                } else {
                    pattern.get(a, b)
                };
                if slice.get(a, b) != expected {
                    mismatches.push((face, a, b));
                }
            }
        }
    }

    if mismatches.is_empty() {
        OracleVerdict::pass("face_slices", "all six faces match the pattern".to_string())
    } else {
        OracleVerdict::fail(
            "face_slices",
            format!("{} face cells differ: {}", mismatches.len(), first_few(&mismatches)),
        )
    }
}

/// Check interior cells follow the interior policy.
pub fn check_interior(
    grid: &OccupancyGrid,
    pattern: &FacePattern,
    interior: InteriorMode,
) -> OracleVerdict {
    let n = grid.size();
    let mut wrong = Vec::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let coord = LatticeCoord::new(x, y, z);
                if coord.is_on_surface(n) {
                    continue;
                }
                let expected = match interior {
                    InteriorMode::Hollow => false,
                    InteriorMode::Solid => pattern.get(x, y),
                };
                if grid.get(coord) != expected {
                    wrong.push(coord);
                }
            }
        }
    }

    if wrong.is_empty() {
        OracleVerdict::pass("interior", format!("interior is {interior:?}"))
    } else {
        OracleVerdict::fail(
            "interior",
            format!("{} interior cells violate {interior:?}: {}", wrong.len(), first_few(&wrong)),
        )
    }
}

// ── Color Oracles ───────────────────────────────────────────────────────────

/// Check the OKLCh family shares hue and chroma, with lightness scaled by
/// 1, 1/2, 1/3 and 1/10.
pub fn check_shade_family(family: &ShadeFamily) -> OracleVerdict {
    let base = family.base;
    let expected = [
        ("light_shade", family.light_shade, 1.0 / 2.0),
        ("dark_shade", family.dark_shade, 1.0 / 3.0),
        ("background", family.background, 1.0 / 10.0),
    ];

    let mut problems = Vec::new();
    for (name, shade, factor) in expected {
        if (shade.c - base.c).abs() > COLOR_TOL || (shade.h - base.h).abs() > COLOR_TOL {
            problems.push(format!("{name} changes hue or chroma"));
        }
        if (shade.l - base.l * factor).abs() > COLOR_TOL {
            problems.push(format!(
                "{name} lightness {:.6} != {:.6} × {factor:.4}",
                shade.l, base.l
            ));
        }
    }

    if problems.is_empty() {
        OracleVerdict::pass_val(
            "shade_family",
            format!("L = {:.4}, C = {:.4}, h = {:.4}", base.l, base.c, base.h),
            base.l,
        )
    } else {
        OracleVerdict::fail("shade_family", problems.join("; "))
    }
}

/// Check the rendered sRGB palette gets darker from base to background.
pub fn check_palette_order(palette: &ColorPalette) -> OracleVerdict {
    let l = [
        palette.base.to_oklch().l,
        palette.light_shade.to_oklch().l,
        palette.dark_shade.to_oklch().l,
        palette.background.to_oklch().l,
    ];
    if l.windows(2).all(|w| w[0] >= w[1]) {
        OracleVerdict::pass("palette_order", format!("lightness {l:.3?}"))
    } else {
        OracleVerdict::fail("palette_order", format!("lightness not decreasing: {l:.3?}"))
    }
}

// ── Scene Oracles ───────────────────────────────────────────────────────────

/// Check every live voxel comes from an occupied cell, at most once, in
/// `x`, `y`, `z` paint order. The value is the number of removed voxels.
pub fn check_scene_matches_grid(scene: &Scene, grid: &OccupancyGrid) -> OracleVerdict {
    let coords: Vec<LatticeCoord> = scene.iter().map(|(_, voxel)| voxel.coord).collect();

    let stray: Vec<_> = coords.iter().filter(|&&c| !grid.get(c)).collect();
    if !stray.is_empty() {
        return OracleVerdict::fail(
            "scene_matches_grid",
            format!("{} voxels on empty cells: {}", stray.len(), first_few(&stray)),
        );
    }
    if let Some(w) = coords.windows(2).find(|w| w[0] >= w[1]) {
        return OracleVerdict::fail(
            "scene_matches_grid",
            format!("paint order broken at {:?} -> {:?}", w[0], w[1]),
        );
    }

    let removed = grid.count_occupied() - coords.len();
    OracleVerdict::pass_val(
        "scene_matches_grid",
        format!("{} voxels live, {removed} removed", coords.len()),
        removed as f64,
    )
}
