//! Helper functions: error type, pattern constructors, screen-space math.

use cube_types::FacePattern;
use iso_scene::Scene;
use scene_engine::EngineConfig;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response to {action}: {got}")]
    UnexpectedResponse { action: String, got: String },

    #[error("no scene has been generated")]
    NoScene,

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },
}

// ── Constructors ────────────────────────────────────────────────────────────

/// Engine configuration with a fixed seed, everything else default.
pub fn seeded_config(seed: u64) -> EngineConfig {
    EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    }
}

/// Build a face pattern from rows of `#` (set) and `.` (clear).
///
/// Returns `None` if the rows do not form a square.
pub fn pattern_from_ascii(rows: &[&str]) -> Option<FacePattern> {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c == '#').collect())
        .collect();
    FacePattern::from_rows(&rows)
}

/// Render a face pattern as rows of `#` and `.`.
pub fn pattern_to_ascii(pattern: &FacePattern) -> Vec<String> {
    pattern
        .rows()
        .iter()
        .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
        .collect()
}

// ── Screen-Space Math ───────────────────────────────────────────────────────

/// Screen-space bounding box of every quad in the scene: `(min, max)`.
///
/// `None` for a scene with no voxels.
pub fn scene_bounds(scene: &Scene) -> Option<([f64; 2], [f64; 2])> {
    let mut points = scene
        .iter()
        .flat_map(|(_, voxel)| voxel.faces.iter().flat_map(|quad| quad.points));
    let first = points.next()?;
    Some(points.fold((first, first), |(min, max), [x, y]| {
        ([min[0].min(x), min[1].min(y)], [max[0].max(x), max[1].max(y)])
    }))
}
