//! Structured text scene reports.
//!
//! Reports are plain text so a failing test can print the whole picture:
//! parameters, face pattern, palette, voxel counts, oracle results and the
//! action history that led there.

use std::fmt;

use cube_color::ColorPalette;
use cube_types::GenerateParams;

use crate::helpers::{pattern_to_ascii, scene_bounds};
use crate::oracle::OracleVerdict;
use crate::workflow::SculptureBuilder;

/// A complete scene report with all sections.
pub struct SceneReport {
    pub params: Option<GenerateParams>,
    pub face_rows: Vec<String>,
    pub attempts: Option<usize>,
    pub forced: bool,
    pub palette: Option<ColorPalette>,
    pub occupied: usize,
    pub live_voxels: usize,
    pub scale: Option<f64>,
    pub bounds: Option<([f64; 2], [f64; 2])>,
    pub oracle_results: Vec<OracleVerdict>,
    pub history: Vec<(String, String)>,
}

impl SceneReport {
    pub fn from_builder(builder: &SculptureBuilder) -> Self {
        let composition = builder.composition().ok();
        let face = composition.and_then(|c| c.face.as_ref());
        Self {
            params: composition.map(|c| c.params.clone()),
            face_rows: face.map(|f| pattern_to_ascii(&f.pattern)).unwrap_or_default(),
            attempts: face.map(|f| f.attempts),
            forced: face.is_some_and(|f| f.forced),
            palette: composition.map(|c| c.palette),
            occupied: composition.map_or(0, |c| c.grid.count_occupied()),
            live_voxels: composition.map_or(0, |c| c.scene.len()),
            scale: composition.map(|c| c.scene.scale()),
            bounds: composition.and_then(|c| scene_bounds(&c.scene)),
            oracle_results: builder.verify().unwrap_or_default(),
            history: builder.history().to_vec(),
        }
    }

    pub fn failed_oracles(&self) -> impl Iterator<Item = &OracleVerdict> {
        self.oracle_results.iter().filter(|v| !v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Sculpture Report ===\n\n");

        match &self.params {
            Some(p) => out.push_str(&format!(
                "Params: size={} shape={:?} p={} color={}\n",
                p.size, p.shape, p.probability, p.color
            )),
            None => out.push_str("Params: (no scene)\n"),
        }

        if !self.face_rows.is_empty() {
            let forced = if self.forced { " [FORCED]" } else { "" };
            out.push_str(&format!(
                "\nFace Pattern ({} attempts){}:\n",
                self.attempts.unwrap_or(0),
                forced
            ));
            for row in &self.face_rows {
                out.push_str(&format!("  {row}\n"));
            }
        }

        if let Some(palette) = &self.palette {
            out.push_str(&format!(
                "\nPalette: base={} light={} dark={} background={}\n",
                palette.base, palette.light_shade, palette.dark_shade, palette.background
            ));
        }

        out.push_str(&format!(
            "\nVoxels: {} live / {} occupied ({} removed)\n",
            self.live_voxels,
            self.occupied,
            self.occupied.saturating_sub(self.live_voxels)
        ));
        if let Some(scale) = self.scale {
            out.push_str(&format!("Scale: {scale:.2}\n"));
        }
        if let Some((min, max)) = self.bounds {
            out.push_str(&format!(
                "Bounds: ({:.1}, {:.1}) .. ({:.1}, {:.1})\n",
                min[0], min[1], max[0], max[1]
            ));
        }

        if !self.oracle_results.is_empty() {
            let failed = self.failed_oracles().count();
            out.push_str(&format!(
                "\nOracles ({} checks, {} failed):\n",
                self.oracle_results.len(),
                failed
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{status}] {}: {}\n", v.oracle_name, v.detail));
            }
        }

        if !self.history.is_empty() {
            out.push_str("\nHistory:\n");
            for (i, (action, outcome)) in self.history.iter().enumerate() {
                out.push_str(&format!("  {}. {action} -> {outcome}\n", i + 1));
            }
        }

        out
    }
}

impl fmt::Display for SceneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
