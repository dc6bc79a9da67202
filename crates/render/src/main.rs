//! Render a gallery of sample sculptures as SVG files.
//!
//! Usage: `render_svgs [OUT_DIR]` (default `docs/renders`). Each sample is
//! written to `OUT_DIR/<name>/cube.svg`. Set `RUST_LOG=debug` to see every
//! rejected face sample.

use std::fs;
use std::path::{Path, PathBuf};

use cube_types::{GenerateParams, InteriorMode, Shape};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scene_engine::{EngineConfig, SceneCompositor};
use scene_export::{write_svg, ExportMetadata};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Sample {
    name: &'static str,
    size: usize,
    shape: Shape,
    probability: f64,
    color: &'static str,
    interior: InteriorMode,
    seed: u64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "sym3_blue",
        size: 3,
        shape: Shape::Symmetric,
        probability: 0.5,
        color: "#3a7bd5",
        interior: InteriorMode::Hollow,
        seed: 1,
    },
    Sample {
        name: "sym5_amber",
        size: 5,
        shape: Shape::Symmetric,
        probability: 0.5,
        color: "#e0a030",
        interior: InteriorMode::Hollow,
        seed: 2,
    },
    Sample {
        name: "sym7_teal_solid",
        size: 7,
        shape: Shape::Symmetric,
        probability: 0.45,
        color: "#2bb3a3",
        interior: InteriorMode::Solid,
        seed: 3,
    },
    Sample {
        name: "sym9_rose_sparse",
        size: 9,
        shape: Shape::Symmetric,
        probability: 0.3,
        color: "#d64d7a",
        interior: InteriorMode::Hollow,
        seed: 4,
    },
    Sample {
        name: "asym3_full",
        size: 3,
        shape: Shape::Asymmetric,
        probability: 1.0,
        color: "#c86432",
        interior: InteriorMode::Hollow,
        seed: 5,
    },
    Sample {
        name: "asym5_noise",
        size: 5,
        shape: Shape::Asymmetric,
        probability: 0.4,
        color: "#7a5cff",
        interior: InteriorMode::Hollow,
        seed: 6,
    },
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs/renders"));

    for sample in SAMPLES {
        let path = render_sample(sample, &out_dir)?;
        println!("{:<18} -> {}", sample.name, path.display());
    }

    info!(count = SAMPLES.len(), dir = %out_dir.display(), "gallery written");
    Ok(())
}

fn render_sample(sample: &Sample, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let config = EngineConfig {
        interior: sample.interior,
        seed: Some(sample.seed),
        ..EngineConfig::default()
    };
    let mut compositor = SceneCompositor::new(config);
    compositor.attach()?;

    let params = GenerateParams::new(sample.size, sample.shape, sample.probability, sample.color);
    let mut rng = ChaCha8Rng::seed_from_u64(sample.seed);
    let composition = compositor.generate(params, &mut rng)?;

    let metadata = ExportMetadata::new("render_svgs")
        .with_params(composition.params.clone())
        .with_palette(composition.palette);

    let dir = out_dir.join(sample.name);
    fs::create_dir_all(&dir)?;
    Ok(write_svg(&composition.scene, &metadata, &dir)?)
}
