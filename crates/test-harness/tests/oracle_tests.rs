use cube_color::{derive, derive_family, OkLch, ShadeFamily, Srgb};
use cube_types::{FacePattern, InteriorMode, LatticeCoord, OccupancyGrid};
use iso_scene::{Background, IsoProjector, ProjectionSettings, Scene};
use pattern_ops::{mirror, symmetric_face, DEFAULT_MAX_ATTEMPTS};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use test_harness::helpers::pattern_from_ascii;
use test_harness::oracle::*;

fn scene_for(grid: &OccupancyGrid) -> Scene {
    let palette = derive("#3a7bd5").unwrap();
    let projector = IsoProjector::new(grid.size(), &ProjectionSettings::default());
    let mut scene = Scene::new(
        800.0,
        800.0,
        projector.scale(),
        Background::covering(800.0, 800.0, 10.0, palette.background),
    );
    for coord in grid.occupied() {
        scene.push(projector.project(coord, &palette));
    }
    scene
}

// ── Pattern oracles ──────────────────────────────────────────────────────

#[test]
fn cross_is_symmetric_and_not_degenerate() {
    let cross = pattern_from_ascii(&[".#.", "###", ".#."]).unwrap();
    assert!(check_dihedral_symmetry(&cross).passed);
    let verdict = check_not_degenerate(&cross);
    assert!(verdict.passed);
    assert_eq!(verdict.value, Some(5.0));
}

#[test]
fn lopsided_pattern_breaks_symmetry() {
    let lopsided = pattern_from_ascii(&["#..", "...", "..."]).unwrap();
    let verdict = check_dihedral_symmetry(&lopsided);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("break symmetry"), "{}", verdict.detail);
}

#[test]
fn transpose_only_symmetry_is_not_enough() {
    // Symmetric about the main diagonal but not under horizontal flip.
    let diagonal = pattern_from_ascii(&["#....", ".#...", "..#..", "...#.", "....#"]).unwrap();
    assert!(!check_dihedral_symmetry(&diagonal).passed);
}

#[test]
fn uniform_patterns_are_degenerate() {
    assert!(!check_not_degenerate(&FacePattern::new(3)).passed);
    let full = pattern_from_ascii(&["###", "###", "###"]).unwrap();
    assert!(!check_not_degenerate(&full).passed);
}

// ── Grid oracles ─────────────────────────────────────────────────────────

#[test]
fn mirrored_grid_passes_face_and_interior_checks() {
    let pattern = pattern_from_ascii(&["#.#", ".#.", "#.#"]).unwrap();
    for interior in [InteriorMode::Hollow, InteriorMode::Solid] {
        let grid = mirror(3, &pattern, interior).unwrap();
        assert!(check_face_slices(&grid, &pattern).passed);
        assert!(check_interior(&grid, &pattern, interior).passed);
    }
}

#[test]
fn wrong_interior_policy_is_caught() {
    let pattern = pattern_from_ascii(&["#.#", ".#.", "#.#"]).unwrap();
    let solid = mirror(3, &pattern, InteriorMode::Solid).unwrap();
    let verdict = check_interior(&solid, &pattern, InteriorMode::Hollow);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("x: 1, y: 1, z: 1"), "{}", verdict.detail);
}

#[test]
fn interior_check_handles_lattices_without_interior() {
    for n in 0..3 {
        let grid = OccupancyGrid::filled(n, true);
        let verdict = check_interior(&grid, &FacePattern::new(n), InteriorMode::Hollow);
        assert!(verdict.passed, "n = {n}: {}", verdict.detail);
    }
}

#[test]
fn tampered_face_is_caught() {
    let pattern = pattern_from_ascii(&["#.#", ".#.", "#.#"]).unwrap();
    let mut grid = mirror(3, &pattern, InteriorMode::Hollow).unwrap();
    // Centre of the z = n-1 face.
    grid.set(LatticeCoord::new(1, 1, 2), false);
    assert!(!check_face_slices(&grid, &pattern).passed);
}

#[test]
fn size_mismatch_fails_face_check() {
    let grid = OccupancyGrid::new(5);
    assert!(!check_face_slices(&grid, &FacePattern::new(3)).passed);
}

// ── Color oracles ────────────────────────────────────────────────────────

#[test]
fn derived_family_passes() {
    let family = derive_family("#3a7bd5").unwrap();
    assert!(check_shade_family(&family).passed);
    assert!(check_palette_order(&family.to_palette()).passed);
}

#[test]
fn hue_shift_is_caught() {
    let mut family = derive_family("#3a7bd5").unwrap();
    family.dark_shade.h += 0.5;
    let verdict = check_shade_family(&family);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("dark_shade"));
}

#[test]
fn wrong_lightness_factor_is_caught() {
    let base = OkLch::new(0.8, 0.1, 1.0);
    let mut family = ShadeFamily::from_base(base);
    family.background = base.scale_lightness(0.2);
    assert!(!check_shade_family(&family).passed);
}

#[test]
fn brightening_palette_fails_order() {
    let mut palette = derive("#3a7bd5").unwrap();
    palette.background = Srgb::WHITE;
    assert!(!check_palette_order(&palette).passed);
}

// ── Scene oracles ────────────────────────────────────────────────────────

#[test]
fn scene_oracle_counts_removals() {
    let pattern = pattern_from_ascii(&["#.#", ".#.", "#.#"]).unwrap();
    let grid = mirror(3, &pattern, InteriorMode::Hollow).unwrap();
    let mut scene = scene_for(&grid);
    assert_eq!(check_scene_matches_grid(&scene, &grid).value, Some(0.0));

    let key = scene.iter().nth(2).unwrap().0;
    scene.remove(key);
    let verdict = check_scene_matches_grid(&scene, &grid);
    assert!(verdict.passed);
    assert_eq!(verdict.value, Some(1.0));
}

#[test]
fn voxel_on_empty_cell_is_caught() {
    let grid = OccupancyGrid::filled(3, true);
    let scene = scene_for(&grid);
    let sparse = OccupancyGrid::new(3);
    assert!(!check_scene_matches_grid(&scene, &sparse).passed);
}

proptest! {
    #[test]
    fn sampled_sculptures_pass_every_oracle(
        half in 1usize..4,
        p in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let n = 2 * half + 1;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = symmetric_face(n, p, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
        let grid = mirror(n, &sample.pattern, InteriorMode::Hollow).unwrap();
        let scene = scene_for(&grid);

        let verdicts = [
            check_dihedral_symmetry(&sample.pattern),
            check_not_degenerate(&sample.pattern),
            check_face_slices(&grid, &sample.pattern),
            check_interior(&grid, &sample.pattern, InteriorMode::Hollow),
            check_scene_matches_grid(&scene, &grid),
        ];
        for v in verdicts {
            prop_assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
        }
    }
}
