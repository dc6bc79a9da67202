use approx::assert_abs_diff_eq;
use cube_color::{ColorPalette, Srgb};
use cube_types::LatticeCoord;
use iso_scene::*;

fn palette() -> ColorPalette {
    ColorPalette {
        base: Srgb::new(200, 100, 50),
        light_shade: Srgb::new(120, 60, 30),
        dark_shade: Srgb::new(80, 40, 20),
        background: Srgb::new(20, 10, 5),
    }
}

fn other_palette() -> ColorPalette {
    ColorPalette {
        base: Srgb::new(10, 200, 250),
        light_shade: Srgb::new(5, 100, 125),
        dark_shade: Srgb::new(3, 66, 83),
        background: Srgb::new(1, 20, 25),
    }
}

fn scene_with(n: usize, coords: &[(usize, usize, usize)]) -> (Scene, IsoProjector) {
    let settings = ProjectionSettings::default();
    let projector = IsoProjector::new(n, &settings);
    let background = Background::covering(800.0, 800.0, 10.0, palette().background);
    let mut scene = Scene::new(800.0, 800.0, projector.scale(), background);
    for &(x, y, z) in coords {
        scene.push(projector.project(LatticeCoord::new(x, y, z), &palette()));
    }
    (scene, projector)
}

/// Records every sink call as a short string.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<String>,
}

impl SceneSink for RecordingSink {
    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push("clear".into());
    }
    fn set_scale(&mut self, factor: f64) {
        self.calls.push(format!("scale {factor}"));
    }
    fn draw_background(&mut self, background: &Background) {
        self.calls.push(format!("background {}", background.fill));
    }
    fn begin_voxel(&mut self, _id: u64, coord: LatticeCoord) {
        self.calls.push(format!("begin {} {} {}", coord.x, coord.y, coord.z));
    }
    fn draw_quad(&mut self, quad: &Quad, _stroke: Srgb, _stroke_width: f64) {
        self.calls.push(format!("quad {:?}", quad.plane));
    }
    fn end_voxel(&mut self) {
        self.calls.push("end".into());
    }
    fn serialized(&self) -> String {
        self.calls.join("\n")
    }
}

// ── Projection ───────────────────────────────────────────────────────────

#[test]
fn scale_is_scene_scale_over_size() {
    let settings = ProjectionSettings::default();
    assert_abs_diff_eq!(IsoProjector::new(3, &settings).scale(), 100.0);
    assert_abs_diff_eq!(IsoProjector::new(5, &settings).scale(), 60.0);
}

#[test]
fn footprint_does_not_depend_on_size() {
    let settings = ProjectionSettings::default();
    let far = |n: usize| {
        let p = IsoProjector::new(n, &settings);
        let f = n as f64;
        (p.to_screen(f, 0.0, 0.0), p.to_screen(0.0, 0.0, f))
    };
    let (right3, top3) = far(3);
    let (right7, top7) = far(7);
    for k in 0..2 {
        assert_abs_diff_eq!(right3[k], right7[k], epsilon = 1e-9);
        assert_abs_diff_eq!(top3[k], top7[k], epsilon = 1e-9);
    }
}

#[test]
fn lattice_origin_sits_at_canvas_centre() {
    let p = IsoProjector::new(3, &ProjectionSettings::default());
    assert_eq!(p.to_screen(0.0, 0.0, 0.0), [400.0, 400.0]);
    // One unit up moves straight up by one scale step.
    let up = p.to_screen(0.0, 0.0, 1.0);
    assert_abs_diff_eq!(up[0], 400.0);
    assert_abs_diff_eq!(up[1], 300.0);
}

#[test]
fn voxel_faces_share_the_near_corner() {
    let p = IsoProjector::new(3, &ProjectionSettings::default());
    let voxel = p.project(LatticeCoord::new(1, 0, 2), &palette());
    let corner = p.to_screen(2.0, 1.0, 3.0);
    for face in &voxel.faces {
        assert!(
            face.points.iter().any(|pt| {
                (pt[0] - corner[0]).abs() < 1e-9 && (pt[1] - corner[1]).abs() < 1e-9
            }),
            "{:?} face misses the shared corner",
            face.plane
        );
    }
}

#[test]
fn voxel_faces_are_shaded_by_orientation() {
    let p = IsoProjector::new(3, &ProjectionSettings::default());
    let voxel = p.project(LatticeCoord::new(0, 0, 0), &palette());
    let planes: Vec<_> = voxel.faces.iter().map(|f| (f.plane, f.fill)).collect();
    assert_eq!(
        planes,
        vec![
            (PlaneView::Top, palette().base),
            (PlaneView::Front, palette().light_shade),
            (PlaneView::Side, palette().dark_shade),
        ]
    );
    assert_eq!(voxel.stroke, palette().dark_shade);
    assert_abs_diff_eq!(voxel.stroke_width, 6.0);
    assert_eq!(voxel.coord, LatticeCoord::new(0, 0, 0));
}

// ── Scene ────────────────────────────────────────────────────────────────

#[test]
fn background_dwarfs_the_canvas() {
    let bg = Background::covering(800.0, 600.0, 10.0, Srgb::BLACK);
    assert!(bg.x <= -8000.0 && bg.y <= -6000.0);
    assert!(bg.x + bg.width >= 8800.0);
    assert!(bg.y + bg.height >= 6600.0);
}

#[test]
fn removal_shrinks_the_scene_and_is_permanent() {
    let (mut scene, _) = scene_with(3, &[(0, 0, 0), (1, 0, 0), (2, 2, 2)]);
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.quad_count(), 9);

    let key = scene.key_at(LatticeCoord::new(1, 0, 0)).unwrap();
    let removed = scene.remove(key).unwrap();
    assert_eq!(removed.coord, LatticeCoord::new(1, 0, 0));
    assert_eq!(scene.len(), 2);
    assert!(!scene.contains(key));
    assert!(scene.remove(key).is_none());

    scene.recolor(&other_palette());
    assert!(!scene.contains(key));
    assert!(scene.key_at(LatticeCoord::new(1, 0, 0)).is_none());
}

#[test]
fn recolor_changes_fills_but_not_geometry() {
    let (mut scene, _) = scene_with(3, &[(0, 0, 0), (2, 1, 0)]);
    let before: Vec<_> = scene.iter().map(|(k, v)| (k, v.coord, v.faces.map(|f| f.points))).collect();

    scene.recolor(&other_palette());
    let once = scene.draw_commands();
    scene.recolor(&other_palette());
    assert_eq!(scene.draw_commands(), once);

    let after: Vec<_> = scene.iter().map(|(k, v)| (k, v.coord, v.faces.map(|f| f.points))).collect();
    assert_eq!(before, after);

    for (_, voxel) in scene.iter() {
        assert_eq!(voxel.faces[0].fill, other_palette().base);
        assert_eq!(voxel.faces[1].fill, other_palette().light_shade);
        assert_eq!(voxel.faces[2].fill, other_palette().dark_shade);
        assert_eq!(voxel.stroke, other_palette().dark_shade);
    }
    assert_eq!(scene.background().fill, other_palette().background);
}

#[test]
fn hit_test_picks_the_topmost_voxel() {
    let (mut scene, projector) = scene_with(3, &[(0, 0, 0), (1, 1, 1)]);
    // Centre of the origin voxel's top face, also covered by (1, 1, 1).
    let point = projector.to_screen(0.5, 0.5, 1.0);

    let front = scene.hit_test(point).unwrap();
    assert_eq!(scene.get(front).unwrap().coord, LatticeCoord::new(1, 1, 1));

    scene.remove(front);
    let behind = scene.hit_test(point).unwrap();
    assert_eq!(scene.get(behind).unwrap().coord, LatticeCoord::new(0, 0, 0));

    assert!(scene.hit_test([-5000.0, -5000.0]).is_none());
}

#[test]
fn voxel_ids_round_trip_through_u64() {
    let (scene, _) = scene_with(3, &[(0, 1, 2)]);
    let (key, _) = scene.iter().next().unwrap();
    assert_eq!(VoxelKey::from_id(key.to_id()), key);
    assert!(scene.get(VoxelKey::from_id(u64::MAX)).is_none());
}

#[test]
fn draw_list_starts_with_background_then_voxels_in_order() {
    let (scene, _) = scene_with(3, &[(0, 0, 0), (0, 0, 1), (1, 0, 0)]);
    let commands = scene.draw_commands();
    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[0], DrawCommand::Background { .. }));
    let coords: Vec<_> = commands[1..]
        .iter()
        .map(|c| match c {
            DrawCommand::Voxel { coord, .. } => *coord,
            DrawCommand::Background { .. } => panic!("background twice"),
        })
        .collect();
    assert_eq!(
        coords,
        vec![LatticeCoord::new(0, 0, 0), LatticeCoord::new(0, 0, 1), LatticeCoord::new(1, 0, 0)]
    );

    let json = serde_json::to_string(&commands).unwrap();
    assert!(json.contains("\"type\":\"Voxel\""));
    assert!(json.contains("\"fill\":\"#c86432\""));
}

#[test]
fn render_to_replays_groups_into_sink() {
    let (scene, _) = scene_with(3, &[(0, 0, 0), (2, 0, 1)]);
    let mut sink = RecordingSink::default();
    scene.render_to(&mut sink);
    let expected = [
        "clear",
        "scale 100",
        "background #140a05",
        "begin 0 0 0",
        "quad Top",
        "quad Front",
        "quad Side",
        "end",
        "begin 2 0 1",
        "quad Top",
        "quad Front",
        "quad Side",
        "end",
    ];
    assert_eq!(sink.serialized(), expected.join("\n"));
}
