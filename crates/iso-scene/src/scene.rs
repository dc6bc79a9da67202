use cube_color::ColorPalette;
use cube_types::LatticeCoord;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, Key, KeyData, SlotMap};
use tracing::debug;

use crate::primitive::{Background, Quad, VoxelPrimitive};
use crate::sink::SceneSink;

new_key_type! {
    /// Stable handle to a voxel in a [`Scene`]. Never reused within a scene.
    pub struct VoxelKey;
}

impl VoxelKey {
    /// Numeric form of the key for the UI.
    pub fn to_id(self) -> u64 {
        self.data().as_ffi()
    }

    pub fn from_id(id: u64) -> Self {
        KeyData::from_ffi(id).into()
    }
}

/// One entry of the declarative draw list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    Background {
        background: Background,
    },
    Voxel {
        id: u64,
        coord: LatticeCoord,
        faces: [Quad; 3],
        stroke: cube_color::Srgb,
        stroke_width: f64,
    },
}

/// A background plus an ordered collection of voxel primitives.
///
/// Voxels keep their insertion order, which is also back-to-front paint
/// order when they are inserted in `x`, `y`, `z` order. Removal only ever
/// shrinks the scene; a removed voxel cannot come back.
#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    scale: f64,
    background: Background,
    voxels: SlotMap<VoxelKey, VoxelPrimitive>,
    order: Vec<VoxelKey>,
}

impl Scene {
    pub fn new(width: f64, height: f64, scale: f64, background: Background) -> Self {
        Self {
            width,
            height,
            scale,
            background,
            voxels: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append a voxel on top of everything already in the scene.
    pub fn push(&mut self, primitive: VoxelPrimitive) -> VoxelKey {
        let key = self.voxels.insert(primitive);
        self.order.push(key);
        key
    }

    /// Remove a voxel's quads from the scene.
    pub fn remove(&mut self, key: VoxelKey) -> Option<VoxelPrimitive> {
        let removed = self.voxels.remove(key)?;
        self.order.retain(|&k| k != key);
        debug!(coord = ?removed.coord, remaining = self.order.len(), "removed voxel");
        Some(removed)
    }

    pub fn get(&self, key: VoxelKey) -> Option<&VoxelPrimitive> {
        self.voxels.get(key)
    }

    pub fn contains(&self, key: VoxelKey) -> bool {
        self.voxels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn quad_count(&self) -> usize {
        self.len() * 3
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Voxels in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelKey, &VoxelPrimitive)> + '_ {
        self.order.iter().map(|&key| (key, &self.voxels[key]))
    }

    /// Key of the live voxel projected from `coord`, if any.
    pub fn key_at(&self, coord: LatticeCoord) -> Option<VoxelKey> {
        self.iter().find(|(_, v)| v.coord == coord).map(|(key, _)| key)
    }

    /// Repaint every voxel and the background from `palette`.
    pub fn recolor(&mut self, palette: &ColorPalette) {
        for voxel in self.voxels.values_mut() {
            voxel.repaint(palette);
        }
        self.background.fill = palette.background;
    }

    /// The topmost voxel whose quads contain `point`.
    pub fn hit_test(&self, point: [f64; 2]) -> Option<VoxelKey> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|&key| self.voxels[key].contains(point))
    }

    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.len() + 1);
        commands.push(DrawCommand::Background {
            background: self.background,
        });
        commands.extend(self.iter().map(|(key, v)| DrawCommand::Voxel {
            id: key.to_id(),
            coord: v.coord,
            faces: v.faces,
            stroke: v.stroke,
            stroke_width: v.stroke_width,
        }));
        commands
    }

    /// Replay the scene into a host sink.
    pub fn render_to(&self, sink: &mut dyn SceneSink) {
        sink.clear();
        sink.set_scale(self.scale);
        sink.draw_background(&self.background);
        for (key, voxel) in self.iter() {
            sink.begin_voxel(key.to_id(), voxel.coord);
            for face in &voxel.faces {
                sink.draw_quad(face, voxel.stroke, voxel.stroke_width);
            }
            sink.end_voxel();
        }
    }
}
