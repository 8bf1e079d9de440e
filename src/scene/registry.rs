use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::object::{Geometry, Material, SceneObject};
use crate::math::Color;

/// Identifier handed out by the registry, unique for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Region of the ground plane that new cubes are scattered over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub origin_x: f32,
    pub origin_z: f32,
    pub width: f32,
    pub depth: f32,
    pub max_height: f32,
}

impl SpawnArea {
    /// Area covering a plane of `width` x `depth` anchored at (-30, -20)
    pub fn for_plane(width: f32, depth: f32) -> Self {
        Self {
            origin_x: -30.0,
            origin_z: -20.0,
            width,
            depth,
            max_height: 5.0,
        }
    }
}

/// Diagnostic view of a tracked object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub size: Vec3,
    pub color: Color,
}

impl std::fmt::Display for ObjectSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} pos=({:.1}, {:.1}, {:.1}) rot=({:.2}, {:.2}, {:.2}) color={}",
            self.id,
            self.name,
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.color
        )
    }
}

/// Owns the dynamic objects of a stage, in insertion order
///
/// Fixtures (ground plane, lights, camera) never live here, so everything in
/// the registry is a rotation target and a removal candidate.
#[derive(Debug)]
pub struct ObjectRegistry {
    objects: Vec<(ObjectId, SceneObject)>,
    next_index: u64,
    rng: StdRng,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Registry with deterministic cube placement
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            objects: Vec::new(),
            next_index: 0,
            rng,
        }
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_index);
        self.next_index += 1;
        id
    }

    /// Track a prebuilt object
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        let id = self.allocate_id();
        log::debug!("registry: insert {} {}", id, object.name);
        self.objects.push((id, object));
        id
    }

    /// Add a randomly sized, colored and placed cube inside `area`
    pub fn add_cube(&mut self, area: &SpawnArea) -> ObjectId {
        let size = self.rng.gen_range(1..=3) as f32;
        let color = Color::from_hex(self.rng.gen_range(0..=Color::MAX));
        let position = Vec3::new(
            area.origin_x + (self.rng.gen::<f32>() * area.width).round(),
            (self.rng.gen::<f32>() * area.max_height).round(),
            area.origin_z + (self.rng.gen::<f32>() * area.depth).round(),
        );

        let name = format!("cube-{}", self.next_index);
        let cube = SceneObject::new(name, Geometry::cube(size), Material::lambert(color))
            .at(position)
            .casting_shadow();

        self.insert(cube)
    }

    /// Remove the most recently added object
    pub fn remove_last(&mut self) -> Option<(ObjectId, SceneObject)> {
        let removed = self.objects.pop();
        if let Some((id, object)) = &removed {
            log::debug!("registry: remove {} {}", id, object.name);
        }
        removed
    }

    /// Remove the most recently added object, false when there is nothing to remove
    pub fn remove_object(&mut self) -> bool {
        self.remove_last().is_some()
    }

    pub fn count(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, object)| object)
    }

    /// Most recently added object
    pub fn last(&self) -> Option<(ObjectId, &SceneObject)> {
        self.objects.last().map(|(id, object)| (*id, object))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut().map(|(_, object)| object)
    }

    /// Lazy snapshot of every tracked object; call again to restart
    pub fn dump(&self) -> impl Iterator<Item = ObjectSnapshot> + '_ {
        self.objects.iter().map(|(id, object)| ObjectSnapshot {
            id: *id,
            name: object.name.clone(),
            position: object.transform.position,
            rotation: object.transform.rotation,
            size: object.geometry.half_size() * 2.0 * object.transform.scale,
            color: object.material.color,
        })
    }

    /// Drop every tracked object, ids are not reused afterwards
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
