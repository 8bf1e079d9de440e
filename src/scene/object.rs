use glam::{EulerRot, Quat, Vec3};
use serde::Serialize;

use crate::math::Color;

/// Primitive shape of a scene object, in local units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    /// Flat rectangle lying in the local XY plane
    Plane { width: f32, height: f32 },
}

impl Geometry {
    /// Cube with equal edges
    pub fn cube(size: f32) -> Self {
        Geometry::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    /// Half extents of the local bounding box
    pub fn half_size(&self) -> Vec3 {
        match *self {
            Geometry::Box { width, height, depth } => Vec3::new(width, height, depth) * 0.5,
            Geometry::Sphere { radius } => Vec3::splat(radius),
            Geometry::Plane { width, height } => Vec3::new(width * 0.5, height * 0.5, 0.0),
        }
    }
}

/// How a surface responds to light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shading {
    /// Diffuse, lit by scene lights
    Lambert,
    /// Flat color, ignores lights
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub shading: Shading,
}

impl Material {
    pub fn lambert(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Lambert,
        }
    }

    pub fn basic(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Basic,
        }
    }
}

/// Position, Euler XYZ rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Map a world-space point into local space
    pub fn to_local_point(&self, point: Vec3) -> Vec3 {
        self.orientation().inverse() * (point - self.position) / self.scale
    }

    /// Map a world-space direction into local space (not normalized)
    pub fn to_local_dir(&self, dir: Vec3) -> Vec3 {
        self.orientation().inverse() * dir / self.scale
    }

    /// Map a local-space normal back into world space
    pub fn to_world_normal(&self, normal: Vec3) -> Vec3 {
        (self.orientation() * (normal / self.scale)).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A renderable primitive in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }

    /// Rotate on all three axes by the same amount
    pub fn spin(&mut self, amount: f32) {
        self.transform.rotation += Vec3::splat(amount);
    }
}
