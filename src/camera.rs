use glam::Vec3;

use crate::core::Viewport;

pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera aimed at a fixed target
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        Self {
            fov_degrees,
            aspect: viewport.aspect(),
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
        }
    }

    /// Camera with the tutorial defaults: 45° fov, 0.1 near, 1000 far
    pub fn standard(viewport: Viewport) -> Self {
        Self::new(DEFAULT_FOV_DEGREES, viewport, DEFAULT_NEAR, DEFAULT_FAR)
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Recompute the projection for a new surface size
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Primary ray direction through normalized screen coordinates
    /// (`u`, `v` in [0, 1], origin at the top-left corner)
    pub fn ray_direction(&self, u: f32, v: f32) -> Vec3 {
        let half_height = (self.fov_degrees.to_radians() * 0.5).tan();
        let half_width = half_height * self.aspect;

        let x = (2.0 * u - 1.0) * half_width;
        let y = (1.0 - 2.0 * v) * half_height;

        (self.forward() + self.right() * x + self.up() * y).normalize()
    }
}
