use glam::Vec3;

use super::frame_buffer::FrameBuffer;
use super::RenderEngine;
use crate::camera::PerspectiveCamera;
use crate::core::Viewport;
use crate::error::{RenderError, SetupError};
use crate::math::{box_normal, intersect_aabb, intersect_sphere, to_rgba8};
use crate::scene::{Geometry, Material, SceneObject, Shading, Stage};

/// Slab thickness given to flat planes so the box test can hit them
const PLANE_THICKNESS: f32 = 0.01;
/// Offset along the normal before casting shadow rays
const SHADOW_BIAS: f32 = 1e-3;

/// Closest intersection along a ray
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub object: &'a SceneObject,
}

/// CPU ray caster: one primary ray per pixel, Lambert shading, hard shadows, fog
///
/// Renders at `render_scale` of the window size; the presenter stretches the
/// result over the surface.
#[derive(Debug, Clone)]
pub struct Raycaster {
    frame: FrameBuffer,
    render_scale: f32,
}

impl Raycaster {
    pub fn new(viewport: Viewport, render_scale: f32) -> Result<Self, SetupError> {
        if !(render_scale > 0.0 && render_scale <= 1.0) {
            return Err(SetupError::InvalidRenderScale(render_scale));
        }
        Ok(Self {
            frame: FrameBuffer::new(viewport.scaled(render_scale)),
            render_scale,
        })
    }

    /// Last rendered image
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn render_scale(&self) -> f32 {
        self.render_scale
    }
}

impl RenderEngine for Raycaster {
    fn render(&mut self, stage: &Stage, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        let (width, height) = self.frame.dimensions();

        for (y, row) in self.frame.rows_mut() {
            let v = (y as f32 + 0.5) / height as f32;
            for (x, pixel) in row.iter_mut().enumerate() {
                let u = (x as f32 + 0.5) / width as f32;
                let dir = camera.ray_direction(u, v);
                *pixel = to_rgba8(shade_ray(stage, camera.position, dir));
            }
        }

        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.frame.resize(viewport.scaled(self.render_scale));
    }
}

/// Intersect a single object, returning distance and world normal
pub fn intersect_object(object: &SceneObject, origin: Vec3, dir: Vec3) -> Option<(f32, Vec3)> {
    let transform = &object.transform;

    match object.geometry {
        Geometry::Sphere { radius } => {
            let radius = radius * transform.scale.max_element();
            intersect_sphere(origin, dir, transform.position, radius).map(|t| {
                let normal = (origin + dir * t - transform.position).normalize();
                (t, normal)
            })
        }
        Geometry::Box { .. } | Geometry::Plane { .. } => {
            let half = object.geometry.half_size().max(Vec3::splat(PLANE_THICKNESS * 0.5));
            let local_origin = transform.to_local_point(origin);
            let local_dir = transform.to_local_dir(dir);

            // Affine maps keep the ray parameter, so t is valid in world space
            let t = intersect_aabb(local_origin, local_dir, -half, half);
            if t <= 0.0 {
                return None;
            }

            let local_normal = box_normal(local_origin + local_dir * t, half);
            Some((t, transform.to_world_normal(local_normal)))
        }
    }
}

/// Closest hit among every drawable in the stage
pub fn trace(stage: &Stage, origin: Vec3, dir: Vec3) -> Option<Hit<'_>> {
    stage
        .drawables()
        .filter_map(|object| {
            intersect_object(object, origin, dir).map(|(distance, normal)| Hit {
                distance,
                point: origin + dir * distance,
                normal,
                object,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Whether any shadow caster sits between `point` and `light`
fn occluded(stage: &Stage, point: Vec3, light: Vec3) -> bool {
    let to_light = light - point;
    let max_distance = to_light.length();
    let dir = to_light / max_distance;

    stage
        .drawables()
        .filter(|object| object.cast_shadow)
        .filter_map(|object| intersect_object(object, point, dir))
        .any(|(t, _)| t < max_distance)
}

fn surface_material(stage: &Stage, object: &SceneObject) -> Material {
    stage.composition.override_material.unwrap_or(object.material)
}

fn shade_hit(stage: &Stage, hit: &Hit<'_>) -> [f32; 3] {
    let material = surface_material(stage, hit.object);
    let albedo = Vec3::from_array(material.color.to_array());

    if material.shading == Shading::Basic {
        return albedo.to_array();
    }

    let scene = &stage.composition;
    let mut light = scene
        .ambient
        .map(|a| Vec3::from_array(a.color.to_array()))
        .unwrap_or(Vec3::ZERO);

    if let Some(spot) = &scene.spot {
        if spot.illuminates(hit.point) {
            let to_light = (spot.position - hit.point).normalize();
            let lambert = hit.normal.dot(to_light).max(0.0);
            let origin = hit.point + hit.normal * SHADOW_BIAS;
            let shadowed = spot.cast_shadow
                && hit.object.receive_shadow
                && occluded(stage, origin, spot.position);

            if !shadowed {
                light += Vec3::from_array(spot.color.to_array()) * lambert;
            }
        }
    }

    (albedo * light).to_array()
}

/// Color seen along a primary ray, including fog
pub fn shade_ray(stage: &Stage, origin: Vec3, dir: Vec3) -> [f32; 3] {
    let scene = &stage.composition;

    match trace(stage, origin, dir) {
        Some(hit) => {
            let color = Vec3::from_array(shade_hit(stage, &hit));
            match &scene.fog {
                Some(fog) => {
                    let fog_color = Vec3::from_array(fog.color.to_array());
                    color.lerp(fog_color, fog.factor(hit.distance)).to_array()
                }
                None => color.to_array(),
            }
        }
        None => scene.clear_color.to_array(),
    }
}
