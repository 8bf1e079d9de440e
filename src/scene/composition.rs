use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use super::object::{Geometry, Material, SceneObject};
use crate::camera::PerspectiveCamera;
use crate::core::Viewport;
use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone in radians
    pub angle: f32,
    pub cast_shadow: bool,
}

impl SpotLight {
    /// White spot aimed at the origin with a π/3 cone
    pub fn new(color: Color, position: Vec3) -> Self {
        Self {
            color,
            position,
            target: Vec3::ZERO,
            angle: FRAC_PI_3,
            cast_shadow: false,
        }
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    /// Whether `point` falls inside the light cone
    pub fn illuminates(&self, point: Vec3) -> bool {
        let axis = (self.target - self.position).normalize();
        let to_point = (point - self.position).normalize();
        axis.dot(to_point) >= self.angle.cos()
    }
}

/// Exponential-squared fog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

impl Fog {
    /// Blend factor toward the fog color at `distance`, in [0, 1]
    pub fn factor(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        1.0 - (-d * d).exp()
    }
}

/// Static part of a chapter: camera, lights, fixtures and global render settings
#[derive(Debug, Clone)]
pub struct SceneComposition {
    pub camera: PerspectiveCamera,
    pub clear_color: Color,
    pub ambient: Option<AmbientLight>,
    pub spot: Option<SpotLight>,
    pub fog: Option<Fog>,
    /// Replaces every object's material when set
    pub override_material: Option<Material>,
    fixtures: Vec<SceneObject>,
}

impl SceneComposition {
    /// Empty scene with the standard camera at (-30, 40, 30) looking at the origin
    pub fn new(viewport: Viewport) -> Self {
        let mut camera = PerspectiveCamera::standard(viewport);
        camera.position = Vec3::new(-30.0, 40.0, 30.0);
        camera.look_at(Vec3::ZERO);

        Self {
            camera,
            clear_color: Color::BLACK,
            ambient: None,
            spot: None,
            fog: None,
            override_material: None,
            fixtures: Vec::new(),
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_ambient(mut self, color: Color) -> Self {
        self.ambient = Some(AmbientLight { color });
        self
    }

    pub fn with_spot(mut self, spot: SpotLight) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn with_fog(mut self, color: Color, density: f32) -> Self {
        self.fog = Some(Fog { color, density });
        self
    }

    pub fn with_override_material(mut self, material: Material) -> Self {
        self.override_material = Some(material);
        self
    }

    pub fn with_fixture(mut self, fixture: SceneObject) -> Self {
        self.fixtures.push(fixture);
        self
    }

    pub fn fixtures(&self) -> &[SceneObject] {
        &self.fixtures
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.camera.resize(viewport);
    }
}

/// Horizontal ground plane that receives shadows
pub fn ground_plane(width: f32, height: f32, material: Material) -> SceneObject {
    SceneObject::new("plane", Geometry::Plane { width, height }, material)
        .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
        .receiving_shadow()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_factor_grows_with_distance() {
        let fog = Fog {
            color: Color::WHITE,
            density: 0.01,
        };
        assert_eq!(fog.factor(0.0), 0.0);
        assert!(fog.factor(50.0) < fog.factor(100.0));
        assert!(fog.factor(10_000.0) > 0.99);
    }

    #[test]
    fn spot_cone_contains_axis_but_not_behind() {
        let spot = SpotLight::new(Color::WHITE, Vec3::new(-40.0, 60.0, -10.0));
        assert!(spot.illuminates(Vec3::ZERO));
        assert!(!spot.illuminates(Vec3::new(-80.0, 120.0, -20.0)));
    }

    #[test]
    fn composition_camera_looks_at_origin() {
        let scene = SceneComposition::new(Viewport::new(800, 600).unwrap());
        assert_eq!(scene.camera.position, Vec3::new(-30.0, 40.0, 30.0));
        assert_eq!(scene.camera.target, Vec3::ZERO);
    }

    #[test]
    fn ground_plane_is_a_shadow_receiving_fixture() {
        let scene = SceneComposition::new(Viewport::new(800, 600).unwrap())
            .with_fixture(ground_plane(60.0, 40.0, Material::lambert(Color::WHITE)));

        let plane = &scene.fixtures()[0];
        assert!(plane.receive_shadow);
        assert!(!plane.cast_shadow);
        assert_eq!(plane.transform.rotation.x, -FRAC_PI_2);
    }
}
