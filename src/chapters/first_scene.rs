// First scene - a spinning cube and a bouncing sphere over a ground plane
use glam::Vec3;

use crate::core::{ControlDescriptor, ControlParameters, ControlSurface, Knob, Viewport};
use crate::math::Color;
use crate::scene::{
    ground_plane, Bouncer, Geometry, Material, ObjectRegistry, SceneComposition, SceneObject,
    SpawnArea, SpotLight, Stage,
};

use super::Parts;
use crate::config::PlaygroundConfig;

const PLANE_WIDTH: f32 = 60.0;
const PLANE_DEPTH: f32 = 20.0;
const BOUNCE_AMPLITUDE: f32 = 10.0;

pub(super) fn build(config: &PlaygroundConfig, viewport: Viewport, mut registry: ObjectRegistry) -> Parts {
    let plane = ground_plane(PLANE_WIDTH, PLANE_DEPTH, Material::lambert(Color::from_hex(0xcccccc)))
        .at(Vec3::new(15.0, 0.0, 0.0));

    let composition = SceneComposition::new(viewport)
        .with_clear_color(Color::from_hex(0xeeeeee))
        .with_ambient(Color::from_hex(0x0c0c0c))
        .with_spot(SpotLight::new(Color::WHITE, Vec3::new(-40.0, 60.0, -10.0)).casting_shadow())
        .with_fixture(plane);

    let cube = SceneObject::new("cube", Geometry::cube(4.0), Material::lambert(Color::from_hex(0xff0000)))
        .at(Vec3::new(-4.0, 3.0, 0.0))
        .casting_shadow();
    registry.insert(cube);

    let sphere = SceneObject::new(
        "sphere",
        Geometry::Sphere { radius: 4.0 },
        Material::lambert(Color::from_hex(0x7777ff)),
    )
    .at(Vec3::new(20.0, 4.0, 2.0))
    .casting_shadow();

    let stage = Stage::new(composition, registry).with_bouncer(Bouncer::new(sphere, BOUNCE_AMPLITUDE));

    let controls = ControlSurface::new(
        vec![
            ControlDescriptor::slider(Knob::RotationSpeed),
            ControlDescriptor::slider(Knob::BouncingSpeed),
        ],
        SpawnArea::for_plane(PLANE_WIDTH, PLANE_DEPTH),
    );

    Parts {
        stage,
        params: ControlParameters::new(config.rotation_speed, config.bouncing_speed),
        controls,
    }
}
