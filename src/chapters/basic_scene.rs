// Basic scene - cubes added and removed at runtime from the control panel
use glam::Vec3;

use crate::config::PlaygroundConfig;
use crate::core::{
    ControlAction, ControlDescriptor, ControlParameters, ControlSurface, Knob, Readout, Viewport,
};
use crate::math::Color;
use crate::scene::{ground_plane, Material, ObjectRegistry, SceneComposition, SpawnArea, SpotLight, Stage};

use super::Parts;

const PLANE_WIDTH: f32 = 60.0;
const PLANE_DEPTH: f32 = 40.0;
const FOG_DENSITY: f32 = 0.01;

pub(super) fn build(config: &PlaygroundConfig, viewport: Viewport, mut registry: ObjectRegistry) -> Parts {
    let composition = SceneComposition::new(viewport)
        .with_clear_color(Color::from_hex(0xeeeeee))
        .with_ambient(Color::from_hex(0x0c0c0c))
        .with_spot(SpotLight::new(Color::WHITE, Vec3::new(-40.0, 60.0, -10.0)).casting_shadow())
        .with_fog(Color::WHITE, FOG_DENSITY)
        .with_override_material(Material::lambert(Color::from_hex(0xeeeeee)))
        .with_fixture(ground_plane(PLANE_WIDTH, PLANE_DEPTH, Material::lambert(Color::WHITE)));

    let spawn_area = SpawnArea::for_plane(PLANE_WIDTH, PLANE_DEPTH);
    for _ in 0..config.initial_cubes {
        registry.add_cube(&spawn_area);
    }

    let controls = ControlSurface::new(
        vec![
            ControlDescriptor::slider(Knob::RotationSpeed),
            ControlDescriptor::ReadOnly {
                readout: Readout::NumberOfObjects,
            },
            ControlDescriptor::Button {
                action: ControlAction::AddCube,
            },
            ControlDescriptor::Button {
                action: ControlAction::RemoveCube,
            },
            ControlDescriptor::Button {
                action: ControlAction::OutputObjects,
            },
        ],
        spawn_area,
    );

    Parts {
        stage: Stage::new(composition, registry),
        params: ControlParameters::new(config.rotation_speed, 0.0),
        controls,
    }
}
