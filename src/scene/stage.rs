use glam::Vec3;

use super::composition::SceneComposition;
use super::object::SceneObject;
use super::registry::ObjectRegistry;
use crate::core::Viewport;

/// Object following `x = base.x + a·cos(phase)`, `y = base.y + a·|sin(phase)|`
#[derive(Debug, Clone)]
pub struct Bouncer {
    pub object: SceneObject,
    pub base: Vec3,
    pub amplitude: f32,
    /// Unbounded accumulator, only consumed through sin/cos
    pub phase: f32,
}

impl Bouncer {
    /// Bounce around the object's current position
    pub fn new(object: SceneObject, amplitude: f32) -> Self {
        let base = object.transform.position;
        Self {
            object,
            base,
            amplitude,
            phase: 0.0,
        }
    }

    /// Advance the phase and recompute the trajectory position
    pub fn advance(&mut self, speed: f32) {
        self.phase += speed;
        let position = &mut self.object.transform.position;
        position.x = self.base.x + self.amplitude * self.phase.cos();
        position.y = self.base.y + self.amplitude * self.phase.sin().abs();
    }
}

/// Everything a chapter draws: static composition, tracked objects and bouncers
#[derive(Debug)]
pub struct Stage {
    pub composition: SceneComposition,
    pub registry: ObjectRegistry,
    pub bouncers: Vec<Bouncer>,
}

impl Stage {
    pub fn new(composition: SceneComposition, registry: ObjectRegistry) -> Self {
        Self {
            composition,
            registry,
            bouncers: Vec::new(),
        }
    }

    pub fn with_bouncer(mut self, bouncer: Bouncer) -> Self {
        self.bouncers.push(bouncer);
        self
    }

    /// Every drawable object: fixtures, then tracked objects, then bouncers
    pub fn drawables(&self) -> impl Iterator<Item = &SceneObject> {
        self.composition
            .fixtures()
            .iter()
            .chain(self.registry.iter().map(|(_, object)| object))
            .chain(self.bouncers.iter().map(|b| &b.object))
    }

    /// Rotate every tracked object on all three axes
    pub fn spin_tracked(&mut self, amount: f32) {
        self.registry.iter_mut().for_each(|object| object.spin(amount));
    }

    /// Advance every bouncer's trajectory
    pub fn advance_bouncers(&mut self, speed: f32) {
        self.bouncers.iter_mut().for_each(|b| b.advance(speed));
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.composition.resize(viewport);
    }
}
