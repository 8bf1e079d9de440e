use serde::Serialize;

use crate::scene::{ObjectSnapshot, SpawnArea, Stage};

/// Tunable numeric parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    RotationSpeed,
    BouncingSpeed,
}

impl Knob {
    pub const fn label(&self) -> &'static str {
        match self {
            Knob::RotationSpeed => "rotationSpeed",
            Knob::BouncingSpeed => "bouncingSpeed",
        }
    }

    /// Inclusive slider range
    pub const fn range(&self) -> (f32, f32) {
        match self {
            Knob::RotationSpeed | Knob::BouncingSpeed => (0.0, 0.5),
        }
    }
}

/// Derived value shown but never edited by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readout {
    NumberOfObjects,
}

impl Readout {
    pub const fn label(&self) -> &'static str {
        match self {
            Readout::NumberOfObjects => "numberOfObjects",
        }
    }
}

/// Button bound to a registry operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    AddCube,
    RemoveCube,
    OutputObjects,
}

impl ControlAction {
    pub const fn label(&self) -> &'static str {
        match self {
            ControlAction::AddCube => "addCube",
            ControlAction::RemoveCube => "removeCube",
            ControlAction::OutputObjects => "outputObjects",
        }
    }
}

/// One row of the debug panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlDescriptor {
    Slider { knob: Knob, min: f32, max: f32 },
    ReadOnly { readout: Readout },
    Button { action: ControlAction },
}

impl ControlDescriptor {
    pub fn slider(knob: Knob) -> Self {
        let (min, max) = knob.range();
        ControlDescriptor::Slider { knob, min, max }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlDescriptor::Slider { knob, .. } => knob.label(),
            ControlDescriptor::ReadOnly { readout } => readout.label(),
            ControlDescriptor::Button { action } => action.label(),
        }
    }
}

/// Edit emitted by the panel, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    SetKnob(Knob, f32),
    Invoke(ControlAction),
}

/// Values read by the frame scheduler every tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlParameters {
    rotation_speed: f32,
    bouncing_speed: f32,
    number_of_objects: usize,
}

impl ControlParameters {
    pub fn new(rotation_speed: f32, bouncing_speed: f32) -> Self {
        let mut params = Self {
            rotation_speed: 0.0,
            bouncing_speed: 0.0,
            number_of_objects: 0,
        };
        params.set(Knob::RotationSpeed, rotation_speed);
        params.set(Knob::BouncingSpeed, bouncing_speed);
        params
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn bouncing_speed(&self) -> f32 {
        self.bouncing_speed
    }

    pub fn number_of_objects(&self) -> usize {
        self.number_of_objects
    }

    pub fn get(&self, knob: Knob) -> f32 {
        match knob {
            Knob::RotationSpeed => self.rotation_speed,
            Knob::BouncingSpeed => self.bouncing_speed,
        }
    }

    /// Store a knob value clamped into its range, returns the stored value
    pub fn set(&mut self, knob: Knob, value: f32) -> f32 {
        let (min, max) = knob.range();
        let value = if value.is_nan() { min } else { value.clamp(min, max) };
        match knob {
            Knob::RotationSpeed => self.rotation_speed = value,
            Knob::BouncingSpeed => self.bouncing_speed = value,
        }
        value
    }

    pub fn readout(&self, readout: Readout) -> String {
        match readout {
            Readout::NumberOfObjects => self.number_of_objects.to_string(),
        }
    }
}

/// Binds a chapter's parameters and actions to an external panel
///
/// The only path by which panel input reaches the registry.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    descriptors: Vec<ControlDescriptor>,
    spawn_area: SpawnArea,
}

impl ControlSurface {
    pub fn new(descriptors: Vec<ControlDescriptor>, spawn_area: SpawnArea) -> Self {
        Self {
            descriptors,
            spawn_area,
        }
    }

    pub fn descriptors(&self) -> &[ControlDescriptor] {
        &self.descriptors
    }

    pub fn spawn_area(&self) -> &SpawnArea {
        &self.spawn_area
    }

    fn exposes_knob(&self, knob: Knob) -> bool {
        self.descriptors
            .iter()
            .any(|d| matches!(d, ControlDescriptor::Slider { knob: k, .. } if *k == knob))
    }

    fn exposes_action(&self, action: ControlAction) -> bool {
        self.descriptors
            .iter()
            .any(|d| matches!(d, ControlDescriptor::Button { action: a } if *a == action))
    }

    /// Push derived values from the registry into the parameters
    pub fn sync(&self, params: &mut ControlParameters, stage: &Stage) {
        params.number_of_objects = stage.registry.count();
    }

    /// Apply one panel event; `OutputObjects` returns the dump it produced
    pub fn apply(
        &self,
        event: ControlEvent,
        params: &mut ControlParameters,
        stage: &mut Stage,
    ) -> Option<Vec<ObjectSnapshot>> {
        match event {
            ControlEvent::SetKnob(knob, value) => {
                if !self.exposes_knob(knob) {
                    log::warn!("ignoring edit of unexposed knob {}", knob.label());
                    return None;
                }
                let stored = params.set(knob, value);
                log::debug!("{} = {:.3}", knob.label(), stored);
                None
            }
            ControlEvent::Invoke(action) => {
                if !self.exposes_action(action) {
                    log::warn!("ignoring unexposed action {}", action.label());
                    return None;
                }
                let dump = self.invoke(action, stage);
                self.sync(params, stage);
                dump
            }
        }
    }

    fn invoke(&self, action: ControlAction, stage: &mut Stage) -> Option<Vec<ObjectSnapshot>> {
        match action {
            ControlAction::AddCube => {
                let id = stage.registry.add_cube(&self.spawn_area);
                log::info!("added cube {} ({} objects)", id, stage.registry.count());
                None
            }
            ControlAction::RemoveCube => {
                if stage.registry.remove_object() {
                    log::info!("removed cube ({} objects)", stage.registry.count());
                } else {
                    log::debug!("removeCube on empty registry");
                }
                None
            }
            ControlAction::OutputObjects => Some(stage.registry.dump().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::scene::{ObjectRegistry, SceneComposition};

    fn stage() -> Stage {
        let composition = SceneComposition::new(Viewport::new(800, 600).unwrap());
        Stage::new(composition, ObjectRegistry::with_seed(11))
    }

    fn full_surface() -> ControlSurface {
        ControlSurface::new(
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
            SpawnArea::for_plane(60.0, 40.0),
        )
    }

    #[test]
    fn set_clamps_into_range() {
        let mut params = ControlParameters::new(0.02, 0.03);
        assert_eq!(params.set(Knob::RotationSpeed, 2.0), 0.5);
        assert_eq!(params.set(Knob::BouncingSpeed, -1.0), 0.0);
        assert_eq!(params.set(Knob::RotationSpeed, f32::NAN), 0.0);
    }

    #[test]
    fn slider_descriptor_uses_knob_range() {
        assert_eq!(
            ControlDescriptor::slider(Knob::BouncingSpeed),
            ControlDescriptor::Slider {
                knob: Knob::BouncingSpeed,
                min: 0.0,
                max: 0.5
            }
        );
    }

    #[test]
    fn actions_keep_count_in_sync() {
        let surface = full_surface();
        let mut params = ControlParameters::new(0.02, 0.0);
        let mut stage = stage();

        for _ in 0..3 {
            surface.apply(ControlEvent::Invoke(ControlAction::AddCube), &mut params, &mut stage);
            assert_eq!(params.number_of_objects(), stage.registry.count());
        }
        assert_eq!(params.number_of_objects(), 3);

        surface.apply(ControlEvent::Invoke(ControlAction::RemoveCube), &mut params, &mut stage);
        assert_eq!(params.number_of_objects(), 2);
        assert_eq!(params.readout(Readout::NumberOfObjects), "2");
    }

    #[test]
    fn remove_on_empty_keeps_zero() {
        let surface = full_surface();
        let mut params = ControlParameters::new(0.02, 0.0);
        let mut stage = stage();

        surface.apply(ControlEvent::Invoke(ControlAction::RemoveCube), &mut params, &mut stage);
        assert_eq!(params.number_of_objects(), 0);
        assert_eq!(stage.registry.count(), 0);
    }

    #[test]
    fn output_objects_returns_dump_without_mutation() {
        let surface = full_surface();
        let mut params = ControlParameters::new(0.02, 0.0);
        let mut stage = stage();
        surface.apply(ControlEvent::Invoke(ControlAction::AddCube), &mut params, &mut stage);

        let dump = surface
            .apply(ControlEvent::Invoke(ControlAction::OutputObjects), &mut params, &mut stage)
            .unwrap();

        assert_eq!(dump.len(), 1);
        assert_eq!(dump[0].name, "cube-0");
        assert_eq!(stage.registry.count(), 1);
    }

    #[test]
    fn unexposed_controls_are_ignored() {
        let surface = full_surface();
        let mut params = ControlParameters::new(0.02, 0.1);
        let mut stage = stage();

        surface.apply(ControlEvent::SetKnob(Knob::BouncingSpeed, 0.4), &mut params, &mut stage);
        assert_eq!(params.bouncing_speed(), 0.1);

        let minimal = ControlSurface::new(
            vec![ControlDescriptor::slider(Knob::RotationSpeed)],
            SpawnArea::for_plane(60.0, 20.0),
        );
        minimal.apply(ControlEvent::Invoke(ControlAction::AddCube), &mut params, &mut stage);
        assert_eq!(stage.registry.count(), 0);
    }

    #[test]
    fn knob_edit_lands_in_parameters() {
        let surface = full_surface();
        let mut params = ControlParameters::new(0.02, 0.0);
        let mut stage = stage();

        surface.apply(ControlEvent::SetKnob(Knob::RotationSpeed, 0.25), &mut params, &mut stage);
        assert_eq!(params.rotation_speed(), 0.25);
        assert_eq!(params.get(Knob::RotationSpeed), 0.25);
    }
}
