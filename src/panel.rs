// panel.rs - egui debug panel bound to a chapter's control surface
use glam::Vec3;

use crate::chapters::Chapter;
use crate::core::{ControlDescriptor, ControlEvent, ControlParameters};

/// Snapshot of everything the panel shows, taken before each tick
#[derive(Debug, Clone)]
pub struct PanelModel {
    pub title: &'static str,
    pub descriptors: Vec<ControlDescriptor>,
    pub params: ControlParameters,
    pub fps: f32,
    pub frame_time_ms: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub render_size: (u32, u32),
}

impl PanelModel {
    pub fn capture(chapter: &Chapter, render_size: (u32, u32)) -> Self {
        let camera = &chapter.stage().composition.camera;
        let fps = chapter.scheduler().fps();
        Self {
            title: chapter.id().title(),
            descriptors: chapter.controls().descriptors().to_vec(),
            params: chapter.params().clone(),
            fps: fps.fps(),
            frame_time_ms: fps.frame_time_ms(),
            camera_position: camera.position,
            camera_target: camera.target,
            render_size,
        }
    }
}

/// Draws the FPS heading and the chapter controls, queuing edits as events
///
/// Events are drained by the host after the tick so edits land between ticks.
pub struct DebugPanel {
    visible: bool,
    model: Option<PanelModel>,
    pending: Vec<ControlEvent>,
}

impl DebugPanel {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            model: None,
            pending: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_model(&mut self, model: PanelModel) {
        self.model = Some(model);
    }

    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }
        let Some(model) = self.model.as_mut() else {
            return;
        };
        let pending = &mut self.pending;

        egui::Window::new(model.title)
            .title_bar(true)
            .resizable(false)
            .fixed_pos(egui::pos2(10.0, 10.0))
            .default_width(250.0)
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", model.fps))
                        .size(32.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );
                ui.label(
                    egui::RichText::new(format!("{:.2} ms", model.frame_time_ms))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(
                    egui::RichText::new("Controls")
                        .size(16.0)
                        .color(egui::Color32::from_rgb(200, 150, 100)),
                );
                for descriptor in &model.descriptors {
                    draw_control(ui, descriptor, &mut model.params, pending);
                }

                ui.add_space(5.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(
                    egui::RichText::new("Camera")
                        .size(16.0)
                        .color(egui::Color32::from_rgb(100, 200, 100)),
                );
                let p = model.camera_position;
                let t = model.camera_target;
                ui.monospace(format!("Pos: ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z));
                ui.monospace(format!("Look: ({:.1}, {:.1}, {:.1})", t.x, t.y, t.z));
                ui.monospace(format!(
                    "Resolution: {}x{}",
                    model.render_size.0, model.render_size.1
                ));
            });
    }
}

fn draw_control(
    ui: &mut egui::Ui,
    descriptor: &ControlDescriptor,
    params: &mut ControlParameters,
    pending: &mut Vec<ControlEvent>,
) {
    match *descriptor {
        ControlDescriptor::Slider { knob, min, max } => {
            let mut value = params.get(knob);
            let response = ui.add(egui::Slider::new(&mut value, min..=max).text(knob.label()));
            if response.changed() {
                // Keep the slider responsive until the next snapshot
                params.set(knob, value);
                pending.push(ControlEvent::SetKnob(knob, value));
            }
        }
        ControlDescriptor::ReadOnly { readout } => {
            ui.monospace(format!("{}: {}", readout.label(), params.readout(readout)));
        }
        ControlDescriptor::Button { action } => {
            if ui.button(action.label()).clicked() {
                pending.push(ControlEvent::Invoke(action));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::ChapterId;
    use crate::config::PlaygroundConfig;
    use crate::core::Viewport;

    fn chapter() -> Chapter {
        let config = PlaygroundConfig {
            chapter: ChapterId::Two,
            seed: Some(3),
            initial_cubes: 2,
            ..PlaygroundConfig::default()
        };
        Chapter::build(&config, Viewport::new(800, 600).unwrap())
    }

    #[test]
    fn capture_copies_chapter_state() {
        let model = PanelModel::capture(&chapter(), (280, 210));
        assert_eq!(model.title, "Basic Scene");
        assert_eq!(model.descriptors.len(), 5);
        assert_eq!(model.render_size, (280, 210));
        assert_eq!(model.camera_position, Vec3::new(-30.0, 40.0, 30.0));
    }

    #[test]
    fn headless_pass_emits_nothing_without_input() {
        let ctx = egui::Context::default();
        let mut panel = DebugPanel::new(true);
        panel.set_model(PanelModel::capture(&chapter(), (280, 210)));

        let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx));

        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn hidden_panel_draws_nothing() {
        let ctx = egui::Context::default();
        let mut panel = DebugPanel::new(false);
        panel.set_model(PanelModel::capture(&chapter(), (280, 210)));

        let output = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx));

        assert!(output.shapes.is_empty());
        assert!(!panel.is_visible());
    }
}
