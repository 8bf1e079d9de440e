use super::controls::ControlParameters;
use super::perf::FpsCounter;
use crate::error::RenderError;
use crate::render::RenderEngine;
use crate::scene::Stage;

/// Hook for asking the host to run another tick on the next display refresh
pub trait FrameSink {
    fn request_frame(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame was advanced and rendered
    Rendered { frame: u64 },
    /// Scheduler is not running, nothing happened
    Skipped,
}

/// Drives the per-frame animation loop
///
/// Ticks only do work between `start` and `stop`. Once stopped the scheduler
/// never runs again, so a torn-down chapter cannot be drawn.
#[derive(Debug)]
pub struct FrameScheduler {
    state: SchedulerState,
    fps: FpsCounter,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            fps: FpsCounter::new(),
            frames: 0,
        }
    }

    /// Begin ticking and request the first frame; false if already started or stopped
    pub fn start(&mut self, sink: &dyn FrameSink) -> bool {
        if self.state != SchedulerState::Idle {
            return false;
        }
        self.state = SchedulerState::Running;
        log::debug!("frame scheduler started");
        sink.request_frame();
        true
    }

    /// Run one tick: rotate tracked objects, advance bouncers, render, count, reschedule
    pub fn tick<E: RenderEngine + ?Sized>(
        &mut self,
        stage: &mut Stage,
        params: &ControlParameters,
        engine: &mut E,
        sink: &dyn FrameSink,
        delta: f32,
    ) -> Result<TickOutcome, RenderError> {
        if self.state != SchedulerState::Running {
            return Ok(TickOutcome::Skipped);
        }

        stage.spin_tracked(params.rotation_speed());
        stage.advance_bouncers(params.bouncing_speed());

        let rendered = engine.render(stage, &stage.composition.camera);
        if rendered.is_ok() {
            self.frames += 1;
            if self.fps.record(delta) {
                log::debug!("FPS: {:.1}", self.fps.fps());
            }
        }

        // Keep the loop alive even when a frame fails to render
        sink.request_frame();

        rendered.map(|_| TickOutcome::Rendered { frame: self.frames })
    }

    /// Stop ticking; true only on the first call that actually stops
    pub fn stop(&mut self) -> bool {
        if self.state == SchedulerState::Stopped {
            return false;
        }
        self.state = SchedulerState::Stopped;
        log::debug!("frame scheduler stopped after {} frames", self.frames);
        true
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn fps(&self) -> &FpsCounter {
        &self.fps
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::core::Viewport;
    use crate::scene::{ObjectRegistry, SceneComposition, SpawnArea};
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingSink {
        requests: Cell<u32>,
    }

    impl FrameSink for CountingSink {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    #[derive(Default)]
    struct CountingEngine {
        renders: u32,
        fail: bool,
    }

    impl RenderEngine for CountingEngine {
        fn render(&mut self, _stage: &Stage, _camera: &PerspectiveCamera) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::Surface(wgpu::SurfaceError::Lost));
            }
            self.renders += 1;
            Ok(())
        }

        fn resize(&mut self, _viewport: Viewport) {}
    }

    fn stage() -> Stage {
        let composition = SceneComposition::new(Viewport::new(320, 240).unwrap());
        Stage::new(composition, ObjectRegistry::with_seed(2))
    }

    #[test]
    fn idle_scheduler_skips() {
        let mut scheduler = FrameScheduler::new();
        let mut engine = CountingEngine::default();
        let sink = CountingSink::default();
        let params = ControlParameters::new(0.1, 0.0);

        let outcome = scheduler.tick(&mut stage(), &params, &mut engine, &sink, 0.016).unwrap();

        assert_eq!(outcome, TickOutcome::Skipped);
        assert_eq!(engine.renders, 0);
        assert_eq!(sink.requests.get(), 0);
    }

    #[test]
    fn start_requests_first_frame_once() {
        let mut scheduler = FrameScheduler::new();
        let sink = CountingSink::default();

        assert!(scheduler.start(&sink));
        assert!(!scheduler.start(&sink));
        assert_eq!(sink.requests.get(), 1);
        assert!(scheduler.is_running());
    }

    #[test]
    fn tick_renders_and_reschedules() {
        let mut scheduler = FrameScheduler::new();
        let mut engine = CountingEngine::default();
        let sink = CountingSink::default();
        let params = ControlParameters::new(0.1, 0.0);
        let mut stage = stage();
        stage.registry.add_cube(&SpawnArea::for_plane(60.0, 40.0));

        scheduler.start(&sink);
        let outcome = scheduler.tick(&mut stage, &params, &mut engine, &sink, 0.016).unwrap();

        assert_eq!(outcome, TickOutcome::Rendered { frame: 1 });
        assert_eq!(engine.renders, 1);
        assert_eq!(sink.requests.get(), 2);
        assert_eq!(scheduler.fps().total_frames(), 1);

        let (_, cube) = stage.registry.last().unwrap();
        assert!((cube.transform.rotation.x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn failed_render_still_reschedules() {
        let mut scheduler = FrameScheduler::new();
        let mut engine = CountingEngine {
            fail: true,
            ..Default::default()
        };
        let sink = CountingSink::default();
        let params = ControlParameters::new(0.0, 0.0);

        scheduler.start(&sink);
        assert!(scheduler.tick(&mut stage(), &params, &mut engine, &sink, 0.016).is_err());
        assert_eq!(sink.requests.get(), 2);
        assert_eq!(scheduler.frames(), 0);
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let mut scheduler = FrameScheduler::new();
        let mut engine = CountingEngine::default();
        let sink = CountingSink::default();
        let params = ControlParameters::new(0.1, 0.1);

        scheduler.start(&sink);
        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert!(!scheduler.start(&sink));

        let outcome = scheduler.tick(&mut stage(), &params, &mut engine, &sink, 0.016).unwrap();
        assert_eq!(outcome, TickOutcome::Skipped);
        assert_eq!(engine.renders, 0);
        assert_eq!(scheduler.state(), SchedulerState::Stopped);
    }
}
