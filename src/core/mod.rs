pub mod clock;
pub mod controls;
pub mod display_context;
pub mod perf;
pub mod scheduler;
pub mod surface_renderer;

pub use clock::Clock;
pub use controls::{
    ControlAction, ControlDescriptor, ControlEvent, ControlParameters, ControlSurface, Knob, Readout,
};
pub use display_context::Viewport;
pub use perf::FpsCounter;
pub use scheduler::{FrameScheduler, FrameSink, SchedulerState, TickOutcome};
pub use surface_renderer::SurfaceRenderer;
