pub mod frame_buffer;
pub mod raycaster;

pub use frame_buffer::FrameBuffer;
pub use raycaster::{shade_ray, trace, Hit, Raycaster};

use crate::camera::PerspectiveCamera;
use crate::core::Viewport;
use crate::error::RenderError;
use crate::scene::Stage;

/// Rendering engine - draws a stage from a camera each tick
pub trait RenderEngine {
    /// Render one frame of `stage` as seen by `camera`
    fn render(&mut self, stage: &Stage, camera: &PerspectiveCamera) -> Result<(), RenderError>;

    /// Host surface changed size
    fn resize(&mut self, viewport: Viewport);
}
