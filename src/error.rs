//! Error types shared by setup and rendering

/// Fatal precondition failures raised while building a chapter
#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    /// Viewport has no area to render into
    #[error("viewport must be non-zero, got {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },

    /// Render scale outside (0, 1]
    #[error("render scale must be in (0, 1], got {0}")]
    InvalidRenderScale(f32),

    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-frame rendering failures
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Presentation surface rejected the frame
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
