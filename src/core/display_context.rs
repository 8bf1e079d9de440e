use crate::error::SetupError;

/// Viewport - size of the render surface supplied by the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting zero-sized dimensions
    pub fn new(width: u32, height: u32) -> Result<Self, SetupError> {
        if width == 0 || height == 0 {
            return Err(SetupError::ZeroViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width over height, used for the camera projection
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Total size in bytes for RGBA buffer
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Viewport shrunk by `scale`, never below 1x1
    pub fn scaled(&self, scale: f32) -> Viewport {
        Viewport {
            width: ((self.width as f32 * scale).round() as u32).max(1),
            height: ((self.height as f32 * scale).round() as u32).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_viewport_with_dimensions() {
        let vp = Viewport::new(1920, 1080).unwrap();
        assert_eq!(vp.width, 1920);
        assert_eq!(vp.height, 1080);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            Viewport::new(0, 600),
            Err(SetupError::ZeroViewport { width: 0, height: 600 })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(Viewport::new(800, 0).is_err());
    }

    #[test]
    fn test_aspect() {
        let vp = Viewport::new(800, 400).unwrap();
        assert!((vp.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_buffer_size_rgba() {
        let vp = Viewport::new(100, 100).unwrap();
        assert_eq!(vp.buffer_size(), 40000);
    }

    #[test]
    fn test_scaled_never_collapses() {
        let vp = Viewport::new(3, 2).unwrap();
        let small = vp.scaled(0.01);
        assert_eq!((small.width, small.height), (1, 1));

        let half = Viewport::new(800, 600).unwrap().scaled(0.5);
        assert_eq!((half.width, half.height), (400, 300));
    }
}
