use crate::core::Viewport;

/// CPU-side RGBA8 image produced by the ray caster
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    viewport: Viewport,
    pixels: Vec<[u8; 4]>,
}

impl FrameBuffer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pixels: vec![[0, 0, 0, 255]; viewport.pixel_count()],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.viewport.width, self.viewport.height)
    }

    /// Reallocate for a new size, contents are cleared
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            *self = Self::new(viewport);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        Some(self.pixels[(y * self.viewport.width + x) as usize])
    }

    /// Mutable rows, top to bottom
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [[u8; 4]])> {
        let width = self.viewport.width as usize;
        self.pixels
            .chunks_exact_mut(width)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }

    /// Raw bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
