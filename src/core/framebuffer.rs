use nalgebra::Vector3;

/// Per-pixel record of the nearest surface drawn so far this frame.
///
/// Larger values are nearer. Every entry starts at negative infinity and only
/// ever grows until the next `reset`.
#[derive(Debug, Clone)]
pub struct DepthBuffer {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![f32::NEG_INFINITY; width * height],
        }
    }

    pub fn reset(&mut self) {
        self.values.fill(f32::NEG_INFINITY);
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.values[self.index(x, y)])
        } else {
            None
        }
    }

    /// Depth test and update.
    ///
    /// Fails when `depth` is strictly behind the stored value. Otherwise the
    /// value is stored and the test passes, so an equal depth lets the most
    /// recently drawn face win.
    #[inline]
    pub fn test_and_set(&mut self, x: usize, y: usize, depth: f32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.index(x, y);
        if depth < self.values[idx] {
            return false;
        }
        self.values[idx] = depth;
        true
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Color and depth targets for one frame.
///
/// Colors are stored in byte range (0..=255 per channel) as produced by the
/// shading modes; clamping happens when the buffer is presented.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    color_buffer: Vec<Vector3<f32>>,
    pub depth_buffer: DepthBuffer,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![Vector3::zeros(); width * height],
            depth_buffer: DepthBuffer::new(width, height),
        }
    }

    /// Fills the color buffer with `background` and resets every depth.
    pub fn clear(&mut self, background: Vector3<f32>) {
        self.color_buffer.fill(background);
        self.depth_buffer.reset();
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Should only be called after the depth test for (x, y) passed.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Vector3<f32>) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.color_buffer[idx] = color;
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Vector3<f32>> {
        if self.in_bounds(x, y) {
            Some(self.color_buffer[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Vector3<f32>] {
        &self.color_buffer
    }
}
