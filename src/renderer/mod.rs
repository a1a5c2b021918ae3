//! Renderer — the depth-buffered rasterizer.
//!
//! Takes camera-space samples from the engine, projects them onto a fixed
//! character grid, and resolves occlusion with an inverse-depth buffer.
//!
//! The renderer knows nothing about rotation, time, or terminals. Given the
//! same samples in the same order, it always produces the same frame.

use crate::config::CameraConfig;
use crate::engine::SampleSink;
use crate::types::{Vec3, Viewport};

/// Glyph of a cell that no sample reached this frame.
pub const BLANK: char = ' ';

/// Substituted for a shifted depth of exactly zero.
pub const DEPTH_EPSILON: f64 = 1e-6;

/// Fixed projection constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub k1: f64,
}

impl Default for Camera {
    fn default() -> Self {
        CameraConfig::default().into()
    }
}

impl From<CameraConfig> for Camera {
    fn from(c: CameraConfig) -> Self {
        Camera {
            distance: c.distance,
            k1: c.k1,
        }
    }
}

/// Frame buffer and depth buffer of one animation session.
///
/// Both buffers are row-major (`index = x + y * width`). After any number of
/// `plot` calls, `depth[i]` is the largest inverse depth written to cell `i`
/// since the last `clear`, and `glyphs[i]` is the glyph of that write.
pub struct Canvas {
    viewport: Viewport,
    camera: Camera,
    glyphs: Vec<char>,
    depth: Vec<f64>,
}

impl Canvas {
    pub fn new(viewport: Viewport, camera: Camera) -> Self {
        let cells = viewport.cells();
        Self {
            viewport,
            camera,
            glyphs: vec![BLANK; cells],
            depth: vec![0.0; cells],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Reset every cell to blank and every depth to zero.
    pub fn clear(&mut self) {
        self.glyphs.fill(BLANK);
        self.depth.fill(0.0);
    }

    /// Project a camera-space point and write `glyph` if it is the nearest
    /// sample seen at its cell this frame.
    ///
    /// Returns `false` when the sample lands off-screen or behind an equal or
    /// nearer write. Off-screen samples are dropped, never clamped.
    pub fn plot(&mut self, point: Vec3, glyph: char) -> bool {
        let mut z = point.z + self.camera.distance;
        if z == 0.0 {
            z = DEPTH_EPSILON;
        }
        let inv_depth = 1.0 / z;

        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let sx = (w / 2.0 + self.camera.k1 * inv_depth * point.x * 2.0).floor();
        let sy = (h / 2.0 + self.camera.k1 * inv_depth * point.y).floor();

        let Some(index) = self.index_of(sx, sy) else {
            return false;
        };

        if inv_depth > self.depth[index] {
            self.depth[index] = inv_depth;
            self.glyphs[index] = glyph;
            true
        } else {
            false
        }
    }

    /// Row-major index of screen cell `(sx, sy)`, if it lies on the grid.
    ///
    /// Each axis is checked on its own so `sx == width` is dropped instead
    /// of wrapping onto the next row. NaN coordinates fail both comparisons.
    fn index_of(&self, sx: f64, sy: f64) -> Option<usize> {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        if !(sx >= 0.0 && sx < w && sy >= 0.0 && sy < h) {
            return None;
        }
        Some(sx as usize + sy as usize * self.viewport.width as usize)
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.cell(x, y).map(|i| self.glyphs[i])
    }

    pub fn depth_at(&self, x: u16, y: u16) -> Option<f64> {
        self.cell(x, y).map(|i| self.depth[i])
    }

    fn cell(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.viewport.width && y < self.viewport.height)
            .then(|| x as usize + y as usize * self.viewport.width as usize)
    }

    /// Serialize the frame buffer as `height` lines of `width` glyphs, each
    /// terminated by `'\n'`.
    pub fn serialize(&self) -> String {
        let width = self.viewport.width as usize;
        let mut out = String::with_capacity(self.glyphs.len() + self.viewport.height as usize);
        if width == 0 {
            return out;
        }
        for row in self.glyphs.chunks(width) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl SampleSink for Canvas {
    fn accept(&mut self, point: Vec3, glyph: char) {
        self.plot(point, glyph);
    }
}
