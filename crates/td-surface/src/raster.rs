//! Software RGB framebuffer.
//!
//! Pixels are sampled at their centres: pixel `(px, py)` is covered by a shape
//! if `(px + 0.5, py + 0.5)` lies inside it.  Translucent fills blend over the
//! existing pixel with straight alpha.

use td_core::{Color, Point};

use crate::Surface;

/// Luminance ramp used by [`RasterSurface::to_ascii`], darkest first.
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// A fixed-size RGB framebuffer.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width:      usize,
    height:     usize,
    background: [u8; 3],
    pixels:     Vec<[u8; 3]>,
}

impl RasterSurface {
    /// Create a `width × height` framebuffer cleared to `background`.
    ///
    /// The background's alpha is ignored; cleared pixels are opaque.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let bg = [background.r, background.g, background.b];
        Self {
            width,
            height,
            background: bg,
            pixels: vec![bg; width * height],
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the framebuffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Raw row-major pixel data.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Downsample to `cols × rows` characters by average luminance.
    ///
    /// Rows are joined with `'\n'`.  Useful for headless previews.
    pub fn to_ascii(&self, cols: usize, rows: usize) -> String {
        let cols = cols.clamp(1, self.width.max(1));
        let rows = rows.clamp(1, self.height.max(1));
        let mut out = String::with_capacity((cols + 1) * rows);

        for row in 0..rows {
            let y0 = row * self.height / rows;
            let y1 = ((row + 1) * self.height / rows).max(y0 + 1);
            for col in 0..cols {
                let x0 = col * self.width / cols;
                let x1 = ((col + 1) * self.width / cols).max(x0 + 1);

                let mut sum = 0.0f32;
                let mut n = 0u32;
                for y in y0..y1.min(self.height) {
                    for x in x0..x1.min(self.width) {
                        sum += luminance(self.pixels[y * self.width + x]);
                        n += 1;
                    }
                }
                let lum = if n == 0 { 0.0 } else { sum / n as f32 };
                let idx = ((lum / 255.0) * (ASCII_RAMP.len() - 1) as f32).round() as usize;
                out.push(ASCII_RAMP[idx.min(ASCII_RAMP.len() - 1)] as char);
            }
            if row + 1 < rows {
                out.push('\n');
            }
        }
        out
    }

    #[inline]
    fn blend(&mut self, x: usize, y: usize, color: Color) {
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let px = &mut self.pixels[y * self.width + x];
        let src = [color.r, color.g, color.b];
        for (dst, s) in px.iter_mut().zip(src) {
            *dst = (s as f32 * a + *dst as f32 * (1.0 - a)).round() as u8;
        }
    }

    /// Pixel index span `[lo, hi)` whose centres fall in `[from, to)`, clipped to `limit`.
    fn span(from: f32, to: f32, limit: usize) -> (usize, usize) {
        let lo = (from - 0.5).ceil().max(0.0);
        let hi = (to - 0.5).ceil().max(0.0);
        (
            (lo as usize).min(limit),
            (hi as usize).min(limit),
        )
    }
}

fn luminance(p: [u8; 3]) -> f32 {
    0.2126 * p[0] as f32 + 0.7152 * p[1] as f32 + 0.0722 * p[2] as f32
}

impl Surface for RasterSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn clear(&mut self) {
        let bg = self.background;
        self.pixels.fill(bg);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let center = Point::new(x, y);
        let r_sq = radius * radius;
        let (x0, x1) = Self::span(x - radius, x + radius, self.width);
        let (y0, y1) = Self::span(y - radius, y + radius, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let sample = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                if center.distance_sq(sample) <= r_sq {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }
}
