/// In-memory RGB pixel grid
use crate::geometry::Rgb;
use crate::host::Canvas;

/// A row-major pixel buffer drawn with integer Bresenham lines
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Change dimensions, discarding the current contents
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgb::BLACK; width * height];
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        Some(&self.pixels[y * self.width..(y + 1) * self.width])
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Liang-Barsky clip of a segment to the buffer bounds.
    ///
    /// Segments already inside are returned untouched so their pixels match
    /// an unclipped Bresenham walk exactly.
    fn clip(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<(i64, i64, i64, i64)> {
        let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
        if self.width == 0 || self.height == 0 {
            return None;
        }
        if self.contains(x1, y1) && self.contains(x2, y2) {
            return Some((x1, y1, x2, y2));
        }

        let (fx, fy) = (x1 as f64, y1 as f64);
        let (dx, dy) = ((x2 - x1) as f64, (y2 - y1) as f64);
        let (max_x, max_y) = ((self.width - 1) as f64, (self.height - 1) as f64);
        let mut u1 = 0.0_f64;
        let mut u2 = 1.0_f64;

        for (p, q) in [(-dx, fx), (dx, max_x - fx), (-dy, fy), (dy, max_y - fy)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > u2 {
                    return None;
                }
                u1 = u1.max(r);
            } else {
                if r < u1 {
                    return None;
                }
                u2 = u2.min(r);
            }
        }

        let clamp_x = |v: f64| v.round().clamp(0.0, max_x) as i64;
        let clamp_y = |v: f64| v.round().clamp(0.0, max_y) as i64;
        Some((
            clamp_x(fx + u1 * dx),
            clamp_y(fy + u1 * dy),
            clamp_x(fx + u2 * dx),
            clamp_y(fy + u2 * dy),
        ))
    }

    /// Write one pixel; off-screen coordinates are ignored
    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }
}

impl Canvas for Framebuffer {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        let Some((mut x, mut y, x2, y2)) = self.clip(x1, y1, x2, y2) else {
            return;
        };
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if self.contains(x, y) {
                self.pixels[y as usize * self.width + x as usize] = color;
            }
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}
