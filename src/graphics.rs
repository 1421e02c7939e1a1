use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::geometry::{Point, Rect};
use crate::surface::{Color, Surface};

/// Owns the pixel buffer and the window surface it is presented to.
pub struct GraphicsContext {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsContext {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Tracks the window size so the buffer scales to it. The logical buffer
    /// dimensions stay fixed.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Borrows the frame buffer as a drawing surface for one render pass.
    pub fn frame_surface(&mut self) -> FrameSurface<'_> {
        FrameSurface {
            frame: self.pixels.frame_mut(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

/// Software rasterizer over the RGBA frame buffer.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl FrameSurface<'_> {
    fn set_pixel(&mut self, px: i32, py: i32, color: Color) {
        if px < 0 || py < 0 {
            return;
        }
        let (px, py) = (px as u32, py as u32);
        if px < self.width && py < self.height {
            let index = ((py * self.width + px) * 4) as usize;
            if index + 3 < self.frame.len() {
                self.frame[index..index + 4].copy_from_slice(&color);
            }
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.floor() as i32;
        let y0 = rect.y.floor() as i32;
        let x1 = rect.right().ceil() as i32;
        let y1 = rect.bottom().ceil() as i32;

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    fn line(&mut self, p1: Point, p2: Point, thickness: f32, color: Color) {
        let half = thickness / 2.0;

        // Axis-aligned fast paths cover everything the table emits.
        if (p1.y - p2.y).abs() < f32::EPSILON {
            let x = p1.x.min(p2.x);
            let w = (p2.x - p1.x).abs();
            self.fill_rect(Rect::new(x, p1.y - half, w, thickness), color);
            return;
        }
        if (p1.x - p2.x).abs() < f32::EPSILON {
            let y = p1.y.min(p2.y);
            let h = (p2.y - p1.y).abs();
            self.fill_rect(Rect::new(p1.x - half, y, thickness, h), color);
            return;
        }

        // General case: fill every pixel within half a thickness of the segment.
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let len_sq = dx * dx + dy * dy;

        let x0 = (p1.x.min(p2.x) - half).floor() as i32;
        let y0 = (p1.y.min(p2.y) - half).floor() as i32;
        let x1 = (p1.x.max(p2.x) + half).ceil() as i32;
        let y1 = (p1.y.max(p2.y) + half).ceil() as i32;

        for py in y0..y1 {
            for px in x0..x1 {
                let fx = px as f32 + 0.5;
                let fy = py as f32 + 0.5;
                let t = if len_sq > 0.0 {
                    (((fx - p1.x) * dx + (fy - p1.y) * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let qx = p1.x + t * dx - fx;
                let qy = p1.y + t * dy - fy;
                if qx * qx + qy * qy <= half * half {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.w, thickness), color);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom() - thickness, rect.w, thickness),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, thickness, rect.h), color);
        self.fill_rect(
            Rect::new(rect.right() - thickness, rect.y, thickness, rect.h),
            color,
        );
    }

    fn rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color) {
        let radius = roundness.max(0.0).min(rect.w.min(rect.h) / 2.0);

        let x0 = rect.x.floor() as i32;
        let y0 = rect.y.floor() as i32;
        let x1 = rect.right().ceil() as i32;
        let y1 = rect.bottom().ceil() as i32;

        for py in y0..y1 {
            for px in x0..x1 {
                let fx = px as f32 + 0.5;
                let fy = py as f32 + 0.5;
                // Distance to the inner rectangle whose corners are the
                // centers of the corner arcs.
                let cx = fx.clamp(rect.x + radius, rect.right() - radius);
                let cy = fy.clamp(rect.y + radius, rect.bottom() - radius);
                let dx = fx - cx;
                let dy = fy - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }
}
