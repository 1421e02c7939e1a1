use crate::geometry::{Point, Rect};

/// RGBA color, one byte per channel.
pub type Color = [u8; 4];

/// Drawing target for widgets. The frame-buffer implementation lives in
/// `graphics`; tests use a recording implementation instead.
pub trait Surface {
    /// Fills a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a line segment of the given thickness, centered on the segment.
    fn line(&mut self, p1: Point, p2: Point, thickness: f32, color: Color);

    /// Draws a rectangle outline, the border extending inward from the edges.
    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Fills a rounded rectangle. `roundness` is the requested corner radius
    /// in pixels; it is clamped so adjacent corners never overlap.
    fn rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color);
}
