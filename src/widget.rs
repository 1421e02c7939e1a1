use crate::input::DirectionalInput;
use crate::surface::Surface;

/// A widget the host loop can drive: poll input edges, then emit draw
/// commands. The loop calls `update` then `render` once per frame.
pub trait Widget {
    fn update(&mut self, input: &DirectionalInput);
    fn render(&self, surface: &mut dyn Surface);
}
