use egui::{Color32, Painter, Vec2};

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub(crate) use sticker::draw_glyph;
pub use stroke::Stroke;

/// Ink color shared by strokes, stickers and previews
pub(crate) const INK: Color32 = Color32::BLACK;

/// Common trait that everything drawable on the surface must implement
pub trait Element {
    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Draw the element using the provided painter, shifted by the
    /// surface origin in screen coordinates
    fn draw(&self, painter: &Painter, origin: Vec2);
}
