use egui::{Align2, FontId, Painter, Pos2, Vec2};

use super::{Element, INK};

/// Point size used for every sticker glyph
pub(crate) const GLYPH_FONT_SIZE: f32 = 24.0;

/// Horizontal shift so the glyph sits roughly centered under the pointer
pub(crate) const GLYPH_OFFSET_X: f32 = 20.0;

/// Placed emoji or text glyph that can be dragged to a new position
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    glyph: String,
    position: Pos2,
}

impl Sticker {
    pub fn new(glyph: impl Into<String>, position: Pos2) -> Self {
        Self {
            glyph: glyph.into(),
            position,
        }
    }

    // Replace the position outright; no clamping to the surface bounds
    pub fn drag_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }
}

impl Element for Sticker {
    fn element_type(&self) -> &'static str {
        "sticker"
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        draw_glyph(painter, &self.glyph, self.position + origin);
    }
}

/// Shared text-rendering rule for stickers and their previews
pub(crate) fn draw_glyph(painter: &Painter, glyph: &str, position: Pos2) {
    painter.text(
        Pos2::new(position.x - GLYPH_OFFSET_X, position.y),
        Align2::LEFT_BOTTOM,
        glyph,
        FontId::proportional(GLYPH_FONT_SIZE),
        INK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_keeps_glyph_after_drag() {
        let mut sticker = Sticker::new("🔥", Pos2::new(50.0, 50.0));
        sticker.drag_to(Pos2::new(60.0, 60.0));

        assert_eq!(sticker.glyph(), "🔥");
        assert_eq!(sticker.position(), Pos2::new(60.0, 60.0));
    }

    #[test]
    fn test_sticker_accepts_arbitrary_text() {
        let sticker = Sticker::new("hi", Pos2::new(0.0, 0.0));
        assert_eq!(sticker.glyph(), "hi");
        assert_eq!(sticker.element_type(), "sticker");
    }
}
