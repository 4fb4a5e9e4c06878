use egui::{Painter, Pos2, Stroke as EguiStroke, Vec2};

use crate::element::{Element, INK, draw_glyph};

/// Transient tool indicator that follows the pointer between placements.
///
/// At most one preview exists at a time; it is rebuilt on every hover
/// move and dropped the moment a placement starts or the pointer is
/// released.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    /// Unfilled circle whose diameter matches the active brush width
    Brush { position: Pos2, width: f32 },
    /// Copy of the selected glyph, drawn exactly like a placed sticker
    Sticker { glyph: String, position: Pos2 },
}

impl Element for Preview {
    fn element_type(&self) -> &'static str {
        match self {
            Preview::Brush { .. } => "brush-preview",
            Preview::Sticker { .. } => "sticker-preview",
        }
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            Preview::Brush { position, width } => {
                painter.circle_stroke(*position + origin, width / 2.0, EguiStroke::new(1.0, INK));
            }
            Preview::Sticker { glyph, position } => {
                draw_glyph(painter, glyph, *position + origin);
            }
        }
    }
}
