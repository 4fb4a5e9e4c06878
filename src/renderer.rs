// src/renderer.rs
use egui::{Color32, Painter, Rect, Stroke as EguiStroke};

use crate::document::Document;
use crate::element::Element;
use crate::preview::Preview;

/// Side length of the square drawing surface, in points
pub const SURFACE_SIZE: f32 = 256.0;

/// Redraws the whole surface from model state every frame
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
    frame: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            frame: Color32::DARK_GRAY,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one full pass: background, committed strokes, committed
    /// stickers, then the preview on top
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle occupied by the surface
    ///     document (Document): Committed content, drawn in insertion order
    ///     preview (Option<&Preview>): Transient tool indicator, if any
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        document: &Document,
        preview: Option<&Preview>,
    ) {
        // Clip so strokes dragged past the edge do not spill out
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);
        painter.rect_stroke(rect, 0.0, EguiStroke::new(1.0, self.frame));

        let origin = rect.min.to_vec2();
        for stroke in document.strokes() {
            stroke.draw(&painter, origin);
        }
        // Stickers draw after strokes, so they always sit on top
        for sticker in document.stickers() {
            sticker.draw(&painter, origin);
        }
        if let Some(preview) = preview {
            preview.draw(&painter, origin);
        }
    }
}
