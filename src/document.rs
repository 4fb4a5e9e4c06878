use egui::Pos2;

use crate::element::{Sticker, Stroke};

/// Committed surface content: strokes and stickers in insertion order.
#[derive(Debug, Default)]
pub struct Document {
    strokes: Vec<Stroke>,
    stickers: Vec<Sticker>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn add_sticker(&mut self, sticker: Sticker) {
        self.stickers.push(sticker);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    // The in-progress stroke is always the most recently committed one
    pub fn grow_last_stroke(&mut self, point: Pos2) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.grow(point);
        }
    }

    pub fn drag_last_sticker(&mut self, position: Pos2) {
        if let Some(sticker) = self.stickers.last_mut() {
            sticker.drag_to(position);
        }
    }

    pub fn remove_last_stroke(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.stickers.clear();
    }
}
