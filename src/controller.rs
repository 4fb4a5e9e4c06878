use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::element::{Sticker, Stroke};
use crate::history::StrokeHistory;
use crate::preview::Preview;

/// Brush widths offered in the tools panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushPreset {
    Thin,
    Thick,
}

impl BrushPreset {
    pub const ALL: [BrushPreset; 2] = [BrushPreset::Thin, BrushPreset::Thick];

    pub fn width(self) -> f32 {
        match self {
            BrushPreset::Thin => 1.0,
            BrushPreset::Thick => 5.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushPreset::Thin => "thin",
            BrushPreset::Thick => "thick",
        }
    }
}

/// What the pointer is currently committing to the document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivePlacement {
    Stroke,
    Sticker,
}

/// Glyphs available before the user registers any custom ones
const PRESET_GLYPHS: [&str; 3] = ["🤡", "🔥", "🌟"];

/// Translates pointer and panel input into document mutations.
///
/// Holds the tool selection (brush preset, optional sticker glyph), the
/// in-flight placement state and the hover preview. Selecting a glyph
/// switches to sticker mode; picking a brush width switches back.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolController {
    brush: BrushPreset,
    glyphs: Vec<String>,
    // Transient state: pointer-lifecycle fields start fresh each session
    #[serde(skip)]
    selected_glyph: Option<usize>,
    #[serde(skip)]
    active: Option<ActivePlacement>,
    #[serde(skip)]
    preview: Option<Preview>,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            brush: BrushPreset::Thin,
            glyphs: PRESET_GLYPHS.iter().map(|glyph| glyph.to_string()).collect(),
            selected_glyph: None,
            active: None,
            preview: None,
        }
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brush(&self) -> BrushPreset {
        self.brush
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// The glyph that will be placed on the next press, if any
    pub fn selected_glyph(&self) -> Option<&str> {
        self.selected_glyph
            .and_then(|index| self.glyphs.get(index))
            .map(String::as_str)
    }

    pub fn is_glyph_selected(&self, index: usize) -> bool {
        self.selected_glyph == Some(index)
    }

    /// True while the pointer is held down mid-placement
    pub fn is_placing(&self) -> bool {
        self.active.is_some()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Press starts a placement: a sticker when a glyph is selected,
    /// otherwise a stroke with the current brush width. Either way the
    /// redo stack is discarded and the hover preview disappears.
    pub fn on_pointer_down(
        &mut self,
        pos: Pos2,
        document: &mut Document,
        history: &mut StrokeHistory,
    ) {
        self.preview = None;
        history.clear_redo();

        if let Some(glyph) = self.selected_glyph().map(str::to_owned) {
            document.add_sticker(Sticker::new(glyph, pos));
            self.active = Some(ActivePlacement::Sticker);
        } else {
            document.add_stroke(Stroke::new(pos, self.brush.width()));
            self.active = Some(ActivePlacement::Stroke);
        }
    }

    /// Move with the pointer held grows the active stroke or drags the
    /// active sticker
    pub fn on_pointer_move(&mut self, pos: Pos2, document: &mut Document) {
        match self.active {
            Some(ActivePlacement::Stroke) => document.grow_last_stroke(pos),
            Some(ActivePlacement::Sticker) => document.drag_last_sticker(pos),
            None => {}
        }
    }

    /// Move with the pointer up rebuilds the preview at the new position
    pub fn on_pointer_hover(&mut self, pos: Pos2) {
        let preview = match self.selected_glyph() {
            Some(glyph) => Preview::Sticker {
                glyph: glyph.to_owned(),
                position: pos,
            },
            None => Preview::Brush {
                position: pos,
                width: self.brush.width(),
            },
        };
        self.preview = Some(preview);
    }

    /// Release ends the placement and drops any stale preview
    pub fn on_pointer_up(&mut self) {
        self.active = None;
        self.preview = None;
    }

    /// Pick a brush width; this always switches back to draw mode
    pub fn select_brush(&mut self, preset: BrushPreset) {
        log::info!("Brush selected from UI: {}", preset.label());
        self.brush = preset;
        self.selected_glyph = None;
        self.preview = None;
    }

    pub fn select_glyph(&mut self, index: usize) {
        if index >= self.glyphs.len() {
            return;
        }
        log::info!("Sticker selected from UI: {}", self.glyphs[index]);
        self.selected_glyph = Some(index);
        self.preview = None;
    }

    /// Register a user-supplied glyph and select it immediately.
    /// Whitespace-only input is rejected and nothing changes.
    pub fn register_glyph(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            return false;
        }

        log::info!("Custom sticker registered: {}", glyph);
        self.glyphs.push(glyph.to_owned());
        self.selected_glyph = Some(self.glyphs.len() - 1);
        self.preview = None;
        true
    }
}
