use crate::document::Document;
use crate::element::Stroke;

/// Linear undo/redo history over committed strokes.
///
/// The document's stroke list doubles as the undo stack: undo pops the
/// most recent stroke into the redo stack, redo moves it back. Stickers
/// are deliberately outside this history and survive undo/redo.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    /// Stack of strokes that can be restored with redo
    redo_stack: Vec<Stroke>,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard redoable strokes; called whenever a new placement starts
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Move the most recent stroke onto the redo stack.
    /// Returns false (a no-op, not an error) when nothing can be undone.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        if let Some(stroke) = document.remove_last_stroke() {
            self.redo_stack.push(stroke);
            true
        } else {
            false
        }
    }

    /// Restore the most recently undone stroke.
    /// Returns false when the redo stack is empty.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        if let Some(stroke) = self.redo_stack.pop() {
            document.add_stroke(stroke);
            true
        } else {
            false
        }
    }

    /// Wipe the surface and both stacks unconditionally
    pub fn clear(&mut self, document: &mut Document) {
        document.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self, document: &Document) -> bool {
        !document.strokes().is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }
}
