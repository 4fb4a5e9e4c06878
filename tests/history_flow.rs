use egui::Pos2;
use sketchpad::document::Document;
use sketchpad::element::Stroke;
use sketchpad::history::StrokeHistory;
use sketchpad::controller::ToolController;

// Helper to commit a finished stroke straight into the document
fn add_stroke(document: &mut Document, start: Pos2) {
    let mut stroke = Stroke::new(start, 1.0);
    stroke.grow(Pos2::new(start.x + 10.0, start.y));
    document.add_stroke(stroke);
}

#[test]
fn test_undo_then_redo_restores_document() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    add_stroke(&mut document, Pos2::new(50.0, 50.0));
    let before = document.strokes().to_vec();

    assert!(history.undo(&mut document));
    assert_eq!(document.strokes().len(), 1);
    assert_eq!(history.redo_stack().len(), 1);

    assert!(history.redo(&mut document));

    // Content-level equality, order included
    assert_eq!(document.strokes(), &before[..]);
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_undo_and_redo_on_empty_are_noops() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();

    // Nothing to undo or redo yet; both report false, nothing panics
    assert!(!history.undo(&mut document));
    assert!(!history.redo(&mut document));
    assert!(!history.can_undo(&document));
    assert!(!history.can_redo());
}

#[test]
fn test_stroke_lives_on_exactly_one_stack() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    let stroke = document.strokes()[0].clone();

    // Committed, not redoable
    assert_eq!(document.strokes(), &[stroke.clone()][..]);
    assert!(history.redo_stack().is_empty());

    // Undone: moved wholesale onto the redo stack
    history.undo(&mut document);
    assert!(document.strokes().is_empty());
    assert_eq!(history.redo_stack(), &[stroke.clone()][..]);

    // Redone: back on the committed list
    history.redo(&mut document);
    assert_eq!(document.strokes(), &[stroke][..]);
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_new_press_discards_redo_stack() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();
    let mut controller = ToolController::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    add_stroke(&mut document, Pos2::new(50.0, 50.0));
    history.undo(&mut document);
    assert!(history.can_redo());

    // Starting a fresh stroke forks history; the undone branch is gone
    controller.on_pointer_down(Pos2::new(90.0, 90.0), &mut document, &mut history);
    controller.on_pointer_up();

    assert!(!history.can_redo());
    assert!(!history.redo(&mut document));
    assert_eq!(document.strokes().len(), 2);
}

#[test]
fn test_sticker_press_also_discards_redo_stack() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();
    let mut controller = ToolController::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    history.undo(&mut document);
    assert!(history.can_redo());

    // Stickers are not undoable themselves, but placing one still
    // commits a new action and forfeits the undone strokes
    controller.select_glyph(1);
    controller.on_pointer_down(Pos2::new(50.0, 50.0), &mut document, &mut history);
    controller.on_pointer_up();

    assert!(!history.can_redo());
    assert_eq!(document.stickers().len(), 1);
    assert!(document.strokes().is_empty());
}

#[test]
fn test_clear_wipes_everything() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();
    let mut controller = ToolController::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    add_stroke(&mut document, Pos2::new(50.0, 50.0));
    history.undo(&mut document);

    controller.select_glyph(0);
    controller.on_pointer_down(Pos2::new(30.0, 30.0), &mut document, &mut history);
    controller.on_pointer_up();

    history.clear(&mut document);

    assert!(document.strokes().is_empty());
    assert!(document.stickers().is_empty());
    assert!(history.redo_stack().is_empty());

    // Clear is unconditional; a second clear is still fine
    history.clear(&mut document);
    assert!(document.strokes().is_empty());
}

#[test]
fn test_press_move_release_undo_redo_scenario() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();
    let mut controller = ToolController::new();

    // Press at (10,10), move to (20,10), move to (20,20), release
    controller.on_pointer_down(Pos2::new(10.0, 10.0), &mut document, &mut history);
    controller.on_pointer_move(Pos2::new(20.0, 10.0), &mut document);
    controller.on_pointer_move(Pos2::new(20.0, 20.0), &mut document);
    controller.on_pointer_up();

    assert_eq!(document.strokes().len(), 1);
    assert_eq!(
        document.strokes()[0].points(),
        &[
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 10.0),
            Pos2::new(20.0, 20.0),
        ]
    );

    history.undo(&mut document);
    assert!(document.strokes().is_empty());
    assert_eq!(history.redo_stack().len(), 1);

    history.redo(&mut document);
    assert_eq!(document.strokes().len(), 1);
    assert!(history.redo_stack().is_empty());
    assert_eq!(document.strokes()[0].points().len(), 3);
}

#[test]
fn test_undo_is_strictly_lifo() {
    let mut document = Document::new();
    let mut history = StrokeHistory::new();

    add_stroke(&mut document, Pos2::new(10.0, 10.0));
    add_stroke(&mut document, Pos2::new(50.0, 50.0));
    add_stroke(&mut document, Pos2::new(90.0, 90.0));

    let third = document.strokes()[2].clone();
    let second = document.strokes()[1].clone();

    history.undo(&mut document);
    history.undo(&mut document);

    // Most recent stroke sits on top of the redo stack
    assert_eq!(history.redo_stack(), &[third.clone(), second.clone()][..]);

    // Redo restores in reverse order of undoing
    history.redo(&mut document);
    assert_eq!(document.strokes().last(), Some(&second));
    history.redo(&mut document);
    assert_eq!(document.strokes().last(), Some(&third));
}
