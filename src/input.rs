use egui::{Pos2, Rect, Response};

/// Pointer events in surface-local coordinates.
///
/// `Move` carries a position while the pointer is held down; `Hover`
/// is movement with the pointer up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer was pressed on the surface
    Down(Pos2),
    /// Pointer moved while held down
    Move(Pos2),
    /// Pointer was released
    Up,
    /// Pointer moved without being held
    Hover(Pos2),
}

/// Converts a frame's raw surface interaction into our PointerEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame of surface interaction and generate events.
    ///
    /// Positions are translated from screen space to the surface's own
    /// origin. Repeated positions are dropped so a stationary pointer
    /// produces no movement events, matching how platforms only report
    /// pointer moves on actual motion.
    pub fn events(&mut self, surface: Rect, response: &Response) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - surface.min).to_pos2();

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = to_local(pos);
                events.push(PointerEvent::Down(local));
                self.last_pointer_pos = Some(local);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = to_local(pos);
                // Only report an actual change of position
                if Some(local) != self.last_pointer_pos {
                    events.push(PointerEvent::Move(local));
                    self.last_pointer_pos = Some(local);
                }
            }
        } else if !response.drag_stopped() {
            if let Some(pos) = response.hover_pos() {
                let local = to_local(pos);
                if Some(local) != self.last_pointer_pos {
                    events.push(PointerEvent::Hover(local));
                    self.last_pointer_pos = Some(local);
                }
            }
        }

        if response.drag_stopped() {
            events.push(PointerEvent::Up);
            // Keep the release position so the pointer has to move again
            // before a fresh hover is reported
            if let Some(pos) = response.interact_pointer_pos() {
                self.last_pointer_pos = Some(to_local(pos));
            }
        }

        events
    }
}
