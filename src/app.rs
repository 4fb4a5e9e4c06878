use egui::{Painter, Rect, Response};

use crate::controller::ToolController;
use crate::document::Document;
use crate::history::StrokeHistory;
use crate::input::{InputHandler, PointerEvent};
use crate::panels;
use crate::renderer::Renderer;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadApp {
    // Tool preferences survive restarts; drawings are deliberately transient
    controller: ToolController,
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    history: StrokeHistory,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
    // Draft text of the custom sticker prompt while it is open
    #[serde(skip)]
    sticker_prompt: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self {
            controller: ToolController::new(),
            document: Document::new(),
            history: StrokeHistory::new(),
            input: InputHandler::new(),
            renderer: Renderer::new(),
            sticker_prompt: None,
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }

        Default::default()
    }

    pub fn controller(&self) -> &ToolController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ToolController {
        &mut self.controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            log::info!("Undid last stroke");
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            log::info!("Redid last undone stroke");
        }
    }

    pub fn clear_surface(&mut self) {
        self.history.clear(&mut self.document);
        log::info!("Surface cleared");
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt = Some(String::new());
    }

    /// Feed one frame of surface interaction through the controller
    pub fn handle_surface_input(&mut self, response: &Response) {
        for event in self.input.events(response.rect, response) {
            match event {
                PointerEvent::Down(pos) => {
                    self.controller
                        .on_pointer_down(pos, &mut self.document, &mut self.history);
                }
                PointerEvent::Move(pos) => {
                    self.controller.on_pointer_move(pos, &mut self.document);
                }
                PointerEvent::Hover(pos) => self.controller.on_pointer_hover(pos),
                PointerEvent::Up => self.controller.on_pointer_up(),
            }
        }
    }

    pub fn render_surface(&self, painter: &Painter, rect: Rect) {
        self.renderer
            .render(painter, rect, &self.document, self.controller.preview());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus, and never pop
        // the stroke that is still being drawn
        if ctx.wants_keyboard_input() || self.controller.is_placing() {
            return;
        }

        ctx.input_mut(|i| {
            if i.consume_key(
                egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                egui::Key::Z,
            ) || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)
            {
                self.redo();
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z) {
                self.undo();
            }
        });
    }

    fn sticker_prompt_window(&mut self, ctx: &egui::Context) {
        if self.sticker_prompt.is_none() {
            return;
        }

        let mut close_prompt = false;
        let mut do_register = false;

        if let Some(draft) = self.sticker_prompt.as_mut() {
            egui::Window::new("Custom sticker")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Enter an emoji or short text:");
                    ui.add_space(4.0);

                    let response = ui.text_edit_singleline(draft);

                    // Request focus only when first opened (not every frame)
                    if !response.has_focus() {
                        response.request_focus();
                    }

                    // Handle Enter key
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        do_register = true;
                    }

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            do_register = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close_prompt = true;
                        }
                    });
                });
        }

        // Close on Escape key
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            close_prompt = true;
        }

        if do_register {
            if let Some(draft) = self.sticker_prompt.take() {
                // Whitespace-only input is silently dropped by the controller
                self.controller.register_glyph(&draft);
            }
        } else if close_prompt {
            self.sticker_prompt = None;
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        self.sticker_prompt_window(ctx);
    }
}
