use crate::SketchpadApp;
use crate::controller::BrushPreset;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(150.0)
        .show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.separator();

            // Brush width presets; picking one leaves sticker mode
            ui.label("Brush");
            ui.horizontal(|ui| {
                for preset in BrushPreset::ALL {
                    let is_selected = app.controller().brush() == preset
                        && app.controller().selected_glyph().is_none();
                    if ui.selectable_label(is_selected, preset.label()).clicked() {
                        app.controller_mut().select_brush(preset);
                    }
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo(app.document());
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.button("Clear").clicked() {
                    app.clear_surface();
                }
            });

            ui.separator();

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                // Collect glyph count first to avoid borrowing issues
                let glyph_count = app.controller().glyphs().len();
                for index in 0..glyph_count {
                    let glyph = app.controller().glyphs()[index].clone();
                    let is_selected = app.controller().is_glyph_selected(index);
                    if ui.selectable_label(is_selected, glyph).clicked() {
                        app.controller_mut().select_glyph(index);
                    }
                }
            });

            if ui.button("+ Custom sticker").clicked() {
                app.open_sticker_prompt();
            }
        });
}
