use crate::SketchpadApp;
use crate::renderer::SURFACE_SIZE;

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Fixed-size painting area that reacts to drags
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(SURFACE_SIZE), egui::Sense::drag());

        // Handle input
        app.handle_surface_input(&response);

        // Render the surface
        app.render_surface(&painter, response.rect);
    });
}
