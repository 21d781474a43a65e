//! Blocking notification for a failed data load.

use eframe::egui;

use crate::app::LobePlotApp;

impl LobePlotApp {
    /// Show the pending load error as a modal until the user dismisses it
    pub fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.load_error else {
            return;
        };

        let mut dismissed = false;

        let response = egui::Modal::new(egui::Id::new("load_error")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.heading("Data loading error");
            ui.add_space(8.0);
            ui.label(message.as_str());
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || response.should_close() {
            self.load_error = None;
        }
    }
}
