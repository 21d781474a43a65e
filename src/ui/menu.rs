//! Menu bar UI components (File, Graph menus).

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::LobePlotApp;
use crate::state::RenderPass;

impl LobePlotApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                ui.set_min_width(160.0);

                if ui.button("Open file...").clicked() {
                    ui.close();
                    self.pick_and_open_file();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Graph menu - toggles only make sense once something is plotted
            ui.menu_button("Graph", |ui| {
                ui.set_min_width(200.0);

                let has_data = self.display.has_data();
                let options = self.display.options();

                for pass in RenderPass::iter().filter(RenderPass::is_optional) {
                    let mut shown = options.is_enabled(pass);
                    if ui
                        .add_enabled(has_data, egui::Checkbox::new(&mut shown, pass.as_ref()))
                        .changed()
                    {
                        self.display.set_pass_enabled(pass, shown);
                    }
                }
            });
        });
    }
}
