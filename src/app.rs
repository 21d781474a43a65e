//! Main application state and eframe::App implementation.
//!
//! The window is thin glue around [`PlotDisplay`]: it turns menu clicks,
//! file dialogs and dropped files into calls on the display and paints the
//! frames the display returns.

use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::display::PlotDisplay;
use crate::parsers;
use crate::state::{DisplayOptions, ToastType, WINDOW_TITLE};
use crate::ui::toast::Toast;

/// Main application state
pub struct LobePlotApp {
    /// The plot core: dataset, toggles and rendering
    pub(crate) display: PlotDisplay,
    /// File the current dataset came from
    pub(crate) current_file: Option<PathBuf>,
    /// Toast message for user feedback
    pub(crate) toast: Option<Toast>,
    /// Pending load error, shown as a modal until acknowledged
    pub(crate) load_error: Option<String>,
    /// Track dropped files to prevent duplicates
    last_drop_time: Option<Instant>,
}

impl LobePlotApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        options: DisplayOptions,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            display: PlotDisplay::new(options),
            current_file: None,
            toast: None,
            load_error: None,
            last_drop_time: None,
        };

        if let Some(path) = initial_file {
            app.open_file(path);
        }

        app
    }

    /// Load a sample file, replacing the current dataset on success
    pub fn open_file(&mut self, path: PathBuf) {
        let result = parsers::load_file(&path).and_then(|parsed| {
            self.display
                .load_dataset(parsed.samples, parsed.categories)
        });

        match result {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                self.show_toast(&format!("Loaded {}", name), ToastType::Success);
                self.current_file = Some(path);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Ask for a file with the native dialog and load it
    pub(crate) fn pick_and_open_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_directory(".")
            .add_filter("Data Files", crate::state::SUPPORTED_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.open_file(path);
        }
    }

    /// Show a toast message
    pub(crate) fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast = Some(Toast::new(message, toast_type));
    }

    fn window_title(&self) -> String {
        match self.current_file.as_ref().and_then(|p| p.file_name()) {
            Some(name) => format!("{} - {}", WINDOW_TITLE, name.to_string_lossy()),
            None => WINDOW_TITLE.to_string(),
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        // Don't stack a second load behind an unacknowledged error
        if self.load_error.is_some() {
            return;
        }

        // Debounce file drops (1 second window)
        if let Some(last_drop) = self.last_drop_time {
            if last_drop.elapsed().as_secs() < 1 {
                return;
            }
        }

        let dropped_files: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if dropped_files.len() > 1 {
            self.show_toast("Only the first dropped file is plotted", ToastType::Info);
        }

        if let Some(path) = dropped_files.into_iter().next() {
            self.last_drop_time = Some(Instant::now());
            self.open_file(path);
        }
    }
}

impl eframe::App for LobePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle file drops
        self.handle_dropped_files(ctx);

        // Light theme to match the white plot surface
        ctx.set_visuals(egui::Visuals::light());

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        // Plot surface
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(crate::ui::canvas::to_color32(
                crate::state::BACKGROUND_COLOR,
            )))
            .show(ctx, |ui| {
                self.render_plot(ui);
            });

        // Notifications on top
        self.render_toast(ctx);
        self.render_error_dialog(ctx);

        // Any load or toggle invalidates the whole frame
        if self.display.take_repaint_request() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
            ctx.request_repaint();
        }

        // Keep repainting while a toast is on screen
        if self.toast.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
