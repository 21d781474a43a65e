//! lobeplot - A desktop function plotter written in Rust
//!
//! Plots a sequence of (x, y) samples read from a text file, shading the
//! regions between the curve and the x axis and labelling each with its area.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lobeplot::app::LobePlotApp;
use lobeplot::state::{DisplayOptions, WINDOW_SIZE, WINDOW_TITLE};

#[derive(Parser, Debug)]
#[command(name = "lobeplot")]
#[command(about = "Plot x/y samples with shaded areas under the curve", long_about = None)]
struct Args {
    /// Data file to open at start-up
    file: Option<PathBuf>,

    /// Start with the coordinate axes hidden
    #[arg(long)]
    no_axis: bool,

    /// Start with the point markers hidden
    #[arg(long)]
    no_markers: bool,

    /// Start with the shaded regions hidden
    #[arg(long)]
    no_regions: bool,
}

impl Args {
    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_axis: !self.no_axis,
            show_markers: !self.no_markers,
            show_regions: !self.no_regions,
        }
    }
}

/// Set the macOS application name for the dock
#[cfg(target_os = "macos")]
fn set_macos_app_name() {
    use objc2::{class, msg_send};
    use objc2_foundation::NSString;

    unsafe {
        let app_name = NSString::from_str("lobeplot");
        let process_info_class = class!(NSProcessInfo);
        let process_info: *mut objc2::runtime::AnyObject =
            msg_send![process_info_class, processInfo];
        let _: () = msg_send![process_info, setProcessName: &*app_name];
    }
}

#[cfg(not(target_os = "macos"))]
fn set_macos_app_name() {}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    set_macos_app_name();

    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = args.display_options();
    let initial_file = args.file;
    tracing::info!("Starting lobeplot");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE)
            .with_app_id("lobeplot")
            .with_drag_and_drop(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "lobeplot",
        native_options,
        Box::new(move |cc| Ok(Box::new(LobePlotApp::new(cc, options, initial_file)))),
    )
    .map_err(|e| anyhow!("Failed to start the window: {}", e))
}
