#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // Filter out egui_winit clipboard errors - they occur when clipboard content
    // is not in a supported text format.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 480.0])
            .with_min_inner_size([520.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Modboard",
        native_options,
        Box::new(|_cc| {
            let app = modboard_ui::ModboardApp::new(modboard_ui::sample_records());
            Ok(Box::new(app))
        }),
    )
}

// Clipboard and windowing are not wired up for the web yet.
#[cfg(target_arch = "wasm32")]
fn main() {}
