//! SimpleCalc - a four-function desktop calculator

mod app;

use app::CalculatorApp;
use calccore::{CalcTheme, Preferences};
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let loaded = Preferences::load();
    let prefs = loaded.as_ref().cloned().unwrap_or_default();
    calccore::logging::init(&prefs.log_filter);
    if let Err(e) = &loaded {
        tracing::warn!("could not read preferences, using defaults: {e}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([prefs.window_width, prefs.window_height])
            .with_title("Simple Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Simple Calculator",
        options,
        Box::new(move |cc| {
            let theme = CalcTheme::from_preferences(&prefs);
            theme.apply(&cc.egui_ctx);
            Box::new(CalculatorApp::new(prefs, theme))
        }),
    )
}
