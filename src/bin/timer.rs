use timer::{alarm::Bell, app::App, config::Config, gui::Gui};

use anyhow::{Error, Result};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let gui = Gui::new(App::new(config), Box::new(Bell::new()));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([240.0, 140.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Timer",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(gui)
        }),
    )
    .map_err(|e| Error::msg(e.to_string()))
}
