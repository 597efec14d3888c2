//! Desktop front end for the Canada Sheet Metal site.

mod config;
mod controller;
mod relay_bridge;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use site_content::Route;

use crate::controller::events::UiEvent;
use crate::relay_bridge::commands::RelayCommand;
use crate::relay_bridge::runtime;
use crate::ui::SiteApp;

#[derive(Parser, Debug)]
#[command(name = "site_gui", about = "Canada Sheet Metal desktop site")]
struct Args {
    /// Page to open on launch, as a path like /capabilities.
    #[arg(long, default_value = "/")]
    route: String,

    /// Settings file to read instead of ./site.toml.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// Unknown launch paths fall back to the home page rather than failing
/// to start.
fn resolve_initial_route(raw: &str) -> Route {
    match raw.parse() {
        Ok(route) => route,
        Err(err) => {
            tracing::warn!(error = %err, "opening the home page instead");
            Route::Home
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref());
    let initial_route = resolve_initial_route(&args.route);

    let (cmd_tx, cmd_rx) = bounded::<RelayCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    runtime::launch(settings.relay_config(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Canada Sheet Metal")
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Canada Sheet Metal",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SiteApp::new(
                &settings,
                initial_route,
                cmd_tx,
                ui_rx,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_routes_resolve_like_urls() {
        assert_eq!(resolve_initial_route("/"), Route::Home);
        assert_eq!(resolve_initial_route("/capabilities"), Route::Capabilities);
        assert_eq!(resolve_initial_route("about"), Route::About);
    }

    #[test]
    fn unknown_launch_routes_open_the_home_page() {
        assert_eq!(resolve_initial_route("/pricing"), Route::Home);
        assert_eq!(resolve_initial_route(""), Route::Home);
    }
}
