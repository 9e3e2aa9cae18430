//! twinswitch GUI - desktop window hosting one toggle switch.

use clap::Parser;
use std::path::PathBuf;
use twinswitch_config::{SwitchConfig, paths};
use twinswitch_gui::{Overrides, SwitchApp};

/// twinswitch demo window.
#[derive(Parser, Debug)]
#[command(name = "twinswitch-gui")]
#[command(about = "Two-zone toggle switch demo")]
#[command(version)]
struct Args {
    /// Config file (default: $TWINSWITCH_CONFIG, then the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Selected-zone color, e.g. "#03A9F4" or "teal"
    #[arg(long)]
    checked_color: Option<String>,

    /// Background color, e.g. "#E0E0E0"
    #[arg(long)]
    unchecked_color: Option<String>,

    /// Start with B selected
    #[arg(long)]
    select_b: bool,

    /// Switch height in points (default: 64)
    #[arg(long, default_value = "64")]
    height: f32,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting twinswitch GUI");

    let mut config = match args.config.clone().or_else(paths::find_config) {
        Some(path) => {
            tracing::info!(path = %path.display(), "config file");
            SwitchConfig::load_or_default(path)
        }
        None => SwitchConfig::default(),
    };
    Overrides {
        checked_color: args.checked_color.clone(),
        unchecked_color: args.unchecked_color.clone(),
        select_b: args.select_b,
    }
    .apply(&mut config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_min_inner_size([240.0, 180.0])
            .with_title("twinswitch"),
        ..Default::default()
    };

    let height = args.height;
    eframe::run_native(
        "twinswitch",
        options,
        Box::new(move |cc| Ok(Box::new(SwitchApp::new(cc, &config, height)))),
    )
}
