mod app;
mod config;

use clap::Parser;
use common::{log, logger};

use app::GameApp;
use config::ClientConfig;

#[derive(Parser)]
#[command(name = "tic_tac_toe_client")]
struct Args {
    /// Path to the YAML client config. Missing file means defaults.
    #[arg(long, default_value = "client_config.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = ClientConfig::load(&args.config)?;

    log!("Starting Tic Tac Toe client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(config)))),
    )?;

    Ok(())
}
