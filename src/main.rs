use clap::Parser;
use presyo::app::App;
use presyo::config::Config;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "presyo", version, about = "Daily market price sync service")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Run a single sync pass and exit instead of the daemon loop.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("presyo starting");

    tokio::select! {
        result = App::run(config, cli.once) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("presyo stopped");
}
