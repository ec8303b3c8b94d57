use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use taskaru::config::{self, TaskaruConfig};
use taskaru::{signal, tui};

#[derive(Parser)]
#[command(name = "taskaru", version, about = "Terminal task manager")]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    // Read before the alternate screen is up, so problems are still visible.
    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}; using default settings");
        TaskaruConfig::default()
    });
    let config = config::resolve(&file_config);

    // File logger only: the terminal belongs to the alternate screen.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("Taskaru starting up (title: {:?})", config.title);

    if let Err(e) = signal::init() {
        log::warn!("Failed to install signal handler: {}", e);
    }

    match tui::run(&config) {
        Ok(status) => {
            log::info!("Taskaru exiting with {:?}", status);
            ExitCode::from(status.code())
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error running application: {e}");
            ExitCode::FAILURE
        }
    }
}
