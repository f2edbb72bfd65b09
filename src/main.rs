use clap::Parser;
use plaza::core::config::{self, CliOverrides, PlazaConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "plaza", about = "A social news feed for the terminal")]
struct Args {
    /// Minimum terminal width (columns) at which the right panel is shown
    #[arg(long, value_name = "COLS")]
    breakpoint: Option<u16>,

    /// Maximum width (columns) of the feed column
    #[arg(long, value_name = "COLS")]
    feed_width: Option<u16>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Logger isn't up yet; report config problems once it is
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (PlazaConfig::default(), Some(e)),
    };
    let overrides = CliOverrides {
        log_level: args.log_level,
        log_file: args.log_file,
        breakpoint: args.breakpoint,
        feed_width: args.feed_width,
    };
    let resolved = config::resolve(&file_config, &overrides);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }
    log::info!(
        "Plaza starting up (breakpoint {}, feed width {})",
        resolved.right_panel_breakpoint,
        resolved.feed_max_width
    );

    plaza::tui::run(resolved)
}
