use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use exif_date_set::config::RunConfig;
use exif_date_set::pipeline;

/// Exit status for bad arguments; matches what clap uses for its own parse errors.
const USAGE_ERROR: u8 = 2;

const EXAMPLES: &str = "\
Examples:
  exif-date-set ./photos \"2026:02:25 18:30:00\"
  exif-date-set ./photos \"2026:02:25 18:30:00\" --recursive
  exif-date-set ./photos \"2026:02:25 18:30:00\" --dry-run";

#[derive(Parser, Debug)]
#[command(
    name = "exif-date-set",
    version,
    about = "Set DateTimeOriginal, CreateDate and ModifyDate on every JPEG in a folder",
    after_help = EXAMPLES
)]
struct Cli {
    /// Folder containing the JPEG files
    #[arg(value_name = "FOLDER")]
    folder: PathBuf,

    /// New date and time, exactly "YYYY:MM:DD HH:MM:SS"
    #[arg(value_name = "DATETIME")]
    datetime: String,

    /// Process subfolders
    #[arg(long)]
    recursive: bool,

    /// Do not modify files, just print what would be changed
    #[arg(long)]
    dry_run: bool,

    /// Do not create .bak backup files
    #[arg(long)]
    no_backup: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = match RunConfig::new(cli.folder, cli.datetime) {
        Ok(config) => config
            .recursive(cli.recursive)
            .dry_run(cli.dry_run)
            .backup(!cli.no_backup),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if config.is_dry_run() {
        log::info!("DRY RUN: no files will be modified");
    }

    let stats = pipeline::run(&config);
    println!("{}", stats.summary());
    log::debug!("{} succeeded, {} failed", stats.ok, stats.failed());

    ExitCode::from(stats.exit_status())
}
