// Evlist CLI
// Lists input event devices as a table or CSV

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use strum::IntoEnumIterator;

use evlist_core::settings::default_settings_content;
use evlist_core::{
    list_devices_with, DeviceFilter, DeviceScanner, FilterField, ListConfig, ListError,
    OutputFormat, Settings,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n\nLicensed under the MIT license.",
    "\nCopyright (c) 2021 Marko Malenic"
);

/// List input event devices
#[derive(Parser, Debug)]
#[command(name = "evlist")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "List input event devices", long_about = None)]
struct Args {
    /// Format to output devices in
    #[arg(short = 'o', long, value_name = "FORMAT", value_parser = parse_format, long_help = format_help())]
    format: Option<OutputFormat>,

    /// Filter output rows by column value (can be used multiple times)
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter, long_help = filter_help())]
    filters: Vec<DeviceFilter>,

    /// Treat `--filter` values as regular expressions
    #[arg(short = 'r', long)]
    use_regex: bool,

    /// TOML settings file (default: ~/.config/evlist/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a settings file template and exit
    #[arg(long)]
    print_default_settings: bool,
}

impl Args {
    /// Merge flags over file settings into the listing configuration
    fn list_config(&self, settings: &Settings) -> ListConfig {
        ListConfig {
            format: self.format.or(settings.format()).unwrap_or_default(),
            use_regex: self.use_regex || settings.use_regex().unwrap_or(false),
            filters: self.filters.clone(),
        }
    }

    fn load_settings(&self) -> anyhow::Result<Settings> {
        match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display())),
            None => Settings::load_default().context("failed to load default settings"),
        }
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|_| {
        let valid: Vec<String> = OutputFormat::iter().map(|f| f.to_string()).collect();
        format!("unknown format '{}', expected one of: {}", s, valid.join(", "))
    })
}

fn parse_filter(s: &str) -> Result<DeviceFilter, String> {
    s.parse().map_err(|e: evlist_core::FilterError| e.to_string())
}

fn format_help() -> String {
    let mut help = String::from("Format to output devices in:");
    for format in OutputFormat::iter() {
        help.push_str(&format!("\n  - {}: {}", format, format.description()));
    }
    help
}

fn filter_help() -> String {
    let mut help = String::from(
        "Filter output rows by the column value. This option can be specified multiple \
         times, and takes a key=value format where each key is one of the following:",
    );
    for field in FilterField::iter() {
        help.push_str(&format!("\n  - {}: {}", field, field.description()));
    }
    help
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.print_default_settings {
        print!("{}", default_settings_content());
        return Ok(());
    }

    let settings = args.load_settings()?;
    if let Some(path) = settings.source_path() {
        log::debug!("Using settings from {}", path.display());
    }
    let config = args.list_config(&settings);
    let scanner = DeviceScanner::with_paths(settings.scan_paths());
    log::debug!("Scanning {}", scanner.paths().input_dir.display());

    let devices = list_devices_with(&scanner, &config)?;
    print!("{}", devices);
    Ok(())
}

/// Scan failures exit with the underlying errno, everything else with 1.
fn exit_code(error: &anyhow::Error) -> u8 {
    let code = error
        .downcast_ref::<ListError>()
        .map(ListError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("- caused by: {cause}");
            }
            ExitCode::from(exit_code(&e))
        }
    }
}
