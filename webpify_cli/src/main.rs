use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use webpify_cli::config::ConfigManager;
use webpify_cli::output::write_lines;
use webpify_cli::terminal;
use webpify_cli::{ConvertOrchestrator, RunOptions};
use webpify_core::DecoderRegistry;

#[derive(Parser)]
#[command(name = "webpify")]
#[command(author, version, about = "Convert PNG, JPEG and GIF images to WebP", long_about = None)]
struct Cli {
    /// File or directory to convert
    #[arg(short, long)]
    path: PathBuf,

    /// Overwrite existing WebP files
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("webpify_core", log::LevelFilter::Debug)
            .filter_module("webpify_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut config = ConfigManager::new()
        .load()
        .context("Failed to load configuration")?;
    config.apply_cli_overrides(cli.no_color);
    colored::control::set_override(terminal::should_colorize(&config.output));

    let registry = DecoderRegistry::builtin();
    log::debug!("Registered formats: {:?}", registry.ids());

    let report = ConvertOrchestrator::new(&registry).run(
        &cli.path,
        RunOptions {
            force: cli.force,
            summary: config.output.summary,
        },
    );

    write_lines(
        &report.messages,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("Failed to write output")?;

    if let Some(error) = &report.error {
        eprint!("{}", error.format_for_user(cli.debug));
        std::process::exit(error.exit_code().code());
    }

    Ok(())
}
