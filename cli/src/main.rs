use anyhow::Result;
use clap::{Parser, Subcommand};
use hero_smith_core::HeroSmithError;
use hero_smith_core::config::ToolsConfig;
use hero_smith_core::processors::{rewrite_abilities_file, simplify_complications_file};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "hero-smith",
    version = "0.1.0",
    about = "CLI tool for Hero Smith data migrations",
    long_about = None
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Path to log file
    #[arg(long, global = true, default_value = "/tmp/hero-smith-tools.log")]
    log_file: std::path::PathBuf,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite abilities.json into the canonical ability schema
    RewriteAbilities {
        /// Abilities file (overrides the configured location)
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },

    /// Split complication descriptions into story text and effects
    SimplifyComplications {
        /// Complications file (overrides the configured location)
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },
}

fn setup_logging(verbose: u8, log_file: &std::path::Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(std::path::Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("hero-smith.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ToolsConfig::from_file(path)?,
        None => ToolsConfig::default(),
    };

    match cli.command {
        Commands::RewriteAbilities { file } => {
            let path = file.unwrap_or_else(|| config.abilities_path());
            let summary = rewrite_abilities_file(&path)?;

            info!("--- Summary ---");
            info!("Records: {}", summary.total_records);
            info!("Already canonical: {}", summary.already_canonical);
            info!("With power roll: {}", summary.with_power_roll);
            info!(
                "Tiers: {} ({} with damage, {} without)",
                summary.tiers, summary.tiers_with_damage, summary.tiers_without_damage
            );
            for (damage_type, count) in &summary.damage_types {
                info!("  {} damage: {}", damage_type, count);
            }
            println!("Rewrote abilities: {}", summary.total_records);
        }
        Commands::SimplifyComplications { file } => {
            let path = file.unwrap_or_else(|| config.complications_path());
            let summary = simplify_complications_file(&path)?;

            info!(
                "With effects: {}, story only: {}",
                summary.with_effects, summary.story_only
            );
            println!("Simplified complications: {}", summary.total_records);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match setup_logging(cli.verbose, &cli.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting hero-smith CLI");

    match run(cli) {
        Ok(()) => {
            info!("Hero-smith CLI finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            let code = e
                .downcast_ref::<HeroSmithError>()
                .map_or(1, HeroSmithError::exit_code);
            ExitCode::from(code)
        }
    }
}
