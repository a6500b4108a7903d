//! Prefix Index - Main entrypoint.
//!
//! Loads configuration and word lists, then answers prefix queries from the
//! command line.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prefix_index_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use prefix_index_lib::data_structures::{PrefixIndex, PrefixIndexConfig};
use prefix_index_lib::dictionary::DictionaryLoader;
use prefix_index_lib::error::{report_error, AppError, AppResult, ErrorContext};
use prefix_index_lib::output::{write_matches, OutputFormat};
use tracing::{info, info_span};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dictionaries and print every word starting with each prefix
    Query {
        /// Additional word list files, loaded after the configured ones
        #[clap(short, long, value_parser)]
        dictionary: Vec<PathBuf>,

        /// Print results as a JSON object keyed by prefix
        #[clap(long)]
        json: bool,

        /// Prefixes to look up
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so query output on stdout stays clean.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };
    result.context("Failed to set global tracing subscriber")
}

/// Build the index from every configured and requested dictionary, then
/// print the matches for each prefix.
fn run_query(
    config: &AppConfig,
    dictionaries: &[PathBuf],
    json: bool,
    prefixes: &[String],
) -> AppResult<()> {
    let mut index = PrefixIndex::with_config(PrefixIndexConfig::from(&config.index));
    let loader = DictionaryLoader::new(&config.dictionary);
    let stats = loader.load_paths(config.dictionary.paths.iter().chain(dictionaries), &mut index)?;
    info!(
        words = index.len(),
        nodes = index.node_count(),
        lines = stats.lines,
        "index ready"
    );

    write_matches(
        &index,
        prefixes,
        OutputFormat::from_json_flag(json),
        io::stdout().lock(),
    )
}

/// Write the default configuration as TOML.
fn gen_config(output: &Path) -> AppResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| AppError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Generating a config must not depend on an existing one
    let config = match &args.command {
        Command::GenConfig { .. } => AppConfig::default(),
        _ => ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
            .load()
            .context("Configuration error")?,
    };
    init_logging(&config.log)?;
    prefix_index_lib::init();

    let result = match args.command {
        Command::Query {
            dictionary,
            json,
            prefixes,
        } => {
            let span = info_span!("query", prefixes = prefixes.len());
            let _guard = span.enter();
            run_query(&config, &dictionary, json, &prefixes)
                .map_err(|e| ErrorContext::new(e, "query").with_span_trace())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            gen_config(&output).map_err(|e| ErrorContext::new(e, "gen-config"))
        }
    };

    if let Err(context) = result {
        report_error(context);
        process::exit(1);
    }

    Ok(())
}
