use clap::{Parser, Subcommand};
use shoplog_core::cli::{self, CliContext, GenerateOptions};
use shoplog_core::conf::{DEFAULT_CONFIG_PATH, load_config, load_config_or_default};
use shoplog_core::logging::{OutputMode, default_output_mode, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shoplog",
    version,
    about = "Shoplog: e-commerce access log analytics"
)]
struct Cli {
    /// Path to the engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, conflicts_with = "pretty")]
    json: bool,

    /// Print results as human-readable text
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a log file and report how many lines were imported
    Import {
        /// Log file, or `-` for stdin
        file: PathBuf,
    },

    /// Aggregate statistics over an optional time range
    Summary {
        file: PathBuf,

        /// Inclusive lower bound, `YYYY-MM-DD HH:MM:SS`
        #[arg(long)]
        start: Option<String>,

        /// Inclusive upper bound, `YYYY-MM-DD HH:MM:SS`
        #[arg(long)]
        end: Option<String>,
    },

    /// Per-minute traffic over a trailing window
    Realtime {
        file: PathBuf,

        #[arg(long)]
        window: Option<i64>,

        /// Anchor the window here instead of at the newest record
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Sessions and purchase funnel of one user
    Journey { file: PathBuf, user_id: String },

    /// Live dashboard over log lines piped to stdin
    Stats {
        #[arg(long)]
        window: Option<i64>,
    },

    /// Write synthetic access logs
    Generate {
        #[arg(long, default_value_t = 10_000)]
        count: usize,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = 0.001)]
        error_rate: f64,

        /// Defaults to stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a config file
    CheckConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let context = || -> anyhow::Result<CliContext> {
        // An explicit --config must exist; the default location is optional.
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(&config_path)?,
        };

        let output = if cli.json {
            OutputMode::Json
        } else if cli.pretty {
            OutputMode::Pretty
        } else {
            default_output_mode()
        };

        Ok(CliContext { config, output })
    };

    match cli.command {
        Command::CheckConfig => cli::check_config(&config_path),
        Command::Import { file } => cli::run_import(&context()?, &file),
        Command::Summary { file, start, end } => {
            cli::run_summary(&context()?, &file, start.as_deref(), end.as_deref())
        }
        Command::Realtime {
            file,
            window,
            as_of,
        } => cli::run_realtime(&context()?, &file, window, as_of.as_deref()),
        Command::Journey { file, user_id } => cli::run_journey(&context()?, &file, &user_id),
        Command::Stats { window } => cli::run_stats(&context()?, window),
        Command::Generate {
            count,
            seed,
            error_rate,
            output,
        } => {
            let opts = GenerateOptions {
                count,
                seed,
                malformed_rate: error_rate,
                ..GenerateOptions::default()
            };
            cli::generate(output.as_deref(), &opts)
        }
    }
}
