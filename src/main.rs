//! dsar-readiness: DSAR readiness assessment tool
//!
//! Scores answers against a weighted question catalogue and renders a
//! prioritized remediation plan.

#![allow(clippy::needless_pass_by_value, clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use dsar_readiness::{
    cli::{self, CatalogueFormat},
    config::{self, AppConfig, ConfigPreset, CONFIG_FILE_NAMES},
    model::Severity,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalogue info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nBuilt-in catalogue:",
        "\n  7 sections, 41 weighted questions",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, csv"
    )
}

#[derive(Parser)]
#[command(name = "dsar-readiness")]
#[command(version, long_version = build_long_version())]
#[command(about = "DSAR readiness assessment and remediation planning", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score
    2  Critical gaps not started (with --fail-on-critical)
    3  Error occurred

EXAMPLES:
    # Score an answer sheet against the built-in catalogue
    dsar-readiness assess answers.yaml

    # CI gate: JSON report, fail under 60% or on critical gaps
    dsar-readiness assess answers.yaml --preset ci -O readiness.json

    # Export the built-in catalogue to customise it
    dsar-readiness catalogue -f yaml > catalogue.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    /// Answer sheet (YAML or JSON, `-` for stdin)
    answers: PathBuf,

    /// Custom catalogue file instead of the built-in one
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Output format (auto picks by output file extension, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this percentage
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Exit with code 2 when a critical question is answered non-compliant
    #[arg(long)]
    fail_on_critical: bool,

    /// Treat answers for unknown question ids as errors
    #[arg(long)]
    strict: bool,

    /// Only list findings at or above this severity in the action plan
    #[arg(long, value_parser = parse_severity)]
    min_severity: Option<Severity>,

    /// Maximum number of findings in the action plan
    #[arg(long)]
    max_findings: Option<usize>,

    /// Show sections with no answered questions
    #[arg(long)]
    include_unanswered: bool,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Start from a named preset before applying the config file and flags
    #[arg(long, value_enum)]
    preset: Option<ConfigPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer sheet and print the readiness report
    Assess(AssessArgs),

    /// List or export the question catalogue
    Catalogue {
        /// Custom catalogue file instead of the built-in one
        #[arg(long)]
        catalogue: Option<PathBuf>,

        /// Listing format
        #[arg(short, long, value_enum, default_value = "text")]
        format: CatalogueFormat,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Validate a catalogue file
    CheckCatalogue {
        /// Catalogue file (YAML or JSON)
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config, answer sheet or catalogue format
    ConfigSchema {
        /// Which file format to describe
        #[arg(long, value_enum, default_value = "config")]
        kind: SchemaKind,

        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .dsar-readiness.yaml in the current directory
    Init,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SchemaKind {
    Config,
    Answers,
    Catalogue,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::parse(s).ok_or_else(|| format!("unknown severity '{s}' (critical, high, medium, low)"))
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Assess(args) => {
            let mut config = args
                .preset
                .map_or_else(AppConfig::default, AppConfig::from_preset);
            let (file_config, loaded_from) = config::load_run_config(cli.config.as_deref())?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            config.merge(&file_config);

            let overrides = AppConfig::builder()
                .catalogue_path(args.catalogue)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .max_findings(args.max_findings)
                .min_severity(args.min_severity)
                .include_unanswered_sections(args.include_unanswered)
                .title(args.title)
                .min_score(args.min_score)
                .fail_on_critical(args.fail_on_critical)
                .strict_answers(args.strict)
                .quiet(cli.quiet)
                .build();
            config.merge(&overrides);

            cli::run_assess(args.answers, config)
        }

        Commands::Catalogue {
            catalogue,
            format,
            output_file,
        } => {
            let (file_config, _) = config::load_run_config(cli.config.as_deref())?;
            let catalogue = catalogue.or(file_config.catalogue.path);
            cli::run_catalogue(catalogue, format, output_file, cli.quiet)
        }

        Commands::CheckCatalogue { path } => cli::run_check_catalogue(&path),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "dsar-readiness", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { kind, output } => {
            let schema = match kind {
                SchemaKind::Config => config::generate_json_schema(),
                SchemaKind::Answers => config::generate_answer_sheet_schema(),
                SchemaKind::Catalogue => config::generate_catalogue_schema(),
            }
            .context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_run_config(cli.config.as_deref())?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(config::default_config_path());
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
