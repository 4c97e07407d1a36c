use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::{analyze_ops, config_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Small katakana normalization tool")]
struct Cli {
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize each argument as a whole string
    Normalize {
        /// Text to normalize
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Tokenize and filter a file (or stdin) with the configured analyzer
    Analyze {
        /// Input file; reads stdin when omitted
        file: Option<String>,
        /// Settings TOML to use instead of the embedded defaults
        #[arg(long)]
        settings: Option<String>,
        /// Output JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List registered filter names
    Filters,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = cli.trace_dir.as_deref().map(kana_engine::init_tracing);

    match cli.command {
        Command::Normalize { text } => analyze_ops::normalize_args(&text),
        Command::Analyze {
            file,
            settings,
            json,
        } => analyze_ops::analyze(file.as_deref(), settings.as_deref(), json),
        Command::Filters => config_ops::list_filters(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
