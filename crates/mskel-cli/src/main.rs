#![forbid(unsafe_code)]

mod cmd;
mod output;
mod session;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "msk: 근골격계 부담작업 survey tool",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Write a default mskel.toml",
        after_help = "EXAMPLES:\n    # Initialize the project config\n    msk init\n\n    # Overwrite an existing config\n    msk init --force"
    )]
    Init(cmd::init::InitArgs),

    #[command(
        about = "Evaluate a session and print the 12-clause verdict table",
        after_help = "EXAMPLES:\n    # Print the verdict table\n    msk eval session.json\n\n    # Emit machine-readable output\n    msk eval session.json --json"
    )]
    Eval(cmd::eval::EvalArgs),

    #[command(
        about = "Write the session out as a 작업목록 workbook",
        after_help = "EXAMPLES:\n    # Export next to the session, named by the download rule\n    msk export session.json\n\n    # Export into a specific directory\n    msk export session.json --output out/"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        about = "Read a 작업목록 workbook into a session file",
        after_help = "EXAMPLES:\n    # Import into session.json\n    msk import 작업목록표_용접반_260829.xlsx\n\n    # Import into a named session file\n    msk import survey.xlsx --output team-a.json"
    )]
    Import(cmd::import::ImportArgs),
}

fn init_tracing(verbose: bool) {
    // `MSKEL_LOG` wins outright; otherwise `--verbose` (or `DEBUG`)
    // widens the default filter.
    let filter = EnvFilter::try_from_env("MSKEL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "mskel=debug,info"
        } else {
            "mskel=info,warn"
        })
    });

    let format = env::var("MSKEL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json().with_ansi(false)).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = std::env::current_dir()?;
    let output = cli.output_mode();

    match cli.command {
        Commands::Init(args) => cmd::init::run_init(&args, &project_root),
        Commands::Eval(ref args) => cmd::eval::run_eval(args, output),
        Commands::Export(ref args) => cmd::export::run_export(args, output, &project_root),
        Commands::Import(ref args) => cmd::import::run_import(args, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_sets_output_mode() {
        let cli = Cli::parse_from(["msk", "--json", "eval", "session.json"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["msk", "eval", "session.json", "--json"]);
        assert!(cli.json);
    }

    #[test]
    fn default_output_is_human() {
        let cli = Cli::parse_from(["msk", "eval", "session.json"]);
        assert!(!cli.output_mode().is_json());
    }

    #[test]
    fn verbose_flag_parsed() {
        let cli = Cli::parse_from(["msk", "--verbose", "eval", "session.json"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["msk", "eval", "session.json"]);
        assert!(!cli.verbose);
    }

    #[test]
    fn quiet_flag_parsed() {
        let cli = Cli::parse_from(["msk", "-q", "eval", "session.json"]);
        assert!(cli.quiet);
    }

    #[test]
    fn all_subcommands_parse() {
        let subcommands = [
            vec!["msk", "init"],
            vec!["msk", "init", "--force"],
            vec!["msk", "eval", "session.json"],
            vec!["msk", "export", "session.json"],
            vec!["msk", "export", "session.json", "--output", "out"],
            vec!["msk", "import", "survey.xlsx"],
            vec!["msk", "import", "survey.xlsx", "--output", "a.json"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "failed to parse {args:?}: {:?}", result.err());
        }
    }

    #[test]
    fn import_defaults_the_session_path() {
        let cli = Cli::parse_from(["msk", "import", "survey.xlsx"]);
        match cli.command {
            Commands::Import(args) => {
                assert_eq!(args.output, std::path::PathBuf::from("session.json"));
            }
            other => panic!("expected import, got {other:?}"),
        }
    }
}
