use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use splitbook_core::ImportBatch;
use splitbook_ingest::detect::{detect_statement, detection_order};
use splitbook_ingest::{
    ImportError, ParseOutcome, ParsedStatement, StatementFormat, parse_statement, to_expense_form,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod logging;
mod render;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPLITBOOK_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "splitbook", version = VERSION, about = "Import bank statement exports as shared expenses")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported statement formats in detection order
    Formats,

    /// Print the detected format of a statement export
    Detect {
        file: PathBuf,
    },

    /// Parse a statement export and print its transactions
    Import {
        file: PathBuf,

        /// Use this format instead of detecting it
        #[arg(long)]
        format: Option<StatementFormat>,

        #[arg(long, value_enum, default_value_t = OutputKind::Table)]
        output: OutputKind,
    },

    /// Turn selected transactions into expense forms (JSON)
    Expenses {
        file: PathBuf,

        /// Participant id of the payer
        #[arg(long)]
        payer: String,

        /// Participant ids to split between (repeat the flag)
        #[arg(long = "participant", required = true)]
        participants: Vec<String>,

        /// Use this format instead of detecting it
        #[arg(long)]
        format: Option<StatementFormat>,

        /// Also import credits, not just charges
        #[arg(long)]
        include_credits: bool,
    },

    /// Manage ~/.splitbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputKind {
    Table,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cfg = config::load_config()?;
    logging::init(&cfg.log.level, cli.verbose);

    match cli.command {
        Command::Formats => {
            for format in detection_order() {
                println!("{:<16} {}", format.key(), format.label());
            }
        }

        Command::Detect { file } => {
            let text = state::read_statement(&file)?;
            match detect_statement(&text) {
                Ok(format) => println!("{}", format.key()),
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Command::Import {
            file,
            format,
            output,
        } => {
            let format = format.or(cfg.import.default_format()?);
            let result = load_statement(&file, format)?;

            if output == OutputKind::Json {
                let outcome = ParseOutcome::from(result);
                render::write_json(&mut io::stdout().lock(), &outcome)?;
                return Ok(exit_code(outcome.is_success()));
            }

            let parsed = match result {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            match output {
                OutputKind::Csv => {
                    render::write_csv(io::stdout().lock(), &parsed, cfg.import.timezone()?)?
                }
                _ => render::write_table(&mut io::stdout().lock(), &parsed)?,
            }
        }

        Command::Expenses {
            file,
            payer,
            participants,
            format,
            include_credits,
        } => {
            let format = format.or(cfg.import.default_format()?);
            let parsed = match load_statement(&file, format)? {
                Ok(parsed) => parsed,
                Err(err) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::FAILURE);
                }
            };

            let batch = build_batch(
                &parsed,
                &payer,
                &participants,
                include_credits,
                cfg.import.max_batch,
            )?;
            tracing::info!(
                expenses = batch.len(),
                total = batch.total_amount(),
                "built expense batch"
            );

            serde_json::to_writer_pretty(io::stdout().lock(), batch.expenses())
                .context("serialize expenses")?;
            println!();
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&cfg)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// File errors are fatal; parse errors are returned for display.
fn load_statement(
    path: &Path,
    format: Option<StatementFormat>,
) -> Result<Result<ParsedStatement, ImportError>> {
    if !path.exists() {
        bail!("statement not found: {}", path.display());
    }
    let text = state::read_statement(path)?;
    Ok(parse_statement(&text, format))
}

fn build_batch(
    parsed: &ParsedStatement,
    payer: &str,
    participants: &[String],
    include_credits: bool,
    max_batch: usize,
) -> Result<ImportBatch> {
    let expenses = parsed
        .transactions
        .iter()
        .filter(|t| include_credits || t.selected)
        .map(|t| to_expense_form(t, payer, participants))
        .collect();
    ImportBatch::new(expenses, max_batch)
}
