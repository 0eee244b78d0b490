//! planbook CLI - Schedule Workbook Generator
//!
//! Command-line interface for rendering the built-in project schedules to
//! XLSX workbooks and previewing their tables.

mod commands;
mod reports;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use planbook_core::FileStamp;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reports::ReportId;

#[derive(Parser)]
#[command(name = "planbook")]
#[command(author, version, about = "Project schedule workbook generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report to an XLSX workbook
    Generate {
        /// Report to render
        #[arg(value_enum)]
        report: ReportId,

        /// Directory the workbook is written to
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// TOML theme file laid over the report's style preset
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Override the report's file name stamp
        #[arg(long, value_enum)]
        stamp: Option<StampArg>,
    },

    /// List the built-in reports
    List,

    /// Preview a report's table and merges without writing a workbook
    Inspect {
        /// Report to inspect
        #[arg(value_enum)]
        report: ReportId,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = InspectFormat::Text)]
        format: InspectFormat,
    },
}

/// File name stamp kinds
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StampArg {
    /// YYYYMMDD
    Date,
    /// Unix seconds
    Epoch,
}

impl From<StampArg> for FileStamp {
    fn from(arg: StampArg) -> Self {
        match arg {
            StampArg::Date => FileStamp::Date,
            StampArg::Epoch => FileStamp::Epoch,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Generate {
            report,
            output,
            theme,
            stamp,
        }) => {
            commands::generate(report, &output, theme.as_deref(), stamp.map(Into::into))?;
        }
        Some(Commands::List) => commands::list(),
        Some(Commands::Inspect { report, format }) => commands::inspect(report, format)?,
        None => {
            println!("planbook - Project Schedule Workbook Generator");
            println!("Run with --help for usage information");
        }
    }

    Ok(())
}
