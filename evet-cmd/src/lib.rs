//! Command implementations for the EVET CLI.
//!
//! Provides offline access to the same core the dashboard uses: CSV
//! export, JSON report generation, and reproducible refresh simulation.

use clap::Subcommand;

pub mod export;
pub mod report;
pub mod simulate;

#[derive(Subcommand)]
pub enum Command {
    /// Write the current (seed) dataset as CSV
    ExportCsv {
        /// Output path for the CSV file
        #[arg(short, long)]
        output: String,
    },

    /// Print a JSON analysis report to stdout
    Report {
        /// Optional path to a previously exported CSV (defaults to the seed dataset)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Run refresh cycles against the dataset and print the resulting statistics
    Simulate {
        /// Number of refresh cycles to run
        #[arg(short, long, default_value_t = 1)]
        cycles: u32,

        /// RNG seed for reproducible runs (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::ExportCsv { output } => export::run_export(&output),
        Command::Report { input, pretty } => {
            let json = report::run_report(input.as_deref(), pretty)?;
            println!("{json}");
            Ok(())
        }
        Command::Simulate { cycles, seed } => {
            simulate::run_simulate(cycles, seed)?;
            Ok(())
        }
    }
}
