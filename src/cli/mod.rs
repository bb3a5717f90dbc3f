#[cfg(feature = "xlsx")]
pub mod convert;
pub mod init;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ventas",
    version,
    about = "Monthly revenue and profit summary from exported sales transactions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the monthly summary and write it to the report file.
    Report {
        /// Gains list: one product per line, `<name>  <qty>:<gain>,...`
        #[arg(long)]
        gains: Option<String>,
        /// Sales CSV exported from the workbook
        #[arg(long)]
        sales: Option<String>,
        /// Report file to (over)write
        #[arg(long)]
        output: Option<String>,
    },
    /// Convert the dated sales workbook into the sales CSV.
    #[cfg(feature = "xlsx")]
    Convert {
        /// Workbook date: DD-MM-YYYY (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Directory holding the workbooks
        #[arg(long)]
        dir: Option<String>,
        /// Sheet to export
        #[arg(long)]
        sheet: Option<String>,
        /// CSV path to write (default: the configured sales file)
        #[arg(long)]
        output: Option<String>,
    },
    /// Save default paths and currency to the settings file.
    Init {
        #[arg(long)]
        gains: Option<String>,
        #[arg(long)]
        sales: Option<String>,
        #[arg(long)]
        output: Option<String>,
        /// Currency prefix for amounts, e.g. C$
        #[arg(long)]
        currency: Option<String>,
        #[arg(long = "workbook-dir")]
        workbook_dir: Option<String>,
        #[arg(long)]
        sheet: Option<String>,
    },
    /// Show the active settings and whether the input files exist.
    Status,
}
