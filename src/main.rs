mod cli;
#[cfg(feature = "xlsx")]
mod convert;
mod error;
mod fmt;
mod gains;
mod importer;
mod models;
mod reports;
mod resolver;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::report::run(None, None, None),
        Some(Commands::Report {
            gains,
            sales,
            output,
        }) => cli::report::run(gains, sales, output),
        #[cfg(feature = "xlsx")]
        Some(Commands::Convert {
            date,
            dir,
            sheet,
            output,
        }) => cli::convert::run(date, dir, sheet, output),
        Some(Commands::Init {
            gains,
            sales,
            output,
            currency,
            workbook_dir,
            sheet,
        }) => cli::init::run(cli::init::InitArgs {
            gains,
            sales,
            output,
            currency,
            workbook_dir,
            sheet,
        }),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
