use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, settings_path, shellexpand_path};

fn presence(path: &Path) -> colored::ColoredString {
    if path.exists() {
        "found".green()
    } else {
        "missing".red()
    }
}

pub fn run() -> Result<()> {
    let settings = load_settings();
    let config = settings_path();

    println!("Settings:   {} ({})", config.display(), if config.exists() { "saved" } else { "defaults" });
    for (label, file) in [
        ("Gains:     ", &settings.gains_file),
        ("Sales:     ", &settings.sales_file),
        ("Report:    ", &settings.report_file),
    ] {
        let path = shellexpand_path(file);
        println!("{label} {} [{}]", path.display(), presence(&path));
    }
    println!("Currency:   {}", settings.currency_symbol);
    println!("Workbooks:  {}/{}DD-MM-YYYY.xlsx, sheet '{}'",
        settings.workbook_dir, settings.workbook_prefix, settings.sheet_name);
    Ok(())
}
