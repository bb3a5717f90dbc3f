use chrono::NaiveDate;

use crate::convert::{convert_workbook, workbook_path};
use crate::error::{Result, VentasError};
use crate::settings::{load_settings, shellexpand_path};

pub fn run(
    date: Option<String>,
    dir: Option<String>,
    sheet: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let settings = load_settings();
    let date = match date {
        Some(d) => NaiveDate::parse_from_str(&d, "%d-%m-%Y")
            .map_err(|_| VentasError::Workbook(format!("invalid date '{d}', expected DD-MM-YYYY")))?,
        None => chrono::Local::now().date_naive(),
    };
    let dir = shellexpand_path(dir.as_deref().unwrap_or(&settings.workbook_dir));
    let sheet = sheet.unwrap_or(settings.sheet_name);
    let csv_path = shellexpand_path(output.as_deref().unwrap_or(&settings.sales_file));

    let workbook = workbook_path(&dir, &settings.workbook_prefix, date);
    let result = convert_workbook(&workbook, &sheet, &csv_path)?;

    println!(
        "Successfully converted the '{sheet}' sheet from '{}' to '{}'.",
        result.workbook.display(),
        csv_path.display()
    );
    println!("{} rows written", result.rows);
    Ok(())
}
