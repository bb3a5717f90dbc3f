use std::io::Write;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader};
use chrono::NaiveDate;

use crate::error::{Result, VentasError};

#[derive(Debug)]
pub struct ConvertResult {
    pub workbook: PathBuf,
    pub rows: usize,
}

/// `<dir>/<prefix><DD-MM-YYYY>.xlsx`
pub fn workbook_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{prefix}{}.xlsx", date.format("%d-%m-%Y")))
}

/// Serials outside chrono's date range are rendered as the raw number.
pub fn excel_serial_to_date(serial: f64) -> String {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default();
    chrono::TimeDelta::try_days(serial.floor() as i64)
        .and_then(|days| base.checked_add_signed(days))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| serial.to_string())
}

pub fn render_cell(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::DateTimeIso(s) => s.get(..10).unwrap_or(s).to_string(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Copy every row of `sheet` into a headerless, BOM-prefixed UTF-8 CSV.
pub fn convert_workbook(workbook: &Path, sheet: &str, csv_path: &Path) -> Result<ConvertResult> {
    if !workbook.exists() {
        return Err(VentasError::FileNotFound {
            what: "Workbook",
            path: workbook.to_path_buf(),
        });
    }
    let mut book = calamine::open_workbook_auto(workbook)
        .map_err(|e| VentasError::Workbook(format!("Failed to open {}: {e}", workbook.display())))?;

    let names = book.sheet_names();
    log::info!("found sheet names: {names:?}");
    if !names.iter().any(|n| n == sheet) {
        return Err(VentasError::Workbook(format!(
            "sheet '{sheet}' not found (available: {})",
            names.join(", ")
        )));
    }
    let range = book
        .worksheet_range(sheet)
        .map_err(|e| VentasError::Workbook(format!("Failed to read sheet '{sheet}': {e}")))?;

    let mut file = std::fs::File::create(csv_path)?;
    file.write_all("\u{feff}".as_bytes())?;
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);
    let mut rows = 0usize;
    for row in range.rows() {
        wtr.write_record(row.iter().map(render_cell))?;
        rows += 1;
    }
    wtr.flush()?;

    Ok(ConvertResult {
        workbook: workbook.to_path_buf(),
        rows,
    })
}
