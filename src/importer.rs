use std::path::Path;

use thiserror::Error;

use crate::error::{Result, VentasError};
use crate::models::{MonthKey, SalesRecord};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open a file for reading, mapping a missing path to `FileNotFound`.
pub fn read_input(what: &'static str, path: &Path) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(VentasError::FileNotFound {
            what,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Decode input bytes as UTF-8, replacing invalid sequences and dropping a leading BOM.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

/// Keep only ASCII digits and decimal points: `"C$1,250.00"` -> `"1250.00"`.
pub fn numeric_residue(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

fn parse_residue(raw: &str) -> std::result::Result<Option<f64>, ()> {
    let residue = numeric_residue(raw);
    if residue.is_empty() {
        return Ok(None);
    }
    residue.parse::<f64>().map(Some).map_err(|_| ())
}

/// Month bucket for a `YYYY-MM-DD` cell. Anything after the month part is ignored.
pub fn parse_month_key(raw: &str) -> std::result::Result<MonthKey, RowSkip> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() < 3 {
        return Err(RowSkip::BadDate(raw.to_string()));
    }
    let year: i32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| RowSkip::BadDate(raw.to_string()))?;
    let month: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| RowSkip::BadDate(raw.to_string()))?;
    MonthKey::new(year, month).ok_or_else(|| RowSkip::BadDate(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

pub const MIN_CELLS: usize = 5;

#[derive(Error, Debug, PartialEq)]
pub enum RowSkip {
    #[error("only {0} cells")]
    TooFewCells(usize),
    #[error("bad price '{0}'")]
    BadPrice(String),
    #[error("bad date '{0}'")]
    BadDate(String),
    #[error("bad gain '{0}'")]
    BadGain(String),
}

/// Normalize one data row: product, quantity, price, date, gain. Extra cells are ignored.
pub fn normalize_row<S: AsRef<str>>(cells: &[S]) -> std::result::Result<SalesRecord, RowSkip> {
    if cells.len() < MIN_CELLS {
        return Err(RowSkip::TooFewCells(cells.len()));
    }
    let cell = |i: usize| cells[i].as_ref();

    let product = cell(0).trim().to_string();
    let quantity = cell(1).replace(['"', ','], "").trim().to_string();
    let price = parse_residue(cell(2))
        .map_err(|_| RowSkip::BadPrice(cell(2).to_string()))?
        .unwrap_or(0.0);
    let month = parse_month_key(cell(3))?;
    let explicit_gain =
        parse_residue(cell(4)).map_err(|_| RowSkip::BadGain(cell(4).to_string()))?;

    Ok(SalesRecord {
        product,
        quantity,
        price,
        month,
        explicit_gain,
    })
}

// ---------------------------------------------------------------------------
// Sales CSV
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SalesImport {
    pub records: Vec<SalesRecord>,
    pub skipped: usize,
}

/// Parse sales CSV text. The first row is a header and is never treated as data.
pub fn parse_sales(content: &str) -> SalesImport {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut import = SalesImport::default();

    for (idx, result) in rdr.records().enumerate().skip(1) {
        let Ok(record) = result else {
            import.skipped += 1;
            continue;
        };
        let cells: Vec<&str> = record.iter().collect();
        match normalize_row(&cells) {
            Ok(row) => import.records.push(row),
            Err(skip) => {
                log::debug!("sales row {}: skipped, {skip}", idx + 1);
                import.skipped += 1;
            }
        }
    }
    import
}

/// Read the sales CSV. A missing file is fatal for the run.
pub fn read_sales(path: &Path) -> Result<SalesImport> {
    let bytes = read_input("Sales file", path)?;
    Ok(parse_sales(&decode_lossy(&bytes)))
}
