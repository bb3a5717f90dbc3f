use std::fmt;

/// Calendar month bucket. Orders chronologically and displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

pub const MONTH_NAMES: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
    "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

impl MonthKey {
    /// Returns `None` unless `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// One normalized transaction row.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub product: String,
    /// Quantity cell with quotes and commas removed; converted only for table lookups.
    pub quantity: String,
    pub price: f64,
    pub month: MonthKey,
    /// Numeric value of the gain cell, `None` when the cell holds no digits.
    pub explicit_gain: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTransaction {
    pub record: SalesRecord,
    pub effective_gain: f64,
}
