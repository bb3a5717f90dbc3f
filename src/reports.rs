use std::collections::BTreeMap;

use crate::gains::GainsTable;
use crate::models::{MonthKey, ResolvedTransaction, SalesRecord};
use crate::resolver::resolve;

// ---------------------------------------------------------------------------
// Monthly totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_price: f64,
    pub total_gain: f64,
}

/// Per-month sums, iterated in chronological order.
#[derive(Debug, Clone, Default)]
pub struct MonthlyTotals {
    months: BTreeMap<MonthKey, Totals>,
}

impl MonthlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, txn: &ResolvedTransaction) {
        let entry = self.months.entry(txn.record.month).or_default();
        entry.total_price += txn.record.price;
        entry.total_gain += txn.effective_gain;
    }

    #[cfg(test)]
    pub fn get(&self, month: &MonthKey) -> Option<&Totals> {
        self.months.get(month)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MonthKey, &Totals)> {
        self.months.iter()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Sum of every month, accumulated in month order.
    pub fn grand_totals(&self) -> Totals {
        self.months.values().fold(Totals::default(), |acc, m| Totals {
            total_price: acc.total_price + m.total_price,
            total_gain: acc.total_gain + m.total_gain,
        })
    }
}

// ---------------------------------------------------------------------------
// Sales summary
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SalesSummary {
    pub months: MonthlyTotals,
    pub grand: Totals,
    pub rows_counted: usize,
}

/// Resolve each record's gain and fold it into its month, in input order.
pub fn summarize<I>(records: I, gains: Option<&GainsTable>) -> SalesSummary
where
    I: IntoIterator<Item = SalesRecord>,
{
    let mut months = MonthlyTotals::new();
    let mut rows_counted = 0usize;
    for record in records {
        months.add(&resolve(record, gains));
        rows_counted += 1;
    }
    let grand = months.grand_totals();
    SalesSummary {
        months,
        grand,
        rows_counted,
    }
}
