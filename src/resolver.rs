use crate::gains::GainsTable;
use crate::models::{ResolvedTransaction, SalesRecord};

/// Table key for a quantity: parsed as a number, truncated toward zero, printed
/// as an integer. `"2.9"` -> `"2"`. Non-numeric or non-finite input yields `None`.
pub fn quantity_key(quantity: &str) -> Option<String> {
    let value: f64 = quantity.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{truncated:.0}"))
}

/// Effective profit for one sale. First match wins:
/// explicit gain cell, zero price, table lookup, else zero.
pub fn effective_gain(record: &SalesRecord, gains: Option<&GainsTable>) -> f64 {
    if let Some(explicit) = record.explicit_gain {
        return explicit;
    }
    if record.price == 0.0 {
        return 0.0;
    }
    let Some(table) = gains else {
        return 0.0;
    };
    quantity_key(&record.quantity)
        .and_then(|key| table.lookup(&record.product, &key))
        .unwrap_or(0.0)
}

pub fn resolve(record: SalesRecord, gains: Option<&GainsTable>) -> ResolvedTransaction {
    let effective_gain = effective_gain(&record, gains);
    ResolvedTransaction {
        record,
        effective_gain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gains::parse_gains;
    use crate::models::MonthKey;

    fn sale(quantity: &str, price: f64, explicit_gain: Option<f64>) -> SalesRecord {
        SalesRecord {
            product: "Bolsa A".to_string(),
            quantity: quantity.to_string(),
            price,
            month: MonthKey::new(2024, 1).unwrap(),
            explicit_gain,
        }
    }

    fn table() -> GainsTable {
        parse_gains("Bolsa A  1:5,2:9")
    }

    #[test]
    fn test_explicit_gain_wins_over_table() {
        let t = table();
        assert_eq!(effective_gain(&sale("2", 10.0, Some(7.5)), Some(&t)), 7.5);
    }

    #[test]
    fn test_explicit_gain_wins_at_zero_price() {
        assert_eq!(effective_gain(&sale("2", 0.0, Some(3.0)), Some(&table())), 3.0);
    }

    #[test]
    fn test_zero_price_skips_lookup() {
        assert_eq!(effective_gain(&sale("2", 0.0, None), Some(&table())), 0.0);
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(effective_gain(&sale("2", 10.0, None), Some(&table())), 9.0);
    }

    #[test]
    fn test_fractional_quantity_truncates() {
        assert_eq!(effective_gain(&sale("2.9", 10.0, None), Some(&table())), 9.0);
        assert_eq!(effective_gain(&sale("1.0", 10.0, None), Some(&table())), 5.0);
    }

    #[test]
    fn test_lookup_misses_default_to_zero() {
        let t = table();
        assert_eq!(effective_gain(&sale("3", 10.0, None), Some(&t)), 0.0);
        assert_eq!(effective_gain(&sale("docena", 10.0, None), Some(&t)), 0.0);
        assert_eq!(effective_gain(&sale("2", 10.0, None), None), 0.0);

        let mut other = sale("2", 10.0, None);
        other.product = "Bolsa Z".to_string();
        assert_eq!(effective_gain(&other, Some(&t)), 0.0);
    }

    #[test]
    fn test_quantity_key() {
        assert_eq!(quantity_key("2").as_deref(), Some("2"));
        assert_eq!(quantity_key("2.75").as_deref(), Some("2"));
        assert_eq!(quantity_key(" 12 ").as_deref(), Some("12"));
        assert_eq!(quantity_key("-0.5").as_deref(), Some("0"));
        assert_eq!(quantity_key("-3.2").as_deref(), Some("-3"));
        assert_eq!(quantity_key("1e3").as_deref(), Some("1000"));
        assert_eq!(quantity_key("inf"), None);
        assert_eq!(quantity_key("NaN"), None);
        assert_eq!(quantity_key(""), None);
    }

    #[test]
    fn test_resolve_keeps_record() {
        let resolved = resolve(sale("1", 4.0, None), Some(&table()));
        assert_eq!(resolved.effective_gain, 5.0);
        assert_eq!(resolved.record.price, 4.0);
    }
}
