/// Group the integer digits of `val` in threes, two decimals: 1234.5 -> "1,234.50"
pub fn thousands(val: f64) -> String {
    if !val.is_finite() {
        return val.to_string();
    }
    let fixed = format!("{:.2}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if val.is_sign_negative() && fixed != "0.00" {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Currency amount with the symbol in front of the sign: C$1,234.56, C$-5.00
pub fn money(val: f64, symbol: &str) -> String {
    format!("{symbol}{}", thousands(val))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "C$"), "C$1,234.56");
        assert_eq!(money(-500.00, "C$"), "C$-500.00");
        assert_eq!(money(0.0, "C$"), "C$0.00");
        assert_eq!(money(1000000.99, "$"), "$1,000,000.99");
        assert_eq!(money(42.1, "C$"), "C$42.10");
    }

    #[test]
    fn test_thousands_rounding() {
        assert_eq!(thousands(999.999), "1,000.00");
        assert_eq!(thousands(123456.0), "123,456.00");
        assert_eq!(thousands(-0.001), "0.00");
    }

    #[test]
    fn test_non_finite_left_unformatted() {
        assert_eq!(money(f64::INFINITY, "C$"), "C$inf");
        assert_eq!(money(f64::NEG_INFINITY, "C$"), "C$-inf");
        assert_eq!(money(f64::NAN, "C$"), "C$NaN");
    }
}
