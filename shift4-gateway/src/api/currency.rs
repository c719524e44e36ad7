//! Minor-unit conversion for charge amounts
//!
//! The gateway expects charge amounts as integers in the currency's minor
//! unit (cents for USD, fils for BHD, whole yen for JPY). Conversion must be
//! exact for every ISO currency with 0, 2, or 3 fraction digits.

/// ISO 4217 fraction digits for a currency code. Unknown codes default to 2.
pub fn fraction_digits(currency: &str) -> u32 {
    match currency.to_ascii_uppercase().as_str() {
        // Zero-decimal currencies
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF" | "UGX"
        | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        // Three-decimal currencies
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

/// Convert a decimal amount to the currency's minor unit, rounding to the
/// nearest integer.
pub fn to_minor_units(amount: f64, currency: &str) -> i64 {
    let multiplier = 10f64.powi(fraction_digits(currency) as i32);
    (amount * multiplier).round() as i64
}

/// Convert a minor-unit amount back to its decimal representation.
pub fn from_minor_units(amount: i64, currency: &str) -> f64 {
    let multiplier = 10f64.powi(fraction_digits(currency) as i32);
    amount as f64 / multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits("USD"), 2);
        assert_eq!(fraction_digits("EUR"), 2);
        assert_eq!(fraction_digits("jpy"), 0);
        assert_eq!(fraction_digits("BHD"), 3);
        // Unknown codes fall back to 2
        assert_eq!(fraction_digits("XYZ"), 2);
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(19.99, "USD"), 1999);
        assert_eq!(to_minor_units(1000.0, "JPY"), 1000);
        assert_eq!(to_minor_units(1.234, "BHD"), 1234);
        assert_eq!(to_minor_units(0.0, "USD"), 0);
        // Float noise rounds to the right cent
        assert_eq!(to_minor_units(0.1 + 0.2, "USD"), 30);
    }

    #[test]
    fn test_round_trip_recovers_displayed_precision() {
        for (amount, currency) in [
            (19.99, "USD"),
            (0.01, "USD"),
            (1000.0, "JPY"),
            (1.234, "BHD"),
            (12.345, "KWD"),
            (5.0, "ISK"),
        ] {
            let minor = to_minor_units(amount, currency);
            let recovered = from_minor_units(minor, currency);
            let scale = 10f64.powi(fraction_digits(currency) as i32);
            assert_eq!(
                (recovered * scale).round(),
                (amount * scale).round(),
                "round trip failed for {amount} {currency}"
            );
        }
    }
}
