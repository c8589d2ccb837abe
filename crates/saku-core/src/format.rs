//! Display formatting for currency, ratios and percentages

/// Format an amount with thousands separators and no decimals, e.g. `Rp 1,250,000`
///
/// Exact halves round to even.
pub fn currency(symbol: &str, amount: f64) -> String {
    format!("{} {}", symbol, thousands(amount))
}

/// Integer part with `,` thousands separators, keeping the sign `{:.0}` produces
pub fn thousands(amount: f64) -> String {
    let formatted = format!("{:.0}", amount);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

/// Probability with two decimals
pub fn probability(p: f64) -> String {
    format!("{:.2}", p)
}

/// Percentage with one decimal, e.g. `60.0%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1_000.0), "1,000");
        assert_eq!(thousands(3_000_000.0), "3,000,000");
        assert_eq!(thousands(1_234_567.4), "1,234,567");
        assert_eq!(thousands(-500_000.0), "-500,000");
    }

    #[test]
    fn test_rounding_half_to_even() {
        assert_eq!(thousands(2_500.5), "2,500");
        assert_eq!(thousands(2_501.5), "2,502");
        assert_eq!(thousands(333_332.5), "333,332");
        assert_eq!(thousands(0.5), "0");
        assert_eq!(thousands(1_499.6), "1,500");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(thousands(-0.4), "-0");
        assert_eq!(thousands(-1_234.5), "-1,234");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency("Rp", 2_000_000.0), "Rp 2,000,000");
        // half of a 24,691 gap
        assert_eq!(currency("Rp", 12_345.5), "Rp 12,346");
        assert_eq!(currency("Rp", 12_344.5), "Rp 12,344");
    }

    #[test]
    fn test_probability_and_percent() {
        assert_eq!(probability(0.6543), "0.65");
        assert_eq!(percent(60.0), "60.0%");
        assert_eq!(percent(33.333), "33.3%");
    }
}
