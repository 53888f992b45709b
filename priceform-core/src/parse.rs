use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Lenient parse used by submit validation.
///
/// Empty, whitespace-only, or non-numeric text is treated as zero, which
/// the validation rules then reject as "not a positive value". Logs a
/// warning when non-empty text is discarded.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "non-numeric value treated as zero: {}", e);
        Decimal::ZERO
    })
}
