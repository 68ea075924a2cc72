// src/enrich/salary.rs
//
// Numeric salary extraction from free-text salary cells.
//
// Source cells look like "R$ 3.000,00", "R$ 2.500,00 a R$ 3.500,00",
// "A combinar", or are missing entirely. Anything without the "R$"
// currency marker yields None.

/// Extract the first numeric value from a salary string.
///
/// Brazilian convention: '.' is the thousands separator, ',' the decimal
/// separator. Ranges and multi-number strings yield only the first number,
/// i.e. a range's lower bound ("R$ 3.000,00 a R$ 5.000,00" → 3000.0).
pub fn parse_salary(text: &str) -> Option<f64> {
    if !text.contains("R$") {
        return None;
    }

    // "3.000,00" → "3000.00"
    let normalized: String = text
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    first_number(&normalized)
}

/// First run of digits (with at most one embedded decimal point), parsed as f64.
fn first_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            let mut seen_dot = false;
            while i < bytes.len() {
                let b = bytes[i];
                if b.is_ascii_digit() {
                    i += 1;
                } else if b == b'.' && !seen_dot && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
                    seen_dot = true;
                    i += 1;
                } else {
                    break;
                }
            }
            return s[start..i].parse::<f64>().ok();
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value() {
        assert_eq!(parse_salary("R$ 3.000,00"), Some(3000.0));
        assert_eq!(parse_salary("R$ 4.500"), Some(4500.0));
        assert_eq!(parse_salary("R$2.847,50"), Some(2847.5));
    }

    #[test]
    fn range_uses_first_number() {
        assert_eq!(parse_salary("R$ 3.000,00 a R$ 5.000,00"), Some(3000.0));
        assert_eq!(parse_salary("De R$ 1.800,00 até R$ 2.200,00"), Some(1800.0));
    }

    #[test]
    fn no_currency_marker_is_none() {
        assert_eq!(parse_salary("A combinar"), None);
        assert_eq!(parse_salary("3000"), None);
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("Salário compatível com o mercado"), None);
    }

    #[test]
    fn marker_without_digits_is_none() {
        assert_eq!(parse_salary("R$ a combinar"), None);
    }
}
