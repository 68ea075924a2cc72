// src/enrich/city.rs

use crate::core::sanitize::{is_blank, normalize_ws};

/// Sentinel used wherever a categorical field cannot be derived.
pub const UNSPECIFIED: &str = "Não especificada";

/// Short city label from a free-text location.
///
/// Takes the segment before the first delimiter, trying '-', then '/',
/// then ',' in that order ("São Paulo - SP" → "São Paulo"). Blank input
/// yields the Unspecified sentinel, never an empty string.
pub fn extract_city(location: &str) -> String {
    if is_blank(location) {
        return s!(UNSPECIFIED);
    }

    for delim in ['-', '/', ','] {
        if let Some(ix) = location.find(delim) {
            let head = normalize_ws(&location[..ix]);
            return if head.is_empty() { s!(UNSPECIFIED) } else { head };
        }
    }
    normalize_ws(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_delimiter() {
        assert_eq!(extract_city("São Paulo - SP"), "São Paulo");
        assert_eq!(extract_city("Rio de Janeiro/RJ"), "Rio de Janeiro");
        assert_eq!(extract_city("Curitiba, PR"), "Curitiba");
    }

    #[test]
    fn dash_takes_priority_over_slash_and_comma() {
        // Priority is positional on the chosen delimiter, not leftmost overall:
        // '-' is tried first even when a '/' occurs earlier in the string.
        assert_eq!(extract_city("Campinas/SP - Híbrido"), "Campinas/SP");
    }

    #[test]
    fn no_delimiter_returns_whole_trimmed() {
        assert_eq!(extract_city("  Fortaleza "), "Fortaleza");
    }

    #[test]
    fn blank_is_unspecified() {
        assert_eq!(extract_city(""), UNSPECIFIED);
        assert_eq!(extract_city("   "), UNSPECIFIED);
        assert_eq!(extract_city("N/A"), UNSPECIFIED);
        assert_eq!(extract_city("- SP"), UNSPECIFIED);
    }
}
