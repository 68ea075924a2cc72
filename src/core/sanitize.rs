// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. newlines from multi-line scrape cells)
/// into single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True when a scraped cell carries no usable text.
/// The scrapers emit "N/A" for elements they could not find.
pub fn is_blank(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case("n/a")
}
