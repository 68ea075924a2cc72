// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Field separator for tabular files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
    pub fn ext(&self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Heuristic: postings files start with a "titulo" column; treat the first
/// row as a header when any known column name appears in it.
pub fn detect_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() { return (None, rows); }
    let first = &rows[0];
    let known = ["titulo", "empresa", "localizacao", "salario", "uf", "fonte"];
    let is_header = first
        .iter()
        .any(|c| known.iter().any(|k| c.trim().eq_ignore_ascii_case(k)));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from headers and rows.
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, delim);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_fields_and_crlf() {
        let text = "titulo,empresa,localizacao\r\n\"Analista, Dados\",ACME,\"São Paulo - SP\"\r\n";
        let rows = parse_rows(text, Delim::Csv);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "Analista, Dados");
        assert_eq!(rows[1][2], "São Paulo - SP");
    }

    #[test]
    fn detects_postings_header() {
        let rows = vec![
            vec![s!("titulo"), s!("empresa"), s!("localizacao")],
            vec![s!("Analista"), s!("ACME"), s!("SP")],
        ];
        let (h, body) = detect_headers(rows);
        assert_eq!(h.unwrap()[0], "titulo");
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn headerless_rows_pass_through() {
        let rows = vec![vec![s!("Analista"), s!("ACME"), s!("SP")]];
        let (h, body) = detect_headers(rows);
        assert!(h.is_none());
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn write_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a,b"), s!("c\"d"), s!("plain")], Delim::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",\"c\"\"d\",plain\n");
    }

    #[test]
    fn export_string_respects_header_flag() {
        let headers = Some(vec![s!("titulo")]);
        let rows = vec![vec![s!("Analista")]];
        let with = to_export_string(&headers, &rows, true, Delim::Csv);
        let without = to_export_string(&headers, &rows, false, Delim::Csv);
        assert!(with.starts_with("titulo\n"));
        assert_eq!(without, "Analista\n");
    }
}
