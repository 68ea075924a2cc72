// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic and the export writer.
//
use std::fs;

use vagadash::config::options::{ExportFormat, ExportOptions};
use vagadash::csv::{detect_headers, parse_rows, Delim};
use vagadash::file::write_export;
use vagadash::records::enriched_headers;
use vagadash::store::DataSet;

#[test]
fn extension_follows_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    assert!(opts.out_path().to_string_lossy().ends_with(".csv"));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with(".tsv"));
}

#[test]
fn set_path_ignores_pasted_extension() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.set_path("reports/minha_analise.data");

    let p = opts.out_path();
    let s = p.to_string_lossy();
    assert!(s.ends_with(".csv"), "format controls the extension, got {s}");
    assert!(s.contains("minha_analise"));
    assert!(p.parent().unwrap().ends_with("reports"));
}

#[test]
fn write_export_round_trips() {
    let dir = std::env::temp_dir().join("vagadash_export_test");
    let _ = fs::remove_dir_all(&dir);

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = true;
    opts.set_path(&dir.join("saida.tsv").to_string_lossy());

    let ds = DataSet {
        headers: Some(enriched_headers()),
        rows: vec![vec![
            s("Analista de Dados"), s("ACME"), s("São Paulo - SP"),
            s("R$ 3.000,00"), s("SP"), s("Vagas.com"),
            s("Sudeste"), s("São Paulo"), s("Não especificada"), s("3000.00"),
        ]],
    };

    let path = write_export(&opts, &ds).unwrap();
    assert!(path.exists());
    assert_eq!(path.extension().unwrap(), "tsv");

    let text = fs::read_to_string(&path).unwrap();
    let (headers, rows) = detect_headers(parse_rows(&text, Delim::Tsv));
    assert_eq!(headers.unwrap(), enriched_headers());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][6], "Sudeste");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn header_row_can_be_omitted() {
    let dir = std::env::temp_dir().join("vagadash_export_noheader_test");
    let _ = fs::remove_dir_all(&dir);

    let mut opts = ExportOptions::default();
    opts.include_headers = false;
    opts.set_path(&dir.join("saida.csv").to_string_lossy());

    let ds = DataSet {
        headers: Some(vec![s("titulo")]),
        rows: vec![vec![s("Analista")]],
    };
    let path = write_export(&opts, &ds).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Analista\n");

    let _ = fs::remove_dir_all(&dir);
}

fn s(v: &str) -> String {
    v.to_string()
}
