// src/store.rs
//
// Tabular file loading and the local enriched-snapshot cache.
//
// A missing input file is a load-time condition surfaced once to the
// caller; downstream components get an empty collection, never partial
// data. Per-row problems are not errors here: rows that don't map to a
// posting are simply skipped by the consolidation layer.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{ENRICHED_CACHE_FILE, STORE_DIR};
use crate::csv::{self, detect_headers, parse_rows, Delim};

/// Canonical in-memory table.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Read and parse one CSV/TSV file. The delimiter comes from the extension;
/// anything that isn't `.tsv` parses as CSV.
pub fn load_dataset(path: &Path) -> io::Result<DataSet> {
    let text = fs::read_to_string(path)?;
    let delim = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => Delim::Tsv,
        _ => Delim::Csv,
    };
    let (headers, rows) = detect_headers(parse_rows(&text, delim));
    Ok(DataSet { headers, rows })
}

/* ---------------- Enriched snapshot cache ---------------- */

fn cache_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(ENRICHED_CACHE_FILE)
}

/// Persist the enriched table so the GUI can show data at next startup
/// without re-reading the inputs.
pub fn save_cache(ds: &DataSet) -> io::Result<PathBuf> {
    let path = cache_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = csv::to_export_string(&ds.headers, &ds.rows, true, Delim::Csv);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Load the cached enriched table, if any.
pub fn load_cache() -> io::Result<DataSet> {
    load_dataset(&cache_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_single_error() {
        let err = load_dataset(Path::new("definitely/not/here.csv"));
        assert!(err.is_err());
    }

    #[test]
    fn extension_picks_delimiter() {
        // Written through a temp dir to avoid polluting the workspace.
        let dir = std::env::temp_dir().join("vagadash_store_test");
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join("x.tsv");
        fs::write(&p, "titulo\tempresa\tlocalizacao\nAnalista\tACME\tSP\n").unwrap();
        let ds = load_dataset(&p).unwrap();
        assert_eq!(ds.header_count(), 3);
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows[0][0], "Analista");
        let _ = fs::remove_file(&p);
    }
}
