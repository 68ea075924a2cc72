// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{to_export_string, Delim};
use crate::store::DataSet;

/// Write a single export file based on ExportOptions (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    ds: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let delim = match export.delimiter() {
        '\t' => Delim::Tsv,
        _ => Delim::Csv,
    };
    let contents = to_export_string(&ds.headers, &ds.rows, export.include_headers, delim);

    fs::write(&path, contents)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
