// src/consolidate.rs
//
// Pre-pipeline consolidation: turn one or more parsed source tables into a
// single flat record collection, deduplicated on (titulo, empresa,
// localizacao). First occurrence wins, so source order matters and is
// preserved. The enrichment pipeline itself takes whatever it is given.

use std::collections::HashSet;
use std::path::Path;

use crate::config::consts::{LINKEDIN_FILE, VAGAS_FILE};
use crate::records::{row_to_raw, ColumnMap, RawRecord, Source};
use crate::store::DataSet;

/// Map one parsed table to records. Rows that don't resolve to a posting
/// (no title, short row) are skipped, not errors.
pub fn records_from_dataset(ds: &DataSet, fallback_source: Source) -> Vec<RawRecord> {
    let map = match &ds.headers {
        Some(h) => ColumnMap::from_headers(h),
        // Headerless file: assume the scraper's column order.
        None => ColumnMap {
            titulo: Some(0),
            empresa: Some(1),
            localizacao: Some(2),
            salario: Some(3),
            uf: None,
            fonte: Some(4),
        },
    };
    if !map.is_usable() {
        loge!("Consolidate: unusable column layout, headers={:?}", ds.headers);
        return Vec::new();
    }

    ds.rows
        .iter()
        .filter_map(|row| row_to_raw(row, &map, fallback_source))
        .collect()
}

/// Merge record sets and drop duplicates, first occurrence wins.
pub fn dedup(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut seen: HashSet<(String, String, String)> = HashSet::with_capacity(records.len());
    let mut out = Vec::with_capacity(records.len());
    for rec in records {
        if seen.insert(rec.dedup_key()) {
            out.push(rec);
        }
    }
    out
}

/// Consolidate several source tables into one deduplicated collection.
/// `sources[i].1` tags rows of table i when it has no `fonte` column.
pub fn consolidate(sources: &[(DataSet, Source)]) -> Vec<RawRecord> {
    let mut all = Vec::new();
    for (ds, fallback) in sources {
        let mut recs = records_from_dataset(ds, *fallback);
        logf!("Consolidate: {} rows from {:?}", recs.len(), fallback);
        all.append(&mut recs);
    }
    let before = all.len();
    let out = dedup(all);
    if out.len() < before {
        logf!("Consolidate: dropped {} duplicate(s)", before - out.len());
    }
    out
}

/// Guess the provenance tag for a file the user passed on the command line,
/// used only when the file itself has no `fonte` column.
pub fn source_for_path(path: &Path) -> Source {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if name.eq_ignore_ascii_case(LINKEDIN_FILE) => Source::LinkedIn,
        Some(name) if name.eq_ignore_ascii_case(VAGAS_FILE) => Source::VagasCom,
        _ => Source::Unknown,
    }
}
