// src/runner.rs
//
// Headless pipeline runner: load inputs → consolidate → enrich → export.
// Shared by the CLI and the GUI's reload action.

use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::PARALLEL_MIN_ROWS,
    config::options::{AppOptions, LoadOptions},
    consolidate::{self, source_for_path},
    enrich::{enrich, enrich_parallel},
    progress::Progress,
    records::{enriched_headers, EnrichedRecord, Source},
    store::{self, DataSet},
};

/// Summary of one pipeline run.
pub struct RunSummary {
    pub files_read: usize,
    pub records: usize,
    pub written: Option<PathBuf>,
}

/// Load and enrich according to `load` options. This is the in-memory half
/// of `run`; the GUI calls it directly and keeps the records.
pub fn load_and_enrich(
    load: &LoadOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Vec<EnrichedRecord>, usize), Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(load.inputs.len() + 1);
    }

    let mut sources: Vec<(DataSet, Source)> = Vec::with_capacity(load.inputs.len());
    let mut files_read = 0usize;
    for path in &load.inputs {
        match store::load_dataset(path) {
            Ok(ds) => {
                logf!("Load: {} ({} rows)", path.display(), ds.row_count());
                sources.push((ds, source_for_path(path)));
                files_read += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.step_done(&path.display().to_string());
                }
            }
            Err(e) => {
                // Missing input is a user-visible condition, reported once;
                // the pipeline continues with whatever did load.
                loge!("Load: {} ({})", path.display(), e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Could not read {}: {}", path.display(), e));
                }
            }
        }
    }

    let raws = consolidate::consolidate(&sources);

    let jobs = load.jobs.max(1);
    let enriched = if jobs > 1 && raws.len() >= PARALLEL_MIN_ROWS {
        enrich_parallel(&raws, jobs)
    } else {
        enrich(&raws)
    };
    logf!("Enrich: {} record(s), jobs={}", enriched.len(), jobs);

    if let Some(p) = progress.as_deref_mut() {
        p.step_done("enrich");
        p.finish();
    }
    Ok((enriched, files_read))
}

/// Flatten enriched records into the output table shape.
pub fn to_dataset(records: &[EnrichedRecord]) -> DataSet {
    DataSet {
        headers: Some(enriched_headers()),
        rows: records.iter().map(|r| r.to_row()).collect(),
    }
}

/// Full headless run: load, enrich, cache, export.
pub fn run(
    options: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(RunSummary, Vec<EnrichedRecord>), Box<dyn Error>> {
    let (enriched, files_read) = load_and_enrich(&options.load, progress)?;
    let ds = to_dataset(&enriched);

    // Best-effort snapshot for the next GUI start; export failures matter,
    // cache failures don't.
    if let Err(e) = store::save_cache(&ds) {
        logd!("Cache: save failed ({})", e);
    }

    let written = if enriched.is_empty() {
        None
    } else {
        let path = crate::file::write_export(&options.export, &ds)?;
        logf!("Export: {}", path.display());
        Some(path)
    };

    let summary = RunSummary {
        files_read,
        records: enriched.len(),
        written,
    };
    Ok((summary, enriched))
}
