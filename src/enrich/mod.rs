// src/enrich/mod.rs
//
// Record enrichment pipeline: composes the pure classifiers over a raw
// record collection. Order-preserving, 1:1, no shared mutable state; each
// derivation degrades to its own fallback independently of the others.

pub mod city;
pub mod keywords;
pub mod region;
pub mod salary;
pub mod seniority;

pub use city::{extract_city, UNSPECIFIED};
pub use keywords::{tag_counts, title_matches, KeywordTable, TagSpec, DEFAULT_TAGS};
pub use region::{classify_region, extract_uf, region_of_uf, Region, UF_REGIONS};
pub use salary::parse_salary;
pub use seniority::{classify_seniority, Seniority};

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc, Arc,
};
use std::thread;

use crate::records::{EnrichedRecord, RawRecord};

/// Derive all columns for a single record.
///
/// A pre-resolved `uf` goes straight to the mapping table; only records
/// without one pay for the free-text scan.
pub fn enrich_one(raw: &RawRecord) -> EnrichedRecord {
    let regiao = match raw.uf.as_deref() {
        Some(code) => region_of_uf(code),
        None => classify_region(&raw.localizacao),
    };

    // Keep only a canonical 2-letter code in the output column; the raw
    // `uf` cell may carry "Remoto"/"Não especificada" from the scraper.
    let uf = raw
        .uf
        .as_deref()
        .and_then(extract_uf)
        .or_else(|| extract_uf(&raw.localizacao))
        .map(String::from);

    let cidade = extract_city(&raw.localizacao);
    let senioridade = classify_seniority(&raw.titulo);
    let salario_valor = raw.salario.as_deref().and_then(parse_salary);

    EnrichedRecord {
        raw: raw.clone(),
        regiao,
        cidade,
        senioridade,
        salario_valor,
        uf,
    }
}

/// Enrich a collection sequentially. Output row i derives only from input row i.
pub fn enrich(records: &[RawRecord]) -> Vec<EnrichedRecord> {
    records.iter().map(enrich_one).collect()
}

/// Enrich across `workers` threads. Same result as `enrich`; records are
/// independent, so the only coordination is a shared cursor and the result
/// channel. Falls back to the sequential path when it would not pay off.
pub fn enrich_parallel(records: &[RawRecord], workers: usize) -> Vec<EnrichedRecord> {
    let workers = workers.min(records.len()).max(1);
    if workers == 1 {
        return enrich(records);
    }

    let input = Arc::new(records.to_vec());
    let cursor = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, EnrichedRecord)>();

    for _ in 0..workers {
        let input = Arc::clone(&input);
        let cursor = Arc::clone(&cursor);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= input.len() {
                    break;
                }
                let _ = tx.send((i, enrich_one(&input[i])));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut indexed: Vec<(usize, EnrichedRecord)> = Vec::with_capacity(records.len());
    while let Ok(pair) = res_rx.recv() {
        indexed.push(pair);
    }

    // Restore input order
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, r)| r).collect()
}
