// src/stats.rs
//
// Aggregations shared by the dashboard and the CLI summary. All pure reads
// over the enriched collection; the presentation layers only format them.

use std::collections::HashMap;

use crate::enrich::{self, KeywordTable, Region, Seniority};
use crate::records::{EnrichedRecord, Source};

/// Count per region, descending, zero-count regions omitted.
pub fn counts_by_region(records: &[EnrichedRecord]) -> Vec<(Region, usize)> {
    let mut counts: HashMap<Region, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.regiao).or_insert(0) += 1;
    }
    let mut out: Vec<_> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    out
}

/// Count per seniority tier, descending.
pub fn counts_by_seniority(records: &[EnrichedRecord]) -> Vec<(Seniority, usize)> {
    let mut counts: HashMap<Seniority, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.senioridade).or_insert(0) += 1;
    }
    let mut out: Vec<_> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    out
}

/// Count per provenance source.
pub fn counts_by_source(records: &[EnrichedRecord]) -> Vec<(Source, usize)> {
    let mut counts: HashMap<Source, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.raw.fonte).or_insert(0) += 1;
    }
    let mut out: Vec<_> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Companies with the most postings, descending, ties by name.
pub fn top_companies(records: &[EnrichedRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        if !r.raw.empresa.is_empty() {
            *counts.entry(r.raw.empresa.as_str()).or_insert(0) += 1;
        }
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    out.truncate(n);
    out
}

/// Salary aggregates over the records with a parseable salary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SalaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

pub fn salary_stats(records: &[EnrichedRecord]) -> SalaryStats {
    let mut values: Vec<f64> = records.iter().filter_map(|r| r.salario_valor).collect();
    if values.is_empty() {
        return SalaryStats::default();
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 1 {
        values[count / 2]
    } else {
        (values[count / 2 - 1] + values[count / 2]) / 2.0
    };
    SalaryStats { count, mean, median }
}

/// Share of records classified Remote, 0.0..=1.0.
pub fn remote_share(records: &[EnrichedRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let remote = records.iter().filter(|r| r.regiao == Region::Remote).count();
    remote as f64 / records.len() as f64
}

/// Technology tag counts over the titles.
pub fn technology_counts(records: &[EnrichedRecord], table: &KeywordTable) -> Vec<(&'static str, usize)> {
    let titles: Vec<&str> = records.iter().map(|r| r.raw.titulo.as_str()).collect();
    enrich::tag_counts(&titles, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::{enrich, DEFAULT_TAGS};
    use crate::records::RawRecord;

    fn sample() -> Vec<EnrichedRecord> {
        let raws = vec![
            raw("Analista de Dados Python", "ACME", "São Paulo - SP", Some("R$ 3.000,00")),
            raw("Analista de Dados Sênior", "ACME", "Home Office", Some("R$ 5.000,00")),
            raw("Engenheiro de Dados", "Globex", "Porto Alegre - RS", Some("R$ 7.000,00")),
            raw("Cientista de Dados", "Initech", "Recife - PE", None),
        ];
        enrich(&raws)
    }

    fn raw(titulo: &str, empresa: &str, loc: &str, salario: Option<&str>) -> RawRecord {
        RawRecord {
            titulo: s!(titulo),
            empresa: s!(empresa),
            localizacao: s!(loc),
            salario: salario.map(String::from),
            uf: None,
            fonte: Source::VagasCom,
        }
    }

    #[test]
    fn region_counts_sorted_desc() {
        let counts = counts_by_region(&sample());
        assert!(!counts.is_empty());
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 4);
        assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn top_companies_ranks_by_count() {
        let top = top_companies(&sample(), 2);
        assert_eq!(top[0], (s!("ACME"), 2));
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn salary_stats_over_parseable_only() {
        let st = salary_stats(&sample());
        assert_eq!(st.count, 3);
        assert_eq!(st.median, 5000.0);
        assert!((st.mean - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn empty_salary_set_is_zeroed() {
        assert_eq!(salary_stats(&[]), SalaryStats::default());
    }

    #[test]
    fn remote_share_fraction() {
        assert!((remote_share(&sample()) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn technology_counts_follow_table_order() {
        let counts = technology_counts(&sample(), &DEFAULT_TAGS);
        assert_eq!(counts[0].0, "Python");
        assert_eq!(counts[0].1, 1);
    }
}
