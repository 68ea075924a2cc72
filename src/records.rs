// src/records.rs
//
// Record types for the posting pipeline.
//
// RawRecord mirrors what the external scrapers emit (free text everywhere);
// EnrichedRecord adds the derived columns the dashboard aggregates on.
// Column lookup is by header name, not position: the two source files do
// not share a column order, and one of them has no `uf`/`salario` at all.

use crate::enrich::{Region, Seniority};

/// Provenance of one scraped posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    VagasCom,
    LinkedIn,
    Unknown,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::VagasCom, Source::LinkedIn, Source::Unknown];

    pub fn label(&self) -> &'static str {
        match self {
            Source::VagasCom => "Vagas.com",
            Source::LinkedIn => "LinkedIn",
            Source::Unknown  => "Desconhecida",
        }
    }

    pub fn from_label(s: &str) -> Source {
        match s.trim() {
            "Vagas.com" => Source::VagasCom,
            "LinkedIn"  => Source::LinkedIn,
            _           => Source::Unknown,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One posting as collected; immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub titulo: String,
    pub empresa: String,
    pub localizacao: String,
    /// Free text, may be a placeholder like "A combinar"; None when the
    /// source file has no salary column.
    pub salario: Option<String>,
    /// Pre-resolved UF code; only one scraper variant provides it.
    pub uf: Option<String>,
    pub fonte: Source,
}

impl RawRecord {
    /// Consolidation/dedup key.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.titulo.clone(),
            self.empresa.clone(),
            self.localizacao.clone(),
        )
    }
}

/// RawRecord plus the derived columns.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedRecord {
    pub raw: RawRecord,
    pub regiao: Region,
    pub cidade: String,
    pub senioridade: Seniority,
    pub salario_valor: Option<f64>,
    /// UF behind `regiao` when one was found (kept for the output schema).
    pub uf: Option<String>,
}

/* ---------------- CSV row mapping ---------------- */

/// Input column names as the scrapers write them.
pub const COL_TITULO: &str = "titulo";
pub const COL_EMPRESA: &str = "empresa";
pub const COL_LOCALIZACAO: &str = "localizacao";
pub const COL_SALARIO: &str = "salario";
pub const COL_UF: &str = "uf";
pub const COL_FONTE: &str = "fonte";

/// Header layout of one parsed CSV: positions of the columns we read.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnMap {
    pub titulo: Option<usize>,
    pub empresa: Option<usize>,
    pub localizacao: Option<usize>,
    pub salario: Option<usize>,
    pub uf: Option<usize>,
    pub fonte: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from a header row (case-insensitive names).
    pub fn from_headers(headers: &[String]) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Self {
            titulo: find(COL_TITULO),
            empresa: find(COL_EMPRESA),
            localizacao: find(COL_LOCALIZACAO),
            salario: find(COL_SALARIO),
            uf: find(COL_UF),
            fonte: find(COL_FONTE),
        }
    }

    /// A file without the three identity columns is not a postings file.
    pub fn is_usable(&self) -> bool {
        self.titulo.is_some() && self.empresa.is_some() && self.localizacao.is_some()
    }
}

/// Build a RawRecord from one CSV row.
/// `fallback_source` tags rows when the file carries no `fonte` column.
pub fn row_to_raw(row: &[String], map: &ColumnMap, fallback_source: Source) -> Option<RawRecord> {
    let cell = |ix: Option<usize>| ix.and_then(|i| row.get(i)).map(|s| s.trim().to_string());

    let titulo = cell(map.titulo)?;
    if titulo.is_empty() {
        return None;
    }
    let empresa = cell(map.empresa).unwrap_or_default();
    let localizacao = cell(map.localizacao).unwrap_or_default();
    let salario = cell(map.salario).filter(|s| !s.is_empty());
    let uf = cell(map.uf).filter(|s| !s.is_empty());
    let fonte = cell(map.fonte)
        .map(|s| Source::from_label(&s))
        .unwrap_or(fallback_source);

    Some(RawRecord { titulo, empresa, localizacao, salario, uf, fonte })
}

/// Output header row for the enriched table (input columns + derived).
pub fn enriched_headers() -> Vec<String> {
    vec![
        s!(COL_TITULO),
        s!(COL_EMPRESA),
        s!(COL_LOCALIZACAO),
        s!(COL_SALARIO),
        s!(COL_UF),
        s!(COL_FONTE),
        s!("regiao"),
        s!("cidade"),
        s!("senioridade"),
        s!("salario_valor"),
    ]
}

impl EnrichedRecord {
    /// Flatten to the output schema (same order as `enriched_headers`).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.raw.titulo.clone(),
            self.raw.empresa.clone(),
            self.raw.localizacao.clone(),
            self.raw.salario.clone().unwrap_or_default(),
            self.uf.clone().unwrap_or_default(),
            s!(self.raw.fonte.label()),
            s!(self.regiao.label()),
            self.cidade.clone(),
            s!(self.senioridade.label()),
            self.salario_valor
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
        ]
    }
}

/// Rebuild enriched records from a previously exported/cached table.
/// Rows that don't carry the enriched schema are skipped.
pub fn records_from_enriched(ds: &crate::store::DataSet) -> Vec<EnrichedRecord> {
    let headers = match &ds.headers {
        Some(h) => h,
        None => return Vec::new(),
    };
    let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
    let map = ColumnMap::from_headers(headers);
    let (regiao_ix, cidade_ix, senior_ix, valor_ix) = match (
        find("regiao"), find("cidade"), find("senioridade"), find("salario_valor"),
    ) {
        (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
        _ => return Vec::new(),
    };

    ds.rows
        .iter()
        .filter_map(|row| {
            let raw = row_to_raw(row, &map, Source::Unknown)?;
            Some(EnrichedRecord {
                uf: raw.uf.clone(),
                regiao: row.get(regiao_ix).map(|s| Region::from_label(s)).unwrap_or(Region::Unspecified),
                cidade: row.get(cidade_ix).cloned().unwrap_or_else(|| s!(crate::enrich::UNSPECIFIED)),
                senioridade: row.get(senior_ix).map(|s| Seniority::from_label(s)).unwrap_or(Seniority::Unspecified),
                salario_valor: row.get(valor_ix).and_then(|s| s.trim().parse::<f64>().ok()),
                raw,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enriched_round_trips_through_rows() {
        let raw = RawRecord {
            titulo: s!("Analista de Dados Sênior"),
            empresa: s!("ACME"),
            localizacao: s!("São Paulo - SP"),
            salario: Some(s!("R$ 3.000,00")),
            uf: Some(s!("SP")),
            fonte: Source::VagasCom,
        };
        let e = crate::enrich::enrich_one(&raw);
        let ds = crate::store::DataSet {
            headers: Some(enriched_headers()),
            rows: vec![e.to_row()],
        };
        let back = records_from_enriched(&ds);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].regiao, e.regiao);
        assert_eq!(back[0].senioridade, e.senioridade);
        assert_eq!(back[0].cidade, e.cidade);
        assert_eq!(back[0].salario_valor, e.salario_valor);
        assert_eq!(back[0].raw.fonte, Source::VagasCom);
    }

    #[test]
    fn column_map_is_order_independent() {
        let headers: Vec<String> =
            ["fonte", "titulo", "salario", "empresa", "localizacao"]
                .iter().map(|s| s!(*s)).collect();
        let map = ColumnMap::from_headers(&headers);
        assert!(map.is_usable());
        assert_eq!(map.titulo, Some(1));
        assert_eq!(map.fonte, Some(0));
        assert_eq!(map.uf, None);
    }

    #[test]
    fn row_without_title_is_dropped() {
        let headers: Vec<String> =
            ["titulo", "empresa", "localizacao"].iter().map(|s| s!(*s)).collect();
        let map = ColumnMap::from_headers(&headers);
        let row = vec![s!(""), s!("ACME"), s!("São Paulo - SP")];
        assert!(row_to_raw(&row, &map, Source::Unknown).is_none());
    }

    #[test]
    fn fallback_source_applies_only_without_fonte() {
        let headers: Vec<String> =
            ["titulo", "empresa", "localizacao", "fonte"].iter().map(|s| s!(*s)).collect();
        let map = ColumnMap::from_headers(&headers);
        let row = vec![s!("Analista"), s!("ACME"), s!("SP"), s!("LinkedIn")];
        let rec = row_to_raw(&row, &map, Source::VagasCom).unwrap();
        assert_eq!(rec.fonte, Source::LinkedIn);

        let headers2: Vec<String> =
            ["titulo", "empresa", "localizacao"].iter().map(|s| s!(*s)).collect();
        let map2 = ColumnMap::from_headers(&headers2);
        let row2 = vec![s!("Analista"), s!("ACME"), s!("SP")];
        let rec2 = row_to_raw(&row2, &map2, Source::VagasCom).unwrap();
        assert_eq!(rec2.fonte, Source::VagasCom);
    }
}
