// src/enrich/region.rs
//
// UF extraction and macro-region classification for free-text locations.
//
// Location strings arrive in whatever shape the source page used:
// "São Paulo - SP", "Rio de Janeiro/RJ", "Home Office", "Remoto",
// "Belo Horizonte, MG (Híbrido)". The "remoto"/"home office" check runs
// before any UF lookup so "São Paulo - Remoto" classifies as Remote.

use crate::core::sanitize::is_blank;

/// Brazilian macro-region, plus the synthetic Remote/Unspecified tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Southeast,
    South,
    CentralWest,
    Northeast,
    North,
    Remote,
    Unspecified,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Southeast,
        Region::South,
        Region::CentralWest,
        Region::Northeast,
        Region::North,
        Region::Remote,
        Region::Unspecified,
    ];

    /// Output label, matching the dashboard's column values.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Southeast   => "Sudeste",
            Region::South       => "Sul",
            Region::CentralWest => "Centro-Oeste",
            Region::Northeast   => "Nordeste",
            Region::North       => "Norte",
            Region::Remote      => "Remoto",
            Region::Unspecified => "Não especificada",
        }
    }

    /// Inverse of `label` (used when re-reading an enriched CSV).
    pub fn from_label(s: &str) -> Region {
        match s {
            "Sudeste"      => Region::Southeast,
            "Sul"          => Region::South,
            "Centro-Oeste" => Region::CentralWest,
            "Nordeste"     => Region::Northeast,
            "Norte"        => Region::North,
            "Remoto"       => Region::Remote,
            _              => Region::Unspecified,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The 27 federal units, each paired with its macro-region.
/// Exhaustive and mutually exclusive; tests assert both.
pub const UF_REGIONS: [(&str, Region); 27] = [
    // Sudeste
    ("ES", Region::Southeast),
    ("MG", Region::Southeast),
    ("RJ", Region::Southeast),
    ("SP", Region::Southeast),
    // Sul
    ("PR", Region::South),
    ("RS", Region::South),
    ("SC", Region::South),
    // Centro-Oeste
    ("DF", Region::CentralWest),
    ("GO", Region::CentralWest),
    ("MS", Region::CentralWest),
    ("MT", Region::CentralWest),
    // Nordeste
    ("AL", Region::Northeast),
    ("BA", Region::Northeast),
    ("CE", Region::Northeast),
    ("MA", Region::Northeast),
    ("PB", Region::Northeast),
    ("PE", Region::Northeast),
    ("PI", Region::Northeast),
    ("RN", Region::Northeast),
    ("SE", Region::Northeast),
    // Norte
    ("AC", Region::North),
    ("AM", Region::North),
    ("AP", Region::North),
    ("PA", Region::North),
    ("RO", Region::North),
    ("RR", Region::North),
    ("TO", Region::North),
];

fn lookup_uf(code: &str) -> Option<(&'static str, Region)> {
    UF_REGIONS
        .iter()
        .find(|(uf, _)| code.eq_ignore_ascii_case(uf))
        .copied()
}

/// Map an already-resolved UF code (or the literal "Remoto"/"Remote") to a region.
/// Unknown codes resolve to Unspecified rather than faulting.
pub fn region_of_uf(code: &str) -> Region {
    let code = code.trim();
    if code.eq_ignore_ascii_case("remoto") || code.eq_ignore_ascii_case("remote") {
        return Region::Remote;
    }
    lookup_uf(code).map(|(_, r)| r).unwrap_or(Region::Unspecified)
}

/// Scan a free-text location for the first valid UF code, left to right.
/// Separators and parentheses count as delimiters alongside whitespace.
pub fn extract_uf(location: &str) -> Option<&'static str> {
    let normalized: String = location
        .chars()
        .map(|c| if c == '/' || c == '-' || c == ',' || c == '(' || c == ')' { ' ' } else { c })
        .collect();
    for part in normalized.split_whitespace() {
        if part.chars().count() != 2 { continue; }
        if let Some((uf, _)) = lookup_uf(part) {
            return Some(uf);
        }
    }
    None
}

/// Classify a free-text location into a region.
/// Remote markers win over any UF present in the string.
pub fn classify_region(location: &str) -> Region {
    if is_blank(location) {
        return Region::Unspecified;
    }
    let lower = location.to_lowercase();
    if lower.contains("remoto") || lower.contains("home office") {
        return Region::Remote;
    }
    match extract_uf(location) {
        Some(uf) => region_of_uf(uf),
        None => Region::Unspecified,
    }
}
