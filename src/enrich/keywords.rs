// src/enrich/keywords.rs
//
// Technology tagging over job titles.
//
// A tag names a technology theme and carries the alternation of lowercase
// patterns that count as a hit. Tags are independent: one title may count
// toward several. The table is injected configuration, never mutated.

/// One named tag with its alternation patterns (all lowercase).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

pub type KeywordTable = [TagSpec];

/// Default technology table for data-job titles.
pub const DEFAULT_TAGS: [TagSpec; 7] = [
    TagSpec { name: "Python",   patterns: &["python"] },
    TagSpec { name: "SQL",      patterns: &["sql"] },
    TagSpec { name: "Power BI", patterns: &["power bi", "powerbi", "pbi"] },
    TagSpec { name: "Excel",    patterns: &["excel"] },
    TagSpec { name: "Cloud",    patterns: &["aws", "azure", "gcp", "cloud", "databricks", "snowflake"] },
    TagSpec { name: "BI",       patterns: &["business intelligence", " bi", "bi ", "tableau", "looker"] },
    TagSpec { name: "Big Data", patterns: &["spark", "hadoop", "big data"] },
];

/// Does this title hit the tag? Case-insensitive substring over the alternation.
pub fn title_matches(title: &str, tag: &TagSpec) -> bool {
    let lower = title.to_lowercase();
    tag.patterns.iter().any(|p| lower.contains(p))
}

/// Per tag, the number of titles with at least one pattern match.
/// Order of the output follows the table, not the counts.
pub fn tag_counts<S: AsRef<str>>(titles: &[S], table: &KeywordTable) -> Vec<(&'static str, usize)> {
    table
        .iter()
        .map(|tag| {
            let n = titles.iter().filter(|t| title_matches(t.as_ref(), tag)).count();
            (tag.name, n)
        })
        .collect()
}
