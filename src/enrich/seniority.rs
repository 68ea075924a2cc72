// src/enrich/seniority.rs
//
// Seniority tier inference from job titles.
//
// Matching is lowercase substring over ordered keyword sets; the first set
// with a hit wins even when a later set would also match. Substring (not
// whole-word) matching is a deliberate simplification inherited from the
// source data: short markers like "sr"/"pl"/"jr" appear glued to roman
// numerals and punctuation ("Analista de Dados Jr."). The false-positive
// risk is covered by tests.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seniority {
    SeniorSpecialist,
    Mid,
    Junior,
    Intern,
    Leadership,
    Unspecified,
}

impl Seniority {
    pub const ALL: [Seniority; 6] = [
        Seniority::SeniorSpecialist,
        Seniority::Mid,
        Seniority::Junior,
        Seniority::Intern,
        Seniority::Leadership,
        Seniority::Unspecified,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Seniority::SeniorSpecialist => "Sênior/Especialista",
            Seniority::Mid              => "Pleno",
            Seniority::Junior           => "Júnior",
            Seniority::Intern           => "Estágio",
            Seniority::Leadership       => "Liderança",
            Seniority::Unspecified      => "Não especificada",
        }
    }

    /// Inverse of `label` (used when re-reading an enriched CSV).
    pub fn from_label(s: &str) -> Seniority {
        match s {
            "Sênior/Especialista" => Seniority::SeniorSpecialist,
            "Pleno"               => Seniority::Mid,
            "Júnior"              => Seniority::Junior,
            "Estágio"             => Seniority::Intern,
            "Liderança"           => Seniority::Leadership,
            _                     => Seniority::Unspecified,
        }
    }
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword sets in evaluation order. First match wins.
const TIERS: [(Seniority, &[&str]); 5] = [
    (Seniority::SeniorSpecialist, &["sênior", "senior", "sr", "especialista", "specialist"]),
    (Seniority::Mid,              &["pleno", "pl"]),
    (Seniority::Junior,           &["júnior", "junior", "jr"]),
    (Seniority::Intern,           &["estágio", "estagio", "estagiário", "estagiario", "trainee"]),
    (Seniority::Leadership,       &["líder", "lider", "lead", "coordenador", "gerente", "head", "gestor", "supervisor"]),
];

/// Infer the seniority tier from a job title.
pub fn classify_seniority(title: &str) -> Seniority {
    let lower = title.to_lowercase();
    for (tier, keywords) in TIERS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return tier;
        }
    }
    Seniority::Unspecified
}
