// src/config/consts.rs

// Input data (produced by the external scrapers)
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CONSOLIDATED_FILE: &str = "vagas_consolidadas.csv";
pub const VAGAS_FILE: &str = "vagas_brasil.csv";
pub const LINKEDIN_FILE: &str = "vagas_linkedin.csv";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const ENRICHED_CACHE_FILE: &str = "vagas_enriquecidas.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "vagas_enriquecidas";

// Concurrency
pub const WORKERS: usize = 4;
/// Below this row count a parallel enrich is not worth the thread setup.
pub const PARALLEL_MIN_ROWS: usize = 2_000;
