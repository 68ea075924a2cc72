// src/config/state.rs
use super::options::AppOptions;
use crate::enrich::{Region, Seniority};
use crate::records::Source;

/// Which dashboard tab is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Filters applied to the enriched table before display/aggregation.
    /// A value present in the list is shown; default = everything.
    pub regions: Vec<Region>,
    pub seniorities: Vec<Seniority>,
    pub sources: Vec<Source>,

    /// Case-insensitive substring filter on the title column.
    pub search: String,

    pub tab: Tab,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            regions: Region::ALL.to_vec(),
            seniorities: Seniority::ALL.to_vec(),
            sources: Source::ALL.to_vec(),
            search: s!(),
            tab: Tab::Overview,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
