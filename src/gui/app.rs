// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::{AppState, Tab},
    records::EnrichedRecord,
    runner, store,
};

pub fn run() -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };
    eframe::run_native(
        "Vagas de Dados — Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Enriched collection for this session; recomputed on Reload.
    pub records: Vec<EnrichedRecord>,

    /// Filtered copy for display/aggregation; rebuilt when filters change,
    /// not per frame.
    visible: Vec<EnrichedRecord>,
    filter_dirty: bool,

    // output text field UX (maps <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        // Inputs first; the cached snapshot only covers for missing inputs.
        let records = match runner::load_and_enrich(&state.options.load, None) {
            Ok((recs, files)) if files > 0 => {
                status = format!("{} vaga(s) carregadas", recs.len());
                recs
            }
            _ => match store::load_cache() {
                Ok(ds) if !ds.is_empty() => {
                    let recs = crate::records::records_from_enriched(&ds);
                    logf!("Cache: loaded snapshot ({} rows)", recs.len());
                    status = format!("{} vaga(s) do cache local", recs.len());
                    recs
                }
                _ => {
                    logd!("Init: no inputs, no cache");
                    status = s!("Nenhum dado. Rode os scrapers e recarregue.");
                    Vec::new()
                }
            },
        };

        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: records={}", records.len());

        let mut app = Self {
            state,
            records,
            visible: Vec::new(),
            filter_dirty: true,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        };
        app.recompute_filter();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn mark_filter_dirty(&mut self) {
        self.filter_dirty = true;
    }

    /// Re-read the inputs and re-derive everything.
    pub fn reload(&mut self) {
        match runner::load_and_enrich(&self.state.options.load, None) {
            Ok((recs, files)) => {
                self.status(format!("{} vaga(s) de {} arquivo(s)", recs.len(), files));
                self.records = recs;
                // refresh the snapshot for the next start (best-effort)
                let ds = runner::to_dataset(&self.records);
                if let Err(e) = store::save_cache(&ds) {
                    logd!("Cache: save failed ({})", e);
                }
            }
            Err(e) => {
                loge!("Reload: {}", e);
                self.status(format!("Falha ao recarregar: {e}"));
            }
        }
        self.filter_dirty = true;
    }

    /// Apply panel filters, keeping the canonical order.
    pub fn recompute_filter(&mut self) {
        let gui = &self.state.gui;
        let needle = gui.search.to_lowercase();
        self.visible = self
            .records
            .iter()
            .filter(|r| {
                gui.regions.contains(&r.regiao)
                    && gui.seniorities.contains(&r.senioridade)
                    && gui.sources.contains(&r.raw.fonte)
                    && (needle.is_empty() || r.raw.titulo.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        self.filter_dirty = false;
    }

    /// Filtered records in display order.
    pub fn visible(&self) -> &[EnrichedRecord] {
        &self.visible
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.filter_dirty {
            self.recompute_filter();
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::kpi_bar::draw(ui, self);

            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.state.gui.tab, Tab::Overview, "Visão geral");
                ui.selectable_value(&mut self.state.gui.tab, Tab::Table, "Tabela");
            });

            ui.separator();

            match self.state.gui.tab {
                Tab::Overview => crate::gui::components::charts::draw(ui, self),
                Tab::Table => {
                    crate::gui::components::export_bar::draw(ui, self);
                    ui.separator();
                    crate::gui::components::data_table::draw(ui, self);
                }
            }
        });
    }
}
