// src/gui/components/filter_panel.rs
//
// Left panel: title search plus region/seniority/source membership filters.
// Purely a view over GuiState; marks the app filter-dirty on any change.

use eframe::egui;

use crate::enrich::{Region, Seniority};
use crate::gui::app::App;
use crate::records::Source;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filtros");

    if ui.button("Recarregar dados").clicked() {
        app.reload();
    }

    ui.separator();

    ui.label("Busca no título:");
    let resp = ui.text_edit_singleline(&mut app.state.gui.search);
    if resp.changed() {
        app.mark_filter_dirty();
    }

    ui.separator();

    let mut dirty = false;

    ui.label("Região:");
    let mut regions = app.state.gui.regions.clone();
    for region in Region::ALL {
        let mut on = regions.contains(&region);
        if ui.checkbox(&mut on, region.label()).changed() {
            toggle(&mut regions, region, on);
            dirty = true;
        }
    }
    app.state.gui.regions = regions;

    ui.separator();

    ui.label("Senioridade:");
    let mut seniorities = app.state.gui.seniorities.clone();
    for tier in Seniority::ALL {
        let mut on = seniorities.contains(&tier);
        if ui.checkbox(&mut on, tier.label()).changed() {
            toggle(&mut seniorities, tier, on);
            dirty = true;
        }
    }
    app.state.gui.seniorities = seniorities;

    ui.separator();

    ui.label("Fonte:");
    let mut sources = app.state.gui.sources.clone();
    for source in Source::ALL {
        let mut on = sources.contains(&source);
        if ui.checkbox(&mut on, source.label()).changed() {
            toggle(&mut sources, source, on);
            dirty = true;
        }
    }
    app.state.gui.sources = sources;

    if dirty {
        app.mark_filter_dirty();
    }

    ui.separator();

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T, on: bool) {
    if on {
        if !list.contains(&value) {
            list.push(value);
        }
    } else {
        list.retain(|v| v != &value);
    }
}
