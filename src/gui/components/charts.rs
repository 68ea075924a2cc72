// src/gui/components/charts.rs
//
// Overview tab: horizontal count bars over the filtered selection.
// Top companies, regions, seniority tiers, technology tags.

use eframe::egui::{self, ProgressBar};

use crate::enrich::DEFAULT_TAGS;
use crate::gui::app::App;
use crate::stats;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let visible = app.visible();
    if visible.is_empty() {
        ui.label("Nenhuma vaga na seleção atual.");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.columns(2, |cols| {
            section(&mut cols[0], "Top 10 empresas", &stats::top_companies(visible, 10));

            let regions: Vec<(String, usize)> = stats::counts_by_region(visible)
                .into_iter()
                .map(|(r, n)| (s!(r.label()), n))
                .collect();
            section(&mut cols[1], "Vagas por região", &regions);
        });

        ui.add_space(8.0);

        ui.columns(2, |cols| {
            let tiers: Vec<(String, usize)> = stats::counts_by_seniority(visible)
                .into_iter()
                .map(|(t, n)| (s!(t.label()), n))
                .collect();
            section(&mut cols[0], "Por senioridade", &tiers);

            let techs: Vec<(String, usize)> = stats::technology_counts(visible, &DEFAULT_TAGS)
                .into_iter()
                .filter(|(_, n)| *n > 0)
                .map(|(t, n)| (s!(t), n))
                .collect();
            section(&mut cols[1], "Tecnologias nos títulos", &techs);
        });
    });
}

fn section<S: AsRef<str>>(ui: &mut egui::Ui, title: &str, counts: &[(S, usize)]) {
    ui.heading(title);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    for (label, n) in counts {
        bar_row(ui, label.as_ref(), *n, max);
    }
    if counts.is_empty() {
        ui.label("—");
    }
}

fn bar_row(ui: &mut egui::Ui, label: &str, count: usize, max: usize) {
    ui.horizontal(|ui| {
        ui.add_sized([170.0, 16.0], egui::Label::new(label).truncate());
        let frac = count as f32 / max as f32;
        ui.add(ProgressBar::new(frac).desired_width(180.0).text(format!("{count}")));
    });
}
