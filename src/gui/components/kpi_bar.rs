// src/gui/components/kpi_bar.rs
//
// KPI strip over the FILTERED selection: totals, salary stats, remote share.

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::stats;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let visible = app.visible();

    let sal = stats::salary_stats(visible);
    let remote = stats::remote_share(visible);

    ui.horizontal(|ui| {
        kpi(ui, "Vagas", format!("{}", visible.len()));
        kpi(ui, "Com salário", format!("{}", sal.count));
        kpi(
            ui,
            "Mediana salarial",
            if sal.count > 0 { format!("R$ {:.0}", sal.median) } else { s!("—") },
        );
        kpi(ui, "Remoto", format!("{:.0}%", remote * 100.0));
    });
}

fn kpi(ui: &mut egui::Ui, label: &str, value: String) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small());
            ui.label(RichText::new(value).heading());
        });
    });
}
