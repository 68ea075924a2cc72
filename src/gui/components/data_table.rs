// src/gui/components/data_table.rs
//
// Draws the enriched postings table for the current filter selection.
// Purely a view; row virtualization comes from TableBuilder.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 8] = [
    "Título", "Empresa", "Localização", "Região", "Cidade", "Senioridade", "Salário", "Fonte",
];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let visible = app.visible();

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .column(Column::initial(280.0).resizable(true).clip(true)) // Título
                .column(Column::initial(160.0).resizable(true).clip(true)) // Empresa
                .column(Column::initial(180.0).resizable(true).clip(true)) // Localização
                .column(Column::initial(110.0).resizable(true)) // Região
                .column(Column::initial(130.0).resizable(true).clip(true)) // Cidade
                .column(Column::initial(140.0).resizable(true)) // Senioridade
                .column(Column::initial(90.0).resizable(true)) // Salário
                .column(Column::remainder()); // Fonte

            table
                .header(20.0, |mut header| {
                    for h in HEADERS {
                        header.col(|ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, visible.len(), |mut row| {
                        let r = &visible[row.index()];
                        let salario = r
                            .salario_valor
                            .map(|v| format!("R$ {v:.0}"))
                            .unwrap_or_else(|| s!("—"));
                        let cells = [
                            r.raw.titulo.as_str(),
                            r.raw.empresa.as_str(),
                            r.raw.localizacao.as_str(),
                            r.regiao.label(),
                            r.cidade.as_str(),
                            r.senioridade.label(),
                            salario.as_str(),
                            r.raw.fonte.label(),
                        ];
                        for cell in cells {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
