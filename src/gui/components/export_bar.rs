// src/gui/components/export_bar.rs
//
// Export controls for the current filter selection: output path text box,
// format selector, headers toggle, export button.

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::app::App;
use crate::runner;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Exportar para:");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.out_path_text).desired_width(280.0),
        );
        if resp.changed() {
            app.out_path_dirty = true;
        }

        let prev_format = app.state.options.export.format.clone();
        egui::ComboBox::from_id_salt("export_format")
            .selected_text(app.state.options.export.format.ext().to_uppercase())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.state.options.export.format, ExportFormat::Csv, "CSV");
                ui.selectable_value(&mut app.state.options.export.format, ExportFormat::Tsv, "TSV");
            });
        // Untouched text box follows the format's extension.
        if app.state.options.export.format != prev_format && !app.out_path_dirty {
            app.out_path_text = app.state.options.export.out_path().to_string_lossy().into();
        }

        ui.checkbox(&mut app.state.options.export.include_headers, "Cabeçalho");

        if ui.button("Exportar").clicked() {
            if app.out_path_dirty {
                app.state.options.export.set_path(&app.out_path_text);
                app.out_path_dirty = false;
            }
            let ds = runner::to_dataset(app.visible());
            match crate::file::write_export(&app.state.options.export, &ds) {
                Ok(path) => {
                    logf!("Export: {} row(s) → {}", ds.row_count(), path.display());
                    app.status(format!("Exportado: {}", path.display()));
                    app.out_path_text = path.to_string_lossy().into();
                }
                Err(e) => {
                    loge!("Export: {}", e);
                    app.status(format!("Falha ao exportar: {e}"));
                }
            }
        }
    });
}
