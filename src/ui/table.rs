use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{PassengerTable, COLUMN_NAMES};
use crate::data::pipeline::FilteredResult;

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 400.0;

// ---------------------------------------------------------------------------
// Raw data view
// ---------------------------------------------------------------------------

/// Render the filtered rows verbatim, every source column included.
pub fn raw_data_table(ui: &mut Ui, table: &PassengerTable, filtered: &FilteredResult) {
    ui.label(format!("{} rows", filtered.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(40.0).clip(true), COLUMN_NAMES.len())
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in COLUMN_NAMES {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, filtered.len(), |mut row| {
                let record = &table.records[filtered.indices[row.index()]];
                for cell in record.cells() {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
