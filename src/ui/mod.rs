//! egui rendering: sidebar and top bar, charts, raw data table.

pub mod panels;
pub mod plot;
pub mod table;
