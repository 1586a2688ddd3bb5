use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::SurvivalColors;
use crate::data::filter::GenderFilter;
use crate::data::summary::SummaryMetrics;
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the "Filter Options" sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the domains so state can be mutated inside the widgets.
    let classes = dataset.classes.clone();
    let genders = dataset.genders.clone();

    // ---- Class multi-select ----
    let header_text = format!(
        "Select Passenger Class:  ({}/{})",
        state.spec.classes.len(),
        classes.len()
    );
    ui.strong(header_text);
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_classes();
        }
        if ui.small_button("None").clicked() {
            state.select_no_classes();
        }
    });
    for class in classes {
        let mut checked = state.spec.classes.contains(&class);
        if ui.checkbox(&mut checked, format!("Class {class}")).changed() {
            state.toggle_class(class);
        }
    }
    ui.separator();

    // ---- Gender select ----
    ui.strong("Select Gender:");
    let mut choice = state.spec.gender.clone();
    egui::ComboBox::from_id_salt("gender_filter")
        .selected_text(choice.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut choice, GenderFilter::Any, "All");
            for gender in &genders {
                ui.selectable_value(&mut choice, GenderFilter::Only(gender.clone()), gender.as_str());
            }
        });
    state.set_gender(choice);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Data", |ui: &mut Ui| {
            if ui.button("Reload data").clicked() {
                state.reload_dataset();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let shown = state.output.as_ref().map_or(0, |o| o.filtered.len());
            ui.label(format!("{} passengers loaded, {} shown", ds.len(), shown));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central dashboard
// ---------------------------------------------------------------------------

fn metric_card(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(label);
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

/// Three labeled values; undefined metrics show as "N/A".
pub fn metrics_row(ui: &mut Ui, metrics: &SummaryMetrics) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric_card(&mut cols[0], "Total Passengers", metrics.total_count.to_string());
        metric_card(&mut cols[1], "Average Fare", metrics.average_fare_text());
        metric_card(&mut cols[2], "Survival Rate", metrics.survival_rate_text());
    });
}

/// Render the central panel: metrics, both charts and the optional table.
pub fn dashboard(ui: &mut Ui, state: &mut AppState, colors: &SurvivalColors) {
    ui.heading("🚢 Titanic Survival Analysis Dashboard");
    ui.label("Analyze the survival rates and demographics of passengers.");
    ui.add_space(8.0);

    let (Some(dataset), Some(output)) = (&state.dataset, &state.output) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Dataset unavailable  (Data → Reload data)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Key Metrics");
            metrics_row(ui, &output.metrics);
            ui.separator();

            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].strong("Age Distribution");
                cols[0].label("Passenger Age Distribution");
                plot::age_histogram(&mut cols[0], &output.views.ages);

                cols[1].strong("Survival by Class");
                cols[1].label("Survivors vs Non-Survivors by Class");
                plot::survival_by_class_chart(
                    &mut cols[1],
                    &output.views.survival_by_class,
                    colors,
                );
            });
            ui.separator();

            ui.checkbox(&mut state.show_raw_data, "Show Raw Data");
            if state.show_raw_data {
                table::raw_data_table(ui, dataset, &output.filtered);
            }
        });
}
