use eframe::egui;

use crate::color::SurvivalColors;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TitanicDashboardApp {
    pub state: AppState,
    colors: SurvivalColors,
}

impl TitanicDashboardApp {
    /// Create the app and load the dataset before the first frame.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_dataset();
        Self {
            state,
            colors: SurvivalColors::default(),
        }
    }
}

impl eframe::App for TitanicDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, raw data ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::dashboard(ui, &mut self.state, &self.colors);
        });
    }
}
