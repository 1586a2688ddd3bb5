use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::summary::SurvivalLabel;

/// Fill colour of the age histogram bars.
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours for the survival chart
// ---------------------------------------------------------------------------

/// Maps each survival label to a distinct bar colour.
#[derive(Debug, Clone)]
pub struct SurvivalColors {
    mapping: BTreeMap<SurvivalLabel, Color32>,
}

impl Default for SurvivalColors {
    fn default() -> Self {
        let mapping = SurvivalLabel::ALL
            .into_iter()
            .zip(generate_palette(SurvivalLabel::ALL.len()))
            .collect();
        Self { mapping }
    }
}

impl SurvivalColors {
    pub fn color_for(&self, label: SurvivalLabel) -> Color32 {
        self.mapping.get(&label).copied().unwrap_or(Color32::GRAY)
    }
}
