use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{SurvivalColors, HISTOGRAM_COLOR};
use crate::data::summary::{SurvivalCount, SurvivalLabel};

/// Number of equal-width buckets in the age histogram.
pub const AGE_BINS: usize = 20;

const PLOT_HEIGHT: f32 = 320.0;
const GROUP_BAR_WIDTH: f64 = 0.4;

// ---------------------------------------------------------------------------
// Histogram bucketing
// ---------------------------------------------------------------------------

/// One bucket `[start, end)` of a histogram; the last bucket also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Split the finite `values` into `bins` equal-width buckets spanning
/// their min..max range. Returns no buckets when there is nothing to count.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + i as f64 * width;
            HistogramBin {
                start,
                end: start + width,
                count,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Age histogram
// ---------------------------------------------------------------------------

/// Render the filtered ages as a [`AGE_BINS`]-bucket histogram.
pub fn age_histogram(ui: &mut Ui, ages: &[f64]) {
    let bars: Vec<Bar> = histogram_bins(ages, AGE_BINS)
        .into_iter()
        .map(|bin| {
            Bar::new((bin.start + bin.end) / 2.0, bin.count as f64)
                .width(bin.end - bin.start)
                .name(format!("{:.1} – {:.1}", bin.start, bin.end))
        })
        .collect();

    let chart = BarChart::new(bars).color(HISTOGRAM_COLOR).name("Passengers");

    Plot::new("age_histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label("Age")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Survival by class
// ---------------------------------------------------------------------------

/// Offset of a label's bar from the class tick so the two labels sit side
/// by side.
fn group_offset(label: SurvivalLabel) -> f64 {
    match label {
        SurvivalLabel::No => -GROUP_BAR_WIDTH / 2.0,
        SurvivalLabel::Yes => GROUP_BAR_WIDTH / 2.0,
    }
}

/// Bars for one survival label, positioned by class.
fn survival_bars(groups: &[SurvivalCount], label: SurvivalLabel) -> Vec<Bar> {
    groups
        .iter()
        .filter(|g| g.survived == label)
        .map(|g| {
            Bar::new(g.class as f64 + group_offset(label), g.count as f64)
                .width(GROUP_BAR_WIDTH)
                .name(format!("Class {} – {}", g.class, label))
        })
        .collect()
}

/// Grouped bar chart: one group per class, one colour per survival label.
pub fn survival_by_class_chart(ui: &mut Ui, groups: &[SurvivalCount], colors: &SurvivalColors) {
    Plot::new("survival_by_class")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Pclass")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for label in SurvivalLabel::ALL {
                let bars = survival_bars(groups, label);
                if bars.is_empty() {
                    continue;
                }
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(colors.color_for(label))
                        .name(label.as_str()),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_range_with_equal_width() {
        let ages: Vec<f64> = (0..=80).map(|a| a as f64).collect();
        let bins = histogram_bins(&ages, AGE_BINS);
        assert_eq!(bins.len(), AGE_BINS);
        assert_eq!(bins[0].start, 0.0);
        assert!((bins[AGE_BINS - 1].end - 80.0).abs() < 1e-9);
        for bin in &bins {
            assert!((bin.end - bin.start - 4.0).abs() < 1e-9);
        }
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, ages.len());
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram_bins(&[0.0, 10.0], 5);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[4].count, 1);
    }

    #[test]
    fn no_values_no_bins() {
        assert!(histogram_bins(&[], AGE_BINS).is_empty());
        assert!(histogram_bins(&[f64::NAN], AGE_BINS).is_empty());
        assert!(histogram_bins(&[1.0], 0).is_empty());
    }

    #[test]
    fn identical_values_share_first_bin() {
        let bins = histogram_bins(&[30.0, 30.0, 30.0], AGE_BINS);
        assert_eq!(bins.len(), AGE_BINS);
        assert_eq!(bins[0].count, 3);
        assert!(bins[1..].iter().all(|b| b.count == 0));
    }

    #[test]
    fn survival_bars_split_by_label() {
        let groups = [
            SurvivalCount {
                class: 1,
                survived: SurvivalLabel::No,
                count: 80,
            },
            SurvivalCount {
                class: 1,
                survived: SurvivalLabel::Yes,
                count: 136,
            },
            SurvivalCount {
                class: 3,
                survived: SurvivalLabel::No,
                count: 372,
            },
        ];
        let yes = survival_bars(&groups, SurvivalLabel::Yes);
        assert_eq!(yes.len(), 1);
        assert_eq!(yes[0].value, 136.0);
        assert!((yes[0].argument - 1.2).abs() < 1e-9);

        let no = survival_bars(&groups, SurvivalLabel::No);
        assert_eq!(no.len(), 2);
        assert!((no[1].argument - 2.8).abs() < 1e-9);
    }
}
