use std::collections::BTreeMap;
use std::fmt;

use super::model::PassengerRecord;

/// Shown instead of an undefined (NaN) metric.
pub const PLACEHOLDER: &str = "N/A";

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Scalar statistics over the filtered passengers.
///
/// `average_fare` and `survival_rate_pct` are `NaN` when undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetrics {
    pub total_count: usize,
    pub average_fare: f64,
    pub survival_rate_pct: f64,
}

impl SummaryMetrics {
    pub fn compute<'a>(rows: impl IntoIterator<Item = &'a PassengerRecord>) -> Self {
        let mut total_count = 0usize;
        let mut survivors = 0usize;
        let mut fare_sum = 0.0;
        let mut fare_count = 0usize;

        for record in rows {
            total_count += 1;
            if record.survived {
                survivors += 1;
            }
            if let Some(fare) = record.fare {
                fare_sum += fare;
                fare_count += 1;
            }
        }

        Self {
            total_count,
            average_fare: mean(fare_sum, fare_count),
            survival_rate_pct: mean(survivors as f64, total_count) * 100.0,
        }
    }

    /// `$12.34`, or [`PLACEHOLDER`].
    pub fn average_fare_text(&self) -> String {
        if self.average_fare.is_nan() {
            PLACEHOLDER.to_string()
        } else {
            format!("${:.2}", self.average_fare)
        }
    }

    /// `38.4%`, or [`PLACEHOLDER`].
    pub fn survival_rate_text(&self) -> String {
        if self.survival_rate_pct.is_nan() {
            PLACEHOLDER.to_string()
        } else {
            format!("{:.1}%", self.survival_rate_pct)
        }
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

// ---------------------------------------------------------------------------
// Aggregate views
// ---------------------------------------------------------------------------

/// Display label for the survival indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurvivalLabel {
    No,
    Yes,
}

impl SurvivalLabel {
    pub const ALL: [SurvivalLabel; 2] = [SurvivalLabel::No, SurvivalLabel::Yes];

    pub fn as_str(self) -> &'static str {
        match self {
            SurvivalLabel::No => "No",
            SurvivalLabel::Yes => "Yes",
        }
    }
}

impl From<bool> for SurvivalLabel {
    fn from(survived: bool) -> Self {
        if survived {
            SurvivalLabel::Yes
        } else {
            SurvivalLabel::No
        }
    }
}

impl fmt::Display for SurvivalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bar of the survival-by-class chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurvivalCount {
    pub class: u8,
    pub survived: SurvivalLabel,
    pub count: usize,
}

/// Chart inputs derived from the filtered passengers.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateViews {
    /// Ages of the filtered passengers, missing ages excluded. Bucketing is
    /// left to the chart.
    pub ages: Vec<f64>,
    /// One entry per observed `(class, survived)` pair, ordered by class then
    /// `No` before `Yes`.
    pub survival_by_class: Vec<SurvivalCount>,
}

impl AggregateViews {
    pub fn compute<'a>(rows: impl IntoIterator<Item = &'a PassengerRecord>) -> Self {
        let mut ages = Vec::new();
        let mut groups: BTreeMap<(u8, SurvivalLabel), usize> = BTreeMap::new();

        for record in rows {
            if let Some(age) = record.age {
                ages.push(age);
            }
            *groups
                .entry((record.class, record.survived.into()))
                .or_default() += 1;
        }

        let survival_by_class = groups
            .into_iter()
            .map(|((class, survived), count)| SurvivalCount {
                class,
                survived,
                count,
            })
            .collect();

        Self {
            ages,
            survival_by_class,
        }
    }
}
