use super::error::InvalidSpecification;
use super::filter::{filtered_indices, FilterSpec};
use super::model::{PassengerRecord, PassengerTable};
use super::summary::{AggregateViews, SummaryMetrics};

/// The passengers selected by a [`FilterSpec`], as row indices into the
/// table they were drawn from. Source order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredResult {
    pub indices: Vec<usize>,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the indices against the table they were computed from.
    pub fn rows<'a>(
        &'a self,
        table: &'a PassengerTable,
    ) -> impl Iterator<Item = &'a PassengerRecord> + 'a {
        self.indices.iter().map(move |&i| &table.records[i])
    }
}

/// Everything the dashboard draws for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub filtered: FilteredResult,
    pub metrics: SummaryMetrics,
    pub views: AggregateViews,
}

/// Filter `table` by `spec` and summarize the selection.
///
/// Pure: the table is only read, and equal inputs give equal outputs.
pub fn apply(
    table: &PassengerTable,
    spec: &FilterSpec,
) -> Result<PipelineOutput, InvalidSpecification> {
    spec.validate(table)?;

    let filtered = FilteredResult {
        indices: filtered_indices(table, spec),
    };
    let metrics = SummaryMetrics::compute(filtered.rows(table));
    let views = AggregateViews::compute(filtered.rows(table));

    log::debug!(
        "Filter {:?}/{} kept {} of {} passengers",
        spec.classes,
        spec.gender,
        filtered.len(),
        table.len()
    );

    Ok(PipelineOutput {
        filtered,
        metrics,
        views,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::filter::GenderFilter;
    use crate::data::model::fixtures::sample_table;
    use crate::data::summary::SurvivalLabel;

    fn spec(classes: &[u8], gender: GenderFilter) -> FilterSpec {
        FilterSpec {
            classes: classes.iter().copied().collect(),
            gender,
        }
    }

    fn female() -> GenderFilter {
        GenderFilter::Only("female".to_string())
    }

    fn male() -> GenderFilter {
        GenderFilter::Only("male".to_string())
    }

    /// Every class subset crossed with every gender choice.
    fn all_specs() -> Vec<FilterSpec> {
        let classes = [1u8, 2, 3];
        let mut specs = Vec::new();
        for mask in 0..8u8 {
            let subset: Vec<u8> = classes
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, c)| *c)
                .collect();
            for gender in [GenderFilter::Any, female(), male()] {
                specs.push(spec(&subset, gender));
            }
        }
        specs
    }

    #[test]
    fn scenario_everything_selected() {
        let table = sample_table();
        let out = apply(&table, &spec(&[1, 2, 3], GenderFilter::Any)).unwrap();
        assert_eq!(out.metrics.total_count, table.len());
        assert_eq!(out.filtered.indices, (0..table.len()).collect::<Vec<_>>());
    }

    #[test]
    fn scenario_first_class_women() {
        let table = sample_table();
        let out = apply(&table, &spec(&[1], female())).unwrap();
        assert!(out
            .filtered
            .rows(&table)
            .all(|r| r.class == 1 && r.gender == "female"));
        assert_eq!(out.metrics.total_count, 3);
        assert!(out.views.survival_by_class.len() <= 2);
        assert!(out
            .views
            .survival_by_class
            .iter()
            .all(|g| g.class == 1));
    }

    #[test]
    fn scenario_no_classes_selected() {
        let table = sample_table();
        let out = apply(&table, &spec(&[], GenderFilter::Any)).unwrap();
        assert_eq!(out.metrics.total_count, 0);
        assert!(out.filtered.is_empty());
        assert!(out.metrics.average_fare.is_nan());
        assert!(out.metrics.survival_rate_pct.is_nan());
        assert!(out.views.survival_by_class.is_empty());
        assert!(out.views.ages.is_empty());
    }

    #[test]
    fn count_matches_predicate_for_every_spec() {
        let table = sample_table();
        for s in all_specs() {
            let out = apply(&table, &s).unwrap();
            let expected = table
                .records
                .iter()
                .filter(|r| {
                    s.classes.contains(&r.class)
                        && match &s.gender {
                            GenderFilter::Any => true,
                            GenderFilter::Only(g) => &r.gender == g,
                        }
                })
                .count();
            assert_eq!(out.metrics.total_count, expected, "{s:?}");
        }
    }

    #[test]
    fn average_fare_undefined_only_without_fares() {
        let table = sample_table();
        for s in all_specs() {
            let out = apply(&table, &s).unwrap();
            let fares: Vec<f64> = out.filtered.rows(&table).filter_map(|r| r.fare).collect();
            if fares.is_empty() {
                assert!(out.metrics.average_fare.is_nan(), "{s:?}");
            } else {
                let mean = fares.iter().sum::<f64>() / fares.len() as f64;
                assert!((out.metrics.average_fare - mean).abs() < 1e-9, "{s:?}");
            }
        }
    }

    #[test]
    fn survival_rate_undefined_only_when_empty() {
        let table = sample_table();
        for s in all_specs() {
            let out = apply(&table, &s).unwrap();
            let rate = out.metrics.survival_rate_pct;
            if out.filtered.is_empty() {
                assert!(rate.is_nan(), "{s:?}");
            } else {
                assert!((0.0..=100.0).contains(&rate), "{s:?}");
            }
        }
    }

    #[test]
    fn survival_groups_are_nonempty_and_sum_to_total() {
        let table = sample_table();
        for s in all_specs() {
            let out = apply(&table, &s).unwrap();
            let groups = &out.views.survival_by_class;
            assert!(groups.iter().all(|g| g.count > 0), "{s:?}");
            let sum: usize = groups.iter().map(|g| g.count).sum();
            assert_eq!(sum, out.metrics.total_count, "{s:?}");
        }
    }

    #[test]
    fn first_class_women_outcomes() {
        let table = sample_table();
        let out = apply(&table, &spec(&[1], female())).unwrap();
        let labels: Vec<(SurvivalLabel, usize)> = out
            .views
            .survival_by_class
            .iter()
            .map(|g| (g.survived, g.count))
            .collect();
        assert_eq!(labels, vec![(SurvivalLabel::No, 1), (SurvivalLabel::Yes, 2)]);
        // Passenger 9 has neither age nor fare.
        assert_eq!(out.views.ages, vec![38.0, 35.0]);
        assert!((out.metrics.average_fare - (71.2833 + 53.1) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let table = sample_table();
        for s in all_specs() {
            let a = apply(&table, &s).unwrap();
            let b = apply(&table, &s).unwrap();
            assert_eq!(a.filtered, b.filtered);
            assert_eq!(a.metrics.total_count, b.metrics.total_count);
            assert_eq!(
                a.metrics.average_fare.to_bits(),
                b.metrics.average_fare.to_bits()
            );
            assert_eq!(
                a.metrics.survival_rate_pct.to_bits(),
                b.metrics.survival_rate_pct.to_bits()
            );
            assert_eq!(a.views, b.views);
        }
    }

    #[test]
    fn widening_classes_never_shrinks_the_count() {
        let table = sample_table();
        for narrow in all_specs() {
            for wide in all_specs() {
                if narrow.gender != wide.gender || !narrow.classes.is_subset(&wide.classes) {
                    continue;
                }
                let n = apply(&table, &narrow).unwrap().metrics.total_count;
                let w = apply(&table, &wide).unwrap().metrics.total_count;
                assert!(n <= w, "{narrow:?} -> {wide:?}");
            }
        }
    }

    #[test]
    fn table_is_left_untouched() {
        let table = sample_table();
        let before = table.clone();
        apply(&table, &spec(&[2], male())).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn unknown_filter_values_are_rejected() {
        let table = sample_table();
        let err = apply(&table, &spec(&[1, 7], GenderFilter::Any)).unwrap_err();
        assert_eq!(err, InvalidSpecification::UnknownClass(7));

        let err = apply(
            &table,
            &FilterSpec {
                classes: BTreeSet::from([1]),
                gender: GenderFilter::Only("other".into()),
            },
        )
        .unwrap_err();
        assert_eq!(err, InvalidSpecification::UnknownGender("other".into()));
    }
}
