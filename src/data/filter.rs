use std::collections::BTreeSet;
use std::fmt;

use super::error::InvalidSpecification;
use super::model::{PassengerRecord, PassengerTable};

// ---------------------------------------------------------------------------
// Filter specification
// ---------------------------------------------------------------------------

/// Gender restriction chosen in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenderFilter {
    /// No restriction.
    #[default]
    Any,
    Only(String),
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenderFilter::Any => write!(f, "All"),
            GenderFilter::Only(g) => write!(f, "{g}"),
        }
    }
}

/// Which passengers to include in the analysis.
///
/// An empty `classes` set selects nothing; that is a valid state, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub classes: BTreeSet<u8>,
    pub gender: GenderFilter,
}

impl FilterSpec {
    /// Every class present in the table, no gender restriction.
    pub fn all(table: &PassengerTable) -> Self {
        Self {
            classes: table.classes.clone(),
            gender: GenderFilter::Any,
        }
    }

    /// Reject values that do not occur in `table`.
    pub fn validate(&self, table: &PassengerTable) -> Result<(), InvalidSpecification> {
        if let Some(class) = self.classes.iter().find(|c| !table.classes.contains(*c)) {
            return Err(InvalidSpecification::UnknownClass(*class));
        }
        if let GenderFilter::Only(gender) = &self.gender {
            if !table.genders.contains(gender) {
                return Err(InvalidSpecification::UnknownGender(gender.clone()));
            }
        }
        Ok(())
    }

    pub fn matches(&self, record: &PassengerRecord) -> bool {
        if !self.classes.contains(&record.class) {
            return false;
        }
        match &self.gender {
            GenderFilter::Any => true,
            GenderFilter::Only(gender) => record.gender == *gender,
        }
    }
}

/// Return indices of passengers matching `spec`, in source order.
pub fn filtered_indices(table: &PassengerTable, spec: &FilterSpec) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| spec.matches(record))
        .map(|(i, _)| i)
        .collect()
}
