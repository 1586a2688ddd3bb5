use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// PassengerRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// Source column names, in file order.
pub const COLUMN_NAMES: [&str; 12] = [
    "PassengerId",
    "Survived",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Ticket",
    "Fare",
    "Cabin",
    "Embarked",
];

/// A single passenger (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PassengerRecord {
    #[serde(rename = "PassengerId")]
    pub passenger_id: u32,
    /// Parsed from the `0`/`1` indicator.
    #[serde(rename = "Survived", deserialize_with = "bool_from_indicator")]
    pub survived: bool,
    /// Ordinal ticket class code (1 = first class).
    #[serde(rename = "Pclass")]
    pub class: u8,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "SibSp")]
    pub siblings_spouses: u32,
    #[serde(rename = "Parch")]
    pub parents_children: u32,
    #[serde(rename = "Ticket")]
    pub ticket: String,
    #[serde(rename = "Fare")]
    pub fare: Option<f64>,
    #[serde(rename = "Cabin")]
    pub cabin: Option<String>,
    #[serde(rename = "Embarked")]
    pub embarked: Option<String>,
}

fn bool_from_indicator<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "survival indicator must be 0 or 1, got {other}"
        ))),
    }
}

impl PassengerRecord {
    /// Cell texts in [`COLUMN_NAMES`] order, with missing values left blank.
    pub fn cells(&self) -> [String; 12] {
        fn opt_num(v: Option<f64>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }
        [
            self.passenger_id.to_string(),
            u8::from(self.survived).to_string(),
            self.class.to_string(),
            self.name.clone(),
            self.gender.clone(),
            opt_num(self.age),
            self.siblings_spouses.to_string(),
            self.parents_children.to_string(),
            self.ticket.clone(),
            opt_num(self.fare),
            self.cabin.clone().unwrap_or_default(),
            self.embarked.clone().unwrap_or_default(),
        ]
    }
}

// ---------------------------------------------------------------------------
// PassengerTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset plus the categorical domains observed in it.
///
/// Never mutated after construction; the pipeline only reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerTable {
    /// All passengers, in source order.
    pub records: Vec<PassengerRecord>,
    /// Sorted set of class codes present in `records`.
    pub classes: BTreeSet<u8>,
    /// Sorted set of gender values present in `records`.
    pub genders: BTreeSet<String>,
}

impl PassengerTable {
    /// Build the categorical domains from the loaded records.
    pub fn from_records(records: Vec<PassengerRecord>) -> Self {
        let classes = records.iter().map(|r| r.class).collect();
        let genders = records.iter().map(|r| r.gender.clone()).collect();
        PassengerTable {
            records,
            classes,
            genders,
        }
    }

    /// Number of passengers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
