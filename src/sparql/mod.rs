//! SPARQL side of the store: the data element query and its result records.

mod query;
mod results;

pub use query::{data_element_query, DATA_ELEMENT_QUERY, NIDM_PREFIXES};
pub use results::parse_results;

use serde::Serialize;

/// Known columns of a data element row.
///
/// Result variables outside this set are dropped while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Label,
    Description,
    Source,
    Concept,
    Levels,
}

impl Field {
    /// All fields in output column order.
    pub const ALL: [Field; 5] = [
        Field::Label,
        Field::Description,
        Field::Source,
        Field::Concept,
        Field::Levels,
    ];

    /// SPARQL variable / column name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Label => "label",
            Field::Description => "description",
            Field::Source => "source",
            Field::Concept => "concept",
            Field::Levels => "levels",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// One data element retrieved from the store. Every column is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataElementRecord {
    pub label: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub concept: Option<String>,
    pub levels: Option<String>,
}

impl DataElementRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Label => self.label.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Source => self.source.as_deref(),
            Field::Concept => self.concept.as_deref(),
            Field::Levels => self.levels.as_deref(),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Label => &mut self.label,
            Field::Description => &mut self.description,
            Field::Source => &mut self.source,
            Field::Concept => &mut self.concept,
            Field::Levels => &mut self.levels,
        };
        *slot = Some(value);
    }
}
