//! Keyword classification of data element records.
//!
//! Four categories are keyword based and may overlap. `no_concepts` is
//! decided by the absence of a concept, independently of the keywords, and
//! `unclassified` holds every record none of the keyword categories claimed.

mod keywords;

pub use keywords::{
    AGE_KEYWORDS, DIAGNOSIS_KEYWORDS, INSTRUMENT_KEYWORDS, SEARCH_FIELDS, SEX_KEYWORDS,
};

use crate::sparql::{DataElementRecord, Field};
use std::fmt;

/// Output category of a data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Diagnosis,
    Age,
    Sex,
    Instrument,
    NoConcepts,
    Unclassified,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Diagnosis,
        Category::Age,
        Category::Sex,
        Category::Instrument,
        Category::NoConcepts,
        Category::Unclassified,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Diagnosis => "diagnosis",
            Category::Age => "age",
            Category::Sex => "sex",
            Category::Instrument => "instrument",
            Category::NoConcepts => "no_concepts",
            Category::Unclassified => "unclassified",
        }
    }

    /// Keywords defining the category, or `None` for the two derived categories.
    pub fn keywords(self) -> Option<&'static [&'static str]> {
        match self {
            Category::Diagnosis => Some(DIAGNOSIS_KEYWORDS),
            Category::Age => Some(AGE_KEYWORDS),
            Category::Sex => Some(SEX_KEYWORDS),
            Category::Instrument => Some(INSTRUMENT_KEYWORDS),
            Category::NoConcepts | Category::Unclassified => None,
        }
    }

    /// Output file name, e.g. `de_no_concepts.tsv`.
    pub fn file_name(self) -> String {
        format!("de_{}.tsv", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True if any keyword occurs, ignoring case, inside any of the record's `fields`.
/// Absent fields never match.
pub fn record_matches<S: AsRef<str>>(
    record: &DataElementRecord,
    fields: &[Field],
    keywords: &[S],
) -> bool {
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
    matches_lowered(record, fields, &keywords)
}

fn matches_lowered(record: &DataElementRecord, fields: &[Field], keywords: &[String]) -> bool {
    fields
        .iter()
        .filter_map(|&field| record.get(field))
        .map(str::to_lowercase)
        .any(|text| keywords.iter().any(|k| text.contains(k.as_str())))
}

/// Membership vector of `keywords` over `records`, one entry per record.
pub fn match_keywords<S: AsRef<str>>(
    records: &[DataElementRecord],
    fields: &[Field],
    keywords: &[S],
) -> Vec<bool> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
    records
        .iter()
        .map(|record| matches_lowered(record, fields, &keywords))
        .collect()
}

/// Per-category membership of every record of one query response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    diagnosis: Vec<bool>,
    age: Vec<bool>,
    sex: Vec<bool>,
    instrument: Vec<bool>,
    no_concepts: Vec<bool>,
    unclassified: Vec<bool>,
}

impl Classification {
    pub fn membership(&self, category: Category) -> &[bool] {
        match category {
            Category::Diagnosis => &self.diagnosis,
            Category::Age => &self.age,
            Category::Sex => &self.sex,
            Category::Instrument => &self.instrument,
            Category::NoConcepts => &self.no_concepts,
            Category::Unclassified => &self.unclassified,
        }
    }

    pub fn len(&self) -> usize {
        self.unclassified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unclassified.is_empty()
    }

    /// Records of `category` with their row index, in original order.
    ///
    /// `records` must be the slice this classification was computed from.
    pub fn subset<'a>(
        &self,
        category: Category,
        records: &'a [DataElementRecord],
    ) -> Vec<(usize, &'a DataElementRecord)> {
        records
            .iter()
            .enumerate()
            .zip(self.membership(category))
            .filter(|(_, member)| **member)
            .map(|(row, _)| row)
            .collect()
    }

    /// Number of member records per category, in [`Category::ALL`] order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.membership(c).iter().filter(|&&m| m).count()))
            .collect()
    }
}

/// Classify every record into the six output categories.
pub fn classify(records: &[DataElementRecord]) -> Classification {
    let diagnosis = match_keywords(records, SEARCH_FIELDS, DIAGNOSIS_KEYWORDS);
    let age = match_keywords(records, SEARCH_FIELDS, AGE_KEYWORDS);
    let sex = match_keywords(records, SEARCH_FIELDS, SEX_KEYWORDS);
    let instrument = match_keywords(records, SEARCH_FIELDS, INSTRUMENT_KEYWORDS);

    let no_concepts = records.iter().map(|r| r.concept.is_none()).collect();

    let unclassified = (0..records.len())
        .map(|i| !(diagnosis[i] || age[i] || sex[i] || instrument[i]))
        .collect();

    Classification {
        diagnosis,
        age,
        sex,
        instrument,
        no_concepts,
        unclassified,
    }
}
