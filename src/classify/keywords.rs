use crate::sparql::Field;

/// Columns searched for keywords. `levels` is left out.
pub const SEARCH_FIELDS: &[Field] = &[
    Field::Concept,
    Field::Description,
    Field::Label,
    Field::Source,
];

pub const DIAGNOSIS_KEYWORDS: &[&str] = &[
    "diagnosis",
    "disorder",
    "condition",
    "clinical",
    "medical",
    "disease",
    "syndrome",
    "impairment",
    "health",
    "control",
    "typical",
    "group",
];

pub const AGE_KEYWORDS: &[&str] = &["age", "years", "birth"];

pub const SEX_KEYWORDS: &[&str] = &["sex", "gender", "male", "female"];

pub const INSTRUMENT_KEYWORDS: &[&str] = &[
    "assessment",
    "response",
    "test",
    "instrument",
    "symptom",
    "observation",
];
