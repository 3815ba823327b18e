use super::{DataElementRecord, Field};
use crate::error::{NidmError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// SPARQL 1.1 query results, JSON serialization.
#[derive(Deserialize)]
struct QueryResults {
    results: ResultSet,
}

#[derive(Deserialize)]
struct ResultSet {
    bindings: Vec<HashMap<String, Term>>,
}

/// A bound RDF term. `type`, `datatype` and `xml:lang` are not needed.
#[derive(Deserialize)]
struct Term {
    value: String,
}

/// Parse a `application/sparql-results+json` payload into data element records.
///
/// One record per binding, in response order. Variables absent from a binding
/// leave the matching field empty.
pub fn parse_results(payload: &[u8]) -> Result<Vec<DataElementRecord>> {
    let parsed: QueryResults = serde_json::from_slice(payload)
        .map_err(|e| NidmError::Parse(format!("SPARQL results JSON: {}", e)))?;

    let records = parsed
        .results
        .bindings
        .into_iter()
        .map(|binding| {
            let mut record = DataElementRecord::default();
            for (name, term) in binding {
                match Field::from_name(&name) {
                    Some(field) => record.set(field, term.value),
                    None => log::debug!("Ignoring unknown result variable ?{}", name),
                }
            }
            record
        })
        .collect::<Vec<_>>();

    log::debug!("Parsed {} result bindings", records.len());
    Ok(records)
}
