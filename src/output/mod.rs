//! Tab-separated output of classified data element subsets.

use crate::classify::{Category, Classification};
use crate::error::Result;
use crate::sparql::{DataElementRecord, Field};
use std::path::{Path, PathBuf};

/// Write `rows` as TSV: a leading index column followed by every record field.
///
/// The index header is empty and absent values are written as empty cells.
pub fn write_subset(path: &Path, rows: &[(usize, &DataElementRecord)]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;

    let mut header = vec![""];
    header.extend(Field::ALL.iter().map(|f| f.name()));
    writer.write_record(&header)?;

    for (index, record) in rows {
        let mut row = vec![index.to_string()];
        row.extend(
            Field::ALL
                .iter()
                .map(|&f| record.get(f).unwrap_or_default().to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one `de_{category}.tsv` per category into `dir`, creating it if needed.
///
/// Returns the written paths in [`Category::ALL`] order.
pub fn write_classification(
    dir: &Path,
    records: &[DataElementRecord],
    classification: &Classification,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let path = dir.join(category.file_name());
        let rows = classification.subset(category, records);
        write_subset(&path, &rows)?;
        log::debug!("Wrote {} rows to {}", rows.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_subset_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de_age.tsv");
        let record = DataElementRecord {
            label: Some("age".to_string()),
            description: Some("Age in years".to_string()),
            concept: Some("http://uri.interlex.org/base/ilx_0100400".to_string()),
            ..DataElementRecord::default()
        };

        write_subset(&path, &[(3, &record)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "\tlabel\tdescription\tsource\tconcept\tlevels");
        assert_eq!(
            lines[1],
            "3\tage\tAge in years\t\thttp://uri.interlex.org/base/ilx_0100400\t"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_write_classification_writes_all_categories() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("data");
        let records = vec![
            DataElementRecord {
                label: Some("sex".to_string()),
                ..DataElementRecord::default()
            },
            DataElementRecord::default(),
        ];
        let classification = classify(&records);

        let written = write_classification(&out_dir, &records, &classification).unwrap();
        assert_eq!(written.len(), 6);
        for category in Category::ALL {
            assert!(out_dir.join(category.file_name()).is_file());
        }

        let sex = fs::read_to_string(out_dir.join("de_sex.tsv")).unwrap();
        assert_eq!(sex.lines().count(), 2);
        assert!(sex.lines().nth(1).unwrap().starts_with("0\tsex"));

        let unclassified = fs::read_to_string(out_dir.join("de_unclassified.tsv")).unwrap();
        assert_eq!(unclassified.lines().nth(1), Some("1\t\t\t\t\t"));

        let no_concepts = fs::read_to_string(out_dir.join("de_no_concepts.tsv")).unwrap();
        assert_eq!(no_concepts.lines().count(), 3);
    }

    #[test]
    fn test_empty_classification_writes_headers_only() {
        let temp_dir = TempDir::new().unwrap();
        let classification = classify(&[]);
        let written = write_classification(temp_dir.path(), &[], &classification).unwrap();
        for path in written {
            let content = fs::read_to_string(path).unwrap();
            assert_eq!(content.lines().count(), 1);
        }
    }
}
