//! Entry points for the two pipelines: graph upload and data element classification.

use crate::classify::{classify, Category};
use crate::config::Config;
use crate::error::Result;
use crate::output::write_classification;
use crate::sparql::{data_element_query, parse_results};
use crate::store::StoreClient;
use crate::upload::{discover_graph_files, upload_graphs, UploadReport};
use std::io::Write;
use std::path::PathBuf;

/// Result of a classification run.
#[derive(Debug)]
pub struct ClassifySummary {
    pub records: usize,
    pub counts: Vec<(Category, usize)>,
    pub files: Vec<PathBuf>,
}

/// Upload every graph file matching the configured pattern.
pub async fn push_graphs<W: Write>(config: &Config, out: &mut W) -> Result<UploadReport> {
    let client = StoreClient::from_config(config)?;
    push_graphs_with(&client, config, out).await
}

async fn push_graphs_with<W: Write>(
    client: &StoreClient,
    config: &Config,
    out: &mut W,
) -> Result<UploadReport> {
    let files = discover_graph_files(config.graph_root(), &config.upload.pattern)?;
    if files.is_empty() {
        log::warn!(
            "No graph files found. Check upload.graph_root and upload.pattern in config.toml."
        );
    }
    upload_graphs(client, &files, &config.upload.graph, out).await
}

/// Query data elements, classify them and write one TSV per category.
pub async fn classify_data_elements<W: Write>(
    config: &Config,
    out: &mut W,
) -> Result<ClassifySummary> {
    let client = StoreClient::from_config(config)?;
    classify_data_elements_with(&client, config, out).await
}

async fn classify_data_elements_with<W: Write>(
    client: &StoreClient,
    config: &Config,
    out: &mut W,
) -> Result<ClassifySummary> {
    log::info!("Querying data elements");
    let payload = client.select(&data_element_query()).await?;
    let records = parse_results(&payload)?;
    log::info!("Retrieved {} data elements", records.len());

    let classification = classify(&records);
    let counts = classification.counts();
    for (category, count) in &counts {
        log::info!("  {}: {}", category, count);
    }

    let files = write_classification(config.output_dir(), &records, &classification)?;
    log::info!(
        "Wrote {} files to {}",
        files.len(),
        config.output_dir().display()
    );
    writeln!(out, "Done")?;

    Ok(ClassifySummary {
        records: records.len(),
        counts,
        files,
    })
}
