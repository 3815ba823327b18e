//! Graph uploader: push local Turtle files into the store, one at a time.

mod walker;

pub use walker::{discover_graph_files, GraphFile};

use crate::error::Result;
use crate::store::StoreClient;
use reqwest::StatusCode;
use std::io::Write;

/// Outcome of one upload run.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub uploaded: usize,
    /// Files the store answered with a non-success status.
    pub failed: Vec<(GraphFile, StatusCode)>,
}

/// Upload `files` into `graph` in order.
///
/// A non-success status writes a `BAD:` line to `out` and moves on to the next
/// file; read and transport errors abort the run. `Done` is written once every
/// file has been sent.
pub async fn upload_graphs<W: Write>(
    client: &StoreClient,
    files: &[GraphFile],
    graph: &str,
    out: &mut W,
) -> Result<UploadReport> {
    let mut report = UploadReport::default();
    let total = files.len();

    for (idx, file) in files.iter().enumerate() {
        log::info!("[{}/{}] Uploading: {}", idx + 1, total, file.relative_path);

        let turtle = std::fs::read(&file.absolute_path)?;
        let status = client.upload_turtle(graph, turtle).await?;

        if status.is_success() {
            report.uploaded += 1;
        } else {
            log::warn!("✗ {}: {}", file.relative_path, status);
            writeln!(out, "    BAD: {}: {}", file.relative_path, status.as_u16())?;
            report.failed.push((file.clone(), status));
        }
    }

    log::info!(
        "Uploaded {} of {} graph files ({} failed)",
        report.uploaded,
        total,
        report.failed.len()
    );
    writeln!(out, "Done")?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::client_for;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_graphs(root: &std::path::Path, graphs: &[(&str, &str)]) {
        for (dir, body) in graphs {
            fs::create_dir_all(root.join(dir)).unwrap();
            fs::write(root.join(dir).join("nidm.ttl"), body).unwrap();
        }
    }

    #[tokio::test]
    async fn test_failed_upload_is_reported_and_run_completes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/nidm-openneuro/"))
            .and(body_string("good"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/nidm-openneuro/"))
            .and(body_string("broken"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        write_graphs(temp_dir.path(), &[("ds000001", "good"), ("ds000002", "broken")]);
        let files = discover_graph_files(temp_dir.path(), "*/nidm.ttl").unwrap();

        let mut out = Vec::new();
        let report = upload_graphs(&client_for(&server), &files, "urn:graph", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let bad: Vec<&str> = out.lines().filter(|l| l.contains("BAD:")).collect();
        assert_eq!(bad, vec!["    BAD: ds000002/nidm.ttl: 500"]);
        assert_eq!(out.lines().last(), Some("Done"));
        assert_eq!(report.uploaded, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].1, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_every_failure_is_reported_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        write_graphs(temp_dir.path(), &[("a", "x"), ("b", "y"), ("c", "z")]);
        let files = discover_graph_files(temp_dir.path(), "*/nidm.ttl").unwrap();

        let mut out = Vec::new();
        let report = upload_graphs(&client_for(&server), &files, "urn:graph", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().filter(|l| l.contains("BAD:")).count(), 3);
        assert!(out.ends_with("Done\n"));
        assert_eq!(report.uploaded, 0);
    }

    #[tokio::test]
    async fn test_no_files_still_completes() {
        let server = MockServer::start().await;
        let mut out = Vec::new();
        let report = upload_graphs(&client_for(&server), &[], "urn:graph", &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Done\n");
        assert_eq!(report.uploaded, 0);
        assert!(report.failed.is_empty());
    }
}
