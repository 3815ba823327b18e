use crate::error::{NidmError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A graph file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFile {
    /// Path relative to the discovery root, `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Compiled glob: one regex per `/`-separated segment.
///
/// `*` matches any run of characters and `?` a single character, never across a `/`.
struct GlobPattern {
    segments: Vec<Regex>,
}

impl GlobPattern {
    fn new(pattern: &str) -> Result<Self> {
        let segments = pattern
            .trim_matches('/')
            .split('/')
            .map(|segment| {
                if segment.is_empty() || segment == "**" {
                    return Err(NidmError::InvalidInput(format!(
                        "Unsupported glob segment {:?} in {}",
                        segment, pattern
                    )));
                }
                let mut re = String::from("^");
                for c in segment.chars() {
                    match c {
                        '*' => re.push_str(".*"),
                        '?' => re.push('.'),
                        c => re.push_str(&regex::escape(&c.to_string())),
                    }
                }
                re.push('$');
                Regex::new(&re).map_err(|e| NidmError::InvalidInput(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    fn depth(&self) -> usize {
        self.segments.len()
    }

    fn matches(&self, relative: &Path) -> bool {
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.len() == self.segments.len()
            && parts
                .iter()
                .zip(&self.segments)
                .all(|(part, re)| re.is_match(part))
    }
}

/// Discover files under `root` whose relative path matches `pattern` (e.g. `*/nidm.ttl`).
///
/// Results are sorted by relative path.
pub fn discover_graph_files(root: &Path, pattern: &str) -> Result<Vec<GraphFile>> {
    if !root.is_dir() {
        return Err(NidmError::Config(format!(
            "Graph root is not a directory: {}",
            root.display()
        )));
    }

    let glob = GlobPattern::new(pattern)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .min_depth(glob.depth())
        .max_depth(glob.depth())
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).map_err(|_| {
            NidmError::Config(format!(
                "Failed to compute relative path for: {}",
                path.display()
            ))
        })?;

        if !glob.matches(relative) {
            continue;
        }

        files.push(GraphFile {
            relative_path: relative.to_string_lossy().replace('\\', "/"),
            absolute_path: path.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    log::info!(
        "Discovered {} graph files matching {} in {}",
        files.len(),
        pattern,
        root.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_graph_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("ds000002")).unwrap();
        fs::create_dir_all(root.join("ds000001/sub")).unwrap();
        fs::write(root.join("ds000002/nidm.ttl"), "@prefix nidm: <x> .").unwrap();
        fs::write(root.join("ds000001/nidm.ttl"), "@prefix nidm: <x> .").unwrap();
        fs::write(root.join("ds000001/nidm.json"), "{}").unwrap();
        fs::write(root.join("ds000001/sub/nidm.ttl"), "too deep").unwrap();
        fs::write(root.join("nidm.ttl"), "too shallow").unwrap();

        let files = discover_graph_files(root, "*/nidm.ttl").unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["ds000001/nidm.ttl", "ds000002/nidm.ttl"]);
        assert!(files[0].absolute_path.ends_with("ds000001/nidm.ttl"));
    }

    #[test]
    fn test_wildcards_stay_within_segment() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/one.ttl"), "").unwrap();
        fs::write(root.join("a/two.ttl"), "").unwrap();
        fs::write(root.join("a/one.nt"), "").unwrap();

        let files = discover_graph_files(root, "*/*.ttl").unwrap();
        assert_eq!(files.len(), 2);

        let files = discover_graph_files(root, "a/o?e.ttl").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "a/one.ttl");

        let files = discover_graph_files(root, "*.ttl").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_literal_dots_are_escaped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("d")).unwrap();
        fs::write(root.join("d/nidmXttl"), "").unwrap();

        let files = discover_graph_files(root, "*/nidm.ttl").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let err = discover_graph_files(&temp_dir.path().join("missing"), "*/nidm.ttl").unwrap_err();
        assert!(matches!(err, NidmError::Config(_)));
    }

    #[test]
    fn test_recursive_glob_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = discover_graph_files(temp_dir.path(), "**/nidm.ttl").unwrap_err();
        assert!(matches!(err, NidmError::InvalidInput(_)));
    }
}
