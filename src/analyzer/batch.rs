//! Batch analysis over a directory tree.
//!
//! Failures are isolated per source file: one file's page failure is
//! logged and recorded while the rest of the batch continues. This is the
//! opposite of single-file analysis, where the first page failure aborts
//! the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::error::Result;
use crate::model::Document;
use crate::perception::PageSource;

use super::DocumentAnalyzer;

/// Outcome of analyzing one source file in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The source file
    pub path: PathBuf,

    /// The analyzed document, or the failure that skipped the file
    pub result: Result<Document>,

    /// Wall-clock time spent on the file
    pub elapsed: Duration,
}

impl BatchOutcome {
    /// Whether the file was analyzed successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Collect all files under `dir`, recursively, in sorted order.
pub fn collect_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_into(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Analyze every file under `dir`, isolating per-file failures.
///
/// Returns one [`BatchOutcome`] per file, in sorted path order. Only the
/// directory walk itself can fail the call.
pub fn analyze_directory(
    analyzer: &DocumentAnalyzer,
    source: &dyn PageSource,
    dir: &Path,
) -> Result<Vec<BatchOutcome>> {
    let files = collect_source_files(dir)?;
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        let started = Instant::now();
        let result = source
            .load(&path)
            .and_then(|images| analyzer.analyze_document(&images));
        let elapsed = started.elapsed();

        match &result {
            Ok(doc) => info!(
                "analyzed {} ({} pages) in {:.2}s",
                path.display(),
                doc.page_count(),
                elapsed.as_secs_f64()
            ),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }

        outcomes.push(BatchOutcome {
            path,
            result,
            elapsed,
        });
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_source_files_sorted_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("sub/a.png"), b"x").unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();

        let files = collect_source_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("b.png"),
                PathBuf::from("sub/a.png")
            ]
        );
    }
}
