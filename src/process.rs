//! Per-file processing: read, transform, back up, write.

use crate::transform::transform;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for rewriting files on disk.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Report changes without touching any file
    pub dry_run: bool,
    /// Write `<file><backup_suffix>` before overwriting
    pub backup: bool,
    pub backup_suffix: String,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            dry_run: false,
            backup: true,
            backup_suffix: ".backup".to_string(),
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Blocks were inserted and the file rewritten
    Updated { blocks: usize },
    /// Dry run: blocks would have been inserted
    WouldUpdate { blocks: usize },
    /// Nothing to document
    Unchanged,
}

/// Totals over a whole run; failures never stop the run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_updated: usize,
    pub blocks_inserted: usize,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

impl RunSummary {
    pub fn record(&mut self, path: &Path, outcome: Result<FileOutcome>) {
        self.files_processed += 1;
        match outcome {
            Ok(FileOutcome::Updated { blocks }) | Ok(FileOutcome::WouldUpdate { blocks }) => {
                self.files_updated += 1;
                self.blocks_inserted += blocks;
            }
            Ok(FileOutcome::Unchanged) => {}
            Err(e) => self.failures.push((path.to_path_buf(), e)),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Path of the backup copy written before `path` is overwritten.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Document one file in place.
pub fn process_file(path: &Path, options: &ProcessOptions) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let result = transform(&content);
    log::debug!(
        "{}: {} line(s), {} block(s) ({} class, {} interface, {} method, {} field)",
        path.display(),
        result.lines_processed,
        result.blocks_inserted,
        result.by_kind.classes,
        result.by_kind.interfaces,
        result.by_kind.methods,
        result.by_kind.fields,
    );

    if !result.changed() {
        return Ok(FileOutcome::Unchanged);
    }
    let blocks = result.blocks_inserted;
    if options.dry_run {
        return Ok(FileOutcome::WouldUpdate { blocks });
    }

    if options.backup {
        let backup = backup_path(path, &options.backup_suffix);
        fs::write(&backup, &content)
            .with_context(|| format!("failed to write backup {}", backup.display()))?;
        log::info!("backup written to {}", backup.display());
    }

    fs::write(path, &result.text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("{}: inserted {} doc block(s)", path.display(), blocks);

    Ok(FileOutcome::Updated { blocks })
}

/// Process every file in order, never stopping on a failure.
///
/// `on_file` sees each outcome before it is folded into the summary.
pub fn process_all<F>(files: &[PathBuf], options: &ProcessOptions, mut on_file: F) -> RunSummary
where
    F: FnMut(&Path, &Result<FileOutcome>),
{
    let mut summary = RunSummary::default();
    for path in files {
        let outcome = process_file(path, options);
        if let Err(ref e) = outcome {
            log::error!("{}: {:#}", path.display(), e);
        }
        on_file(path, &outcome);
        summary.record(path, outcome);
    }
    summary
}
