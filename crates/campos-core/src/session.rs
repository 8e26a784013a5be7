//! Processing session: the list of selected documents and the rows from the
//! last run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::batch::{aggregate_with_progress, file_name_of};
use crate::docx::{DocumentReader, DocxReader};
use crate::models::record::{BatchSummary, ExtractionTable, ResultRow};

/// Selected files and the result of the last [`Session::process`] call.
#[derive(Debug, Default)]
pub struct Session {
    current_files: Vec<PathBuf>,
    result_rows: ExtractionTable,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add paths, skipping any already present with the exact same spelling.
    /// `a/x.docx` and `a/./x.docx` are different entries. Returns how many
    /// were added.
    pub fn add_paths<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            let path = path.into();
            if !self.contains(&path) {
                self.current_files.push(path);
                added += 1;
            }
        }
        added
    }

    /// Remove every selected path and result row whose file name is in
    /// `names`. Returns how many distinct names were requested.
    pub fn remove_by_file_name<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: HashSet<String> = names.into_iter().map(Into::into).collect();

        self.current_files
            .retain(|path| !names.contains(&file_name_of(path)));
        self.result_rows.remove_file_names(&names);

        info!(
            "Removed {} file name(s), {} file(s) left to process",
            names.len(),
            self.current_files.len()
        );
        names.len()
    }

    /// Forget all selected paths and results.
    pub fn clear(&mut self) {
        self.current_files.clear();
        self.result_rows = ExtractionTable::new();
    }

    /// Process the selected files with the DOCX reader.
    pub fn process(&mut self) -> &ExtractionTable {
        self.process_with(&DocxReader::new())
    }

    /// Process the selected files, replacing any previous results.
    pub fn process_with(&mut self, reader: &impl DocumentReader) -> &ExtractionTable {
        self.process_with_progress(reader, |_| {})
    }

    /// Process the selected files, calling `on_row` after each document.
    pub fn process_with_progress<F>(
        &mut self,
        reader: &impl DocumentReader,
        on_row: F,
    ) -> &ExtractionTable
    where
        F: FnMut(&ResultRow),
    {
        self.result_rows = aggregate_with_progress(reader, &self.current_files, on_row);
        &self.result_rows
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.current_files
    }

    pub fn results(&self) -> &ExtractionTable {
        &self.result_rows
    }

    pub fn summary(&self) -> BatchSummary {
        self.result_rows.summary()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.current_files
            .iter()
            .any(|p| p.as_os_str() == path.as_os_str())
    }
}
