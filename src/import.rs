use crate::domain::{Task, TaskDraft};
use crate::persistence::parse_csv;
use crate::store::{StoreError, TaskStore};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Counts reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    /// Data rows rejected by validation (the header is not counted here)
    pub skipped: usize,
    /// Whether the first row was recognised as a header and skipped
    pub header: bool,
    /// Rows seen, header included
    pub total: usize,
}

impl ImportSummary {
    /// User-facing summary line
    pub fn message(&self) -> String {
        if self.added == 0 {
            format!("Imported 0 tasks. Skipped {}. (Check format)", self.skipped)
        } else {
            format!("Imported {} task(s)! Skipped {}. ✅", self.added, self.skipped)
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Pick a .csv file first 🙂")]
    NoFile,
    #[error("That file doesn’t look like a .csv 😅")]
    NotCsv,
    #[error("Couldn’t read that file 😭 ({0})")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Whether a path names a `.csv` file (by name only, content is not sniffed)
pub fn has_csv_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase().ends_with(".csv"))
        .unwrap_or(false)
}

fn is_header(row: &[String]) -> bool {
    let name = row.first().map(|s| s.trim().to_lowercase()).unwrap_or_default();
    let duration = row.get(1).map(|s| s.to_lowercase()).unwrap_or_default();
    name.contains("name") && duration.contains("duration")
}

fn draft_from_row(row: &[String]) -> TaskDraft {
    let column = |i: usize| row.get(i).cloned().unwrap_or_default();
    TaskDraft::new(column(0), column(1), column(2), column(3))
}

/// Turn CSV text into validated tasks without touching any store
pub fn tasks_from_text(text: &str) -> (Vec<Task>, ImportSummary) {
    let rows = parse_csv(text);
    let mut summary = ImportSummary {
        total: rows.len(),
        ..ImportSummary::default()
    };
    let mut tasks = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if index == 0 && is_header(row) {
            summary.header = true;
            continue;
        }

        match Task::from_draft(&draft_from_row(row)) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                debug!(row = index, reason = %e, "skipping csv row");
                summary.skipped += 1;
            }
        }
    }

    summary.added = tasks.len();
    (tasks, summary)
}

/// Import CSV text into the store. Nothing is written when no row is accepted.
pub fn import_from_text(store: &mut TaskStore, text: &str) -> Result<ImportSummary, ImportError> {
    let (tasks, summary) = tasks_from_text(text);
    store.extend(tasks)?;
    info!(
        added = summary.added,
        skipped = summary.skipped,
        total = summary.total,
        "csv import finished"
    );
    Ok(summary)
}

/// Import a CSV file. The name must end in `.csv`; a read failure leaves the store untouched.
pub fn import_file(store: &mut TaskStore, path: &Path) -> Result<ImportSummary, ImportError> {
    if path.as_os_str().is_empty() {
        return Err(ImportError::NoFile);
    }
    if !has_csv_extension(path) {
        return Err(ImportError::NotCsv);
    }
    let text = std::fs::read_to_string(path)?;
    import_from_text(store, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FileKvStore, KeyValueStore};
    use crate::store::STORAGE_KEY;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_detected() {
        let mut store = TaskStore::in_memory();
        let summary =
            import_from_text(&mut store, "Name,Duration,Location\nWash car,20,Home\n").unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                added: 1,
                skipped: 0,
                header: true,
                total: 2
            }
        );
        assert_eq!(store.tasks()[0].name, "Wash car");
        assert_eq!(store.tasks()[0].duration, 20);
        // The header is not a rejected row
        assert_eq!(summary.message(), "Imported 1 task(s)! Skipped 0. ✅");
    }

    #[test]
    fn test_bad_row_skipped() {
        let mut store = TaskStore::in_memory();
        let summary = import_from_text(&mut store, "Bad Row,,Home\nGood,15,Work\n").unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.header);
        assert_eq!(summary.total, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].name, "Good");
    }

    #[test]
    fn test_quoted_name_with_comma_and_quotes() {
        let mut store = TaskStore::in_memory();
        import_from_text(&mut store, "\"Say \"\"hi\"\", ok\",5,Home,Social\n").unwrap();

        let task = &store.tasks()[0];
        assert_eq!(task.name, "Say \"hi\", ok");
        assert_eq!(task.group.as_deref(), Some("Social"));
    }

    #[test]
    fn test_header_only_checked_on_first_row() {
        let (tasks, summary) = tasks_from_text("Read,10,Home\nName,Duration,Location\n");
        assert_eq!(tasks.len(), 1);
        assert!(!summary.header);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_first_row_without_both_header_words_is_data() {
        let (tasks, summary) = tasks_from_text("Name it,10,Home\n");
        assert_eq!(tasks.len(), 1);
        assert!(!summary.header);
    }

    #[test]
    fn test_duration_floored_and_rows_validated() {
        let (tasks, summary) = tasks_from_text(
            "a,12.7,Home\nb,0,Home\nc,-1,Home\n,5,Home\nd,5,  \ne,abc,Home\n\nf, 3 ,Work",
        );
        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["a", "f"]);
        assert_eq!(tasks[0].duration, 12);
        assert_eq!(tasks[1].duration, 3);
        assert_eq!(summary.skipped, 6);
        assert_eq!(summary.total, 8);
    }

    #[test]
    fn test_zero_added_does_not_persist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::open(Box::new(FileKvStore::new(temp_dir.path())));
        let summary = import_from_text(&mut store, "Name,Duration\nbad,,\n").unwrap();

        assert_eq!(summary.added, 0);
        assert_eq!(summary.message(), "Imported 0 tasks. Skipped 1. (Check format)");
        let kv = FileKvStore::new(temp_dir.path());
        assert_eq!(kv.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_import_file_checks_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.txt");
        std::fs::write(&path, "a,5,Home\n").unwrap();

        let mut store = TaskStore::in_memory();
        assert!(matches!(import_file(&mut store, &path), Err(ImportError::NotCsv)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_file_missing_is_read_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = TaskStore::in_memory();
        let result = import_file(&mut store, &temp_dir.path().join("missing.CSV"));

        assert!(matches!(result, Err(ImportError::Read(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_file_reads_and_adds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Tasks.CSV");
        std::fs::write(&path, "name,duration,location,group\r\nRead,15,Home,\r\n").unwrap();

        let mut store = TaskStore::in_memory();
        let summary = import_file(&mut store, &path).unwrap();
        assert_eq!(summary.message(), "Imported 1 task(s)! Skipped 0. ✅");
        assert_eq!(store.tasks()[0].group, None);
    }

    #[test]
    fn test_has_csv_extension() {
        assert!(has_csv_extension(Path::new("a/b/list.csv")));
        assert!(has_csv_extension(Path::new("LIST.CSV")));
        assert!(!has_csv_extension(Path::new("list.csv.txt")));
        assert!(!has_csv_extension(Path::new("csv")));
    }
}
