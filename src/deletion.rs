// SPDX-License-Identifier: MPL-2.0
//! Mark-for-deletion bookkeeping and the bulk delete operation.
//!
//! Marking is a pure set toggle; the destructive work happens only in
//! [`apply`], which the shell calls after the user confirms.

use crate::directory_scanner::ImageList;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The set of paths staged for deletion.
///
/// Membership is a subset of the current image collection; the shell clears
/// the set whenever the collection is replaced.
#[derive(Debug, Clone, Default)]
pub struct MarkSet {
    paths: HashSet<PathBuf>,
}

impl MarkSet {
    /// Creates a new empty mark set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles membership of `path` and returns whether it is now marked.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_path_buf());
            true
        }
    }

    /// Checks whether `path` is currently marked.
    pub fn is_marked(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Returns the number of marked paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Checks if no paths are marked.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drops all marks.
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

/// Outcome of a bulk deletion pass.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Paths removed from the filesystem and the collection.
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be deleted, with the underlying reason.
    /// These stay in the collection.
    pub failures: Vec<(PathBuf, String)>,
}

/// Deletes every marked file that is still in the collection, in collection
/// order.
///
/// A failed deletion is recorded and does not stop the rest of the pass; the
/// failed file stays in the collection so the user can retry. The mark set
/// is cleared afterwards either way.
pub fn apply(marks: &mut MarkSet, images: &mut ImageList) -> ApplyReport {
    let targets: Vec<PathBuf> = images
        .iter()
        .filter(|p| marks.is_marked(p))
        .map(|p| p.to_path_buf())
        .collect();

    let mut report = ApplyReport::default();

    for path in targets {
        match fs::remove_file(&path) {
            Ok(()) => {
                images.remove(&path);
                report.deleted.push(path);
            }
            Err(err) => {
                log::warn!("could not delete {}: {}", path.display(), err);
                report.failures.push((path, err.to_string()));
            }
        }
    }

    marks.clear();

    if !report.deleted.is_empty() {
        log::info!("deleted {} file(s)", report.deleted.len());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn toggle_marks_and_unmarks() {
        let mut marks = MarkSet::new();
        let path = Path::new("/photos/a.jpg");

        assert!(marks.toggle(path));
        assert!(marks.is_marked(path));

        assert!(!marks.toggle(path));
        assert!(!marks.is_marked(path));
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut marks = MarkSet::new();
        let path = Path::new("/photos/a.jpg");

        marks.toggle(path);
        let before = marks.is_marked(path);
        marks.toggle(path);
        marks.toggle(path);

        assert_eq!(marks.is_marked(path), before);
    }

    #[test]
    fn apply_with_no_marks_changes_nothing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");

        let mut images =
            ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        let mut marks = MarkSet::new();

        let report = apply(&mut marks, &mut images);

        assert!(report.deleted.is_empty());
        assert!(report.failures.is_empty());
        assert_eq!(images.len(), 1);
        assert!(a.exists());
    }

    #[test]
    fn apply_deletes_marked_files_and_updates_collection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");
        let b = create_test_file(temp_dir.path(), "b.jpg");
        let c = create_test_file(temp_dir.path(), "c.jpg");

        let mut images =
            ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        let mut marks = MarkSet::new();
        marks.toggle(&a);
        marks.toggle(&c);

        let report = apply(&mut marks, &mut images);

        assert_eq!(report.deleted.len(), 2);
        assert!(report.failures.is_empty());
        assert!(!a.exists());
        assert!(b.exists());
        assert!(!c.exists());
        assert_eq!(images.len(), 1);
        assert_eq!(images.current(), Some(b.as_path()));
        assert!(marks.is_empty());
    }

    #[test]
    fn apply_reports_failures_and_keeps_file_in_collection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");
        let b = create_test_file(temp_dir.path(), "b.jpg");

        let mut images =
            ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        let mut marks = MarkSet::new();
        marks.toggle(&a);
        marks.toggle(&b);

        // Pull one file out from under the workflow to force a failure.
        fs::remove_file(&a).expect("failed to pre-delete file");

        let report = apply(&mut marks, &mut images);

        assert_eq!(report.deleted, vec![b.clone()]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, a);
        // The failed path stays in the collection.
        assert_eq!(images.len(), 1);
        assert_eq!(images.current(), Some(a.as_path()));
        assert!(marks.is_empty());
    }

    #[test]
    fn apply_clears_marks_even_on_total_failure() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = create_test_file(temp_dir.path(), "a.jpg");

        let mut images =
            ImageList::scan_directory(temp_dir.path()).expect("failed to scan directory");
        let mut marks = MarkSet::new();
        marks.toggle(&a);
        fs::remove_file(&a).expect("failed to pre-delete file");

        let report = apply(&mut marks, &mut images);

        assert!(report.deleted.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(marks.is_empty());
    }
}
