// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding image files and stepping through them.
//!
//! This module walks a directory tree for supported image formats and keeps
//! the resulting list together with the browsing cursor, so wraparound
//! arithmetic lives in one place.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions the scanner accepts, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// An ordered list of image files with a wraparound browsing cursor.
///
/// Files appear in filesystem traversal order. The cursor is `None` exactly
/// when the list is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageList {
    files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            current_index: None,
        }
    }

    /// Recursively scans a directory for supported image files.
    ///
    /// The cursor starts at the first file if any were found. Unreadable
    /// subtrees are skipped rather than failing the whole scan.
    ///
    /// Returns an error if the path is not a directory.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::Io(format!(
                "not a directory: {}",
                directory.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(directory).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && is_supported_image(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        log::info!(
            "scanned {}: {} image(s) found",
            directory.display(),
            files.len()
        );

        let current_index = if files.is_empty() { None } else { Some(0) };

        Ok(Self {
            files,
            current_index,
        })
    }

    /// Returns the current image path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.files.get(idx))
            .map(|p| p.as_path())
    }

    /// Advances the cursor by one, wrapping around to the start, and returns
    /// the new current path. No-op on an empty list.
    pub fn next(&mut self) -> Option<&Path> {
        self.step(1)
    }

    /// Moves the cursor back by one, wrapping around to the end, and returns
    /// the new current path. No-op on an empty list.
    pub fn previous(&mut self) -> Option<&Path> {
        let len = self.files.len();
        if len == 0 {
            return None;
        }
        self.step(len - 1)
    }

    /// Moves the cursor forward by `offset` positions modulo the list length.
    fn step(&mut self, offset: usize) -> Option<&Path> {
        let len = self.files.len();
        if len == 0 {
            return None;
        }
        let idx = self.current_index.unwrap_or(0);
        self.current_index = Some((idx + offset) % len);
        self.current()
    }

    /// Removes a path from the list, keeping the cursor inside `[0, len)`.
    ///
    /// Removing an entry before the cursor shifts the cursor down with it;
    /// removing the last entry while the cursor points at it clamps the
    /// cursor to the new end. Returns `true` if the path was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        let Some(pos) = self.files.iter().position(|p| p == path) else {
            return false;
        };
        self.files.remove(pos);

        self.current_index = if self.files.is_empty() {
            None
        } else {
            let cur = self.current_index.unwrap_or(0);
            let shifted = if cur > pos { cur - 1 } else { cur };
            Some(shifted.min(self.files.len() - 1))
        };

        true
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(|p| p.as_path())
    }

    /// Iterates over the paths in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|p| p.as_path())
    }
}

impl Default for ImageList {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks whether a file carries one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
