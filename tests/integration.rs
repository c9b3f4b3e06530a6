// SPDX-License-Identifier: MPL-2.0
use cullview::config::{self, Config};
use cullview::deletion::{self, MarkSet};
use cullview::directory_scanner::ImageList;
use cullview::i18n::fluent::I18n;
use image_rs::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]))
        .save(&path)
        .expect("failed to write test image");
    path
}

#[test]
fn test_mark_and_apply_removes_file_and_keeps_cursor_valid() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let a = write_image(dir.path(), "a.jpg");
    let b = write_image(dir.path(), "b.png");
    fs::write(dir.path().join("c.txt"), b"not an image").expect("failed to write text file");

    // Only the two images make it into the collection.
    let mut images = ImageList::scan_directory(dir.path()).expect("Failed to scan directory");
    assert_eq!(images.len(), 2);

    // Mark the current image and apply. Traversal order is not specified,
    // so work with whichever of the two is under the cursor.
    let mut marks = MarkSet::new();
    let current = images
        .current()
        .expect("collection is not empty")
        .to_path_buf();
    let survivor = if current == a { b.clone() } else { a.clone() };
    marks.toggle(&current);

    let report = deletion::apply(&mut marks, &mut images);

    assert_eq!(report.deleted, vec![current.clone()]);
    assert!(report.failures.is_empty());
    assert!(!current.exists());
    assert!(survivor.exists());
    assert_eq!(images.len(), 1);
    assert_eq!(images.current(), Some(survivor.as_path()));
    assert_eq!(images.current_index(), Some(0));
    assert!(marks.is_empty());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_full_navigation_round_trip_over_scanned_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["a.jpg", "b.gif", "c.bmp", "d.tiff"] {
        write_image(dir.path(), name);
    }

    let mut images = ImageList::scan_directory(dir.path()).expect("Failed to scan directory");
    let start = images.current().map(|p| p.to_path_buf());

    for _ in 0..images.len() {
        images.next();
    }
    assert_eq!(images.current().map(|p| p.to_path_buf()), start);

    images.next();
    images.previous();
    assert_eq!(images.current().map(|p| p.to_path_buf()), start);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_notices_resolve_in_both_bundled_locales() {
    let i18n_en = I18n::new(Some("en-US".to_string()), &Config::default());
    assert!(!i18n_en.tr("notice-no-images-found").starts_with("MISSING"));

    let i18n_fr = I18n::new(Some("fr".to_string()), &Config::default());
    assert!(!i18n_fr.tr("notice-no-images-found").starts_with("MISSING"));
}
