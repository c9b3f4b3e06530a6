// SPDX-License-Identifier: MPL-2.0
//! `cullview` is an image culling browser built with the Iced GUI framework.
//!
//! It scans a directory tree for images, shows them one at a time with
//! fit-to-window scaling, and lets the user stage files for deletion and
//! remove them in one confirmed sweep.

pub mod app;
pub mod config;
pub mod deletion;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod image_handler;
pub mod ui;
