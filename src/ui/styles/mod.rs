// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across the UI.

pub mod button;
