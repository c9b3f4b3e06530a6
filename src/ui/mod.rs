// SPDX-License-Identifier: MPL-2.0
//! UI components: the viewer surface, the control bar, toast notifications,
//! and the design tokens they share.

pub mod controls;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod viewer;
