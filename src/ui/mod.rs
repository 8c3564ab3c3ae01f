// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, shared widgets, and the three wizard screens.

pub mod design_tokens;
pub mod generation;
pub mod header;
pub mod notifications;
pub mod review;
pub mod stepper;
pub mod styles;
pub mod theming;
pub mod upload;
pub mod widgets;
