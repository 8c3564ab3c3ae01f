// SPDX-License-Identifier: MPL-2.0
//! Reusable custom widgets.

pub mod progress_ring;

pub use progress_ring::ProgressRing;
