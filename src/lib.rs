// SPDX-License-Identifier: MPL-2.0
//! `thumbcap_studio` is a desktop demo of an AI thumbnail and caption
//! generator, built with the Iced GUI framework.
//!
//! The three-step wizard (upload, generation, review) runs entirely offline:
//! the "AI pipeline" is a choreographed sequence of timers that delivers a
//! fixed payload. The crate demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/thumbcap_studio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod i18n;
pub mod media;
pub mod ui;
