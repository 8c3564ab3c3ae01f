// SPDX-License-Identifier: MPL-2.0
//! JSON export of the customized result.
//!
//! The snapshot is an ad-hoc combination of the current selections; it is
//! serialized on demand and never retained by the application.

use crate::error::Result;
use crate::generation::{CaptionVariant, ThumbnailVariant};
use crate::media::VideoDescriptor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Default file name offered by the save dialog.
pub const DEFAULT_FILENAME: &str = "thumbcap-export.json";

/// The two originating score fields, grouped as in the exported document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub predicted_ctr: f64,
    pub seo_score: u32,
}

/// Snapshot of the review screen's selections, serialized to JSON on export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSnapshot {
    pub video: VideoDescriptor,
    pub thumbnail: ThumbnailVariant,
    /// The edited caption text, not necessarily one of the mock variants.
    pub caption: String,
    pub analytics: Analytics,
    pub exported_at: DateTime<Utc>,
}

impl ExportSnapshot {
    /// Assembles a snapshot from the current selections.
    #[must_use]
    pub fn new(
        video: VideoDescriptor,
        thumbnail: ThumbnailVariant,
        selected_caption: &CaptionVariant,
        caption_draft: String,
    ) -> Self {
        let analytics = Analytics {
            predicted_ctr: thumbnail.predicted_ctr,
            seo_score: selected_caption.seo_score,
        };
        Self {
            video,
            thumbnail,
            caption: caption_draft,
            analytics,
            exported_at: Utc::now(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the snapshot to `path` as JSON, creating parent directories.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
