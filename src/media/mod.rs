// SPDX-License-Identifier: MPL-2.0
//! Video descriptors produced by the upload step.
//!
//! Nothing in this module touches the network or decodes media: the "analysis"
//! of a YouTube URL and the inspection of a local file both synthesize fixed
//! demo metadata. Only the file size is read from disk, for display purposes.

use crate::error::{InputError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted by the upload step.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Title reported for every analyzed YouTube URL in demo mode.
pub const DEMO_YOUTUBE_TITLE: &str = "How to Build Amazing Apps with AI";
/// Duration reported for every analyzed YouTube URL in demo mode.
pub const DEMO_YOUTUBE_DURATION: &str = "5:23";
/// Duration reported for every local file in demo mode.
pub const DEMO_FILE_DURATION: &str = "3:45";

/// Where the input video came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VideoSource {
    Youtube { url: String },
    File { path: PathBuf, size_bytes: u64 },
}

/// Display record describing the input video, passed between wizard steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoDescriptor {
    #[serde(flatten)]
    pub source: VideoSource,
    pub title: String,
    pub duration: String,
}

impl VideoDescriptor {
    /// Returns the file size label for local files, `None` for URLs.
    pub fn size_label(&self) -> Option<String> {
        match &self.source {
            VideoSource::File { size_bytes, .. } => Some(format_file_size(*size_bytes)),
            VideoSource::Youtube { .. } => None,
        }
    }
}

/// "Analyzes" a YouTube URL and synthesizes the fixed demo descriptor.
///
/// The URL is kept verbatim in the descriptor; no request is made.
pub fn analyze_youtube_url(url: &str) -> Result<VideoDescriptor> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyUrl.into());
    }

    Ok(VideoDescriptor {
        source: VideoSource::Youtube {
            url: trimmed.to_string(),
        },
        title: DEMO_YOUTUBE_TITLE.to_string(),
        duration: DEMO_YOUTUBE_DURATION.to_string(),
    })
}

/// Builds a descriptor for a local file: title from the file stem, fixed demo
/// duration, size read from disk.
pub fn describe_file(path: &Path) -> Result<VideoDescriptor> {
    if !is_video_file(path) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        return Err(InputError::UnsupportedExtension(ext).into());
    }

    let size_bytes = fs::metadata(path)
        .map_err(|err| InputError::FileUnreadable(err.to_string()))?
        .len();

    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string();

    Ok(VideoDescriptor {
        source: VideoSource::File {
            path: path.to_path_buf(),
            size_bytes,
        },
        title,
        duration: DEMO_FILE_DURATION.to_string(),
    })
}

/// Returns whether the path carries a recognized video extension.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            VIDEO_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Formats a byte count as a "N.NN MB" label.
pub fn format_file_size(size_bytes: u64) -> String {
    let mb = size_bytes as f64 / 1024.0 / 1024.0;
    format!("{:.2} MB", mb)
}
