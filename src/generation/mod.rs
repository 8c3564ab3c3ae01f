// SPDX-License-Identifier: MPL-2.0
//! The simulated AI generation pipeline and its mock output payload.
//!
//! The pipeline is a fixed ordered list of named pseudo-tasks with fixed
//! durations. Nothing is computed: after the timers elapse, the hard-coded
//! [`GeneratedContent`] payload is delivered. Run identifiers let the caller
//! discard completions that belong to an abandoned run.

use serde::Serialize;
use std::time::Duration;

/// One pseudo-task of the simulated pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTask {
    /// i18n key for the task label shown during the run.
    pub label_key: &'static str,
    pub duration: Duration,
}

/// The fixed ordered task sequence of the simulated run.
pub const PIPELINE: &[PipelineTask] = &[
    PipelineTask {
        label_key: "generation-task-frames",
        duration: Duration::from_millis(1500),
    },
    PipelineTask {
        label_key: "generation-task-emotions",
        duration: Duration::from_millis(2000),
    },
    PipelineTask {
        label_key: "generation-task-transcribe",
        duration: Duration::from_millis(2500),
    },
    PipelineTask {
        label_key: "generation-task-thumbnails",
        duration: Duration::from_millis(2000),
    },
    PipelineTask {
        label_key: "generation-task-captions",
        duration: Duration::from_millis(1500),
    },
];

/// Pause between the last task finishing and the payload being delivered.
pub const DELIVERY_DELAY: Duration = Duration::from_millis(500);

/// Identifies one simulated run. A new id is minted every time a run starts
/// or is cancelled, so completions from older runs can be recognized and
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunId(u64);

impl RunId {
    /// Returns the id that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Total wall-clock duration of all pipeline tasks (excluding delivery delay).
#[must_use]
pub fn total_duration() -> Duration {
    PIPELINE.iter().map(|task| task.duration).sum()
}

/// Percentage of the run completed after `completed_tasks` tasks have
/// finished. Monotonically non-decreasing in `completed_tasks`; returns 100
/// once every task is done.
#[must_use]
pub fn progress_percent(completed_tasks: usize) -> f32 {
    let total = total_duration().as_millis() as f32;
    let elapsed: Duration = PIPELINE
        .iter()
        .take(completed_tasks)
        .map(|task| task.duration)
        .sum();
    (elapsed.as_millis() as f32 / total * 100.0).min(100.0)
}

/// Identifier of a thumbnail variant, unique within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ThumbnailId(pub u32);

/// Identifier of a caption variant, unique within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CaptionId(pub u32);

/// A mock AI-generated thumbnail option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbnailVariant {
    pub id: ThumbnailId,
    pub style: String,
    /// Carried in the data model and the export only; never fetched.
    pub image_url: String,
    /// Fixed, non-computed score label.
    pub predicted_ctr: f64,
}

/// A mock AI-generated caption option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionVariant {
    pub id: CaptionId,
    pub text: String,
    /// Fixed, non-computed score label.
    pub seo_score: u32,
    pub emoji: bool,
}

/// The mock AI output bundle delivered at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    pub thumbnails: Vec<ThumbnailVariant>,
    pub captions: Vec<CaptionVariant>,
}

impl GeneratedContent {
    /// The hard-coded demo payload.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            thumbnails: vec![
                ThumbnailVariant {
                    id: ThumbnailId(1),
                    style: "Vibrant Highlight".to_string(),
                    image_url: "https://images.unsplash.com/photo-1758524943377-9fcc8b1fb1d0"
                        .to_string(),
                    predicted_ctr: 8.2,
                },
                ThumbnailVariant {
                    id: ThumbnailId(2),
                    style: "Minimalist Clean".to_string(),
                    image_url: "https://images.unsplash.com/photo-1658274474930-bb27a64022c2"
                        .to_string(),
                    predicted_ctr: 7.8,
                },
                ThumbnailVariant {
                    id: ThumbnailId(3),
                    style: "Neon Glow".to_string(),
                    image_url: "https://images.unsplash.com/photo-1610642436394-81749134ffe8"
                        .to_string(),
                    predicted_ctr: 9.1,
                },
                ThumbnailVariant {
                    id: ThumbnailId(4),
                    style: "Professional".to_string(),
                    image_url: "https://images.unsplash.com/photo-1746021375246-7dc8ab0583f0"
                        .to_string(),
                    predicted_ctr: 7.5,
                },
                ThumbnailVariant {
                    id: ThumbnailId(5),
                    style: "Dramatic".to_string(),
                    image_url: "https://images.unsplash.com/photo-1545317690-31b00be407fd"
                        .to_string(),
                    predicted_ctr: 8.7,
                },
            ],
            captions: vec![
                CaptionVariant {
                    id: CaptionId(1),
                    text: "🚀 Build AI Apps in Minutes with Google Cloud | Complete Guide for Beginners"
                        .to_string(),
                    seo_score: 92,
                    emoji: true,
                },
                CaptionVariant {
                    id: CaptionId(2),
                    text: "Google Cloud AI Tutorial: Transform Your App Development Workflow"
                        .to_string(),
                    seo_score: 88,
                    emoji: false,
                },
                CaptionVariant {
                    id: CaptionId(3),
                    text: "You Won't Believe How Easy AI Development Is Now! 🤯 Google Cloud Magic"
                        .to_string(),
                    seo_score: 85,
                    emoji: true,
                },
            ],
        }
    }

    /// Looks up a thumbnail variant by id.
    pub fn thumbnail(&self, id: ThumbnailId) -> Option<&ThumbnailVariant> {
        self.thumbnails.iter().find(|thumb| thumb.id == id)
    }

    /// Looks up a caption variant by id.
    pub fn caption(&self, id: CaptionId) -> Option<&CaptionVariant> {
        self.captions.iter().find(|caption| caption.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pipeline_has_five_tasks_totalling_nine_and_a_half_seconds() {
        assert_eq!(PIPELINE.len(), 5);
        assert_eq!(total_duration(), Duration::from_millis(9500));
    }

    #[test]
    fn progress_is_monotonically_non_decreasing() {
        let mut previous = -1.0_f32;
        for completed in 0..=PIPELINE.len() {
            let percent = progress_percent(completed);
            assert!(percent >= previous, "progress went backwards at {completed}");
            previous = percent;
        }
    }

    #[test]
    fn progress_reaches_exactly_one_hundred() {
        assert_eq!(progress_percent(0), 0.0);
        assert_eq!(progress_percent(PIPELINE.len()), 100.0);
        // Saturates for out-of-range input rather than overshooting
        assert_eq!(progress_percent(PIPELINE.len() + 1), 100.0);
    }

    #[test]
    fn run_ids_advance() {
        let first = RunId::default();
        let second = first.next();
        assert_ne!(first, second);
        assert_eq!(second.next(), second.next());
    }

    #[test]
    fn mock_payload_matches_demo_shape() {
        let content = GeneratedContent::mock();
        assert_eq!(content.thumbnails.len(), 5);
        assert_eq!(content.captions.len(), 3);
        assert_eq!(content.thumbnails[2].style, "Neon Glow");
        assert_eq!(content.thumbnails[2].predicted_ctr, 9.1);
        assert_eq!(content.captions[0].seo_score, 92);
        assert!(content.captions[0].emoji);
        assert!(!content.captions[1].emoji);
    }

    #[test]
    fn mock_payload_ids_are_unique() {
        let content = GeneratedContent::mock();

        let thumbnail_ids: HashSet<_> = content.thumbnails.iter().map(|t| t.id).collect();
        assert_eq!(thumbnail_ids.len(), content.thumbnails.len());

        let caption_ids: HashSet<_> = content.captions.iter().map(|c| c.id).collect();
        assert_eq!(caption_ids.len(), content.captions.len());
    }

    #[test]
    fn lookup_by_id_finds_variants() {
        let content = GeneratedContent::mock();
        assert_eq!(
            content.thumbnail(ThumbnailId(3)).map(|t| t.style.as_str()),
            Some("Neon Glow")
        );
        assert_eq!(
            content.caption(CaptionId(2)).map(|c| c.seo_score),
            Some(88)
        );
        assert!(content.thumbnail(ThumbnailId(99)).is_none());
        assert!(content.caption(CaptionId(99)).is_none());
    }

    #[test]
    fn task_labels_are_distinct_i18n_keys() {
        let keys: HashSet<_> = PIPELINE.iter().map(|task| task.label_key).collect();
        assert_eq!(keys.len(), PIPELINE.len());
        for task in PIPELINE {
            assert!(task.label_key.starts_with("generation-task-"));
        }
    }
}
