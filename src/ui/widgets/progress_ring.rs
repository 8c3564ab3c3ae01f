// SPDX-License-Identifier: MPL-2.0
//! Animated progress ring widget using Canvas for smooth rotation.
//!
//! Renders a circular track with a brand-colored arc whose sweep tracks the
//! pipeline progress, rotating while work is in flight so the screen never
//! looks frozen between task completions.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Minimum visible sweep so the arc is never a bare dot at 0% progress.
const MIN_SWEEP: f32 = PI / 6.0;

/// Progress ring that rotates smoothly while filling up.
pub struct ProgressRing {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    progress: f32, // 0.0..=1.0
    color: Color,
    size: f32,
}

impl ProgressRing {
    /// Creates a new ring with the given color, rotation angle, and progress.
    ///
    /// `progress` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(color: Color, rotation: f32, progress: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            progress: progress.clamp(0.0, 1.0),
            color,
            size: sizing::ICON_XXL,
        }
    }

    /// Overrides the rendered diameter.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Angular sweep of the filled arc, in radians.
    fn sweep(&self) -> f32 {
        MIN_SWEEP + (TAU - MIN_SWEEP) * self.progress
    }

    /// Creates a Canvas widget from this ring.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Track circle (subtle)
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(4.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Filled arc, starting at the top and rotating with time
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + self.sweep();

                let mut arc_path = canvas::path::Builder::new();

                let start_x = center.x + radius * start_angle.cos();
                let start_y = center.y + radius * start_angle.sin();
                arc_path.move_to(Point::new(start_x, start_y));

                // Approximate the arc with short line segments
                let segments = 48;
                #[allow(clippy::cast_precision_loss)]
                // segments=48, i∈[1,48] - well within f32 precision
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    let x = center.x + radius * angle.cos();
                    let y = center.y + radius * angle.sin();
                    arc_path.line_to(Point::new(x, y));
                }

                let arc = arc_path.build();
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(4.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn progress_is_clamped() {
        let ring = ProgressRing::new(palette::PRIMARY_500, 0.0, 2.5);
        assert!((ring.progress - 1.0).abs() < f32::EPSILON);

        let ring = ProgressRing::new(palette::PRIMARY_500, 0.0, -1.0);
        assert!(ring.progress.abs() < f32::EPSILON);
    }

    #[test]
    fn sweep_grows_with_progress() {
        let empty = ProgressRing::new(palette::PRIMARY_500, 0.0, 0.0);
        let half = ProgressRing::new(palette::PRIMARY_500, 0.0, 0.5);
        let full = ProgressRing::new(palette::PRIMARY_500, 0.0, 1.0);

        assert!(empty.sweep() > 0.0);
        assert!(half.sweep() > empty.sweep());
        assert!((full.sweep() - TAU).abs() < 1e-4);
    }
}
