// SPDX-License-Identifier: MPL-2.0
//! Generation step: the simulated AI pipeline animation.
//!
//! Each pipeline task is a timer; when one fires, the next is scheduled.
//! Every timer completion carries the [`RunId`] it was scheduled under, and
//! completions whose id no longer matches the current one are dropped. Going
//! back to the upload step mints a fresh id, which is what cancels a run:
//! any timer still in flight delivers a stale id and is ignored.

use crate::generation::{self, GeneratedContent, RunId, DELIVERY_DELAY, PIPELINE};
use crate::i18n::fluent::I18n;
use crate::media::VideoDescriptor;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::ProgressRing;
use iced::widget::{button, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task, Theme};
use tokio::time::sleep;

/// Rotation advance per animation tick, in radians.
const ROTATION_STEP: f32 = 0.35;

/// Generation screen state.
#[derive(Debug, Default)]
pub struct State {
    descriptor: Option<VideoDescriptor>,
    run: RunId,
    running: bool,
    completed: usize,
    rotation: f32,
}

/// Messages handled by the generation screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// One pipeline task's timer elapsed.
    TaskFinished { run: RunId, index: usize },
    /// The post-pipeline delivery delay elapsed.
    ResultReady { run: RunId },
    /// Animation frame for the progress ring.
    Tick,
    BackPressed,
}

/// Effects the generation screen asks its parent to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The run finished; hand the payload to the review step.
    Completed(GeneratedContent),
    /// The user backed out; the run is cancelled.
    BackToUpload,
}

impl State {
    /// Begins a new simulated run for the given video.
    ///
    /// Mints a fresh run id so completions from any previous run are stale.
    pub fn start(&mut self, descriptor: VideoDescriptor) -> Task<Message> {
        self.descriptor = Some(descriptor);
        self.run = self.run.next();
        self.running = true;
        self.completed = 0;
        self.rotation = 0.0;

        schedule_task(self.run, 0)
    }

    /// Whether a run is in flight (drives the animation subscription).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The id of the current run.
    #[must_use]
    pub fn run_id(&self) -> RunId {
        self.run
    }

    /// The video being "processed", if a run was started.
    pub fn descriptor(&self) -> Option<&VideoDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::TaskFinished { run, index } => {
                if run != self.run || !self.running {
                    return (Event::None, Task::none());
                }

                self.completed = index + 1;

                let task = if self.completed < PIPELINE.len() {
                    schedule_task(self.run, self.completed)
                } else {
                    schedule_delivery(self.run)
                };
                (Event::None, task)
            }
            Message::ResultReady { run } => {
                if run != self.run || !self.running {
                    return (Event::None, Task::none());
                }

                self.running = false;
                (Event::Completed(GeneratedContent::mock()), Task::none())
            }
            Message::Tick => {
                self.rotation = (self.rotation + ROTATION_STEP) % std::f32::consts::TAU;
                (Event::None, Task::none())
            }
            Message::BackPressed => {
                // Invalidate in-flight timers
                self.run = self.run.next();
                self.running = false;
                self.completed = 0;
                (Event::BackToUpload, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("generation-title")).size(typography::TITLE_LG);

        let video_line = self.descriptor.as_ref().map(|descriptor| {
            Text::new(i18n.tr_with_args("generation-video", &[("title", descriptor.title.as_str())]))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                })
        });

        let percent = generation::progress_percent(self.completed);
        let ring = ProgressRing::new(palette::PRIMARY_500, self.rotation, percent / 100.0)
            .size(sizing::ICON_XXL)
            .into_element();

        let percent_label =
            Text::new(format!("{}%", percent.round() as u32)).size(typography::TITLE_MD);

        let bar = progress_bar(0.0..=100.0, percent)
            .length(Length::Fixed(420.0))
            .girth(8.0);

        let mut tasks = Column::new().spacing(spacing::XS);
        for (index, task) in PIPELINE.iter().enumerate() {
            tasks = tasks.push(task_line(i18n, task.label_key, index, self.completed));
        }

        let back = button(Text::new(i18n.tr("generation-back")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::ghost)
            .on_press(Message::BackPressed);

        let mut content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(title);

        if let Some(line) = video_line {
            content = content.push(line);
        }

        content = content
            .push(ring)
            .push(percent_label)
            .push(bar)
            .push(tasks)
            .push(back);

        Container::new(content)
            .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::panel)
            .into()
    }
}

fn schedule_task(run: RunId, index: usize) -> Task<Message> {
    let duration = PIPELINE[index].duration;
    Task::perform(sleep(duration), move |()| Message::TaskFinished {
        run,
        index,
    })
}

fn schedule_delivery(run: RunId) -> Task<Message> {
    Task::perform(sleep(DELIVERY_DELAY), move |()| Message::ResultReady {
        run,
    })
}

fn task_line<'a>(
    i18n: &'a I18n,
    label_key: &'static str,
    index: usize,
    completed: usize,
) -> Element<'a, Message> {
    let done = index < completed;
    let active = index == completed;

    let marker = if done {
        Text::new("✓").color(palette::SUCCESS_500)
    } else if active {
        Text::new("●").color(palette::PRIMARY_500)
    } else {
        Text::new("○").color(palette::GRAY_400)
    };

    let label = Text::new(i18n.tr(label_key))
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(if active {
                theme.palette().text
            } else {
                iced::Color {
                    a: 0.7,
                    ..theme.palette().text
                }
            }),
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(marker.size(typography::BODY))
        .push(label)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media;

    fn demo_descriptor() -> VideoDescriptor {
        media::analyze_youtube_url("https://youtu.be/demo").expect("descriptor")
    }

    #[tokio::test]
    async fn start_resets_progress_and_marks_running() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());

        assert!(state.is_running());
        assert_eq!(state.completed, 0);
        assert!(state.descriptor().is_some());
    }

    #[tokio::test]
    async fn task_completions_advance_progress() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());
        let run = state.run;

        for index in 0..PIPELINE.len() {
            let (event, _) = state.update(Message::TaskFinished { run, index });
            assert_eq!(event, Event::None);
            assert_eq!(state.completed, index + 1);
        }
    }

    #[tokio::test]
    async fn result_ready_delivers_payload_once() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());
        let run = state.run;

        for index in 0..PIPELINE.len() {
            let _ = state.update(Message::TaskFinished { run, index });
        }

        let (event, _) = state.update(Message::ResultReady { run });
        match event {
            Event::Completed(content) => assert_eq!(content.thumbnails.len(), 5),
            _ => panic!("expected completion"),
        }
        assert!(!state.is_running());

        // A duplicate delivery is ignored
        let (event, _) = state.update(Message::ResultReady { run });
        assert_eq!(event, Event::None);
    }

    #[tokio::test]
    async fn stale_run_completions_are_dropped() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());
        let old_run = state.run;

        // Back out, then start again: old timers must not advance the new run
        let (event, _) = state.update(Message::BackPressed);
        assert_eq!(event, Event::BackToUpload);

        let _ = state.start(demo_descriptor());
        let (event, _) = state.update(Message::TaskFinished {
            run: old_run,
            index: 0,
        });
        assert_eq!(event, Event::None);
        assert_eq!(state.completed, 0);

        let (event, _) = state.update(Message::ResultReady { run: old_run });
        assert_eq!(event, Event::None);
        assert!(state.is_running());
    }

    #[tokio::test]
    async fn back_cancels_the_run() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());
        let run = state.run;

        let (event, _) = state.update(Message::BackPressed);
        assert_eq!(event, Event::BackToUpload);
        assert!(!state.is_running());

        // The cancelled run's timers are stale now
        let (event, _) = state.update(Message::TaskFinished { run, index: 0 });
        assert_eq!(event, Event::None);
    }

    #[tokio::test]
    async fn tick_only_rotates() {
        let mut state = State::default();
        let _ = state.start(demo_descriptor());
        let before = state.rotation;

        let (event, _) = state.update(Message::Tick);
        assert_eq!(event, Event::None);
        assert!(state.rotation > before);
        assert_eq!(state.completed, 0);
    }
}
