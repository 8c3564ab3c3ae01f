// SPDX-License-Identifier: MPL-2.0
//! Review step: customize the generated results and export them.
//!
//! Thumbnails are rendered as gradient placeholder cards; the variant's
//! `image_url` travels in the data model and the export document but is never
//! fetched. Selecting a caption replaces the editable draft wholesale, so
//! edits belong to one caption at a time.

use crate::error::{Error, Result};
use crate::export::{ExportSnapshot, DEFAULT_FILENAME};
use crate::generation::{CaptionId, GeneratedContent, ThumbnailId, ThumbnailVariant};
use crate::i18n::fluent::I18n;
use crate::media::VideoDescriptor;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, container, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Task, Theme};
use std::path::PathBuf;

/// Review screen state.
#[derive(Debug)]
pub struct State {
    video: VideoDescriptor,
    content: GeneratedContent,
    selected_thumbnail: ThumbnailId,
    selected_caption: CaptionId,
    caption_draft: String,
    overlay_text: String,
    show_overlay: bool,
    last_export_dir: Option<PathBuf>,
}

/// Messages handled by the review screen.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailSelected(ThumbnailId),
    CaptionSelected(CaptionId),
    DraftChanged(String),
    OverlayToggled(bool),
    OverlayTextChanged(String),
    CopyPressed,
    ExportPressed,
    ExportFinished(Result<Option<PathBuf>>),
    DownloadPngPressed,
    UploadYoutubePressed,
    StartOverPressed,
}

/// Effects the review screen asks its parent to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Put the given text on the system clipboard.
    CopyToClipboard(String),
    /// A JSON export landed at this path.
    Exported(PathBuf),
    ExportFailed(Error),
    /// A demo-only action was invoked; show the named info toast.
    StubInvoked(&'static str),
    /// Discard everything and return to the upload step.
    Reset,
}

impl State {
    /// Builds the review state with the first thumbnail and caption selected.
    #[must_use]
    pub fn new(
        video: VideoDescriptor,
        content: GeneratedContent,
        last_export_dir: Option<PathBuf>,
    ) -> Self {
        let selected_thumbnail = content.thumbnails[0].id;
        let selected_caption = content.captions[0].id;
        let caption_draft = content.captions[0].text.clone();

        Self {
            video,
            content,
            selected_thumbnail,
            selected_caption,
            caption_draft,
            overlay_text: String::new(),
            show_overlay: false,
            last_export_dir,
        }
    }

    pub fn selected_thumbnail(&self) -> ThumbnailId {
        self.selected_thumbnail
    }

    pub fn selected_caption(&self) -> CaptionId {
        self.selected_caption
    }

    pub fn caption_draft(&self) -> &str {
        &self.caption_draft
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::ThumbnailSelected(id) => {
                if self.content.thumbnail(id).is_some() {
                    self.selected_thumbnail = id;
                }
                (Event::None, Task::none())
            }
            Message::CaptionSelected(id) => {
                if let Some(caption) = self.content.caption(id) {
                    self.selected_caption = id;
                    // Edits do not survive switching captions
                    self.caption_draft = caption.text.clone();
                }
                (Event::None, Task::none())
            }
            Message::DraftChanged(draft) => {
                self.caption_draft = draft;
                (Event::None, Task::none())
            }
            Message::OverlayToggled(show) => {
                self.show_overlay = show;
                (Event::None, Task::none())
            }
            Message::OverlayTextChanged(text) => {
                self.overlay_text = text;
                (Event::None, Task::none())
            }
            Message::CopyPressed => (
                Event::CopyToClipboard(self.caption_draft.clone()),
                Task::none(),
            ),
            Message::ExportPressed => match self.build_snapshot() {
                Some(snapshot) => {
                    let start_dir = self.last_export_dir.clone();
                    let task = Task::perform(
                        async move {
                            let mut dialog =
                                rfd::AsyncFileDialog::new().set_file_name(DEFAULT_FILENAME);
                            if let Some(dir) = start_dir {
                                dialog = dialog.set_directory(dir);
                            }
                            match dialog.save_file().await {
                                Some(handle) => {
                                    let path = handle.path().to_path_buf();
                                    snapshot.write_to_path(&path).map(|()| Some(path))
                                }
                                None => Ok(None),
                            }
                        },
                        Message::ExportFinished,
                    );
                    (Event::None, task)
                }
                None => (Event::None, Task::none()),
            },
            Message::ExportFinished(Ok(Some(path))) => {
                self.last_export_dir = path.parent().map(PathBuf::from);
                (Event::Exported(path), Task::none())
            }
            Message::ExportFinished(Ok(None)) => (Event::None, Task::none()),
            Message::ExportFinished(Err(err)) => (Event::ExportFailed(err), Task::none()),
            Message::DownloadPngPressed => (
                Event::StubInvoked("notification-download-stub"),
                Task::none(),
            ),
            Message::UploadYoutubePressed => (
                Event::StubInvoked("notification-upload-stub"),
                Task::none(),
            ),
            Message::StartOverPressed => (Event::Reset, Task::none()),
        }
    }

    fn build_snapshot(&self) -> Option<ExportSnapshot> {
        let thumbnail = self.content.thumbnail(self.selected_thumbnail)?.clone();
        let caption = self.content.caption(self.selected_caption)?;
        Some(ExportSnapshot::new(
            self.video.clone(),
            thumbnail,
            caption,
            self.caption_draft.clone(),
        ))
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let complete_badge = Container::new(
            Text::new(i18n.tr("review-complete-badge")).size(typography::BODY_SM),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(palette::SUCCESS_500));

        let title = Text::new(i18n.tr("review-title")).size(typography::TITLE_LG);
        let subtitle = Text::new(i18n.tr("review-subtitle"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            });

        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(complete_badge)
            .push(title)
            .push(subtitle)
            .push(self.preview(i18n))
            .push(self.thumbnail_cards(i18n))
            .push(self.caption_list(i18n))
            .push(self.caption_editor(i18n))
            .push(tip_card(i18n))
            .push(self.action_row(i18n));

        Container::new(content)
            .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::panel)
            .into()
    }

    fn preview<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let index = self.thumbnail_index(self.selected_thumbnail);
        let variant = &self.content.thumbnails[index];
        let (from, to) = thumbnail_gradient(index);

        let mut inner = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(variant.style.clone())
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE),
            );

        if self.show_overlay && !self.overlay_text.is_empty() {
            inner = inner.push(
                Text::new(self.overlay_text.clone())
                    .size(typography::BODY_LG)
                    .color(palette::WHITE)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        let badge = Container::new(
            Text::new(ctr_label(i18n, variant)).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(palette::WHITE));

        let art = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(inner)
                .push(badge),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMB_PREVIEW_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(styles::container::brand_gradient(
                std::f32::consts::FRAC_PI_4,
                from,
                to,
            )),
            border: iced::Border {
                radius: crate::ui::design_tokens::radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let video_line = Text::new(format!("{} · {}", self.video.title, self.video.duration))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            });

        let overlay_toggle = checkbox(self.show_overlay)
            .label(i18n.tr("review-overlay-toggle"))
            .on_toggle(Message::OverlayToggled)
            .size(typography::BODY)
            .text_size(typography::BODY_SM);

        let mut overlay_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(overlay_toggle);

        if self.show_overlay {
            overlay_row = overlay_row.push(
                text_input(&i18n.tr("review-overlay-placeholder"), &self.overlay_text)
                    .on_input(Message::OverlayTextChanged)
                    .padding(spacing::XS)
                    .size(typography::BODY_SM)
                    .width(Length::Fixed(320.0)),
            );
        }

        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(art)
            .push(video_line)
            .push(overlay_row)
            .into()
    }

    fn thumbnail_cards<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::SM);

        for (index, variant) in self.content.thumbnails.iter().enumerate() {
            let is_selected = variant.id == self.selected_thumbnail;
            let (from, to) = thumbnail_gradient(index);

            let art = Container::new(Text::new("").size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMB_CARD_HEIGHT / 2.0))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(styles::container::brand_gradient(
                        std::f32::consts::FRAC_PI_4,
                        from,
                        to,
                    )),
                    border: iced::Border {
                        radius: crate::ui::design_tokens::radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                });

            let card = Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(art)
                .push(Text::new(variant.style.clone()).size(typography::BODY_SM))
                .push(
                    Text::new(ctr_label(i18n, variant))
                        .size(typography::CAPTION)
                        .color(palette::PRIMARY_500),
                );

            let framed = Container::new(card)
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(move |theme: &Theme| {
                    styles::container::selectable_card(theme, is_selected)
                });

            row = row.push(
                button(framed)
                    .padding(0)
                    .style(transparent_button)
                    .width(Length::Fill)
                    .on_press(Message::ThumbnailSelected(variant.id)),
            );
        }

        row.into()
    }

    fn caption_list<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("review-captions-heading")).size(typography::TITLE_SM));

        for caption in &self.content.captions {
            let is_selected = caption.id == self.selected_caption;

            let mut badges = Row::new().spacing(spacing::XS).push(
                Container::new(
                    Text::new(
                        i18n.tr_with_args(
                            "review-seo-score",
                            &[("score", caption.seo_score.to_string().as_str())],
                        ),
                    )
                    .size(typography::CAPTION),
                )
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(palette::SUCCESS_500)),
            );

            if caption.emoji {
                badges = badges.push(
                    Container::new(
                        Text::new(i18n.tr("review-emoji-badge")).size(typography::CAPTION),
                    )
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge(palette::WARNING_500)),
                );
            }

            let card = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(caption.text.clone()).size(typography::BODY))
                .push(badges);

            let framed = Container::new(card)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(move |theme: &Theme| {
                    styles::container::selectable_card(theme, is_selected)
                });

            column = column.push(
                button(framed)
                    .padding(0)
                    .style(transparent_button)
                    .width(Length::Fill)
                    .on_press(Message::CaptionSelected(caption.id)),
            );
        }

        column.into()
    }

    fn caption_editor<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("review-draft-placeholder"), &self.caption_draft)
            .on_input(Message::DraftChanged)
            .padding(spacing::SM)
            .size(typography::BODY);

        let count = self.caption_draft.chars().count();
        let counter = Text::new(
            i18n.tr_with_args("review-character-count", &[("count", count.to_string().as_str())]),
        )
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

        let copy = button(Text::new(i18n.tr("review-copy")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
            .on_press(Message::CopyPressed);

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("review-editor-heading")).size(typography::TITLE_SM))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(input)
                    .push(copy),
            )
            .push(counter)
            .into()
    }

    fn action_row<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("review-export-json")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::ExportPressed),
            )
            .push(
                button(Text::new(i18n.tr("review-download-png")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::secondary)
                    .on_press(Message::DownloadPngPressed),
            )
            .push(
                button(Text::new(i18n.tr("review-upload-youtube")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::secondary)
                    .on_press(Message::UploadYoutubePressed),
            )
            .push(
                button(Text::new(i18n.tr("review-start-over")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::ghost)
                    .on_press(Message::StartOverPressed),
            )
            .into()
    }

    fn thumbnail_index(&self, id: ThumbnailId) -> usize {
        self.content
            .thumbnails
            .iter()
            .position(|thumb| thumb.id == id)
            .unwrap_or(0)
    }
}

/// The "Smart Remix" suggestion card shown under the caption editor.
fn tip_card<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mark = Container::new(
        Text::new("✨")
            .size(typography::BODY_LG)
            .color(palette::WHITE),
    )
    .padding(spacing::XS)
    .style(|_theme: &Theme| container::Style {
        background: Some(styles::container::brand_gradient(
            std::f32::consts::FRAC_PI_4,
            palette::PRIMARY_500,
            palette::ACCENT_600,
        )),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("review-tip-title")).size(typography::BODY))
        .push(
            Text::new(i18n.tr("review-tip-body"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(mark)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(|theme: &Theme| styles::container::selectable_card(theme, true))
    .into()
}

fn ctr_label(i18n: &I18n, variant: &ThumbnailVariant) -> String {
    i18n.tr_with_args(
        "review-predicted-ctr",
        &[("ctr", format!("{:.1}", variant.predicted_ctr).as_str())],
    )
}

/// Gradient pairs for the placeholder art, one per variant slot.
fn thumbnail_gradient(index: usize) -> (Color, Color) {
    const PAIRS: [(Color, Color); 5] = [
        (palette::PRIMARY_400, palette::ACCENT_600),
        (palette::GRAY_400, palette::GRAY_700),
        (palette::PRIMARY_500, palette::INFO_500),
        (palette::ACCENT_400, palette::PRIMARY_700),
        (palette::PRIMARY_800, palette::ERROR_500),
    ];
    PAIRS[index % PAIRS.len()]
}

/// Invisible wrapper so a whole card acts as one click target.
fn transparent_button(
    theme: &Theme,
    _status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    iced::widget::button::Style {
        background: None,
        text_color: theme.palette().text,
        border: iced::Border::default(),
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media;

    fn demo_state() -> State {
        let video = media::analyze_youtube_url("https://youtu.be/demo").expect("descriptor");
        State::new(video, GeneratedContent::mock(), None)
    }

    #[test]
    fn defaults_select_first_variants() {
        let state = demo_state();
        assert_eq!(state.selected_thumbnail(), ThumbnailId(1));
        assert_eq!(state.selected_caption(), CaptionId(1));
        assert!(state.caption_draft().starts_with("🚀 Build AI Apps"));
        assert!(!state.show_overlay);
    }

    #[test]
    fn overlay_text_is_independent_of_the_draft() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::OverlayToggled(true));
        let (_, _) = state.update(Message::OverlayTextChanged("WATCH THIS".to_string()));

        assert!(state.show_overlay);
        assert_eq!(state.overlay_text, "WATCH THIS");
        assert!(state.caption_draft().starts_with("🚀 Build AI Apps"));
    }

    #[test]
    fn selecting_a_caption_resets_the_draft() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::DraftChanged("my edit".to_string()));
        assert_eq!(state.caption_draft(), "my edit");

        let (event, _) = state.update(Message::CaptionSelected(CaptionId(2)));
        assert_eq!(event, Event::None);
        assert_eq!(state.selected_caption(), CaptionId(2));
        assert_eq!(
            state.caption_draft(),
            "Google Cloud AI Tutorial: Transform Your App Development Workflow"
        );
    }

    #[test]
    fn reselecting_the_same_caption_also_resets_the_draft() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::DraftChanged("scribbles".to_string()));
        let (_, _) = state.update(Message::CaptionSelected(CaptionId(1)));
        assert!(state.caption_draft().starts_with("🚀 Build AI Apps"));
    }

    #[test]
    fn unknown_variant_ids_are_ignored() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::ThumbnailSelected(ThumbnailId(99)));
        let (_, _) = state.update(Message::CaptionSelected(CaptionId(99)));

        assert_eq!(state.selected_thumbnail(), ThumbnailId(1));
        assert_eq!(state.selected_caption(), CaptionId(1));
    }

    #[test]
    fn copy_emits_the_current_draft() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::DraftChanged("copy me".to_string()));
        let (event, _) = state.update(Message::CopyPressed);
        assert_eq!(event, Event::CopyToClipboard("copy me".to_string()));
    }

    #[test]
    fn stub_actions_raise_info_toasts() {
        let mut state = demo_state();

        let (event, _) = state.update(Message::DownloadPngPressed);
        assert_eq!(event, Event::StubInvoked("notification-download-stub"));

        let (event, _) = state.update(Message::UploadYoutubePressed);
        assert_eq!(event, Event::StubInvoked("notification-upload-stub"));
    }

    #[test]
    fn completion_badge_and_tip_strings_are_localized() {
        let mut i18n = I18n::default();

        for locale in ["en-US", "fr"] {
            i18n.set_locale(locale.parse().expect("locale"));
            for key in ["review-complete-badge", "review-tip-title", "review-tip-body"] {
                let resolved = i18n.tr(key);
                assert!(
                    !resolved.starts_with("MISSING"),
                    "{key} unresolved in {locale}"
                );
            }
        }
    }

    #[test]
    fn start_over_requests_a_reset() {
        let mut state = demo_state();
        let (event, _) = state.update(Message::StartOverPressed);
        assert_eq!(event, Event::Reset);
    }

    #[test]
    fn successful_export_remembers_the_directory() {
        let mut state = demo_state();
        let path = PathBuf::from("/tmp/exports/thumbcap-export.json");

        let (event, _) = state.update(Message::ExportFinished(Ok(Some(path.clone()))));
        assert_eq!(event, Event::Exported(path));
        assert_eq!(
            state.last_export_dir,
            Some(PathBuf::from("/tmp/exports"))
        );
    }

    #[test]
    fn cancelled_export_is_silent() {
        let mut state = demo_state();
        let (event, _) = state.update(Message::ExportFinished(Ok(None)));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn snapshot_combines_current_selections() {
        let mut state = demo_state();
        let (_, _) = state.update(Message::ThumbnailSelected(ThumbnailId(3)));
        let (_, _) = state.update(Message::DraftChanged("edited".to_string()));

        let snapshot = state.build_snapshot().expect("snapshot");
        assert_eq!(snapshot.thumbnail.style, "Neon Glow");
        assert_eq!(snapshot.analytics.predicted_ctr, 9.1);
        assert_eq!(snapshot.caption, "edited");
    }
}
