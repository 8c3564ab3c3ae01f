// SPDX-License-Identifier: MPL-2.0
//! Upload step: pick a local video file or paste a YouTube URL.
//!
//! Both paths produce a [`VideoDescriptor`] with synthesized demo metadata;
//! no media is decoded and no request is made. The screen owns its tab state,
//! the URL field, a pending file selection, and the drag-hover highlight.

use crate::error::{Error, InputError};
use crate::i18n::fluent::I18n;
use crate::media::{self, VideoDescriptor, VIDEO_EXTENSIONS};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task, Theme};
use std::path::PathBuf;

/// Which input mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    File,
    YoutubeUrl,
}

/// Upload screen state.
#[derive(Debug, Default)]
pub struct State {
    tab: Tab,
    youtube_url: String,
    selected: Option<VideoDescriptor>,
    drag_hover: bool,
    error: Option<InputError>,
}

/// Messages handled by the upload screen.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    UrlChanged(String),
    UrlSubmitted,
    BrowsePressed,
    FileChosen(Option<PathBuf>),
    FileDropped(PathBuf),
    DragEntered,
    DragLeft,
    ClearPressed,
    ContinuePressed,
}

/// Effects the upload screen asks its parent to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The user confirmed an input; move on to the generation step.
    Submitted(VideoDescriptor),
}

impl State {
    /// Returns the pending selection, if any.
    pub fn selected(&self) -> Option<&VideoDescriptor> {
        self.selected.as_ref()
    }

    /// Returns the active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the current contents of the URL field.
    pub fn youtube_url(&self) -> &str {
        &self.youtube_url
    }

    /// Returns the current inline validation error, if any.
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                self.error = None;
                (Event::None, Task::none())
            }
            Message::UrlChanged(url) => {
                self.youtube_url = url;
                self.error = None;
                (Event::None, Task::none())
            }
            Message::UrlSubmitted => match media::analyze_youtube_url(&self.youtube_url) {
                Ok(descriptor) => (Event::Submitted(descriptor), Task::none()),
                Err(err) => {
                    self.set_error(err);
                    (Event::None, Task::none())
                }
            },
            Message::BrowsePressed => {
                let task = Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .add_filter("Video", VIDEO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::FileChosen,
                );
                (Event::None, task)
            }
            Message::FileChosen(Some(path)) | Message::FileDropped(path) => {
                self.drag_hover = false;
                match media::describe_file(&path) {
                    Ok(descriptor) => {
                        self.error = None;
                        self.selected = Some(descriptor);
                    }
                    Err(err) => self.set_error(err),
                }
                (Event::None, Task::none())
            }
            Message::FileChosen(None) => (Event::None, Task::none()),
            Message::DragEntered => {
                self.drag_hover = true;
                (Event::None, Task::none())
            }
            Message::DragLeft => {
                self.drag_hover = false;
                (Event::None, Task::none())
            }
            Message::ClearPressed => {
                self.selected = None;
                self.error = None;
                (Event::None, Task::none())
            }
            Message::ContinuePressed => match self.selected.take() {
                Some(descriptor) => (Event::Submitted(descriptor), Task::none()),
                None => (Event::None, Task::none()),
            },
        }
    }

    fn set_error(&mut self, err: Error) {
        if let Error::Input(input) = err {
            self.error = Some(input);
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("upload-title")).size(typography::TITLE_LG);
        let subtitle = Text::new(i18n.tr("upload-subtitle"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            });

        let tabs = Row::new()
            .spacing(spacing::XS)
            .push(self.tab_button(i18n, Tab::File, "upload-tab-file"))
            .push(self.tab_button(i18n, Tab::YoutubeUrl, "upload-tab-url"));

        let body: Element<'a, Message> = match self.tab {
            Tab::File => self.file_panel(i18n),
            Tab::YoutubeUrl => self.url_panel(i18n),
        };

        let mut content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(tabs)
            .push(body);

        if let Some(err) = &self.error {
            content = content.push(error_line(err, i18n));
        }

        content = content.push(stats_banner(i18n));

        Container::new(content)
            .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::panel)
            .into()
    }

    fn tab_button<'a>(&self, i18n: &I18n, tab: Tab, key: &str) -> Element<'a, Message> {
        let label = Text::new(i18n.tr(key)).size(typography::BODY);
        let style = if self.tab == tab {
            styles::button::selected
        } else {
            styles::button::ghost
        };

        button(label)
            .padding([spacing::XS, spacing::MD])
            .style(style)
            .on_press(Message::TabSelected(tab))
            .into()
    }

    fn file_panel<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match &self.selected {
            Some(descriptor) => selected_file_card(descriptor, i18n),
            None => self.drop_zone(i18n),
        }
    }

    fn drop_zone<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let hint_key = if self.drag_hover {
            "upload-drop-release"
        } else {
            "upload-drop-hint"
        };

        let inner = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr(hint_key)).size(typography::BODY_LG))
            .push(
                Text::new(i18n.tr("upload-drop-formats"))
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            )
            .push(
                button(Text::new(i18n.tr("upload-browse")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::BrowsePressed),
            );

        let highlighted = self.drag_hover;
        Container::new(inner)
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(alignment::Horizontal::Center)
            .style(move |theme: &Theme| styles::container::drop_zone(theme, highlighted))
            .into()
    }

    fn url_panel<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("upload-url-placeholder"), &self.youtube_url)
            .on_input(Message::UrlChanged)
            .on_submit(Message::UrlSubmitted)
            .padding(spacing::SM)
            .size(typography::BODY_LG);

        let can_analyze = !self.youtube_url.trim().is_empty();
        let analyze = button(Text::new(i18n.tr("upload-url-analyze")).size(typography::BODY))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .on_press_maybe(can_analyze.then_some(Message::UrlSubmitted));

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(analyze)
            .into()
    }
}

fn selected_file_card<'a>(descriptor: &'a VideoDescriptor, i18n: &'a I18n) -> Element<'a, Message> {
    let mut details = Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(Text::new(descriptor.duration.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(palette::PRIMARY_500)),
        );

    if let Some(size) = descriptor.size_label() {
        details = details.push(
            Container::new(Text::new(size).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge(palette::INFO_500)),
        );
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("upload-clear")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::ghost)
                .on_press(Message::ClearPressed),
        )
        .push(
            button(Text::new(i18n.tr("upload-continue")).size(typography::BODY))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ContinuePressed),
        );

    let card = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(descriptor.title.clone()).size(typography::TITLE_SM))
        .push(details)
        .push(actions);

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .style(|theme: &Theme| styles::container::selectable_card(theme, true))
        .into()
}

fn error_line<'a>(err: &InputError, i18n: &'a I18n) -> Element<'a, Message> {
    let message = match err {
        InputError::UnsupportedExtension(ext) => {
            i18n.tr_with_args(err.i18n_key(), &[("ext", ext.as_str())])
        }
        _ => i18n.tr(err.i18n_key()),
    };

    Text::new(message)
        .size(typography::BODY_SM)
        .color(palette::ERROR_500)
        .into()
}

fn stats_banner<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let stat = |value_key: &str, label_key: &str| -> Element<'a, Message> {
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr(value_key))
                    .size(typography::TITLE_SM)
                    .color(palette::PRIMARY_500),
            )
            .push(
                Text::new(i18n.tr(label_key))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            )
            .into()
    };

    Row::new()
        .spacing(spacing::XXL)
        .push(stat("upload-stat-faster-value", "upload-stat-faster-label"))
        .push(stat("upload-stat-speed-value", "upload-stat-speed-label"))
        .push(stat("upload-stat-clicks-value", "upload-stat-clicks-label"))
        .into()
}
