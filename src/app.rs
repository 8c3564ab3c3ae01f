// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wizard screens.
//!
//! The `App` struct wires together the three steps (upload, generation,
//! review), localization, notifications, and persisted preferences. Screen
//! transitions happen here, driven by the events each screen returns from its
//! update function, so the wizard policy stays in one place.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::generation as generation_screen;
use crate::ui::notifications::{Manager, Notification, NotificationMessage, Toast};
use crate::ui::review as review_screen;
use crate::ui::stepper::{self, Step};
use crate::ui::theming::ThemeMode;
use crate::ui::upload as upload_screen;
use crate::ui::{design_tokens::spacing, header};
use iced::widget::{scrollable, stack, Column, Container};
use iced::{event, time, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state that bridges the wizard screens, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    upload: upload_screen::State,
    generation: generation_screen::State,
    review: Option<review_screen::State>,
    notifications: Manager,
    theme_mode: ThemeMode,
    last_export_dir: Option<PathBuf>,
}

/// Screens the user moves through, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Upload,
    Generation,
    Review,
}

impl Screen {
    fn step(self) -> Step {
        match self {
            Screen::Upload => Step::Upload,
            Screen::Generation => Step::Generate,
            Screen::Review => Step::Review,
        }
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload_screen::Message),
    Generation(generation_screen::Message),
    Review(review_screen::Message),
    Notification(NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Upload,
            upload: upload_screen::State::default(),
            generation: generation_screen::State::default(),
            review: None,
            notifications: Manager::new(),
            theme_mode: ThemeMode::System,
            last_export_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            last_export_dir: config.last_export_dir,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Drag-and-drop only matters on the upload screen
        if self.screen == Screen::Upload {
            subscriptions.push(event::listen_with(|event, _status, _window_id| {
                if let event::Event::Window(window_event) = event {
                    match window_event {
                        window::Event::FileHovered(_) => {
                            Some(Message::Upload(upload_screen::Message::DragEntered))
                        }
                        window::Event::FilesHoveredLeft => {
                            Some(Message::Upload(upload_screen::Message::DragLeft))
                        }
                        window::Event::FileDropped(path) => {
                            Some(Message::Upload(upload_screen::Message::FileDropped(path)))
                        }
                        _ => None,
                    }
                } else {
                    None
                }
            }));
        }

        // Animation frames while the pipeline is running
        if self.generation.is_running() {
            subscriptions.push(
                time::every(std::time::Duration::from_millis(100))
                    .map(|_| Message::Generation(generation_screen::Message::Tick)),
            );
        }

        // Auto-dismiss timers for visible toasts
        if self.notifications.has_notifications() {
            subscriptions.push(
                time::every(std::time::Duration::from_millis(500))
                    .map(|_| Message::Notification(NotificationMessage::Tick)),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(upload_message) => {
                let (event, task) = self.upload.update(upload_message);
                let task = task.map(Message::Upload);

                match event {
                    upload_screen::Event::None => task,
                    upload_screen::Event::Submitted(descriptor) => {
                        self.screen = Screen::Generation;
                        let start = self.generation.start(descriptor).map(Message::Generation);
                        Task::batch([task, start])
                    }
                }
            }
            Message::Generation(generation_message) => {
                let (event, task) = self.generation.update(generation_message);
                let task = task.map(Message::Generation);

                match event {
                    generation_screen::Event::None => task,
                    generation_screen::Event::Completed(content) => {
                        if let Some(video) = self.generation.descriptor().cloned() {
                            self.review = Some(review_screen::State::new(
                                video,
                                content,
                                self.last_export_dir.clone(),
                            ));
                            self.screen = Screen::Review;
                        }
                        task
                    }
                    generation_screen::Event::BackToUpload => {
                        // Screen-local input does not survive navigation
                        self.upload = upload_screen::State::default();
                        self.screen = Screen::Upload;
                        task
                    }
                }
            }
            Message::Review(review_message) => {
                let Some(review) = self.review.as_mut() else {
                    return Task::none();
                };
                let (event, task) = review.update(review_message);
                let task = task.map(Message::Review);

                match event {
                    review_screen::Event::None => task,
                    review_screen::Event::CopyToClipboard(text) => {
                        self.notifications
                            .push(Notification::success("notification-copied"));
                        Task::batch([task, iced::clipboard::write(text)])
                    }
                    review_screen::Event::Exported(path) => {
                        self.last_export_dir = path.parent().map(PathBuf::from);
                        let file = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        self.notifications.push(
                            Notification::success("notification-export-success")
                                .with_arg("file", file),
                        );
                        Task::batch([task, self.persist_preferences()])
                    }
                    review_screen::Event::ExportFailed(error) => {
                        self.notifications.push(
                            Notification::error("notification-export-failed")
                                .with_arg("reason", error.to_string()),
                        );
                        task
                    }
                    review_screen::Event::StubInvoked(key) => {
                        self.notifications.push(Notification::info(key));
                        task
                    }
                    review_screen::Event::Reset => {
                        self.review = None;
                        self.upload = upload_screen::State::default();
                        self.screen = Screen::Upload;
                        task
                    }
                }
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Upload => self.upload.view(&self.i18n).map(Message::Upload),
            Screen::Generation => self.generation.view(&self.i18n).map(Message::Generation),
            Screen::Review => match &self.review {
                Some(review) => review.view(&self.i18n).map(Message::Review),
                None => Container::new(iced::widget::text("")).into(),
            },
        };

        let content = Column::new()
            .spacing(spacing::MD)
            .push(header::view(&self.i18n))
            .push(stepper::view(self.screen.step(), &self.i18n))
            .push(
                Container::new(screen)
                    .width(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Center)
                    .padding([0.0, spacing::LG]),
            );

        let base = scrollable(content).width(Length::Fill).height(Length::Fill);

        let toasts =
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        stack([base.into(), toasts]).into()
    }

    fn persist_preferences(&self) -> Task<Message> {
        if cfg!(test) {
            return Task::none();
        }

        let mut cfg = config::load().unwrap_or_default();
        cfg.theme_mode = self.theme_mode;
        cfg.last_export_dir = self.last_export_dir.clone();

        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save config: {:?}", error);
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::PIPELINE;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn submit_demo_url(app: &mut App) {
        let _ = app.update(Message::Upload(upload_screen::Message::UrlChanged(
            "https://youtube.com/watch?v=demo".to_string(),
        )));
        let _ = app.update(Message::Upload(upload_screen::Message::UrlSubmitted));
    }

    fn run_pipeline_to_completion(app: &mut App) {
        let run = app.generation.run_id();
        for index in 0..PIPELINE.len() {
            let _ = app.update(Message::Generation(
                generation_screen::Message::TaskFinished { run, index },
            ));
        }
        let _ = app.update(Message::Generation(
            generation_screen::Message::ResultReady { run },
        ));
    }

    #[test]
    fn new_app_starts_on_upload() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags { lang: None });
            assert_eq!(app.screen, Screen::Upload);
            assert!(app.review.is_none());
            assert!(!app.generation.is_running());
        });
    }

    #[tokio::test]
    async fn url_submission_moves_to_generation() {
        let mut app = App::default();
        submit_demo_url(&mut app);

        assert_eq!(app.screen, Screen::Generation);
        assert!(app.generation.is_running());
    }

    #[tokio::test]
    async fn completed_pipeline_moves_to_review() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        run_pipeline_to_completion(&mut app);

        assert_eq!(app.screen, Screen::Review);
        let review = app.review.as_ref().expect("review state");
        assert!(review.caption_draft().starts_with("🚀 Build AI Apps"));
    }

    #[tokio::test]
    async fn back_from_generation_cancels_the_run() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        let old_run = app.generation.run_id();

        let _ = app.update(Message::Generation(generation_screen::Message::BackPressed));
        assert_eq!(app.screen, Screen::Upload);
        assert!(!app.generation.is_running());

        // A timer from the abandoned run must not resurrect the wizard
        let _ = app.update(Message::Generation(
            generation_screen::Message::ResultReady { run: old_run },
        ));
        assert_eq!(app.screen, Screen::Upload);
        assert!(app.review.is_none());
    }

    #[tokio::test]
    async fn back_from_generation_discards_upload_state() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        assert!(!app.upload.youtube_url().is_empty());

        let _ = app.update(Message::Generation(generation_screen::Message::BackPressed));
        assert_eq!(app.screen, Screen::Upload);
        assert!(app.upload.youtube_url().is_empty());
        assert!(app.upload.selected().is_none());
    }

    #[tokio::test]
    async fn stale_timers_do_not_advance_a_restarted_run() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        let old_run = app.generation.run_id();

        let _ = app.update(Message::Generation(generation_screen::Message::BackPressed));
        submit_demo_url(&mut app);

        let _ = app.update(Message::Generation(
            generation_screen::Message::TaskFinished {
                run: old_run,
                index: 0,
            },
        ));
        assert!(app.generation.is_running());
        assert_eq!(app.screen, Screen::Generation);
    }

    #[tokio::test]
    async fn start_over_resets_the_wizard() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        run_pipeline_to_completion(&mut app);
        assert_eq!(app.screen, Screen::Review);

        let _ = app.update(Message::Review(review_screen::Message::StartOverPressed));
        assert_eq!(app.screen, Screen::Upload);
        assert!(app.review.is_none());
        assert!(app.upload.selected().is_none());
    }

    #[tokio::test]
    async fn copy_pushes_a_success_toast() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        run_pipeline_to_completion(&mut app);

        let _ = app.update(Message::Review(review_screen::Message::CopyPressed));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[tokio::test]
    async fn stub_actions_push_info_toasts() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        run_pipeline_to_completion(&mut app);

        let _ = app.update(Message::Review(review_screen::Message::DownloadPngPressed));
        let _ = app.update(Message::Review(
            review_screen::Message::UploadYoutubePressed,
        ));
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[tokio::test]
    async fn successful_export_is_remembered_and_announced() {
        let mut app = App::default();
        submit_demo_url(&mut app);
        run_pipeline_to_completion(&mut app);

        let path = PathBuf::from("/tmp/exports/thumbcap-export.json");
        let _ = app.update(Message::Review(review_screen::Message::ExportFinished(Ok(
            Some(path),
        ))));

        assert_eq!(app.last_export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn review_messages_without_review_state_are_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Review(review_screen::Message::CopyPressed));
        assert_eq!(app.screen, Screen::Upload);
        assert_eq!(app.notifications.visible_count(), 0);
    }
}
