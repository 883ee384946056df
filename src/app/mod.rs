// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the domains (session, comparison,
//! localization, notifications) and translates messages into side effects
//! like dialogs, file loading, and the remote processing call. This file
//! intentionally keeps policy decisions (window sizing, theme, what the
//! tick drives) close to the main loop so user-facing behavior is easy to
//! audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::ImageAsset;
use crate::remote::{GeminiClient, ImageProcessor};
use crate::session::UploadSession;
use crate::ui::compare;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state bridging the session, the comparison view,
/// localization, and toast notifications.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: UploadSession,
    compare: compare::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Remote processing port. Behind a trait so tests never touch the
    /// network.
    processor: Arc<dyn ImageProcessor>,
    /// Current spinner angle in radians, advanced by the tick.
    spinner_rotation: f32,
    /// Whether a file drag is hovering over the window.
    file_hovering: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", &self.session.status())
            .field("has_image", &self.session.original().is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 540;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Spinner advance per tick. Roughly one full turn per second at the
/// 100 ms tick rate.
const SPINNER_STEP_RADIANS: f32 = 0.6;

/// Builds the window settings
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
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            session: UploadSession::default(),
            compare: compare::State::new(),
            notifications: notifications::Manager::new(),
            processor: Arc::new(GeminiClient::new(None, config::DEFAULT_MODEL)),
            spinner_rotation: 0.0,
            file_hovering: false,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// loading of the image passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(err) => {
                log::warn!("Failed to load config: {err}");
                (Config::default(), true)
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);
        let processor: Arc<dyn ImageProcessor> =
            Arc::new(GeminiClient::from_env(config.model_name()));

        let mut app = App {
            i18n,
            config,
            processor,
            ..Self::default()
        };

        if config_warning {
            app.notifications.push(notifications::Notification::warning(
                "notification-config-warning",
            ));
        }

        let task = match flags.file_path {
            Some(path_str) => update::load_file(
                app.config.max_upload_bytes(),
                std::path::PathBuf::from(path_str),
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.session.original().and_then(ImageAsset::file_name) {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.session.is_processing(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            session: &mut self.session,
            compare: &mut self.compare,
            notifications: &mut self.notifications,
            processor: &self.processor,
        };

        match message {
            Message::OpenFileDialog => update::handle_open_file_dialog(),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&ctx, path)
            }
            Message::FileDropped(path) => {
                self.file_hovering = false;
                update::handle_file_dropped(&ctx, path)
            }
            Message::FileHovered => {
                self.file_hovering = true;
                Task::none()
            }
            Message::FileHoverLeft => {
                self.file_hovering = false;
                Task::none()
            }
            Message::FileLoaded(result) => update::handle_file_loaded(&mut ctx, result),
            Message::InstructionChanged(text) => {
                ctx.session.set_instruction(text);
                Task::none()
            }
            Message::StartProcessing => update::handle_start_processing(&mut ctx),
            Message::ProcessingCompleted { ticket, result } => {
                update::handle_processing_completed(&mut ctx, ticket, result)
            }
            Message::Compare(compare_message) => {
                ctx.compare.handle(compare_message);
                Task::none()
            }
            Message::SaveRequested => update::handle_save_requested(&ctx),
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&ctx, path),
            Message::SaveCompleted(result) => update::handle_save_completed(&mut ctx, result),
            Message::Reset => update::handle_reset(&mut ctx),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                if ctx.session.is_processing() {
                    self.spinner_rotation =
                        (self.spinner_rotation + SPINNER_STEP_RADIANS) % std::f32::consts::TAU;
                }

                // Tick notification manager to handle auto-dismiss
                ctx.notifications.tick();

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            session: &self.session,
            compare: &self.compare,
            notifications: &self.notifications,
            file_hovering: self.file_hovering,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
