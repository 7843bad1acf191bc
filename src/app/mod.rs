// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the Home and Video
//! screens.
//!
//! `App` owns the [`AppState`], the [`Router`] and the media picker, and
//! translates messages into side effects (picker dialogs, image decoding,
//! video playback). Views only ever see the state by reference.

mod message;
pub mod paths;
pub mod router;
pub mod state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use router::{Router, Screen};
pub use state::AppState;

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, Diagnostics};
use crate::i18n::fluent::I18n;
use crate::picker::{DialogLabels, MediaPicker, RfdPicker};
use crate::ui::home::ImageSlot;
use crate::video_player::PlaybackState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    state: AppState,
    router: Router,
    picker: Arc<dyn MediaPicker>,
    image_slot: ImageSlot,
    playback: PlaybackState,
    theme: Theme,
    diagnostics: Diagnostics,
    /// i18n key of a config warning shown on Home.
    config_warning: Option<&'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.router.current())
            .field("state", &self.state)
            .field("playback", &self.playback.status())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

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

    // iced 0.14 wants an Fn boot closure, the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and locale, then wires the native file dialog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let picker = Arc::new(RfdPicker::new(
            DialogLabels::from_i18n(&i18n),
            config.picker.start_directory.clone(),
        ));

        let mut app = Self::with_picker(&config, i18n, picker, flags.verbose);
        app.config_warning = config_warning;
        (app, Task::none())
    }

    /// Builds an `App` around an arbitrary picker. Nothing is loaded from
    /// disk, which makes this the entry point for headless tests.
    #[must_use]
    pub fn with_picker(
        config: &Config,
        i18n: I18n,
        picker: Arc<dyn MediaPicker>,
        verbose: bool,
    ) -> Self {
        let diagnostics = Diagnostics::new(
            BufferCapacity::new(config.diagnostics.buffer_capacity),
            verbose || config.diagnostics.echo_to_stderr,
        );

        Self {
            i18n,
            state: AppState::new(),
            router: Router::new(),
            picker,
            image_slot: ImageSlot::default(),
            playback: PlaybackState::new(config.video.autoplay, config.video.loop_enabled),
            theme: config.general.theme_mode.resolve(),
            diagnostics,
            config_warning: None,
        }
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (self.router.current(), self.playback.reference()) {
            (Screen::Video, Some(reference)) => {
                format!("{} - {app_name}", reference.display_name())
            }
            _ => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let video_sub =
            subscription::create_video_subscription(self.router.current(), &self.playback);

        Subscription::batch([event_sub, video_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            state: &mut self.state,
            router: &mut self.router,
            picker: &self.picker,
            image_slot: &mut self.image_slot,
            playback: &mut self.playback,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Home(message) => update::handle_home_message(&mut ctx, message),
            Message::Video(message) => update::handle_video_message(&mut ctx, message),
            Message::PickCompleted { ticket, outcome } => {
                update::handle_pick_completed(&mut ctx, ticket, outcome)
            }
            Message::ImageLoaded { reference, result } => {
                update::handle_image_loaded(&mut ctx, reference, result)
            }
            Message::VideoProbed { reference, result } => {
                update::handle_video_probed(&mut ctx, &reference, result)
            }
            Message::Playback { session, message } => {
                update::handle_playback(&mut ctx, session, message)
            }
            Message::BackRequested => update::handle_back(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.router.current(),
            state: &self.state,
            image_slot: &self.image_slot,
            playback: &self.playback,
            warning_key: self.config_warning,
        })
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    /// Navigation events the router has consumed.
    #[must_use]
    pub fn navigation_count(&self) -> usize {
        self.router.navigation_count()
    }

    #[must_use]
    pub fn image_slot(&self) -> &ImageSlot {
        &self.image_slot
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}
