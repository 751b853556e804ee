//! Application State
//!
//! This module defines the main application state and initialization logic.
//! It implements the MVU (Model-View-Update) pattern's Controller component.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Process events from the roster feed thread (non-blocking)
//! 2. Turn keyboard and pointer input into UI commands
//! 3. Attach the focused stream to the surface when the view changed
//! 4. Render the stage (pure function of the state) and collect commands
//! 5. Handle UI commands (state mutations)

use super::binder::StageBinder;
use super::input;
use super::platform::{EguiClipboard, MaximizedFallback, ViewportFullscreen};
use crate::components::Toast;
use crate::config::AppConfig;
use crate::events::{FeedCommand, FeedEvent, UiCommand};
use crate::models::StreamHandle;
use crate::pages::{Stage, StageProps};
use egui::TextureHandle;
use logging::Logger;
use stage::{
    DisplaySettings, FullscreenEntry, PlaybackSettings, Session, StageView, StreamIdentity,
    VisibilityTimer, bind_playback,
};
use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

/// How often to redraw while frames are streaming in
const FRAME_REPAINT: Duration = Duration::from_millis(66);

/// Identity, stream instance and audio settings last handed to the binder.
type BoundKey = (Option<(StreamIdentity, StreamHandle)>, PlaybackSettings);

/// Main application state - MVU Controller
pub struct App {
    // Config
    pub(super) config: AppConfig,

    // Logger
    pub(super) logger: Logger,
    pub(super) playback_logger: Logger,

    // Stage
    pub(super) session: Session<StreamHandle>,
    pub(super) visibility: VisibilityTimer,
    pub(super) controls_hovered: bool,

    // Media
    pub(super) textures: HashMap<StreamHandle, TextureHandle>,
    pub(super) levels: HashMap<StreamHandle, f32>,
    pub(super) binder: StageBinder,
    pub(super) bound: Option<BoundKey>,

    // Platform
    pub(super) fullscreen: Vec<Box<dyn FullscreenEntry>>,
    pub(super) fullscreen_entry: Option<&'static str>,
    pub(super) clipboard: EguiClipboard,

    // UI State
    pub(super) current_toast: Option<Toast>,
    pub(super) settings_draft: Option<DisplaySettings>,
    pub(super) display_settings: DisplaySettings,
    pub(super) microphone_on: bool,

    // Feed Thread Communication
    pub(super) feed_cmd_tx: Sender<FeedCommand>,
    pub(super) feed_evt_rx: Receiver<FeedEvent>,
}

impl App {
    /// Create a new App instance with configuration and logger
    pub fn new(ctx: &egui::Context) -> Self {
        // Load application configuration
        let config = AppConfig::load();

        // Initialize logger from configuration
        let root_logger = match Logger::new(config.log_path.clone(), config.log_level) {
            Ok(logger) => logger.with_console(config.log_console),
            Err(e) => {
                eprintln!("Failed to initialize logger: {}", e);
                std::process::exit(1);
            }
        };
        let logger = root_logger.for_component("Frontend");

        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration loaded - room: {}, log_level: {:?}",
            config.room_id, config.log_level
        ));

        let (feed_cmd_tx, feed_cmd_rx) = channel();
        let (feed_evt_tx, feed_evt_rx) = channel();

        logger.info("[APP] Starting roster feed thread...");
        let feed_logger = root_logger.for_component("Roster");
        let feed_config = config.clone();
        std::thread::spawn(move || {
            crate::feed::run_feed_thread(feed_cmd_rx, feed_evt_tx, feed_config, feed_logger);
        });

        let fullscreen: Vec<Box<dyn FullscreenEntry>> = vec![
            Box::new(ViewportFullscreen::new(ctx.clone())),
            Box::new(MaximizedFallback::new(ctx.clone())),
        ];

        let display_settings = DisplaySettings {
            display_name: config.display_name.clone(),
            ..DisplaySettings::default()
        };

        let app = Self {
            session: Session::new(root_logger.for_component("Stage")),
            visibility: VisibilityTimer::mounted(config.controls_idle, Instant::now()),
            controls_hovered: false,
            textures: HashMap::new(),
            levels: HashMap::new(),
            binder: StageBinder::new(config.playback_failure_rate),
            bound: None,
            fullscreen,
            fullscreen_entry: None,
            clipboard: EguiClipboard::new(ctx.clone()),
            current_toast: None,
            settings_draft: None,
            display_settings,
            microphone_on: false,
            feed_cmd_tx,
            feed_evt_rx,
            playback_logger: root_logger.for_component("Playback"),
            logger: logger.clone(),
            config,
        };

        logger.info("[APP] Application initialized successfully");
        app
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- MVU UPDATE LOOP ---
        let now = Instant::now();

        // 1. Process all pending feed events
        while let Ok(event) = self.feed_evt_rx.try_recv() {
            self.handle_feed_event(ctx, event);
        }

        // 2. Keyboard and pointer input
        for command in input::collect_commands(ctx) {
            self.handle_ui_command(ctx, command, now);
        }

        // 3. Attach the focused stream if it changed
        let view = self.session.view();
        self.bind_if_changed(&view);

        // 4. Render the view and collect UI commands
        self.visibility.set_hovering(self.controls_hovered);
        self.visibility
            .set_dialog_open(self.settings_draft.is_some());
        let controls_visible = self.visibility.is_visible(now);

        if let Some(command) = self.render_view(ctx, &view, controls_visible) {
            self.handle_ui_command(ctx, command, now);
        }

        // 5. Render toast notification (if any)
        self.render_toast(ctx);

        // 6. Wake up for the next frame or when the controls should hide
        ctx.request_repaint_after(FRAME_REPAINT);
        if let Some(remaining) = self.visibility.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    /// Called when the app is about to close
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.info("[APP] Application shutting down...");

        self.visibility.teardown();
        let _ = self.feed_cmd_tx.send(FeedCommand::Shutdown);

        self.logger.info("[APP] Cleanup complete, goodbye!");
    }
}

impl App {
    /// Renders the stage and the settings dialog, returning any UI command
    fn render_view(
        &mut self,
        ctx: &egui::Context,
        view: &StageView<StreamHandle>,
        controls_visible: bool,
    ) -> Option<UiCommand> {
        let props = StageProps {
            room_id: &self.config.room_id,
            view,
            roster: self.session.roster(),
            textures: &self.textures,
            levels: &self.levels,
            surface: self.binder.surface(),
            controls_visible,
            show_thumbnails: self.display_settings.show_thumbnails,
            presenting: self.session.is_presenting(),
        };
        let output = Stage::show(ctx, &props);
        self.controls_hovered = output.controls_hovered;

        let mut command = output.command;
        if let Some(draft) = self.settings_draft.as_mut() {
            command = crate::pages::stage::render_settings_dialog(ctx, draft, self.microphone_on)
                .or(command);
        }
        command
    }

    /// Hands the view to the binder when the focused stream or its audio
    /// settings differ from what was last bound.
    fn bind_if_changed(&mut self, view: &StageView<StreamHandle>) {
        let key: BoundKey = (
            view.focused
                .as_ref()
                .map(|entry| (entry.identity.clone(), entry.handle)),
            view.settings,
        );
        if self.bound.as_ref() == Some(&key) {
            return;
        }
        self.bound = Some(key);

        if let Some(notification) = bind_playback(&mut self.binder, view, &self.playback_logger) {
            self.show_notification(notification);
        }
    }

    /// Renders the current toast notification if present
    fn render_toast(&mut self, ctx: &egui::Context) {
        if let Some(toast) = &self.current_toast
            && toast.show(ctx)
        {
            self.current_toast = None;
        }
    }

    /// Shows a notification from the stage as a toast
    pub(super) fn show_notification(&mut self, notification: stage::Notification) {
        self.current_toast = Some(Toast::from(notification));
    }
}
