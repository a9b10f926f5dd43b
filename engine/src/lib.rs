//! Application state for Task Hub.
//!
//! [`App`] owns the [`DemoShell`] plus everything the UI loop needs around it:
//! toasts, keyboard focus, presentation options and frame timing. The TUI crate
//! reads from it to render and calls into it in response to input.

mod animation;
mod config;
mod notifications;
mod preferences;
mod shell;

use std::time::{Duration, Instant};

pub use animation::EffectTimer;
pub use config::{AppConfig, ConfigError, NotificationsConfig, ShellConfig, config_path};
pub use notifications::{
    DEFAULT_AUTO_CLOSE, DEFAULT_ENTER_DURATION, DEFAULT_TOAST_LIMIT, NotificationSink, Toast,
    ToastId, ToastSettings, ToastStack,
};
pub use preferences::{
    DISPLAY_MODE_ENV, DisplayModeHints, DisplayModeSource, DisplayPreference, PreferenceError,
    PreferenceStore, resolve_display_mode,
};
pub use shell::DemoShell;
pub use taskhub_types::{
    AccentColor, DisplayMode, Focus, Icon, Notification, TaskCounter, UiOptions,
};

/// Everything needed to build an [`App`] without touching config files or the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub display_mode: DisplayMode,
    pub ui_options: UiOptions,
    pub toasts: ToastSettings,
    /// Where toggled display modes are saved. `None` keeps them in memory only.
    pub preferences: Option<PreferenceStore>,
}

impl Settings {
    /// Resolve settings from `~/.taskhub/config.toml`, the saved preference and
    /// the environment. Broken config or preference files are logged and skipped.
    #[must_use]
    pub fn from_environment() -> Self {
        let config = match ShellConfig::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "Using default config: {err}");
                None
            }
        };

        let preferences = PreferenceStore::default_location();
        let saved = preferences.as_ref().and_then(|store| match store.load() {
            Ok(pref) => pref.map(|p| p.display_mode),
            Err(err) => {
                tracing::warn!("Ignoring saved display preference: {err}");
                None
            }
        });

        let hints = DisplayModeHints {
            preference: saved,
            config: config.as_ref().and_then(ShellConfig::display_mode),
            ..DisplayModeHints::default()
        }
        .with_process_env();
        let (display_mode, source) = resolve_display_mode(&hints);
        tracing::info!(mode = %display_mode, ?source, "Resolved initial display mode");

        let ui_options = ShellConfig::ui_options(config.as_ref());
        Self {
            display_mode,
            ui_options,
            toasts: ShellConfig::toast_settings(config.as_ref()),
            preferences,
        }
    }
}

#[derive(Debug)]
pub struct App {
    shell: DemoShell,
    toasts: ToastStack,
    focus: Focus,
    ui_options: UiOptions,
    preferences: Option<PreferenceStore>,
    should_quit: bool,
    /// Frame timing for toast timers and effects.
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::from_environment())
    }

    /// Build from explicit settings. `reduced_motion` disables toast enter effects.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let toasts = if settings.ui_options.reduced_motion {
            ToastSettings {
                enter_duration: Duration::ZERO,
                ..settings.toasts
            }
        } else {
            settings.toasts
        };
        Self {
            shell: DemoShell::new(settings.display_mode),
            toasts: ToastStack::new(toasts),
            focus: Focus::default(),
            ui_options: settings.ui_options,
            preferences: settings.preferences,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    pub fn create_task(&mut self) {
        self.shell.create_task(&mut self.toasts);
    }

    /// Flip light/dark and remember the choice for the next launch.
    ///
    /// A failed save is logged; the toggle itself always takes effect.
    pub fn toggle_display_mode(&mut self) {
        self.shell.toggle_display_mode();
        let mode = self.shell.display_mode();
        if let Some(store) = &self.preferences
            && let Err(err) = store.save(mode)
        {
            tracing::warn!("Failed to save display preference: {err}");
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Press whichever control has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::ThemeToggle => self.toggle_display_mode(),
            Focus::CreateTask => self.create_task(),
        }
    }

    pub fn dismiss_latest_toast(&mut self) {
        self.toasts.dismiss_latest();
    }

    pub fn dismiss_all_toasts(&mut self) {
        self.toasts.dismiss_all();
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    pub fn advance_toasts(&mut self, delta: Duration) {
        self.toasts.advance(delta);
    }

    #[must_use]
    pub fn counter(&self) -> TaskCounter {
        self.shell.counter()
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.shell.display_mode()
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
