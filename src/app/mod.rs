//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Tab`] / [`Control`] - which control panel tab and row has focus
//! - [`EditTarget`] - inline text editing of a state field
//! - [`AppMessage`] - messages for async communication
//!
//! The [`App`] owns the one [`CardState`] record for the whole session plus
//! the transient [`FetchedContent`], and mediates every mutation.

mod actions;
mod handlers;
mod messages;

pub use messages::AppMessage;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::config::Config;
use crate::quran::QuranClient;
use crate::state::{CardState, FetchedContent};

/// How long a notice stays up, in 16ms ticks (~5 seconds).
const NOTICE_TICKS: u64 = 300;

/// Control panel tabs, mirroring the three sections of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Content,
    Style,
    Background,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Content, Tab::Style, Tab::Background];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Content => "Content",
            Tab::Style => "Style",
            Tab::Background => "Background",
        }
    }

    fn index(self) -> usize {
        match self {
            Tab::Content => 0,
            Tab::Style => 1,
            Tab::Background => 2,
        }
    }

    /// The focusable rows of this tab, in display order.
    pub fn controls(self) -> &'static [Control] {
        match self {
            Tab::Content => &[
                Control::Chapter,
                Control::Verse,
                Control::Translation,
                Control::Load,
                Control::Random,
                Control::SourceText,
                Control::TranslationText,
                Control::ShowSource,
                Control::ShowTranslation,
            ],
            Tab::Style => &[
                Control::Format,
                Control::SourceFontSize,
                Control::TranslationFontSize,
                Control::Padding,
                Control::LineHeight,
                Control::TextColor,
            ],
            Tab::Background => &[
                Control::BackgroundModeToggle,
                Control::GradientStart,
                Control::GradientEnd,
                Control::GradientPresets,
                Control::BackgroundImages,
            ],
        }
    }
}

/// One focusable row in the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    // Content tab
    Chapter,
    Verse,
    Translation,
    Load,
    Random,
    SourceText,
    TranslationText,
    ShowSource,
    ShowTranslation,
    // Style tab
    Format,
    SourceFontSize,
    TranslationFontSize,
    Padding,
    LineHeight,
    TextColor,
    // Background tab
    BackgroundModeToggle,
    GradientStart,
    GradientEnd,
    GradientPresets,
    BackgroundImages,
}

/// Which state field an inline edit session is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Verse,
    SourceText,
    TranslationText,
    TextColor,
    GradientStart,
    GradientEnd,
}

/// Severity of the transient notice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient message shown at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: u64,
}

/// Main application state.
pub struct App {
    /// The single source of truth for all card parameters.
    pub state: CardState,
    /// Fetched (and subsequently user-editable) verse text.
    pub content: FetchedContent,
    /// Active control panel tab.
    pub tab: Tab,
    /// Selected row per tab, indexed by `Tab::index`.
    selected: [usize; 3],
    /// Active inline edit session, if any.
    pub editing: Option<EditTarget>,
    /// Value to restore if the edit session is cancelled.
    edit_backup: String,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// Draw on the next loop iteration.
    pub needs_redraw: bool,
    /// Tick counter for the spinner and notice expiry.
    pub tick_count: u64,
    /// Transient notice, if any.
    pub notice: Option<Notice>,
    /// True while a card export is in flight; gates re-entrant exports.
    pub downloading: bool,
    /// Path of the most recent successful export.
    pub last_export: Option<PathBuf>,
    /// Picker cursor over the gradient presets.
    pub gradient_index: usize,
    /// Picker cursor over the background URLs.
    pub background_index: usize,
    /// Outstanding fetch calls; the loading flag derives from this.
    pending_fetches: u8,
    /// Monotonically increasing token for fetch sequences.
    fetch_token: u64,
    /// Verse service client, shared with spawned tasks.
    pub client: Arc<QuranClient>,
    /// Directory exports are written into.
    pub output_dir: PathBuf,
    /// Sender for async task results.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app from loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let client = match &config.api_base_url {
            Some(base) => QuranClient::with_base_url(base.clone()),
            None => QuranClient::new(),
        };

        let mut state = CardState::new();
        state.set_translation(config.default_translation.clone());

        Self {
            state,
            content: FetchedContent::default(),
            tab: Tab::Content,
            selected: [0; 3],
            editing: None,
            edit_backup: String::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            notice: None,
            downloading: false,
            last_export: None,
            gradient_index: 0,
            background_index: 0,
            pending_fetches: 0,
            fetch_token: 0,
            client: Arc::new(client),
            output_dir: config.resolve_output_dir(),
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn new() -> Self {
        Self::with_config(&Config::load())
    }

    /// True while either of the two verse fetches is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Increment the tick counter and expire the notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(notice) = &self.notice {
            if self.tick_count >= notice.expires_at {
                self.notice = None;
                self.mark_dirty();
            }
        }
        // The spinner animates while work is in flight
        if self.is_loading() || self.downloading {
            self.mark_dirty();
        }
    }

    pub fn set_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at: self.tick_count + NOTICE_TICKS,
        });
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// The currently focused control row.
    pub fn focused_control(&self) -> Control {
        let controls = self.tab.controls();
        controls[self.selected[self.tab.index()].min(controls.len() - 1)]
    }

    /// Index of the focused row within the active tab.
    pub fn focused_index(&self) -> usize {
        self.selected[self.tab.index()].min(self.tab.controls().len() - 1)
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.editing = None;
    }

    pub fn next_tab(&mut self) {
        let next = (self.tab.index() + 1) % Tab::ALL.len();
        self.set_tab(Tab::ALL[next]);
    }

    pub fn prev_tab(&mut self) {
        let prev = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.set_tab(Tab::ALL[prev]);
    }

    pub fn select_next(&mut self) {
        let len = self.tab.controls().len();
        let slot = &mut self.selected[self.tab.index()];
        *slot = (*slot + 1) % len;
    }

    pub fn select_prev(&mut self) {
        let len = self.tab.controls().len();
        let slot = &mut self.selected[self.tab.index()];
        *slot = (*slot + len - 1) % len;
    }

    // ------------------------------------------------------------------
    // Async message handling
    // ------------------------------------------------------------------

    /// Apply one message from a spawned task. Called by the event loop (and
    /// directly by tests).
    pub fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SourceLoaded { token, text } => {
                self.fetch_resolved();
                if token == self.fetch_token {
                    self.content.source_text = text;
                } else {
                    debug!("discarding stale source result (token {})", token);
                }
            }
            AppMessage::TranslationLoaded { token, text } => {
                self.fetch_resolved();
                if token == self.fetch_token {
                    self.content.translation_text = text;
                } else {
                    debug!("discarding stale translation result (token {})", token);
                }
            }
            AppMessage::FetchFailed { token, error } => {
                self.fetch_resolved();
                if token == self.fetch_token {
                    self.set_notice(NoticeKind::Error, error.user_message());
                } else {
                    debug!("discarding stale fetch error (token {}): {}", token, error);
                }
            }
            AppMessage::ExportFinished { path } => {
                self.downloading = false;
                self.set_notice(
                    NoticeKind::Info,
                    format!("Saved {} - press o to open", path.display()),
                );
                self.last_export = Some(path);
            }
            AppMessage::ExportFailed { error } => {
                self.downloading = false;
                self.set_notice(NoticeKind::Error, error.user_message());
            }
        }
        self.mark_dirty();
    }

    fn fetch_resolved(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
    }

    /// Current fetch token. Exposed for tests that fabricate messages.
    pub fn fetch_token(&self) -> u64 {
        self.fetch_token
    }

    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_token += 1;
        self.fetch_token
    }

    pub(crate) fn fetch_issued(&mut self) {
        self.pending_fetches += 1;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
