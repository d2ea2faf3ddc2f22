//! Card view state - the single source of truth for everything the user can
//! adjust.
//!
//! One [`CardState`] record is created at startup and mutated in place by the
//! UI thread for the whole session. Mutations go through the `set_*` methods
//! so range invariants hold between calls: font sizes stay in
//! [`FONT_SIZE_MIN`], [`FONT_SIZE_MAX`] and padding in `0..=`[`PADDING_MAX`].
//! Verse ids are stored raw; their range check against the chapter table is
//! advisory (the input hint and the remote service are the enforcement
//! points).

use rand::Rng;

use crate::data::{chapter_by_id, Chapter, CHAPTERS};

/// Inclusive lower bound for both font sizes, in export pixels.
pub const FONT_SIZE_MIN: u16 = 8;
/// Inclusive upper bound for both font sizes.
pub const FONT_SIZE_MAX: u16 = 100;
/// Inclusive upper bound for card padding.
pub const PADDING_MAX: u16 = 100;

/// Named layout preset mapping to a fixed width:height ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutFormat {
    /// 1:1, the Instagram post shape.
    #[default]
    Square,
    /// 9:16 vertical story shape.
    Tall,
    /// 16:9 landscape shape.
    Wide,
}

impl LayoutFormat {
    /// Width divided by height for this format.
    pub fn aspect_ratio(self) -> f32 {
        match self {
            LayoutFormat::Square => 1.0,
            LayoutFormat::Tall => 9.0 / 16.0,
            LayoutFormat::Wide => 16.0 / 9.0,
        }
    }

    /// Short description shown under the preview.
    pub fn hint(self) -> &'static str {
        match self {
            LayoutFormat::Square => "1:1 Square Format",
            LayoutFormat::Tall => "9:16 Story Format",
            LayoutFormat::Wide => "16:9 Landscape Format",
        }
    }

    /// Cycle through the three formats in display order.
    pub fn next(self) -> Self {
        match self {
            LayoutFormat::Square => LayoutFormat::Tall,
            LayoutFormat::Tall => LayoutFormat::Wide,
            LayoutFormat::Wide => LayoutFormat::Square,
        }
    }
}

/// Which background the card renders. Both the gradient colors and the image
/// URL persist in state; the inactive one is simply ignored at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundMode {
    #[default]
    Gradient,
    Image,
}

/// Partial style update merged by [`CardState::set_style`].
///
/// Only the populated fields change; numeric fields are clamped to their
/// documented ranges on the way in.
#[derive(Debug, Clone, Default)]
pub struct StyleUpdate {
    pub source_font_size: Option<u16>,
    pub translation_font_size: Option<u16>,
    pub padding: Option<u16>,
    pub line_height: Option<f32>,
    pub text_color: Option<String>,
    pub gradient_start: Option<String>,
    pub gradient_end: Option<String>,
    pub background_mode: Option<BackgroundMode>,
    pub background_image_url: Option<String>,
}

/// All user-adjustable card parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    /// Chapter id as entered/selected; references the chapter table.
    pub chapter_id: String,
    /// Verse id as a raw string. Empty until first selection.
    pub verse_id: String,
    /// Translation edition id; empty means "no translation requested".
    pub translation_id: String,
    pub layout_format: LayoutFormat,
    pub source_font_size: u16,
    pub translation_font_size: u16,
    pub padding: u16,
    /// Line height multiplier, always > 0.
    pub line_height: f32,
    pub show_source: bool,
    pub show_translation: bool,
    pub text_color: String,
    pub gradient_start: String,
    pub gradient_end: String,
    pub background_mode: BackgroundMode,
    pub background_image_url: String,
    /// Fixed export width override from the earliest iteration of the app.
    /// `None` means the width is derived from the layout format.
    pub card_width_px: Option<u32>,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            chapter_id: "1".to_string(),
            verse_id: String::new(),
            translation_id: "en.asad".to_string(),
            layout_format: LayoutFormat::Square,
            source_font_size: 16,
            translation_font_size: 16,
            padding: 16,
            line_height: 1.4,
            show_source: true,
            show_translation: true,
            text_color: "#FFFFFF".to_string(),
            gradient_start: "#00D8FF".to_string(),
            gradient_end: "#BD34FE".to_string(),
            background_mode: BackgroundMode::Gradient,
            background_image_url: crate::data::BACKGROUNDS[0].to_string(),
            card_width_px: None,
        }
    }
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chapter currently referenced by `chapter_id`, if it resolves.
    pub fn selected_chapter(&self) -> Option<&'static Chapter> {
        chapter_by_id(&self.chapter_id)
    }

    /// Upper bound hint for the verse input, from the chapter table.
    pub fn max_verse_hint(&self) -> Option<u16> {
        self.selected_chapter().map(|c| c.verse_count)
    }

    /// Advisory range check: does `verse_id` parse and land inside the
    /// selected chapter? Never used to reject input, only to hint.
    pub fn verse_in_range(&self) -> bool {
        match (self.verse_id.parse::<u16>(), self.max_verse_hint()) {
            (Ok(v), Some(max)) => (1..=max).contains(&v),
            _ => false,
        }
    }

    /// Set the chapter id. Does not touch `verse_id` even if it is now out
    /// of range; the range hint and the remote service deal with that.
    pub fn set_chapter(&mut self, id: impl Into<String>) {
        self.chapter_id = id.into();
    }

    /// Set the verse id as a raw string.
    pub fn set_verse(&mut self, id: impl Into<String>) {
        self.verse_id = id.into();
    }

    /// Set the translation edition. Empty is a meaningful value: no
    /// translation is fetched or shown.
    pub fn set_translation(&mut self, id: impl Into<String>) {
        self.translation_id = id.into();
    }

    pub fn set_layout_format(&mut self, format: LayoutFormat) {
        self.layout_format = format;
    }

    /// Derived numeric aspect ratio of the current format.
    pub fn aspect_ratio(&self) -> f32 {
        self.layout_format.aspect_ratio()
    }

    /// Merge a partial style update, clamping numeric fields to their
    /// documented ranges.
    pub fn set_style(&mut self, update: StyleUpdate) {
        if let Some(size) = update.source_font_size {
            self.source_font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        if let Some(size) = update.translation_font_size {
            self.translation_font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        }
        if let Some(padding) = update.padding {
            self.padding = padding.min(PADDING_MAX);
        }
        if let Some(line_height) = update.line_height {
            if line_height > 0.0 {
                self.line_height = line_height;
            }
        }
        if let Some(color) = update.text_color {
            self.text_color = color;
        }
        if let Some(color) = update.gradient_start {
            self.gradient_start = color;
        }
        if let Some(color) = update.gradient_end {
            self.gradient_end = color;
        }
        if let Some(mode) = update.background_mode {
            self.background_mode = mode;
        }
        if let Some(url) = update.background_image_url {
            self.background_image_url = url;
        }
    }

    pub fn toggle_show_source(&mut self) {
        self.show_source = !self.show_source;
    }

    pub fn toggle_show_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    /// Pick a uniformly random chapter, then a uniformly random verse inside
    /// it, and store both. Returns the picked `(chapter, verse)` pair so the
    /// caller can kick off the fetch sequence.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (&'static Chapter, u16) {
        let chapter = &CHAPTERS[rng.gen_range(0..CHAPTERS.len())];
        let verse = rng.gen_range(1..=chapter.verse_count);
        self.chapter_id = chapter.number.to_string();
        self.verse_id = verse.to_string();
        (chapter, verse)
    }
}

/// Text fetched from the remote service.
///
/// Fetched values are a seed, not an immutable source of truth: the user can
/// edit both fields afterwards, and a chapter/verse change leaves them alone
/// until the next fetch completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedContent {
    pub source_text: String,
    pub translation_text: String,
}
