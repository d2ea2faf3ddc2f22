//! Terminal approximation of the card.
//!
//! The preview paints the same state the exporter rasterizes: a box shaped
//! by the aspect ratio (terminal cells are roughly twice as tall as wide, so
//! the column count is doubled), the gradient as per-column background
//! colors, the text blocks centered, and the footer caption. Image-mode
//! backgrounds cannot be shown in cells; they render as a dark fill with the
//! URL tail, which is enough to judge the composition.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::app::App;
use crate::state::BackgroundMode;

use super::helpers::{hex_to_color, hex_to_rgb, truncate_start, wrap_text};
use super::theme;

/// Braille spinner frames, advanced by the app tick counter.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rough mapping from style pixels to terminal columns for padding.
const PX_PER_COLUMN: u16 = 10;

pub struct CardPreview<'a> {
    pub app: &'a App,
}

impl CardPreview<'_> {
    /// Largest card rect with the state's aspect ratio that fits `area`,
    /// centered. Cell geometry: a column is about half a row tall.
    fn card_rect(&self, area: Rect) -> Rect {
        let ratio = self.app.state.aspect_ratio();
        if area.width < 2 || area.height < 2 {
            return area;
        }
        let mut height = area.height;
        let mut width = ((height as f32) * 2.0 * ratio).round() as u16;
        if width > area.width {
            width = area.width;
            height = ((width as f32) / (2.0 * ratio)).round().max(1.0) as u16;
        }
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    fn paint_background(&self, card: Rect, buf: &mut Buffer) {
        let state = &self.app.state;
        match state.background_mode {
            BackgroundMode::Gradient => {
                let start = hex_to_rgb(&state.gradient_start).unwrap_or((0, 0, 0));
                let end = hex_to_rgb(&state.gradient_end).unwrap_or((0, 0, 0));
                let span = card.width.max(2) - 1;
                for dx in 0..card.width {
                    let t = dx as f32 / span as f32;
                    let color = ratatui::style::Color::Rgb(
                        lerp(start.0, end.0, t),
                        lerp(start.1, end.1, t),
                        lerp(start.2, end.2, t),
                    );
                    for dy in 0..card.height {
                        if let Some(cell) = buf.cell_mut((card.x + dx, card.y + dy)) {
                            cell.set_symbol(" ");
                            cell.set_bg(color);
                        }
                    }
                }
            }
            BackgroundMode::Image => {
                for dx in 0..card.width {
                    for dy in 0..card.height {
                        if let Some(cell) = buf.cell_mut((card.x + dx, card.y + dy)) {
                            cell.set_symbol(" ");
                            cell.set_bg(ratatui::style::Color::Rgb(40, 40, 48));
                        }
                    }
                }
                let label = truncate_start(
                    &state.background_image_url,
                    card.width.saturating_sub(2) as usize,
                );
                let x = card.x + (card.width.saturating_sub(label.len() as u16)) / 2;
                buf.set_string(
                    x,
                    card.y,
                    label,
                    Style::default().fg(theme::COLOR_DIM),
                );
            }
        }
    }

    fn paint_text(&self, card: Rect, buf: &mut Buffer) {
        let app = self.app;
        let state = &app.state;
        let fg = hex_to_color(&state.text_color);

        let pad_cols = (state.padding / PX_PER_COLUMN).min(card.width / 3);
        let text_width = card.width.saturating_sub(2 + pad_cols * 2).max(1) as usize;

        let source_lines = if state.show_source && !app.content.source_text.is_empty() {
            wrap_text(&app.content.source_text, text_width)
        } else {
            Vec::new()
        };
        let translation_lines =
            if state.show_translation && !app.content.translation_text.is_empty() {
                wrap_text(&app.content.translation_text, text_width)
            } else {
                Vec::new()
            };

        let gap = usize::from(!source_lines.is_empty() && !translation_lines.is_empty());
        let block_height = source_lines.len() + gap + translation_lines.len();
        let visible = block_height.min(card.height.saturating_sub(2) as usize);
        let mut y = card.y + (card.height.saturating_sub(visible as u16)) / 2;

        let style = Style::default().fg(fg);
        let spacer = String::new();
        for line in source_lines
            .iter()
            .chain(std::iter::repeat(&spacer).take(gap))
            .chain(translation_lines.iter())
            .take(visible)
        {
            let width = unicode_width::UnicodeWidthStr::width(line.as_str()) as u16;
            let x = card.x + (card.width.saturating_sub(width)) / 2;
            buf.set_string(x, y, line, style);
            y += 1;
        }

        // Footer caption, pinned to the bottom edge of the card
        if let Some(chapter) = state.selected_chapter() {
            let caption = format!("[ {} ] [ {} ]", state.verse_id, chapter.name);
            let width = unicode_width::UnicodeWidthStr::width(caption.as_str()) as u16;
            let x = card.x + (card.width.saturating_sub(width)) / 2;
            let y = card.y + card.height.saturating_sub(1);
            buf.set_string(x, y, caption, style);
        }
    }

    fn paint_overlay(&self, card: Rect, buf: &mut Buffer) {
        let app = self.app;
        if !app.is_loading() && !app.downloading {
            return;
        }
        let frame = SPINNER[(app.tick_count / 4) as usize % SPINNER.len()];
        let label = if app.downloading {
            format!("{} Exporting…", frame)
        } else {
            format!("{} Loading…", frame)
        };
        let width = unicode_width::UnicodeWidthStr::width(label.as_str()) as u16;
        let x = card.x + (card.width.saturating_sub(width)) / 2;
        let y = card.y + card.height / 2;
        buf.set_string(x, y, label, Style::default().fg(theme::COLOR_BUSY));
    }
}

impl Widget for CardPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        // Bottom line of the panel shows the format hint
        let hint_y = area.y + area.height - 1;
        let card_area = Rect::new(area.x, area.y, area.width, area.height - 1);

        let card = self.card_rect(card_area);
        self.paint_background(card, buf);
        self.paint_text(card, buf);
        self.paint_overlay(card, buf);

        let hint = self.app.state.layout_format.hint();
        let width = hint.len() as u16;
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        buf.set_string(x, hint_y, hint, Style::default().fg(theme::COLOR_DIM));
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
