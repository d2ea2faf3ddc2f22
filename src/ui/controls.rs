//! The tabbed control panel: Content, Style and Background forms.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;

use crate::app::{App, Control, EditTarget, Tab};
use crate::data::{translation_by_id, BACKGROUNDS, GRADIENT_PRESETS};
use crate::state::{BackgroundMode, FONT_SIZE_MAX, PADDING_MAX};

use super::helpers::{hex_to_color, truncate_start};
use super::theme;

/// Width of the value bar drawn for slider rows.
const SLIDER_WIDTH: usize = 20;

pub fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let [tabs_area, rows_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.title())))
        .collect();
    let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, tabs_area);

    let lines: Vec<Line> = app
        .tab
        .controls()
        .iter()
        .enumerate()
        .flat_map(|(i, control)| {
            let focused = i == app.focused_index();
            row_lines(app, *control, focused)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), rows_area);
}

/// Build the one (sometimes two) display lines for a control row.
fn row_lines(app: &App, control: Control, focused: bool) -> Vec<Line<'static>> {
    let editing = app.editing.is_some() && app.editing == edit_target_of(control);
    let state = &app.state;

    let mut spans: Vec<Span> = Vec::new();
    let marker_style = if focused {
        Style::default().fg(theme::COLOR_FOCUS)
    } else {
        Style::default().fg(theme::COLOR_DIM)
    };
    spans.push(Span::styled(if focused { "▸ " } else { "  " }, marker_style));

    let label_style = if editing {
        Style::default().fg(theme::COLOR_EDIT)
    } else if focused {
        Style::default()
            .fg(theme::COLOR_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::COLOR_ACCENT)
    };

    match control {
        Control::Chapter => {
            let value = match state.selected_chapter() {
                Some(c) => format!("{}. {}", c.number, c.english_name),
                None => format!("{} (unknown)", state.chapter_id),
            };
            spans.push(Span::styled("Surah        ", label_style));
            spans.push(Span::raw(value));
        }
        Control::Verse => {
            spans.push(Span::styled("Ayah         ", label_style));
            let shown = if editing {
                format!("{}▏", state.verse_id)
            } else if state.verse_id.is_empty() {
                "(enter a number)".to_string()
            } else {
                state.verse_id.clone()
            };
            spans.push(Span::raw(shown));
            if let Some(max) = state.max_verse_hint() {
                spans.push(Span::styled(
                    format!("  / {}", max),
                    Style::default().fg(theme::COLOR_DIM),
                ));
            }
            if !state.verse_id.is_empty() && !state.verse_in_range() {
                spans.push(Span::styled(
                    "  out of range",
                    Style::default().fg(theme::COLOR_ERROR),
                ));
            }
        }
        Control::Translation => {
            let value = if state.translation_id.is_empty() {
                "none".to_string()
            } else {
                match translation_by_id(&state.translation_id) {
                    Some(t) => format!("{} ({})", t.english_name, t.language),
                    None => state.translation_id.clone(),
                }
            };
            spans.push(Span::styled("Translation  ", label_style));
            spans.push(Span::raw(value));
        }
        Control::Load => {
            let text = if app.is_loading() { "Loading…" } else { "Load Ayah" };
            spans.push(Span::styled(format!("[ {} ]", text), label_style));
        }
        Control::Random => {
            let text = if app.is_loading() { "Loading…" } else { "Random Ayah" };
            spans.push(Span::styled(format!("[ {} ]", text), label_style));
        }
        Control::SourceText => {
            spans.push(Span::styled("Ayah text    ", label_style));
            spans.push(text_field_span(&app.content.source_text, editing));
        }
        Control::TranslationText => {
            spans.push(Span::styled("Translation  ", label_style));
            spans.push(text_field_span(&app.content.translation_text, editing));
        }
        Control::ShowSource => {
            let mark = if state.show_source { "x" } else { " " };
            spans.push(Span::styled(format!("[{}] Show ayah", mark), label_style));
        }
        Control::ShowTranslation => {
            let mark = if state.show_translation { "x" } else { " " };
            spans.push(Span::styled(
                format!("[{}] Show translation", mark),
                label_style,
            ));
        }
        Control::Format => {
            spans.push(Span::styled("Image type   ", label_style));
            spans.push(Span::raw(state.layout_format.hint()));
        }
        Control::SourceFontSize => {
            spans.push(Span::styled("Ayah size    ", label_style));
            spans.push(slider_span(state.source_font_size, FONT_SIZE_MAX));
            spans.push(Span::raw(format!(" {}px", state.source_font_size)));
        }
        Control::TranslationFontSize => {
            spans.push(Span::styled("Transl. size ", label_style));
            spans.push(slider_span(state.translation_font_size, FONT_SIZE_MAX));
            spans.push(Span::raw(format!(" {}px", state.translation_font_size)));
        }
        Control::Padding => {
            spans.push(Span::styled("Padding      ", label_style));
            spans.push(slider_span(state.padding, PADDING_MAX));
            spans.push(Span::raw(format!(" {}px", state.padding)));
        }
        Control::LineHeight => {
            spans.push(Span::styled("Line height  ", label_style));
            spans.push(Span::raw(format!("{:.1}", state.line_height)));
        }
        Control::TextColor => {
            spans.push(Span::styled("Text color   ", label_style));
            spans.extend(color_spans(&state.text_color, editing));
        }
        Control::BackgroundModeToggle => {
            spans.push(Span::styled("Background   ", label_style));
            let (gradient_style, image_style) = match state.background_mode {
                BackgroundMode::Gradient => (
                    Style::default()
                        .fg(theme::COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(theme::COLOR_DIM),
                ),
                BackgroundMode::Image => (
                    Style::default().fg(theme::COLOR_DIM),
                    Style::default()
                        .fg(theme::COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(Span::styled("Gradient", gradient_style));
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Image", image_style));
        }
        Control::GradientStart => {
            spans.push(Span::styled("Start color  ", label_style));
            spans.extend(color_spans(&state.gradient_start, editing));
        }
        Control::GradientEnd => {
            spans.push(Span::styled("End color    ", label_style));
            spans.extend(color_spans(&state.gradient_end, editing));
        }
        Control::GradientPresets => {
            let preset = GRADIENT_PRESETS[app.gradient_index.min(GRADIENT_PRESETS.len() - 1)];
            spans.push(Span::styled("Presets      ", label_style));
            spans.push(Span::styled(
                "██",
                Style::default().fg(hex_to_color(preset.start)),
            ));
            spans.push(Span::raw(" → "));
            spans.push(Span::styled(
                "██",
                Style::default().fg(hex_to_color(preset.end)),
            ));
            spans.push(Span::styled(
                format!("  {}/{}", app.gradient_index + 1, GRADIENT_PRESETS.len()),
                Style::default().fg(theme::COLOR_DIM),
            ));
        }
        Control::BackgroundImages => {
            let url = BACKGROUNDS[app.background_index.min(BACKGROUNDS.len() - 1)];
            spans.push(Span::styled("Images       ", label_style));
            spans.push(Span::styled(
                format!("{}/{} ", app.background_index + 1, BACKGROUNDS.len()),
                Style::default().fg(theme::COLOR_DIM),
            ));
            spans.push(Span::raw(truncate_start(url, 32)));
        }
    }

    vec![Line::from(spans), Line::from("")]
}

/// The edit target a control row binds to, if any.
fn edit_target_of(control: Control) -> Option<EditTarget> {
    match control {
        Control::Verse => Some(EditTarget::Verse),
        Control::SourceText => Some(EditTarget::SourceText),
        Control::TranslationText => Some(EditTarget::TranslationText),
        Control::TextColor => Some(EditTarget::TextColor),
        Control::GradientStart => Some(EditTarget::GradientStart),
        Control::GradientEnd => Some(EditTarget::GradientEnd),
        _ => None,
    }
}

fn text_field_span(value: &str, editing: bool) -> Span<'static> {
    let mut preview: String = value.lines().next().unwrap_or("").chars().take(40).collect();
    if value.len() > preview.len() {
        preview.push('…');
    }
    if editing {
        Span::styled(
            format!("{}▏", preview),
            Style::default().fg(theme::COLOR_EDIT),
        )
    } else if value.is_empty() {
        Span::styled("(empty)", Style::default().fg(theme::COLOR_DIM))
    } else {
        Span::raw(preview)
    }
}

fn color_spans(value: &str, editing: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let shown = if editing {
        format!("{}▏", value)
    } else {
        value.to_string()
    };
    let style = if editing {
        Style::default().fg(theme::COLOR_EDIT)
    } else {
        Style::default()
    };
    spans.push(Span::styled(shown, style));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "██",
        Style::default().fg(hex_to_color(value)),
    ));
    spans
}

fn slider_span(value: u16, max: u16) -> Span<'static> {
    let filled = (value as usize * SLIDER_WIDTH) / max.max(1) as usize;
    let filled = filled.min(SLIDER_WIDTH);
    let bar: String = "█".repeat(filled) + &"░".repeat(SLIDER_WIDTH - filled);
    Span::styled(bar, Style::default().fg(theme::COLOR_ACCENT))
}
