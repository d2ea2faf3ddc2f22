//! Keyboard handling.
//!
//! One entry point, [`App::handle_key`]. An active inline edit session
//! captures typing; otherwise keys navigate tabs/rows and adjust the focused
//! control. Arrow keys and hjkl both work.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Control, EditTarget, NoticeKind, Tab};
use crate::data::{BACKGROUNDS, CHAPTERS, GRADIENT_PRESETS, TRANSLATIONS};
use crate::export::parse_hex_color;
use crate::state::{BackgroundMode, StyleUpdate};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Ctrl+C always quits, even mid-edit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Char('1') => self.set_tab(Tab::Content),
            KeyCode::Char('2') => self.set_tab(Tab::Style),
            KeyCode::Char('3') => self.set_tab(Tab::Background),
            KeyCode::Char('e') => self.spawn_export(),
            KeyCode::Char('o') => self.open_last_export(),
            KeyCode::Char('r') => {
                if !self.is_loading() {
                    self.randomize_and_fetch();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_focused(-1),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_focused(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            _ => {}
        }
    }

    /// Left/Right adjustment of the focused control.
    fn adjust_focused(&mut self, delta: i32) {
        match self.focused_control() {
            Control::Chapter => {
                let current: i32 = self.state.chapter_id.parse().unwrap_or(1);
                let count = CHAPTERS.len() as i32;
                let next = (current - 1 + delta).rem_euclid(count) + 1;
                self.state.set_chapter(next.to_string());
            }
            Control::Verse => {
                let current: i32 = self.state.verse_id.parse().unwrap_or(0);
                let max = self.state.max_verse_hint().map(i32::from).unwrap_or(i32::MAX);
                let next = (current + delta).clamp(1, max);
                self.state.set_verse(next.to_string());
            }
            Control::Translation => {
                // Slot 0 is "none"; the editions follow in table order
                let slots = TRANSLATIONS.len() as i32 + 1;
                let current = if self.state.translation_id.is_empty() {
                    0
                } else {
                    TRANSLATIONS
                        .iter()
                        .position(|t| t.identifier == self.state.translation_id)
                        .map(|i| i as i32 + 1)
                        .unwrap_or(0)
                };
                let next = (current + delta).rem_euclid(slots);
                let id = if next == 0 {
                    ""
                } else {
                    TRANSLATIONS[(next - 1) as usize].identifier
                };
                self.state.set_translation(id);
            }
            Control::Format => {
                let format = if delta >= 0 {
                    self.state.layout_format.next()
                } else {
                    self.state.layout_format.next().next()
                };
                self.state.set_layout_format(format);
            }
            Control::SourceFontSize => {
                let next = (self.state.source_font_size as i32 + delta).max(0) as u16;
                self.state.set_style(StyleUpdate {
                    source_font_size: Some(next),
                    ..Default::default()
                });
            }
            Control::TranslationFontSize => {
                let next = (self.state.translation_font_size as i32 + delta).max(0) as u16;
                self.state.set_style(StyleUpdate {
                    translation_font_size: Some(next),
                    ..Default::default()
                });
            }
            Control::Padding => {
                let next = (self.state.padding as i32 + delta).max(0) as u16;
                self.state.set_style(StyleUpdate {
                    padding: Some(next),
                    ..Default::default()
                });
            }
            Control::LineHeight => {
                let next = (self.state.line_height + 0.1 * delta as f32).max(0.1);
                self.state.set_style(StyleUpdate {
                    line_height: Some(next),
                    ..Default::default()
                });
            }
            Control::BackgroundModeToggle => self.toggle_background_mode(),
            Control::GradientPresets => {
                let len = GRADIENT_PRESETS.len() as i32;
                self.gradient_index =
                    (self.gradient_index as i32 + delta).rem_euclid(len) as usize;
            }
            Control::BackgroundImages => {
                let len = BACKGROUNDS.len() as i32;
                self.background_index =
                    (self.background_index as i32 + delta).rem_euclid(len) as usize;
            }
            _ => {}
        }
    }

    /// Enter/Space on the focused control.
    fn activate_focused(&mut self) {
        match self.focused_control() {
            Control::Verse => self.start_edit(EditTarget::Verse),
            Control::Load => {
                if !self.is_loading() {
                    self.submit_fetch();
                }
            }
            Control::Random => {
                if !self.is_loading() {
                    self.randomize_and_fetch();
                }
            }
            Control::SourceText => self.start_edit(EditTarget::SourceText),
            Control::TranslationText => self.start_edit(EditTarget::TranslationText),
            Control::ShowSource => self.state.toggle_show_source(),
            Control::ShowTranslation => self.state.toggle_show_translation(),
            Control::Format => {
                let next = self.state.layout_format.next();
                self.state.set_layout_format(next);
            }
            Control::TextColor => self.start_edit(EditTarget::TextColor),
            Control::GradientStart => self.start_edit(EditTarget::GradientStart),
            Control::GradientEnd => self.start_edit(EditTarget::GradientEnd),
            Control::BackgroundModeToggle => self.toggle_background_mode(),
            Control::GradientPresets => {
                let preset = GRADIENT_PRESETS[self.gradient_index.min(GRADIENT_PRESETS.len() - 1)];
                self.state.set_style(StyleUpdate {
                    gradient_start: Some(preset.start.to_string()),
                    gradient_end: Some(preset.end.to_string()),
                    background_mode: Some(BackgroundMode::Gradient),
                    ..Default::default()
                });
            }
            Control::BackgroundImages => {
                let url = BACKGROUNDS[self.background_index.min(BACKGROUNDS.len() - 1)];
                self.state.set_style(StyleUpdate {
                    background_image_url: Some(url.to_string()),
                    background_mode: Some(BackgroundMode::Image),
                    ..Default::default()
                });
            }
            _ => {}
        }
    }

    fn toggle_background_mode(&mut self) {
        let mode = match self.state.background_mode {
            BackgroundMode::Gradient => BackgroundMode::Image,
            BackgroundMode::Image => BackgroundMode::Gradient,
        };
        self.state.set_style(StyleUpdate {
            background_mode: Some(mode),
            ..Default::default()
        });
    }

    // ------------------------------------------------------------------
    // Inline editing
    // ------------------------------------------------------------------

    fn start_edit(&mut self, target: EditTarget) {
        self.edit_backup = self.edit_buffer(target).to_string();
        self.editing = Some(target);
    }

    fn edit_buffer(&self, target: EditTarget) -> &str {
        match target {
            EditTarget::Verse => &self.state.verse_id,
            EditTarget::SourceText => &self.content.source_text,
            EditTarget::TranslationText => &self.content.translation_text,
            EditTarget::TextColor => &self.state.text_color,
            EditTarget::GradientStart => &self.state.gradient_start,
            EditTarget::GradientEnd => &self.state.gradient_end,
        }
    }

    fn edit_buffer_mut(&mut self, target: EditTarget) -> &mut String {
        match target {
            EditTarget::Verse => &mut self.state.verse_id,
            EditTarget::SourceText => &mut self.content.source_text,
            EditTarget::TranslationText => &mut self.content.translation_text,
            EditTarget::TextColor => &mut self.state.text_color,
            EditTarget::GradientStart => &mut self.state.gradient_start,
            EditTarget::GradientEnd => &mut self.state.gradient_end,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(target) = self.editing else { return };
        let is_text = matches!(target, EditTarget::SourceText | EditTarget::TranslationText);

        match key.code {
            KeyCode::Esc => {
                if !is_text {
                    // Cancel: restore the value from before the session
                    let backup = self.edit_backup.clone();
                    *self.edit_buffer_mut(target) = backup;
                }
                self.editing = None;
            }
            KeyCode::Enter if is_text => {
                self.edit_buffer_mut(target).push('\n');
            }
            KeyCode::Enter => {
                let is_color = matches!(
                    target,
                    EditTarget::TextColor | EditTarget::GradientStart | EditTarget::GradientEnd
                );
                if is_color && parse_hex_color(self.edit_buffer(target)).is_err() {
                    let bad = self.edit_buffer(target).to_string();
                    let backup = self.edit_backup.clone();
                    *self.edit_buffer_mut(target) = backup;
                    self.set_notice(
                        NoticeKind::Error,
                        format!("{} is not a valid #RRGGBB color.", bad),
                    );
                }
                self.editing = None;
            }
            KeyCode::Backspace => {
                self.edit_buffer_mut(target).pop();
            }
            KeyCode::Char(c) => {
                let accept = match target {
                    EditTarget::Verse => {
                        c.is_ascii_digit() && self.edit_buffer(target).len() < 4
                    }
                    EditTarget::TextColor
                    | EditTarget::GradientStart
                    | EditTarget::GradientEnd => {
                        (c.is_ascii_hexdigit() || c == '#') && self.edit_buffer(target).len() < 7
                    }
                    _ => true,
                };
                if accept {
                    self.edit_buffer_mut(target).push(c);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::LayoutFormat;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn test_app() -> App {
        App::with_config(&Config::default())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Background);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Content);
    }

    #[test]
    fn test_chapter_adjust_wraps() {
        let mut app = test_app();
        assert_eq!(app.focused_control(), Control::Chapter);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.chapter_id, "114");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.chapter_id, "1");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.chapter_id, "2");
    }

    #[test]
    fn test_verse_adjust_clamps_to_chapter() {
        let mut app = test_app();
        app.state.set_chapter("1"); // 7 verses
        app.state.set_verse("7");
        press(&mut app, KeyCode::Down); // focus Verse
        assert_eq!(app.focused_control(), Control::Verse);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.verse_id, "7");
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.verse_id, "6");
    }

    #[test]
    fn test_translation_cycle_includes_none() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down); // focus Translation
        assert_eq!(app.focused_control(), Control::Translation);
        // en.asad is the first table entry, so stepping back lands on "none"
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.translation_id, "");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.translation_id, "en.asad");
    }

    #[test]
    fn test_format_activate_cycles() {
        let mut app = test_app();
        app.set_tab(Tab::Style);
        assert_eq!(app.focused_control(), Control::Format);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.layout_format, LayoutFormat::Tall);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.layout_format, LayoutFormat::Square);
    }

    #[test]
    fn test_slider_adjust_respects_model_clamp() {
        let mut app = test_app();
        app.set_tab(Tab::Style);
        press(&mut app, KeyCode::Down); // SourceFontSize
        assert_eq!(app.focused_control(), Control::SourceFontSize);
        app.state.source_font_size = 8;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.source_font_size, 8); // clamped at the model

        app.state.source_font_size = 100;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.source_font_size, 100);
    }

    #[test]
    fn test_verse_edit_accepts_digits_only() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down); // focus Verse
        press(&mut app, KeyCode::Enter); // start editing
        assert_eq!(app.editing, Some(EditTarget::Verse));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing, None);
        assert_eq!(app.state.verse_id, "25");
    }

    #[test]
    fn test_edit_escape_cancels() {
        let mut app = test_app();
        app.state.set_verse("3");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.verse_id, "3");
    }

    #[test]
    fn test_invalid_color_reverts_with_notice() {
        let mut app = test_app();
        app.set_tab(Tab::Style);
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focused_control(), Control::TextColor);
        press(&mut app, KeyCode::Enter);
        for _ in 0..7 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Char('#'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.text_color, "#FFFFFF");
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_preset_apply_sets_gradient_and_mode() {
        let mut app = test_app();
        app.set_tab(Tab::Background);
        app.state.set_style(StyleUpdate {
            background_mode: Some(BackgroundMode::Image),
            ..Default::default()
        });
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focused_control(), Control::GradientPresets);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        let preset = GRADIENT_PRESETS[1];
        assert_eq!(app.state.gradient_start, preset.start);
        assert_eq!(app.state.gradient_end, preset.end);
        assert_eq!(app.state.background_mode, BackgroundMode::Gradient);
    }

    #[test]
    fn test_background_image_apply() {
        let mut app = test_app();
        app.set_tab(Tab::Background);
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focused_control(), Control::BackgroundImages);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.background_image_url, BACKGROUNDS[1]);
        assert_eq!(app.state.background_mode, BackgroundMode::Image);
    }

    #[test]
    fn test_show_toggles_via_keys() {
        let mut app = test_app();
        // ShowSource is row index 7 on the content tab
        for _ in 0..7 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focused_control(), Control::ShowSource);
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.show_source);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.show_translation);
    }
}
