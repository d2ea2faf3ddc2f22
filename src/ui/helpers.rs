//! Small rendering helpers shared by the preview and controls panels.

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

/// Parse `#RRGGBB` into a terminal RGB color. Invalid literals map to white
/// so a half-typed color never breaks the preview.
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Color::White;
    }
    match hex::decode(digits) {
        Ok(bytes) => Color::Rgb(bytes[0], bytes[1], bytes[2]),
        Err(_) => Color::White,
    }
}

/// Parse `#RRGGBB` into raw channels for gradient interpolation.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return None;
    }
    hex::decode(digits).ok().map(|b| (b[0], b[1], b[2]))
}

/// Greedy word wrap by display width. Respects embedded newlines; a single
/// word wider than the limit gets its own line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if candidate.width() <= width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    // A trailing newline produces an intentional empty line; a fully empty
    // input produces none.
    if text.is_empty() {
        lines.clear();
    }
    lines
}

/// Shorten a long value (URLs, mostly) to fit a column, keeping the tail,
/// which is the distinctive part of an image URL.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let tail_width = max_width.saturating_sub(1);
    let mut tail = String::new();
    for c in text.chars().rev() {
        if tail.width() >= tail_width {
            break;
        }
        tail.insert(0, c);
    }
    format!("…{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(hex_to_color("00d8ff"), Color::Rgb(0, 216, 255));
        assert_eq!(hex_to_color("#bad"), Color::White);
        assert_eq!(hex_to_color(""), Color::White);
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_newlines_and_long_words() {
        let lines = wrap_text("abcdefghij\nx", 4);
        assert_eq!(lines, vec!["abcdefghij", "x"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("short", 10), "short");
        let cut = truncate_start("https://example.com/very-long-path/photo.jpeg", 12);
        assert!(cut.starts_with('…'));
        assert!(cut.ends_with("photo.jpeg"));
    }
}
