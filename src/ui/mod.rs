//! UI rendering for the Ayah Card studio
//!
//! Layout: a one-line header with the app name and a busy indicator, the
//! card preview on the left, the tabbed control panel on the right, and a
//! footer line that shows either the transient notice or the key hints for
//! the current context.

mod controls;
mod helpers;
mod preview;
mod theme;

pub use helpers::{hex_to_color, hex_to_rgb, truncate_start, wrap_text};
pub use preview::CardPreview;
pub use theme::*;

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, NoticeKind};

use controls::render_controls;

/// Render the whole frame from app state.
pub fn render(f: &mut Frame, app: &App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    // Header
    let mut header = vec![Span::styled(
        " ayah-card ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if app.is_loading() {
        header.push(Span::styled("· loading ", Style::default().fg(COLOR_BUSY)));
    }
    if app.downloading {
        header.push(Span::styled("· exporting ", Style::default().fg(COLOR_BUSY)));
    }
    f.render_widget(Paragraph::new(Line::from(header)), header_area);

    // Body: preview | controls
    let [preview_area, controls_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(body_area);

    let preview_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Preview ");
    let preview_inner = preview_block.inner(preview_area);
    f.render_widget(preview_block, preview_area);
    f.render_widget(CardPreview { app }, preview_inner);

    let controls_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Controls ");
    let controls_inner = controls_block.inner(controls_area);
    f.render_widget(controls_block, controls_area);
    render_controls(f, app, controls_inner);

    // Footer: notice wins over key hints
    let footer = match &app.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => COLOR_INFO,
                NoticeKind::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            ))
        }
        None => {
            let hints = if app.editing.is_some() {
                " type to edit · Enter apply · Esc done"
            } else {
                " ↑↓ move · ←→ adjust · Enter select · Tab tabs · r random · e export · o open · q quit"
            };
            Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)))
        }
    };
    f.render_widget(Paragraph::new(footer), footer_area);
}
