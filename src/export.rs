//! Card rasterization and PNG export.
//!
//! The exporter draws the card model directly (it does not screenshot the
//! terminal): background first - a left-to-right gradient or the selected
//! background image cover-scaled onto the canvas - then the text blocks with
//! `ab_glyph`/`imageproc`, then the footer caption. The result is PNG-encoded
//! and written to the output directory under a deterministic
//! `{chapter}:{verse}.png` name.
//!
//! Text is drawn glyph-by-glyph without shaping or bidi reordering, so
//! connected scripts render in their isolated letter forms.

use std::fs;
use std::path::PathBuf;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::{debug, info};

use crate::data::chapter_by_id;
use crate::error::ExportError;
use crate::state::{BackgroundMode, CardState, FetchedContent};

/// Export height/width base for the square format, in pixels.
pub const EXPORT_BASE_PX: u32 = 1080;

/// Fixed footer caption size, matching the card preview proportions.
const FOOTER_FONT_SIZE: f32 = 24.0;

/// Gap between the source and translation blocks, in pixels.
const BLOCK_GAP: u32 = 24;

/// Candidate font files probed in order when `AYAH_CARD_FONT` is unset.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/noto/NotoNaskhArabic-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Environment variable pointing at a TTF to use for card text.
pub const FONT_ENV: &str = "AYAH_CARD_FONT";

/// Everything the export task needs, snapshotted at trigger time so a
/// selection change while the export runs cannot shear the output.
#[derive(Debug, Clone)]
pub struct CardSnapshot {
    pub state: CardState,
    pub content: FetchedContent,
}

/// Deterministic output name for the current selection.
pub fn export_filename(chapter_id: &str, verse_id: &str) -> String {
    format!("{}:{}.png", chapter_id, verse_id)
}

/// Canvas dimensions for the snapshot: the layout format shapes the canvas,
/// `card_width_px` (when set) overrides the width while keeping the ratio.
pub fn canvas_size(state: &CardState) -> (u32, u32) {
    let ratio = state.aspect_ratio();
    let width = state.card_width_px.unwrap_or(match state.layout_format {
        crate::state::LayoutFormat::Wide => EXPORT_BASE_PX * 16 / 9,
        _ => EXPORT_BASE_PX,
    });
    let height = (width as f32 / ratio).round() as u32;
    (width, height)
}

/// Locate a usable TTF: the `AYAH_CARD_FONT` override first, then the
/// candidate list.
pub fn find_card_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(FONT_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load the card font, or fail with [`ExportError::FontUnavailable`].
pub fn load_card_font() -> Result<FontVec, ExportError> {
    let path = find_card_font().ok_or(ExportError::FontUnavailable)?;
    debug!("using card font {}", path.display());
    let bytes = fs::read(&path).map_err(|_| ExportError::FontUnavailable)?;
    FontVec::try_from_vec(bytes).map_err(|_| ExportError::FontUnavailable)
}

/// Parse a `#RRGGBB` literal into an opaque pixel.
pub fn parse_hex_color(color: &str) -> Result<Rgba<u8>, ExportError> {
    let digits = color.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Err(ExportError::Color(color.to_string()));
    }
    let bytes = hex::decode(digits).map_err(|_| ExportError::Color(color.to_string()))?;
    Ok(Rgba([bytes[0], bytes[1], bytes[2], 255]))
}

/// Rasterize the snapshot and write the PNG. Returns the written path.
///
/// Runs as a spawned task; the caller holds the `downloading` flag for the
/// duration so at most one export is in flight.
pub async fn export_card(
    snapshot: CardSnapshot,
    out_dir: PathBuf,
) -> Result<PathBuf, ExportError> {
    let font = load_card_font()?;

    let background = match snapshot.state.background_mode {
        BackgroundMode::Image => {
            Some(fetch_background(&snapshot.state.background_image_url).await?)
        }
        BackgroundMode::Gradient => None,
    };

    let card = render_card(&snapshot, &font, background)?;

    let filename = export_filename(&snapshot.state.chapter_id, &snapshot.state.verse_id);
    let path = out_dir.join(filename);

    fs::create_dir_all(&out_dir).map_err(|e| ExportError::Write {
        path: out_dir.clone(),
        source: e,
    })?;

    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    card.write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    fs::write(&path, buf).map_err(|e| ExportError::Write {
        path: path.clone(),
        source: e,
    })?;

    info!("exported card to {}", path.display());
    Ok(path)
}

/// Fetch and decode the background image.
async fn fetch_background(url: &str) -> Result<DynamicImage, ExportError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ExportError::Background(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ExportError::Background(format!(
            "HTTP {} from {}",
            response.status().as_u16(),
            url
        )));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ExportError::Background(e.to_string()))?;
    image::load_from_memory(&bytes).map_err(|e| ExportError::Background(e.to_string()))
}

/// Draw the full card into an RGBA buffer. Pure: no filesystem or network.
pub fn render_card(
    snapshot: &CardSnapshot,
    font: &FontVec,
    background: Option<DynamicImage>,
) -> Result<RgbaImage, ExportError> {
    let state = &snapshot.state;
    let (width, height) = canvas_size(state);

    let mut canvas = match (state.background_mode, background) {
        (BackgroundMode::Image, Some(img)) => cover_fill(&img, width, height),
        // Gradient mode, or image mode with no image supplied (tests)
        _ => gradient_fill(
            parse_hex_color(&state.gradient_start)?,
            parse_hex_color(&state.gradient_end)?,
            width,
            height,
        ),
    };

    let text_color = parse_hex_color(&state.text_color)?;
    let padding = state.padding as u32;
    let content_width = width.saturating_sub(padding * 2).max(1);

    let source_scale = PxScale::from(state.source_font_size as f32);
    let translation_scale = PxScale::from(state.translation_font_size as f32);
    let footer_scale = PxScale::from(FOOTER_FONT_SIZE);

    let source_lines = if state.show_source && !snapshot.content.source_text.is_empty() {
        wrap_to_width(font, source_scale, &snapshot.content.source_text, content_width)
    } else {
        Vec::new()
    };
    let translation_lines =
        if state.show_translation && !snapshot.content.translation_text.is_empty() {
            wrap_to_width(
                font,
                translation_scale,
                &snapshot.content.translation_text,
                content_width,
            )
        } else {
            Vec::new()
        };

    let source_advance = line_advance(font, source_scale, state.line_height);
    let translation_advance = line_advance(font, translation_scale, state.line_height);

    let mut block_height = source_lines.len() as u32 * source_advance;
    if !source_lines.is_empty() && !translation_lines.is_empty() {
        block_height += BLOCK_GAP;
    }
    block_height += translation_lines.len() as u32 * translation_advance;

    // Center the text block vertically, but keep it inside the padding
    let mut y = height.saturating_sub(block_height) / 2;
    y = y.max(padding);

    y = draw_centered_block(
        &mut canvas,
        font,
        source_scale,
        text_color,
        &source_lines,
        width,
        y,
        source_advance,
    );
    if !source_lines.is_empty() && !translation_lines.is_empty() {
        y += BLOCK_GAP;
    }
    draw_centered_block(
        &mut canvas,
        font,
        translation_scale,
        text_color,
        &translation_lines,
        width,
        y,
        translation_advance,
    );

    // Footer caption: `[ verse ] [ chapter-name ]` when the chapter resolves
    if let Some(chapter) = chapter_by_id(&state.chapter_id) {
        let caption = format!("[ {} ] [ {} ]", state.verse_id, chapter.name);
        let caption_width = text_width(font, footer_scale, &caption);
        let x = (width.saturating_sub(caption_width.ceil() as u32)) / 2;
        let footer_y = height
            .saturating_sub(padding)
            .saturating_sub(line_advance(font, footer_scale, 1.0));
        draw_text_mut(
            &mut canvas,
            text_color,
            x as i32,
            footer_y as i32,
            footer_scale,
            font,
            &caption,
        );
    }

    Ok(canvas)
}

/// Fill a canvas with a horizontal gradient from `start` to `end`.
fn gradient_fill(start: Rgba<u8>, end: Rgba<u8>, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let span = (width.max(2) - 1) as f32;
    for x in 0..width {
        let t = x as f32 / span;
        let pixel = Rgba([
            lerp_channel(start.0[0], end.0[0], t),
            lerp_channel(start.0[1], end.0[1], t),
            lerp_channel(start.0[2], end.0[2], t),
            255,
        ]);
        for y in 0..height {
            img.put_pixel(x, y, pixel);
        }
    }
    img
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Scale the image to cover the canvas and center-crop the overflow.
fn cover_fill(img: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let src = img.to_rgba8();
    let (iw, ih) = (src.width().max(1), src.height().max(1));
    let scale = (width as f32 / iw as f32).max(height as f32 / ih as f32);
    let scaled_w = (iw as f32 * scale).ceil() as u32;
    let scaled_h = (ih as f32 * scale).ceil() as u32;
    let scaled = image::imageops::resize(
        &src,
        scaled_w.max(width),
        scaled_h.max(height),
        image::imageops::FilterType::Triangle,
    );
    let x = (scaled.width() - width) / 2;
    let y = (scaled.height() - height) / 2;
    image::imageops::crop_imm(&scaled, x, y, width, height).to_image()
}

/// Advance between text baselines for one line, in pixels.
fn line_advance(font: &FontVec, scale: PxScale, line_height: f32) -> u32 {
    let scaled = font.as_scaled(scale);
    ((scaled.ascent() - scaled.descent() + scaled.line_gap()) * line_height)
        .ceil()
        .max(1.0) as u32
}

/// Measured advance width of a string at the given scale.
fn text_width(font: &FontVec, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut previous = None;
    for c in text.chars() {
        let glyph = font.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, glyph);
        }
        width += scaled.h_advance(glyph);
        previous = Some(glyph);
    }
    width
}

/// Greedy word wrap against measured widths. A single word wider than the
/// limit gets its own line rather than being broken mid-word.
fn wrap_to_width(font: &FontVec, scale: PxScale, text: &str, max_width: u32) -> Vec<String> {
    let max = max_width as f32;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(font, scale, &candidate) <= max || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw lines horizontally centered, top edge at `y`. Returns the y below
/// the block.
#[allow(clippy::too_many_arguments)]
fn draw_centered_block(
    canvas: &mut RgbaImage,
    font: &FontVec,
    scale: PxScale,
    color: Rgba<u8>,
    lines: &[String],
    canvas_width: u32,
    mut y: u32,
    advance: u32,
) -> u32 {
    for line in lines {
        let line_width = text_width(font, scale, line);
        let x = (canvas_width.saturating_sub(line_width.ceil() as u32)) / 2;
        draw_text_mut(canvas, color, x as i32, y as i32, scale, font, line);
        y += advance;
    }
    y
}
