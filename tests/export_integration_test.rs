//! Integration tests for card export.
//!
//! Rasterization needs a real TTF; tests that draw text locate one through
//! the same discovery path the app uses and skip (with a note) on systems
//! without any of the candidate fonts.

use ayah_card::export::{
    canvas_size, export_card, export_filename, find_card_font, load_card_font, render_card,
    CardSnapshot,
};
use ayah_card::state::{BackgroundMode, CardState, FetchedContent, LayoutFormat, StyleUpdate};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn snapshot() -> CardSnapshot {
    let mut state = CardState::new();
    state.set_chapter("1");
    state.set_verse("1");
    // Small canvas keeps the test fast
    state.card_width_px = Some(160);
    CardSnapshot {
        state,
        content: FetchedContent {
            source_text: "بسم الله الرحمن الرحيم".to_string(),
            translation_text: "In the name of God, the Most Gracious.".to_string(),
        },
    }
}

#[tokio::test]
async fn test_gradient_export_writes_deterministic_png() {
    if find_card_font().is_none() {
        eprintln!("skipping: no system TTF available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();

    let path = export_card(snapshot(), dir.path().to_path_buf())
        .await
        .expect("export succeeds");

    assert_eq!(path, dir.path().join("1:1.png"));
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);
}

#[tokio::test]
async fn test_image_mode_export_fetches_background() {
    if find_card_font().is_none() {
        eprintln!("skipping: no system TTF available");
        return;
    }
    let server = MockServer::start().await;

    // Serve a tiny generated PNG as the background
    let mut png = Vec::new();
    let bg = image::RgbaImage::from_pixel(8, 8, image::Rgba([10, 200, 30, 255]));
    bg.write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/bg.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png, "image/png"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut snap = snapshot();
    snap.state.set_style(StyleUpdate {
        background_mode: Some(BackgroundMode::Image),
        background_image_url: Some(format!("{}/bg.png", server.uri())),
        ..Default::default()
    });

    let out = export_card(snap, dir.path().to_path_buf())
        .await
        .expect("export succeeds");
    assert!(out.exists());
}

#[tokio::test]
async fn test_image_mode_export_surfaces_fetch_failure() {
    if find_card_font().is_none() {
        eprintln!("skipping: no system TTF available");
        return;
    }
    let server = MockServer::start().await;
    // Nothing mounted: the background URL 404s

    let dir = tempfile::tempdir().unwrap();
    let mut snap = snapshot();
    snap.state.set_style(StyleUpdate {
        background_mode: Some(BackgroundMode::Image),
        background_image_url: Some(format!("{}/missing.jpg", server.uri())),
        ..Default::default()
    });

    let result = export_card(snap, dir.path().to_path_buf()).await;
    assert!(matches!(
        result,
        Err(ayah_card::error::ExportError::Background(_))
    ));
    // No file was written
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_render_card_dimensions_follow_format() {
    let Ok(font) = load_card_font() else {
        eprintln!("skipping: no system TTF available");
        return;
    };
    for (format, _) in [
        (LayoutFormat::Square, 1.0f32),
        (LayoutFormat::Tall, 9.0 / 16.0),
        (LayoutFormat::Wide, 16.0 / 9.0),
    ] {
        let mut snap = snapshot();
        snap.state.set_layout_format(format);
        let (w, h) = canvas_size(&snap.state);
        let img = render_card(&snap, &font, None).expect("renders");
        assert_eq!((img.width(), img.height()), (w, h));
    }
}

#[test]
fn test_render_card_gradient_corners() {
    let Ok(font) = load_card_font() else {
        eprintln!("skipping: no system TTF available");
        return;
    };
    let mut snap = snapshot();
    snap.content = FetchedContent::default(); // no text over the corners
    snap.state.set_style(StyleUpdate {
        gradient_start: Some("#FF0000".into()),
        gradient_end: Some("#0000FF".into()),
        ..Default::default()
    });
    let img = render_card(&snap, &font, None).expect("renders");
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(
        img.get_pixel(img.width() - 1, img.height() - 1).0,
        [0, 0, 255, 255]
    );
}

#[test]
fn test_render_card_rejects_bad_color() {
    let Ok(font) = load_card_font() else {
        eprintln!("skipping: no system TTF available");
        return;
    };
    let mut snap = snapshot();
    snap.state.gradient_start = "#NOPE".to_string();
    assert!(render_card(&snap, &font, None).is_err());
}

#[test]
fn test_export_filename_matches_selection() {
    assert_eq!(export_filename("36", "12"), "36:12.png");
}
