//! Static reference data bundled with the application.
//!
//! Pure data, no behavior: the chapter table, the translation editions the
//! remote service understands, the gradient presets, and the background
//! image URLs.

mod backgrounds;
mod chapters;
mod gradients;
mod translations;

pub use backgrounds::BACKGROUNDS;
pub use chapters::{chapter_by_id, Chapter, CHAPTERS};
pub use gradients::{GradientPreset, GRADIENT_PRESETS};
pub use translations::{translation_by_id, Translation, TRANSLATIONS};
