//! Spawned-task actions: verse fetches and card export.
//!
//! Every action here is fire-and-forget: the handler returns immediately and
//! the spawned task reports back through the message channel. The two verse
//! fetches are issued independently and may complete in either order; each
//! one updates only its own text field.

use std::sync::Arc;

use tokio::spawn;
use tracing::info;

use super::{App, AppMessage, NoticeKind};
use crate::export::{export_card, CardSnapshot};

impl App {
    /// Issue the fetch sequence for the current selection: source text and,
    /// when a translation is selected, translation text.
    ///
    /// Both calls capture the chapter/verse ids at issue time; a selection
    /// change while they are in flight bumps the token and their late
    /// results are discarded.
    pub fn submit_fetch(&mut self) {
        let token = self.begin_fetch();
        let chapter_id = self.state.chapter_id.clone();
        let verse_id = self.state.verse_id.clone();

        info!("loading {}:{} (token {})", chapter_id, verse_id, token);

        {
            let client = Arc::clone(&self.client);
            let tx = self.message_tx.clone();
            let (chapter_id, verse_id) = (chapter_id.clone(), verse_id.clone());
            self.fetch_issued();
            spawn(async move {
                let message = match client.fetch_verse_text(&chapter_id, &verse_id).await {
                    Ok(text) => AppMessage::SourceLoaded { token, text },
                    Err(error) => AppMessage::FetchFailed { token, error },
                };
                let _ = tx.send(message);
            });
        }

        if self.state.translation_id.is_empty() {
            // No translation requested: resolve to empty without a call.
            self.content.translation_text.clear();
        } else {
            let client = Arc::clone(&self.client);
            let tx = self.message_tx.clone();
            let translation_id = self.state.translation_id.clone();
            self.fetch_issued();
            spawn(async move {
                let message = match client
                    .fetch_translation_text(&chapter_id, &verse_id, &translation_id)
                    .await
                {
                    Ok(text) => AppMessage::TranslationLoaded { token, text },
                    Err(error) => AppMessage::FetchFailed { token, error },
                };
                let _ = tx.send(message);
            });
        }

        self.mark_dirty();
    }

    /// Pick a random chapter and verse, then load it.
    pub fn randomize_and_fetch(&mut self) {
        let mut rng = rand::thread_rng();
        let (chapter, verse) = self.state.randomize(&mut rng);
        info!("randomized to {}:{}", chapter.number, verse);
        self.submit_fetch();
    }

    /// Export the current card to a PNG, unless an export or load is already
    /// running.
    pub fn spawn_export(&mut self) {
        if self.downloading || self.is_loading() {
            return;
        }
        self.downloading = true;

        let snapshot = CardSnapshot {
            state: self.state.clone(),
            content: self.content.clone(),
        };
        let out_dir = self.output_dir.clone();
        let tx = self.message_tx.clone();

        spawn(async move {
            let message = match export_card(snapshot, out_dir).await {
                Ok(path) => AppMessage::ExportFinished { path },
                Err(error) => AppMessage::ExportFailed { error },
            };
            let _ = tx.send(message);
        });

        self.mark_dirty();
    }

    /// Open the most recent export with the system viewer.
    pub fn open_last_export(&mut self) {
        match &self.last_export {
            Some(path) => {
                if let Err(e) = open::that(path) {
                    self.set_notice(NoticeKind::Error, format!("Could not open image: {}", e));
                }
            }
            None => self.set_notice(NoticeKind::Info, "Nothing exported yet."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    /// Config whose client points nowhere routable, so a stray request
    /// fails fast instead of reaching the real service.
    fn offline_config() -> Config {
        Config {
            api_base_url: Some("http://127.0.0.1:9".to_string()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_submit_without_translation_clears_translation_text() {
        let mut app = App::with_config(&offline_config());
        app.state.set_translation("");
        app.content.translation_text = "left over".into();
        app.submit_fetch();
        assert_eq!(app.content.translation_text, "");
        // Only the source fetch is outstanding
        assert!(app.is_loading());
    }

    #[tokio::test]
    async fn test_export_gated_while_downloading() {
        let mut app = App::with_config(&offline_config());
        app.downloading = true;
        app.spawn_export();
        // Still exactly one export in flight; no message was queued by a second
        assert!(app.downloading);
        assert!(app
            .message_rx
            .as_mut()
            .expect("rx present")
            .try_recv()
            .is_err());
    }

    #[tokio::test]
    async fn test_export_gated_while_loading() {
        let mut app = App::with_config(&offline_config());
        app.fetch_issued();
        app.spawn_export();
        assert!(!app.downloading);
    }
}
