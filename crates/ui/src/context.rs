use std::path::PathBuf;
use std::sync::Arc;

use assistant_core::{Clock, VideoLinks};
use services::{BackendClient, SpeechCapture};

/// What the composition root (crates/app, or a test harness) must provide
/// to the view layer.
pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<BackendClient>;
    fn speech(&self) -> Arc<dyn SpeechCapture>;
    fn video_links(&self) -> Arc<VideoLinks>;
    /// Directory PDF exports are written into.
    fn export_dir(&self) -> PathBuf;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<BackendClient>,
    speech: Arc<dyn SpeechCapture>,
    video_links: Arc<VideoLinks>,
    export_dir: PathBuf,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            speech: app.speech(),
            video_links: app.video_links(),
            export_dir: app.export_dir(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<BackendClient> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn speech(&self) -> Arc<dyn SpeechCapture> {
        Arc::clone(&self.speech)
    }

    #[must_use]
    pub fn video_links(&self) -> Arc<VideoLinks> {
        Arc::clone(&self.video_links)
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a composition-root app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
