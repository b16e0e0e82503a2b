use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use assistant_core::time::fixed_now;
use assistant_core::{Clock, VideoLinks};
use services::{BackendClient, BackendConfig, SpeechCapture, UnsupportedSpeech};

use crate::context::{UiApp, build_app_context};
use crate::views::AssistantView;

struct TestApp {
    backend: Arc<BackendClient>,
    speech: Arc<dyn SpeechCapture>,
    links: Arc<VideoLinks>,
    export_dir: PathBuf,
}

impl UiApp for TestApp {
    fn backend(&self) -> Arc<BackendClient> {
        Arc::clone(&self.backend)
    }

    fn speech(&self) -> Arc<dyn SpeechCapture> {
        Arc::clone(&self.speech)
    }

    fn video_links(&self) -> Arc<VideoLinks> {
        Arc::clone(&self.links)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn ViewHarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { AssistantView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    // Port 9 is discard; nothing rendered here should reach the network.
    let backend = Arc::new(BackendClient::new(BackendConfig {
        base_url: "http://127.0.0.1:9".to_string(),
    }));
    let mut links = HashMap::new();
    links.insert(3, "https://www.youtube.com/watch?v=abc123".to_string());
    let app = Arc::new(TestApp {
        backend,
        speech: Arc::new(UnsupportedSpeech),
        links: Arc::new(VideoLinks::new(links)),
        export_dir: std::env::temp_dir(),
    });
    ViewHarness {
        dom: VirtualDom::new_with_props(ViewHarnessRoot, HarnessProps { app }),
    }
}
