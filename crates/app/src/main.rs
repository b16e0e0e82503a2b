use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assistant_core::{Clock, VideoLinks};
use services::{BackendClient, BackendConfig, SpeechCapture, UnsupportedSpeech};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--backend <url>] [--links <json_file>] [--export-dir <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend http://localhost:8000");
    eprintln!("  --export-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SIGMA_BACKEND_URL, SIGMA_VIDEO_LINKS, SIGMA_EXPORT_DIR");
}

struct Args {
    backend_url: String,
    links_path: Option<PathBuf>,
    export_dir: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut backend_url = BackendConfig::from_env().base_url;
        let mut links_path = std::env::var("SIGMA_VIDEO_LINKS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut export_dir = std::env::var("SIGMA_EXPORT_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => backend_url = require_value(args, "--backend")?,
                "--links" => links_path = Some(PathBuf::from(require_value(args, "--links")?)),
                "--export-dir" => {
                    export_dir = PathBuf::from(require_value(args, "--export-dir")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            backend_url,
            links_path,
            export_dir,
        })
    }
}

/// Reads the `{"<video number>": "<watch url>"}` map shipped with the
/// course.
fn load_video_links(path: &Path) -> Result<VideoLinks, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let entries: HashMap<String, String> = serde_json::from_str(&raw)?;
    Ok(VideoLinks::from_string_keys(entries))
}

struct DesktopApp {
    backend: Arc<BackendClient>,
    links: Arc<VideoLinks>,
    export_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<BackendClient> {
        Arc::clone(&self.backend)
    }

    // No desktop speech engine is wired up yet; the view surfaces its
    // unsupported message when the mic button is used.
    fn speech(&self) -> Arc<dyn SpeechCapture> {
        Arc::new(UnsupportedSpeech)
    }

    fn video_links(&self) -> Arc<VideoLinks> {
        Arc::clone(&self.links)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let links = match &parsed.links_path {
        Some(path) => load_video_links(path)?,
        None => VideoLinks::default(),
    };
    if links.is_empty() {
        info!("no video links loaded; YouTube buttons fall back to search");
    }

    let backend = Arc::new(BackendClient::new(BackendConfig {
        base_url: parsed.backend_url.clone(),
    }));
    info!(backend = %parsed.backend_url, "starting desktop app");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        backend,
        links: Arc::new(links),
        export_dir: parsed.export_dir,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sigma Web Dev Assistant")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
