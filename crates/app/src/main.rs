use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, Clock, FlashcardService, QuizService, StudyApiConfig, StudyPlanService,
    TutorService,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const LOG_VAR: &str = "STUDY_LOG";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
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

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn plans(&self) -> Arc<StudyPlanService> {
        self.services.plans()
    }

    fn tutor(&self) -> Arc<TutorService> {
        self.services.tutor()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn flashcards(&self) -> Arc<FlashcardService> {
        self.services.flashcards()
    }
}

struct Args {
    api: StudyApiConfig,
    verbose: bool,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout-secs <n>] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!("  --timeout-secs 60");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_API_BASE_URL, STUDY_API_TIMEOUT_SECS, STUDY_LOG");
}

impl Args {
    /// Flags win over the environment.
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args;
        let mut api = StudyApiConfig::from_env();
        let mut verbose = false;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(&mut args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api = StudyApiConfig::new(value).with_timeout(api.timeout);
                }
                "--timeout-secs" => {
                    let value = require_value(&mut args, "--timeout-secs")?;
                    let secs: u64 = value
                        .trim()
                        .parse()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    api = api.with_timeout(Duration::from_secs(secs));
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api, verbose, help })
    }
}

fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing: {err}"))?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing(args.verbose)?;
    tracing::info!(
        base_url = %args.api.base_url,
        timeout_secs = args.api.timeout.as_secs(),
        "starting study companion"
    );

    let services = AppServices::http(args.api, Clock::system())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Companion")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
