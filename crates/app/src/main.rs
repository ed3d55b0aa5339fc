use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuizService;
use storage::{JsonFileSource, JsonStrSource, QuestionSource};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

#[derive(Debug, Parser)]
#[command(name = "quiz")]
#[command(about = "Multiple-choice quiz runner")]
#[command(version)]
struct Cli {
    /// JSON question bank (defaults to the bundled sample)
    #[arg(long, global = true, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Tracing filter, e.g. "info" or "services=debug"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the quiz window (default)
    Ui,
    /// Validate the question bank and exit
    Check,
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn question_source(path: Option<PathBuf>) -> Box<dyn QuestionSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(JsonStrSource::new("bundled sample", BUNDLED_QUESTIONS)),
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = question_source(cli.questions);

    // Load and validate before any window exists: bad data never reaches a session.
    let quiz_service = QuizService::load(source.as_ref()).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Check => {
            println!(
                "{} questions OK ({})",
                quiz_service.question_count(),
                source.describe()
            );
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_service: Arc::new(quiz_service),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz App")
                    .with_always_on_top(false),
            );

            tracing::info!("launching quiz window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    if let Err(err) = run(cli).await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::QuizLoadError;

    #[tokio::test]
    async fn bundled_questions_are_valid() {
        let source = question_source(None);
        let service = QuizService::load(source.as_ref()).await.unwrap();
        assert_eq!(service.question_count(), 5);
    }

    #[tokio::test]
    async fn missing_question_file_fails_startup() {
        let source = question_source(Some(PathBuf::from("does/not/exist.json")));
        let err = QuizService::load(source.as_ref()).await.unwrap_err();
        assert!(matches!(err, QuizLoadError::Storage(_)));
    }

    #[test]
    fn defaults_to_ui_command() {
        let cli = Cli::try_parse_from(["quiz"]).unwrap();
        assert_eq!(cli.command, None);

        let cli = Cli::try_parse_from(["quiz", "check", "--questions", "bank.json"]).unwrap();
        assert_eq!(cli.command, Some(Command::Check));
        assert_eq!(cli.questions, Some(PathBuf::from("bank.json")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["quiz", "seed"]).is_err());
    }
}
