//! CLI entrypoint for recap
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use recap_application::{
    AnalyzeCodeUseCase, AnalyzeImageUseCase, AskQuestionInput, AskQuestionUseCase,
    ConversationLogger, ManageHistoryUseCase, NoConversationLogger, NoRequestProgress,
    RequestProgress, SummarizeFileUseCase, SummarizeVideoUseCase, UpdateProfileUseCase,
};
use recap_infrastructure::{
    BackendClient, ConfigLoader, FileConfig, HttpProfileGateway, HttpSessionStore,
    HttpSummarizerGateway, JsonlConversationLogger,
};
use recap_presentation::{ChatRepl, Cli, Command, RequestSpinner, TranscriptView, notice};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }
    let raw = cli.raw || config.output.raw;

    let base_url = cli
        .base_url
        .as_deref()
        .unwrap_or(&config.backend.base_url);

    info!(base_url, "Starting recap");

    // === Dependency Injection ===
    let client = Arc::new(
        BackendClient::new(
            base_url,
            Duration::from_secs(config.backend.timeout_secs),
            Duration::from_secs(config.backend.connect_timeout_secs),
        )
        .context("failed to build backend client")?,
    );

    let gateway = Arc::new(HttpSummarizerGateway::new(client.clone()));
    let store = Arc::new(HttpSessionStore::new(client.clone()));
    let profile_gateway = Arc::new(HttpProfileGateway::new(client.clone()));

    let logger = conversation_logger(&config);

    let ask = AskQuestionUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
    let summarize =
        SummarizeVideoUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
    let history = ManageHistoryUseCase::new(store).with_conversation_logger(logger.clone());
    let profile = UpdateProfileUseCase::new(profile_gateway);

    let progress: Box<dyn RequestProgress> = if cli.quiet || !config.repl.show_progress {
        Box::new(NoRequestProgress)
    } else {
        Box::new(RequestSpinner::new())
    };

    let view = TranscriptView::new(raw);

    match cli.command {
        None | Some(Command::Chat) => {
            let mut repl = ChatRepl::new(ask, summarize, history, profile)
                .with_progress(progress)
                .with_raw_output(raw)
                .with_history_file(config.repl.history_file.clone().map(PathBuf::from));
            repl.run().await?;
        }

        Some(Command::Summarize { url }) => {
            let options = summarize.execute(&url, progress.as_ref()).await?;
            view.print_options(&options);
            notice::info("You can now ask questions based on the summarized video.");
        }

        Some(Command::Ask {
            question,
            video,
            session,
        }) => {
            let mut input = AskQuestionInput::new(question);
            if let Some(url) = video {
                input = input.with_video(url);
            }
            if let Some(id) = session {
                input = input.with_session(id);
            }
            let had_session = input.session_id.is_some();

            let answer = ask.execute(input, progress.as_ref()).await?;
            view.print_assistant(&answer.response);
            if let Some(id) = answer.session_id
                && !had_session
            {
                notice::info(&format!("Session id: {id} (pass --session to continue)"));
            }
        }

        Some(Command::File { path }) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_use_case =
                SummarizeFileUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
            file_use_case
                .execute(&file_name(&path), bytes, progress.as_ref())
                .await?;
            notice::success("You can now ask questions based on the summarized file.");
        }

        Some(Command::Code { path }) => {
            let code = read_code(&path)?;
            let code_use_case =
                AnalyzeCodeUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
            let explanation = code_use_case.execute(&code, progress.as_ref()).await?;
            view.print_assistant(&explanation);
        }

        Some(Command::Image { path }) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let image_use_case =
                AnalyzeImageUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
            let analysis = image_use_case
                .execute(&file_name(&path), bytes, progress.as_ref())
                .await?;
            view.print_assistant(&analysis);
        }

        Some(Command::History { show, delete }) => {
            if let Some(id) = show {
                let session = history.load(&id).await?;
                for message in session.messages() {
                    if message.from_user {
                        view.print_user(&message.text);
                    } else {
                        view.print_assistant(&message.text);
                    }
                }
            } else if let Some(id) = delete {
                history.delete(&id).await?;
                notice::success("Session deleted");
            } else {
                let sessions = history.list().await?;
                if sessions.is_empty() {
                    notice::info("No saved sessions yet");
                }
                for session in sessions {
                    println!(
                        "{}  {}  {} - {}",
                        session.id, session.date, session.title, session.description
                    );
                }
            }
        }

        Some(Command::Nickname { name }) => {
            let message = profile.update_nickname(&name).await?;
            notice::success(&message);
        }

        Some(Command::Password {
            current,
            new,
            verify,
        }) => {
            let message = profile.update_password(&current, &new, &verify).await?;
            notice::success(&message);
        }
    }

    Ok(())
}

/// Build the transcript logger from config; disabled or broken paths fall
/// back to the no-op logger.
fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config.logging.conversation_log.as_deref() {
        Some(path) => match JsonlConversationLogger::open(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.bin")
        .to_string()
}

/// Read a code file, or stdin when the path is "-".
fn read_code(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("failed to read code from stdin")?;
        Ok(code)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}
