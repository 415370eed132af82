//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Free-form input is sent to the backend as a question; slash commands
//! cover the rest of the client surface (video submission, saved sessions,
//! profile updates). The conversation keeps its video scope and its stored
//! session id across turns.

use crate::output::console::{TranscriptView, notice};
use crate::progress::reporter::RequestSpinner;
use recap_application::{
    AskQuestionInput, AskQuestionUseCase, ManageHistoryUseCase, RequestProgress,
    SummarizeVideoUseCase, UpdateProfileUseCase,
};
use recap_domain::ChatSession;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive chat REPL
pub struct ChatRepl {
    ask: AskQuestionUseCase,
    summarize: SummarizeVideoUseCase,
    history: ManageHistoryUseCase,
    profile: UpdateProfileUseCase,
    progress: Box<dyn RequestProgress>,
    view: TranscriptView,
    history_file: Option<PathBuf>,
    session: ChatSession,
    video_url: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        ask: AskQuestionUseCase,
        summarize: SummarizeVideoUseCase,
        history: ManageHistoryUseCase,
        profile: UpdateProfileUseCase,
    ) -> Self {
        Self {
            ask,
            summarize,
            history,
            profile,
            progress: Box::new(RequestSpinner::new()),
            view: TranscriptView::new(false),
            history_file: None,
            session: ChatSession::new(),
            video_url: None,
        }
    }

    /// Replace the progress display (e.g. quiet mode).
    pub fn with_progress(mut self, progress: Box<dyn RequestProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Print assistant text without reflowing it.
    pub fn with_raw_output(mut self, raw: bool) -> Self {
        self.view = TranscriptView::new(raw);
        self
    }

    /// Override the line-editor history file location.
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("recap").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              recap - Chat Mode              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a question, or use a command:");
        println!("  /video <url>   - Summarize a YouTube video");
        println!("  /history       - List saved sessions");
        println!("  /help          - Show all commands");
        println!("  /quit          - Exit chat");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /video <url>            - Submit a YouTube video and show summary options");
        println!("  /options                - Show the options for the current video again");
        println!("  /history                - List saved sessions");
        println!("  /load <id>              - Reopen a saved session");
        println!("  /delete <id>            - Delete a saved session");
        println!("  /save [title]           - Save the current conversation");
        println!("  /nickname <name>        - Change your display nickname");
        println!("  /password <cur> <new> <verify> - Change your password");
        println!("  /raw                    - Toggle raw assistant output");
        println!("  /help, /h, /?           - Show this help");
        println!("  /quit, /exit, /q        - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => self.print_help(),
            "/video" => match args.first() {
                Some(url) => self.submit_video(url).await,
                None => notice::error("Usage: /video <url>"),
            },
            "/options" => match self.summarize.current_options().await {
                Ok(options) => self.view.print_options(&options),
                Err(e) => notice::error(&e.to_string()),
            },
            "/history" => self.list_history().await,
            "/load" => match args.first() {
                Some(id) => self.load_session(id).await,
                None => notice::error("Usage: /load <id>"),
            },
            "/delete" => match args.first() {
                Some(id) => match self.history.delete(id).await {
                    Ok(()) => notice::success("Session deleted"),
                    Err(e) => notice::error(&e.to_string()),
                },
                None => notice::error("Usage: /delete <id>"),
            },
            "/save" => self.save_session(&args.join(" ")).await,
            "/nickname" => {
                let name = args.join(" ");
                match self.profile.update_nickname(&name).await {
                    Ok(message) => notice::success(&message),
                    Err(e) => notice::error(&e.to_string()),
                }
            }
            "/password" => match args.as_slice() {
                [current, new, verify] => {
                    match self.profile.update_password(current, new, verify).await {
                        Ok(message) => notice::success(&message),
                        Err(e) => notice::error(&e.to_string()),
                    }
                }
                _ => notice::error("Usage: /password <current> <new> <verify>"),
            },
            "/raw" => {
                let raw = self.view.toggle_raw();
                notice::info(if raw {
                    "Raw output on"
                } else {
                    "Raw output off"
                });
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
            }
        }

        false
    }

    async fn submit_video(&mut self, url: &str) {
        match self.summarize.execute(url, self.progress.as_ref()).await {
            Ok(options) => {
                self.video_url = Some(url.trim().to_string());
                self.view.print_options(&options);
                notice::info("You can now ask questions based on the summarized video.");
            }
            Err(e) => notice::error(&e.to_string()),
        }
    }

    async fn list_history(&self) {
        match self.history.list().await {
            Ok(sessions) if sessions.is_empty() => notice::info("No saved sessions yet"),
            Ok(sessions) => {
                println!();
                for session in sessions {
                    println!(
                        "  {}  {}  {} - {}",
                        session.id, session.date, session.title, session.description
                    );
                }
                println!();
            }
            Err(e) => notice::error(&e.to_string()),
        }
    }

    async fn load_session(&mut self, id: &str) {
        match self.history.load(id).await {
            Ok(session) => {
                println!();
                for message in session.messages() {
                    if message.from_user {
                        self.view.print_user(&message.text);
                    } else {
                        self.view.print_assistant(&message.text);
                    }
                }
                println!();
                self.session = session;
                notice::info("Session loaded; new questions continue it");
            }
            Err(e) => notice::error(&e.to_string()),
        }
    }

    async fn save_session(&self, title: &str) {
        let date = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        let title = if title.is_empty() {
            "Chat Session"
        } else {
            title
        };
        // First question doubles as the description, like the history table
        // expects one.
        let description = self
            .session
            .messages()
            .iter()
            .find(|m| m.from_user)
            .map(|m| m.text.clone())
            .unwrap_or_else(|| "Saved from the terminal".to_string());

        match self.history.save(&date, title, &description).await {
            Ok(()) => notice::success("Session saved"),
            Err(e) => notice::error(&e.to_string()),
        }
    }

    async fn process_question(&mut self, question: &str) {
        self.view.print_user(question);

        let mut input = AskQuestionInput::new(question);
        if let Some(ref url) = self.video_url {
            input = input.with_video(url.clone());
        }
        if let Some(id) = self.session.id() {
            input = input.with_session(id.to_string());
        }

        match self.ask.execute(input, self.progress.as_ref()).await {
            Ok(answer) => {
                self.session.push_user(question);
                self.session.push_assistant(&answer.response);
                if let Some(id) = answer.session_id {
                    self.session.adopt_id(id);
                }
                println!();
                self.view.print_assistant(&answer.response);
                println!();
            }
            Err(e) => notice::error(&e.to_string()),
        }
    }
}
