//! REPL (Read-Eval-Print Loop) for interactive solving

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use verisolve_application::{CompletionGateway, SolveInput, SolveUseCase};
use verisolve_domain::Question;

/// Interactive solve REPL
pub struct SolveRepl<G: CompletionGateway + 'static> {
    use_case: SolveUseCase<G>,
    max_retries: u32,
    show_progress: bool,
}

impl<G: CompletionGateway + 'static> SolveRepl<G> {
    /// Create a new SolveRepl
    pub fn new(gateway: Arc<G>, max_retries: u32) -> Self {
        Self {
            use_case: SolveUseCase::new(gateway),
            max_retries,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("verisolve").join("history.txt"));

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

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Solve the question
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

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("+---------------------------------------------+");
        println!("|          Verisolve - Chat Mode              |");
        println!("+---------------------------------------------+");
        println!();
        println!("Ask a word problem and I'll plan, solve and verify it.");
        println!("Max retries per question: {}", self.max_retries);
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let Some(question) = Question::try_new(question) else {
            return;
        };
        let input = SolveInput::new(question).with_max_retries(self.max_retries);

        let response = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        println!("{}", ConsoleFormatter::format(&response));
    }
}
