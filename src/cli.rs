use crate::debug_log;
use crate::dictionary::DEFAULT_LANGUAGE;
use crate::game_state::{GameInterface, RoundSnapshot, SubmissionOutcome, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Word Scramble: make as many words as you can from the root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary word list
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Language tag passed to the dictionary
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for the root word picker, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the line-oriented interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const NEW_ROUND_COMMAND: &str = ":new";
pub const EXIT_COMMANDS: [&str; 2] = [":exit", ":quit"];

/// Turn one line of input into an action. Anything that is not a command is a
/// submission, including an empty line.
pub fn parse_action(line: &str) -> UserAction {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(NEW_ROUND_COMMAND) {
        UserAction::NewRound
    } else if EXIT_COMMANDS
        .iter()
        .any(|command| trimmed.eq_ignore_ascii_case(command))
    {
        UserAction::Exit
    } else {
        UserAction::Submit(line.to_string())
    }
}

pub fn format_used_word(word: &str) -> String {
    format!("({}) {}", word.chars().count(), word)
}

/// Line-oriented implementation of the `GameInterface` trait
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("Write error: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round(&mut self, round: &RoundSnapshot) {
        self.emit(&format!("\nRoot word: {}", round.root_word));
        self.emit(&format!("Score: {}", round.score));
        self.emit(&format!(
            "Enter a word made from its letters ('{}' for a new word, '{}' to quit):",
            NEW_ROUND_COMMAND, EXIT_COMMANDS[0]
        ));
    }

    fn read_action(&mut self) -> Option<UserAction> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_action(&input)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => None,
            Err(e) => {
                log::error!("Failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_outcome(&mut self, outcome: &SubmissionOutcome, round: &RoundSnapshot) {
        match outcome {
            SubmissionOutcome::Accepted { word, score } => {
                self.emit(&format!("Accepted: {word} (score {score})"));
                for used in &round.used_words {
                    self.emit(&format!("  {}", format_used_word(used)));
                }
            }
            SubmissionOutcome::Rejected { reason, score } => {
                self.emit(&format!("{} {} (score {})", reason.title(), reason.message(), score));
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.emit("Exiting.");
    }
}
