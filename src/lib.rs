// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod checks;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use checks::{MIN_WORD_LENGTH, is_original, is_possible, is_real};
pub use dictionary::{Dictionary, Span, WordListDictionary};
pub use error::ScrambleError;
pub use game_state::{
    Game, GameInterface, REJECTION_PENALTY, RejectionReason, Round, RoundSnapshot,
    SubmissionOutcome, UserAction, game_loop,
};
pub use wordbank::{
    DEFAULT_ROOT_WORD, RootWordSource, load_root_words_from_file, load_root_words_from_str,
};
