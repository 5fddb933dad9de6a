use crate::checks::{MIN_WORD_LENGTH, is_original, is_possible, is_real};
use crate::dictionary::Dictionary;
use crate::wordbank::{DEFAULT_ROOT_WORD, pick_root_word};
use rand::Rng;
use std::fmt;

/// Points lost for any rejected submission
pub const REJECTION_PENALTY: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    SameAsRoot,
    AlreadyUsed,
    NotDerivable,
    NotARealWord,
}

impl RejectionReason {
    // The NotDerivable/NotARealWord wording reads swapped; it is kept as shipped
    // until product decides otherwise.
    pub fn title(self) -> &'static str {
        match self {
            Self::SameAsRoot => "Root word is not allowed.",
            Self::AlreadyUsed => "Word was already used.",
            Self::NotDerivable => "Word is not recognized.",
            Self::NotARealWord => "Word is not possible.",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::SameAsRoot => "Use a unique word!",
            Self::AlreadyUsed => "Be more original!",
            Self::NotDerivable => "Use a valid word!",
            Self::NotARealWord => "Use a real word!",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.message())
    }
}

/// Result of one submission, carrying the score after it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted { word: String, score: i64 },
    Rejected { reason: RejectionReason, score: i64 },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn score(&self) -> i64 {
        match self {
            Self::Accepted { score, .. } | Self::Rejected { score, .. } => *score,
        }
    }
}

/// Owned, read-only copy of a round for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: i64,
}

impl RoundSnapshot {
    /// Label for the new-round action, as shown next to the title.
    pub fn new_round_label(&self) -> &'static str {
        if self.used_words.is_empty() {
            "New Game"
        } else {
            "New Word"
        }
    }
}

/// Root word, accepted words (most recent first) and running score.
#[derive(Debug, Clone)]
pub struct Round {
    root_word: String,
    used_words: Vec<String>,
    score: i64,
    language: String,
}

impl Round {
    pub fn new(language: &str) -> Self {
        Self {
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
            language: language.to_string(),
        }
    }

    /// Begin a new round with `new_root`.
    ///
    /// The score is reset only when no word was accepted in the round being
    /// replaced; otherwise it carries over.
    pub fn start(&mut self, new_root: &str) {
        let mut root = new_root.trim().to_lowercase();
        if root.is_empty() {
            log::warn!("Empty root word supplied, using '{DEFAULT_ROOT_WORD}'");
            root = DEFAULT_ROOT_WORD.to_string();
        }

        if self.used_words.is_empty() {
            self.score = 0;
        }
        self.used_words.clear();
        log::info!("Starting round with root '{}' (score {})", root, self.score);
        self.root_word = root;
    }

    /// Evaluate one raw submission. Checks run in a fixed order and stop at the
    /// first failure; a rejection still costs [`REJECTION_PENALTY`].
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate: &str,
        dictionary: &D,
    ) -> SubmissionOutcome {
        let answer = candidate.trim().to_lowercase();

        if let Some(reason) = self.rejection_reason(&answer, dictionary) {
            self.score -= REJECTION_PENALTY;
            log::debug!("Rejected '{}': {:?} (score {})", answer, reason, self.score);
            return SubmissionOutcome::Rejected {
                reason,
                score: self.score,
            };
        }

        self.score += answer.chars().count() as i64;
        log::debug!("Accepted '{}' (score {})", answer, self.score);
        self.used_words.insert(0, answer.clone());
        SubmissionOutcome::Accepted {
            word: answer,
            score: self.score,
        }
    }

    fn rejection_reason<D: Dictionary + ?Sized>(
        &self,
        answer: &str,
        dictionary: &D,
    ) -> Option<RejectionReason> {
        if answer == self.root_word {
            Some(RejectionReason::SameAsRoot)
        } else if !is_original(&self.used_words, answer) {
            Some(RejectionReason::AlreadyUsed)
        } else if !is_possible(&self.root_word, answer) {
            Some(RejectionReason::NotDerivable)
        } else if !is_real(answer, MIN_WORD_LENGTH, &self.language, dictionary) {
            Some(RejectionReason::NotARealWord)
        } else {
            None
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            score: self.score,
        }
    }
}

/// Round lifecycle: owns the round, the root-word pool, the oracle and the RNG.
///
/// Every mutating call takes `&mut self`, so a submission cannot start while
/// another one is still waiting on the oracle.
pub struct Game<D, R> {
    round: Round,
    pool: Vec<String>,
    dictionary: D,
    rng: R,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Create the game and start its first round.
    pub fn new(pool: Vec<String>, dictionary: D, rng: R, language: &str) -> Self {
        if pool.is_empty() {
            log::warn!("Root word pool is empty, rounds will use '{DEFAULT_ROOT_WORD}'");
        }
        let mut game = Self {
            round: Round::new(language),
            pool,
            dictionary,
            rng,
        };
        game.start_round();
        game
    }

    /// Pick a fresh root word and start a new round.
    pub fn start_round(&mut self) {
        let root = pick_root_word(&self.pool, &mut self.rng)
            .map_or(DEFAULT_ROOT_WORD, String::as_str)
            .to_string();
        self.round.start(&root);
    }

    pub fn submit(&mut self, candidate: &str) -> SubmissionOutcome {
        self.round.submit(candidate, &self.dictionary)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    Exit,
}

/// Presentation seam: anything that can show a round and collect input.
pub trait GameInterface {
    fn display_round(&mut self, round: &RoundSnapshot);
    /// `None` means no action was read this time, e.g. an interrupted read,
    /// and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_outcome(&mut self, outcome: &SubmissionOutcome, round: &RoundSnapshot);
    fn display_exit_message(&mut self);
}

pub fn game_loop<D, R, I>(game: &mut Game<D, R>, interface: &mut I)
where
    D: Dictionary,
    R: Rng,
    I: GameInterface + ?Sized,
{
    interface.display_round(&game.round().snapshot());

    loop {
        match interface.read_action() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::NewRound) => {
                game.start_round();
                interface.display_round(&game.round().snapshot());
            }
            Some(UserAction::Submit(candidate)) => {
                let outcome = game.submit(&candidate);
                interface.display_outcome(&outcome, &game.round().snapshot());
            }
            None => {}
        }
    }
}
