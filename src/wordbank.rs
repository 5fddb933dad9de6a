use crate::error::{Result, ScrambleError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Root word used when the pool has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

pub const APP_DIR_NAME: &str = "word-scramble";
const START_WORDS_FILE_NAME: &str = "start.txt";

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

pub fn load_root_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_root_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let to_error = |source| ScrambleError::WordSource {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line.map_err(to_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick one word uniformly at random.
pub fn pick_root_word<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Option<&'a String> {
    pool.choose(rng)
}

/// Per-user override for the start words, e.g. `~/.config/word-scramble/start.txt`
pub fn user_start_words_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(START_WORDS_FILE_NAME))
}

/// Where the root-word pool comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootWordSource {
    File(PathBuf),
    Embedded,
}

impl RootWordSource {
    /// An explicit path wins; otherwise use the per-user override if it exists,
    /// falling back to the bundled list.
    pub fn resolve(explicit: Option<PathBuf>, user_override: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path);
        }
        match user_override {
            Some(path) if path.is_file() => Self::File(path),
            _ => Self::Embedded,
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        match self {
            Self::File(path) => {
                let words = load_root_words_from_file(path)?;
                log::info!("Loaded {} root words from {}", words.len(), path.display());
                Ok(words)
            }
            Self::Embedded => Ok(load_root_words_from_str(EMBEDDED_START_WORDS)),
        }
    }
}
