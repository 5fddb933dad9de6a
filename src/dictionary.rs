//! Dictionary oracle
//!
//! The engine never decides spelling itself; it asks a [`Dictionary`] for the
//! first misspelled span of a piece of text. Spans are measured in UTF-16 code
//! units so that callers can compare them with the length floor in
//! [`crate::checks::is_real`] without mixing encodings.

use crate::error::{Result, ScrambleError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// English word list bundled into the binary
pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Language tag of the bundled list
pub const DEFAULT_LANGUAGE: &str = "en";

/// A misspelled region of text, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub location: usize,
    pub length: usize,
}

pub trait Dictionary {
    /// Return the first misspelled span in `text`, or `None` if every word is
    /// spelled correctly for `language`.
    fn check_spelling(&self, text: &str, language: &str) -> Result<Option<Span>>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn check_spelling(&self, text: &str, language: &str) -> Result<Option<Span>> {
        (**self).check_spelling(text, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn check_spelling(&self, text: &str, language: &str) -> Result<Option<Span>> {
        (**self).check_spelling(text, language)
    }
}

/// Oracle backed by an in-memory word list for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build from newline-delimited data. Blank lines are skipped and entries
    /// are lowercased.
    pub fn from_word_list(data: &str, language: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            language: language.to_string(),
            words,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ScrambleError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_word_list(&data, language);
        if dictionary.is_empty() {
            return Err(ScrambleError::EmptyDictionary);
        }
        log::info!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// The bundled English list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_word_list(EMBEDDED_DICTIONARY, DEFAULT_LANGUAGE)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fail unless this list can answer for `language`.
    pub fn ensure_language(&self, language: &str) -> Result<()> {
        if language.eq_ignore_ascii_case(&self.language) {
            Ok(())
        } else {
            Err(ScrambleError::UnsupportedLanguage {
                requested: language.to_string(),
                supported: self.language.clone(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl Dictionary for WordListDictionary {
    fn check_spelling(&self, text: &str, language: &str) -> Result<Option<Span>> {
        self.ensure_language(language)?;

        // Walk alphabetic runs, tracking the UTF-16 offset of each one.
        let mut offset = 0;
        let mut run_start = 0;
        let mut run = String::new();
        for c in text.chars() {
            if c.is_alphabetic() || c == '\'' {
                if run.is_empty() {
                    run_start = offset;
                }
                run.push(c);
            } else if !run.is_empty() {
                if !self.contains(&run) {
                    return Ok(Some(Span {
                        location: run_start,
                        length: offset - run_start,
                    }));
                }
                run.clear();
            }
            offset += c.len_utf16();
        }
        if !run.is_empty() && !self.contains(&run) {
            return Ok(Some(Span {
                location: run_start,
                length: offset - run_start,
            }));
        }
        Ok(None)
    }
}
