//! Error types for word-scramble
//!
//! Rejected submissions are not errors; they are reported through
//! `SubmissionOutcome`. These variants cover start-up and oracle failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrambleError {
    /// The root-word list could not be read
    #[error("could not load root words from '{}': {source}", .path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary word list could not be read
    #[error("could not load dictionary from '{}': {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary loaded but contains no words
    #[error("dictionary contains no words")]
    EmptyDictionary,

    /// The oracle was asked about a language it does not know
    #[error("language '{requested}' is not supported (dictionary language is '{supported}')")]
    UnsupportedLanguage { requested: String, supported: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ScrambleError>;
