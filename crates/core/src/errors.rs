use thiserror::Error;

use crate::LanguageTag;

/// Classified failures surfaced to the session controller.
///
/// Only the command layer turns these into user-facing messages; lower
/// layers propagate them as values.
#[derive(Debug, Error)]
pub enum SpellcheckError {
    #[error("no spelling dictionary available for language '{0}'")]
    DictionaryUnavailable(LanguageTag),

    #[error("language '{0}' is not available for download")]
    NotDownloadable(LanguageTag),

    /// Connectivity failure while fetching dictionary files. Always
    /// reported through the download completion callback, never thrown
    /// across the async boundary.
    #[error("could not fetch dictionary files: {0}")]
    Transfer(String),

    #[error("broken dictionary archive: {0}")]
    Archive(String),

    #[error("dictionary store error: {0}")]
    Store(#[source] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("spell engine error: {0}")]
    Engine(#[from] anyhow::Error),

    /// The commit replay produced a different token sequence than the
    /// first engine pass. This means the engine is not deterministic and
    /// the commit must be aborted, not patched over.
    #[error("spell engine replay mismatch: {0}")]
    InternalConsistency(String),
}

impl From<reqwest::Error> for SpellcheckError {
    fn from(err: reqwest::Error) -> Self {
        SpellcheckError::Transfer(err.to_string())
    }
}

impl From<zip::result::ZipError> for SpellcheckError {
    fn from(err: zip::result::ZipError) -> Self {
        SpellcheckError::Archive(err.to_string())
    }
}
