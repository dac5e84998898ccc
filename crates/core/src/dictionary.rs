use anyhow::Result;

use crate::LanguageTag;

pub trait Dictionary {
    // Check if the word is found in the dictionary
    fn check(&self, word: &str) -> Result<bool>;
    // Suggest replacements for an unknown word
    fn suggest(&self, word: &str) -> Vec<String>;
    // Add the word to the engine's personal dictionary. This persists
    // beyond the current session.
    fn add(&mut self, word: &str) -> Result<()>;
    fn lang(&self) -> &str;
}

/// Access to the spelling engine's installed dictionaries.
///
/// `is_installed` must be a fast local lookup: the resolver calls it on the
/// interactive thread.
pub trait DictionaryProvider {
    type Dict: Dictionary;

    fn is_installed(&self, tag: &LanguageTag) -> bool;
    fn request(&mut self, tag: &LanguageTag) -> Result<Self::Dict>;
}
