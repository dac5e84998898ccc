use std::collections::{HashMap, HashSet};
use std::ops::Range;

use crate::{Dictionary, SpellcheckError, Tokenizer};

/// One pass of the spelling engine over a fixed text.
///
/// Misspelled words come out in document order, one at a time. Replacement,
/// session-ignore and personal-dictionary operations apply to the word the
/// pass is currently positioned on and are deferred: the corrected text is
/// only assembled when the pass is consumed with `into_text`, and personal
/// additions reach the engine at that point too, so the token sequence of a
/// pass never changes under its own operations. Re-running a fresh pass
/// over the same text and engine state yields the same sequence.
pub struct CheckerPass<'d, D: Dictionary> {
    dictionary: &'d mut D,
    text: String,
    scan: usize,
    current: Option<(Range<usize>, String)>,
    edits: Vec<(Range<usize>, String)>,
    ignored: HashSet<String>,
    pending_additions: Vec<String>,
    suggestions: HashMap<String, Vec<String>>,
}

impl<'d, D: Dictionary> CheckerPass<'d, D> {
    pub fn new(dictionary: &'d mut D, text: &str) -> Self {
        Self {
            dictionary,
            text: text.to_string(),
            scan: 0,
            current: None,
            edits: Vec::new(),
            ignored: HashSet::new(),
            pending_additions: Vec::new(),
            suggestions: HashMap::new(),
        }
    }

    /// Advance to the next misspelled word, or `None` when the text is
    /// exhausted.
    pub fn next_misspelling(&mut self) -> Result<Option<String>, SpellcheckError> {
        loop {
            let next = Tokenizer::new(&self.text[self.scan..])
                .next()
                .map(|(word, offset)| (word.to_string(), self.scan + offset));
            let (word, start) = match next {
                None => {
                    self.scan = self.text.len();
                    self.current = None;
                    return Ok(None);
                }
                Some(t) => t,
            };
            self.scan = start + word.len();
            if self.ignored.contains(&word) {
                continue;
            }
            if self.pending_additions.iter().any(|w| w == &word) {
                continue;
            }
            if self.dictionary.check(&word).map_err(SpellcheckError::Engine)? {
                continue;
            }
            self.current = Some((start..start + word.len(), word.clone()));
            return Ok(Some(word));
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, word)| word.as_str())
    }

    /// Record a replacement for the current word. `original` must match
    /// the word the pass is positioned on; a mismatch means the caller's
    /// recorded choices no longer line up with the engine.
    pub fn replace(&mut self, original: &str, replacement: &str) -> Result<(), SpellcheckError> {
        match &self.current {
            Some((range, word)) if word == original => {
                self.edits.push((range.clone(), replacement.to_string()));
                Ok(())
            }
            Some((_, word)) => Err(SpellcheckError::InternalConsistency(format!(
                "replacement of '{original}' requested while positioned on '{word}'"
            ))),
            None => Err(SpellcheckError::InternalConsistency(format!(
                "replacement of '{original}' requested before any misspelling"
            ))),
        }
    }

    /// Skip every remaining occurrence of `word` in this pass. Does not
    /// outlive the pass.
    pub fn ignore_for_pass(&mut self, word: &str) {
        self.ignored.insert(word.to_string());
    }

    /// Queue `word` for the engine's personal dictionary. The engine is
    /// updated when the pass is consumed; until then the word keeps
    /// appearing in the token sequence of *other* passes but not in the
    /// remainder of this one.
    pub fn add_to_personal(&mut self, word: &str) {
        self.pending_additions.push(word.to_string());
    }

    /// Suggestions for a word, computed once per pass.
    pub fn suggest(&mut self, word: &str) -> Vec<String> {
        self.suggestions
            .entry(word.to_string())
            .or_insert_with(|| self.dictionary.suggest(word))
            .clone()
    }

    /// Flush personal additions to the engine and assemble the corrected
    /// text from the recorded replacements.
    pub fn into_text(self) -> Result<String, SpellcheckError> {
        for word in &self.pending_additions {
            self.dictionary.add(word).map_err(SpellcheckError::Engine)?;
        }
        let mut corrected = String::with_capacity(self.text.len());
        let mut last = 0;
        // Edits were pushed in document order
        for (range, replacement) in &self.edits {
            corrected.push_str(&self.text[last..range.start]);
            corrected.push_str(replacement);
            last = range.end;
        }
        corrected.push_str(&self.text[last..]);
        Ok(corrected)
    }
}
