use std::collections::BTreeSet;

use crate::{
    CheckerPass, Dictionary, LanguageTag, MenuEvent, Misspelling, SpellMenu, SpellcheckError,
    UserChoice,
};

pub enum StartOutcome<D: Dictionary> {
    /// The engine flagged nothing; no session state was created.
    NoMisspellings,
    Ready(Session<D>),
}

/// One spellcheck invocation's full mutable state: the language, the
/// original text, the menu over the live misspellings and the
/// session-scoped ignore set.
///
/// The corrected text is never stored incrementally. It is recomputed on
/// demand by `commit`, which replays the engine over the unchanged original
/// text and pairs the fresh token sequence with the recorded choices.
pub struct Session<D: Dictionary> {
    tag: LanguageTag,
    text: String,
    dictionary: D,
    menu: SpellMenu,
    // Session-scoped: deliberately separate from the engine's personal
    // dictionary, which has a permanent lifetime
    ignored: BTreeSet<String>,
}

impl<D: Dictionary> Session<D> {
    pub fn start(
        tag: LanguageTag,
        text: &str,
        mut dictionary: D,
    ) -> Result<StartOutcome<D>, SpellcheckError> {
        let mut misspellings = Vec::new();
        let mut pass = CheckerPass::new(&mut dictionary, text);
        while let Some(word) = pass.next_misspelling()? {
            misspellings.push(Misspelling::new(&word));
        }
        drop(pass);

        if misspellings.is_empty() {
            return Ok(StartOutcome::NoMisspellings);
        }
        log::info!(
            "spellcheck session for '{tag}': {} misspellings",
            misspellings.len()
        );
        Ok(StartOutcome::Ready(Session {
            tag,
            text: text.to_string(),
            dictionary,
            menu: SpellMenu::new(misspellings),
            ignored: BTreeSet::new(),
        }))
    }

    pub fn language(&self) -> &LanguageTag {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn menu(&self) -> &SpellMenu {
        &self.menu
    }

    pub fn is_dismissed(&self) -> bool {
        self.menu.focus() == crate::MenuFocus::Dismissed
    }

    pub fn next(&mut self) -> MenuEvent {
        self.menu.next()
    }

    pub fn prev(&mut self) -> MenuEvent {
        self.menu.prev()
    }

    /// Enter the suggestion level, computing suggestions from the engine
    /// on first entry.
    pub fn open_suggestions(&mut self) -> MenuEvent {
        let dictionary = &self.dictionary;
        self.menu.enter_suggestions(|word| dictionary.suggest(word))
    }

    pub fn leave_suggestions(&mut self) -> MenuEvent {
        self.menu.leave_suggestions()
    }

    pub fn choose(&mut self) -> MenuEvent {
        let event = self.menu.choose_current();
        if let MenuEvent::ChoiceMade {
            word,
            choice: UserChoice::IgnoreForSession,
        } = &event
        {
            self.ignored.insert(word.clone());
        }
        event
    }

    pub fn clear_choice(&mut self) -> MenuEvent {
        self.menu.clear_current_choice()
    }

    pub fn dismiss(&mut self) -> MenuEvent {
        self.menu.dismiss()
    }

    /// Replay the engine over the original text and apply the recorded
    /// choices, producing the corrected text.
    ///
    /// The fresh pass must yield exactly the live misspellings, in order;
    /// anything else means the engine is not deterministic and the commit
    /// is aborted.
    pub fn commit(mut self) -> Result<String, SpellcheckError> {
        let choices: Vec<(String, UserChoice)> = self
            .menu
            .live()
            .map(|m| (m.word().to_string(), m.choice().clone()))
            .collect();

        let mut pass = CheckerPass::new(&mut self.dictionary, &self.text);
        for word in &self.ignored {
            pass.ignore_for_pass(word);
        }

        for (word, choice) in &choices {
            let found = match pass.next_misspelling()? {
                Some(found) => found,
                None => {
                    return Err(Self::consistency_failure(format!(
                        "engine replay ended early, expected '{word}'"
                    )));
                }
            };
            if &found != word {
                return Err(Self::consistency_failure(format!(
                    "engine replay produced '{found}' where '{word}' was recorded"
                )));
            }
            match choice {
                UserChoice::NoAction => {}
                UserChoice::AcceptSuggestion(replacement) => pass.replace(word, replacement)?,
                UserChoice::AddToPersonalDictionary => pass.add_to_personal(word),
                // Ignored words were removed from the live list and are
                // skipped by the replay through the ignore set
                UserChoice::IgnoreForSession => {}
            }
        }
        if let Some(extra) = pass.next_misspelling()? {
            return Err(Self::consistency_failure(format!(
                "engine replay produced an extra misspelling '{extra}'"
            )));
        }

        pass.into_text()
    }

    fn consistency_failure(detail: String) -> SpellcheckError {
        let err = SpellcheckError::InternalConsistency(detail);
        log::error!("aborting commit: {err}");
        err
    }
}

#[cfg(test)]
mod tests;
