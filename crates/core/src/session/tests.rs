use std::cell::RefCell;
use std::collections::HashSet;

use anyhow::Result as AnyResult;

use super::*;
use crate::tests::FakeDictionary;
use crate::Dictionary;

fn english() -> FakeDictionary {
    let mut dictionary = FakeDictionary::new();
    for word in ["I", "a", "cat", "have", "the", "big"] {
        dictionary.add_known(word);
    }
    dictionary.add_suggestions("has", &["have"]);
    dictionary.add_suggestions("teh", &["the", "ten"]);
    dictionary
}

fn start(text: &str) -> Session<FakeDictionary> {
    match Session::start(LanguageTag::new("en_US"), text, english()).unwrap() {
        StartOutcome::Ready(session) => session,
        StartOutcome::NoMisspellings => panic!("expected misspellings in {text:?}"),
    }
}

#[test]
fn test_clean_text_creates_no_session() {
    let outcome = Session::start(LanguageTag::new("en_US"), "I have a cat", english()).unwrap();
    assert!(matches!(outcome, StartOutcome::NoMisspellings));
}

#[test]
fn test_misspellings_are_listed_in_document_order() {
    let session = start("I has a teh cat");
    let words: Vec<_> = session.menu().live().map(|m| m.word().to_string()).collect();
    assert_eq!(words, vec!["has", "teh"]);
}

#[test]
fn test_commit_with_no_choices_is_identity() {
    let session = start("I has a teh cat");
    assert_eq!(session.commit().unwrap(), "I has a teh cat");
}

#[test]
fn test_accepting_suggestions_rebuilds_the_text() {
    let mut session = start("I has a teh cat");

    // "has" -> "have"
    session.open_suggestions();
    session.choose();
    // "teh" -> "the"
    session.next();
    session.open_suggestions();
    session.choose();

    assert_eq!(session.commit().unwrap(), "I have a the cat");
}

#[test]
fn test_ignore_for_session_removes_all_occurrences_and_keeps_text() {
    let mut session = start("teh cat has teh cat");

    session.open_suggestions();
    // Skip "the", "ten", land on "Ignore for this session"
    session.next();
    session.next();
    session.choose();

    let words: Vec<_> = session.menu().live().map(|m| m.word().to_string()).collect();
    assert_eq!(words, vec!["has"]);

    assert_eq!(session.commit().unwrap(), "teh cat has teh cat");
}

#[test]
fn test_ignoring_the_last_misspelling_dismisses_the_session() {
    let mut session = start("teh teh");
    session.open_suggestions();
    session.next();
    session.next();
    session.choose();

    assert!(session.is_dismissed());
    // Committing an all-ignored session still yields the original text
    assert_eq!(session.commit().unwrap(), "teh teh");
}

#[test]
fn test_add_to_personal_dictionary_persists_on_commit() {
    let dictionary = english();
    let observer = dictionary.clone();
    let mut session =
        match Session::start(LanguageTag::new("en_US"), "my kototo", dictionary).unwrap() {
            StartOutcome::Ready(session) => session,
            StartOutcome::NoMisspellings => panic!("expected misspellings"),
        };

    // "my" -> leave as-is; move to "kototo" and add it
    session.next();
    session.open_suggestions();
    session.next();
    session.next();
    session.choose();

    assert_eq!(session.commit().unwrap(), "my kototo");
    assert!(observer.personal().contains("kototo"));
}

#[test]
fn test_mixed_choices() {
    let mut session = start("I has a big teh cat teh");

    // Accept "have" for "has"
    session.open_suggestions();
    session.choose();
    // Ignore "teh" everywhere
    session.next();
    session.open_suggestions();
    session.next();
    session.next();
    session.choose();

    let words: Vec<_> = session.menu().live().map(|m| m.word().to_string()).collect();
    assert_eq!(words, vec!["has"]);
    assert_eq!(session.commit().unwrap(), "I have a big teh cat teh");
}

#[test]
fn test_dismissal_without_commit_has_no_side_effects() {
    let mut session = start("I has a cat");
    session.open_suggestions();
    session.choose();
    session.dismiss();
    assert!(session.is_dismissed());
    // The session can still be committed with whatever was recorded
    assert_eq!(session.commit().unwrap(), "I have a cat");
}

/// A dictionary that flags a word only the first time it sees it: the
/// replay then disagrees with the recorded choices.
struct FlakyDictionary {
    seen: RefCell<HashSet<String>>,
}

impl FlakyDictionary {
    fn new() -> Self {
        Self {
            seen: RefCell::new(HashSet::new()),
        }
    }
}

impl Dictionary for FlakyDictionary {
    fn check(&self, word: &str) -> AnyResult<bool> {
        Ok(!self.seen.borrow_mut().insert(word.to_string()))
    }

    fn suggest(&self, _word: &str) -> Vec<String> {
        vec![]
    }

    fn add(&mut self, _word: &str) -> AnyResult<()> {
        Ok(())
    }

    fn lang(&self) -> &str {
        "en_US"
    }
}

#[test]
fn test_non_deterministic_engine_aborts_the_commit() {
    let outcome =
        Session::start(LanguageTag::new("en_US"), "sole word", FlakyDictionary::new()).unwrap();
    let session = match outcome {
        StartOutcome::Ready(session) => session,
        StartOutcome::NoMisspellings => panic!("expected misspellings"),
    };

    let err = session.commit().unwrap_err();
    assert!(matches!(err, SpellcheckError::InternalConsistency(_)));
}
