use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::{Dictionary, DictionaryProvider, LanguageTag};

#[derive(Debug, Clone)]
pub struct FakeDictionary {
    lang: String,
    known: Vec<String>,
    suggestions: HashMap<String, Vec<String>>,
    // Shared across clones so tests can observe personal additions after
    // handing the dictionary to a session
    added: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeDictionary {
    pub fn new() -> Self {
        Self {
            lang: "en_US".to_string(),
            known: Vec::new(),
            suggestions: HashMap::new(),
            added: Rc::new(RefCell::new(BTreeSet::new())),
        }
    }

    pub fn add_known(&mut self, word: &str) {
        self.known.push(word.to_string());
    }

    pub fn add_suggestions(&mut self, error: &str, suggestions: &[&str]) {
        self.suggestions.insert(
            error.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn personal(&self) -> BTreeSet<String> {
        self.added.borrow().clone()
    }
}

impl Default for FakeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for FakeDictionary {
    fn check(&self, word: &str) -> Result<bool> {
        Ok(self.known.iter().any(|w| w == word) || self.added.borrow().contains(word))
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).map_or(vec![], |v| v.to_vec())
    }

    fn add(&mut self, word: &str) -> Result<()> {
        self.added.borrow_mut().insert(word.to_string());
        Ok(())
    }

    fn lang(&self) -> &str {
        &self.lang
    }
}

#[derive(Default)]
pub struct FakeProvider {
    installed: BTreeSet<LanguageTag>,
    dictionaries: HashMap<LanguageTag, FakeDictionary>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn install(&mut self, tag: &str, dictionary: FakeDictionary) {
        let tag = LanguageTag::new(tag);
        self.installed.insert(tag.clone());
        self.dictionaries.insert(tag, dictionary);
    }

    pub fn install_tag(&mut self, tag: &str) {
        self.install(tag, FakeDictionary::new());
    }
}

impl DictionaryProvider for FakeProvider {
    type Dict = FakeDictionary;

    fn is_installed(&self, tag: &LanguageTag) -> bool {
        self.installed.contains(tag)
    }

    fn request(&mut self, tag: &LanguageTag) -> Result<Self::Dict> {
        self.dictionaries
            .get(tag)
            .cloned()
            .ok_or_else(|| anyhow!("no fake dictionary installed for '{tag}'"))
    }
}

#[test]
fn test_fake_dictionary_check() {
    let mut fake_dictionary = FakeDictionary::new();
    fake_dictionary.add_known("hello");

    assert!(fake_dictionary.check("hello").unwrap());
    assert!(!fake_dictionary.check("foo").unwrap());
}

#[test]
fn test_fake_dictionary_add_is_shared_across_clones() {
    let fake_dictionary = FakeDictionary::new();
    let mut clone = fake_dictionary.clone();
    clone.add("saluton").unwrap();

    assert!(fake_dictionary.check("saluton").unwrap());
    assert!(fake_dictionary.personal().contains("saluton"));
}
