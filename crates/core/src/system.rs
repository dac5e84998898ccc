/// Export a SystemDictionary that relies on the Enchant Rust wrapper
use anyhow::{anyhow, Result};

use crate::{Dictionary, DictionaryProvider, DictionaryStore, LanguageTag};

pub struct SystemDictionary {
    dict: enchant::Dict,
    lang: String,
}

impl SystemDictionary {
    pub fn new(tag: &LanguageTag) -> Result<Self> {
        let mut broker = enchant::Broker::new();
        let dict = broker
            .request_dict(tag.as_str())
            .map_err(|e| anyhow!("Could not request dict for lang '{tag}': {e}"))?;
        Ok(Self {
            dict,
            lang: tag.as_str().to_string(),
        })
    }
}

impl Dictionary for SystemDictionary {
    fn check(&self, word: &str) -> Result<bool> {
        self.dict
            .check(word)
            .map_err(|e| anyhow!("Could not check '{word}' with enchant: {e}"))
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.dict.suggest(word)
    }

    fn add(&mut self, word: &str) -> Result<()> {
        self.dict.add(word);
        Ok(())
    }

    fn lang(&self) -> &str {
        &self.lang
    }
}

/// Provider backed by the system Enchant brokers.
///
/// Downloaded hunspell dictionaries live in the saycheck dictionary store,
/// so the store path is exported to Enchant before any broker is created.
pub struct SystemProvider;

impl SystemProvider {
    pub fn new(store: &DictionaryStore) -> Self {
        std::env::set_var("ENCHANT_CONFIG_DIR", store.root());
        Self
    }
}

impl DictionaryProvider for SystemProvider {
    type Dict = SystemDictionary;

    fn is_installed(&self, tag: &LanguageTag) -> bool {
        let mut broker = enchant::Broker::new();
        broker.dict_exists(tag.as_str())
    }

    fn request(&mut self, tag: &LanguageTag) -> Result<Self::Dict> {
        SystemDictionary::new(tag)
    }
}
