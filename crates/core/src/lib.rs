#[macro_use]
extern crate lazy_static;

mod catalog;
mod checker;
mod dictionary;
mod download;
mod errors;
mod lang;
mod menu;
mod resolver;
mod session;
mod store;
mod tokens;

#[cfg(unix)]
mod system;

pub mod tests;

pub use catalog::{ArchiveSource, Catalog};
pub use checker::CheckerPass;
pub use dictionary::{Dictionary, DictionaryProvider};
pub use download::Downloader;
pub use errors::SpellcheckError;
pub use lang::LanguageTag;
pub use menu::{
    EdgeBehavior, MenuEvent, MenuFocus, MenuLevel, Misspelling, SpellMenu, SuggestionEntry,
    UserChoice,
};
pub use resolver::{resolve, DictionaryAvailability};
pub use session::{Session, StartOutcome};
pub use store::DictionaryStore;
pub use tokens::Tokenizer;

#[cfg(unix)]
pub use system::{SystemDictionary, SystemProvider};
