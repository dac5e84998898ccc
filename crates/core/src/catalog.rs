use std::collections::BTreeMap;

use crate::LanguageTag;

const LIBREOFFICE_CONTENTS_URL: &str =
    "https://api.github.com/repos/LibreOffice/dictionaries/contents";

lazy_static! {
    static ref BUNDLED: Catalog = Catalog::parse(include_str!(
        "../data/downloadable_languages.txt"
    ));
}

/// Where the dictionary files for one language come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSource {
    /// A remote directory listing of individually downloadable files.
    Listing { url: String },
    /// A single zip archive.
    Archive { url: String },
}

impl ArchiveSource {
    pub fn url(&self) -> &str {
        match self {
            ArchiveSource::Listing { url } => url,
            ArchiveSource::Archive { url } => url,
        }
    }
}

/// The downloadable-language index, keyed by language tag.
///
/// Loaded once at startup from packaged data; `BTreeMap` keeps lookups by
/// primary subtag in sorted tag order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<LanguageTag, ArchiveSource>,
}

impl Catalog {
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// One entry per line: a bare tag for a LibreOffice dictionary
    /// directory, or a tag followed by the URL of a zip archive. Blank
    /// lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Catalog {
        let mut entries = BTreeMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let tag = match parts.next() {
                None => continue,
                Some(t) => LanguageTag::new(t),
            };
            let source = match parts.next() {
                None => ArchiveSource::Listing {
                    url: format!("{LIBREOFFICE_CONTENTS_URL}/{tag}?ref=master"),
                },
                Some(url) => ArchiveSource::Archive {
                    url: url.to_string(),
                },
            };
            entries.insert(tag, source);
        }
        Catalog { entries }
    }

    pub fn with_entries(entries: Vec<(LanguageTag, ArchiveSource)>) -> Catalog {
        Catalog {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, tag: &LanguageTag) -> Option<&ArchiveSource> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &LanguageTag) -> bool {
        self.entries.contains_key(tag)
    }

    /// All entries sharing the given primary subtag, in sorted tag order.
    pub fn variants_of(&self, primary: &LanguageTag) -> Vec<LanguageTag> {
        self.entries
            .keys()
            .filter(|tag| &tag.primary() == primary)
            .cloned()
            .collect()
    }

    pub fn tags(&self) -> impl Iterator<Item = &LanguageTag> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
