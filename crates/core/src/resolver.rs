use crate::{ArchiveSource, Catalog, DictionaryProvider, LanguageTag};

/// Outcome of resolving a language tag against the installed dictionaries
/// and the download catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryAvailability {
    /// A dictionary for this tag can be requested from the engine.
    Available(LanguageTag),
    /// Not installed, but a single archive exists for it.
    DownloadableSingle {
        tag: LanguageTag,
        source: ArchiveSource,
    },
    /// The bare primary tag matches several downloadable regional
    /// variants, none of which is installed. Candidates are sorted.
    DownloadableAmbiguous {
        tag: LanguageTag,
        candidates: Vec<LanguageTag>,
    },
    /// No local or remote dictionary exists.
    Unavailable(LanguageTag),
}

/// Maps a language tag to a usable dictionary, or to what it would take to
/// get one.
///
/// The check ordering matters: an installed dictionary beats an exact
/// catalog entry, and an exact catalog entry beats the primary-subtag
/// fallback. A fully specified tag with a remote archive is therefore
/// never silently collapsed to its primary form.
pub fn resolve<P: DictionaryProvider>(
    tag: &LanguageTag,
    provider: &P,
    catalog: &Catalog,
) -> DictionaryAvailability {
    if provider.is_installed(tag) {
        return DictionaryAvailability::Available(tag.clone());
    }

    if let Some(source) = catalog.get(tag) {
        return DictionaryAvailability::DownloadableSingle {
            tag: tag.clone(),
            source: source.clone(),
        };
    }

    if tag.has_region() {
        return resolve(&tag.primary(), provider, catalog);
    }

    let candidates = catalog.variants_of(tag);

    // A regional variant that is already installed satisfies the bare
    // primary tag without any download.
    if let Some(installed) = candidates.iter().find(|c| provider.is_installed(c)) {
        return DictionaryAvailability::Available(installed.clone());
    }

    match candidates.len() {
        0 => DictionaryAvailability::Unavailable(tag.clone()),
        1 => {
            let candidate = candidates[0].clone();
            let source = catalog
                .get(&candidate)
                .expect("candidate tags come from the catalog")
                .clone();
            DictionaryAvailability::DownloadableSingle {
                tag: candidate,
                source,
            }
        }
        _ => DictionaryAvailability::DownloadableAmbiguous {
            tag: tag.clone(),
            candidates,
        },
    }
}

#[cfg(test)]
mod tests;
