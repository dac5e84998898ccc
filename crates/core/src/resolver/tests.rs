use super::*;
use crate::tests::FakeProvider;

fn test_catalog() -> Catalog {
    Catalog::parse(
        "\
pt_BR
pt_PT
fr_FR
eo
ckb https://example.com/ckb.zip
",
    )
}

fn tag(s: &str) -> LanguageTag {
    LanguageTag::new(s)
}

#[test]
fn test_installed_tag_resolves_directly() {
    let mut provider = FakeProvider::new();
    provider.install_tag("fr_FR");

    let found = resolve(&tag("fr_FR"), &provider, &test_catalog());

    assert_eq!(found, DictionaryAvailability::Available(tag("fr_FR")));
}

#[test]
fn test_installed_beats_downloadable() {
    // pt_BR is both installed and in the catalog: local wins
    let mut provider = FakeProvider::new();
    provider.install_tag("pt_BR");

    let found = resolve(&tag("pt_BR"), &provider, &test_catalog());

    assert_eq!(found, DictionaryAvailability::Available(tag("pt_BR")));
}

#[test]
fn test_exact_downloadable_is_not_collapsed_to_primary() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("pt_BR"), &provider, &test_catalog());

    match found {
        DictionaryAvailability::DownloadableSingle { tag: found_tag, .. } => {
            assert_eq!(found_tag, tag("pt_BR"))
        }
        other => panic!("expected a single downloadable, got {other:?}"),
    }
}

#[test]
fn test_region_tag_falls_back_to_installed_primary() {
    // en_XX: not installed, not downloadable, but "en" is installed
    let mut provider = FakeProvider::new();
    provider.install_tag("en");

    let found = resolve(&tag("en_XX"), &provider, &test_catalog());

    assert_eq!(found, DictionaryAvailability::Available(tag("en")));
}

#[test]
fn test_region_tag_falls_back_to_primary_variants() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("pt_XX"), &provider, &test_catalog());

    match found {
        DictionaryAvailability::DownloadableAmbiguous {
            tag: found_tag,
            candidates,
        } => {
            assert_eq!(found_tag, tag("pt"));
            assert_eq!(candidates, vec![tag("pt_BR"), tag("pt_PT")]);
        }
        other => panic!("expected an ambiguous downloadable, got {other:?}"),
    }
}

#[test]
fn test_bare_primary_with_two_variants_is_ambiguous_and_sorted() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("pt"), &provider, &test_catalog());

    match found {
        DictionaryAvailability::DownloadableAmbiguous { candidates, .. } => {
            assert_eq!(candidates, vec![tag("pt_BR"), tag("pt_PT")]);
        }
        other => panic!("expected an ambiguous downloadable, got {other:?}"),
    }
}

#[test]
fn test_bare_primary_with_one_variant_is_single() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("fr"), &provider, &test_catalog());

    match found {
        DictionaryAvailability::DownloadableSingle { tag: found_tag, .. } => {
            assert_eq!(found_tag, tag("fr_FR"))
        }
        other => panic!("expected a single downloadable, got {other:?}"),
    }
}

#[test]
fn test_bare_primary_with_installed_variant_is_available() {
    let mut provider = FakeProvider::new();
    provider.install_tag("pt_PT");

    let found = resolve(&tag("pt"), &provider, &test_catalog());

    assert_eq!(found, DictionaryAvailability::Available(tag("pt_PT")));
}

#[test]
fn test_unknown_language_is_unavailable() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("xx_YY"), &provider, &test_catalog());

    assert_eq!(found, DictionaryAvailability::Unavailable(tag("xx")));
}

#[test]
fn test_archive_source_is_carried_along() {
    let provider = FakeProvider::new();

    let found = resolve(&tag("ckb"), &provider, &test_catalog());

    match found {
        DictionaryAvailability::DownloadableSingle { source, .. } => {
            assert_eq!(source.url(), "https://example.com/ckb.zip")
        }
        other => panic!("expected a single downloadable, got {other:?}"),
    }
}
