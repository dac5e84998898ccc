use std::fmt;

/// A locale identifier, like `en` or `en_US`.
///
/// Tags have a primary subtag and an optional region subtag. Both `-` and
/// `_` are accepted as separators on input; tags are stored with `_`, which
/// is what the spelling engine and the download catalog use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().replace('-', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn primary(&self) -> LanguageTag {
        let primary = self
            .0
            .split('_')
            .next()
            .expect("split always yields at least one item");
        LanguageTag(primary.to_string())
    }

    pub fn region(&self) -> Option<&str> {
        self.0.split('_').nth(1)
    }

    pub fn has_region(&self) -> bool {
        self.region().is_some()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtags() {
        let tag = LanguageTag::new("pt_BR");
        assert_eq!(tag.primary().as_str(), "pt");
        assert_eq!(tag.region(), Some("BR"));

        let bare = LanguageTag::new("eo");
        assert_eq!(bare.primary(), bare);
        assert!(!bare.has_region());
    }

    #[test]
    fn test_dash_separator_is_normalized() {
        assert_eq!(LanguageTag::new("en-GB"), LanguageTag::new("en_GB"));
    }
}
