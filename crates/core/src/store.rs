use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories_next::BaseDirs;

/// File extensions the spelling engine can read. Everything else in a
/// downloaded listing or archive is discarded.
const DICTIONARY_FILE_EXTS: [&str; 2] = ["dic", "aff"];

/// On-disk dictionary store, user-config-scoped.
///
/// Layout: `<root>/hunspell/<lang>.dic` + `.aff`. The store is append-only
/// from our perspective: downloads add files, nothing ever rewrites them.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    root: PathBuf,
}

impl DictionaryStore {
    pub fn open_default() -> Result<Self> {
        let from_env = std::env::var("SAYCHECK_DICTIONARY_PATH");
        if let Ok(value) = from_env {
            return Self::open(PathBuf::from(value));
        }

        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not get home directory"))?;
        Self::open(base_dirs.config_dir().join("saycheck").join("dictionaries"))
    }

    pub fn open(root: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Could not create dictionary store {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extraction directory for downloaded hunspell files, created on
    /// first use.
    pub fn hunspell_dir(&self) -> Result<PathBuf> {
        let dir = self.root.join("hunspell");
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
        Ok(dir)
    }

    pub fn write_dictionary_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.hunspell_dir()?.join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Could not write to {}", path.display()))?;
        Ok(path)
    }

    pub fn is_dictionary_file(name: &str) -> bool {
        let path = Path::new(name);
        match path.extension() {
            None => false,
            Some(ext) => DICTIONARY_FILE_EXTS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_file_filter() {
        assert!(DictionaryStore::is_dictionary_file("fr_FR.dic"));
        assert!(DictionaryStore::is_dictionary_file("fr_FR.aff"));
        assert!(!DictionaryStore::is_dictionary_file("README.md"));
        assert!(!DictionaryStore::is_dictionary_file("fr_FR"));
    }

    #[test]
    fn test_hunspell_dir_is_created_on_demand() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = DictionaryStore::open(temp_dir.path().join("dictionaries")).unwrap();
        let hunspell = store.hunspell_dir().unwrap();
        assert!(hunspell.is_dir());

        store.write_dictionary_file("eo.dic", b"2\nsaluton\nmondo\n").unwrap();
        assert!(hunspell.join("eo.dic").exists());
    }
}
