use std::io::{Cursor, Read};

use futures_util::StreamExt;
use serde::Deserialize;

use crate::{ArchiveSource, Catalog, DictionaryStore, LanguageTag, SpellcheckError};

/// One entry of a remote directory listing (GitHub contents API shape).
#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    download_url: Option<String>,
    size: u64,
}

/// Asynchronous dictionary acquisition.
///
/// Transfers run on a small dedicated runtime, never on the interactive
/// thread. `on_progress` receives integer percentages, non-decreasing and
/// bounded by 100; nothing is reported until the total size is known.
/// `on_done` is invoked exactly once per accepted transfer, on completion
/// or failure. Callbacks fire on a worker thread: callers are responsible
/// for marshalling them back to the interactive context.
pub struct Downloader {
    runtime: tokio::runtime::Runtime,
    store: DictionaryStore,
}

impl Downloader {
    pub fn new(store: DictionaryStore) -> Result<Self, SpellcheckError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("saycheck-download")
            .enable_all()
            .build()?;
        Ok(Self { runtime, store })
    }

    /// Start fetching the dictionary files for `tag` in the background.
    ///
    /// Fails synchronously when `tag` has no catalog entry; any later
    /// failure is classified and delivered through `on_done`.
    pub fn fetch(
        &self,
        catalog: &Catalog,
        tag: &LanguageTag,
        on_progress: impl Fn(u8) + Send + Sync + 'static,
        on_done: impl FnOnce(Result<(), SpellcheckError>) + Send + 'static,
    ) -> Result<(), SpellcheckError> {
        let source = catalog
            .get(tag)
            .cloned()
            .ok_or_else(|| SpellcheckError::NotDownloadable(tag.clone()))?;
        let store = self.store.clone();
        let tag = tag.clone();
        self.runtime.spawn(async move {
            log::info!("downloading dictionary files for '{tag}'");
            let result = fetch_source(&source, &store, &on_progress).await;
            match &result {
                Ok(()) => log::info!("dictionary download for '{tag}' complete"),
                Err(err) => log::warn!("dictionary download for '{tag}' failed: {err}"),
            }
            on_done(result);
        });
        Ok(())
    }
}

async fn fetch_source(
    source: &ArchiveSource,
    store: &DictionaryStore,
    on_progress: &impl Fn(u8),
) -> Result<(), SpellcheckError> {
    match source {
        ArchiveSource::Listing { url } => fetch_listing(url, store, on_progress).await,
        ArchiveSource::Archive { url } => fetch_archive(url, store, on_progress).await,
    }
}

fn percent(transferred: u64, total: u64) -> u8 {
    ((transferred * 100) / total).min(100) as u8
}

fn client() -> Result<reqwest::Client, SpellcheckError> {
    // GitHub rejects requests without a user agent
    Ok(reqwest::Client::builder()
        .user_agent(concat!("saycheck/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Shape (a): a directory listing of individually downloadable files,
/// filtered by extension and streamed with cumulative progress across the
/// whole set.
async fn fetch_listing(
    url: &str,
    store: &DictionaryStore,
    on_progress: &impl Fn(u8),
) -> Result<(), SpellcheckError> {
    let client = client()?;
    let listing: Vec<ListingEntry> = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let files: Vec<(String, String, u64)> = listing
        .into_iter()
        .filter(|entry| DictionaryStore::is_dictionary_file(&entry.name))
        .filter_map(|entry| entry.download_url.map(|url| (entry.name, url, entry.size)))
        .collect();

    // The listing declares every file size, so the total is known before
    // the first byte arrives
    let total: u64 = files.iter().map(|(_, _, size)| size).sum();
    let mut transferred: u64 = 0;
    let mut buffers: Vec<(String, Vec<u8>)> = Vec::new();

    for (name, file_url, size) in files {
        let response = client.get(&file_url).send().await?.error_for_status()?;
        let mut buffer = Vec::with_capacity(size as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buffer.extend_from_slice(&chunk);
            transferred += chunk.len() as u64;
            if total > 0 {
                on_progress(percent(transferred, total));
            }
        }
        buffers.push((name, buffer));
    }

    // Only write once everything arrived, so a failed transfer never
    // leaves a half-installed dictionary behind
    for (name, buffer) in buffers {
        store
            .write_dictionary_file(&name, &buffer)
            .map_err(SpellcheckError::Store)?;
    }
    Ok(())
}

/// Shape (b): one zip archive, streamed to a buffer then extracted with
/// member files filtered by extension.
async fn fetch_archive(
    url: &str,
    store: &DictionaryStore,
    on_progress: &impl Fn(u8),
) -> Result<(), SpellcheckError> {
    let response = client()?.get(url).send().await?.error_for_status()?;
    let total = response.content_length();

    let mut buffer = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        buffer.extend_from_slice(&chunk);
        // Without a declared length there is no honest percentage to
        // report, so reporting is skipped entirely
        if let Some(total) = total.filter(|t| *t > 0) {
            on_progress(percent(buffer.len() as u64, total));
        }
    }

    extract_archive(&buffer, store)
}

fn extract_archive(bytes: &[u8], store: &DictionaryStore) -> Result<(), SpellcheckError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    for index in 0..archive.len() {
        let mut member = archive.by_index(index)?;
        let file_name = match member.enclosed_name().and_then(|p| {
            p.file_name().map(|n| n.to_string_lossy().into_owned())
        }) {
            None => continue,
            Some(name) => name,
        };
        if !DictionaryStore::is_dictionary_file(&file_name) {
            continue;
        }
        let mut contents = Vec::new();
        member.read_to_end(&mut contents)?;
        store
            .write_dictionary_file(&file_name, &contents)
            .map_err(SpellcheckError::Store)?;
    }
    Ok(())
}
