use saycheck_core::{
    resolve, Catalog, DictionaryAvailability, DictionaryProvider, Downloader, LanguageTag,
    MenuEvent, Session, SpellcheckError, StartOutcome, UserChoice,
};

use crate::host::{Host, Sound};
use crate::signals::{DownloadSignal, SignalSender};

/// The user-facing spellcheck commands, glued to a host and a spelling
/// engine.
///
/// Sessions are handed back to the caller, who drives navigation with the
/// host's input events and feeds the resulting `MenuEvent`s through
/// `announce_event`. Download callbacks never touch this struct directly:
/// they post `DownloadSignal`s which the caller hands to `handle_signal`
/// from the interactive thread.
pub struct SpellcheckCommands<H: Host, P: DictionaryProvider> {
    host: H,
    provider: P,
    catalog: Catalog,
    downloader: Downloader,
    signals: SignalSender,
    choose_language: bool,
    download_started: bool,
}

impl<H: Host, P: DictionaryProvider> SpellcheckCommands<H, P> {
    pub fn new(
        host: H,
        provider: P,
        catalog: Catalog,
        downloader: Downloader,
        signals: SignalSender,
    ) -> Self {
        Self {
            host,
            provider,
            catalog,
            downloader,
            signals,
            choose_language: false,
            download_started: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether the last command kicked off a transfer whose signals are
    /// still worth waiting for.
    pub fn download_started(&self) -> bool {
        self.download_started
    }

    /// When set, the spellcheck command prompts for a language instead of
    /// using the host's input locale.
    pub fn toggle_language_choice(&mut self) {
        self.choose_language = !self.choose_language;
        let message = if self.choose_language {
            "Choosing the spellcheck language on each run"
        } else {
            "Using the input language for spellcheck"
        };
        self.host.announce(message);
    }

    /// Spell check the host's current selection.
    ///
    /// Returns a ready session when the text has misspellings. Every other
    /// outcome (nothing selected, no mistakes, dictionary missing or being
    /// downloaded) is reported to the user here and yields `None`.
    pub fn spell_check_selection(&mut self) -> Result<Option<Session<P::Dict>>, SpellcheckError> {
        if !self.host.is_edit_focused() {
            self.host.announce("Not in an editable text field");
            return Ok(None);
        }
        let text = match self.host.selected_text() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                self.host.announce("No text is selected");
                return Ok(None);
            }
        };
        let tag = match self.pick_language() {
            Some(tag) => tag,
            None => return Ok(None),
        };

        match resolve(&tag, &self.provider, &self.catalog) {
            DictionaryAvailability::Available(tag) => self.start_session(tag, &text),
            DictionaryAvailability::DownloadableSingle { tag, .. } => {
                // The only cancellation point: once the transfer starts it
                // runs to completion or failure
                let prompt =
                    format!("The dictionary for '{tag}' is not installed. Download it now?");
                if self.host.confirm(&prompt) {
                    self.start_download(tag)?;
                }
                Ok(None)
            }
            DictionaryAvailability::DownloadableAmbiguous { tag, candidates } => {
                let labels: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
                let prompt = format!("Several dictionaries match '{tag}'. Which one?");
                if let Some(index) = self.host.select(&prompt, &labels) {
                    self.start_download(candidates[index].clone())?;
                }
                Ok(None)
            }
            DictionaryAvailability::Unavailable(tag) => {
                self.host.play_sound(Sound::Failure);
                self.host
                    .announce(&format!("No dictionary is available for '{tag}'"));
                Ok(None)
            }
        }
    }

    fn pick_language(&self) -> Option<LanguageTag> {
        if !self.choose_language {
            return Some(self.host.input_locale());
        }
        let tags: Vec<LanguageTag> = self.catalog.tags().cloned().collect();
        let labels: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let index = self.host.select("Spellcheck language", &labels)?;
        Some(tags[index].clone())
    }

    fn start_session(
        &mut self,
        tag: LanguageTag,
        text: &str,
    ) -> Result<Option<Session<P::Dict>>, SpellcheckError> {
        // The resolver said the tag was installed; the engine refusing it
        // anyway means the dictionary is effectively unavailable
        let dictionary = self.provider.request(&tag).map_err(|err| {
            log::warn!("engine refused dictionary for '{tag}': {err}");
            SpellcheckError::DictionaryUnavailable(tag.clone())
        })?;
        match Session::start(tag, text, dictionary)? {
            StartOutcome::NoMisspellings => {
                self.host.announce("No spelling mistakes");
                Ok(None)
            }
            StartOutcome::Ready(session) => {
                let count = session.menu().live().count();
                self.host.announce(&format!("Spelling errors: {count}"));
                Ok(Some(session))
            }
        }
    }

    fn start_download(&mut self, tag: LanguageTag) -> Result<(), SpellcheckError> {
        let progress_signals = self.signals.clone();
        let progress_tag = tag.clone();
        let done_signals = self.signals.clone();
        let done_tag = tag.clone();
        self.downloader.fetch(
            &self.catalog,
            &tag,
            move |pct| progress_signals.progress(progress_tag.clone(), pct),
            move |result| done_signals.done(done_tag, result),
        )?;
        self.download_started = true;
        self.host
            .announce(&format!("Downloading the dictionary for '{tag}'"));
        Ok(())
    }

    /// Deliver a download signal on the interactive thread.
    pub fn handle_signal(&self, signal: DownloadSignal) {
        match signal {
            DownloadSignal::Progress(_, pct) => {
                self.host.announce(&format!("Downloading: {pct}%"));
            }
            DownloadSignal::Done(tag, Ok(())) => {
                self.host.play_sound(Sound::DownloadDone);
                self.host.announce(&format!(
                    "The dictionary for '{tag}' was installed. Run spell check again to use it."
                ));
            }
            DownloadSignal::Done(tag, Err(err)) => {
                log::warn!("dictionary download for '{tag}' failed: {err}");
                self.host.play_sound(Sound::Failure);
                self.host.announce(&format!(
                    "Downloading the dictionary for '{tag}' failed. Check your connection and try again."
                ));
            }
        }
    }

    /// Commit the session and put the corrected text on the clipboard.
    pub fn copy_corrected(&self, session: Session<P::Dict>) {
        if let Some(corrected) = self.commit(session) {
            self.host.copy_to_clipboard(&corrected);
            self.host.announce("Corrected text copied to clipboard");
        }
    }

    /// Commit the session and paste the corrected text over the selection.
    pub fn replace_selection(&self, session: Session<P::Dict>) {
        if let Some(corrected) = self.commit(session) {
            self.host.copy_to_clipboard(&corrected);
            self.host.send_paste();
        }
    }

    fn commit(&self, session: Session<P::Dict>) -> Option<String> {
        match session.commit() {
            Ok(corrected) => Some(corrected),
            Err(err) => {
                log::error!("could not produce the corrected text: {err}");
                self.host.play_sound(Sound::Failure);
                self.host
                    .announce("Something went wrong. The text was not changed.");
                None
            }
        }
    }

    /// Speak a menu event through the host.
    pub fn announce_event(&self, event: &MenuEvent) {
        match event {
            MenuEvent::FocusedMisspelling {
                word,
                description,
                index,
                count,
            } => {
                let status = match description {
                    Some(description) => format!("{word}, {description}"),
                    None => word.clone(),
                };
                self.host
                    .announce(&format!("{status}, {index} of {count}"));
            }
            MenuEvent::FocusedSuggestion {
                label,
                enabled,
                index,
                count,
            } => {
                let status = if *enabled {
                    label.clone()
                } else {
                    format!("{label}, unavailable")
                };
                self.host
                    .announce(&format!("{status}, {index} of {count}"));
            }
            MenuEvent::ChoiceMade { word, choice } => {
                let message = match choice {
                    UserChoice::NoAction => format!("{word} unchanged"),
                    UserChoice::AcceptSuggestion(replacement) => {
                        format!("Replaced {word} with {replacement}")
                    }
                    UserChoice::IgnoreForSession => format!("Ignoring {word} for this session"),
                    UserChoice::AddToPersonalDictionary => {
                        format!("{word} will be added to your dictionary")
                    }
                };
                self.host.announce(&message);
            }
            MenuEvent::Dismissed => self.host.announce("Spellcheck closed"),
        }
    }
}
