use std::sync::mpsc;
use std::time::Duration;

use saycheck_core::{LanguageTag, SpellcheckError};

/// Download callbacks re-materialized as values, so they can cross from
/// the worker threads to the interactive thread.
#[derive(Debug)]
pub enum DownloadSignal {
    Progress(LanguageTag, u8),
    Done(LanguageTag, Result<(), SpellcheckError>),
}

/// Sending half, cloned into the download callbacks.
#[derive(Clone)]
pub struct SignalSender {
    tx: mpsc::Sender<DownloadSignal>,
}

impl SignalSender {
    pub fn progress(&self, tag: LanguageTag, pct: u8) {
        // The receiver going away just means the host shut down
        let _ = self.tx.send(DownloadSignal::Progress(tag, pct));
    }

    pub fn done(&self, tag: LanguageTag, result: Result<(), SpellcheckError>) {
        let _ = self.tx.send(DownloadSignal::Done(tag, result));
    }
}

/// Receiving half, drained on the interactive thread. Nothing that
/// touches session or menu state ever runs anywhere else.
pub struct SignalReceiver {
    rx: mpsc::Receiver<DownloadSignal>,
}

impl SignalReceiver {
    /// Everything that arrived since the last drain, without blocking.
    pub fn drain(&self) -> Vec<DownloadSignal> {
        self.rx.try_iter().collect()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<DownloadSignal> {
        self.rx.recv_timeout(timeout).ok()
    }
}

pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::channel();
    (SignalSender { tx }, SignalReceiver { rx })
}
