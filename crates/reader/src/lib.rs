pub mod commands;
pub mod host;
pub mod signals;

pub use commands::SpellcheckCommands;
pub use host::{ConsoleHost, Host, Sound};
pub use signals::{signal_channel, DownloadSignal, SignalReceiver, SignalSender};
