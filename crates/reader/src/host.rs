use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use saycheck_core::LanguageTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    DownloadDone,
    Failure,
}

/// Capabilities the surrounding screen reader provides.
///
/// The spellcheck flow never talks to the user directly: everything goes
/// through one of these methods, so the whole stack can be driven by a
/// fake in tests.
pub trait Host {
    fn announce(&self, message: &str);
    /// The current selection, if the focused control has one.
    fn selected_text(&self) -> Option<String>;
    fn is_edit_focused(&self) -> bool;
    fn input_locale(&self) -> LanguageTag;
    fn copy_to_clipboard(&self, text: &str);
    fn send_paste(&self);
    fn play_sound(&self, sound: Sound);
    fn confirm(&self, prompt: &str) -> bool;
    fn select(&self, prompt: &str, choices: &[String]) -> Option<usize>;
}

/// Console stand-in for the screen reader, used for manual testing.
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn announce(&self, message: &str) {
        println!("{}", message);
    }

    fn selected_text(&self) -> Option<String> {
        let text: String = Input::new()
            .with_prompt("Text to check")
            .allow_empty(true)
            .interact()
            .unwrap();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn is_edit_focused(&self) -> bool {
        true
    }

    fn input_locale(&self) -> LanguageTag {
        let lang = std::env::var("LANG").unwrap_or_default();
        let tag = lang.split('.').next().unwrap_or_default();
        if tag.is_empty() {
            LanguageTag::new("en_US")
        } else {
            LanguageTag::new(tag)
        }
    }

    fn copy_to_clipboard(&self, text: &str) {
        println!("-- clipboard --\n{}", text);
    }

    fn send_paste(&self) {
        println!("-- paste --");
    }

    fn play_sound(&self, sound: Sound) {
        println!("-- sound: {:?} --", sound);
    }

    fn confirm(&self, prompt: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .unwrap()
    }

    fn select(&self, prompt: &str, choices: &[String]) -> Option<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(choices)
            .interact_opt()
            .unwrap()
    }
}
