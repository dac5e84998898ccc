use anyhow::Result;

#[cfg(unix)]
fn main() -> Result<()> {
    unix::run()
}

#[cfg(not(unix))]
fn main() -> Result<()> {
    anyhow::bail!("the system spelling engine is only wired up on unix")
}

#[cfg(unix)]
mod unix {
    use std::time::Duration;

    use anyhow::Result;
    use dialoguer::Input;

    use saycheck_core::{
        Catalog, DictionaryStore, Downloader, MenuEvent, Session, SystemDictionary, SystemProvider,
    };
    use saycheck_reader::{
        signal_channel, ConsoleHost, DownloadSignal, SignalReceiver, SpellcheckCommands,
    };

    type Commands = SpellcheckCommands<ConsoleHost, SystemProvider>;

    pub(crate) fn run() -> Result<()> {
        let store = DictionaryStore::open_default()?;
        let provider = SystemProvider::new(&store);
        let downloader = Downloader::new(store)?;
        let (sender, receiver) = signal_channel();
        let mut commands = Commands::new(
            ConsoleHost,
            provider,
            Catalog::bundled().clone(),
            downloader,
            sender,
        );

        match commands.spell_check_selection()? {
            Some(session) => drive_session(&commands, session),
            None if commands.download_started() => wait_for_download(&commands, &receiver),
            None => {}
        }
        Ok(())
    }

    // A started download outlives the command: keep the process around
    // until it signals completion
    fn wait_for_download(commands: &Commands, receiver: &SignalReceiver) {
        while let Some(signal) = receiver.recv_timeout(Duration::from_secs(300)) {
            let done = matches!(signal, DownloadSignal::Done(_, _));
            commands.handle_signal(signal);
            if done {
                break;
            }
        }
    }

    fn drive_session(commands: &Commands, mut session: Session<SystemDictionary>) {
        let prompt = r#"What to do?
n : Next misspelling
p : Previous misspelling
s : Open suggestions
c : Clear the recorded choice
r : Replace the text and finish
q : Discard everything
> "#;

        loop {
            // Ignoring the last misspelling dismisses the whole menu
            if session.is_dismissed() {
                return;
            }
            let letter = input_letter(prompt, "npscrq");
            let event = match letter.as_ref() {
                "n" => session.next(),
                "p" => session.prev(),
                "s" => {
                    let event = session.open_suggestions();
                    commands.announce_event(&event);
                    drive_suggestions(commands, &mut session);
                    continue;
                }
                "c" => session.clear_choice(),
                "r" => {
                    commands.replace_selection(session);
                    return;
                }
                "q" => {
                    let event = session.dismiss();
                    commands.announce_event(&event);
                    return;
                }
                _ => unreachable!(),
            };
            commands.announce_event(&event);
        }
    }

    fn drive_suggestions(commands: &Commands, session: &mut Session<SystemDictionary>) {
        let prompt = r#"Suggestions:
n : Next entry
p : Previous entry
a : Accept this entry
b : Back to the misspelling list
> "#;

        loop {
            let letter = input_letter(prompt, "npab");
            let event = match letter.as_ref() {
                "n" => session.next(),
                "p" => session.prev(),
                "a" => {
                    let event = session.choose();
                    commands.announce_event(&event);
                    return;
                }
                "b" => {
                    commands.announce_event(&session.leave_suggestions());
                    return;
                }
                _ => unreachable!(),
            };
            commands.announce_event(&event);
            // Retreating past the first entry escapes back to the
            // misspelling list
            if !matches!(event, MenuEvent::FocusedSuggestion { .. }) {
                return;
            }
        }
    }

    fn input_letter(prompt: &str, choices: &str) -> String {
        Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), &str> {
                if choices.contains(input.as_str()) {
                    Ok(())
                } else {
                    Err("Please answer with one of the listed letters")
                }
            })
            .interact()
            .unwrap()
    }
}
