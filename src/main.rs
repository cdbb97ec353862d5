//! Application entry point for the terminal vocabulary player.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create a single-threaded [`tokio`] runtime.
//! 4. Build the speech service and translator from config.
//! 5. Restore saved pairs and selections into a [`VocabApp`].
//! 6. Read commands from stdin while rendering player events and
//!    translation results as they arrive.

use std::collections::HashMap;

use tokio::io::{AsyncBufReadExt, BufReader};
use vocab_player::{
    app::{AppError, TranslationUpdate, VocabApp},
    command::{Command, HELP},
    config::AppConfig,
    player::{PlayerEvent, StopReason},
    speech,
    store::{PairId, PreferencesStore, Removal, PLACEHOLDER},
    translate,
};

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

fn format_row(marker: char, index: usize, original: &str, translated: &str) -> String {
    format!("{marker} {:>3}. {original:<24} {translated}", index + 1)
}

/// What the terminal shows beyond the pair list itself.
#[derive(Default)]
struct View {
    highlighted: Option<usize>,
    /// Translation error messages, shown in place of the translation.
    notes: HashMap<PairId, String>,
}

impl View {
    fn row_line(&self, app: &VocabApp, index: usize) -> Option<String> {
        let pair = app.pairs().get(index)?;
        let marker = if self.highlighted == Some(index) { '▶' } else { ' ' };
        let translated = if pair.has_translation() {
            pair.translated.as_str()
        } else {
            app.pairs()
                .id_at(index)
                .and_then(|id| self.notes.get(&id))
                .map(String::as_str)
                .unwrap_or(PLACEHOLDER)
        };
        Some(format_row(marker, index, &pair.original, translated))
    }

    fn print_row(&self, app: &VocabApp, index: usize) {
        if let Some(line) = self.row_line(app, index) {
            println!("{line}");
        }
    }

    fn print_rows(&self, app: &VocabApp) {
        println!(
            "{} → {}, {:.1}s delay, {} of {} rows playable",
            app.from_language(),
            app.to_language(),
            app.delay().as_secs_f64(),
            app.pairs().eligible_count(),
            app.row_count()
        );
        for index in 0..app.row_count() {
            self.print_row(app, index);
        }
    }

    fn clear_note(&mut self, app: &VocabApp, index: usize) {
        if let Some(id) = app.pairs().id_at(index) {
            self.notes.remove(&id);
        }
    }

    fn on_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Started { total } => println!("playing {total} rows"),
            PlayerEvent::Highlight { index, pair } => {
                // The list may have been edited since playback started; show
                // the pair actually being spoken.
                self.highlighted = Some(index);
                println!(
                    "{}",
                    format_row('▶', index, &pair.original, &pair.translated)
                );
            }
            PlayerEvent::Unhighlight { index } => {
                if self.highlighted == Some(index) {
                    self.highlighted = None;
                }
            }
            PlayerEvent::Stopped { reason } => {
                self.highlighted = None;
                match reason {
                    StopReason::Completed => println!("finished"),
                    StopReason::Requested => log::debug!("playback stopped"),
                }
            }
            // Already reported by the failed `play` call.
            PlayerEvent::NothingToPlay => {}
        }
    }

    fn on_translation(&mut self, app: &VocabApp, update: TranslationUpdate) {
        let Some(id) = app.pairs().id_at(update.index) else {
            return;
        };
        match update.result {
            Ok(_) => {
                self.notes.remove(&id);
            }
            Err(e) => {
                self.notes.insert(id, e.to_string());
            }
        }
        self.print_row(app, update.index);
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn report_missing_voices(app: &VocabApp) {
    for language in app.missing_voices() {
        println!("Language not supported: {language}");
    }
}

fn execute(app: &mut VocabApp, view: &mut View, command: Command) -> Result<(), AppError> {
    match command {
        Command::Add(pair) => {
            let index = match pair {
                Some(pair) => app.add_pair(pair),
                None => app.add_row(),
            };
            view.print_row(app, index);
        }
        Command::Set { index, text } => {
            app.set_original(index, &text)?;
            view.clear_note(app, index);
            view.print_row(app, index);
        }
        Command::Translate(index) => {
            app.request_translation(index)?;
            view.clear_note(app, index);
            println!("translating row {}…", index + 1);
        }
        Command::Remove(index) => match app.remove(index)? {
            Removal::Removed(pair) => println!("removed {:?}", pair.original),
            Removal::Cleared => {
                view.clear_note(app, 0);
                println!("cleared the last row");
            }
        },
        Command::Play => app.play()?,
        Command::Stop => app.stop(),
        Command::Preview(index) => app.preview(index)?,
        Command::From(language) => {
            app.set_from_language(language);
            println!("from {language}");
            report_missing_voices(app);
        }
        Command::To(language) => {
            app.set_to_language(language);
            println!("to {language}");
            report_missing_voices(app);
        }
        Command::Delay(index) => {
            app.set_delay_index(index)?;
            println!("delay {:.1}s", app.delay().as_secs_f64());
        }
        Command::List => view.print_rows(app),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let speech = speech::from_config(&config.speech);
    let translator = translate::from_config(&config.translation);
    let preferences = PreferencesStore::open_default();
    log::info!("word pairs file: {}", preferences.path().display());

    let (mut app, mut channels) = VocabApp::load(&config, preferences, speech, translator);
    let mut view = View::default();

    report_missing_voices(&app);
    view.print_rows(&app);
    println!("type \"help\" for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = execute(&mut app, &mut view, command) {
                            println!("{e}");
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Some(event) = channels.player.recv() => view.on_player_event(event),
            Some(outcome) = channels.translations.recv() => {
                if let Some(update) = app.apply_translation(outcome) {
                    view.on_translation(&app, update);
                }
            }
        }
    }

    app.shutdown();
    log::info!("bye");
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("vocab-player starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // 4–6. Services, state, and the command loop
    rt.block_on(run(config))
}
