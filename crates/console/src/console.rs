use std::io::{BufRead, Write};
use std::sync::Arc;

use serde::Serialize;

use dexdle_infrastructure::adapters::{
    InMemoryCatalog, InMemorySessionRepository, InMemoryStatsRepository, SystemRandomSource,
};
use dexdle_providers::{ErrorReport, GameProvider, ProviderResult};

use crate::render::{self, OutputFormat};

pub type ConsoleProvider = GameProvider<
    InMemoryCatalog,
    InMemorySessionRepository,
    InMemoryStatsRepository,
    SystemRandomSource,
>;

/// Wires the in-memory adapters around `catalog`.
#[must_use]
pub fn build_provider(catalog: InMemoryCatalog, seed: Option<u64>) -> ConsoleProvider {
    GameProvider::new(
        Arc::new(catalog),
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(InMemoryStatsRepository::new()),
        Arc::new(SystemRandomSource::from_seed(seed)),
    )
}

const HELP: &str = "\
type a name to guess, or one of:
  :new              start a new game
  :stats            show your record
  :settings [N]     show or set the attempt budget (3-15)
  :names [PREFIX]   list guessable names
  :history          list your games
  :help             show this help
  :quit             leave";

// =============================================================================
// Command
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Guess(String),
    Stats,
    Settings(Option<String>),
    Names(Option<String>),
    History,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

impl Command {
    /// Lines starting with `:` are commands; anything else is a guess.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Self::Guess(line.to_string());
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim().to_string())),
            None => (command, None),
        };
        match name.to_lowercase().as_str() {
            "new" | "start" => Self::Start,
            "stats" => Self::Stats,
            "settings" => Self::Settings(argument),
            "names" => Self::Names(argument),
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Console
// =============================================================================

/// Line-driven game loop over any reader and writer.
pub struct Console<W: Write> {
    provider: ConsoleProvider,
    player: String,
    session: Option<String>,
    format: OutputFormat,
    output: W,
}

impl<W: Write> Console<W> {
    pub fn new(provider: ConsoleProvider, player: String, format: OutputFormat, output: W) -> Self {
        Self {
            provider,
            player,
            session: None,
            format,
            output,
        }
    }

    /// Starts a first game, then executes input lines until `:quit` or EOF.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors; game errors are printed and play continues.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.output, "dexdle: playing as {} (:help for commands)", self.player)?;
        }
        self.start()?;

        for line in input.lines() {
            match Command::parse(&line?) {
                Command::Quit => break,
                command => self.execute(command)?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the console and hands back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        tracing::debug!(player_id = %self.player, command = ?command, "console command");
        match command {
            Command::Start => self.start(),
            Command::Guess(name) => self.guess(&name),
            Command::Stats => {
                let result = self.provider.get_stats(&self.player);
                self.emit(result, render::stats_text)
            }
            Command::Settings(None) => {
                let result = self.provider.get_settings(&self.player);
                self.emit(result, render::settings_text)
            }
            Command::Settings(Some(value)) => {
                let result = self.provider.update_settings(&self.player, value.as_str());
                self.emit(result, render::settings_text)
            }
            Command::Names(prefix) => {
                let result = self.provider.autocomplete().map(|names| {
                    names
                        .into_iter()
                        .filter(|name| prefix.as_deref().is_none_or(|prefix| name.starts_with(prefix)))
                        .collect::<Vec<_>>()
                });
                self.emit(result, |names: &Vec<String>| render::names_text(names))
            }
            Command::History => {
                let result = self.provider.list_sessions(&self.player);
                self.emit(result, |sessions: &Vec<_>| render::history_text(sessions))
            }
            Command::Help => self.line(HELP),
            Command::Unknown(name) => self.line(&format!("unknown command :{name} (try :help)")),
            Command::Empty | Command::Quit => Ok(()),
        }
    }

    fn start(&mut self) -> anyhow::Result<()> {
        let result = self.provider.start_game(&self.player);
        if let Ok(response) = &result {
            self.session = Some(response.session_id.to_string());
        }
        self.emit(result, render::start_text)
    }

    fn guess(&mut self, name: &str) -> anyhow::Result<()> {
        let Some(session) = self.session.clone() else {
            return self.line("no game in progress, type :new to start one");
        };
        let result = self.provider.guess(&session, name);
        if result
            .as_ref()
            .is_ok_and(|report| report.status.is_terminal())
        {
            self.session = None;
        }
        self.emit(result, render::guess_text)
    }

    fn emit<T, F>(&mut self, result: ProviderResult<T>, text: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        let rendered = match &result {
            Ok(value) => render::render(value, self.format, text)?,
            Err(report) => self.render_error(report)?,
        };
        self.line(&rendered)
    }

    fn render_error(&self, report: &ErrorReport) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string(&serde_json::json!({ "error": report })),
            OutputFormat::Text => Ok(render::error_text(report)),
        }
    }

    fn line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}
