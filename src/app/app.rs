use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{Display, RenderState};
use super::settings::DisplayFields;
use super::status::Status;
use crate::engine::config::Config;
use crate::engine::error::InputError;
use crate::engine::timing::{base_word_delay, calculate_word_delay};
use crate::input::{clipboard, file, web, LoadError, LoadedDocument};
use crate::reading::{PlaybackStep, ReaderSession};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::KeyCode;
use std::time::Duration;

const FALLBACK_SIZE: u16 = 50;

pub struct App {
    config: Config,
    session: ReaderSession,
    fields: DisplayFields,
    /// Size and speed in effect since playback last started
    display_size: u16,
    speed: f64,
    current_word: Option<String>,
    current_delay: Option<Duration>,
    source: Option<String>,
    source_text: String,
    status: Option<Status>,
    command_input: Option<String>,
    /// The context window owns the display, even when it came back empty
    showing_context: bool,
    show_help: bool,
    quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let fields = DisplayFields::new(config.reader.size.clone(), config.reader.speed.clone());
        let display_size = fields.parse_size().unwrap_or(FALLBACK_SIZE);
        let speed = fields.parse_speed().unwrap_or(0.0);
        let session = ReaderSession::new(config.reader.context_words);

        Self {
            config,
            session,
            fields,
            display_size,
            speed,
            current_word: None,
            current_delay: None,
            source: None,
            source_text: String::new(),
            status: None,
            command_input: None,
            showing_context: false,
            show_help: false,
            quit: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.quit {
            AppMode::Quit
        } else if self.command_input.is_some() {
            AppMode::Command
        } else if self.session.is_paused() {
            AppMode::Paused
        } else {
            AppMode::Reading
        }
    }

    pub fn session(&self) -> &ReaderSession {
        &self.session
    }

    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        !self.session.is_paused() && self.current_word.is_some()
    }

    /// How long the word on screen stays there. `None` when not playing.
    pub fn current_delay(&self) -> Option<Duration> {
        if self.is_playing() {
            self.current_delay
        } else {
            None
        }
    }

    /// Called by the event loop once the current word's delay has elapsed.
    pub fn tick(&mut self) {
        if !self.session.is_paused() {
            self.advance_word();
        }
    }

    pub fn handle_keypress(&mut self, code: KeyCode) {
        if self.command_input.is_some() {
            self.handle_command_key(code);
            return;
        }

        self.show_help = false;
        let step = self.config.reader.speed_step as i32;
        let event = match code {
            KeyCode::Char(' ') => AppEvent::TogglePause,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => AppEvent::PageBackward,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => AppEvent::PageForward,
            KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::AdjustSpeed(step),
            KeyCode::Char('-') => AppEvent::AdjustSpeed(-step),
            KeyCode::Char(c @ (':' | '@')) => {
                self.command_input = Some(c.to_string());
                return;
            }
            KeyCode::Char('?') => AppEvent::Help,
            KeyCode::Char('q') => AppEvent::Quit,
            _ => AppEvent::None,
        };
        self.handle_event(event);
    }

    fn handle_command_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let line = self.command_input.take().unwrap_or_default();
                let event = command_to_app_event(parse_command(&line));
                self.handle_event(event);
            }
            KeyCode::Esc => self.command_input = None,
            KeyCode::Backspace => {
                if let Some(input) = self.command_input.as_mut() {
                    input.pop();
                    if input.is_empty() {
                        self.command_input = None;
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.command_input.as_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = file::load(&path);
                self.load_result(result);
            }
            AppEvent::LoadClipboard => match clipboard::load() {
                Ok(Some(doc)) => self.load_document(doc),
                Ok(None) => log::debug!("Clipboard is blank; nothing loaded"),
                Err(e) => self.report_load_error(e),
            },
            AppEvent::LoadUrl(url) => {
                let result = web::fetch(&url, &self.config.web);
                self.load_result(result);
            }
            AppEvent::LoadText(text) => {
                let result = LoadedDocument::manual(&text);
                self.load_result(result);
            }
            AppEvent::SetSize(value) => {
                self.set_status(Status::info(format!("Size set to {}", value)));
                self.fields.size = value;
            }
            AppEvent::SetSpeed(value) => {
                self.set_status(Status::info(format!("Speed set to {}", value)));
                self.fields.speed = value;
                self.apply_live_speed();
            }
            AppEvent::AdjustSpeed(delta) => match self.fields.adjust_speed(delta) {
                Ok(speed) => {
                    log::debug!("Speed field adjusted to {}", speed);
                    self.apply_live_speed();
                }
                Err(e) => self.set_status(Status::error(e.to_string())),
            },
            AppEvent::TogglePause => self.toggle_pause(),
            AppEvent::PageBackward => self.page(false),
            AppEvent::PageForward => self.page(true),
            AppEvent::Quit => self.quit = true,
            AppEvent::Help => self.show_help = true,
            AppEvent::InvalidCommand(input) => {
                self.set_status(Status::error(format!(
                    "Unknown command: {} (press ? for help)",
                    input
                )));
            }
            AppEvent::None => {}
        }
    }

    fn load_result(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(doc) => self.load_document(doc),
            Err(e) => self.report_load_error(e),
        }
    }

    fn load_document(&mut self, doc: LoadedDocument) {
        self.session.load_text(&doc.text);
        self.current_word = None;
        self.current_delay = None;
        self.showing_context = false;

        let count = self.session.words().len();
        log::info!("Loaded {} words from {}", count, doc.source);
        self.set_status(Status::info(format!(
            "Loaded {} words from {} (Space to start)",
            count, doc.source
        )));
        self.source = Some(doc.source);
        self.source_text = doc.text;
    }

    fn report_load_error(&mut self, error: LoadError) {
        log::warn!("Load failed: {}", error);
        self.set_status(Status::error(error.to_string()));
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    fn toggle_pause(&mut self) {
        if !self.session.is_paused() {
            self.session.toggle_pause();
            self.current_word = None;
            self.current_delay = None;
            self.showing_context = true;
            log::info!(
                "Paused before word {} (context anchor {})",
                self.session.cursor(),
                self.session.cache_index()
            );
            return;
        }

        if self.session.words().is_empty() {
            self.set_status(Status::warning(
                "Nothing to read: load a file (@path), the clipboard (@@) or a page (:web url)",
            ));
            return;
        }

        let settings = match self.fields.parse() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Playback not started: {}", e);
                self.set_status(Status::error(e.to_string()));
                return;
            }
        };
        if settings.speed <= 0.0 {
            log::info!("Speed {} is not positive; playback not started", settings.speed);
            self.set_status(Status::warning("Speed must be greater than zero"));
            return;
        }
        if let Err(e) = base_word_delay(settings.speed) {
            log::warn!("Playback not started: {}", e);
            self.set_status(Status::error(e.to_string()));
            return;
        }

        self.display_size = settings.size;
        self.speed = settings.speed;
        self.session.toggle_pause();
        self.showing_context = false;
        self.status = None;
        log::info!(
            "Resumed at word {} ({} wpm, size {})",
            self.session.cursor(),
            self.speed,
            self.display_size
        );
        self.advance_word();
    }

    fn advance_word(&mut self) {
        let timing = self.config.reader.timing();
        match self.session.step() {
            PlaybackStep::Show(word) => {
                let word = word.to_string();
                match calculate_word_delay(&word, self.speed, &timing) {
                    Ok(delay) => {
                        self.current_delay = Some(delay);
                        self.current_word = Some(word);
                    }
                    Err(e) => self.halt_on_delay_error(&word, e),
                }
            }
            PlaybackStep::Halted => {
                self.current_word = None;
                self.current_delay = None;
            }
            PlaybackStep::Finished => {
                self.current_word = None;
                self.current_delay = None;
                self.showing_context = true;
                self.status = Some(Status::info("Finished. Space reads it again"));
                log::info!("Reached the end of the text");
            }
        }
    }

    /// Stops playback when a word's delay can't be scheduled.
    fn halt_on_delay_error(&mut self, word: &str, error: InputError) {
        log::warn!("Cannot schedule {:?}: {}", word, error);
        self.session.toggle_pause();
        self.current_word = None;
        self.current_delay = None;
        self.showing_context = true;
        self.set_status(Status::error(error.to_string()));
    }

    fn apply_live_speed(&mut self) {
        if self.session.is_paused() {
            return;
        }
        match self.fields.parse_speed() {
            Ok(speed) if speed > 0.0 && base_word_delay(speed).is_ok() => self.speed = speed,
            Ok(speed) => log::debug!("Keeping {} wpm; {} is not usable live", self.speed, speed),
            Err(e) => log::debug!("Keeping {} wpm: {}", self.speed, e),
        }
    }

    fn page(&mut self, forward: bool) {
        if !self.session.is_paused() {
            log::debug!("Ignoring context paging during playback");
            return;
        }
        self.showing_context = true;
        if forward {
            self.session.page_forward();
        } else {
            self.session.page_backward();
        }
        log::debug!(
            "Context paged {} to anchor {}",
            if forward { "forward" } else { "backward" },
            self.session.cache_index()
        );
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(
            self.mode(),
            &self.fields.size,
            &self.fields.speed,
            self.display_size,
        );

        state.display = if self.show_help {
            Display::Help
        } else if let Some(word) = self.current_word.as_ref().filter(|_| self.is_playing()) {
            Display::Word(word.clone())
        } else if self.showing_context {
            Display::Context(self.session.context_text())
        } else if !self.session.words().is_empty() {
            Display::Preview(self.source_text.clone())
        } else {
            Display::Welcome
        };

        state.progress = self.session.progress();
        state.source = self.source.clone();
        state.status = self.status.clone();
        state.command_input = self.command_input.clone();
        state
    }
}
