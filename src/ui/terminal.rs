use crate::app::{mode::AppMode, App, AppEvent, Display, RenderState};
use crate::ui::reader::view::{
    render_command_deck, render_context, render_fields_bar, render_help, render_placeholder,
    render_preview, render_progress_bar, render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::colors;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Poll timeout while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draws, waits for a key or for the current word's delay, and repeats
    /// until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut deadline: Option<Instant> = None;

        loop {
            self.render_frame(app)?;

            match (app.current_delay(), deadline) {
                (None, _) => deadline = None,
                (Some(delay), None) => deadline = Some(Instant::now() + delay),
                (Some(_), Some(_)) => {}
            }

            let timeout = deadline
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            app.handle_event(AppEvent::Quit);
                        } else {
                            app.handle_keypress(key.code);
                        }
                    }
                }
            }

            if let Some(due) = deadline {
                if Instant::now() >= due {
                    app.tick();
                    deadline = None;
                }
            }

            if app.mode() == AppMode::Quit {
                log::info!("Quitting");
                return Ok(());
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            render_display(frame, chunks[0], &render_state);
            frame.render_widget(render_progress_bar(render_state.progress), chunks[1]);
            frame.render_widget(render_fields_bar(&render_state), chunks[2]);
            render_command_deck(frame, chunks[3], &render_state);
        })?;

        Ok(())
    }
}

fn render_display(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()))
        .style(Style::default().bg(colors::background()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.display {
        Display::Word(word) => {
            let row = Rect {
                y: inner.y + inner.height / 2,
                height: inner.height.min(1),
                ..inner
            };
            frame.render_widget(render_word_display(word, state.display_size, row.width), row);
        }
        Display::Context(text) => frame.render_widget(render_context(text), inner),
        Display::Preview(text) => frame.render_widget(render_preview(text), inner),
        Display::Help => frame.render_widget(render_help(), inner),
        Display::Welcome => {
            let lines = 4;
            let offset = inner.height.saturating_sub(lines) / 2;
            let centered = Rect {
                y: inner.y + offset,
                height: inner.height - offset,
                ..inner
            };
            frame.render_widget(render_placeholder(), centered);
        }
    }
}
