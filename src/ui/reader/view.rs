use crate::app::mode::AppMode;
use crate::app::{RenderState, StatusKind};
use crate::ui::command::HELP_LINES;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display size (in points) that one terminal cell stands for
pub const POINTS_PER_CELL: u16 = 16;
pub const MAX_LETTER_SPACING: usize = 4;

/// Cells placed between graphemes of the displayed word.
///
/// A terminal can't change its font size, so larger sizes spread the word
/// out instead.
pub fn letter_spacing(size: u16) -> usize {
    ((size / POINTS_PER_CELL) as usize)
        .saturating_sub(1)
        .min(MAX_LETTER_SPACING)
}

pub fn space_graphemes(word: &str, spacing: usize) -> String {
    if spacing == 0 {
        return word.to_string();
    }
    let gap = " ".repeat(spacing);
    word.graphemes(true).collect::<Vec<_>>().join(&gap)
}

/// Spaces the word for `size`, tightening until it fits in `width` columns.
pub fn fit_word(word: &str, size: u16, width: u16) -> String {
    let mut spacing = letter_spacing(size);
    loop {
        let spaced = space_graphemes(word, spacing);
        if spacing == 0 || spaced.width() <= width as usize {
            return spaced;
        }
        spacing -= 1;
    }
}

pub fn render_word_display(word: &str, size: u16, width: u16) -> Paragraph<'static> {
    let style = Style::default()
        .fg(colors::text())
        .add_modifier(Modifier::BOLD);

    Paragraph::new(Line::from(Span::styled(fit_word(word, size, width), style)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

pub fn render_context(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_preview(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .style(
            Style::default()
                .fg(colors::dimmed())
                .bg(colors::background()),
        )
}

pub fn render_placeholder() -> Paragraph<'static> {
    let text = "Type @file.txt to load a file\nOr @@ to load from the clipboard\nOr :web <url> to read a page\n? for help, q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors::dimmed())
                .bg(colors::background()),
        )
}

pub fn render_help() -> Paragraph<'static> {
    let lines: Vec<Line> = HELP_LINES.iter().map(|line| Line::from(*line)).collect();
    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let width = if total == 0 {
        0.0
    } else {
        (current as f64 / total as f64) * 100.0
    };

    let filled_len = ((width / 100.0 * 20.0) as usize).min(20);
    let empty_len = 20 - filled_len;

    let mut spans = Vec::new();
    for _ in 0..filled_len {
        spans.push(Span::styled("─", Style::default().fg(colors::text())));
    }
    for _ in 0..empty_len {
        spans.push(Span::styled("─", Style::default().fg(colors::dimmed())));
    }

    Line::from(spans).alignment(Alignment::Center)
}

fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Reading => " READING ",
        AppMode::Paused => " PAUSED ",
        AppMode::Command => " COMMAND ",
        AppMode::Quit => " QUIT ",
    }
}

/// Mode, the two input fields, position and the latest status message
pub fn render_fields_bar(state: &RenderState) -> Line<'static> {
    let label = Style::default().fg(colors::dimmed());
    let value = Style::default().fg(colors::text());

    let mut spans = vec![
        Span::styled(
            mode_label(state.mode),
            Style::default()
                .fg(colors::background())
                .bg(colors::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" size ", label),
        Span::styled(state.size_field.clone(), value),
        Span::styled("  speed ", label),
        Span::styled(state.speed_field.clone(), value),
        Span::styled(
            format!("  {}/{}", state.progress.0, state.progress.1),
            label,
        ),
    ];

    if let Some(source) = &state.source {
        spans.push(Span::styled(format!("  {}", source), label));
    }

    if let Some(status) = &state.status {
        let color = match status.kind {
            StatusKind::Info => colors::text(),
            StatusKind::Warning => colors::warning(),
            StatusKind::Error => colors::accent(),
        };
        spans.push(Span::styled(
            format!("  {}", status.message),
            Style::default().fg(color),
        ));
    }

    Line::from(spans)
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar = Paragraph::new("▌")
        .style(Style::default().fg(colors::accent()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let line = match &state.command_input {
        Some(input) => Line::from(vec![
            Span::styled(input.clone(), Style::default().fg(colors::text())),
            Span::styled("█", Style::default().fg(colors::accent())),
        ]),
        None => Line::from(Span::styled(
            " Space pause · ←/→ context · +/- speed · : command · ? help",
            Style::default().fg(colors::dimmed()),
        )),
    };

    let input_widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::NONE)
            .style(Style::default().bg(colors::surface())),
    );
    frame.render_widget(input_widget, layout[1]);
}
