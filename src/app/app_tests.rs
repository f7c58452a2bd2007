use crate::app::mode::AppMode;
use crate::app::{App, AppEvent, Display, StatusKind};
use crate::engine::config::Config;
use crossterm::event::KeyCode;
use std::time::Duration;

fn app_with_text(text: &str) -> App {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::LoadText(text.to_string()));
    app
}

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_keypress(KeyCode::Char(c));
    }
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_initial_render_state() {
    let app = App::new(Config::default());
    let state = app.get_render_state();
    assert_eq!(state.mode, AppMode::Paused);
    assert_eq!(state.display, Display::Welcome);
    assert_eq!(state.size_field, "50");
    assert_eq!(state.speed_field, "400");
    assert_eq!(state.progress, (0, 0));
}

#[test]
fn test_load_text_shows_preview() {
    let app = app_with_text("Some typed words.");
    let state = app.get_render_state();
    assert_eq!(state.display, Display::Preview("Some typed words.".to_string()));
    assert_eq!(state.progress, (0, 3));
    assert_eq!(state.source.as_deref(), Some("typed text"));
}

#[test]
fn test_toggle_starts_playback_with_first_word() {
    let mut app = app_with_text("alpha beta gamma");
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.current_word(), Some("alpha"));
    let delay = app.current_delay().unwrap().as_secs_f64();
    assert!((delay - 0.15).abs() < 1e-6);
    assert_eq!(
        app.get_render_state().display,
        Display::Word("alpha".to_string())
    );
}

#[test]
fn test_long_word_gets_longer_delay() {
    let mut app = app_with_text("unquestionably");
    app.handle_event(AppEvent::SetSpeed("60".to_string()));
    app.handle_event(AppEvent::TogglePause);
    // 14 chars: 1s * 14/6
    let delay = app.current_delay().unwrap().as_secs_f64();
    assert!((delay - 14.0 / 6.0).abs() < 1e-6);
}

#[test]
fn test_tick_advances_and_finishes_pass() {
    let mut app = app_with_text("One two. Three");
    app.handle_event(AppEvent::TogglePause);
    app.tick();
    assert_eq!(app.current_word(), Some("two."));
    app.tick();
    assert_eq!(app.current_word(), Some("Three"));

    app.tick();
    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.current_word(), None);
    assert_eq!(app.current_delay(), None);
    assert_eq!(app.session().cursor(), 0);
    assert_eq!(
        app.get_render_state().display,
        Display::Context("One two. Three".to_string())
    );
}

#[test]
fn test_pause_shows_context() {
    let mut app = app_with_text("The quick brown fox. Jumps high.");
    app.handle_event(AppEvent::TogglePause);
    app.tick();
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.session().cursor(), 2);
    assert_eq!(
        app.get_render_state().display,
        Display::Context("The quick brown fox.".to_string())
    );
}

#[test]
fn test_invalid_speed_does_not_start_playback() {
    let mut app = app_with_text("words to read");
    app.handle_event(AppEvent::SetSpeed("450 wpm".to_string()));
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.current_word(), None);
    assert_eq!(app.session().cursor(), 0);
    let status = app.status().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.contains("Speed"));
}

#[test]
fn test_invalid_size_does_not_start_playback() {
    let mut app = app_with_text("words to read");
    app.handle_event(AppEvent::SetSize("huge".to_string()));
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_zero_speed_is_a_no_op() {
    let mut app = app_with_text("words to read");
    app.handle_event(AppEvent::SetSpeed("0".to_string()));
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.current_word(), None);
    assert_eq!(app.status().unwrap().kind, StatusKind::Warning);
}

#[test]
fn test_toggle_without_text_warns() {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::TogglePause);
    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.status().unwrap().kind, StatusKind::Warning);
}

#[test]
fn test_size_applies_on_resume() {
    let mut app = app_with_text("a b c");
    app.handle_event(AppEvent::SetSize("80".to_string()));
    assert_eq!(app.get_render_state().display_size, 50);

    app.handle_event(AppEvent::TogglePause);
    assert_eq!(app.get_render_state().display_size, 80);
}

#[test]
fn test_paging_ignored_during_playback() {
    let mut app = app_with_text("a b c. d e f.");
    app.handle_event(AppEvent::TogglePause);
    app.handle_event(AppEvent::PageBackward);
    assert_eq!(app.session().cache_index(), 0);
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_paging_past_end_shows_empty_context() {
    let mut app = app_with_text("Short text.");
    app.handle_event(AppEvent::TogglePause);
    app.handle_event(AppEvent::TogglePause);
    for _ in 0..3 {
        app.handle_event(AppEvent::PageForward);
    }
    assert_eq!(
        app.get_render_state().display,
        Display::Context(String::new())
    );
}

#[test]
fn test_new_load_stops_playback() {
    let mut app = app_with_text("first source text");
    app.handle_event(AppEvent::TogglePause);
    app.tick();

    app.handle_event(AppEvent::LoadText("second source".to_string()));
    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.session().cursor(), 0);
    assert_eq!(app.session().words(), ["second", "source"]);
    assert!(app.session().context().is_empty());
}

#[test]
fn test_failed_file_load_keeps_words() {
    let mut app = app_with_text("keep these words");
    app.handle_event(AppEvent::LoadFile("/nonexistent/skimmer.txt".to_string()));

    assert_eq!(app.session().words(), ["keep", "these", "words"]);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_command_deck_sets_speed() {
    let mut app = App::new(Config::default());
    type_keys(&mut app, ":speed 250");
    assert_eq!(app.mode(), AppMode::Command);
    app.handle_keypress(KeyCode::Enter);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.fields().speed, "250");
}

#[test]
fn test_command_deck_manual_entry() {
    let mut app = App::new(Config::default());
    type_keys(&mut app, ":text Typed by hand.");
    app.handle_keypress(KeyCode::Enter);
    assert_eq!(app.session().words(), ["Typed", "by", "hand."]);
}

#[test]
fn test_command_deck_escape_and_backspace() {
    let mut app = App::new(Config::default());
    type_keys(&mut app, ":q");
    app.handle_keypress(KeyCode::Esc);
    assert_eq!(app.mode(), AppMode::Paused);

    type_keys(&mut app, "@");
    app.handle_keypress(KeyCode::Backspace);
    assert_eq!(app.mode(), AppMode::Paused);
}

#[test]
fn test_command_deck_unknown_command() {
    let mut app = App::new(Config::default());
    type_keys(&mut app, ":bogus");
    app.handle_keypress(KeyCode::Enter);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_speed_keys_nudge_field() {
    let mut app = App::new(Config::default());
    app.handle_keypress(KeyCode::Char('+'));
    assert_eq!(app.fields().speed, "425");
    app.handle_keypress(KeyCode::Char('-'));
    app.handle_keypress(KeyCode::Char('-'));
    assert_eq!(app.fields().speed, "375");
}

#[test]
fn test_speed_nudge_applies_during_playback() {
    let mut app = app_with_text("one two three");
    app.handle_event(AppEvent::SetSpeed("60".to_string()));
    app.handle_event(AppEvent::TogglePause);
    assert_eq!(app.current_delay(), Some(Duration::from_secs(1)));

    app.handle_event(AppEvent::AdjustSpeed(60));
    app.tick();
    assert_eq!(app.current_delay(), Some(Duration::from_millis(500)));
}

#[test]
fn test_help_key_shows_help_until_next_key() {
    let mut app = App::new(Config::default());
    app.handle_keypress(KeyCode::Char('?'));
    assert_eq!(app.get_render_state().display, Display::Help);
    app.handle_keypress(KeyCode::Char('x'));
    assert_eq!(app.get_render_state().display, Display::Welcome);
}

#[test]
fn test_space_key_toggles_playback() {
    let mut app = app_with_text("a b c");
    app.handle_keypress(KeyCode::Char(' '));
    assert_eq!(app.mode(), AppMode::Reading);
    app.handle_keypress(KeyCode::Char(' '));
    assert_eq!(app.mode(), AppMode::Paused);
}

#[test]
fn test_unschedulably_slow_speed_stays_paused() {
    let mut app = app_with_text("words to read");
    app.handle_event(AppEvent::SetSpeed("1e-20".to_string()));
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.current_word(), None);
    assert_eq!(app.session().cursor(), 0);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_subnormal_speed_stays_paused() {
    let mut app = app_with_text("words to read");
    app.handle_event(AppEvent::SetSpeed("1e-310".to_string()));
    app.handle_event(AppEvent::TogglePause);

    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_long_word_overflow_pauses_playback() {
    let mut app = app_with_text("short unquestionably");
    // base delay fits, the long word's scaled delay does not
    app.handle_event(AppEvent::SetSpeed("6e-18".to_string()));
    app.handle_event(AppEvent::TogglePause);
    assert_eq!(app.current_word(), Some("short"));

    app.tick();
    assert_eq!(app.mode(), AppMode::Paused);
    assert_eq!(app.current_word(), None);
    assert_eq!(app.current_delay(), None);
    assert_eq!(app.status().unwrap().kind, StatusKind::Error);
}

#[test]
fn test_live_speed_ignores_unschedulable_value() {
    let mut app = app_with_text("one two three");
    app.handle_event(AppEvent::SetSpeed("60".to_string()));
    app.handle_event(AppEvent::TogglePause);

    app.handle_event(AppEvent::SetSpeed("1e-20".to_string()));
    app.tick();
    assert_eq!(app.current_word(), Some("two"));
    assert_eq!(app.current_delay(), Some(Duration::from_secs(1)));
}
