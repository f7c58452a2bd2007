/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadUrl(String),
    LoadText(String),
    SetSize(String),
    SetSpeed(String),
    TogglePause,
    PageBackward,
    PageForward,
    AdjustSpeed(i32),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
