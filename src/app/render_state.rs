use crate::app::mode::AppMode;
use crate::app::status::Status;

/// What the display area shows
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Nothing loaded yet
    Welcome,
    /// Key and command reference
    Help,
    /// Loaded but not yet read; the raw source text
    Preview(String),
    /// Current word during playback
    Word(String),
    /// Sentence-bounded context while paused
    Context(String),
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub display: Display,
    /// Size applied when playback last started
    pub display_size: u16,
    pub size_field: String,
    pub speed_field: String,
    pub progress: (usize, usize),
    pub source: Option<String>,
    pub status: Option<Status>,
    pub command_input: Option<String>,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode, size_field: &str, speed_field: &str, display_size: u16) -> Self {
        Self {
            mode,
            display: Display::Welcome,
            display_size,
            size_field: size_field.to_string(),
            speed_field: speed_field.to_string(),
            progress: (0, 0),
            source: None,
            status: None,
            command_input: None,
        }
    }
}
