#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Words are flashing
    Reading,
    /// Playback halted; the context window is on screen
    Paused,
    /// The command deck has focus
    Command,
    Quit,
}
