use crate::engine::timing::tokenize_text;
use crate::reading::context::expand_to_sentences;

/// Words captured before the cursor on pause, and the paging stride
pub const DEFAULT_CONTEXT_WORDS: usize = 20;

/// Outcome of one playback step
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackStep<'a> {
    /// Display this word for its delay, then step again
    Show(&'a str),
    /// Paused; nothing to display
    Halted,
    /// The pass reached the end. The session is paused with the closing
    /// context captured and the cursor back at 0.
    Finished,
}

/// Reading state for one loaded source
pub struct ReaderSession {
    words: Vec<String>,
    current_word_index: usize,
    paused: bool,
    paused_words: Vec<String>,
    cache_index: isize,
    context_words: usize,
}

impl ReaderSession {
    pub fn new(context_words: usize) -> Self {
        Self {
            words: Vec::new(),
            current_word_index: 0,
            paused: true,
            paused_words: Vec::new(),
            cache_index: 0,
            context_words,
        }
    }

    /// Replaces the word list and resets cursor, pause flag and context.
    pub fn load_text(&mut self, text: &str) {
        self.words = tokenize_text(text);
        self.current_word_index = 0;
        self.paused = true;
        self.paused_words.clear();
        self.cache_index = 0;
        log::debug!("Session loaded {} words", self.words.len());
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of the next word playback will display
    pub fn cursor(&self) -> usize {
        self.current_word_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn context(&self) -> &[String] {
        &self.paused_words
    }

    pub fn context_text(&self) -> String {
        self.paused_words.join(" ")
    }

    pub fn cache_index(&self) -> isize {
        self.cache_index
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.current_word_index, self.words.len())
    }

    /// Flips the pause flag and returns the new value.
    ///
    /// Pausing captures the context behind the cursor; resuming clears it.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if self.paused {
            self.capture_context(self.current_word_index);
        } else {
            self.paused_words.clear();
        }
        self.paused
    }

    /// Runs one iteration of the playback loop.
    pub fn step(&mut self) -> PlaybackStep<'_> {
        if self.paused {
            return PlaybackStep::Halted;
        }

        if self.current_word_index >= self.words.len() {
            self.paused = true;
            self.capture_context(self.words.len());
            self.current_word_index = 0;
            return PlaybackStep::Finished;
        }

        let index = self.current_word_index;
        self.current_word_index += 1;
        PlaybackStep::Show(&self.words[index])
    }

    /// Shows the context window one stride earlier.
    pub fn page_backward(&mut self) {
        let stride = self.stride();
        let start = self.cache_index.saturating_sub(stride);
        self.paused_words = expand_to_sentences(&self.words, start, self.cache_index);
        self.cache_index = start;
    }

    /// Shows the context window starting at the cache index, then moves the
    /// cache index one stride later.
    pub fn page_forward(&mut self) {
        let stride = self.stride();
        let end = self.cache_index.saturating_add(stride);
        self.paused_words = expand_to_sentences(&self.words, self.cache_index, end);
        self.cache_index = end;
    }

    fn capture_context(&mut self, anchor: usize) {
        let anchor = anchor as isize;
        let left_edge = anchor.saturating_sub(self.stride());
        self.paused_words = expand_to_sentences(&self.words, left_edge, anchor);
        self.cache_index = left_edge;
    }

    fn stride(&self) -> isize {
        isize::try_from(self.context_words).unwrap_or(isize::MAX)
    }
}

impl Default for ReaderSession {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_WORDS)
    }
}
