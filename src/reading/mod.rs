pub mod context;
pub mod session;

pub use context::expand_to_sentences;
pub use session::{PlaybackStep, ReaderSession, DEFAULT_CONTEXT_WORDS};
