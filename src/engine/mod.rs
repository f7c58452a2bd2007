pub mod config;
pub mod error;
pub mod timing;

pub use error::InputError;
pub use timing::{base_word_delay, calculate_word_delay, speed_to_seconds, tokenize_text};
