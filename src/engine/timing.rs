use crate::engine::config::TimingConfig;
use crate::engine::error::InputError;
use std::time::Duration;

/// Splits text on runs of whitespace. Punctuation stays attached to its word.
pub fn tokenize_text(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Seconds per word at `speed` words per minute. Callers guarantee `speed > 0`.
pub fn speed_to_seconds(speed: f64) -> f64 {
    60.0 / speed
}

/// Display time of a word at or below the long-word threshold.
pub fn base_word_delay(speed: f64) -> Result<Duration, InputError> {
    Duration::try_from_secs_f64(speed_to_seconds(speed))
        .map_err(|_| InputError::UnschedulableSpeed(speed))
}

/// Display time for one word.
///
/// Words longer than the threshold are held for `length / divisor` times the
/// base delay, so longer words get proportionally more time on screen. A
/// delay that doesn't fit in a `Duration` is an error.
pub fn calculate_word_delay(
    word: &str,
    speed: f64,
    config: &TimingConfig,
) -> Result<Duration, InputError> {
    let base_delay = speed_to_seconds(speed);
    let word_length = word.chars().count();

    let delay = if word_length > config.long_word_threshold {
        base_delay * (word_length as f64 / config.long_word_divisor)
    } else {
        base_delay
    };

    Duration::try_from_secs_f64(delay).map_err(|_| InputError::UnschedulableSpeed(speed))
}
