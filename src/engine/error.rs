use thiserror::Error;

/// Rejected contents of the size or speed field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Size must be a whole number greater than zero, got {0:?}")]
    InvalidSize(String),

    #[error("Speed must be a number, got {0:?}")]
    InvalidSpeed(String),

    #[error("Speed {0} is too slow to schedule")]
    UnschedulableSpeed(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_quote_the_field() {
        let err = InputError::InvalidSpeed("fast".to_string());
        assert_eq!(err.to_string(), "Speed must be a number, got \"fast\"");

        let err = InputError::InvalidSize("".to_string());
        assert!(err.to_string().contains("Size"));
    }
}
