use crate::engine::error::InputError;

/// Validated values of the size and speed fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub size: u16,
    /// Words per minute. Zero or negative means playback never starts.
    pub speed: f64,
}

/// The size and speed fields exactly as typed.
///
/// Nothing is validated until playback starts, matching a form whose fields
/// are read when the reader is resumed.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub size: String,
    pub speed: String,
}

impl DisplayFields {
    pub fn new(size: impl Into<String>, speed: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            speed: speed.into(),
        }
    }

    pub fn parse_size(&self) -> Result<u16, InputError> {
        match self.size.trim().parse::<u16>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(InputError::InvalidSize(self.size.clone())),
        }
    }

    pub fn parse_speed(&self) -> Result<f64, InputError> {
        match self.speed.trim().parse::<f64>() {
            Ok(speed) if speed.is_finite() => Ok(speed),
            _ => Err(InputError::InvalidSpeed(self.speed.clone())),
        }
    }

    pub fn parse(&self) -> Result<PlaybackSettings, InputError> {
        Ok(PlaybackSettings {
            size: self.parse_size()?,
            speed: self.parse_speed()?,
        })
    }

    /// Moves the speed field by `delta`, never below 1, and returns the new speed.
    pub fn adjust_speed(&mut self, delta: i32) -> Result<f64, InputError> {
        let speed = (self.parse_speed()? + delta as f64).max(1.0);
        self.speed = speed.to_string();
        Ok(speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let fields = DisplayFields::new("50", "400");
        assert_eq!(
            fields.parse(),
            Ok(PlaybackSettings {
                size: 50,
                speed: 400.0
            })
        );
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let fields = DisplayFields::new(" 32 ", "\t250.5 ");
        let settings = fields.parse().unwrap();
        assert_eq!(settings.size, 32);
        assert_eq!(settings.speed, 250.5);
    }

    #[test]
    fn test_non_numeric_speed_is_input_error() {
        let fields = DisplayFields::new("50", "fast");
        assert_eq!(
            fields.parse(),
            Err(InputError::InvalidSpeed("fast".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_size_is_input_error() {
        let fields = DisplayFields::new("big", "400");
        assert_eq!(
            fields.parse(),
            Err(InputError::InvalidSize("big".to_string()))
        );
    }

    #[test]
    fn test_zero_and_fractional_size_rejected() {
        assert!(DisplayFields::new("0", "400").parse_size().is_err());
        assert!(DisplayFields::new("12.5", "400").parse_size().is_err());
    }

    #[test]
    fn test_non_positive_speed_parses() {
        // Not an error: playback just never starts
        assert_eq!(DisplayFields::new("50", "0").parse_speed(), Ok(0.0));
        assert_eq!(DisplayFields::new("50", "-10").parse_speed(), Ok(-10.0));
    }

    #[test]
    fn test_non_finite_speed_rejected() {
        assert!(DisplayFields::new("50", "inf").parse_speed().is_err());
        assert!(DisplayFields::new("50", "NaN").parse_speed().is_err());
    }

    #[test]
    fn test_adjust_speed_rewrites_field() {
        let mut fields = DisplayFields::new("50", "400");
        assert_eq!(fields.adjust_speed(25), Ok(425.0));
        assert_eq!(fields.speed, "425");
        assert_eq!(fields.adjust_speed(-50), Ok(375.0));
        assert_eq!(fields.speed, "375");
    }

    #[test]
    fn test_adjust_speed_floor() {
        let mut fields = DisplayFields::new("50", "10");
        assert_eq!(fields.adjust_speed(-100), Ok(1.0));
        assert_eq!(fields.speed, "1");
    }

    #[test]
    fn test_adjust_speed_on_invalid_field_errors() {
        let mut fields = DisplayFields::new("50", "abc");
        assert!(fields.adjust_speed(25).is_err());
        assert_eq!(fields.speed, "abc");
    }
}
