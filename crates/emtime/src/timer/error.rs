use std::fmt;

/// Errors produced while constructing a `Timer`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TimerError {
    /// The tick interval was zero, negative, NaN or infinite.
    InvalidInterval(f64),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::InvalidInterval(value) => write!(
                f,
                "invalid timer interval: {value} (must be a finite number of seconds > 0)"
            ),
        }
    }
}

impl std::error::Error for TimerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_value() {
        let msg = TimerError::InvalidInterval(-0.5).to_string();
        assert!(msg.contains("-0.5"), "{msg}");
        assert!(msg.contains("> 0"), "{msg}");
    }
}
