//! # Input Validation
//!
//! Checks applied to user-supplied names before anything is sent to the secret store.

use thiserror::Error;

use crate::constants::MSG_EMPTY_INPUT;

/// Rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MSG_EMPTY_INPUT)]
    Empty,
    #[error("Message cannot exceed {max} characters")]
    TooLong { max: usize },
}

impl ValidationError {
    /// Metric label for the rejection
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// What the page handler should do with accepted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction<'a> {
    /// The keyword was entered: fetch the configured secret
    LookupSecret,
    /// Anything else: show the input back unchanged
    Echo(&'a str),
}

/// Validate a user-supplied name or message
///
/// Absent, empty and whitespace-only input is rejected first, then input longer than
/// `max_len` characters. The length check counts characters of the untrimmed input.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] or [`ValidationError::TooLong`].
pub fn validate_input(input: Option<&str>, max_len: usize) -> Result<&str, ValidationError> {
    let input = input.unwrap_or_default();
    if input.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if input.chars().count() > max_len {
        return Err(ValidationError::TooLong { max: max_len });
    }
    Ok(input)
}

/// Decide between a secret lookup and an echo
///
/// Both sides are trimmed and compared case-insensitively.
pub fn classify_message<'a>(input: &'a str, keyword: &str) -> PageAction<'a> {
    if input.trim().to_lowercase() == keyword.trim().to_lowercase() {
        PageAction::LookupSecret
    } else {
        PageAction::Echo(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_blank_input_rejected() {
        assert_eq!(validate_input(None, 1000), Err(ValidationError::Empty));
        assert_eq!(validate_input(Some(""), 1000), Err(ValidationError::Empty));
        assert_eq!(validate_input(Some(" \t\n "), 1000), Err(ValidationError::Empty));
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let at_limit = "a".repeat(1000);
        assert_eq!(validate_input(Some(&at_limit), 1000), Ok(at_limit.as_str()));

        let over = "a".repeat(1001);
        assert_eq!(
            validate_input(Some(&over), 1000),
            Err(ValidationError::TooLong { max: 1000 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let accents = "é".repeat(1000);
        assert!(validate_input(Some(&accents), 1000).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter a message");
        assert_eq!(
            ValidationError::TooLong { max: 1000 }.to_string(),
            "Message cannot exceed 1000 characters"
        );
    }

    #[test]
    fn test_keyword_detection() {
        for input in ["secret", "SECRET", "  Secret  ", "\tsEcReT\n"] {
            assert_eq!(classify_message(input, "secret"), PageAction::LookupSecret, "{input:?}");
        }
        assert_eq!(classify_message("secrets", "secret"), PageAction::Echo("secrets"));
        assert_eq!(classify_message(" hello ", "secret"), PageAction::Echo(" hello "));
    }

    #[test]
    fn test_keyword_case_does_not_matter() {
        assert_eq!(classify_message("secret", "Secret"), PageAction::LookupSecret);
        assert_eq!(classify_message(" PASSWORD ", "Password"), PageAction::LookupSecret);
    }
}
