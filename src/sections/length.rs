//! Length sections - minimum length criterion and the longer-password advisory.

use super::SectionResult;
use secrecy::{ExposeSecret, SecretString};

/// Minimum acceptable password length.
pub const MIN_LENGTH: usize = 8;

/// Length at which the advisory stops firing and the top scoring tier starts.
pub const RECOMMENDED_LENGTH: usize = 12;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(suggestion)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!("Use at least {} characters.", MIN_LENGTH));
    }
    None
}

/// Advises longer passwords below the recommended length.
pub fn recommended_length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < RECOMMENDED_LENGTH {
        return Some(format!(
            "Consider {}+ characters for better strength.",
            RECOMMENDED_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, Some("Use at least 8 characters.".to_string()));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        let pwd = SecretString::new("pässwörd".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_recommended_length_section_below_threshold() {
        let pwd = SecretString::new("12345678".to_string().into());
        let result = recommended_length_section(&pwd);
        assert!(matches!(result, Some(_)));
    }

    #[test]
    fn test_recommended_length_section_at_threshold() {
        let pwd = SecretString::new("TwelveChars!".to_string().into());
        let result = recommended_length_section(&pwd);
        assert_eq!(result, None);
    }
}
