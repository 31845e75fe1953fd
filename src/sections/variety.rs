//! Character variety sections - uppercase, lowercase, digit and special checks.

use super::SectionResult;
use crate::entropy::SPECIAL_CHARS;
use secrecy::{ExposeSecret, SecretString};

/// Checks for at least one uppercase letter (A-Z).
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Include at least one uppercase letter (A-Z).".to_string());
    }
    None
}

/// Checks for at least one lowercase letter (a-z).
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Include at least one lowercase letter (a-z).".to_string());
    }
    None
}

/// Checks for at least one digit (0-9).
pub fn digit_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        return Some("Include at least one number (0-9).".to_string());
    }
    None
}

/// Checks for at least one character from the fixed special set.
pub fn special_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Include at least one special character (e.g., !@#$%).".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_section_missing() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        let result = uppercase_section(&pwd);
        assert!(matches!(result, Some(_)));
        if let Some(suggestion) = result {
            assert!(suggestion.contains("uppercase"));
        }
    }

    #[test]
    fn test_uppercase_section_present() {
        let pwd = SecretString::new("Uppercase123!".to_string().into());
        assert_eq!(uppercase_section(&pwd), None);
    }

    #[test]
    fn test_lowercase_section_missing() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        let result = lowercase_section(&pwd);
        assert!(matches!(result, Some(_)));
        if let Some(suggestion) = result {
            assert!(suggestion.contains("lowercase"));
        }
    }

    #[test]
    fn test_digit_section_missing() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        let result = digit_section(&pwd);
        assert!(matches!(result, Some(_)));
        if let Some(suggestion) = result {
            assert!(suggestion.contains("number"));
        }
    }

    #[test]
    fn test_special_section_missing() {
        let pwd = SecretString::new("NoSpecial123".to_string().into());
        let result = special_section(&pwd);
        assert!(matches!(result, Some(_)));
        if let Some(suggestion) = result {
            assert!(suggestion.contains("special"));
        }
    }

    #[test]
    fn test_special_section_ignores_unlisted_symbols() {
        // Space and non-ASCII symbols are not part of the fixed special set.
        let pwd = SecretString::new("With Space1A".to_string().into());
        assert!(matches!(special_section(&pwd), Some(_)));
    }

    #[test]
    fn test_all_sections_pass_for_varied_password() {
        let pwd = SecretString::new("HasAll123!@#".to_string().into());
        assert_eq!(uppercase_section(&pwd), None);
        assert_eq!(lowercase_section(&pwd), None);
        assert_eq!(digit_section(&pwd), None);
        assert_eq!(special_section(&pwd), None);
    }
}
