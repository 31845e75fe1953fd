//! Password strength evaluator - main assessment logic.

use secrecy::{ExposeSecret, SecretString};

use crate::entropy::{SPECIAL_CHARS, entropy_bits, estimate_crack_time};
use crate::sections::{
    MIN_LENGTH, RECOMMENDED_LENGTH, SectionResult, digit_section, length_section,
    lowercase_section, recommended_length_section, special_section, uppercase_section,
};
use crate::types::{CriteriaReport, PasswordAssessment, PasswordScore};

/// Points for each character class present (4 classes, max 70).
const CLASS_POINTS: f64 = 17.5;

/// Assesses password strength and returns a detailed result.
///
/// Pure and total: deterministic for a given input, never fails. An empty
/// password yields the weakest case (score 0, zero entropy, every
/// suggestion raised) rather than an error.
///
/// # Arguments
/// * `password` - The password to assess
///
/// # Returns
/// A `PasswordAssessment` containing score, entropy and suggestions.
pub fn assess_password(password: &SecretString) -> PasswordAssessment {
    let mut suggestions = Vec::new();

    // Orchestrator: execute sections in fixed criterion order
    let sections: [fn(&SecretString) -> SectionResult; 6] = [
        length_section,
        recommended_length_section,
        uppercase_section,
        lowercase_section,
        digit_section,
        special_section,
    ];

    for section_fn in sections {
        if let Some(suggestion) = section_fn(password) {
            suggestions.push(suggestion);
        }
    }

    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let criteria = CriteriaReport {
        length,
        has_min_length: length >= MIN_LENGTH,
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
    };

    // Length tier: up to 30 points
    let mut raw = if length >= RECOMMENDED_LENGTH {
        30.0
    } else if length >= MIN_LENGTH {
        20.0
    } else if length >= 6 {
        10.0
    } else {
        0.0
    };

    // Character variety: 17.5 points per class, up to 70
    raw += criteria.class_count() as f64 * CLASS_POINTS;

    let score = PasswordScore::new(raw as i64);
    let entropy = entropy_bits(pwd);
    let crack_time = estimate_crack_time(entropy);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "assessment complete: score={} entropy={:.2}",
        score.value(),
        entropy
    );

    PasswordAssessment {
        score,
        entropy_bits: entropy,
        crack_time,
        criteria,
        suggestions,
    }
}
