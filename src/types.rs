//! Core assessment types - score, strength tier, criteria report, result.

use std::fmt;

use serde::Serialize;

/// Password score clamped to the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Creates a score, clamping the raw value into [0, 100].
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Strength tier derived from the score via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Threshold mapping: < 40 Weak, 40-69 Medium, 70-89 Strong, >= 90 Very Strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Self::Weak,
            40..=69 => Self::Medium,
            70..=89 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// One-line summary of what the tier means for the user.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Weak => "Weak password. Vulnerable to common attacks; strengthen it before use.",
            Self::Medium => "Moderate strength. Consider improvements for better security.",
            Self::Strong => "Good password. Meets most security recommendations.",
            Self::VeryStrong => "Excellent password! Highly resistant to brute-force guessing.",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of the five criterion checks plus the measured length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriteriaReport {
    pub length: usize,
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CriteriaReport {
    /// Number of character classes present (0-4).
    pub fn class_count(&self) -> usize {
        [
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    pub fn all_met(&self) -> bool {
        self.has_min_length && self.class_count() == 4
    }
}

/// Full result of assessing one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordAssessment {
    pub score: PasswordScore,
    pub entropy_bits: f64,
    pub crack_time: String,
    pub criteria: CriteriaReport,
    pub suggestions: Vec<String>,
}

impl PasswordAssessment {
    /// Strength tier implied by the score.
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score.value())
    }

    pub fn meets_all_criteria(&self) -> bool {
        self.criteria.all_met()
    }
}
