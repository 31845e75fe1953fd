//! Report rendering - formats a `PasswordAssessment` for the terminal.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::sections::MIN_LENGTH;
use crate::types::{CriteriaReport, PasswordAssessment, PasswordStrength};

const BANNER_WIDTH: usize = 60;

fn tier_colored(strength: PasswordStrength) -> ColoredString {
    let label = strength.to_string();
    match strength {
        PasswordStrength::Weak => label.red(),
        PasswordStrength::Medium => label.yellow(),
        PasswordStrength::Strong => label.green(),
        PasswordStrength::VeryStrong => label.bright_green(),
    }
}

fn check_mark(met: bool) -> ColoredString {
    if met { "✓".green() } else { "✗".red() }
}

/// Renders the full human-readable report.
///
/// Presentation only - every number and string comes straight from the
/// assessment.
pub fn render(assessment: &PasswordAssessment) -> String {
    let strength = assessment.strength();
    let criteria = &assessment.criteria;
    let rule = "=".repeat(BANNER_WIDTH);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{}", rule.bright_yellow()));
    lines.push(format!(
        "{}",
        format!("{:^width$}", "PASSWORD STRENGTH ASSESSMENT", width = BANNER_WIDTH).bold()
    ));
    lines.push(format!("{}", rule.bright_yellow()));
    lines.push(format!("Password length: {} characters", criteria.length));
    lines.push(format!(
        "Score: {}",
        format!("{}/100", assessment.score.value()).cyan()
    ));
    lines.push(format!(
        "Estimated entropy: {:.2} bits",
        assessment.entropy_bits
    ));
    lines.push(format!(
        "Estimated cracking time (brute force): {}",
        assessment.crack_time
    ));
    lines.push(format!("Strength: {}", tier_colored(strength)));
    lines.push(strength.description().to_string());
    lines.push(String::new());

    lines.push("Criteria:".to_string());
    lines.push(format!(
        "  {} At least {} characters",
        check_mark(criteria.has_min_length),
        MIN_LENGTH
    ));
    lines.push(format!(
        "  {} Uppercase letters",
        check_mark(criteria.has_uppercase)
    ));
    lines.push(format!(
        "  {} Lowercase letters",
        check_mark(criteria.has_lowercase)
    ));
    lines.push(format!("  {} Numbers", check_mark(criteria.has_digit)));
    lines.push(format!(
        "  {} Special characters",
        check_mark(criteria.has_special)
    ));
    lines.push(String::new());

    if assessment.suggestions.is_empty() {
        lines.push(format!(
            "{}",
            "Great! Your password meets all basic criteria.".green()
        ));
    } else {
        lines.push("Suggestions for improvement:".to_string());
        for suggestion in &assessment.suggestions {
            lines.push(format!("  - {}", suggestion));
        }
    }
    lines.push(String::new());
    lines.push("Tip: use a password manager for complex, unique passwords per account.".to_string());

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    score: u8,
    strength: String,
    entropy_bits: f64,
    crack_time: &'a str,
    criteria: &'a CriteriaReport,
    suggestions: &'a [String],
}

/// Renders the assessment as pretty-printed JSON.
pub fn render_json(assessment: &PasswordAssessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        score: assessment.score.value(),
        strength: assessment.strength().to_string(),
        entropy_bits: assessment.entropy_bits,
        crack_time: &assessment.crack_time,
        criteria: &assessment.criteria,
        suggestions: &assessment.suggestions,
    })
}
