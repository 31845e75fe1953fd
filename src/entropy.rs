//! Entropy estimation - charset detection, entropy bits, crack-time heuristic.

/// Special characters counted as their own charset class.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{}|;':",./<>?"#;

/// Assumed brute-force rate (high-end GPU rig).
const GUESSES_PER_SECOND: f64 = 1e10;

/// Charset size in play: sum of the sizes of each character class
/// actually present in the password. Classes entirely absent contribute
/// nothing, as do characters outside every recognized class.
pub fn charset_size(password: &str) -> usize {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        size += SPECIAL_CHARS.chars().count();
    }
    size
}

/// Estimated entropy in bits: length times log2 of the charset in play.
///
/// Returns 0.0 for an empty password or one using no recognized class,
/// so the logarithm is never taken on zero.
pub fn entropy_bits(password: &str) -> f64 {
    let length = password.chars().count();
    let charset = charset_size(password);
    if length == 0 || charset == 0 {
        return 0.0;
    }
    length as f64 * (charset as f64).log2()
}

/// Humanized brute-force duration for the given entropy estimate.
pub fn estimate_crack_time(entropy_bits: f64) -> String {
    if entropy_bits <= 0.0 {
        return "instantly (no entropy)".to_string();
    }

    let seconds = entropy_bits.exp2() / GUESSES_PER_SECOND;
    if !seconds.is_finite() {
        return "practically forever".to_string();
    }

    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3_600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 365.25 * 86_400.0;

    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        format!("{:.2} years", seconds / YEAR)
    }
}
