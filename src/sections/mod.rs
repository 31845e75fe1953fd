//! Password assessment sections
//!
//! Each section checks one criterion and suggests a fix when it is unmet.

mod length;
mod variety;

pub use length::{MIN_LENGTH, RECOMMENDED_LENGTH, length_section, recommended_length_section};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Criterion unmet, with an actionable suggestion
/// - `None` - Criterion satisfied
pub type SectionResult = Option<String>;
