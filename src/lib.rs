//! Password strength assessment library
//!
//! Scores a password against five fixed criteria (minimum length,
//! uppercase, lowercase, digit, special character), estimates entropy
//! from the character classes in play, and produces one actionable
//! suggestion per unmet criterion.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_assess::assess_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = assess_password(&password);
//!
//! println!("Score: {}", assessment.score.value());
//! println!("Strength: {}", assessment.strength());
//! for suggestion in &assessment.suggestions {
//!     println!("  - {}", suggestion);
//! }
//! ```

// Internal modules
mod entropy;
mod evaluator;
mod sections;
mod types;

// CLI collaborators
pub mod input;
pub mod report;

// Public API
pub use entropy::{SPECIAL_CHARS, charset_size, entropy_bits, estimate_crack_time};
pub use evaluator::assess_password;
pub use input::InputError;
pub use types::{CriteriaReport, PasswordAssessment, PasswordScore, PasswordStrength};
