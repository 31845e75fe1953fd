//! Input collection - resolves the password from a flag or a masked prompt.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("no password provided")]
    Empty,
    #[error("failed to read password: {0}")]
    Read(#[from] std::io::Error),
}

/// Prompts for the password on the controlling terminal without echoing.
pub fn prompt_masked() -> Result<SecretString, InputError> {
    let pwd = rpassword::prompt_password("Enter password to assess (hidden): ")?;
    if pwd.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(SecretString::new(pwd.into()))
}

/// Resolves the password from the CLI arguments.
///
/// A `--password` value wins; otherwise the masked prompt runs, with a
/// notice when the user gave no mode flag at all. An empty password is a
/// usage error here - the assessment itself stays total over any string
/// for library callers.
pub fn resolve_password(
    password: Option<String>,
    interactive: bool,
) -> Result<SecretString, InputError> {
    match password {
        Some(pwd) if !pwd.is_empty() => Ok(SecretString::new(pwd.into())),
        Some(_) => Err(InputError::Empty),
        None => {
            if !interactive {
                eprintln!("No password provided. Starting interactive mode...");
            }
            #[cfg(feature = "tracing")]
            tracing::debug!("reading password from interactive prompt");
            prompt_masked()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_resolve_password_from_flag() {
        let result = resolve_password(Some("MyPass123!".to_string()), false);
        assert_eq!(result.unwrap().expose_secret(), "MyPass123!");
    }

    #[test]
    fn test_resolve_empty_flag_is_usage_error() {
        let result = resolve_password(Some(String::new()), false);
        assert!(matches!(result, Err(InputError::Empty)));
    }
}
