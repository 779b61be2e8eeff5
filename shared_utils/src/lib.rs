use tracing::debug;

/// Reads an environment variable, treating unset and blank values alike.
///
/// Surrounding whitespace is trimmed so a stray newline in a `.env` file does not
/// end up inside request URLs.
#[must_use]
pub fn env_value(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                debug!(env_key = key, "Environment variable is set but blank");
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(_) => {
            debug!(env_key = key, "Environment variable is not set");
            None
        }
    }
}

/// Interprets an environment variable as an on/off switch.
///
/// `1`, `true`, `yes` and `on` (any case) count as enabled; anything else,
/// including an unset variable, is disabled.
#[must_use]
pub fn env_flag(key: &str) -> bool {
    env_value(key).is_some_and(|value| {
        matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
