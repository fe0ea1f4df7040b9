//! API key handling.
//!
//! Keys live in `secrecy` boxes from the moment they are read so they
//! cannot wander into logs or error output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A secret string that won't be logged or displayed.
///
/// `Debug` and `Display` both render `[REDACTED]`.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Wrap a value in secure storage.
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(SecretBox::new(value.into_boxed_str()))
    }

    /// Expose the secret value.
    ///
    /// Call only at the point the key is handed to a client.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Credentials and model selection for one AI provider.
#[derive(Clone)]
pub struct ModelCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Model identifier (e.g. "gpt-4", "sonar-pro")
    pub model: String,

    /// API base URL override (optional)
    pub base_url: Option<String>,
}

impl ModelCredentials {
    /// Create new model credentials.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: model.into(),
            base_url: None,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

impl fmt::Debug for ModelCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_redacted_in_debug_and_display() {
        let secret = SecretString::new("sk-super-secret-key");

        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
    }

    #[test]
    fn test_expose_returns_key() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(secret.expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_clone_preserves_key() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(secret.clone().expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_credentials_debug_hides_key() {
        let creds = ModelCredentials::new("sk-secret", "gpt-4").with_base_url("https://proxy.local");
        let debug = format!("{:?}", creds);

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4"));
        assert!(debug.contains("proxy.local"));
    }
}
