//! Publishing credentials and the eager preflight check.
//!
//! When a remote publish is scheduled, both credential values must be known
//! before any upload begins so a misconfigured build fails immediately
//! rather than partway through. The values arrive as explicit
//! configuration; reading the environment is an opt-in constructor at the
//! CLI boundary with the lookup injectable for tests.

use std::fmt;

use crate::error::{BurnishError, Result};

/// Environment variable carrying the repository username.
pub const USERNAME_VAR: &str = "ARTIFACTORY_USERNAME";

/// Environment variable carrying the repository password.
pub const PASSWORD_VAR: &str = "ARTIFACTORY_PASSWORD";

// Error messages keep the upstream property names so operators recognise
// which build setting is missing.
const USERNAME_PROPERTY: &str = "artifactoryUserName";
const PASSWORD_PROPERTY: &str = "artifactoryUserPassword";

/// Username and password for the remote artifact repository.
#[derive(Clone, Default)]
pub struct PublishCredentials {
    username: Option<String>,
    password: Option<String>,
}

impl PublishCredentials {
    /// Build credentials from explicit values.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Read credentials from `ARTIFACTORY_USERNAME` and
    /// `ARTIFACTORY_PASSWORD`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Read credentials using the supplied environment lookup.
    ///
    /// Exists so tests can simulate the environment without mutating the
    /// process.
    #[must_use]
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            username: lookup(USERNAME_VAR),
            password: lookup(PASSWORD_VAR),
        }
    }

    /// The configured username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Check that both values are present and non-empty.
    ///
    /// The username is checked before the password, so a build missing both
    /// reports the username first.
    ///
    /// # Errors
    ///
    /// Returns [`BurnishError::MissingCredential`] naming the absent value.
    pub fn ensure_present(&self) -> Result<()> {
        require(self.username.as_deref(), USERNAME_PROPERTY)?;
        require(self.password.as_deref(), PASSWORD_PROPERTY)
    }
}

impl fmt::Debug for PublishCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn require(value: Option<&str>, name: &'static str) -> Result<()> {
    match value {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(BurnishError::MissingCredential { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn complete_credentials_pass_the_preflight() {
        let credentials = PublishCredentials::new("ci-bot", "hunter2");
        assert!(credentials.ensure_present().is_ok());
    }

    #[test]
    fn missing_username_is_reported_first() {
        let credentials = PublishCredentials::default();
        let err = credentials.ensure_present().expect_err("nothing set");
        assert_eq!(err.to_string(), "artifactoryUserName is not set!");
    }

    #[test]
    fn missing_password_is_reported_when_username_is_set() {
        let credentials = PublishCredentials::from_env_with(|name| {
            (name == USERNAME_VAR).then(|| "ci-bot".to_owned())
        });
        let err = credentials.ensure_present().expect_err("password unset");
        assert_eq!(err.to_string(), "artifactoryUserPassword is not set!");
    }

    #[rstest]
    #[case::empty_username("", "hunter2")]
    #[case::empty_password("ci-bot", "")]
    fn empty_values_count_as_missing(#[case] username: &str, #[case] password: &str) {
        let credentials = PublishCredentials::new(username, password);
        assert!(credentials.ensure_present().is_err());
    }

    #[test]
    fn from_env_reads_both_variables() {
        temp_env::with_vars(
            [
                (USERNAME_VAR, Some("ci-bot")),
                (PASSWORD_VAR, Some("hunter2")),
            ],
            || {
                let credentials = PublishCredentials::from_env();
                assert!(credentials.ensure_present().is_ok());
                assert_eq!(credentials.username(), Some("ci-bot"));
            },
        );
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let credentials = PublishCredentials::new("ci-bot", "hunter2");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }
}
