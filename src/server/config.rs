//! Environment configuration for the portal server.

use crate::server::error::config::ConfigError;

/// Server configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    pub oauth_callback_url: String,
    /// Lowercased emails that receive the employee role when their profile is first created.
    pub employee_emails: Vec<String>,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// `EMPLOYEE_EMAILS` is optional and comma separated; every other variable is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            Some(_) => Err(ConfigError::EmptyEnvVar(var)),
            None => Err(ConfigError::MissingEnvVar(var)),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            oauth_callback_url: required("OAUTH_CALLBACK_URL")?,
            employee_emails: lookup("EMPLOYEE_EMAILS")
                .map(|value| parse_email_list(&value))
                .unwrap_or_default(),
        })
    }
}

/// Splits a comma separated email list, dropping blanks.
pub fn parse_email_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::server::error::config::ConfigError;

    use super::{parse_email_list, Config};

    fn complete_env() -> HashMap<&'static str, String> {
        [
            ("DATABASE_URL", "sqlite::memory:"),
            ("VALKEY_URL", "redis://localhost:6379"),
            ("OAUTH_CLIENT_ID", "portal"),
            ("OAUTH_CLIENT_SECRET", "secret"),
            ("OAUTH_AUTH_URL", "http://localhost:9000/oauth/authorize"),
            ("OAUTH_TOKEN_URL", "http://localhost:9000/oauth/token"),
            ("OAUTH_USERINFO_URL", "http://localhost:9000/userinfo"),
            ("OAUTH_CALLBACK_URL", "http://localhost:8080/api/auth/callback"),
        ]
        .into_iter()
        .map(|(var, value)| (var, value.to_string()))
        .collect()
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|var| env.get(var).cloned())
    }

    #[test]
    fn parses_email_list() {
        assert_eq!(
            parse_email_list(" Admin@Example.org,,staff@example.org , "),
            vec!["admin@example.org".to_string(), "staff@example.org".to_string()]
        );
        assert!(parse_email_list("").is_empty());
    }

    #[test]
    fn loads_employee_emails_when_present() {
        let mut env = complete_env();
        env.insert("EMPLOYEE_EMAILS", "Boss@Example.org".to_string());

        let config = load(&env).unwrap();

        assert_eq!(config.employee_emails, vec!["boss@example.org".to_string()]);
        assert!(load(&complete_env()).unwrap().employee_emails.is_empty());
    }

    #[test]
    fn names_missing_variable() {
        let mut env = complete_env();
        env.remove("OAUTH_USERINFO_URL");

        assert!(matches!(
            load(&env),
            Err(ConfigError::MissingEnvVar("OAUTH_USERINFO_URL"))
        ));
    }

    #[test]
    fn rejects_blank_variable() {
        let mut env = complete_env();
        env.insert("VALKEY_URL", "   ".to_string());

        assert!(matches!(
            load(&env),
            Err(ConfigError::EmptyEnvVar("VALKEY_URL"))
        ));
    }
}
