//! GitHub OAuth app credentials
//!
//! Development and production builds read different variable names so a
//! local `.env` never shadows the deployment's secrets.

use std::fmt;

use clap::ValueEnum;

use crate::error::GhSuggestError;

/// Which set of credential variables to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildEnv {
    Development,
    Production,
}

impl BuildEnv {
    /// Debug builds default to development, release builds to production
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildEnv::Development
        } else {
            BuildEnv::Production
        }
    }

    pub fn client_id_var(self) -> &'static str {
        match self {
            BuildEnv::Development => "GHSUGGEST_DEV_CLIENT_ID",
            BuildEnv::Production => "GITHUB_CLIENT_ID",
        }
    }

    pub fn client_secret_var(self) -> &'static str {
        match self {
            BuildEnv::Development => "GHSUGGEST_DEV_CLIENT_SECRET",
            BuildEnv::Production => "GITHUB_CLIENT_SECRET",
        }
    }
}

impl fmt::Display for BuildEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildEnv::Development => write!(f, "development"),
            BuildEnv::Production => write!(f, "production"),
        }
    }
}

/// Static client credentials sent with every search request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env(env: BuildEnv) -> Result<Self, GhSuggestError> {
        Self::from_lookup(env, |name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; blank values count as missing
    pub fn from_lookup<F>(env: BuildEnv, lookup: F) -> Result<Self, GhSuggestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(GhSuggestError::MissingCredential { var, env })
        };

        Ok(Credentials {
            client_id: require(env.client_id_var())?,
            client_secret: require(env.client_secret_var())?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod credentials_tests;
