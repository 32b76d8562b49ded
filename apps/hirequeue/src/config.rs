//! # Dashboard Configuration
//!
//! TOML configuration for the dashboard runtime. Every section and every key
//! is optional; anything left out falls back to the built-in defaults.
//!
//! ```toml
//! [auth]
//! username = "admin@timeless.ai"
//! password = "admin123"
//!
//! [ranking]
//! top_n = 5
//! review_n = 3
//!
//! [timing]
//! analysis_delay_ms = 3000
//! typing_delay_ms = 1500
//! advance_delay_ms = 2000
//!
//! [screening]
//! promote_on_completion = false
//! min_job_description_chars = 100
//! ```

use hirequeue_core::RankingPolicy;
use hirequeue_core::ranking::{DEFAULT_REVIEW_N, DEFAULT_TOP_N};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Sign-in credentials accepted by the dashboard.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin@timeless.ai".to_string(),
            password: "admin123".to_string(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Shortlist sizes used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub top_n: usize,
    pub review_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            review_n: DEFAULT_REVIEW_N,
        }
    }
}

/// Simulated delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub analysis_delay_ms: u64,
    pub typing_delay_ms: u64,
    pub advance_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3000,
            typing_delay_ms: 1500,
            advance_delay_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Time the candidate "types" before an answer appears.
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Pause between a revealed answer and the next question.
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreeningConfig {
    /// Move the candidate to Under Review as soon as the dialogue reaches
    /// its summary. Off by default: only the employer action moves it.
    pub promote_on_completion: bool,
    /// A pasted job description must be longer than this.
    pub min_job_description_chars: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            promote_on_completion: false,
            min_job_description_chars: 100,
        }
    }
}

// =============================================================================
// DASHBOARD CONFIG
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub auth: AuthConfig,
    pub ranking: RankingConfig,
    pub timing: TimingConfig,
    pub screening: ScreeningConfig,
}

impl DashboardConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.top_n == 0 {
            return Err(ConfigError::Invalid(
                "ranking.top_n must be at least 1".to_string(),
            ));
        }
        if self.auth.username.is_empty() {
            return Err(ConfigError::Invalid(
                "auth.username must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy::new(self.ranking.top_n, self.ranking.review_n)
    }
}

// =============================================================================
// TESTS
// =============================================================================
