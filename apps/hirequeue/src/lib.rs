//! # HireQueue - Dashboard Runtime
//!
//! The async runtime around the HireQueue candidate pipeline.
//!
//! This crate provides:
//! - The shared dashboard state behind one write lock
//! - Cancellable timers for the simulated analysis and screening
//! - Sign-in and page navigation
//! - TOML configuration and tracing setup
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   apps/hirequeue (THE RUNTIME)                  │
//! │                                                                 │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐    │
//! │  │  Analyzer   │    │  Screening  │    │  Sign-in / Pages │    │
//! │  │  session    │    │  panel      │    │  Queue board     │    │
//! │  └──────┬──────┘    └──────┬──────┘    └────────┬─────────┘    │
//! │         │   timers (tokio) │                    │              │
//! │         └──────────────────┼────────────────────┘              │
//! │                            ▼                                   │
//! │                 DashboardHandle (Arc<RwLock>)                  │
//! │                            ▼                                   │
//! │                    ┌────────────────┐                          │
//! │                    │ hirequeue-core │                          │
//! │                    │  (THE LOGIC)   │                          │
//! │                    └────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use hirequeue::{DashboardConfig, DashboardHandle, JobDescription, LogFormat, Page};
//!
//! # async fn demo() -> Result<(), hirequeue::DashboardError> {
//! let _ = hirequeue::init_tracing(LogFormat::from_env());
//! let dashboard = DashboardHandle::with_default_seed(DashboardConfig::default())?;
//! dashboard.sign_in("admin@timeless.ai", "admin123").await?;
//! dashboard.navigate(Page::Analyzer).await;
//! dashboard
//!     .submit_job_description(JobDescription::Upload {
//!         file_name: "jd.pdf".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod analyzer;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod screening;
pub mod telemetry;
pub mod timer;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use analyzer::{AnalysisPhase, AnalysisResult, AnalyzerSession, JobDescription};
pub use auth::AuthError;
pub use config::{
    AuthConfig, ConfigError, DashboardConfig, RankingConfig, ScreeningConfig, TimingConfig,
};
pub use dashboard::{Dashboard, DashboardHandle, Page};
pub use error::{DashboardError, Result};
pub use screening::{QueueSelection, ScreeningPanel};
pub use telemetry::{LogFormat, init_tracing};
pub use timer::ScheduledTask;

pub use hirequeue_core;
