// ABOUTME: tracing-subscriber setup for the planner, always writing to stderr
// ABOUTME: Env-driven format and filter, plus the ToolLogger call and fallback events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging.
//!
//! Stdout carries JSON-RPC responses, so every layer writes to stderr. The
//! format is chosen with `LOG_FORMAT` and the filter with `RUST_LOG`.

use std::env;
use std::io;

use anyhow::Result;
use tracing::{info, warn, Level};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use food_planner_core::constants::service;

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Output encoding of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single short line per event
    Compact,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            Some(v) if v.eq_ignore_ascii_case("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging settings resolved from the environment
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, `RUST_LOG` syntax
    pub level: String,
    /// Output encoding
    pub format: LogFormat,
    /// Emit file and line for each event
    pub include_location: bool,
    /// Emit span open and close events
    pub include_spans: bool,
    /// Reported in the startup event
    pub service_name: &'static str,
    /// `ENVIRONMENT`; `production` turns on locations
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service::FOOD_PLANNER,
            environment: DEFAULT_ENVIRONMENT.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_SPANS`
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into());
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.into()),
            format: LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref()),
            include_location: environment == "production"
                || env::var_os("LOG_INCLUDE_LOCATION").is_some(),
            include_spans: env::var_os("LOG_INCLUDE_SPANS").is_some(),
            environment,
            ..Self::default()
        }
    }

    fn filter(&self) -> EnvFilter {
        let crate_directive: Directive = format!("food_planner={}", self.level)
            .parse()
            .unwrap_or_else(|_| Level::INFO.into());
        EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
            .add_directive(crate_directive)
    }

    fn layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let base = fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.boxed(),
            LogFormat::Compact => base.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber and log the startup event
    ///
    /// # Errors
    ///
    /// Fails when a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.layer())
            .with(self.filter())
            .try_init()?;

        info!(
            service.name = self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Food planner starting up"
        );
        Ok(())
    }
}

/// Install logging from the environment
///
/// # Errors
///
/// Fails when a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured events shared by every tool
pub struct ToolLogger;

impl ToolLogger {
    /// One event per dispatched call
    pub fn log_tool_call(tool_name: &str, request_id: &str, success: bool, duration_ms: u64) {
        info!(
            tool.name = tool_name,
            tool.request_id = request_id,
            tool.success = success,
            tool.duration_ms = duration_ms,
            "Tool call"
        );
    }

    /// A sentinel that sends the orchestrator down another branch
    pub fn log_fallback_signal(tool_name: &str, request_id: &str, payload: &str) {
        warn!(
            tool.name = tool_name,
            tool.request_id = request_id,
            tool.signal = payload,
            "Tool returned a fallback signal"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing_is_case_insensitive() {
        assert_eq!(LogFormat::from_env_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" compact ")), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_value(Some("xml")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config_uses_service_name() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, "food-planner");
        assert!(!config.include_location);
    }
}
