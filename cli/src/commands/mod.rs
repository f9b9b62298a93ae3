//! CLI Commands

pub mod config;
pub mod interactive;
pub mod order;
pub mod toppings;

use anyhow::Result;
use bloom_order::{HttpOrderIntake, IntakeConfig, OrderForm, OrderService, RecordedEvent};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::Cli;

/// Effective settings: flags and env over config file over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub intake: IntakeConfig,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self::merge(cli.endpoint.clone(), cli.timeout_secs, cli.format, config)
    }

    fn merge(
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
        format: Option<OutputFormat>,
        config: &Config,
    ) -> Self {
        let defaults = IntakeConfig::default();
        let format = format
            .or_else(|| config.default_format.as_deref().and_then(OutputFormat::parse))
            .unwrap_or_default();

        Self {
            intake: IntakeConfig {
                endpoint: endpoint.or_else(|| config.endpoint.clone()).unwrap_or(defaults.endpoint),
                timeout: timeout_secs.or(config.timeout_secs).map(Duration::from_secs).or(defaults.timeout),
            },
            format,
        }
    }

    /// Mount a fresh form wired to the configured intake
    pub fn service(&self) -> Result<OrderService> {
        let intake = HttpOrderIntake::new(self.intake.clone())?;
        Ok(OrderService::new(OrderForm::standard(), Arc::new(intake)))
    }
}

pub fn log_events(events: Vec<RecordedEvent>) {
    for recorded in events {
        tracing::debug!(at = %recorded.occurred_at, event = ?recorded.event, "Order event");
    }
}
