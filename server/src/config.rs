//! Configuration management

use glowbot_core::{Error, Result, StatusRecord, StatusVariant};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Status records shown on the panel, in display order
    pub statuses: Vec<StatusRecord>,
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            Self::load_from_file(p)
        } else {
            Self::load_from_env()
        }
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables
    fn load_from_env() -> Result<Self> {
        let statuses = if let Ok(status_str) = std::env::var("GLOWBOT_STATUSES") {
            Self::parse_statuses(&status_str)?
        } else {
            Self::default_statuses()
        };

        Ok(Config { statuses })
    }

    /// Parse a status list from comma-separated `title=value=status=variant` entries
    fn parse_statuses(input: &str) -> Result<Vec<StatusRecord>> {
        input
            .split(',')
            .map(|entry| {
                let parts: Vec<&str> = entry.trim().split('=').collect();
                if parts.len() != 4 {
                    return Err(Error::ConfigError(format!(
                        "Invalid status entry: {} (expected title=value=status=variant)",
                        entry
                    )));
                }

                let variant: StatusVariant = parts[3].parse()?;
                Ok(StatusRecord::new(parts[0], parts[1], parts[2], variant))
            })
            .collect()
    }

    /// Built-in sample set used when nothing is configured
    fn default_statuses() -> Vec<StatusRecord> {
        vec![
            StatusRecord::new("Firewall", "Active", "No threats", StatusVariant::Success),
            StatusRecord::new(
                "Updates",
                "3 pending",
                "Restart required",
                StatusVariant::Warning,
            ),
            StatusRecord::new(
                "Intrusions",
                "1 blocked",
                "Review logs",
                StatusVariant::Destructive,
            ),
        ]
    }
}
