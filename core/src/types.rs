//! Shared types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Severity classification for a status record
///
/// Selects a color treatment and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
    Success,
    Warning,
    Destructive,
}

impl StatusVariant {
    /// Lowercase name, also used as the CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVariant::Success => "success",
            StatusVariant::Warning => "warning",
            StatusVariant::Destructive => "destructive",
        }
    }
}

impl fmt::Display for StatusVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(StatusVariant::Success),
            "warning" => Ok(StatusVariant::Warning),
            "destructive" => Ok(StatusVariant::Destructive),
            other => Err(Error::ConfigError(format!(
                "Unknown status variant: {}",
                other
            ))),
        }
    }
}

/// One labeled status entry shown on the panel
///
/// Records are constructed by the caller and passed as an ordered,
/// immutable sequence for the duration of one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Short label shown in the badge header
    pub title: String,
    /// Large headline text
    pub value: String,
    /// Free-form caption under the value
    pub status: String,
    /// Color treatment
    pub variant: StatusVariant,
}

impl StatusRecord {
    /// Create a new status record
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        status: impl Into<String>,
        variant: StatusVariant,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            status: status.into(),
            variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_as_str() {
        assert_eq!(StatusVariant::Success.as_str(), "success");
        assert_eq!(StatusVariant::Warning.as_str(), "warning");
        assert_eq!(StatusVariant::Destructive.as_str(), "destructive");
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(
            "success".parse::<StatusVariant>().unwrap(),
            StatusVariant::Success
        );
        assert_eq!(
            "warning".parse::<StatusVariant>().unwrap(),
            StatusVariant::Warning
        );
        assert_eq!(
            "destructive".parse::<StatusVariant>().unwrap(),
            StatusVariant::Destructive
        );
    }

    #[test]
    fn test_variant_from_str_unknown() {
        assert!("critical".parse::<StatusVariant>().is_err());
        assert!("SUCCESS".parse::<StatusVariant>().is_err());
        assert!("".parse::<StatusVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_lowercase() {
        let json = serde_json::to_string(&StatusVariant::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");

        let parsed: StatusVariant = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, StatusVariant::Warning);
    }

    #[test]
    fn test_variant_serde_rejects_unknown() {
        let result: std::result::Result<StatusVariant, _> = serde_json::from_str("\"fatal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_new() {
        let record = StatusRecord::new("Firewall", "Active", "No threats", StatusVariant::Success);
        assert_eq!(record.title, "Firewall");
        assert_eq!(record.value, "Active");
        assert_eq!(record.status, "No threats");
        assert_eq!(record.variant, StatusVariant::Success);
    }
}
