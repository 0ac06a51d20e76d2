//! Declarative pipeline settings.

use super::error::BuildError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serializable settings for the retry and timeout layers of a pipeline.
///
/// Durations are expressed in milliseconds on the wire:
///
/// ```rust
/// use composable_fp::builder::PipelineConfig;
/// use std::time::Duration;
///
/// let config = PipelineConfig::from_json(
///     r#"{ "retries": 3, "retry_delay_ms": 100, "timeout_ms": 2000 }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.retries, 3);
/// assert_eq!(config.retry_delay, Some(Duration::from_millis(100)));
/// assert_eq!(config.timeout, Some(Duration::from_secs(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Retries after the first attempt
    pub retries: usize,

    /// Pause before every retry
    #[serde(rename = "retry_delay_ms", with = "option_millis")]
    pub retry_delay: Option<Duration>,

    /// Deadline for each attempt
    #[serde(rename = "timeout_ms", with = "option_millis")]
    pub timeout: Option<Duration>,
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}

mod option_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
                s.serialize_some(&millis)
            }
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
