// File: crates/flag-metrics/src/error.rs
// Summary: Error type for flag decoding and backend calls.

#[derive(thiserror::Error, Debug)]
pub enum FlagError {
    #[error("invalid config for feature '{feature}': {source}")]
    InvalidConfig {
        feature: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("feature '{feature}' config is missing '{field}'")]
    MissingField { feature: String, field: &'static str },
    #[error("rollout percentage for feature '{feature}' must be an integer in 0..=100, got {value}")]
    RolloutOutOfRange { feature: String, value: serde_json::Value },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Transport or server failure reported by a [`crate::Backend`].
    #[error("{0}")]
    Backend(String),
}

impl FlagError {
    pub fn backend(msg: impl Into<String>) -> Self {
        FlagError::Backend(msg.into())
    }
}
