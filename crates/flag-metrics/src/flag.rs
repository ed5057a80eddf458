// File: crates/flag-metrics/src/flag.rs
// Summary: Feature flag configuration as a tagged union, decoded once from the wire record.
//
// On the wire a flag is `{ envName, type, featureName, config }` where `config`
// is itself a JSON document serialized into a string. The known types are
// SIMPLE, PERCENTAGE and STRING; anything else is kept as raw JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::FlagError;

pub const SIMPLE: &str = "SIMPLE";
pub const PERCENTAGE: &str = "PERCENTAGE";
pub const STRING: &str = "STRING";

pub const DEFAULT_ROLLOUT: u8 = 100;

/// Flag as the API sends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagRecord {
    pub env_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub feature_name: String,
    pub config: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FlagConfig {
    Simple { enabled: bool },
    Percentage { enabled: bool, rollout: u8 },
    StringValue { value: String },
    /// A type this client does not interpret.
    Other { kind: String, raw: Value },
}

impl FlagConfig {
    /// Decode `config` for a flag of type `kind`. `feature` only feeds error messages.
    pub fn decode(kind: &str, config: &str, feature: &str) -> Result<Self, FlagError> {
        let raw: Value = serde_json::from_str(config)
            .map_err(|source| FlagError::InvalidConfig { feature: feature.to_string(), source })?;
        let enabled = raw.get("enabled").and_then(Value::as_bool).unwrap_or(false);
        match kind {
            SIMPLE => Ok(FlagConfig::Simple { enabled }),
            PERCENTAGE => {
                let rollout = match raw.get("rolloutPercentage") {
                    None | Some(Value::Null) => DEFAULT_ROLLOUT,
                    Some(v) => v
                        .as_u64()
                        .filter(|n| *n <= 100)
                        .map(|n| n as u8)
                        .ok_or_else(|| FlagError::RolloutOutOfRange {
                            feature: feature.to_string(),
                            value: v.clone(),
                        })?,
                };
                Ok(FlagConfig::Percentage { enabled, rollout })
            }
            STRING => match raw.get("value") {
                Some(Value::String(s)) => Ok(FlagConfig::StringValue { value: s.clone() }),
                Some(other) => Ok(FlagConfig::StringValue { value: other.to_string() }),
                None => Err(FlagError::MissingField { feature: feature.to_string(), field: "value" }),
            },
            _ => Ok(FlagConfig::Other { kind: kind.to_string(), raw }),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            FlagConfig::Simple { .. } => SIMPLE,
            FlagConfig::Percentage { .. } => PERCENTAGE,
            FlagConfig::StringValue { .. } => STRING,
            FlagConfig::Other { kind, .. } => kind.as_str(),
        }
    }

    /// `None` for types without an on/off switch.
    pub fn enabled(&self) -> Option<bool> {
        match self {
            FlagConfig::Simple { enabled } | FlagConfig::Percentage { enabled, .. } => Some(*enabled),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FlagConfig::Simple { enabled } => json!({ "enabled": enabled }),
            FlagConfig::Percentage { enabled, rollout } => {
                json!({ "enabled": enabled, "rolloutPercentage": rollout })
            }
            FlagConfig::StringValue { value } => json!({ "value": value }),
            FlagConfig::Other { raw, .. } => raw.clone(),
        }
    }
}

impl fmt::Display for FlagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        match self {
            FlagConfig::Simple { enabled } => write!(f, "Enabled: {}", yes_no(*enabled)),
            FlagConfig::Percentage { enabled, rollout } => {
                write!(f, "Enabled: {}  Rollout: {}%", yes_no(*enabled), rollout)
            }
            FlagConfig::StringValue { value } => write!(f, "Value: \"{value}\""),
            FlagConfig::Other { raw, .. } => {
                let pretty = serde_json::to_string_pretty(raw).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
        }
    }
}

/// Decoded flag.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureFlag {
    pub env_name: String,
    pub feature_name: String,
    pub config: FlagConfig,
}

impl FeatureFlag {
    pub fn new(env_name: impl Into<String>, feature_name: impl Into<String>, config: FlagConfig) -> Self {
        Self { env_name: env_name.into(), feature_name: feature_name.into(), config }
    }

    pub fn to_record(&self) -> Result<FeatureFlagRecord, FlagError> {
        Ok(FeatureFlagRecord {
            env_name: self.env_name.clone(),
            kind: self.config.kind().to_string(),
            feature_name: self.feature_name.clone(),
            config: serde_json::to_string(&self.config.to_json())?,
        })
    }
}

impl TryFrom<FeatureFlagRecord> for FeatureFlag {
    type Error = FlagError;

    fn try_from(rec: FeatureFlagRecord) -> Result<Self, Self::Error> {
        let config = FlagConfig::decode(&rec.kind, &rec.config, &rec.feature_name)?;
        Ok(FeatureFlag { env_name: rec.env_name, feature_name: rec.feature_name, config })
    }
}
