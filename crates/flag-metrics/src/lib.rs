// File: crates/flag-metrics/src/lib.rs
// Summary: Feature-flag dashboard domain: flag configs, rollout metrics, and app state.

pub mod error;
pub mod flag;
pub mod metrics;
pub mod model;
pub mod state;

pub use error::FlagError;
pub use flag::{FeatureFlag, FeatureFlagRecord, FlagConfig};
pub use metrics::{FeatureMetrics, MetricDataPoint, TimeRange};
pub use model::{ApiKey, Environment, GenerateApiKeyRequest};
pub use state::{AppState, Backend, Tab};
