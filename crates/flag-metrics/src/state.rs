// File: crates/flag-metrics/src/state.rs
// Summary: Dashboard application state driven through a pluggable backend.
//
// Every operation takes `&mut self`, sets `loading` while the backend call runs,
// records the failure message in `error`, and returns the result to the caller.

use log::{debug, warn};

use crate::error::FlagError;
use crate::flag::{FeatureFlag, FeatureFlagRecord};
use crate::metrics::{FeatureMetrics, TimeRange};
use crate::model::{ApiKey, Environment, GenerateApiKeyRequest};

/// Data source for the dashboard. Implementations own transport and auth.
pub trait Backend {
    fn fetch_environments(&mut self) -> Result<Vec<Environment>, FlagError>;
    fn create_environment(&mut self, env: &Environment) -> Result<Environment, FlagError>;
    fn fetch_feature_flags(&mut self, env_name: &str) -> Result<Vec<FeatureFlagRecord>, FlagError>;
    fn create_feature_flag(&mut self, flag: &FeatureFlagRecord) -> Result<FeatureFlagRecord, FlagError>;
    fn delete_feature_flag(&mut self, env_name: &str, feature_name: &str) -> Result<(), FlagError>;
    fn fetch_api_keys(&mut self, env_name: &str) -> Result<Vec<ApiKey>, FlagError>;
    fn generate_api_key(&mut self, req: &GenerateApiKeyRequest) -> Result<ApiKey, FlagError>;
    fn delete_api_key(&mut self, env_name: &str, key: &str) -> Result<(), FlagError>;
    fn fetch_metrics(&mut self, env_name: &str, range: TimeRange) -> Result<Vec<FeatureMetrics>, FlagError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Environment,
    ApiKeys,
    Metrics,
}

pub struct AppState<B: Backend> {
    backend: B,
    pub active_tab: Tab,
    pub sidebar_collapsed: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub environments: Option<Vec<Environment>>,
    pub selected_environment: Option<String>,
    pub feature_flags: Option<Vec<FeatureFlag>>,
    pub api_keys: Option<Vec<ApiKey>>,
    pub metrics: Option<Vec<FeatureMetrics>>,
    pub time_range: TimeRange,
    /// Environment and range `metrics` was fetched for.
    metrics_key: Option<(String, TimeRange)>,
}

impl<B: Backend> AppState<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active_tab: Tab::default(),
            sidebar_collapsed: false,
            loading: false,
            error: None,
            environments: None,
            selected_environment: None,
            feature_flags: None,
            api_keys: None,
            metrics: None,
            time_range: TimeRange::default(),
            metrics_key: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Wraps one backend call: loading flag, error bookkeeping, logging.
    fn track<T>(&mut self, what: &str, call: impl FnOnce(&mut B) -> Result<T, FlagError>) -> Result<T, FlagError> {
        self.loading = true;
        self.error = None;
        let result = call(&mut self.backend);
        self.loading = false;
        if let Err(e) = &result {
            warn!("{what} failed: {e}");
            self.error = Some(e.to_string());
        }
        result
    }

    /// Load environments unless already loaded. The first one becomes the
    /// selection when nothing is selected yet.
    pub fn refresh_environments(&mut self, force: bool) -> Result<(), FlagError> {
        if self.environments.is_some() && !force {
            debug!("environments already loaded");
            return Ok(());
        }
        let envs = self.track("fetch environments", |b| b.fetch_environments())?;
        let first = envs.first().map(|e| e.name.clone());
        self.environments = Some(envs);
        if self.selected_environment.is_none() {
            if let Some(name) = first {
                self.select_environment(&name)?;
            }
        }
        Ok(())
    }

    pub fn create_environment(&mut self, env: Environment) -> Result<(), FlagError> {
        self.track("create environment", |b| b.create_environment(&env))?;
        self.refresh_environments(true)
    }

    /// Change the selection and reload what the current view shows for it.
    /// Keys and metrics of the previous environment are dropped on a change.
    pub fn select_environment(&mut self, name: &str) -> Result<(), FlagError> {
        if self.selected_environment.as_deref() != Some(name) {
            self.api_keys = None;
            self.metrics = None;
            self.metrics_key = None;
        }
        self.selected_environment = Some(name.to_string());
        self.refresh_feature_flags(name)?;
        self.refresh_tab_data()
    }

    pub fn set_active_tab(&mut self, tab: Tab) -> Result<(), FlagError> {
        self.active_tab = tab;
        self.refresh_tab_data()
    }

    fn refresh_tab_data(&mut self) -> Result<(), FlagError> {
        let Some(env) = self.selected_environment.clone() else {
            return Ok(());
        };
        match self.active_tab {
            Tab::Environment => Ok(()),
            Tab::ApiKeys => self.refresh_api_keys(&env),
            Tab::Metrics => self.refresh_metrics(),
        }
    }

    /// Fetch and decode the flags of `env_name`. One undecodable record fails the whole refresh.
    pub fn refresh_feature_flags(&mut self, env_name: &str) -> Result<(), FlagError> {
        let flags = self.track("fetch feature flags", |b| {
            b.fetch_feature_flags(env_name)?
                .into_iter()
                .map(FeatureFlag::try_from)
                .collect::<Result<Vec<_>, _>>()
        })?;
        self.feature_flags = Some(flags);
        Ok(())
    }

    /// Create or overwrite a flag, then reload the flag list of its environment.
    pub fn save_feature_flag(&mut self, flag: &FeatureFlag) -> Result<(), FlagError> {
        self.track("save feature flag", |b| b.create_feature_flag(&flag.to_record()?))?;
        self.refresh_feature_flags(&flag.env_name)
    }

    pub fn delete_feature_flag(&mut self, env_name: &str, feature_name: &str) -> Result<(), FlagError> {
        self.track("delete feature flag", |b| b.delete_feature_flag(env_name, feature_name))?;
        self.refresh_feature_flags(env_name)
    }

    pub fn refresh_api_keys(&mut self, env_name: &str) -> Result<(), FlagError> {
        let keys = self.track("fetch api keys", |b| b.fetch_api_keys(env_name))?;
        self.api_keys = Some(keys);
        Ok(())
    }

    /// Generate a key for `env_name` and reload the key list.
    pub fn generate_api_key(&mut self, env_name: &str) -> Result<ApiKey, FlagError> {
        let req = GenerateApiKeyRequest { env: env_name.to_string() };
        let key = self.track("generate api key", |b| b.generate_api_key(&req))?;
        self.refresh_api_keys(env_name)?;
        Ok(key)
    }

    pub fn delete_api_key(&mut self, env_name: &str, key: &str) -> Result<(), FlagError> {
        self.track("delete api key", |b| b.delete_api_key(env_name, key))?;
        self.refresh_api_keys(env_name)
    }

    /// Load metrics for the selected environment and current time range.
    /// Without a selection there is nothing to load.
    pub fn refresh_metrics(&mut self) -> Result<(), FlagError> {
        let Some(env) = self.selected_environment.clone() else {
            return Ok(());
        };
        let range = self.time_range;
        let metrics = self.track("fetch metrics", |b| b.fetch_metrics(&env, range))?;
        self.metrics = Some(metrics);
        self.metrics_key = Some((env, range));
        Ok(())
    }

    pub fn set_time_range(&mut self, range: TimeRange) -> Result<(), FlagError> {
        let current = self.selected_environment.as_ref().map(|env| (env.clone(), range));
        if current.is_some() && self.metrics_key == current {
            return Ok(());
        }
        self.time_range = range;
        self.refresh_metrics()
    }
}
