// File: crates/flag-metrics/tests/state.rs
// Purpose: AppState transitions against an in-memory backend.

use std::collections::HashMap;

use flag_metrics::{
    ApiKey, AppState, Backend, Environment, FeatureFlag, FeatureFlagRecord, FeatureMetrics, FlagConfig, FlagError,
    GenerateApiKeyRequest, Tab, TimeRange,
};

#[derive(Default)]
struct MockBackend {
    envs: Vec<Environment>,
    flags: HashMap<String, Vec<FeatureFlagRecord>>,
    keys: HashMap<String, Vec<ApiKey>>,
    fail_next: Option<String>,
    calls: Vec<String>,
}

impl MockBackend {
    fn seeded() -> Self {
        let mut b = MockBackend {
            envs: vec![Environment::new("staging", "pre-prod"), Environment::new("prod", "live")],
            ..Default::default()
        };
        b.flags.insert(
            "staging".into(),
            vec![FeatureFlagRecord {
                env_name: "staging".into(),
                kind: "PERCENTAGE".into(),
                feature_name: "checkout-v2".into(),
                config: r#"{"enabled":true,"rolloutPercentage":25}"#.into(),
            }],
        );
        b
    }

    fn check(&mut self, call: String) -> Result<(), FlagError> {
        self.calls.push(call);
        match self.fail_next.take() {
            Some(msg) => Err(FlagError::backend(msg)),
            None => Ok(()),
        }
    }
}

impl Backend for MockBackend {
    fn fetch_environments(&mut self) -> Result<Vec<Environment>, FlagError> {
        self.check("envs".into())?;
        Ok(self.envs.clone())
    }

    fn create_environment(&mut self, env: &Environment) -> Result<Environment, FlagError> {
        self.check(format!("create_env:{}", env.name))?;
        self.envs.push(env.clone());
        Ok(env.clone())
    }

    fn fetch_feature_flags(&mut self, env_name: &str) -> Result<Vec<FeatureFlagRecord>, FlagError> {
        self.check(format!("flags:{env_name}"))?;
        Ok(self.flags.get(env_name).cloned().unwrap_or_default())
    }

    fn create_feature_flag(&mut self, flag: &FeatureFlagRecord) -> Result<FeatureFlagRecord, FlagError> {
        self.check(format!("create_flag:{}", flag.feature_name))?;
        let list = self.flags.entry(flag.env_name.clone()).or_default();
        list.retain(|f| f.feature_name != flag.feature_name);
        list.push(flag.clone());
        Ok(flag.clone())
    }

    fn delete_feature_flag(&mut self, env_name: &str, feature_name: &str) -> Result<(), FlagError> {
        self.check(format!("delete_flag:{feature_name}"))?;
        if let Some(list) = self.flags.get_mut(env_name) {
            list.retain(|f| f.feature_name != feature_name);
        }
        Ok(())
    }

    fn fetch_api_keys(&mut self, env_name: &str) -> Result<Vec<ApiKey>, FlagError> {
        self.check(format!("keys:{env_name}"))?;
        Ok(self.keys.get(env_name).cloned().unwrap_or_default())
    }

    fn generate_api_key(&mut self, req: &GenerateApiKeyRequest) -> Result<ApiKey, FlagError> {
        self.check(format!("gen_key:{}", req.env))?;
        let list = self.keys.entry(req.env.clone()).or_default();
        let key = ApiKey { key: format!("key-{}", list.len() + 1), env_name: req.env.clone(), active: true };
        list.push(key.clone());
        Ok(key)
    }

    fn delete_api_key(&mut self, env_name: &str, key: &str) -> Result<(), FlagError> {
        self.check(format!("delete_key:{key}"))?;
        if let Some(list) = self.keys.get_mut(env_name) {
            list.retain(|k| k.key != key);
        }
        Ok(())
    }

    fn fetch_metrics(&mut self, env_name: &str, range: TimeRange) -> Result<Vec<FeatureMetrics>, FlagError> {
        self.check(format!("metrics:{env_name}:{range}"))?;
        Ok(vec![FeatureMetrics {
            feature_name: format!("{env_name}-{range}"),
            enabled_axis: Vec::new(),
            disabled_axis: Vec::new(),
        }])
    }
}

fn loaded() -> AppState<MockBackend> {
    let mut state = AppState::new(MockBackend::seeded());
    state.refresh_environments(false).expect("load envs");
    state
}

#[test]
fn first_environment_is_selected_and_its_flags_loaded() {
    let state = loaded();
    assert_eq!(state.selected_environment.as_deref(), Some("staging"));
    let flags = state.feature_flags.as_ref().expect("flags");
    assert_eq!(flags[0].config, FlagConfig::Percentage { enabled: true, rollout: 25 });
    assert!(!state.loading);
    assert_eq!(state.backend().calls, ["envs", "flags:staging"]);
}

#[test]
fn environments_are_not_refetched_unless_forced() {
    let mut state = loaded();
    state.refresh_environments(false).unwrap();
    assert_eq!(state.backend().calls.len(), 2);
    state.refresh_environments(true).unwrap();
    assert_eq!(state.backend().calls.last().map(String::as_str), Some("envs"));
    // Selection survives a forced reload.
    assert_eq!(state.selected_environment.as_deref(), Some("staging"));
}

#[test]
fn failures_are_recorded_and_cleared() {
    let mut backend = MockBackend::seeded();
    backend.fail_next = Some("503 service unavailable".into());
    let mut state = AppState::new(backend);

    let err = state.refresh_environments(false).unwrap_err();
    assert!(matches!(err, FlagError::Backend(_)));
    assert_eq!(state.error.as_deref(), Some("503 service unavailable"));
    assert!(!state.loading);
    assert!(state.environments.is_none());

    state.refresh_environments(false).unwrap();
    assert_eq!(state.error, None);
}

#[test]
fn generating_a_key_refreshes_the_list() {
    let mut state = loaded();
    let key = state.generate_api_key("staging").unwrap();
    assert_eq!(key.key, "key-1");
    assert_eq!(state.api_keys.as_ref().map(Vec::len), Some(1));
    assert_eq!(&state.backend().calls[2..], ["gen_key:staging", "keys:staging"]);

    state.delete_api_key("staging", "key-1").unwrap();
    assert_eq!(state.api_keys.as_ref().map(Vec::len), Some(0));
}

#[test]
fn tabs_load_their_data_for_the_selection() {
    let mut state = loaded();
    state.set_active_tab(Tab::ApiKeys).unwrap();
    assert_eq!(state.backend().calls.last().map(String::as_str), Some("keys:staging"));

    state.set_active_tab(Tab::Metrics).unwrap();
    assert_eq!(state.metrics.as_ref().unwrap()[0].feature_name, "staging-day");

    state.set_time_range(TimeRange::Week).unwrap();
    assert_eq!(state.metrics.as_ref().unwrap()[0].feature_name, "staging-week");

    let before = state.backend().calls.len();
    state.set_time_range(TimeRange::Week).unwrap();
    assert_eq!(state.backend().calls.len(), before);
}

#[test]
fn switching_environment_reloads_flags_and_tab() {
    let mut state = loaded();
    state.set_active_tab(Tab::Metrics).unwrap();
    state.select_environment("prod").unwrap();
    assert_eq!(state.feature_flags.as_ref().map(Vec::len), Some(0));
    assert_eq!(state.metrics.as_ref().unwrap()[0].feature_name, "prod-day");
}

#[test]
fn metrics_follow_the_selection_from_another_tab() {
    let mut state = loaded();
    state.set_active_tab(Tab::Metrics).unwrap();
    state.set_active_tab(Tab::ApiKeys).unwrap();
    state.set_active_tab(Tab::Environment).unwrap();
    state.select_environment("prod").unwrap();
    // Previous environment's keys and metrics are not shown for the new one.
    assert!(state.metrics.is_none());
    assert!(state.api_keys.is_none());

    state.set_time_range(TimeRange::Day).unwrap();
    assert_eq!(state.metrics.as_ref().unwrap()[0].feature_name, "prod-day");
    assert_eq!(state.backend().calls.last().map(String::as_str), Some("metrics:prod:day"));
}

#[test]
fn reselecting_the_same_environment_keeps_loaded_data() {
    let mut state = loaded();
    state.set_active_tab(Tab::Metrics).unwrap();
    state.set_active_tab(Tab::Environment).unwrap();
    state.select_environment("staging").unwrap();
    assert_eq!(state.metrics.as_ref().unwrap()[0].feature_name, "staging-day");

    let before = state.backend().calls.len();
    state.set_time_range(TimeRange::Day).unwrap();
    assert_eq!(state.backend().calls.len(), before);
}

#[test]
fn saving_and_deleting_flags_refreshes_them() {
    let mut state = loaded();
    let flag = FeatureFlag::new("staging", "banner", FlagConfig::StringValue { value: "hello".into() });
    state.save_feature_flag(&flag).unwrap();
    let names: Vec<_> = state.feature_flags.as_ref().unwrap().iter().map(|f| f.feature_name.clone()).collect();
    assert_eq!(names, ["checkout-v2", "banner"]);

    state.delete_feature_flag("staging", "checkout-v2").unwrap();
    assert_eq!(state.feature_flags.as_ref().unwrap(), &vec![flag]);
}

#[test]
fn one_bad_record_fails_the_flag_refresh() {
    let mut backend = MockBackend::seeded();
    backend.flags.get_mut("staging").unwrap()[0].config = "not json".into();
    let mut state = AppState::new(backend);
    let err = state.refresh_environments(false).unwrap_err();
    assert!(matches!(err, FlagError::InvalidConfig { .. }));
    assert!(state.error.as_deref().unwrap_or_default().contains("checkout-v2"));
    // Environments still landed before the flag fetch failed.
    assert_eq!(state.environments.as_ref().map(Vec::len), Some(2));
}

#[test]
fn new_environment_triggers_forced_reload() {
    let mut state = loaded();
    state.create_environment(Environment::new("qa", "")).unwrap();
    assert_eq!(state.environments.as_ref().map(Vec::len), Some(3));
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
}
