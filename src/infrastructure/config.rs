use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub updates: UpdateSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnimationSettings {
    #[serde(default = "default_animation_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl AnimationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_animation_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpdateSettings {
    #[serde(default = "default_update_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_update_probability")]
    pub probability: f64,
    #[serde(default = "default_refresh_latency_ms")]
    pub refresh_latency_ms: u64,
    #[serde(default = "default_placeholder_delay_ms")]
    pub placeholder_delay_ms: u64,
    /// KPI period token whose snapshot a manual refresh perturbs.
    #[serde(default = "default_refresh_baseline")]
    pub refresh_baseline: String,
    /// Fixed RNG seed for reproducible runs; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl UpdateSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn refresh_latency(&self) -> Duration {
        Duration::from_millis(self.refresh_latency_ms)
    }

    pub fn placeholder_delay(&self) -> Duration {
        Duration::from_millis(self.placeholder_delay_ms)
    }
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_update_interval_secs(),
            probability: default_update_probability(),
            refresh_latency_ms: default_refresh_latency_ms(),
            placeholder_delay_ms: default_placeholder_delay_ms(),
            refresh_baseline: default_refresh_baseline(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    #[serde(default = "default_notification_ttl_ms")]
    pub ttl_ms: u64,
}

impl NotificationSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            ttl_ms: default_notification_ttl_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
    /// Chart period token the timeline opens with.
    #[serde(default = "default_initial_chart_period")]
    pub initial_chart_period: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            initial_chart_period: default_initial_chart_period(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_animation_duration_ms() -> u64 {
    1000
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_update_interval_secs() -> u64 {
    30
}

fn default_update_probability() -> f64 {
    0.3
}

fn default_refresh_latency_ms() -> u64 {
    1000
}

fn default_placeholder_delay_ms() -> u64 {
    500
}

fn default_refresh_baseline() -> String {
    "30d".to_string()
}

fn default_notification_ttl_ms() -> u64 {
    3000
}

fn default_sections() -> Vec<String> {
    ["Dashboard", "Innovations", "Applications", "Analytics", "Portfolio", "Settings"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_initial_chart_period() -> String {
    "year".to_string()
}

impl DashboardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.animation.duration_ms > 0, "animation.duration_ms must be positive");
        anyhow::ensure!(
            self.animation.frame_interval_ms > 0,
            "animation.frame_interval_ms must be positive"
        );
        anyhow::ensure!(self.updates.interval_secs > 0, "updates.interval_secs must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.updates.probability),
            "updates.probability must be within [0, 1], got {}",
            self.updates.probability
        );
        anyhow::ensure!(
            !self.navigation.sections.is_empty(),
            "navigation.sections must list at least one section"
        );
        Ok(())
    }
}

/// Load `config/dashboard.*` (optional) with `DASHBOARD__SECTION__KEY` overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: DashboardConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.animation.duration(), Duration::from_secs(1));
        assert_eq!(config.updates.interval(), Duration::from_secs(30));
        assert_eq!(config.updates.probability, 0.3);
        assert_eq!(config.notifications.ttl(), Duration::from_secs(3));
        assert_eq!(config.navigation.sections[0], "Dashboard");
        assert_eq!(config.navigation.initial_chart_period, "year");
        assert_eq!(config.updates.refresh_baseline, "30d");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config: DashboardConfig =
            toml::from_str(include_str!("../../config/dashboard.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.updates.refresh_latency(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: DashboardConfig = toml::from_str("[updates]\nseed = 7\n").unwrap();
        assert_eq!(config.updates.seed, Some(7));
        assert_eq!(config.updates.probability, 0.3);
        assert_eq!(config.animation.frame_interval_ms, 16);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        config.animation.duration_ms = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.updates.probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.navigation.sections.clear();
        assert!(config.validate().is_err());
    }
}
