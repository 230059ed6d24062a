use serde::Deserialize;

/// Panel configuration. Every field has a default, so the config file is
/// optional and may be partial.
#[derive(Debug, Deserialize, Clone)]
pub struct PanelConfig {
    #[serde(default = "default_update_interval_minutes")]
    pub update_interval_minutes: u64,
    #[serde(default = "default_imperial")]
    pub imperial: bool,
    #[serde(default = "default_step_goal")]
    pub step_goal: u32,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default = "default_use_icons")]
    pub use_icons: bool,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            update_interval_minutes: default_update_interval_minutes(),
            imperial: default_imperial(),
            step_goal: default_step_goal(),
            chart_width: default_chart_width(),
            font_size: default_font_size(),
            use_icons: default_use_icons(),
            colors: default_colors(),
            debug: false,
            backend_url: default_backend_url(),
        }
    }
}

fn default_update_interval_minutes() -> u64 {
    30
}

fn default_imperial() -> bool {
    true
}

fn default_step_goal() -> u32 {
    10_000
}

fn default_chart_width() -> u32 {
    300
}

fn default_font_size() -> u32 {
    18
}

fn default_use_icons() -> bool {
    true
}

fn default_colors() -> Vec<String> {
    ["#EEEEEE", "#1E88E5", "#9CCC65", "#5E35B1", "#FFB300", "#F4511E"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8131".to_string()
}

pub fn load_panel_config() -> anyhow::Result<PanelConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/panel").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_defaults() {
        let settings = config::Config::builder().build().unwrap();
        let config: PanelConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.update_interval_minutes, 30);
        assert!(config.imperial);
        assert_eq!(config.step_goal, 10_000);
        assert_eq!(config.chart_width, 300);
        assert_eq!(config.font_size, 18);
        assert!(config.use_icons);
        assert_eq!(config.colors.len(), 6);
        assert!(!config.debug);
    }
}
