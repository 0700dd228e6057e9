use serde::{Deserialize, Serialize};

/// Editor settings that survive restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub show_control_points: bool,
}

impl Config {
    pub fn load_or_default() -> Self {
        Config::load().unwrap_or_default()
    }

    pub fn save(&self) {
        if let Ok(serialized) = serde_yml::to_string(self) {
            std::fs::write("config.yml", serialized).ok();
        }
    }

    fn load() -> anyhow::Result<Self> {
        let serialized = std::fs::read_to_string("config.yml")?;
        Ok(serde_yml::from_str(&serialized)?)
    }
}
