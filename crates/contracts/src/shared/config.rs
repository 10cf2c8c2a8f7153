use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PanelConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Slide duration of the right column itself
    pub column_animation_ms: u32,
    /// Extra slack before an animation is considered finished
    pub animation_end_delay_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            column_animation_ms: 450,
            animation_end_delay_ms: 100,
        }
    }
}

impl PanelConfig {
    /// How long the header stays frozen after the column opens or closes.
    pub fn column_transition_ms(&self) -> u32 {
        self.animation.column_animation_ms + self.animation.animation_end_delay_ms
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[animation]
column_animation_ms = 450
animation_end_delay_ms = 100
"#;

/// Parse configuration from TOML text
///
/// Missing keys keep their defaults. `None` means the embedded default.
pub fn load_config(source: Option<&str>) -> anyhow::Result<PanelConfig> {
    let text = match source {
        Some(text) => {
            log::info!("Loading panel config from provided TOML");
            text
        }
        None => {
            log::info!("Using default embedded panel configuration");
            DEFAULT_CONFIG
        }
    };
    let config: PanelConfig = toml::from_str(text)?;
    Ok(config)
}
