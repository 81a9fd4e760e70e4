use serde::{Deserialize, Serialize};

/// Client-side presentation settings, loaded from a YAML file.
/// A missing file falls back to defaults; a present but invalid file
/// is an error so a typo does not silently restyle the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub cell_size: f32,
    pub show_hints: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window_width: 420.0,
            window_height: 520.0,
            cell_size: 96.0,
            show_hints: true,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err("Window dimensions must be positive".to_string());
        }
        if self.cell_size < 32.0 || self.cell_size > 256.0 {
            return Err("Cell size must be between 32 and 256".to_string());
        }
        Ok(())
    }

    pub fn load(path: &str) -> Result<ClientConfig, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ClientConfig::default());
            }
            Err(e) => return Err(format!("Failed to read config {}: {}", path, e)),
        };

        let config: ClientConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config {}: {}", path, e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }
}
