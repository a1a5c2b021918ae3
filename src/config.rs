use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::types::Viewport;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub viewport: Viewport,
    pub camera: CameraConfig,
    pub animation: AnimationConfig,
    pub keys: KeyBindings,
    /// When set, log output is appended here instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Offset added to every camera-space depth.
    pub distance: f64,
    /// Projection scale.
    pub k1: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            distance: 100.0,
            k1: 25.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-frame increment shared by the A and B angles.
    pub speed_ab: f64,
    /// Per-frame increment of the C angle.
    pub speed_c: f64,
    pub timeout_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            speed_ab: 0.015,
            speed_c: 0.01,
            timeout_ms: 5000,
            frame_interval_ms: 16,
        }
    }
}

impl AnimationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// The one key that does not stop a running animation.
    pub reserved: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            reserved: "Tab".into(),
            quit: "Ctrl-c".into(),
        }
    }
}

impl CubeConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("invalid config {} ({e}), using defaults", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("ascii-cube");
        path.push("config.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Alt-") {
        return event.modifiers.contains(KeyModifiers::ALT) && matches_code(rest, event.code);
    }

    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        return event.modifiers.contains(KeyModifiers::CONTROL) && matches_code(rest, event.code);
    }

    // Plain bindings never fire while Ctrl or Alt is held.
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    matches_code(binding, event.code)
}

fn matches_code(name: &str, code: KeyCode) -> bool {
    match name {
        "Right" => code == KeyCode::Right,
        "Left" => code == KeyCode::Left,
        "Up" => code == KeyCode::Up,
        "Down" => code == KeyCode::Down,
        "Enter" => code == KeyCode::Enter,
        "Esc" => code == KeyCode::Esc,
        "Space" => code == KeyCode::Char(' '),
        "Tab" => code == KeyCode::Tab,
        "Backspace" => code == KeyCode::Backspace,
        "Home" => code == KeyCode::Home,
        "End" => code == KeyCode::End,
        s => {
            if let Some(n) = s.strip_prefix('F').and_then(|rest| rest.parse::<u8>().ok()) {
                return code == KeyCode::F(n);
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = CubeConfig::from_json(r#"{ "viewport": { "width": 60, "height": 30 } }"#)
            .expect("valid json");
        assert_eq!(config.viewport, Viewport { width: 60, height: 30 });
        assert_eq!(config.camera.distance, 100.0);
        assert_eq!(config.camera.k1, 25.0);
        assert_eq!(config.animation.timeout_ms, 5000);
        assert_eq!(config.keys.reserved, "Tab");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("ascii-cube-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let config = CubeConfig::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.animation.speed_ab, 0.015);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CubeConfig::load_from(std::path::Path::new("/nonexistent/ascii-cube.json"));
        assert_eq!(config.animation.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn binding_modifiers_are_exclusive() {
        let tab = key(KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches_binding("Tab", &tab));
        assert!(!matches_binding("Tab", &key(KeyCode::Tab, KeyModifiers::ALT)));

        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches_binding("Ctrl-c", &ctrl_c));
        assert!(!matches_binding("c", &ctrl_c));
        assert!(!matches_binding("Ctrl-c", &key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn function_keys_and_single_chars() {
        assert!(matches_binding("F5", &key(KeyCode::F(5), KeyModifiers::NONE)));
        assert!(matches_binding("q", &key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!matches_binding("qq", &key(KeyCode::Char('q'), KeyModifiers::NONE)));
    }
}
