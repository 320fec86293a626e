//! Game configuration
//!
//! Stored as RON. Defaults reproduce the stock game; a file shipped next to
//! the executable can override them, and a per-user file under the platform
//! config dir overrides that. The settings menu writes the per-user file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::{CollisionTuning, FpsLimit};

/// Config shipped with the game assets
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/game.ron";

/// Logical scene size; every scene descriptor is authored in this space
pub const SCENE_WIDTH: f32 = 1280.0;
pub const SCENE_HEIGHT: f32 = 720.0;

/// Error type for config operations
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub fps_limit: FpsLimit,
    pub player: PlayerSettings,
    pub collision: CollisionTuning,
    pub gameplay: GameplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH as i32,
            height: SCENE_HEIGHT as i32,
            title: "The Se7enth Code".to_string(),
            fullscreen: false,
        }
    }
}

/// One facing direction's frames: a sheet row and the columns to cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStrip {
    pub row: u32,
    pub cols: Vec<u32>,
}

impl FrameStrip {
    fn new(row: u32, first_col: u32) -> Self {
        Self { row, cols: (first_col..first_col + 6).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionLayout {
    pub down: FrameStrip,
    pub right: FrameStrip,
    pub up: FrameStrip,
    pub left: FrameStrip,
}

impl DirectionLayout {
    /// Stock sheet: right, up, left, down in blocks of six columns
    fn on_row(row: u32) -> Self {
        Self {
            right: FrameStrip::new(row, 0),
            up: FrameStrip::new(row, 6),
            left: FrameStrip::new(row, 12),
            down: FrameStrip::new(row, 18),
        }
    }

    fn strips(&self) -> [&FrameStrip; 4] {
        [&self.down, &self.right, &self.up, &self.left]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Pixels per frame at 60 FPS
    pub speed: f32,
    pub sprite_sheet: String,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub scale: f32,
    pub row_spacing: f32,
    pub col_spacing: f32,
    pub walk_layout: DirectionLayout,
    pub idle_layout: DirectionLayout,
    pub animation_speed: f32,
    pub idle_animation_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 5.0,
            sprite_sheet: "assets/images/characters/postman.png".to_string(),
            sprite_width: 16.0,
            sprite_height: 24.0,
            scale: 3.0,
            row_spacing: 8.0,
            col_spacing: 0.0,
            walk_layout: DirectionLayout::on_row(2),
            idle_layout: DirectionLayout::on_row(1),
            animation_speed: 0.15,
            idle_animation_speed: 0.08,
        }
    }
}

impl PlayerSettings {
    /// On-screen player size
    pub fn size(&self) -> (f32, f32) {
        (self.sprite_width * self.scale, self.sprite_height * self.scale)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    pub max_wrong_accusations: u32,
    /// Show the collision overlay when a scene is first entered
    pub debug_on_start: bool,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self { max_wrong_accusations: 3, debug_on_start: false }
    }
}

// =============================================================================
// Load / save
// =============================================================================

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        if p.speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!("player speed must be positive ({})", p.speed)));
        }
        if p.sprite_width <= 0.0 || p.sprite_height <= 0.0 || p.scale <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "sprite size must be positive ({}x{} @ {})",
                p.sprite_width, p.sprite_height, p.scale
            )));
        }
        for layout in [&p.walk_layout, &p.idle_layout] {
            if layout.strips().iter().any(|s| s.cols.is_empty()) {
                return Err(ConfigError::ValidationError("animation strip has no frames".to_string()));
            }
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "window size must be positive ({}x{})",
                self.window.width, self.window.height
            )));
        }
        if self.collision.nudge_px < 0.0 || !(0.0..=1.0).contains(&self.collision.step_fraction) {
            return Err(ConfigError::ValidationError("collision tuning out of range".to_string()));
        }
        Ok(())
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, config)?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load the last readable file in `paths`, falling back to defaults
    pub fn load_layered(paths: &[PathBuf]) -> Self {
        for path in paths.iter().rev() {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    println!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    eprintln!("Failed to load config {}: {}, trying next", path.display(), e);
                }
            }
        }
        println!("Using default config");
        Self::default()
    }

    /// Bundled config, then the per-user override
    pub fn load_or_default() -> Self {
        let mut paths = vec![PathBuf::from(BUNDLED_CONFIG_PATH)];
        if let Some(user) = user_config_path() {
            paths.push(user);
        }
        Self::load_layered(&paths)
    }
}

/// Per-user config file (native only)
pub fn user_config_path() -> Option<PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::config_dir().map(|dir| dir.join("sin-detective").join("game.ron"))
    }
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let config = GameConfig::default();
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.player.size(), (48.0, 72.0));
        assert_eq!(config.player.walk_layout.down.row, 2);
        assert_eq!(config.player.walk_layout.down.cols, vec![18, 19, 20, 21, 22, 23]);
        assert_eq!(config.player.idle_layout.up.row, 1);
        assert_eq!(config.gameplay.max_wrong_accusations, 3);
        assert_eq!(config.fps_limit, FpsLimit::Fps60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("game.ron");

        let mut config = GameConfig::default();
        config.window.fullscreen = true;
        config.fps_limit = FpsLimit::Unlocked;
        config.collision.nudge_px = 4.0;
        config.save(&path).expect("save");

        let loaded = GameConfig::load(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = GameConfig::from_ron_str("(fps_limit: Fps30, gameplay: (debug_on_start: true))").expect("parse");
        assert_eq!(config.fps_limit, FpsLimit::Fps30);
        assert!(config.gameplay.debug_on_start);
        assert_eq!(config.gameplay.max_wrong_accusations, 3);
        assert_eq!(config.player, PlayerSettings::default());
    }

    #[test]
    fn test_validation_rejects_bad_speed() {
        let result = GameConfig::from_ron_str("(player: (speed: 0.0))");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(GameConfig::from_ron_str("(fps_limit: "), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_layered_load_prefers_later_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bundled = dir.path().join("bundled.ron");
        let user = dir.path().join("user.ron");
        fs::write(&bundled, "(fps_limit: Fps30)").expect("write");
        fs::write(&user, "(fps_limit: Unlocked)").expect("write");

        let config = GameConfig::load_layered(&[bundled.clone(), user.clone()]);
        assert_eq!(config.fps_limit, FpsLimit::Unlocked);

        // Broken user file falls through to the bundled one
        fs::write(&user, "not ron").expect("write");
        let config = GameConfig::load_layered(&[bundled, user]);
        assert_eq!(config.fps_limit, FpsLimit::Fps30);
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = GameConfig::load_layered(&[dir.path().join("nope.ron")]);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_CONFIG_PATH);
        let config = GameConfig::load(path).expect("bundled config");
        assert_eq!(config, GameConfig::default());
    }
}
