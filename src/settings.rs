//! Settings management for the room configurator
//!
//! Tunables that are not part of the room itself: ease rates, window detail,
//! furniture placement policy and camera lens. Stored as RON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::animation::EaseRate;
use crate::error::SettingsError;
use crate::furniture::PlacementPolicy;
use crate::scene::WindowStyle;

/// Configurator settings (serialized in settings.ron)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguratorSettings {
    /// Door swing ease rate per reference tick
    #[serde(default = "default_door_ease_rate")]
    pub door_ease_rate: EaseRate,

    /// Orbit camera ease rate per reference tick
    #[serde(default = "default_camera_ease_rate")]
    pub camera_ease_rate: EaseRate,

    /// Window level of detail
    #[serde(default)]
    pub window_style: WindowStyle,

    /// Whether furniture must stay inside the room
    #[serde(default)]
    pub placement_policy: PlacementPolicy,

    /// Vertical field of view in degrees (20-120)
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,
}

fn default_door_ease_rate() -> EaseRate {
    EaseRate::DOOR
}

fn default_camera_ease_rate() -> EaseRate {
    EaseRate::CAMERA
}

fn default_fov_degrees() -> f32 {
    50.0
}

impl Default for ConfiguratorSettings {
    fn default() -> Self {
        Self {
            door_ease_rate: default_door_ease_rate(),
            camera_ease_rate: default_camera_ease_rate(),
            window_style: WindowStyle::default(),
            placement_policy: PlacementPolicy::default(),
            fov_degrees: default_fov_degrees(),
        }
    }
}

impl ConfiguratorSettings {
    /// Pull every field back into its legal range
    pub fn sanitize(&mut self) {
        self.door_ease_rate = EaseRate::new(self.door_ease_rate.per_tick());
        self.camera_ease_rate = EaseRate::new(self.camera_ease_rate.per_tick());
        self.fov_degrees = if self.fov_degrees.is_finite() {
            self.fov_degrees.clamp(20.0, 120.0)
        } else {
            default_fov_degrees()
        };
    }

    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = ron::from_str(text)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let pretty = ron::ser::PrettyConfig::default();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load settings from a RON file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_ron(&contents)?;
        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to a RON file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_ron()?)?;
        log::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Default settings file under the platform config directory
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        path.push("RoomConfigurator");
        path.push("settings.ron");
        Ok(path)
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                return Self::default();
            }
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
