//! Error types for the configurator
//!
//! Every failure in this crate is local and recoverable: a rejected input leaves
//! the state exactly as it was before the input arrived.

use thiserror::Error;

use crate::furniture::FurnitureId;
use crate::room::{Bounds, WallSelector};

/// A dimension, offset or value outside its legal range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("room {dimension} must be a positive finite number (got {value})")]
    RoomDimension { dimension: &'static str, value: f32 },

    #[error("door width {value} is outside {bounds}")]
    DoorWidth { value: f32, bounds: Bounds },

    #[error("door height {value} is outside {bounds}")]
    DoorHeight { value: f32, bounds: Bounds },

    #[error("room height {room_height} is too low to fit a door (needs at least {required})")]
    RoomTooLowForDoor { room_height: f32, required: f32 },

    #[error("door offset {value} on the {wall} wall is outside {bounds}")]
    DoorOffset {
        value: f32,
        wall: WallSelector,
        bounds: Bounds,
    },

    #[error("window width {value} is outside {bounds}")]
    WindowWidth { value: f32, bounds: Bounds },

    #[error("window height {value} is outside {bounds}")]
    WindowHeight { value: f32, bounds: Bounds },

    #[error("window height from floor {value} is outside {bounds}")]
    WindowHeightFromFloor { value: f32, bounds: Bounds },

    #[error("window offset {value} on the {wall} wall is outside {bounds}")]
    WindowOffset {
        value: f32,
        wall: WallSelector,
        bounds: Bounds,
    },

    #[error("door and window overlap on the {wall} wall")]
    OpeningsOverlap { wall: WallSelector },

    #[error("invalid color {0:?} (expected #rrggbb or #rgb)")]
    Color(String),

    #[error("furniture position must be finite")]
    NonFinitePosition,

    #[error("furniture footprint leaves the room at ({x}, {y}, {z})")]
    OutsideRoom { x: f32, y: f32, z: f32 },
}

/// Errors surfaced by the state store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfiguratorError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("no furniture item with id {0}")]
    NotFound(FurnitureId),
}

impl ConfiguratorError {
    /// Whether the error is the benign "already gone" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfiguratorError::NotFound(_))
    }
}

/// Errors from loading or saving settings files.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("RON write error: {0}")]
    Write(#[from] ron::Error),

    #[error("Could not find config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_range() {
        let err = ValidationError::DoorWidth {
            value: 2.5,
            bounds: Bounds::new(0.6, 2.0),
        };
        let msg = err.to_string();
        assert!(msg.contains("2.5"));
        assert!(msg.contains("[0.6, 2]"));
    }

    #[test]
    fn test_not_found_is_benign() {
        let err = ConfiguratorError::NotFound(FurnitureId(7));
        assert!(err.is_not_found());
        let err: ConfiguratorError = ValidationError::NonFinitePosition.into();
        assert!(!err.is_not_found());
    }
}
