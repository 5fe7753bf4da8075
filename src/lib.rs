//! Room Configurator Library
//!
//! Parametric room shell planner: walls, a hinged door, a window and placed
//! furniture become a renderer-agnostic draw list, with eased door and camera
//! animation driven by an explicit tick.

pub mod animation;
pub mod error;
pub mod furniture;
pub mod room;
pub mod scene;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use animation::{CameraRig, DoorState, DoorSwing, EaseRate, NavigationMode, Viewpoint};
pub use error::{ConfiguratorError, SettingsError, ValidationError};
pub use furniture::{FurnitureId, FurnitureItem, FurnitureType, PlacementPolicy, SizeClass};
pub use room::{Color, DoorSpec, Finishes, Room, Surface, WallSelector, WindowSpec};
pub use scene::{DrawCommand, SceneFrame, WindowStyle};
pub use settings::ConfiguratorSettings;
pub use store::{Action, ConfiguratorState};
