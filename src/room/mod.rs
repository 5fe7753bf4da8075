//! Room shell module
//!
//! Parametric placement for a rectangular room: four walls, ceiling, floor, one
//! door, one window, and the camera targets used to frame them.

pub mod limits;
pub mod planner;
pub mod types;

pub use limits::{validate_shell, Bounds};
pub use planner::{
    ceiling_transform, door_offset_bounds, door_panel_local_center, door_transform,
    exterior_camera_position, floor_transform, interior_camera_position, wall_plane_transform,
    window_transform, yaw_rotation, HorizontalPlane, Placement, WallPlane,
};
pub use types::{Color, DoorSpec, Finishes, Room, Surface, WallSelector, WindowSpec};
