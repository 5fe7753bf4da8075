//! Room geometry planner
//!
//! Turns room and opening parameters into placement transforms. Every function
//! here is pure: the same inputs always produce the same outputs.
//!
//! Coordinate frame: right-handed, Y up, floor centred on the origin. Yaw turns
//! +X toward +Z (clockwise seen from above), so at each wall's yaw the local +Z
//! axis is the wall's outward normal and local +X runs along the wall.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::limits;
use super::types::{DoorSpec, Room, WallSelector, WindowSpec};
use crate::room::Bounds;

/// Gap between a window and its wall plane
pub const WINDOW_CLEARANCE: f32 = 0.01;

/// Default outside-looking-in vantage
pub const EXTERIOR_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 10.0);

/// How far inside the door wall the "walk in" camera stands
pub const INTERIOR_CAMERA_INSET: f32 = 1.0;

/// Position plus rotation about the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    pub yaw_degrees: f32,
}

impl Placement {
    pub fn new(position: Vec3, yaw_degrees: f32) -> Self {
        Self {
            position,
            yaw_degrees,
        }
    }

    /// Quaternion for the yaw (glam rotations are counter-clockwise, hence the sign)
    pub fn rotation(&self) -> Quat {
        yaw_rotation(self.yaw_degrees.to_radians())
    }
}

/// Rotation for a clockwise yaw given in radians
pub fn yaw_rotation(yaw_radians: f32) -> Quat {
    Quat::from_rotation_y(-yaw_radians)
}

/// A vertical wall plane with its size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallPlane {
    pub wall: WallSelector,
    pub placement: Placement,
    pub width: f32,
    pub height: f32,
}

impl WallPlane {
    /// Outward facing normal after rotation
    pub fn normal(&self) -> Vec3 {
        self.placement.rotation() * Vec3::Z
    }
}

/// Horizontal plane for the floor or ceiling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPlane {
    pub position: Vec3,
    /// Rotation taking the plane's local +Z onto its facing direction
    pub rotation: Quat,
    pub width: f32,
    pub length: f32,
}

/// Point on the wall plane at `offset` along the wall's axis and height `y`
fn point_on_wall(wall: WallSelector, room: &Room, offset: f32, y: f32) -> Vec3 {
    let distance = room.wall_distance(wall);
    match wall {
        WallSelector::Front => Vec3::new(offset, y, distance),
        WallSelector::Back => Vec3::new(offset, y, -distance),
        WallSelector::Left => Vec3::new(-distance, y, offset),
        WallSelector::Right => Vec3::new(distance, y, offset),
    }
}

/// Plane for one wall, centred on its face at half height
pub fn wall_plane_transform(wall: WallSelector, room: &Room) -> WallPlane {
    WallPlane {
        wall,
        placement: Placement::new(
            point_on_wall(wall, room, 0.0, room.height / 2.0),
            wall.yaw_degrees(),
        ),
        width: room.wall_extent(wall),
        height: room.height,
    }
}

/// Ceiling plane at `room.height`, facing down into the room
pub fn ceiling_transform(room: &Room) -> HorizontalPlane {
    HorizontalPlane {
        position: Vec3::new(0.0, room.height, 0.0),
        rotation: Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        width: room.width,
        length: room.length,
    }
}

/// Floor plane at y = 0, facing up
pub fn floor_transform(room: &Room) -> HorizontalPlane {
    HorizontalPlane {
        position: Vec3::ZERO,
        rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        width: room.width,
        length: room.length,
    }
}

/// Hinge placement for the door
///
/// The door panel's local centre sits at `(+width/2, height/2, 0)` from the
/// returned position, so swinging rotates about the hinge edge. The hinge is
/// shifted back along the wall tangent so the closed panel is centred on
/// `horizontal_offset`.
pub fn door_transform(door: &DoorSpec, room: &Room) -> Placement {
    let hinge = door.horizontal_offset - door.wall.tangent_sign() * door.width / 2.0;
    Placement::new(
        point_on_wall(door.wall, room, hinge, 0.0),
        door.wall.yaw_degrees(),
    )
}

/// Local offset from the hinge to the door panel centre
pub fn door_panel_local_center(door: &DoorSpec) -> Vec3 {
    Vec3::new(door.width / 2.0, door.height / 2.0, 0.0)
}

/// Centre placement for the window, just outside its wall
pub fn window_transform(window: &WindowSpec, room: &Room) -> Placement {
    let on_wall = point_on_wall(
        window.wall,
        room,
        window.horizontal_offset,
        window.height_from_floor + window.height / 2.0,
    );
    Placement::new(
        on_wall + window.wall.normal() * WINDOW_CLEARANCE,
        window.wall.yaw_degrees(),
    )
}

/// Legal `[min, max]` horizontal offset for the door on its wall
pub fn door_offset_bounds(door: &DoorSpec, room: &Room) -> Bounds {
    limits::door_offset_bounds(door, room)
}

/// Walk-in camera target: one unit inside the door wall, half room height
pub fn interior_camera_position(door_wall: WallSelector, room: &Room) -> Vec3 {
    let inset = room.wall_distance(door_wall) - INTERIOR_CAMERA_INSET;
    let y = room.height / 2.0;
    match door_wall {
        WallSelector::Front => Vec3::new(0.0, y, inset),
        WallSelector::Back => Vec3::new(0.0, y, -inset),
        WallSelector::Left => Vec3::new(-inset, y, 0.0),
        WallSelector::Right => Vec3::new(inset, y, 0.0),
    }
}

/// Fixed outside-looking-in vantage
pub fn exterior_camera_position() -> Vec3 {
    EXTERIOR_CAMERA_POSITION
}
