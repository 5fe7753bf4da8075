//! Furniture module
//!
//! Catalog lookups, placed furniture items, and the placement policy that decides
//! whether an item may sit outside the room shell.

pub mod catalog;
pub mod parts;

pub use catalog::{dimensions, FurnitureDimensions, FurnitureType, SizeClass};
pub use parts::{parts, Part, PartTint};

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::room::{Color, Room};

/// Identifier issued in creation order, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FurnitureId(pub u64);

impl fmt::Display for FurnitureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed piece of furniture
///
/// Only `position` changes after creation (drag-end events).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: FurnitureId,
    #[serde(rename = "type")]
    pub kind: FurnitureType,
    pub color: Color,
    pub size: SizeClass,
    /// Floor centre of the footprint
    pub position: Vec3,
}

impl FurnitureItem {
    pub fn dimensions(&self) -> FurnitureDimensions {
        dimensions(self.kind, self.size)
    }

    /// Display label for the placed-items list
    pub fn label(&self) -> String {
        let name = self.kind.display_name();
        format!("{} #{} ({:?})", name, self.id, self.size)
    }
}

/// Whether furniture must stay within the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlacementPolicy {
    /// Sandbox: any finite position is accepted
    #[default]
    FreeForm,
    /// Footprint must stay on the floor rectangle and under the ceiling
    ContainWithinRoom,
}

impl PlacementPolicy {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PlacementPolicy::FreeForm => "Free-form (sandbox)",
            PlacementPolicy::ContainWithinRoom => "Keep inside room",
        }
    }
}

/// Check a candidate position for an item of the given dimensions
pub fn check_placement(
    dims: &FurnitureDimensions,
    position: Vec3,
    room: &Room,
    policy: PlacementPolicy,
) -> Result<(), ValidationError> {
    if !position.is_finite() {
        return Err(ValidationError::NonFinitePosition);
    }

    if policy == PlacementPolicy::ContainWithinRoom {
        let inside_x = position.x.abs() + dims.width / 2.0 <= room.width / 2.0;
        let inside_z = position.z.abs() + dims.depth / 2.0 <= room.length / 2.0;
        let inside_y = position.y >= 0.0 && position.y + dims.height <= room.height;
        if !(inside_x && inside_z && inside_y) {
            return Err(ValidationError::OutsideRoom {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
    }
    Ok(())
}
