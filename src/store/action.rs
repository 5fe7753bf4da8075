//! User intents accepted by the store

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::{NavigationMode, Viewpoint};
use crate::furniture::{FurnitureId, FurnitureType, SizeClass};
use crate::room::{Color, DoorSpec, Room, Surface, WindowSpec};

/// One discrete user event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the room box
    SetRoom(Room),
    /// Replace the door parameters
    SetDoor(DoorSpec),
    /// Replace the window parameters
    SetWindow(WindowSpec),
    /// Recolor a wall, the ceiling or the floor
    SetWallColor { surface: Surface, color: Color },
    /// Flip the door between open and closed
    ToggleDoor,
    SetViewpoint(Viewpoint),
    SetNavigationMode(NavigationMode),
    /// Place a new catalog item
    AddFurniture {
        #[serde(rename = "type")]
        kind: FurnitureType,
        #[serde(default)]
        size: SizeClass,
        color: Color,
        position: Vec3,
    },
    /// Drag-end: move an existing item
    MoveFurniture { id: FurnitureId, position: Vec3 },
    RemoveFurniture(FurnitureId),
}

impl Action {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetRoom(_) => "SetRoom",
            Action::SetDoor(_) => "SetDoor",
            Action::SetWindow(_) => "SetWindow",
            Action::SetWallColor { .. } => "SetWallColor",
            Action::ToggleDoor => "ToggleDoor",
            Action::SetViewpoint(_) => "SetViewpoint",
            Action::SetNavigationMode(_) => "SetNavigationMode",
            Action::AddFurniture { .. } => "AddFurniture",
            Action::MoveFurniture { .. } => "MoveFurniture",
            Action::RemoveFurniture(_) => "RemoveFurniture",
        }
    }
}
