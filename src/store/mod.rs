//! Configurator state store
//!
//! Single owned state container with unidirectional data flow: hosts send
//! [`Action`]s, the store validates a candidate and commits it by whole-value
//! replacement, and read-only views pull a [`SceneFrame`] each frame.

mod action;

pub use action::Action;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec3;

use crate::animation::{camera_target, CameraRig, DoorSwing, NavigationMode, Viewpoint};
use crate::error::{ConfiguratorError, ValidationError};
use crate::furniture::{
    check_placement, dimensions, FurnitureId, FurnitureItem, FurnitureType, PlacementPolicy,
    SizeClass,
};
use crate::room::{validate_shell, Color, DoorSpec, Finishes, Room, Surface, WindowSpec};
use crate::scene::{build_scene, CameraFrame, SceneFrame, SceneInput};
use crate::settings::ConfiguratorSettings;

/// Everything the configurator knows about the current session
#[derive(Debug, Clone)]
pub struct ConfiguratorState {
    room: Room,
    door: DoorSpec,
    window: WindowSpec,
    finishes: Finishes,
    furniture: Vec<FurnitureItem>,
    next_id: u64,
    viewpoint: Viewpoint,
    door_swing: DoorSwing,
    camera: CameraRig,
    settings: ConfiguratorSettings,
}

impl Default for ConfiguratorState {
    fn default() -> Self {
        Self::new(ConfiguratorSettings::default())
    }
}

impl ConfiguratorState {
    /// Default room with the given settings
    pub fn new(mut settings: ConfiguratorSettings) -> Self {
        settings.sanitize();
        let room = Room::default();
        let camera = CameraRig {
            fov_degrees: settings.fov_degrees,
            look_at: room.center(),
            ..Default::default()
        };

        Self {
            room,
            door: DoorSpec::default(),
            window: WindowSpec::default(),
            finishes: Finishes::default(),
            furniture: Vec::new(),
            next_id: 1,
            viewpoint: Viewpoint::default(),
            door_swing: DoorSwing::default(),
            camera,
            settings,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn door(&self) -> &DoorSpec {
        &self.door
    }

    pub fn window(&self) -> &WindowSpec {
        &self.window
    }

    pub fn finishes(&self) -> &Finishes {
        &self.finishes
    }

    pub fn viewpoint(&self) -> Viewpoint {
        self.viewpoint
    }

    pub fn door_swing(&self) -> &DoorSwing {
        &self.door_swing
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn settings(&self) -> &ConfiguratorSettings {
        &self.settings
    }

    /// Placed items in creation order
    pub fn placed_items(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    pub fn furniture(&self, id: FurnitureId) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|item| item.id == id)
    }

    /// Where the camera is heading for the current viewpoint
    pub fn camera_target(&self) -> Vec3 {
        camera_target(self.viewpoint, self.door.wall, &self.room)
    }

    /// Apply one action. On error nothing changes.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ConfiguratorError> {
        let name = action.name();
        let result = match action {
            Action::SetRoom(room) => self.set_room(room),
            Action::SetDoor(door) => self.set_door(door),
            Action::SetWindow(window) => self.set_window(window),
            Action::SetWallColor { surface, color } => {
                self.set_surface_color(surface, color);
                Ok(())
            }
            Action::ToggleDoor => {
                self.toggle_door();
                Ok(())
            }
            Action::SetViewpoint(viewpoint) => {
                self.set_viewpoint(viewpoint);
                Ok(())
            }
            Action::SetNavigationMode(mode) => {
                self.set_navigation_mode(mode);
                Ok(())
            }
            Action::AddFurniture {
                kind,
                size,
                color,
                position,
            } => self.add_furniture(kind, size, color, position).map(|_| ()),
            Action::MoveFurniture { id, position } => self.move_furniture(id, position),
            Action::RemoveFurniture(id) => self.remove_furniture(id).map(|_| ()),
        };

        match &result {
            Ok(()) => log::debug!("Applied {}", name),
            Err(e) => log::warn!("Rejected {}: {}", name, e),
        }
        result
    }

    /// Resize the room; the current openings and furniture must still fit
    pub fn set_room(&mut self, room: Room) -> Result<(), ConfiguratorError> {
        validate_shell(&room, &self.door, &self.window)?;
        check_all_placements(&self.furniture, &room, self.settings.placement_policy)?;
        self.room = room;
        Ok(())
    }

    pub fn set_door(&mut self, door: DoorSpec) -> Result<(), ConfiguratorError> {
        validate_shell(&self.room, &door, &self.window)?;
        self.door = door;
        Ok(())
    }

    pub fn set_window(&mut self, window: WindowSpec) -> Result<(), ConfiguratorError> {
        validate_shell(&self.room, &self.door, &window)?;
        self.window = window;
        Ok(())
    }

    pub fn set_surface_color(&mut self, surface: Surface, color: Color) {
        let mut finishes = self.finishes;
        match surface {
            Surface::Wall(wall) => finishes.set_wall(wall, color),
            Surface::Ceiling => finishes.ceiling = color,
            Surface::Floor => finishes.floor = color,
        }
        self.finishes = finishes;
    }

    pub fn toggle_door(&mut self) {
        self.door_swing.toggle();
    }

    pub fn set_viewpoint(&mut self, viewpoint: Viewpoint) {
        self.viewpoint = viewpoint;
    }

    pub fn set_navigation_mode(&mut self, mode: NavigationMode) {
        self.camera.mode = mode;
    }

    /// Place a new item and return its id
    pub fn add_furniture(
        &mut self,
        kind: FurnitureType,
        size: SizeClass,
        color: Color,
        position: Vec3,
    ) -> Result<FurnitureId, ConfiguratorError> {
        check_placement(
            &dimensions(kind, size),
            position,
            &self.room,
            self.settings.placement_policy,
        )?;

        let id = FurnitureId(self.next_id);
        self.next_id += 1;
        self.furniture.push(FurnitureItem {
            id,
            kind,
            color,
            size,
            position,
        });
        Ok(id)
    }

    pub fn move_furniture(
        &mut self,
        id: FurnitureId,
        position: Vec3,
    ) -> Result<(), ConfiguratorError> {
        let policy = self.settings.placement_policy;
        let room = self.room;
        let item = self
            .furniture
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ConfiguratorError::NotFound(id))?;

        check_placement(&item.dimensions(), position, &room, policy)?;
        item.position = position;
        Ok(())
    }

    /// Remove exactly the item with `id`
    pub fn remove_furniture(
        &mut self,
        id: FurnitureId,
    ) -> Result<FurnitureItem, ConfiguratorError> {
        let index = self
            .furniture
            .iter()
            .position(|item| item.id == id)
            .ok_or(ConfiguratorError::NotFound(id))?;
        Ok(self.furniture.remove(index))
    }

    /// Update settings; the camera lens follows immediately
    ///
    /// Switching to a stricter placement policy is rejected while any placed item
    /// would violate it.
    pub fn set_settings(
        &mut self,
        mut settings: ConfiguratorSettings,
    ) -> Result<(), ConfiguratorError> {
        settings.sanitize();
        check_all_placements(&self.furniture, &self.room, settings.placement_policy)?;
        self.camera.fov_degrees = settings.fov_degrees;
        self.settings = settings;
        Ok(())
    }

    /// Advance door and camera animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.door_swing = self.door_swing.advance(dt, self.settings.door_ease_rate);
        self.camera = self.camera.advance(
            self.camera_target(),
            self.room.center(),
            dt,
            self.settings.camera_ease_rate,
        );
    }

    /// Whether door and camera have both come to rest
    pub fn is_settled(&self) -> bool {
        self.door_swing.is_settled() && self.camera.is_at(self.camera_target())
    }

    /// Draw list and camera for the current state
    pub fn frame(&self) -> SceneFrame {
        let commands = build_scene(&SceneInput {
            room: &self.room,
            door: &self.door,
            window: &self.window,
            finishes: &self.finishes,
            furniture: &self.furniture,
            door_angle: self.door_swing.angle,
            window_style: self.settings.window_style,
        });

        SceneFrame {
            camera: CameraFrame::from(&self.camera),
            commands,
        }
    }

    /// Hash of everything that shapes static geometry
    ///
    /// Changes when the room, openings, finishes, furniture or window style change;
    /// door swing and camera motion do not affect it.
    pub fn scene_fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        for v in [self.room.width, self.room.length, self.room.height] {
            v.to_bits().hash(&mut hasher);
        }

        self.door.width.to_bits().hash(&mut hasher);
        self.door.height.to_bits().hash(&mut hasher);
        self.door.horizontal_offset.to_bits().hash(&mut hasher);
        self.door.wall.hash(&mut hasher);
        self.door.color.hash(&mut hasher);

        self.window.width.to_bits().hash(&mut hasher);
        self.window.height.to_bits().hash(&mut hasher);
        self.window.height_from_floor.to_bits().hash(&mut hasher);
        self.window.horizontal_offset.to_bits().hash(&mut hasher);
        self.window.wall.hash(&mut hasher);
        self.window.color.hash(&mut hasher);

        self.finishes.hash(&mut hasher);
        self.settings.window_style.hash(&mut hasher);

        for item in &self.furniture {
            item.id.hash(&mut hasher);
            item.kind.hash(&mut hasher);
            item.size.hash(&mut hasher);
            item.color.hash(&mut hasher);
            for v in item.position.to_array() {
                v.to_bits().hash(&mut hasher);
            }
        }

        hasher.finish()
    }
}

/// Every placed item against a candidate room and policy
fn check_all_placements(
    items: &[FurnitureItem],
    room: &Room,
    policy: PlacementPolicy,
) -> Result<(), ValidationError> {
    for item in items {
        check_placement(&item.dimensions(), item.position, room, policy)?;
    }
    Ok(())
}
