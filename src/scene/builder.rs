//! Scene builder
//!
//! Pure function from the room parameters and placed furniture to a draw list.

use glam::{Quat, Vec3};

use super::openings::{door_commands, window_commands, WindowStyle};
use super::{DrawCommand, Material, SceneTransform, Shape};
use crate::furniture::{parts, FurnitureItem, PartTint};
use crate::room::{
    ceiling_transform, door_transform, floor_transform, wall_plane_transform, window_transform,
    yaw_rotation, DoorSpec, Finishes, HorizontalPlane, Room, WallSelector, WindowSpec,
};

/// Brightness of accent parts relative to the item color
const ACCENT_SHADE: f32 = 0.6;

/// Borrowed inputs for one scene build
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub room: &'a Room,
    pub door: &'a DoorSpec,
    pub window: &'a WindowSpec,
    pub finishes: &'a Finishes,
    pub furniture: &'a [FurnitureItem],
    /// Current door swing about the hinge, radians
    pub door_angle: f32,
    pub window_style: WindowStyle,
}

/// Build the full draw list: shell, openings, then furniture
pub fn build_scene(input: &SceneInput) -> Vec<DrawCommand> {
    let mut commands = shell_commands(input.room, input.finishes);

    let door_placement = door_transform(input.door, input.room);
    let swing = SceneTransform::new(Vec3::ZERO, yaw_rotation(input.door_angle));
    let hinge = SceneTransform::from(door_placement).compose(&swing);
    commands.extend(door_commands(input.door, &hinge));

    let window_center = SceneTransform::from(window_transform(input.window, input.room));
    let window = window_commands(input.window, &window_center, input.window_style);
    commands.extend(window);

    for item in input.furniture {
        commands.extend(furniture_commands(item));
    }

    log::trace!("Built scene with {} draw commands", commands.len());
    commands
}

fn horizontal(name: &str, plane: HorizontalPlane, material: Material) -> DrawCommand {
    DrawCommand {
        name: name.to_string(),
        shape: Shape::Plane {
            width: plane.width,
            height: plane.length,
        },
        transform: SceneTransform::new(plane.position, plane.rotation),
        material,
    }
}

/// Four double-sided walls, the ceiling and the floor
fn shell_commands(room: &Room, finishes: &Finishes) -> Vec<DrawCommand> {
    let mut commands: Vec<DrawCommand> = WallSelector::all()
        .iter()
        .map(|&wall| {
            let plane = wall_plane_transform(wall, room);
            DrawCommand {
                name: format!("wall.{}", wall.name()),
                shape: Shape::Plane {
                    width: plane.width,
                    height: plane.height,
                },
                transform: plane.placement.into(),
                material: Material::solid(finishes.wall(wall)).double_sided(),
            }
        })
        .collect();

    commands.push(horizontal(
        "ceiling",
        ceiling_transform(room),
        Material::solid(finishes.ceiling),
    ));
    commands.push(horizontal(
        "floor",
        floor_transform(room),
        Material::solid(finishes.floor),
    ));
    commands
}

/// Primitives for one placed item
pub fn furniture_commands(item: &FurnitureItem) -> Vec<DrawCommand> {
    let body = Material::solid(item.color);
    let accent = Material::solid(item.color.shaded(ACCENT_SHADE));

    parts(item.kind, &item.dimensions())
        .into_iter()
        .map(|part| DrawCommand {
            name: format!("furniture.{}.{}", item.id, part.name),
            shape: part.shape,
            transform: SceneTransform::new(item.position + part.offset, Quat::IDENTITY),
            material: match part.tint {
                PartTint::Body => body,
                PartTint::Accent => accent,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furniture::{FurnitureId, FurnitureType, SizeClass};
    use crate::room::Color;

    fn build(door: DoorSpec, furniture: &[FurnitureItem], style: WindowStyle) -> Vec<DrawCommand> {
        let room = Room::new(8.0, 8.0, 4.0);
        let window = WindowSpec::default();
        let finishes = Finishes::default();
        build_scene(&SceneInput {
            room: &room,
            door: &door,
            window: &window,
            finishes: &finishes,
            furniture,
            door_angle: 0.0,
            window_style: style,
        })
    }

    fn find<'a>(commands: &'a [DrawCommand], name: &str) -> &'a DrawCommand {
        commands
            .iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("missing {name}"))
    }

    #[test]
    fn test_shell_commands() {
        let commands = build(DoorSpec::default(), &[], WindowStyle::Simple);
        // 4 walls + ceiling + floor + 3 door parts + 1 window
        assert_eq!(commands.len(), 10);
        for wall in WallSelector::all() {
            let cmd = find(&commands, &format!("wall.{}", wall.name()));
            assert!(cmd.material.double_sided);
            let normal = cmd.transform.rotation * Vec3::Z;
            assert!((normal - wall.normal()).length() < 1e-5);
        }
        assert_eq!(find(&commands, "ceiling").transform.translation.y, 4.0);
    }

    #[test]
    fn test_door_panel_centered_when_closed() {
        let door = DoorSpec {
            width: 1.0,
            height: 2.0,
            wall: WallSelector::Left,
            ..Default::default()
        };
        let commands = build(door, &[], WindowStyle::Framed);
        let panel = find(&commands, "door.panel");
        let expected = Vec3::new(-4.0, 1.0, 0.0);
        assert!((panel.transform.translation - expected).length() < 1e-5);
    }

    #[test]
    fn test_wall_colors_are_independent() {
        let room = Room::default();
        let mut finishes = Finishes::default();
        finishes.set_wall(WallSelector::Right, Color::rgb(0xff, 0, 0));
        let commands = build_scene(&SceneInput {
            room: &room,
            door: &DoorSpec::default(),
            window: &WindowSpec::default(),
            finishes: &finishes,
            furniture: &[],
            door_angle: 0.0,
            window_style: WindowStyle::Simple,
        });
        let red = Color::rgb(0xff, 0, 0);
        assert_eq!(find(&commands, "wall.right").material.color, red);
        assert_ne!(find(&commands, "wall.left").material.color, red);
    }

    #[test]
    fn test_furniture_parts_follow_position() {
        let item = FurnitureItem {
            id: FurnitureId(4),
            kind: FurnitureType::Table,
            color: Color::rgb(0x80, 0x40, 0x20),
            size: SizeClass::Medium,
            position: Vec3::new(1.0, 0.0, -2.0),
        };
        let items = std::slice::from_ref(&item);
        let commands = build(DoorSpec::default(), items, WindowStyle::Simple);
        let top = find(&commands, "furniture.4.top");
        let expected = Vec3::new(1.0, 0.725, -2.0);
        assert!((top.transform.translation - expected).length() < 1e-5);
        assert_eq!(top.material.color, item.color);
        let leg = find(&commands, "furniture.4.leg.0");
        assert_eq!(leg.material.color, item.color.shaded(ACCENT_SHADE));
    }

    #[test]
    fn test_build_is_deterministic() {
        let items = [FurnitureItem {
            id: FurnitureId(1),
            kind: FurnitureType::Bookshelf,
            color: Color::WHITE,
            size: SizeClass::Large,
            position: Vec3::new(-2.0, 0.0, 1.0),
        }];
        let a = build(DoorSpec::default(), &items, WindowStyle::Framed);
        let b = build(DoorSpec::default(), &items, WindowStyle::Framed);
        assert_eq!(a, b);
    }
}
