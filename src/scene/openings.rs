//! Door and window composition
//!
//! Local frames: +X along the wall, +Y up, +Z out of the room. The door frame's
//! origin is the hinge at floor level; the window frame's origin is its centre.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{DrawCommand, Material, SceneTransform, Shape};
use crate::room::{door_panel_local_center, Color, DoorSpec, WindowSpec};

pub const DOOR_THICKNESS: f32 = 0.05;
const HANDLE_RADIUS: f32 = 0.03;
const HANDLE_LENGTH: f32 = 0.12;

pub const WINDOW_FRAME: f32 = 0.05;
const WINDOW_FRAME_DEPTH: f32 = 0.08;
const WINDOW_GLASS_OPACITY: f32 = 0.4;
const SILL_OVERHANG: f32 = 0.05;
const SILL_HEIGHT: f32 = 0.04;
const SILL_DEPTH: f32 = 0.15;

/// Level of detail for the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WindowStyle {
    /// A single translucent box
    Simple,
    /// Frame, 2x2 panes and a sill
    #[default]
    Framed,
}

impl WindowStyle {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            WindowStyle::Simple => "Simple",
            WindowStyle::Framed => "Framed with sill",
        }
    }
}

fn command(
    name: impl Into<String>,
    shape: Shape,
    transform: SceneTransform,
    material: Material,
) -> DrawCommand {
    DrawCommand {
        name: name.into(),
        shape,
        transform,
        material,
    }
}

/// Door panel and handles; `hinge` already includes the swing rotation
pub fn door_commands(door: &DoorSpec, hinge: &SceneTransform) -> Vec<DrawCommand> {
    let panel = SceneTransform::from_translation(door_panel_local_center(door));
    let handle_x = door.width * 0.85;
    let handle_y = (door.height * 0.45).min(1.0);
    let handle_z = DOOR_THICKNESS / 2.0 + HANDLE_RADIUS;
    let handle_material = Material::solid(Color::rgb(0xc0, 0xc0, 0xc0));
    let handle = |z: f32| {
        let local = SceneTransform::from_translation(Vec3::new(handle_x, handle_y, z));
        hinge.compose(&local)
    };

    vec![
        command(
            "door.panel",
            Shape::Cuboid {
                width: door.width,
                height: door.height,
                depth: DOOR_THICKNESS,
            },
            hinge.compose(&panel),
            Material::solid(door.color),
        ),
        command(
            "door.handle.outer",
            Shape::Cylinder {
                radius: HANDLE_RADIUS,
                height: HANDLE_LENGTH,
            },
            handle(handle_z),
            handle_material,
        ),
        command(
            "door.handle.inner",
            Shape::Cylinder {
                radius: HANDLE_RADIUS,
                height: HANDLE_LENGTH,
            },
            handle(-handle_z),
            handle_material,
        ),
    ]
}

/// Window primitives at the given centre transform
pub fn window_commands(
    window: &WindowSpec,
    center: &SceneTransform,
    style: WindowStyle,
) -> Vec<DrawCommand> {
    let glass = Material::solid(window.color)
        .with_opacity(WINDOW_GLASS_OPACITY)
        .double_sided();
    let at = |offset: Vec3| center.compose(&SceneTransform::from_translation(offset));

    match style {
        WindowStyle::Simple => vec![command(
            "window.glass",
            Shape::Cuboid {
                width: window.width,
                height: window.height,
                depth: WINDOW_FRAME,
            },
            *center,
            glass,
        )],
        WindowStyle::Framed => {
            let (w, h) = (window.width, window.height);
            let frame_material = Material::solid(Color::WHITE);
            let bar = |width: f32, height: f32| Shape::Cuboid {
                width,
                height,
                depth: WINDOW_FRAME_DEPTH,
            };
            let inner_w = w - 2.0 * WINDOW_FRAME;
            let inner_h = h - 2.0 * WINDOW_FRAME;

            let mut commands = vec![
                command(
                    "window.frame.top",
                    bar(w, WINDOW_FRAME),
                    at(Vec3::new(0.0, (h - WINDOW_FRAME) / 2.0, 0.0)),
                    frame_material,
                ),
                command(
                    "window.frame.bottom",
                    bar(w, WINDOW_FRAME),
                    at(Vec3::new(0.0, -(h - WINDOW_FRAME) / 2.0, 0.0)),
                    frame_material,
                ),
                command(
                    "window.frame.left",
                    bar(WINDOW_FRAME, inner_h),
                    at(Vec3::new(-(w - WINDOW_FRAME) / 2.0, 0.0, 0.0)),
                    frame_material,
                ),
                command(
                    "window.frame.right",
                    bar(WINDOW_FRAME, inner_h),
                    at(Vec3::new((w - WINDOW_FRAME) / 2.0, 0.0, 0.0)),
                    frame_material,
                ),
                command(
                    "window.mullion.vertical",
                    bar(WINDOW_FRAME, inner_h),
                    at(Vec3::ZERO),
                    frame_material,
                ),
                command(
                    "window.mullion.horizontal",
                    bar(inner_w, WINDOW_FRAME),
                    at(Vec3::ZERO),
                    frame_material,
                ),
            ];

            let pane_w = (inner_w - WINDOW_FRAME) / 2.0;
            let pane_h = (inner_h - WINDOW_FRAME) / 2.0;
            let px = (WINDOW_FRAME + pane_w) / 2.0;
            let py = (WINDOW_FRAME + pane_h) / 2.0;
            let quadrants = [(-1.0, 1.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
            for (i, (sx, sy)) in quadrants.into_iter().enumerate() {
                commands.push(command(
                    format!("window.pane.{i}"),
                    Shape::Plane {
                        width: pane_w,
                        height: pane_h,
                    },
                    at(Vec3::new(sx * px, sy * py, 0.0)),
                    glass,
                ));
            }

            commands.push(command(
                "window.sill",
                Shape::Cuboid {
                    width: w + 2.0 * SILL_OVERHANG,
                    height: SILL_HEIGHT,
                    depth: SILL_DEPTH,
                },
                at(Vec3::new(0.0, -(h + SILL_HEIGHT) / 2.0, SILL_DEPTH / 2.0)),
                frame_material,
            ));
            commands
        }
    }
}
