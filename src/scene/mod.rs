//! Scene module
//!
//! Renderer-agnostic draw list. The builder turns room, openings and furniture
//! into plain (shape, transform, material) records that any immediate- or
//! retained-mode renderer can consume.

pub mod builder;
pub mod openings;

pub use builder::{build_scene, SceneInput};
pub use openings::WindowStyle;

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::CameraRig;
use crate::room::{Color, Placement};

/// Primitive shape, centred on its local origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    /// Flat rectangle in the local XY plane, facing +Z
    Plane { width: f32, height: f32 },
    /// Box with extents along X, Y, Z
    Cuboid { width: f32, height: f32, depth: f32 },
    /// Upright cylinder along Y
    Cylinder { radius: f32, height: f32 },
}

/// Rigid transform (no scale)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl SceneTransform {
    pub const IDENTITY: SceneTransform = SceneTransform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    /// Child transform expressed in this transform's local space
    pub fn compose(&self, child: &SceneTransform) -> SceneTransform {
        SceneTransform {
            translation: self.translation + self.rotation * child.translation,
            rotation: self.rotation * child.rotation,
        }
    }

    /// 4x4 world matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

impl From<Placement> for SceneTransform {
    fn from(placement: Placement) -> Self {
        Self::new(placement.position, placement.rotation())
    }
}

/// Surface appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub double_sided: bool,
}

impl Material {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
            double_sided: false,
        }
    }

    pub fn double_sided(self) -> Self {
        Self {
            double_sided: true,
            ..self
        }
    }

    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }
}

/// One primitive to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    /// Stable dotted path, e.g. `wall.front` or `furniture.3.leg.2`
    pub name: String,
    pub shape: Shape,
    pub transform: SceneTransform,
    pub material: Material,
}

/// Camera data for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    pub eye: Vec3,
    pub look_at: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

impl From<&CameraRig> for CameraFrame {
    fn from(rig: &CameraRig) -> Self {
        Self {
            eye: rig.position,
            look_at: rig.look_at,
            view: rig.view_matrix(),
            projection: rig.projection_matrix(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub camera: CameraFrame,
    pub commands: Vec<DrawCommand>,
}

impl SceneFrame {
    /// Find a command by name
    pub fn command(&self, name: &str) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_compose_applies_parent_rotation() {
        let parent = SceneTransform::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_rotation_y(FRAC_PI_2),
        );
        let child = SceneTransform::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let world = parent.compose(&child);
        let expected = Vec3::new(1.0, 0.0, -1.0);
        assert!((world.translation - expected).length() < 1e-6);
        let origin = world.matrix().transform_point3(Vec3::ZERO);
        assert!((origin - world.translation).length() < 1e-6);
    }

    #[test]
    fn test_shape_serializes_tagged() {
        let shape = Shape::Cylinder {
            radius: 0.5,
            height: 2.0,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"kind":"cylinder","radius":0.5,"height":2.0}"#);
    }

    #[test]
    fn test_material_builders() {
        let m = Material::solid(Color::WHITE)
            .double_sided()
            .with_opacity(0.5);
        assert!(m.double_sided);
        assert_eq!(m.opacity, 0.5);
        assert_eq!(m.color, Color::WHITE);
    }
}
