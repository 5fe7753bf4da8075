//! Primitive composition for each furniture type
//!
//! Parts are expressed in item-local space with the origin at the floor centre
//! of the footprint; +Z is the front of the piece.

use glam::Vec3;

use super::catalog::{FurnitureDimensions, FurnitureType};
use crate::scene::Shape;

/// Which material a part takes from its item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartTint {
    /// The item's chosen color
    Body,
    /// A darker shade of the item color (legs, handles, frames)
    Accent,
}

/// One primitive of a furniture piece
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub shape: Shape,
    /// Centre of the primitive in item-local space
    pub offset: Vec3,
    pub tint: PartTint,
}

impl Part {
    fn cuboid(name: impl Into<String>, size: Vec3, offset: Vec3, tint: PartTint) -> Self {
        Self {
            name: name.into(),
            shape: Shape::Cuboid {
                width: size.x,
                height: size.y,
                depth: size.z,
            },
            offset,
            tint,
        }
    }

    fn cylinder(
        name: impl Into<String>,
        radius: f32,
        height: f32,
        offset: Vec3,
        tint: PartTint,
    ) -> Self {
        Self {
            name: name.into(),
            shape: Shape::Cylinder { radius, height },
            offset,
            tint,
        }
    }
}

const PANEL: f32 = 0.05;
const LEG_RADIUS: f32 = 0.02;

/// Build the primitive list for a piece of the given type and size
pub fn parts(kind: FurnitureType, dims: &FurnitureDimensions) -> Vec<Part> {
    let FurnitureDimensions {
        width: w,
        depth: d,
        height: h,
        seat_height,
    } = *dims;

    match kind {
        FurnitureType::Chair => {
            let seat = seat_height.unwrap_or(h / 2.0);
            let mut parts = vec![
                Part::cuboid(
                    "seat",
                    Vec3::new(w, PANEL, d),
                    Vec3::new(0.0, seat - PANEL / 2.0, 0.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "back",
                    Vec3::new(w, h - seat, PANEL),
                    Vec3::new(0.0, seat + (h - seat) / 2.0, -d / 2.0 + PANEL / 2.0),
                    PartTint::Body,
                ),
            ];
            parts.extend(legs(w, d, seat - PANEL));
            parts
        }
        FurnitureType::Table => {
            let mut parts = vec![Part::cuboid(
                "top",
                Vec3::new(w, PANEL, d),
                Vec3::new(0.0, h - PANEL / 2.0, 0.0),
                PartTint::Body,
            )];
            parts.extend(legs(w, d, h - PANEL));
            parts
        }
        FurnitureType::Desk => {
            let side_height = h - PANEL;
            vec![
                Part::cuboid(
                    "top",
                    Vec3::new(w, PANEL, d),
                    Vec3::new(0.0, h - PANEL / 2.0, 0.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "side.0",
                    Vec3::new(PANEL, side_height, d),
                    Vec3::new(-w / 2.0 + PANEL / 2.0, side_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
                Part::cuboid(
                    "side.1",
                    Vec3::new(PANEL, side_height, d),
                    Vec3::new(w / 2.0 - PANEL / 2.0, side_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
            ]
        }
        FurnitureType::Bed => {
            let frame = h * 0.3;
            let mattress = h * 0.2;
            let headboard = 0.08;
            vec![
                Part::cuboid(
                    "frame",
                    Vec3::new(w, frame, d),
                    Vec3::new(0.0, frame / 2.0, 0.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "mattress",
                    Vec3::new(w - PANEL, mattress, d - headboard),
                    Vec3::new(0.0, frame + mattress / 2.0, headboard / 2.0),
                    PartTint::Accent,
                ),
                Part::cuboid(
                    "headboard",
                    Vec3::new(w, h, headboard),
                    Vec3::new(0.0, h / 2.0, -d / 2.0 + headboard / 2.0),
                    PartTint::Body,
                ),
            ]
        }
        FurnitureType::Sofa => {
            let seat = seat_height.unwrap_or(h / 2.0);
            let back_depth = d * 0.25;
            let arm_width = w * 0.08;
            let arm_height = (h - seat) * 0.5;
            vec![
                Part::cuboid(
                    "base",
                    Vec3::new(w, seat, d),
                    Vec3::new(0.0, seat / 2.0, 0.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "back",
                    Vec3::new(w, h - seat, back_depth),
                    Vec3::new(0.0, seat + (h - seat) / 2.0, -d / 2.0 + back_depth / 2.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "arm.0",
                    Vec3::new(arm_width, arm_height, d),
                    Vec3::new(-w / 2.0 + arm_width / 2.0, seat + arm_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
                Part::cuboid(
                    "arm.1",
                    Vec3::new(arm_width, arm_height, d),
                    Vec3::new(w / 2.0 - arm_width / 2.0, seat + arm_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
            ]
        }
        FurnitureType::Cabinet | FurnitureType::Wardrobe => cabinet(w, d, h),
        FurnitureType::Rack => {
            let upright = 0.04;
            let shelf = 0.03;
            let mut parts = vec![
                Part::cuboid(
                    "upright.0",
                    Vec3::new(upright, h, d),
                    Vec3::new(-w / 2.0 + upright / 2.0, h / 2.0, 0.0),
                    PartTint::Accent,
                ),
                Part::cuboid(
                    "upright.1",
                    Vec3::new(upright, h, d),
                    Vec3::new(w / 2.0 - upright / 2.0, h / 2.0, 0.0),
                    PartTint::Accent,
                ),
            ];
            parts.extend(shelves(4, w - 2.0 * upright, d, h, shelf, 0.0));
            parts
        }
        FurnitureType::Bookshelf => {
            let board = 0.02;
            let mut parts = vec![
                Part::cuboid(
                    "back",
                    Vec3::new(w, h, board),
                    Vec3::new(0.0, h / 2.0, -d / 2.0 + board / 2.0),
                    PartTint::Accent,
                ),
                Part::cuboid(
                    "side.0",
                    Vec3::new(board, h, d - board),
                    Vec3::new(-w / 2.0 + board / 2.0, h / 2.0, board / 2.0),
                    PartTint::Body,
                ),
                Part::cuboid(
                    "side.1",
                    Vec3::new(board, h, d - board),
                    Vec3::new(w / 2.0 - board / 2.0, h / 2.0, board / 2.0),
                    PartTint::Body,
                ),
            ];
            let inner = w - 2.0 * board;
            parts.extend(shelves(5, inner, d - board, h, board, board / 2.0));
            parts
        }
        FurnitureType::Lamp => {
            let base_height = 0.04;
            let shade_height = h * 0.2;
            let pole_height = h - base_height - shade_height;
            vec![
                Part::cylinder(
                    "base",
                    w * 0.4,
                    base_height,
                    Vec3::new(0.0, base_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
                Part::cylinder(
                    "pole",
                    0.015,
                    pole_height,
                    Vec3::new(0.0, base_height + pole_height / 2.0, 0.0),
                    PartTint::Accent,
                ),
                Part::cylinder(
                    "shade",
                    w / 2.0,
                    shade_height,
                    Vec3::new(0.0, h - shade_height / 2.0, 0.0),
                    PartTint::Body,
                ),
            ]
        }
    }
}

/// Four round legs inset at the footprint corners
fn legs(w: f32, d: f32, height: f32) -> Vec<Part> {
    let x = w / 2.0 - LEG_RADIUS;
    let z = d / 2.0 - LEG_RADIUS;
    [(-x, -z), (x, -z), (x, z), (-x, z)]
        .iter()
        .enumerate()
        .map(|(i, &(lx, lz))| {
            Part::cylinder(
                format!("leg.{i}"),
                LEG_RADIUS,
                height,
                Vec3::new(lx, height / 2.0, lz),
                PartTint::Accent,
            )
        })
        .collect()
}

/// `count` evenly spaced shelf boards from floor to top
fn shelves(count: usize, width: f32, depth: f32, h: f32, thickness: f32, z: f32) -> Vec<Part> {
    let spacing = (h - thickness) / (count - 1) as f32;
    (0..count)
        .map(|i| {
            Part::cuboid(
                format!("shelf.{i}"),
                Vec3::new(width, thickness, depth),
                Vec3::new(0.0, i as f32 * spacing + thickness / 2.0, z),
                PartTint::Body,
            )
        })
        .collect()
}

/// Carcass with two doors and handles, all flush within the footprint
fn cabinet(w: f32, d: f32, h: f32) -> Vec<Part> {
    let door_depth = 0.02;
    let body_depth = d - 3.0 * door_depth;
    let door_z = d / 2.0 - 2.5 * door_depth;
    let handle_radius = 0.01;
    let handle_z = d / 2.0 - handle_radius;

    let mut parts = vec![Part::cuboid(
        "body",
        Vec3::new(w, h, body_depth),
        Vec3::new(0.0, h / 2.0, -d / 2.0 + body_depth / 2.0),
        PartTint::Body,
    )];
    for (i, side) in [-1.0f32, 1.0].iter().enumerate() {
        parts.push(Part::cuboid(
            format!("door.{i}"),
            Vec3::new(w / 2.0 - 0.01, h - 0.04, door_depth),
            Vec3::new(side * w / 4.0, h / 2.0, door_z),
            PartTint::Body,
        ));
        parts.push(Part::cylinder(
            format!("handle.{i}"),
            handle_radius,
            0.12,
            Vec3::new(side * 0.04, h * 0.6, handle_z),
            PartTint::Accent,
        ));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furniture::catalog::{dimensions, SizeClass};

    fn half_extents(shape: &Shape) -> Vec3 {
        match *shape {
            Shape::Cuboid {
                width,
                height,
                depth,
            } => Vec3::new(width, height, depth) / 2.0,
            Shape::Cylinder { radius, height } => Vec3::new(radius, height / 2.0, radius),
            Shape::Plane { width, height } => Vec3::new(width / 2.0, height / 2.0, 0.0),
        }
    }

    #[test]
    fn test_parts_stay_inside_footprint() {
        for &kind in FurnitureType::all() {
            for &size in SizeClass::all() {
                let dims = dimensions(kind, size);
                for part in parts(kind, &dims) {
                    let half = half_extents(&part.shape);
                    let min = part.offset - half;
                    let max = part.offset + half;
                    let tol = 1e-4;
                    let label = format!("{} {:?} {}", kind.display_name(), size, part.name);
                    assert!(
                        min.x >= -dims.width / 2.0 - tol && max.x <= dims.width / 2.0 + tol,
                        "{label} x"
                    );
                    assert!(
                        min.z >= -dims.depth / 2.0 - tol && max.z <= dims.depth / 2.0 + tol,
                        "{label} z"
                    );
                    assert!(min.y >= -tol && max.y <= dims.height + tol, "{label} y");
                }
            }
        }
    }

    #[test]
    fn test_part_counts() {
        let count = |kind| parts(kind, &dimensions(kind, SizeClass::Medium)).len();
        assert_eq!(count(FurnitureType::Chair), 6);
        assert_eq!(count(FurnitureType::Table), 5);
        assert_eq!(count(FurnitureType::Cabinet), 5);
        assert_eq!(count(FurnitureType::Rack), 6);
        assert_eq!(count(FurnitureType::Bookshelf), 8);
        assert_eq!(count(FurnitureType::Lamp), 3);
    }

    #[test]
    fn test_part_names_unique_per_piece() {
        for &kind in FurnitureType::all() {
            let parts = parts(kind, &dimensions(kind, SizeClass::Small));
            let mut names: Vec<_> = parts.iter().map(|p| p.name.clone()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), parts.len(), "{}", kind.display_name());
        }
    }
}
