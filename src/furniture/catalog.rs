//! Furniture catalog
//!
//! Fixed table from (type, size) to dimensions. Medium is the reference size;
//! small and large pieces are uniform scalings of it.

use serde::{Deserialize, Serialize};

/// Kind of furniture piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FurnitureType {
    Chair,
    Table,
    Bed,
    Sofa,
    Cabinet,
    Wardrobe,
    Rack,
    Desk,
    Bookshelf,
    Lamp,
}

impl FurnitureType {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FurnitureType::Chair => "Chair",
            FurnitureType::Table => "Table",
            FurnitureType::Bed => "Bed",
            FurnitureType::Sofa => "Sofa",
            FurnitureType::Cabinet => "Cabinet",
            FurnitureType::Wardrobe => "Wardrobe",
            FurnitureType::Rack => "Rack",
            FurnitureType::Desk => "Desk",
            FurnitureType::Bookshelf => "Bookshelf",
            FurnitureType::Lamp => "Lamp",
        }
    }

    /// Get all furniture types for iteration
    pub fn all() -> &'static [FurnitureType] {
        &[
            FurnitureType::Chair,
            FurnitureType::Table,
            FurnitureType::Bed,
            FurnitureType::Sofa,
            FurnitureType::Cabinet,
            FurnitureType::Wardrobe,
            FurnitureType::Rack,
            FurnitureType::Desk,
            FurnitureType::Bookshelf,
            FurnitureType::Lamp,
        ]
    }

    /// Medium-size reference dimensions
    fn reference(&self) -> FurnitureDimensions {
        let (width, depth, height, seat_height) = match self {
            FurnitureType::Chair => (0.5, 0.5, 0.9, Some(0.45)),
            FurnitureType::Table => (1.2, 0.8, 0.75, None),
            FurnitureType::Bed => (1.6, 2.0, 1.0, None),
            FurnitureType::Sofa => (2.0, 0.9, 0.85, Some(0.45)),
            FurnitureType::Cabinet => (0.8, 0.45, 0.9, None),
            FurnitureType::Wardrobe => (1.2, 0.6, 2.0, None),
            FurnitureType::Rack => (1.0, 0.4, 1.8, None),
            FurnitureType::Desk => (1.4, 0.7, 0.75, None),
            FurnitureType::Bookshelf => (0.9, 0.3, 1.8, None),
            FurnitureType::Lamp => (0.4, 0.4, 1.6, None),
        };
        FurnitureDimensions {
            width,
            depth,
            height,
            seat_height,
        }
    }
}

/// Size class chosen when adding a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub fn scale(&self) -> f32 {
        match self {
            SizeClass::Small => 0.75,
            SizeClass::Medium => 1.0,
            SizeClass::Large => 1.25,
        }
    }

    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Small, SizeClass::Medium, SizeClass::Large]
    }
}

/// Bounding dimensions of a piece, in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// Only for pieces you sit on
    pub seat_height: Option<f32>,
}

/// Look up the dimensions for a type and size
pub fn dimensions(kind: FurnitureType, size: SizeClass) -> FurnitureDimensions {
    let reference = kind.reference();
    let s = size.scale();
    FurnitureDimensions {
        width: reference.width * s,
        depth: reference.depth * s,
        height: reference.height * s,
        seat_height: reference.seat_height.map(|h| h * s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_is_reference() {
        let dims = dimensions(FurnitureType::Table, SizeClass::Medium);
        assert_eq!(dims.width, 1.2);
        assert_eq!(dims.depth, 0.8);
        assert_eq!(dims.height, 0.75);
        assert_eq!(dims.seat_height, None);
    }

    #[test]
    fn test_sizes_are_ordered() {
        for &kind in FurnitureType::all() {
            let small = dimensions(kind, SizeClass::Small);
            let medium = dimensions(kind, SizeClass::Medium);
            let large = dimensions(kind, SizeClass::Large);
            assert!(small.width < medium.width && medium.width < large.width);
            assert!(small.height < medium.height && medium.height < large.height);
        }
    }

    #[test]
    fn test_seat_height_only_for_seating() {
        for &kind in FurnitureType::all() {
            let dims = dimensions(kind, SizeClass::Large);
            let seating = matches!(kind, FurnitureType::Chair | FurnitureType::Sofa);
            let name = kind.display_name();
            assert_eq!(dims.seat_height.is_some(), seating, "{}", name);
            if let Some(seat) = dims.seat_height {
                assert!(seat < dims.height);
            }
        }
    }
}
