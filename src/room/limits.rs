//! Legal ranges for room and opening parameters
//!
//! Out-of-range input is rejected with a descriptive [`ValidationError`], never
//! silently clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{DoorSpec, Room, WallSelector, WindowSpec};
use crate::error::ValidationError;

pub const DOOR_MIN_WIDTH: f32 = 0.6;
pub const DOOR_MAX_WIDTH: f32 = 2.0;
pub const DOOR_MIN_HEIGHT: f32 = 1.8;
/// Door may use at most this share of the room height
pub const DOOR_MAX_HEIGHT_RATIO: f32 = 0.9;

pub const WINDOW_MIN_WIDTH: f32 = 0.4;
pub const WINDOW_MAX_WIDTH: f32 = 3.0;
pub const WINDOW_MIN_HEIGHT: f32 = 0.4;
/// Minimum gap between a window and the floor, and between a window and the ceiling
pub const WINDOW_MARGIN: f32 = 0.3;

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric range `[-half, half]`
    pub fn symmetric(half: f32) -> Self {
        Self::new(-half, half)
    }

    pub fn contains(&self, value: f32) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// An empty range has no legal value at all
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Legal horizontal offset for an opening of `width` on `wall`
fn offset_bounds(room: &Room, wall: WallSelector, width: f32) -> Bounds {
    Bounds::symmetric(room.wall_extent(wall) / 2.0 - width / 2.0)
}

/// `±(extent/2 - width/2)` on the door's wall
pub fn door_offset_bounds(door: &DoorSpec, room: &Room) -> Bounds {
    offset_bounds(room, door.wall, door.width)
}

/// Door width range, narrowed to the wall when the wall is shorter than the maximum
pub fn door_width_bounds(door: &DoorSpec, room: &Room) -> Bounds {
    let max = DOOR_MAX_WIDTH.min(room.wall_extent(door.wall));
    Bounds::new(DOOR_MIN_WIDTH, max)
}

/// `[1.8, 0.9 * room.height]`
pub fn door_height_bounds(room: &Room) -> Bounds {
    Bounds::new(DOOR_MIN_HEIGHT, room.height * DOOR_MAX_HEIGHT_RATIO)
}

pub fn window_offset_bounds(window: &WindowSpec, room: &Room) -> Bounds {
    offset_bounds(room, window.wall, window.width)
}

pub fn window_width_bounds(window: &WindowSpec, room: &Room) -> Bounds {
    Bounds::new(
        WINDOW_MIN_WIDTH,
        WINDOW_MAX_WIDTH.min(room.wall_extent(window.wall)),
    )
}

pub fn window_height_bounds(room: &Room) -> Bounds {
    Bounds::new(WINDOW_MIN_HEIGHT, room.height - 2.0 * WINDOW_MARGIN)
}

/// `[0.3, room.height − window.height − 0.3]`
pub fn window_height_from_floor_bounds(window: &WindowSpec, room: &Room) -> Bounds {
    Bounds::new(WINDOW_MARGIN, room.height - window.height - WINDOW_MARGIN)
}

pub fn validate_room(room: &Room) -> Result<(), ValidationError> {
    for (dimension, value) in [
        ("width", room.width),
        ("length", room.length),
        ("height", room.height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::RoomDimension { dimension, value });
        }
    }
    Ok(())
}

pub fn validate_door(door: &DoorSpec, room: &Room) -> Result<(), ValidationError> {
    let height = door_height_bounds(room);
    if height.is_empty() {
        return Err(ValidationError::RoomTooLowForDoor {
            room_height: room.height,
            required: DOOR_MIN_HEIGHT / DOOR_MAX_HEIGHT_RATIO,
        });
    }

    let width = door_width_bounds(door, room);
    if !width.contains(door.width) {
        return Err(ValidationError::DoorWidth {
            value: door.width,
            bounds: width,
        });
    }
    if !height.contains(door.height) {
        return Err(ValidationError::DoorHeight {
            value: door.height,
            bounds: height,
        });
    }

    let offset = door_offset_bounds(door, room);
    if !offset.contains(door.horizontal_offset) {
        return Err(ValidationError::DoorOffset {
            value: door.horizontal_offset,
            wall: door.wall,
            bounds: offset,
        });
    }
    Ok(())
}

pub fn validate_window(window: &WindowSpec, room: &Room) -> Result<(), ValidationError> {
    let width = window_width_bounds(window, room);
    if !width.contains(window.width) {
        return Err(ValidationError::WindowWidth {
            value: window.width,
            bounds: width,
        });
    }

    let height = window_height_bounds(room);
    if !height.contains(window.height) {
        return Err(ValidationError::WindowHeight {
            value: window.height,
            bounds: height,
        });
    }

    let from_floor = window_height_from_floor_bounds(window, room);
    if !from_floor.contains(window.height_from_floor) {
        return Err(ValidationError::WindowHeightFromFloor {
            value: window.height_from_floor,
            bounds: from_floor,
        });
    }

    let offset = window_offset_bounds(window, room);
    if !offset.contains(window.horizontal_offset) {
        return Err(ValidationError::WindowOffset {
            value: window.horizontal_offset,
            wall: window.wall,
            bounds: offset,
        });
    }
    Ok(())
}

/// Door and window may share a wall only if their rectangles are disjoint
pub fn validate_openings(door: &DoorSpec, window: &WindowSpec) -> Result<(), ValidationError> {
    if door.wall != window.wall {
        return Ok(());
    }

    let spans_overlap = |a_center: f32, a_half: f32, b_center: f32, b_half: f32| {
        (a_center - b_center).abs() < a_half + b_half
    };
    let horizontal = spans_overlap(
        door.horizontal_offset,
        door.width / 2.0,
        window.horizontal_offset,
        window.width / 2.0,
    );
    // Door spans [0, door.height]
    let vertical = window.height_from_floor < door.height;

    if horizontal && vertical {
        return Err(ValidationError::OpeningsOverlap { wall: door.wall });
    }
    Ok(())
}

/// Validate the full room shell as one unit
pub fn validate_shell(
    room: &Room,
    door: &DoorSpec,
    window: &WindowSpec,
) -> Result<(), ValidationError> {
    validate_room(room)?;
    validate_door(door, room)?;
    validate_window(window, room)?;
    validate_openings(door, window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(8.0, 8.0, 4.0)
    }

    #[test]
    fn test_door_offset_bounds_front_back_use_width() {
        let room = Room::new(10.0, 6.0, 3.0);
        for wall in [WallSelector::Front, WallSelector::Back] {
            let door = DoorSpec {
                width: 1.0,
                wall,
                ..Default::default()
            };
            let bounds = door_offset_bounds(&door, &room);
            assert_eq!(bounds, Bounds::new(-4.5, 4.5));
        }
    }

    #[test]
    fn test_door_offset_bounds_left_right_use_length() {
        let room = Room::new(10.0, 6.0, 3.0);
        for wall in [WallSelector::Left, WallSelector::Right] {
            let door = DoorSpec {
                width: 1.2,
                wall,
                ..Default::default()
            };
            let bounds = door_offset_bounds(&door, &room);
            assert!((bounds.max - 2.4).abs() < 1e-6);
            assert!((bounds.min + 2.4).abs() < 1e-6);
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let room = Room::default();
        let door = DoorSpec::default();
        assert!(validate_shell(&room, &door, &WindowSpec::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_room() {
        let err = validate_room(&Room::new(0.0, 8.0, 4.0)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RoomDimension {
                dimension: "width",
                ..
            }
        ));
        assert!(validate_room(&Room::new(8.0, -1.0, 4.0)).is_err());
        assert!(validate_room(&Room::new(8.0, 8.0, f32::NAN)).is_err());
    }

    #[test]
    fn test_door_out_of_range_is_rejected_not_clamped() {
        let door = DoorSpec {
            horizontal_offset: 3.6,
            ..Default::default()
        };
        let err = validate_door(&door, &room()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DoorOffset {
                wall: WallSelector::Front,
                ..
            }
        ));

        let door = DoorSpec {
            width: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            validate_door(&door, &room()),
            Err(ValidationError::DoorWidth { .. })
        ));

        let door = DoorSpec {
            height: 3.7,
            ..Default::default()
        };
        assert!(matches!(
            validate_door(&door, &room()),
            Err(ValidationError::DoorHeight { .. })
        ));
    }

    #[test]
    fn test_low_room_cannot_host_door() {
        let low = Room::new(8.0, 8.0, 1.9);
        assert!(matches!(
            validate_door(&DoorSpec::default(), &low),
            Err(ValidationError::RoomTooLowForDoor { .. })
        ));
    }

    #[test]
    fn test_window_height_from_floor_bounds() {
        let window = WindowSpec {
            height: 1.2,
            ..Default::default()
        };
        let bounds = window_height_from_floor_bounds(&window, &room());
        assert!((bounds.min - 0.3).abs() < 1e-6);
        assert!((bounds.max - 2.5).abs() < 1e-6);

        let window = WindowSpec {
            height_from_floor: 2.6,
            ..window
        };
        assert!(matches!(
            validate_window(&window, &room()),
            Err(ValidationError::WindowHeightFromFloor { .. })
        ));
    }

    #[test]
    fn test_window_width_bounds() {
        let narrow = WindowSpec {
            width: 0.3,
            ..Default::default()
        };
        assert!(matches!(
            validate_window(&narrow, &room()),
            Err(ValidationError::WindowWidth { .. })
        ));

        let wide = WindowSpec {
            width: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            validate_window(&wide, &room()),
            Err(ValidationError::WindowWidth { .. })
        ));

        // A short wall narrows the maximum below 3.0
        let short = Room::new(8.0, 2.5, 4.0);
        let window = WindowSpec {
            width: 2.8,
            wall: WallSelector::Left,
            ..Default::default()
        };
        assert_eq!(window_width_bounds(&window, &short), Bounds::new(0.4, 2.5));
        assert!(matches!(
            validate_window(&window, &short),
            Err(ValidationError::WindowWidth { .. })
        ));
    }

    #[test]
    fn test_window_height_bounds() {
        let bounds = window_height_bounds(&room());
        assert!((bounds.min - 0.4).abs() < 1e-6);
        assert!((bounds.max - 3.4).abs() < 1e-6);

        for height in [0.3, 3.5] {
            let window = WindowSpec {
                height,
                height_from_floor: 0.3,
                ..Default::default()
            };
            assert!(matches!(
                validate_window(&window, &room()),
                Err(ValidationError::WindowHeight { .. })
            ));
        }
    }

    #[test]
    fn test_window_offset_on_left_wall_uses_length() {
        let room = Room::new(10.0, 6.0, 3.0);
        let window = WindowSpec {
            width: 1.0,
            wall: WallSelector::Left,
            ..Default::default()
        };
        assert_eq!(window_offset_bounds(&window, &room), Bounds::new(-2.5, 2.5));

        let at_edge = WindowSpec {
            horizontal_offset: 2.5,
            ..window
        };
        assert!(validate_window(&at_edge, &room).is_ok());

        let past_edge = WindowSpec {
            horizontal_offset: 2.6,
            ..window
        };
        assert!(matches!(
            validate_window(&past_edge, &room),
            Err(ValidationError::WindowOffset {
                wall: WallSelector::Left,
                ..
            })
        ));

        // The same offset fits on the 10 m front wall
        let front = WindowSpec {
            wall: WallSelector::Front,
            ..past_edge
        };
        assert!(validate_window(&front, &room).is_ok());
    }

    #[test]
    fn test_door_width_narrowed_by_short_wall() {
        let room = Room::new(8.0, 1.5, 3.0);
        let door = DoorSpec {
            width: 1.8,
            wall: WallSelector::Left,
            ..Default::default()
        };
        assert_eq!(door_width_bounds(&door, &room), Bounds::new(0.6, 1.5));
        assert!(matches!(
            validate_door(&door, &room),
            Err(ValidationError::DoorWidth { value, .. }) if value == 1.8
        ));

        // The same door fits the 8 m front wall
        let front = DoorSpec {
            wall: WallSelector::Front,
            ..door
        };
        assert!(validate_door(&front, &room).is_ok());
    }

    #[test]
    fn test_openings_overlap_on_same_wall() {
        let door = DoorSpec::default();
        let window = WindowSpec {
            wall: WallSelector::Front,
            horizontal_offset: 0.5,
            height_from_floor: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            validate_openings(&door, &window),
            Err(ValidationError::OpeningsOverlap {
                wall: WallSelector::Front,
            })
        ));

        // Same wall, side by side
        let window = WindowSpec {
            horizontal_offset: 2.5,
            ..window
        };
        assert!(validate_openings(&door, &window).is_ok());

        // Different walls never conflict
        let window = WindowSpec {
            wall: WallSelector::Left,
            horizontal_offset: 0.0,
            ..window
        };
        assert!(validate_openings(&door, &window).is_ok());
    }

    #[test]
    fn test_bounds_display() {
        let bounds = Bounds::new(-1.5, 1.5);
        assert_eq!(bounds.to_string(), "[-1.5, 1.5]");
        assert!(!bounds.contains(1.6));
        assert!(!bounds.contains(f32::INFINITY));
        assert!(Bounds::new(1.0, 0.0).is_empty());
    }
}
