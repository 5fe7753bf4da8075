//! Room shell types
//!
//! Plain parameter records for the room box and its two openings. Dimensions are
//! in metres; offsets are measured from the wall centre along the world axis the
//! wall spans.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Which of the four walls hosts an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WallSelector {
    /// Wall at +Z
    #[default]
    Front,
    /// Wall at -Z
    Back,
    /// Wall at -X
    Left,
    /// Wall at +X
    Right,
}

impl WallSelector {
    /// All walls in draw order
    pub fn all() -> &'static [WallSelector] {
        &[
            WallSelector::Front,
            WallSelector::Back,
            WallSelector::Left,
            WallSelector::Right,
        ]
    }

    /// Lowercase name used in draw command paths and messages
    pub fn name(&self) -> &'static str {
        match self {
            WallSelector::Front => "front",
            WallSelector::Back => "back",
            WallSelector::Left => "left",
            WallSelector::Right => "right",
        }
    }

    /// Whether the wall spans the X axis (front/back) rather than Z
    pub fn spans_x(&self) -> bool {
        matches!(self, WallSelector::Front | WallSelector::Back)
    }

    /// Yaw in degrees that turns local +Z into the outward normal
    pub fn yaw_degrees(&self) -> f32 {
        match self {
            WallSelector::Front => 0.0,
            WallSelector::Back => 180.0,
            WallSelector::Left => 90.0,
            WallSelector::Right => -90.0,
        }
    }

    /// Outward unit normal
    pub fn normal(&self) -> Vec3 {
        match self {
            WallSelector::Front => Vec3::Z,
            WallSelector::Back => Vec3::NEG_Z,
            WallSelector::Left => Vec3::NEG_X,
            WallSelector::Right => Vec3::X,
        }
    }

    /// Direction of local +X along the wall
    pub fn tangent(&self) -> Vec3 {
        match self {
            WallSelector::Front => Vec3::X,
            WallSelector::Back => Vec3::NEG_X,
            WallSelector::Left => Vec3::Z,
            WallSelector::Right => Vec3::NEG_Z,
        }
    }

    /// Sign of the tangent on the axis the wall spans
    pub fn tangent_sign(&self) -> f32 {
        match self {
            WallSelector::Front | WallSelector::Left => 1.0,
            WallSelector::Back | WallSelector::Right => -1.0,
        }
    }
}

impl fmt::Display for WallSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// sRGB fill color, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::Color(text.to_string());
        let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Multiply each channel by `factor` (0-1 darkens)
    pub fn shaded(&self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The rectangular room box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub length: f32,
    /// Floor to ceiling
    pub height: f32,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: 8.0,
            length: 8.0,
            height: 4.0,
        }
    }
}

impl Room {
    pub fn new(width: f32, length: f32, height: f32) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    /// Horizontal extent of the given wall
    pub fn wall_extent(&self, wall: WallSelector) -> f32 {
        if wall.spans_x() {
            self.width
        } else {
            self.length
        }
    }

    /// Distance from the room centre to the wall plane
    pub fn wall_distance(&self, wall: WallSelector) -> f32 {
        if wall.spans_x() {
            self.length / 2.0
        } else {
            self.width / 2.0
        }
    }

    /// Centre of the room volume
    pub fn center(&self) -> Vec3 {
        Vec3::new(0.0, self.height / 2.0, 0.0)
    }
}

/// A hinged door in one of the walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorSpec {
    pub width: f32,
    pub height: f32,
    pub horizontal_offset: f32,
    pub wall: WallSelector,
    pub color: Color,
}

impl Default for DoorSpec {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 2.2,
            horizontal_offset: 0.0,
            wall: WallSelector::Front,
            color: Color::rgb(0x8b, 0x45, 0x13),
        }
    }
}

/// A window in one of the walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    pub width: f32,
    pub height: f32,
    pub height_from_floor: f32,
    pub horizontal_offset: f32,
    pub wall: WallSelector,
    pub color: Color,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            width: 1.5,
            height: 1.2,
            height_from_floor: 1.0,
            horizontal_offset: 0.0,
            wall: WallSelector::Back,
            color: Color::rgb(0x87, 0xce, 0xeb),
        }
    }
}

/// Fill colors for the six interior surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finishes {
    pub front: Color,
    pub back: Color,
    pub left: Color,
    pub right: Color,
    pub ceiling: Color,
    pub floor: Color,
}

impl Default for Finishes {
    fn default() -> Self {
        let wall = Color::rgb(0xf5, 0xf5, 0xdc);
        Self {
            front: wall,
            back: wall,
            left: wall,
            right: wall,
            ceiling: Color::WHITE,
            floor: Color::rgb(0xa0, 0x82, 0x6d),
        }
    }
}

impl Finishes {
    pub fn wall(&self, wall: WallSelector) -> Color {
        match wall {
            WallSelector::Front => self.front,
            WallSelector::Back => self.back,
            WallSelector::Left => self.left,
            WallSelector::Right => self.right,
        }
    }

    pub fn set_wall(&mut self, wall: WallSelector, color: Color) {
        match wall {
            WallSelector::Front => self.front = color,
            WallSelector::Back => self.back = color,
            WallSelector::Left => self.left = color,
            WallSelector::Right => self.right = color,
        }
    }
}

/// Surface addressed by a color change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Wall(WallSelector),
    Ceiling,
    Floor,
}
