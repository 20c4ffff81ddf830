//! Galaxy coordinates and the objects placed on them.

use crate::color::Rgb;

/// Point in galaxy-map coordinates (light years).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f32,
    pub y: f32,
}

impl Location {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn distance_to(&self, other: &impl MappedObject) -> f32 {
        crate::util::math::distance(self.x, self.y, other.x(), other.y())
    }
}

/// Anything with a position on the galaxy map.
pub trait MappedObject {
    fn x(&self) -> f32;
    fn y(&self) -> f32;

    fn location(&self) -> Location {
        Location::new(self.x(), self.y())
    }
}

impl MappedObject for Location {
    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }
}

/// Star system identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SystemId(pub u32);

impl std::fmt::Display for SystemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "system#{}", self.0)
    }
}

/// The player's knowledge of one star system, as drawn on the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarSystemView {
    pub id: SystemId,
    /// Name as known to the player.
    pub name: String,
    pub location: Location,
    /// Color of the owning empire, as known to the player.
    pub empire_color: Rgb,
}

impl StarSystemView {
    pub fn new(id: SystemId, name: impl Into<String>, location: Location, empire_color: Rgb) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            empire_color,
        }
    }
}

impl MappedObject for StarSystemView {
    fn x(&self) -> f32 {
        self.location.x
    }

    fn y(&self) -> f32 {
        self.location.y
    }
}
