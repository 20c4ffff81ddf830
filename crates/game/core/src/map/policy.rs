//! Presentation policy for the galaxy map.
//!
//! Every knob is plain data with a stated default, so a screen that wants
//! different behavior supplies a different [`MapPolicy`] instead of
//! overriding methods.

use bitflags::bitflags;

use super::{StarSystemView, SystemId};
use crate::color::Rgb;

/// Which fleet flight paths are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FleetDisplay {
    AllFlightPaths,
    #[default]
    ImportantFlightPaths,
    NoFlightPaths,
}

/// How ship ranges are overlaid on the star field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ShipRangesDisplay {
    #[default]
    StarsAndRanges,
    StarsOnly,
    NoStars,
}

bitflags! {
    /// Map objects that react to the pointer hovering over them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct HoverTargets: u8 {
        const FLEETS = 0b0000_0001;
        const SYSTEMS = 0b0000_0010;
        const FLIGHT_PATHS = 0b0000_0100;
    }
}

impl Default for HoverTargets {
    fn default() -> Self {
        Self::all()
    }
}

bitflags! {
    /// Per-system overlays drawn on top of the star.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SystemOverlays: u8 {
        const DRAW_BANNER = 0b0000_0001;
        const DRAW_STAR = 0b0000_0010;
        const SHOW_OWNER_REACH = 0b0000_0100;
        const SHOW_OWNERSHIP = 0b0000_1000;
        const DRAW_SHIELD = 0b0001_0000;
    }
}

impl Default for SystemOverlays {
    fn default() -> Self {
        Self::DRAW_STAR | Self::SHOW_OWNERSHIP
    }
}

/// Replacement label parts for one system; unset parts keep the default.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelOverride {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub color: Option<Rgb>,
}

/// Resolved label for a star system.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemLabel {
    pub primary: String,
    pub secondary: String,
    pub color: Rgb,
}

/// Overrides applied to a single system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemPolicy {
    pub id: SystemId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlays: Option<SystemOverlays>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owner_reach: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<LabelOverride>,
}

impl SystemPolicy {
    pub const fn new(id: SystemId) -> Self {
        Self {
            id,
            overlays: None,
            owner_reach: None,
            label: None,
        }
    }
}

/// Presentation knobs consumed by the map renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapPolicy {
    pub fleet_display: FleetDisplay,
    pub ship_ranges_display: ShipRangesDisplay,
    pub grid_circular_display: bool,
    /// Hit-test radius around a star, in map units.
    pub system_click_radius: f32,
    pub show_year: bool,
    pub can_change_map_scales: bool,
    pub display_next_turn_notice: bool,
    pub animating: bool,
    pub forward_mouse_events: bool,
    pub allows_drag_select: bool,
    /// Initial zoom as a fraction of the full galaxy.
    pub starting_scale_pct: f32,
    pub hover: HoverTargets,
    /// Overlays for systems without an override.
    pub system_overlays: SystemOverlays,
    #[cfg_attr(feature = "serde", serde(rename = "system"))]
    pub systems: Vec<SystemPolicy>,
}

impl Default for MapPolicy {
    fn default() -> Self {
        Self {
            fleet_display: FleetDisplay::default(),
            ship_ranges_display: ShipRangesDisplay::default(),
            grid_circular_display: false,
            system_click_radius: Self::DEFAULT_CLICK_RADIUS,
            show_year: true,
            can_change_map_scales: true,
            display_next_turn_notice: false,
            animating: true,
            forward_mouse_events: false,
            allows_drag_select: false,
            starting_scale_pct: 1.0,
            hover: HoverTargets::default(),
            system_overlays: SystemOverlays::default(),
            systems: Vec::new(),
        }
    }
}

impl MapPolicy {
    pub const DEFAULT_CLICK_RADIUS: f32 = 0.5;

    /// Adds or replaces the override for `policy.id`.
    pub fn with_system(mut self, policy: SystemPolicy) -> Self {
        self.systems.retain(|existing| existing.id != policy.id);
        self.systems.push(policy);
        self
    }

    fn system(&self, id: SystemId) -> Option<&SystemPolicy> {
        self.systems.iter().find(|policy| policy.id == id)
    }

    pub fn overlays_for(&self, id: SystemId) -> SystemOverlays {
        self.system(id)
            .and_then(|policy| policy.overlays)
            .unwrap_or(self.system_overlays)
    }

    pub fn draw_banner(&self, id: SystemId) -> bool {
        self.overlays_for(id).contains(SystemOverlays::DRAW_BANNER)
    }

    pub fn draw_star(&self, id: SystemId) -> bool {
        self.overlays_for(id).contains(SystemOverlays::DRAW_STAR)
    }

    pub fn show_owner_reach(&self, id: SystemId) -> bool {
        self.overlays_for(id).contains(SystemOverlays::SHOW_OWNER_REACH)
    }

    pub fn show_ownership(&self, id: SystemId) -> bool {
        self.overlays_for(id).contains(SystemOverlays::SHOW_OWNERSHIP)
    }

    pub fn draw_shield(&self, id: SystemId) -> bool {
        self.overlays_for(id).contains(SystemOverlays::DRAW_SHIELD)
    }

    /// Radius of the owner-reach circle; zero unless overridden.
    pub fn owner_reach(&self, id: SystemId) -> f32 {
        self.system(id)
            .and_then(|policy| policy.owner_reach)
            .unwrap_or(0.0)
    }

    pub fn hovers(&self, target: HoverTargets) -> bool {
        self.hover.contains(target)
    }

    /// Label for `view`: the player's name for the system in its empire's
    /// color, with no secondary line, unless overridden.
    pub fn label_for(&self, view: &StarSystemView) -> SystemLabel {
        let custom = self.system(view.id).and_then(|policy| policy.label.as_ref());
        SystemLabel {
            primary: custom
                .and_then(|label| label.primary.clone())
                .unwrap_or_else(|| view.name.clone()),
            secondary: custom
                .and_then(|label| label.secondary.clone())
                .unwrap_or_default(),
            color: custom
                .and_then(|label| label.color)
                .unwrap_or(view.empire_color),
        }
    }
}
