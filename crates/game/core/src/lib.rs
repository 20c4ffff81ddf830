//! Deterministic turn-notification model and presentation contracts.
//!
//! `game-core` defines the closed set of end-of-turn notification categories,
//! the ordering queue that linearizes them, and the galaxy-map contract that
//! delivery handlers may touch. Cross-cutting helpers (formatting, math,
//! randomization, parsing) live in narrow [`util`] modules and are consumed
//! explicitly rather than inherited.
pub mod color;
pub mod config;
pub mod error;
pub mod map;
pub mod notification;
pub mod util;

pub use color::Rgb;
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use map::{
    FleetDisplay, GalaxyMap, HoverTargets, LabelOverride, Location, MapFocus, MapPolicy,
    MapSelection, MappedObject, ShipRangesDisplay, StarSystemView, SystemId, SystemLabel,
    SystemOverlays, SystemPolicy,
};
pub use notification::{Notification, NotificationKind, NotificationQueue, TurnNotification};
pub use util::parse::ParseError;
pub use util::random::{GameRng, PcgRng, RngOracle, compute_seed};
