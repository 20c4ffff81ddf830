//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the files a client reads at startup:
//! - Game configuration (TOML)
//! - Galaxy-map presentation policy (TOML)
//! - Star-system name lists (comment-aware delimited text)
//! - Scripted turn scenarios (RON)
//!
//! Content is consumed by the runtime and client and never mutated.

#[cfg(feature = "serde")]
pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use scenario::{ProducerScript, Scenario, ScriptedNotification};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, MapPolicyLoader, ScenarioLoader, SystemNameLoader,
};
