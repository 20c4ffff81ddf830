//! Turn digest client.
//!
//! Loads a scripted turn from content files, runs its producers concurrently
//! through the runtime and renders the ordered end-of-turn digest.
//!
//! - [`config`]: environment-driven settings
//! - [`content`]: resolves content paths and loads them
//! - [`session`]: drives one turn through the runtime
//! - [`digest`]: the console delivery handler and digest rendering
//! - [`logging`]: session log files

pub mod config;
pub mod content;
pub mod digest;
pub mod logging;
pub mod session;

pub use config::{CliConfig, DigestFormat};
pub use content::LoadedContent;
pub use digest::{Digest, DigestEntry, DigestHandler};
pub use session::run_turn;
