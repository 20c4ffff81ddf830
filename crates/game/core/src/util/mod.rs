//! Narrow helper modules shared by presentation code.
//!
//! Each module is stateless apart from [`random::GameRng`], which callers own
//! and pass where randomness is needed.
pub mod format;
pub mod math;
pub mod parse;
pub mod random;
