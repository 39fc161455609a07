//! Library side of the roster CLI: logging, configuration, session scripts
//! and terminal rendering.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
