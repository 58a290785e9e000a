//! Ambient utilities shared by the bridge binaries.

pub mod logging;
