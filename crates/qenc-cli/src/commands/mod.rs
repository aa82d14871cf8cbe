//! CLI command implementations.

pub mod angles;
pub mod common;
pub mod encode;
pub mod verify;
pub mod version;
