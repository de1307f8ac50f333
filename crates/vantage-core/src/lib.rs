//! Vantage Core - foundation utilities shared by the rendering crates.
//!
//! Provides:
//! - [`logging`]: tracing subscriber setup
//! - [`math`]: the workspace's shared glam-based math vocabulary
//! - [`time`]: per-frame clock with delta time and FPS tracking

pub mod logging;
pub mod math;
pub mod time;

pub use time::{Clock, FrameTime};
