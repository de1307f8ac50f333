//! Mathematical types used throughout the workspace.
//!
//! Re-exports the SIMD-accelerated [`glam`] types so every crate in the
//! workspace refers to a single math vocabulary. The glam `bytemuck`
//! feature is enabled, so these types can also be cast into GPU buffer
//! uploads directly.

/// SIMD-accelerated math types, re-exported from [`glam`].
pub mod fast {
    pub use glam::*;
}

pub use fast::{IVec2, Mat4, UVec2, Vec2, Vec3, Vec4};
