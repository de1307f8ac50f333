//! Vantage Render - the graphics layer of the Vantage demo.
//!
//! Provides:
//! - [`GraphicsContext`]: shared wgpu instance/adapter/device/queue
//! - [`Renderer`]: resource-creation helpers on top of the context
//! - [`TypedBuffer`] / [`GpuTexture`]: RAII wrappers over raw wgpu handles
//! - [`FlyCamera`]: free-fly camera state with view/projection derivation
//!
//! The window, event loop and swapchain belong to the host application;
//! this crate only consumes a `wgpu::RenderPass` and per-frame input
//! snapshots.

pub mod camera;
pub mod color;
pub mod context;
pub mod renderer;
pub mod types;
pub mod viewport;

pub use camera::{CameraInput, CursorMode, FlyCamera};
pub use color::Color;
pub use context::GraphicsContext;
pub use renderer::Renderer;
pub use types::{GpuTexture, TypedBuffer};
pub use viewport::Viewport;

// Re-exported so downstream crates use a single wgpu version.
pub use wgpu;
