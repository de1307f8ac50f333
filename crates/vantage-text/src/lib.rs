//! Glyph-atlas text rendering.
//!
//! Loads a font face, rasterizes the ASCII range into per-glyph GPU
//! textures, and draws screen-space text runs with pen-based layout.
//!
//! ```no_run
//! use vantage_render::{GraphicsContext, Viewport};
//! use vantage_text::{TextRenderer, TextRendererConfig};
//!
//! let context = GraphicsContext::new_sync();
//! let mut text = TextRenderer::new(
//!     context,
//!     "fonts/DejaVuSans.ttf",
//!     TextRendererConfig::default(),
//! ).unwrap();
//! text.set_viewport(Viewport::new(1280, 720));
//! // Inside a render pass:
//! // text.render_text(&mut pass, "hello", Vec2::new(25.0, 25.0), 1.0, Color::WHITE);
//! ```

pub mod atlas;
pub mod error;
pub mod face;
pub mod layout;
pub mod renderer;

pub use atlas::{Glyph, GlyphAtlas, GlyphMetrics};
pub use error::{TextError, TextResult};
pub use face::{FontFace, RasterizedGlyph};
pub use layout::{PlacedGlyph, TextLayout, TextVertex, place_glyphs};
pub use renderer::{TextRenderer, TextRendererConfig};
