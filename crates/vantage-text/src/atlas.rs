//! ASCII glyph atlas.
//!
//! Rasterizes the printable ASCII range up front and keeps one GPU
//! texture per character. Characters the face does not map are logged
//! and left out of the atlas; lookups for them return `None` so drawing
//! can skip them without advancing the pen.

use std::collections::HashMap;

use vantage_core::math::{IVec2, UVec2};
use vantage_render::{GpuTexture, Renderer, wgpu};

use crate::face::FontFace;

/// Layout metrics for one cached glyph, in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Bitmap dimensions.
    pub size: UVec2,
    /// Offset from pen origin to bitmap top-left (x right, y up from
    /// the baseline).
    pub bearing: IVec2,
    /// Horizontal pen advance.
    pub advance: f32,
}

/// One cached glyph: its coverage texture plus layout metrics.
pub struct Glyph {
    metrics: GlyphMetrics,
    texture: GpuTexture,
    bind_group: wgpu::BindGroup,
}

impl Glyph {
    #[inline]
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    #[inline]
    pub fn texture(&self) -> &GpuTexture {
        &self.texture
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Pre-rasterized cache of the ASCII range, one texture per character.
pub struct GlyphAtlas {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphAtlas {
    /// Rasterize and upload glyphs for character codes 0..=127.
    ///
    /// `layout` must be the texture+sampler bind group layout the text
    /// pipeline samples glyphs through; one bind group is created per
    /// glyph so draws can switch textures without rebinding the sampler
    /// layout.
    pub fn new(
        renderer: &Renderer,
        face: &FontFace,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let mut glyphs = HashMap::new();

        for code in 0u8..128 {
            let c = code as char;
            let Some(raster) = face.rasterize(c) else {
                tracing::warn!(code, "face does not map character, skipping");
                continue;
            };

            // Whitespace rasterizes to an empty bitmap. A 1x1 transparent
            // texture keeps the bind group valid while the zero size
            // suppresses the quad; the advance still moves the pen.
            let (texture, size) = if raster.width == 0 || raster.height == 0 {
                let texture = renderer.create_gpu_texture_from_data(
                    Some("glyph-empty"),
                    1,
                    1,
                    wgpu::TextureFormat::R8Unorm,
                    &[0u8],
                );
                (texture, UVec2::ZERO)
            } else {
                let texture = renderer.create_gpu_texture_from_data(
                    Some("glyph"),
                    raster.width,
                    raster.height,
                    wgpu::TextureFormat::R8Unorm,
                    &raster.coverage,
                );
                (texture, UVec2::new(raster.width, raster.height))
            };

            let bind_group = renderer.create_bind_group(
                Some("glyph-bind-group"),
                layout,
                &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: texture.as_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            );

            glyphs.insert(
                c,
                Glyph {
                    metrics: GlyphMetrics {
                        size,
                        bearing: raster.bearing,
                        advance: raster.advance,
                    },
                    texture,
                    bind_group,
                },
            );
        }

        tracing::debug!(count = glyphs.len(), "built glyph atlas");
        Self { glyphs }
    }

    /// Look up a cached glyph.
    #[inline]
    pub fn get(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Look up just the layout metrics for a cached glyph.
    #[inline]
    pub fn metrics(&self, c: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&c).map(|g| g.metrics)
    }

    /// Whether the atlas caches `c`.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Number of cached glyphs.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
