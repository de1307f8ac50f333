//! Pen-based glyph placement.
//!
//! Pure quad math, separated from GPU submission so pen advance and
//! bearing handling can be exercised without a device. Coordinates are
//! screen pixels with the origin at the bottom-left and `y` up; the pen
//! tracks the baseline.

use bytemuck::{Pod, Zeroable};
use vantage_core::math::Vec2;
use vantage_render::wgpu;

use crate::atlas::GlyphMetrics;

/// One vertex of a glyph quad.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl TextVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TextVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2],
    };
}

/// A glyph quad positioned in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub character: char,
    /// Bottom-left corner of the quad.
    pub origin: Vec2,
    /// Quad dimensions after scaling.
    pub size: Vec2,
}

impl PlacedGlyph {
    /// Expand the quad into two triangles, six vertices.
    ///
    /// Winding is top-left, bottom-left, bottom-right, then top-left,
    /// bottom-right, top-right. Texture `v` is 0 at the top row because
    /// bitmaps are uploaded top row first while screen `y` grows upward.
    pub fn vertices(&self) -> [TextVertex; 6] {
        let (x, y) = (self.origin.x, self.origin.y);
        let (w, h) = (self.size.x, self.size.y);

        let tl = TextVertex {
            position: [x, y + h],
            tex_coords: [0.0, 0.0],
        };
        let bl = TextVertex {
            position: [x, y],
            tex_coords: [0.0, 1.0],
        };
        let br = TextVertex {
            position: [x + w, y],
            tex_coords: [1.0, 1.0],
        };
        let tr = TextVertex {
            position: [x + w, y + h],
            tex_coords: [1.0, 0.0],
        };

        [tl, bl, br, tl, br, tr]
    }
}

/// The result of laying out one run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Visible quads, in draw order. Whitespace and unmapped characters
    /// produce no quad.
    pub glyphs: Vec<PlacedGlyph>,
    /// Final pen position after the last character.
    pub pen: Vec2,
}

/// Place each character of `text` along the baseline starting at
/// `origin`.
///
/// `lookup` resolves a character to its cached metrics; characters it
/// does not resolve are skipped entirely and contribute no advance.
/// Cached characters always advance the pen, whether or not they have a
/// visible bitmap.
pub fn place_glyphs(
    lookup: impl Fn(char) -> Option<GlyphMetrics>,
    text: &str,
    origin: Vec2,
    scale: f32,
) -> TextLayout {
    let mut glyphs = Vec::new();
    let mut pen = origin;

    for c in text.chars() {
        let Some(metrics) = lookup(c) else {
            continue;
        };

        if metrics.size.x > 0 && metrics.size.y > 0 {
            let size = Vec2::new(metrics.size.x as f32, metrics.size.y as f32) * scale;
            // The quad hangs from the bearing: left edge shifts right by
            // the side bearing, bottom edge drops below the baseline by
            // the descender part of the bitmap.
            let quad_origin = Vec2::new(
                pen.x + metrics.bearing.x as f32 * scale,
                pen.y - (metrics.size.y as f32 - metrics.bearing.y as f32) * scale,
            );
            glyphs.push(PlacedGlyph {
                character: c,
                origin: quad_origin,
                size,
            });
        }

        pen.x += metrics.advance * scale;
    }

    TextLayout { glyphs, pen }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::math::{IVec2, UVec2};

    fn fixed_metrics(c: char) -> Option<GlyphMetrics> {
        match c {
            ' ' => Some(GlyphMetrics {
                size: UVec2::ZERO,
                bearing: IVec2::ZERO,
                advance: 12.0,
            }),
            'a'..='z' => Some(GlyphMetrics {
                size: UVec2::new(20, 30),
                bearing: IVec2::new(2, 28),
                advance: 24.0,
            }),
            _ => None,
        }
    }

    #[test]
    fn empty_text_moves_nothing() {
        let layout = place_glyphs(fixed_metrics, "", Vec2::new(5.0, 7.0), 1.0);
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.pen, Vec2::new(5.0, 7.0));
    }

    #[test]
    fn unmapped_characters_contribute_no_advance() {
        let layout = place_glyphs(fixed_metrics, "!!!", Vec2::ZERO, 1.0);
        assert!(layout.glyphs.is_empty());
        assert_eq!(layout.pen, Vec2::ZERO);
    }

    #[test]
    fn pen_advance_is_sum_of_scaled_advances() {
        let origin = Vec2::new(100.0, 50.0);
        let layout = place_glyphs(fixed_metrics, "ab cd", origin, 2.0);

        // Four letters at 24 px plus one space at 12 px, all doubled.
        let expected = origin.x + (4.0 * 24.0 + 12.0) * 2.0;
        assert!((layout.pen.x - expected).abs() < 1e-5);
        assert_eq!(layout.pen.y, origin.y);
    }

    #[test]
    fn whitespace_advances_without_a_quad() {
        let layout = place_glyphs(fixed_metrics, " ", Vec2::ZERO, 1.0);
        assert!(layout.glyphs.is_empty());
        assert!((layout.pen.x - 12.0).abs() < 1e-5);
    }

    #[test]
    fn quad_respects_bearing_and_scale() {
        let origin = Vec2::new(10.0, 40.0);
        let layout = place_glyphs(fixed_metrics, "g", origin, 2.0);

        assert_eq!(layout.glyphs.len(), 1);
        let quad = layout.glyphs[0];
        // x shifts by bearing.x * scale, y drops by (height - bearing.y)
        // * scale below the baseline.
        assert!((quad.origin.x - (10.0 + 2.0 * 2.0)).abs() < 1e-5);
        assert!((quad.origin.y - (40.0 - (30.0 - 28.0) * 2.0)).abs() < 1e-5);
        assert_eq!(quad.size, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn quad_size_is_independent_of_origin() {
        let a = place_glyphs(fixed_metrics, "x", Vec2::ZERO, 1.5);
        let b = place_glyphs(fixed_metrics, "x", Vec2::new(300.0, 200.0), 1.5);
        assert_eq!(a.glyphs[0].size, b.glyphs[0].size);
    }

    #[test]
    fn vertices_cover_the_quad_with_v_zero_at_top() {
        let quad = PlacedGlyph {
            character: 'a',
            origin: Vec2::new(1.0, 2.0),
            size: Vec2::new(4.0, 6.0),
        };
        let verts = quad.vertices();

        // Two triangles sharing the top-left/bottom-right diagonal.
        assert_eq!(verts[0], verts[3]);
        assert_eq!(verts[2], verts[4]);

        for v in &verts {
            let top = (v.position[1] - 8.0).abs() < 1e-6;
            let bottom = (v.position[1] - 2.0).abs() < 1e-6;
            assert!(top || bottom);
            if top {
                assert_eq!(v.tex_coords[1], 0.0);
            } else {
                assert_eq!(v.tex_coords[1], 1.0);
            }
        }
    }
}
