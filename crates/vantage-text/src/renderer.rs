//! GPU text renderer.
//!
//! Draws a run of text in one pass: quads are staged on the CPU with
//! [`place_glyphs`](crate::layout::place_glyphs), uploaded as transient
//! vertex/uniform buffers, then drawn six vertices at a time with the
//! matching glyph texture bound.

use std::path::Path;
use std::sync::Arc;

use vantage_core::math::Vec2;
use vantage_render::{Color, GraphicsContext, Renderer, Viewport, wgpu};

use crate::atlas::GlyphAtlas;
use crate::error::TextResult;
use crate::face::FontFace;
use crate::layout::{self, TextVertex};

/// Configuration for a [`TextRenderer`].
#[derive(Debug, Clone, Copy)]
pub struct TextRendererConfig {
    /// Glyph rasterization height in pixels.
    pub pixel_size: u32,
    /// Format of the render target the pipeline draws into.
    pub surface_format: wgpu::TextureFormat,
}

impl Default for TextRendererConfig {
    fn default() -> Self {
        Self {
            pixel_size: 48,
            surface_format: wgpu::TextureFormat::Bgra8UnormSrgb,
        }
    }
}

/// Per-draw uniform data: screen projection plus the text tint.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct TextUniform {
    projection: [[f32; 4]; 4],
    color: [f32; 4],
}

/// Column-major orthographic projection mapping `0..width` and
/// `0..height` to clip space, origin at the bottom-left.
fn orthographic_projection(width: f32, height: f32) -> [[f32; 4]; 4] {
    [
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, 2.0 / height, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-1.0, -1.0, 0.0, 1.0],
    ]
}

/// Screen-space text renderer over a pre-rasterized ASCII atlas.
pub struct TextRenderer {
    renderer: Renderer,
    face: FontFace,
    atlas: GlyphAtlas,
    pipeline: wgpu::RenderPipeline,
    uniform_bind_group_layout: wgpu::BindGroupLayout,
    viewport: Viewport,
}

impl TextRenderer {
    /// Load a font and build the atlas and pipeline.
    pub fn new(
        context: Arc<GraphicsContext>,
        font_path: impl AsRef<Path>,
        config: TextRendererConfig,
    ) -> TextResult<Self> {
        let renderer = Renderer::new(context);

        let mut face = FontFace::load(font_path)?;
        face.set_pixel_size(0, config.pixel_size);

        let shader =
            renderer.create_shader(Some("Text Shader"), include_str!("../shaders/text.wgsl"));

        let uniform_bind_group_layout = renderer.create_bind_group_layout(
            Some("Text Uniform Bind Group Layout"),
            &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        );

        let glyph_bind_group_layout = renderer.create_bind_group_layout(
            Some("Glyph Bind Group Layout"),
            &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        );

        let sampler = renderer.create_linear_sampler(Some("Glyph Sampler"));
        let atlas = GlyphAtlas::new(&renderer, &face, &glyph_bind_group_layout, &sampler);

        let pipeline_layout = renderer.create_pipeline_layout(
            Some("Text Pipeline Layout"),
            &[&uniform_bind_group_layout, &glyph_bind_group_layout],
        );

        let pipeline = renderer.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Text Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[TextVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Ok(Self {
            renderer,
            face,
            atlas,
            pipeline,
            uniform_bind_group_layout,
            viewport: Viewport::new(0, 0),
        })
    }

    /// Set the render target dimensions used for the screen projection.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The loaded font face.
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// The cached glyph set.
    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Draw `text` with its baseline starting at `position`, in screen
    /// pixels from the bottom-left corner.
    ///
    /// Characters the atlas does not cache are skipped without moving
    /// the pen.
    pub fn render_text(
        &self,
        render_pass: &mut wgpu::RenderPass,
        text: &str,
        position: Vec2,
        scale: f32,
        color: Color,
    ) {
        if !self.viewport.is_valid() {
            tracing::warn!("viewport not set, skipping text draw");
            return;
        }

        let layout = layout::place_glyphs(|c| self.atlas.metrics(c), text, position, scale);
        if layout.glyphs.is_empty() {
            return;
        }

        let mut vertices = Vec::with_capacity(layout.glyphs.len() * 6);
        for quad in &layout.glyphs {
            vertices.extend_from_slice(&quad.vertices());
        }

        let vertex_buffer = self
            .renderer
            .create_vertex_buffer(Some("Text Vertex Buffer"), &vertices);

        let uniform = TextUniform {
            projection: orthographic_projection(
                self.viewport.width as f32,
                self.viewport.height as f32,
            ),
            color: color.to_array(),
        };
        let uniform_buffer = self
            .renderer
            .create_uniform_buffer(Some("Text Uniform Buffer"), &uniform);
        let uniform_bind_group = self.renderer.create_bind_group(
            Some("Text Uniform Bind Group"),
            &self.uniform_bind_group_layout,
            &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        );

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice());

        for (i, quad) in layout.glyphs.iter().enumerate() {
            // place_glyphs only emits quads for cached characters.
            let Some(glyph) = self.atlas.get(quad.character) else {
                continue;
            };
            let start = (i * 6) as u32;
            render_pass.set_bind_group(1, glyph.bind_group(), &[]);
            render_pass.draw(start..start + 6, 0..1);
        }
    }
}
