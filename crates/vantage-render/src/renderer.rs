use std::sync::Arc;

use crate::context::GraphicsContext;
use crate::types::{GpuTexture, TypedBuffer};

/// Low-level renderer that simplifies wgpu resource management.
///
/// Foundation for higher-level renderers such as the text renderer. It
/// holds the shared [`GraphicsContext`] and provides utilities for
/// creating resources with consistent labels and usages.
pub struct Renderer {
    context: Arc<GraphicsContext>,
}

impl Renderer {
    /// Create a new renderer with the given graphics context.
    pub fn new(context: Arc<GraphicsContext>) -> Self {
        Self { context }
    }

    /// Get the graphics context.
    pub fn context(&self) -> &GraphicsContext {
        &self.context
    }

    /// Get the device.
    pub fn device(&self) -> &wgpu::Device {
        self.context.device()
    }

    /// Get the queue.
    pub fn queue(&self) -> &wgpu::Queue {
        self.context.queue()
    }

    /// Create a shader module from WGSL source.
    pub fn create_shader(&self, label: Option<&str>, source: &str) -> wgpu::ShaderModule {
        self.context
            .device()
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label,
                source: wgpu::ShaderSource::Wgsl(source.into()),
            })
    }

    /// Create a typed vertex buffer with data.
    pub fn create_vertex_buffer<T: bytemuck::Pod>(
        &self,
        label: Option<&str>,
        data: &[T],
    ) -> TypedBuffer<T> {
        TypedBuffer::new(
            self.context.device(),
            label,
            data,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        )
    }

    /// Create a uniform buffer with data.
    pub fn create_uniform_buffer<T: bytemuck::Pod>(
        &self,
        label: Option<&str>,
        data: &T,
    ) -> wgpu::Buffer {
        let buffer = self.context.device().create_buffer(&wgpu::BufferDescriptor {
            label,
            size: std::mem::size_of::<T>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.context.queue().write_buffer(
            &buffer,
            0,
            bytemuck::cast_slice(std::slice::from_ref(data)),
        );

        buffer
    }


    /// Create a GPU texture from raw data.
    pub fn create_gpu_texture_from_data(
        &self,
        label: Option<&str>,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        data: &[u8],
    ) -> GpuTexture {
        GpuTexture::from_data(
            self.context.device(),
            self.context.queue(),
            label,
            width,
            height,
            format,
            data,
        )
    }

    /// Create a clamp-to-edge sampler with linear filtering on all axes.
    pub fn create_linear_sampler(&self, label: Option<&str>) -> wgpu::Sampler {
        self.context
            .device()
            .create_sampler(&wgpu::SamplerDescriptor {
                label,
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            })
    }

    /// Create a bind group layout.
    pub fn create_bind_group_layout(
        &self,
        label: Option<&str>,
        entries: &[wgpu::BindGroupLayoutEntry],
    ) -> wgpu::BindGroupLayout {
        self.context
            .device()
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor { label, entries })
    }

    /// Create a bind group.
    pub fn create_bind_group(
        &self,
        label: Option<&str>,
        layout: &wgpu::BindGroupLayout,
        entries: &[wgpu::BindGroupEntry],
    ) -> wgpu::BindGroup {
        self.context
            .device()
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label,
                layout,
                entries,
            })
    }

    /// Create a pipeline layout.
    pub fn create_pipeline_layout(
        &self,
        label: Option<&str>,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> wgpu::PipelineLayout {
        self.context
            .device()
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label,
                bind_group_layouts,
                push_constant_ranges: &[],
            })
    }

    /// Create a render pipeline.
    pub fn create_render_pipeline(
        &self,
        descriptor: &wgpu::RenderPipelineDescriptor,
    ) -> wgpu::RenderPipeline {
        self.context.device().create_render_pipeline(descriptor)
    }
}
