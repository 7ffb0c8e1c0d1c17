//! Snap marker renderer

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::constants::marker as constants;
use crate::pipeline::{
    PipelineState, PipelineTargets, create_camera_bind_group, create_pipeline, create_shader,
};
use crate::vertex::PositionVertex;

/// Marker instance data - passed as vertex instance
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MarkerInstance {
    /// Marker center position in world space
    pub position: [f32; 3],
    /// Sphere radius
    pub scale: f32,
    /// Marker color (RGBA)
    pub color: [f32; 4],
}

impl MarkerInstance {
    /// Create a new marker instance
    pub fn new(position: Vec3, scale: f32, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            scale,
            color,
        }
    }

    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32,
        },
        wgpu::VertexAttribute {
            offset: 16,
            shader_location: 3,
            format: wgpu::VertexFormat::Float32x4,
        },
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Draws the single sphere that highlights the last snapped point
pub struct SnapMarkerRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    visible: bool,
    bind_group: wgpu::BindGroup,
}

impl SnapMarkerRenderer {
    /// Creates a new snap marker renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group = create_camera_bind_group(
            device,
            camera_bind_group_layout,
            camera_buffer,
            "Snap Marker",
        );

        let targets = PipelineTargets {
            format,
            depth_format,
            camera_layout: camera_bind_group_layout,
        };
        let shader = create_shader(device, "Snap Marker", include_str!("shaders/marker.wgsl"));
        let pipeline = create_pipeline(
            device,
            &targets,
            "Snap Marker",
            &shader,
            &[PositionVertex::layout(), MarkerInstance::layout()],
            PipelineState::MARKER,
        );

        let (vertices, indices) = generate_sphere(constants::SEGMENTS, constants::RINGS);
        let index_count = indices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Snap Marker Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Snap Marker Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Snap Marker Instance Buffer"),
            size: std::mem::size_of::<MarkerInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count,
            instance_buffer,
            visible: false,
            bind_group,
        }
    }

    /// Upload the marker instance, or hide the marker with `None`.
    pub fn update(&mut self, queue: &wgpu::Queue, instance: Option<MarkerInstance>) {
        match instance {
            Some(instance) => {
                queue.write_buffer(&self.instance_buffer, 0, bytemuck::bytes_of(&instance));
                self.visible = true;
            }
            None => self.visible = false,
        }
    }

    /// Whether the marker will be drawn
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Renders the marker if visible.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if !self.visible {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Generate a unit sphere mesh
pub fn generate_sphere(segments: u32, rings: u32) -> (Vec<PositionVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);

    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let z = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * std::f32::consts::PI * seg as f32 / segments as f32;
            vertices.push(PositionVertex {
                position: [ring_radius * theta.cos(), ring_radius * theta.sin(), z],
            });
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    (vertices, indices)
}
