//! Reference grid renderer
//!
//! Uploads the grid's line batches and backing quad as vertex buffers and
//! re-uploads them only when the grid reports a new revision. wgpu draws
//! lines one pixel wide, so batch thickness is not rasterized.

use std::fmt;

use sg_core::{Grid, LineBatch};
use wgpu::util::DeviceExt;

use crate::marker::{MarkerInstance, SnapMarkerRenderer};
use crate::pipeline::{
    PipelineState, PipelineTargets, create_camera_bind_group, create_pipeline, create_shader,
};
use crate::vertex::PositionColorVertex;

const BACK_QUAD_VERTEX_COUNT: u32 = 6;

/// Grid renderer
pub struct GridRenderer {
    line_pipeline: wgpu::RenderPipeline,
    back_pipeline: wgpu::RenderPipeline,
    line_buffer: Option<wgpu::Buffer>,
    line_vertex_count: u32,
    back_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    marker: SnapMarkerRenderer,
    revision: Option<u64>,
    enabled: bool,
}

impl GridRenderer {
    /// Creates a new grid renderer.
    ///
    /// Nothing is drawn until the first [`sync`](Self::sync).
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Grid");

        let targets = PipelineTargets {
            format,
            depth_format,
            camera_layout: camera_bind_group_layout,
        };
        let shader = create_shader(device, "Grid", include_str!("shaders/grid.wgsl"));
        let vertex_layouts = [PositionColorVertex::layout()];

        let line_pipeline = create_pipeline(
            device,
            &targets,
            "Grid Lines",
            &shader,
            &vertex_layouts,
            PipelineState::LINES,
        );
        let back_pipeline = create_pipeline(
            device,
            &targets,
            "Grid Back",
            &shader,
            &vertex_layouts,
            PipelineState::BACK_QUAD,
        );

        let back_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Grid Back Vertex Buffer"),
            size: (BACK_QUAD_VERTEX_COUNT as usize * std::mem::size_of::<PositionColorVertex>())
                as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let marker = SnapMarkerRenderer::new(
            device,
            format,
            depth_format,
            camera_bind_group_layout,
            camera_buffer,
        );

        Self {
            line_pipeline,
            back_pipeline,
            line_buffer: None,
            line_vertex_count: 0,
            back_buffer,
            bind_group,
            marker,
            revision: None,
            enabled: false,
        }
    }

    /// Bring GPU buffers in line with `grid`.
    ///
    /// Line and quad buffers are rebuilt only when the grid's revision
    /// changed since the last call. The marker follows the last snapped
    /// point on every call.
    pub fn sync<N>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, grid: &Grid<N>)
    where
        N: Copy + Eq + fmt::Debug,
    {
        self.enabled = grid.is_enabled();

        if self.revision != Some(grid.revision()) {
            let vertices = line_vertices(grid.batches());
            self.line_vertex_count = vertices.len() as u32;
            self.line_buffer = (!vertices.is_empty()).then(|| {
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Grid Line Vertex Buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
            });

            let quad = back_quad_vertices(grid.back_scale(), grid.back_color());
            queue.write_buffer(&self.back_buffer, 0, bytemuck::cast_slice(&quad));

            tracing::debug!(
                "Grid buffers rebuilt for revision {} ({} line vertices)",
                grid.revision(),
                self.line_vertex_count
            );
            self.revision = Some(grid.revision());
        }

        let marker = self.enabled.then(|| {
            MarkerInstance::new(
                grid.last_snapped_point(),
                grid.marker_scale(),
                grid.marker_color(),
            )
        });
        self.marker.update(queue, marker);
    }

    /// Whether the last synced grid was enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Renders the backing quad, the lines and the snap marker.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if !self.enabled || self.revision.is_none() {
            return;
        }

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        render_pass.set_pipeline(&self.back_pipeline);
        render_pass.set_vertex_buffer(0, self.back_buffer.slice(..));
        render_pass.draw(0..BACK_QUAD_VERTEX_COUNT, 0..1);

        if let Some(buffer) = &self.line_buffer {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, buffer.slice(..));
            render_pass.draw(0..self.line_vertex_count, 0..1);
        }

        self.marker.render(render_pass);
    }
}

/// Flatten line batches into a line-list vertex array, in batch order.
pub fn line_vertices<'a>(
    batches: impl IntoIterator<Item = &'a LineBatch>,
) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    for batch in batches {
        let color = batch.color();
        for segment in batch.segments() {
            vertices.push(PositionColorVertex {
                position: segment.start.to_array(),
                color,
            });
            vertices.push(PositionColorVertex {
                position: segment.end.to_array(),
                color,
            });
        }
    }
    vertices
}

/// Two triangles covering `[-scale, scale]` on the XY plane.
pub fn back_quad_vertices(scale: f32, color: [f32; 4]) -> [PositionColorVertex; 6] {
    let corner = |x: f32, y: f32| PositionColorVertex {
        position: [x * scale, y * scale, 0.0],
        color,
    };
    [
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]
}
