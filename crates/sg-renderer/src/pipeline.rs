//! Pipeline creation for the grid passes
//!
//! Lines, backing quad and snap marker share the camera binding, alpha
//! blending and `Less` depth test. Only the [`PipelineState`] differs.

/// What varies between the grid's pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineState {
    /// Primitive topology
    pub topology: wgpu::PrimitiveTopology,
    /// Face culling mode
    pub cull_mode: Option<wgpu::Face>,
    /// Whether the pass writes depth
    pub depth_write: bool,
}

impl PipelineState {
    /// Grid line list
    pub const LINES: Self = Self {
        topology: wgpu::PrimitiveTopology::LineList,
        cull_mode: None,
        depth_write: true,
    };

    /// Translucent backing quad: depth-tested, never occludes the lines
    pub const BACK_QUAD: Self = Self {
        topology: wgpu::PrimitiveTopology::TriangleList,
        cull_mode: None,
        depth_write: false,
    };

    /// Closed sphere mesh
    pub const MARKER: Self = Self {
        topology: wgpu::PrimitiveTopology::TriangleList,
        cull_mode: Some(wgpu::Face::Back),
        depth_write: true,
    };
}

/// Render target formats and camera layout every grid pipeline uses
#[derive(Clone, Copy)]
pub struct PipelineTargets<'a> {
    /// Output texture format
    pub format: wgpu::TextureFormat,
    /// Depth texture format
    pub depth_format: wgpu::TextureFormat,
    /// Camera uniform layout, bound at group 0
    pub camera_layout: &'a wgpu::BindGroupLayout,
}

/// Compile a WGSL shader with `vs_main`/`fs_main` entry points.
pub fn create_shader(device: &wgpu::Device, label: &str, source: &str) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{} Shader", label)),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    })
}

/// Build a render pipeline for `state` against `targets`.
pub fn create_pipeline(
    device: &wgpu::Device,
    targets: &PipelineTargets<'_>,
    label: &str,
    shader: &wgpu::ShaderModule,
    vertex_layouts: &[wgpu::VertexBufferLayout<'_>],
    state: PipelineState,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{} Pipeline Layout", label)),
        bind_group_layouts: &[targets.camera_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{} Pipeline", label)),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: vertex_layouts,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: targets.format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: state.topology,
            cull_mode: state.cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: targets.depth_format,
            depth_write_enabled: state.depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Create a camera bind group from the layout and buffer.
pub fn create_camera_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{} Camera Bind Group", label)),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}
