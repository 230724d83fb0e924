//
// ──────────────────────────────────────────────────────────────
//   Line shading programs
//
//   One WGSL shader, one bind group layout, two pipelines that
//   differ only in primitive topology: disconnected segments for
//   the globe wireframe, connected strips for polylines. Every
//   drawable binds against the shared layout.
// ──────────────────────────────────────────────────────────────
//

pub struct LinePrograms
{
  pub bind_group_layout: wgpu::BindGroupLayout,
  pub segments_pipeline: wgpu::RenderPipeline,
  pub strip_pipeline: wgpu::RenderPipeline,
}

impl LinePrograms
{
  pub fn create(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self
  {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
      label: Some("Line Shader"),
      source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/line.wgsl").into()),
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
      label: Some("Line BGL"),
      entries: &[wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
          ty: wgpu::BufferBindingType::Uniform,
          has_dynamic_offset: false,
          min_binding_size: None,
        },
        count: None,
      }],
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
      label: Some("Line Pipeline Layout"),
      bind_group_layouts: &[&bind_group_layout],
      push_constant_ranges: &[],
    });

    let segments_pipeline = create_line_pipeline(
      device,
      config,
      &layout,
      &shader,
      wgpu::PrimitiveTopology::LineList,
      "Line Segments Pipeline",
    );

    let strip_pipeline = create_line_pipeline(
      device,
      config,
      &layout,
      &shader,
      wgpu::PrimitiveTopology::LineStrip,
      "Line Strip Pipeline",
    );

    Self { bind_group_layout, segments_pipeline, strip_pipeline }
  }
}

fn create_line_pipeline(
  device: &wgpu::Device,
  config: &wgpu::SurfaceConfiguration,
  layout: &wgpu::PipelineLayout,
  shader: &wgpu::ShaderModule,
  topology: wgpu::PrimitiveTopology,
  label: &str,
) -> wgpu::RenderPipeline
{
  device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
    label: Some(label),
    layout: Some(layout),
    vertex: wgpu::VertexState {
      module: shader,
      entry_point: Some("vs_main"),
      buffers: &[wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x4],
      }],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    },
    fragment: Some(wgpu::FragmentState {
      module: shader,
      entry_point: Some("fs_main"),
      targets: &[Some(wgpu::ColorTargetState {
        format: config.format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
      })],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    }),
    primitive: wgpu::PrimitiveState {
      topology,
      strip_index_format: None,
      front_face: wgpu::FrontFace::Ccw,
      cull_mode: None, // lines — nothing to cull
      unclipped_depth: false,
      polygon_mode: wgpu::PolygonMode::Fill,
      conservative: false,
    },
    depth_stencil: Some(wgpu::DepthStencilState {
      format: wgpu::TextureFormat::Depth32Float,
      depth_write_enabled: true,
      depth_compare: wgpu::CompareFunction::LessEqual,
      stencil: wgpu::StencilState::default(),
      bias: wgpu::DepthBiasState::default(),
    }),
    multisample: wgpu::MultisampleState::default(),
    multiview: None,
    cache: None,
  })
}
