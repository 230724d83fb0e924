use std::sync::Arc;

use glam::DMat4;
use winit::window::Window;

use super::pipeline::LinePrograms;
use crate::scene::Scene;

pub struct Renderer
{
  surface: wgpu::Surface<'static>,
  device: wgpu::Device,
  queue: wgpu::Queue,
  config: wgpu::SurfaceConfiguration,
  depth_view: wgpu::TextureView,
  programs: LinePrograms,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Renderer
{
  pub async fn new(window: Arc<Window>) -> Self
  {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone()).expect("failed to create surface");

    let adapter = request_adapter(&instance, &surface).await;
    let (device, queue) = request_device(&adapter).await;

    let config = configure_surface(&window, &surface, &adapter, &device);
    let depth_view = create_depth_view(&device, &config);
    let programs = LinePrograms::create(&device, &config);

    Self { surface, device, queue, config, depth_view, programs }
  }

  pub fn device(&self) -> &wgpu::Device
  {
    &self.device
  }

  pub fn programs(&self) -> &LinePrograms
  {
    &self.programs
  }

  pub fn resize(&mut self, width: u32, height: u32)
  {
    self.config.width = width;
    self.config.height = height;
    self.surface.configure(&self.device, &self.config);
    self.depth_view = create_depth_view(&self.device, &self.config);
  }

  /// Renders one frame: uploads every live drawable's uniforms from the
  /// given matrices, then records a single pass drawing the scene in its
  /// fixed order.
  pub fn render(&mut self, scene: &Scene, model_view: &DMat4, projection: &DMat4)
  {
    scene.write_uniforms(&self.queue, model_view, projection);

    let frame = match self.surface.get_current_texture()
    {
      Ok(frame) => frame,
      Err(_) =>
      {
        self.surface.configure(&self.device, &self.config);
        self.surface.get_current_texture().expect("failed to acquire frame")
      }
    };

    let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = self
      .device
      .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });

    record_render_pass(&mut encoder, &view, &self.depth_view, scene, &self.programs);

    self.queue.submit(Some(encoder.finish()));
    frame.present();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Initialization helpers
// ──────────────────────────────────────────────────────────────
//

async fn request_adapter(instance: &wgpu::Instance, surface: &wgpu::Surface<'_>) -> wgpu::Adapter
{
  instance
    .request_adapter(&wgpu::RequestAdapterOptions {
      power_preference: wgpu::PowerPreference::HighPerformance,
      compatible_surface: Some(surface),
      force_fallback_adapter: false,
    })
    .await
    .expect("no suitable GPU adapters found")
}

async fn request_device(adapter: &wgpu::Adapter) -> (wgpu::Device, wgpu::Queue)
{
  adapter
    .request_device(&wgpu::DeviceDescriptor {
      label: Some("Viewer Device"),
      required_features: wgpu::Features::empty(),
      required_limits: wgpu::Limits::default(),
      ..Default::default()
    })
    .await
    .expect("failed to create device")
}

fn configure_surface(
  window: &Window,
  surface: &wgpu::Surface<'_>,
  adapter: &wgpu::Adapter,
  device: &wgpu::Device,
) -> wgpu::SurfaceConfiguration
{
  let size = window.inner_size();
  let caps = surface.get_capabilities(adapter);
  let format = caps.formats[0];

  let config = wgpu::SurfaceConfiguration {
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    format,
    width: size.width.max(1),
    height: size.height.max(1),
    present_mode: wgpu::PresentMode::Fifo,
    alpha_mode: wgpu::CompositeAlphaMode::Auto,
    view_formats: vec![],
    desired_maximum_frame_latency: 2,
  };

  surface.configure(device, &config);
  config
}

fn create_depth_view(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration)
  -> wgpu::TextureView
{
  let texture = device.create_texture(&wgpu::TextureDescriptor {
    label: Some("Depth Texture"),
    size: wgpu::Extent3d { width: config.width, height: config.height, depth_or_array_layers: 1 },
    mip_level_count: 1,
    sample_count: 1,
    dimension: wgpu::TextureDimension::D2,
    format: wgpu::TextureFormat::Depth32Float,
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  });

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}

//
// ──────────────────────────────────────────────────────────────
//   Render pass
// ──────────────────────────────────────────────────────────────
//

fn record_render_pass(
  encoder: &mut wgpu::CommandEncoder,
  color_view: &wgpu::TextureView,
  depth_view: &wgpu::TextureView,
  scene: &Scene,
  programs: &LinePrograms,
)
{
  let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
    label: Some("Line Render Pass"),
    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
      view: color_view,
      depth_slice: None,
      resolve_target: None,
      ops: wgpu::Operations {
        load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }),
        store: wgpu::StoreOp::Store,
      },
    })],
    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
      view: depth_view,
      depth_ops: Some(wgpu::Operations {
        load: wgpu::LoadOp::Clear(1.0),
        store: wgpu::StoreOp::Store,
      }),
      stencil_ops: None,
    }),
    occlusion_query_set: None,
    timestamp_writes: None,
  });

  scene.record(&mut pass, programs);
}
