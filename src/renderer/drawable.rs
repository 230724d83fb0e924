use glam::{DMat4, DVec3};
use wgpu::util::DeviceExt;

use super::pipeline::LinePrograms;
use crate::geometry::pack4;

//
// ──────────────────────────────────────────────────────────────
//   Draw Uniform (GPU side)
//
//   WGSL layout (line.wgsl):
//     model_view : mat4x4<f32>  →  64 bytes
//     projection : mat4x4<f32>  →  64 bytes
//     color      : vec4<f32>    →  16 bytes
//     dist_fade  : u32 + pad    →  16 bytes
//   Total: 160 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct DrawUniform
{
  model_view: [[f32; 4]; 4],
  projection: [[f32; 4]; 4],
  color: [f32; 4],
  dist_fade: u32,
  _pad: [u32; 3],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<DrawUniform>() == 160);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineTopology
{
  /// Disconnected 2-point segments.
  Segments,

  /// One connected strip — point order defines connectivity.
  Strip,
}

struct GpuResources
{
  vertex_buffer: wgpu::Buffer,
  uniform_buffer: wgpu::Buffer,
  bind_group: wgpu::BindGroup,
}

//
// ──────────────────────────────────────────────────────────────
//   LineDrawable
//
//   Lifecycle: Uninitialized → Ready → Disposed, tracked by the
//   `gpu` Option. `cleanup` is idempotent and safe at any point;
//   `record` only emits work while Ready.
// ──────────────────────────────────────────────────────────────
//

pub struct LineDrawable
{
  vertices: Vec<[f32; 4]>,
  color: [f32; 4],
  distance_fade: bool,
  topology: LineTopology,
  gpu: Option<GpuResources>,
}

impl LineDrawable
{
  /// Stores the points verbatim, appending a homogeneous 1 per point.
  pub fn from_points(points: &[DVec3], color: [f32; 4], topology: LineTopology) -> Self
  {
    Self::from_vertices(points.iter().map(|p| pack4(*p)).collect(), color, topology)
  }

  pub fn from_vertices(vertices: Vec<[f32; 4]>, color: [f32; 4], topology: LineTopology) -> Self
  {
    Self { vertices, color, distance_fade: false, topology, gpu: None }
  }

  /// Fades alpha with projected distance (used by the globe wireframe so
  /// the far side recedes instead of cluttering the view).
  pub fn with_distance_fade(mut self) -> Self
  {
    self.distance_fade = true;
    self
  }

  pub fn vertex_count(&self) -> u32
  {
    self.vertices.len() as u32
  }

  pub fn color(&self) -> [f32; 4]
  {
    self.color
  }

  pub fn is_ready(&self) -> bool
  {
    self.gpu.is_some()
  }

  /// Uploads the vertex data and allocates this drawable's uniform block.
  pub fn setup(&mut self, device: &wgpu::Device, programs: &LinePrograms)
  {
    debug_assert!(self.gpu.is_none(), "setup called on an already set-up drawable");

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Line Vertex Buffer"),
      contents: bytemuck::cast_slice(&self.vertices),
      usage: wgpu::BufferUsages::VERTEX,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
      label: Some("Line Uniform Buffer"),
      size: std::mem::size_of::<DrawUniform>() as u64,
      usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
      mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
      label: Some("Line BG"),
      layout: &programs.bind_group_layout,
      entries: &[wgpu::BindGroupEntry { binding: 0, resource: uniform_buffer.as_entire_binding() }],
    });

    self.gpu = Some(GpuResources { vertex_buffer, uniform_buffer, bind_group });
  }

  pub fn write_uniforms(&self, queue: &wgpu::Queue, model_view: &DMat4, projection: &DMat4)
  {
    let Some(gpu) = &self.gpu
    else
    {
      return;
    };

    let uniform = DrawUniform {
      model_view: model_view.as_mat4().to_cols_array_2d(),
      projection: projection.as_mat4().to_cols_array_2d(),
      color: self.color(),
      dist_fade: self.distance_fade as u32,
      _pad: [0; 3],
    };

    queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
  }

  /// Records this drawable's draw call. Valid only between `setup` and
  /// `cleanup`; outside that window it records nothing.
  pub fn record(&self, pass: &mut wgpu::RenderPass<'_>, programs: &LinePrograms)
  {
    debug_assert!(self.is_ready(), "record called before setup or after cleanup");

    let Some(gpu) = &self.gpu
    else
    {
      return;
    };

    let pipeline = match self.topology
    {
      LineTopology::Segments => &programs.segments_pipeline,
      LineTopology::Strip => &programs.strip_pipeline,
    };

    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, &gpu.bind_group, &[]);
    pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
    pass.draw(0..self.vertex_count(), 0..1);
  }

  /// Releases the GPU buffers. Safe to call repeatedly and on a drawable
  /// that was never set up.
  pub fn cleanup(&mut self)
  {
    self.gpu = None;
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn points_are_packed_with_homogeneous_one()
  {
    let points = [DVec3::new(1.0, 2.0, 3.0), DVec3::new(-4.0, 5.0, -6.0)];
    let drawable = LineDrawable::from_points(&points, [1.0; 4], LineTopology::Strip);

    assert_eq!(drawable.vertex_count(), 2);
    assert_eq!(drawable.vertices[0], [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(drawable.vertices[1], [-4.0, 5.0, -6.0, 1.0]);
  }

  #[test]
  fn cleanup_before_setup_is_a_no_op()
  {
    let mut drawable = LineDrawable::from_points(&[], [1.0; 4], LineTopology::Strip);

    drawable.cleanup();

    assert!(!drawable.is_ready());
  }

  #[test]
  fn repeated_cleanup_is_idempotent()
  {
    let mut drawable =
      LineDrawable::from_points(&[DVec3::X], [1.0; 4], LineTopology::Segments);

    drawable.cleanup();
    drawable.cleanup();

    assert!(!drawable.is_ready());
  }

  #[test]
  fn distance_fade_is_off_by_default()
  {
    let drawable = LineDrawable::from_points(&[DVec3::X], [1.0; 4], LineTopology::Strip);
    assert!(!drawable.distance_fade);

    let faded = drawable.with_distance_fade();
    assert!(faded.distance_fade);
  }
}
