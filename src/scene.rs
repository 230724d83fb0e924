use glam::DMat4;

use crate::config::{PointSetConfig, ViewerConfig};
use crate::geometry::globe;
use crate::points;
use crate::renderer::{LineDrawable, LinePrograms, LineTopology};

//
// ──────────────────────────────────────────────────────────────
//   Scene — the fixed list of drawables
//
//   Draw order is deterministic: globe wireframe first, then the
//   equator and prime meridian guides, then every ingested point
//   set. Later draws composite over earlier ones through alpha
//   blending.
// ──────────────────────────────────────────────────────────────
//

const GLOBE_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
const GUIDE_COLOR: [u8; 4] = [128, 128, 0, 255];

pub struct Scene
{
  globe: LineDrawable,
  equator: LineDrawable,
  prime_meridian: LineDrawable,
  point_sets: Vec<LineDrawable>,
}

impl Scene
{
  /// Generates all geometry CPU-side. Nothing touches the GPU until `setup`.
  pub fn build(config: &ViewerConfig) -> Self
  {
    let globe =
      LineDrawable::from_vertices(globe::wireframe_vertices(), GLOBE_COLOR, LineTopology::Segments)
        .with_distance_fade();

    let equator =
      LineDrawable::from_points(&globe::equator_points(), rgba(GUIDE_COLOR), LineTopology::Strip);

    let prime_meridian = LineDrawable::from_points(
      &globe::prime_meridian_points(),
      rgba(GUIDE_COLOR),
      LineTopology::Strip,
    );

    let point_sets = load_point_sets(&config.point_sets);

    Self { globe, equator, prime_meridian, point_sets }
  }

  pub fn setup(&mut self, device: &wgpu::Device, programs: &LinePrograms)
  {
    for drawable in self.drawables_mut()
    {
      drawable.setup(device, programs);
    }
  }

  pub fn write_uniforms(&self, queue: &wgpu::Queue, model_view: &DMat4, projection: &DMat4)
  {
    for drawable in self.drawables()
    {
      drawable.write_uniforms(queue, model_view, projection);
    }
  }

  pub fn record(&self, pass: &mut wgpu::RenderPass<'_>, programs: &LinePrograms)
  {
    for drawable in self.drawables()
    {
      drawable.record(pass, programs);
    }
  }

  /// Releases every drawable's GPU resources. Idempotent, and called from
  /// the event loop's exit path so shutdown always reaches it.
  pub fn cleanup(&mut self)
  {
    for drawable in self.drawables_mut()
    {
      drawable.cleanup();
    }
  }

  fn drawables(&self) -> impl Iterator<Item = &LineDrawable>
  {
    std::iter::once(&self.globe)
      .chain(std::iter::once(&self.equator))
      .chain(std::iter::once(&self.prime_meridian))
      .chain(self.point_sets.iter())
  }

  fn drawables_mut(&mut self) -> impl Iterator<Item = &mut LineDrawable>
  {
    std::iter::once(&mut self.globe)
      .chain(std::iter::once(&mut self.equator))
      .chain(std::iter::once(&mut self.prime_meridian))
      .chain(self.point_sets.iter_mut())
  }
}

/// One drawable per ingested polyline. Sets that fail to load are reported
/// and skipped — a missing point file is routine, not fatal.
fn load_point_sets(sets: &[PointSetConfig]) -> Vec<LineDrawable>
{
  let mut drawables = Vec::new();

  for set in sets
  {
    let polylines = match points::load_polylines(&set.path)
    {
      Ok(polylines) => polylines,
      Err(err) =>
      {
        log::warn!("skipping point set: {err:#}");
        continue;
      }
    };

    log::info!("loaded {} polyline(s) from {}", polylines.len(), set.path.display());

    for polyline in &polylines
    {
      drawables.push(LineDrawable::from_points(polyline, rgba(set.color), LineTopology::Strip));
    }
  }

  drawables
}

fn rgba(color: [u8; 4]) -> [f32; 4]
{
  color.map(|c| c as f32 / 255.0)
}

#[cfg(test)]
mod tests
{
  use super::*;
  use std::io::Write;

  fn config_without_point_files() -> ViewerConfig
  {
    ViewerConfig { point_sets: Vec::new(), ..ViewerConfig::default() }
  }

  #[test]
  fn scene_draws_globe_then_guides_then_point_sets()
  {
    let scene = Scene::build(&config_without_point_files());

    let counts: Vec<u32> = scene.drawables().map(|d| d.vertex_count()).collect();

    // Globe segments, then the 361-point equator and 181-point meridian.
    assert_eq!(counts, vec![2 * (179 * 360 + 180 * 360) as u32, 361, 181]);
  }

  #[test]
  fn missing_point_files_are_skipped()
  {
    let sets = vec![PointSetConfig { path: "does_not_exist.txt".into(), color: [255, 0, 0, 255] }];

    assert!(load_point_sets(&sets).is_empty());
  }

  #[test]
  fn each_polyline_becomes_one_drawable()
  {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracks.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "1,0,0\n2,0,0\n\n\n0,1,0\n0,2,0\n0,3,0").unwrap();

    let sets = vec![PointSetConfig { path, color: [0, 255, 0, 255] }];
    let drawables = load_point_sets(&sets);

    assert_eq!(drawables.len(), 2);
    assert_eq!(drawables[0].vertex_count(), 2);
    assert_eq!(drawables[1].vertex_count(), 3);
    assert_eq!(drawables[0].color(), [0.0, 1.0, 0.0, 1.0]);
  }

  #[test]
  fn guide_color_converts_to_unit_range()
  {
    let scene = Scene::build(&config_without_point_files());
    let equator = scene.drawables().nth(1).unwrap();

    let expected = [128.0 / 255.0, 128.0 / 255.0, 0.0, 1.0];
    assert_eq!(equator.color(), expected);
  }

  #[test]
  fn cleanup_twice_is_safe()
  {
    let mut scene = Scene::build(&config_without_point_files());

    scene.cleanup();
    scene.cleanup();

    assert!(scene.drawables().all(|d| !d.is_ready()));
  }
}
