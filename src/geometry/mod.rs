pub mod globe;

use glam::DVec3;

/// Packs a world-space point into the vertex layout the line shader expects:
/// three position components plus a homogeneous 1.
pub fn pack4(p: DVec3) -> [f32; 4]
{
  [p.x as f32, p.y as f32, p.z as f32, 1.0]
}
