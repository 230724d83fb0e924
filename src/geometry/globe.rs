use glam::DVec3;

use super::pack4;
use crate::math;

//
// ──────────────────────────────────────────────────────────────
//   Globe tessellation — 1° lat/lon wireframe of the reference
//   sphere, emitted as disconnected 2-point segments
// ──────────────────────────────────────────────────────────────
//

/// WGS-84 equatorial radius, meters. All world coordinates are relative to
/// a sphere of this radius centred on the origin.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Segments along lines of latitude: lat -89..=89 crossed with lon -180..=179.
pub const PARALLEL_SEGMENTS: usize = 179 * 360;

/// Segments along lines of longitude: lat -90..=89 crossed with lon -179..=180.
pub const MERIDIAN_SEGMENTS: usize = 180 * 360;

const VERTEX_COUNT: usize = 2 * (PARALLEL_SEGMENTS + MERIDIAN_SEGMENTS);

/// One-degree wireframe of the reference sphere.
///
/// Parallels and meridians are swept independently, each step emitting its
/// own 2-point segment. Grid points shared between segments are repeated on
/// purpose — the disconnected-segment topology is what gives the wireframe
/// its look, and the output is byte-for-byte deterministic.
pub fn wireframe_vertices() -> Vec<[f32; 4]>
{
  let mut vertices = Vec::with_capacity(VERTEX_COUNT);

  // Parallels: one segment per degree of longitude along each line of latitude.
  for lat in -89..=89
  {
    for lon in -180..=179
    {
      vertices.push(pack4(grid_point(lat, lon)));
      vertices.push(pack4(grid_point(lat, lon + 1)));
    }
  }

  // Meridians: one segment per degree of latitude along each line of longitude.
  for lat in -90..=89
  {
    for lon in -179..=180
    {
      vertices.push(pack4(grid_point(lat, lon)));
      vertices.push(pack4(grid_point(lat + 1, lon)));
    }
  }

  vertices
}

/// Connected strip along the equator, one point per degree of longitude.
pub fn equator_points() -> Vec<DVec3>
{
  (-180..=180).map(|lon| grid_point(0, lon)).collect()
}

/// Connected strip along the prime meridian, one point per degree of latitude.
pub fn prime_meridian_points() -> Vec<DVec3>
{
  (-90..=90).map(|lat| grid_point(lat, 0)).collect()
}

fn grid_point(lat: i32, lon: i32) -> DVec3
{
  math::lat_lon_to_world(lat as f64, lon as f64, EARTH_EQUATORIAL_RADIUS_M)
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn wireframe_vertex_count_is_exact()
  {
    let vertices = wireframe_vertices();

    assert_eq!(PARALLEL_SEGMENTS, 179 * 360);
    assert_eq!(MERIDIAN_SEGMENTS, 180 * 360);
    assert_eq!(vertices.len(), 2 * (PARALLEL_SEGMENTS + MERIDIAN_SEGMENTS));
  }

  #[test]
  fn wireframe_is_deterministic()
  {
    assert_eq!(wireframe_vertices(), wireframe_vertices());
  }

  #[test]
  fn wireframe_vertices_lie_on_sphere()
  {
    let radius = EARTH_EQUATORIAL_RADIUS_M as f32;

    for v in wireframe_vertices().iter().step_by(997)
    {
      let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
      assert!((len - radius).abs() < 5.0, "vertex off sphere: {len}");
      assert_eq!(v[3], 1.0);
    }
  }

  #[test]
  fn guide_strips_have_one_point_per_degree()
  {
    assert_eq!(equator_points().len(), 361);
    assert_eq!(prime_meridian_points().len(), 181);
  }

  #[test]
  fn equator_stays_in_plane()
  {
    for p in equator_points()
    {
      assert!(p.z.abs() < 1e-6);
      assert!((p.length() - EARTH_EQUATORIAL_RADIUS_M).abs() < 1e-3);
    }
  }
}
