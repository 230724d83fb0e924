use glam::{DMat3, DVec3};

//
// ──────────────────────────────────────────────────────────────
//   Rotation helpers (f64 — world coordinates are in meters at
//   planetary scale, f32 only appears at GPU upload)
// ──────────────────────────────────────────────────────────────
//

/// Rotate `v` about an arbitrary axis by `angle` radians (right-hand rule).
/// The axis must be non-zero; a zero axis has no defined rotation.
pub fn rotate_about_axis(v: DVec3, axis: DVec3, angle: f64) -> DVec3
{
  debug_assert!(axis.length_squared() > 0.0, "rotation axis must be non-zero");

  DMat3::from_axis_angle(axis.normalize(), angle) * v
}

pub fn rotate_y(v: DVec3, angle: f64) -> DVec3
{
  DMat3::from_rotation_y(angle) * v
}

pub fn rotate_z(v: DVec3, angle: f64) -> DVec3
{
  DMat3::from_rotation_z(angle) * v
}

/// Maps a latitude/longitude grid point onto the sphere.
///
/// Contract: start at unit +X, rotate about Y by latitude, then about Z by
/// longitude, then scale by `radius`. The Y-then-Z order defines the pole
/// axis — swapping it produces a pole-shifted globe.
pub fn lat_lon_to_world(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3
{
  let p = rotate_y(DVec3::X, lat_deg.to_radians());
  let p = rotate_z(p, lon_deg.to_radians());

  p * radius
}

#[cfg(test)]
mod tests
{
  use super::*;

  const EPS: f64 = 1e-12;

  fn approx(a: DVec3, b: DVec3) -> bool
  {
    (a - b).length() < 1e-9
  }

  #[test]
  fn zero_angle_rotation_is_identity()
  {
    let v = DVec3::new(1.0, 2.0, 3.0);
    assert!(approx(rotate_about_axis(v, DVec3::Z, 0.0), v));
  }

  #[test]
  fn rotation_round_trips()
  {
    let v = DVec3::new(0.3, -1.7, 2.2);
    let axis = DVec3::new(1.0, 1.0, -0.5);
    let angle = 1.234;

    let rotated = rotate_about_axis(v, axis, angle);
    let restored = rotate_about_axis(rotated, axis, -angle);

    assert!(approx(restored, v));
  }

  #[test]
  fn rotation_preserves_length()
  {
    let v = DVec3::new(4.0, -2.0, 9.0);
    let rotated = rotate_about_axis(v, DVec3::new(0.0, 3.0, 1.0), 0.77);

    assert!((rotated.length() - v.length()).abs() < EPS * v.length());
  }

  #[test]
  fn normalized_vector_has_unit_length()
  {
    let v = DVec3::new(123.0, -456.0, 789.0).normalize();
    assert!((v.length() - 1.0).abs() < EPS);
  }

  #[test]
  fn lat_lon_rotation_order_is_y_then_z()
  {
    // At lat 45 / lon 90 the +X start point first tilts in the XZ plane,
    // then swings into +Y. Applying the rotations in the other order would
    // land somewhere else entirely.
    let p = lat_lon_to_world(45.0, 90.0, 1.0);
    let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;

    assert!(approx(p, DVec3::new(0.0, half_sqrt2, -half_sqrt2)));
  }

  #[test]
  fn lat_lon_lands_on_sphere()
  {
    let radius = 6_378_137.0;
    let p = lat_lon_to_world(-33.0, 151.0, radius);

    assert!((p.length() - radius).abs() < 1e-6 * radius);
  }
}
