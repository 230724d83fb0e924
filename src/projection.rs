use glam::{DMat4, DVec3, DVec4};

//
// ──────────────────────────────────────────────────────────────
//   View / projection matrices, built from first principles
//
//   Both functions are pure; the frame loop recomputes them from
//   current camera state every frame.
// ──────────────────────────────────────────────────────────────
//

/// Look-at view matrix mapping world space into eye space.
///
/// Basis: forward `= unit(eye - target)`, right `= unit(up × forward)`,
/// true up `= forward × right`. The rotational rows are the basis and the
/// translation per axis is `-dot(axis, eye)`, so the eye point itself maps
/// to the eye-space origin.
///
/// Degenerate when `up` is parallel to the look direction; the orbit camera
/// keeps elevation strictly inside ±90° so that cannot happen.
pub fn compute_view(eye: DVec3, target: DVec3, up: DVec3) -> DMat4
{
  let forward = (eye - target).normalize();
  let right = up.cross(forward).normalize();
  let true_up = forward.cross(right);

  DMat4::from_cols(
    DVec4::new(right.x, true_up.x, forward.x, 0.0),
    DVec4::new(right.y, true_up.y, forward.y, 0.0),
    DVec4::new(right.z, true_up.z, forward.z, 0.0),
    DVec4::new(-right.dot(eye), -true_up.dot(eye), -forward.dot(eye), 1.0),
  )
}

/// Right-handed perspective projection.
///
/// `f = 1 / tan(fov / 2)`; diagonals `(f / aspect, f, -(far+near) / (far-near))`,
/// depth term `-2 * far * near / (far-near)`, homogeneous row `(0, 0, -1, 0)`.
/// Maps eye-space z = -near to NDC depth -1 and z = -far to +1.
///
/// Panics when `near <= 0` or `far <= near` — a degenerate frustum is a
/// caller bug, not something to render with.
pub fn compute_perspective(fov_deg: f64, width: f64, height: f64, near: f64, far: f64) -> DMat4
{
  assert!(near > 0.0, "near plane must be positive");
  assert!(far > near, "far plane must be beyond the near plane");

  let aspect = width / height;
  let f = 1.0 / (fov_deg.to_radians() / 2.0).tan();
  let z_range = far - near;

  DMat4::from_cols(
    DVec4::new(f / aspect, 0.0, 0.0, 0.0),
    DVec4::new(0.0, f, 0.0, 0.0),
    DVec4::new(0.0, 0.0, -(far + near) / z_range, -1.0),
    DVec4::new(0.0, 0.0, -2.0 * far * near / z_range, 0.0),
  )
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn view_maps_eye_to_origin()
  {
    let eye = DVec3::new(3.0, -4.0, 5.0);
    let view = compute_view(eye, DVec3::ZERO, DVec3::Z);

    let mapped = view * DVec4::new(eye.x, eye.y, eye.z, 1.0);

    assert!(mapped.x.abs() < 1e-9);
    assert!(mapped.y.abs() < 1e-9);
    assert!(mapped.z.abs() < 1e-9);
    assert!((mapped.w - 1.0).abs() < 1e-12);
  }

  #[test]
  fn view_looks_down_negative_z()
  {
    // A point between eye and target sits in front of the camera, which in
    // eye space means negative z.
    let eye = DVec3::new(10.0, 0.0, 0.0);
    let view = compute_view(eye, DVec3::ZERO, DVec3::Z);

    let mapped = view * DVec4::new(5.0, 0.0, 0.0, 1.0);

    assert!(mapped.z < 0.0);
    assert!((mapped.z + 5.0).abs() < 1e-9);
  }

  #[test]
  fn square_90_degree_frustum_has_unit_diagonals()
  {
    let m = compute_perspective(90.0, 800.0, 800.0, 1.0, 2.0);

    assert!((m.x_axis.x - 1.0).abs() < 1e-12);
    assert!((m.y_axis.y - 1.0).abs() < 1e-12);
  }

  #[test]
  fn depth_maps_near_and_far_to_clip_extremes()
  {
    let m = compute_perspective(90.0, 800.0, 800.0, 1.0, 2.0);

    let near_clip = m * DVec4::new(0.0, 0.0, -1.0, 1.0);
    let far_clip = m * DVec4::new(0.0, 0.0, -2.0, 1.0);

    assert!((near_clip.z / near_clip.w + 1.0).abs() < 1e-12);
    assert!((far_clip.z / far_clip.w - 1.0).abs() < 1e-12);
  }

  #[test]
  #[should_panic(expected = "near plane must be positive")]
  fn rejects_non_positive_near()
  {
    compute_perspective(70.0, 800.0, 600.0, 0.0, 100.0);
  }

  #[test]
  #[should_panic(expected = "far plane must be beyond the near plane")]
  fn rejects_reversed_planes()
  {
    compute_perspective(70.0, 800.0, 600.0, 10.0, 5.0);
  }
}
