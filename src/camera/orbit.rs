use glam::DVec3;
use serde::Deserialize;

use crate::geometry::globe::EARTH_EQUATORIAL_RADIUS_M;
use crate::math;

//
// ──────────────────────────────────────────────────────────────
//   Orbit camera (Z-up, target pinned at the origin)
//
//   Only `position` ever changes: drags rotate it around the
//   origin, the wheel scales its distance above the reference
//   sphere. `target` and `up` stay fixed, which keeps the
//   look-at construction away from its degenerate cases.
// ──────────────────────────────────────────────────────────────
//

const MAX_ELEVATION_DEG: f64 = 89.0;

// Elevation responds at half the azimuth rate. Applied before the clamp so
// an oversized drag still stops exactly on the boundary.
const ELEVATION_RATE: f64 = 0.5;

/// Input-response constants. Defaults match the viewer's historical feel;
/// all of them are overridable from the config file.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct OrbitTuning
{
  /// Drag sensitivity, degrees of arc per pixel.
  pub drag_deg_per_px: f64,

  /// Drag sensitivity once below `close_range_altitude_m`, for precise
  /// close-range orbiting.
  pub close_drag_deg_per_px: f64,

  /// Altitude below which the close-range drag sensitivity kicks in, meters.
  pub close_range_altitude_m: f64,

  /// Altitude multiplier per scroll unit.
  pub zoom_step: f64,

  /// Altitude floor above the reference sphere, meters. Keeps the camera
  /// from crossing the surface or collapsing onto the origin.
  pub min_altitude_m: f64,
}

impl Default for OrbitTuning
{
  fn default() -> Self
  {
    Self {
      drag_deg_per_px: 0.04,
      close_drag_deg_per_px: 0.001,
      close_range_altitude_m: 1_000_000.0,
      zoom_step: 1.1,
      min_altitude_m: 1.0,
    }
  }
}

pub struct Camera
{
  pub position: DVec3,
  pub target: DVec3,
  pub up: DVec3,
  pub tuning: OrbitTuning,
}

impl Camera
{
  pub fn new(tuning: OrbitTuning) -> Self
  {
    Self {
      position: DVec3::new(EARTH_EQUATORIAL_RADIUS_M * 1.5, 0.0, 0.0),
      target: DVec3::ZERO,
      up: DVec3::Z,
      tuning,
    }
  }

  /// Distance above the reference sphere, meters.
  pub fn altitude(&self) -> f64
  {
    self.position.length() - EARTH_EQUATORIAL_RADIUS_M
  }

  /// Angle between the position vector and the equatorial plane, radians.
  pub fn elevation(&self) -> f64
  {
    let horizontal = DVec3::new(self.position.x, self.position.y, 0.0).length();
    self.position.z.atan2(horizontal)
  }

  /// Converts a pointer-drag delta into an azimuth rotation about the world
  /// up axis (`dx`) and an elevation rotation about the axis perpendicular
  /// to both `up` and the current position (`dy`).
  pub fn orbit_by_screen_delta(&mut self, dx: f64, dy: f64)
  {
    let sens = if self.altitude() < self.tuning.close_range_altitude_m
    {
      self.tuning.close_drag_deg_per_px
    }
    else
    {
      self.tuning.drag_deg_per_px
    };

    // Azimuth: spin about the world up axis.
    let mut pos = math::rotate_about_axis(self.position, self.up, -(dx * sens).to_radians());

    // Elevation: clamp by adjusting the delta, so a single oversized drag
    // stops exactly at the ±89° boundary instead of being dropped.
    let horizontal = DVec3::new(pos.x, pos.y, 0.0).length();
    let angle = pos.z.atan2(horizontal);
    let max_angle = MAX_ELEVATION_DEG.to_radians();

    let mut delta = (dy * sens).to_radians() * ELEVATION_RATE;
    if angle + delta > max_angle
    {
      delta = max_angle - angle;
    }
    if angle + delta < -max_angle
    {
      delta = -max_angle - angle;
    }

    // Elevation stays strictly inside ±90°, so this axis is never zero.
    let axis = pos.cross(self.up);
    pos = math::rotate_about_axis(pos, axis, delta);

    self.position = pos;
  }

  /// Multiplicative zoom: each scroll unit scales altitude by the zoom step
  /// (positive units zoom in), then position is re-derived along its own
  /// direction — distance changes, direction never does.
  pub fn zoom_by_scroll(&mut self, units: f64)
  {
    if units == 0.0
    {
      return;
    }

    let mut altitude = self.altitude() * self.tuning.zoom_step.powf(-units);
    if altitude < self.tuning.min_altitude_m
    {
      altitude = self.tuning.min_altitude_m;
    }

    self.position = self.position.normalize() * (EARTH_EQUATORIAL_RADIUS_M + altitude);
  }
}
