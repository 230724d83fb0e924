use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::camera::OrbitTuning;
use crate::geometry::globe::EARTH_EQUATORIAL_RADIUS_M;

//
// ──────────────────────────────────────────────────────────────
//   Viewer configuration
//
//   Optional JSON file; every field falls back to the built-in
//   defaults, so a partial (or absent) config is fine.
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewerConfig
{
  /// Vertical field of view, degrees.
  pub fov_deg: f64,

  /// Near clip distance, meters.
  pub near_m: f64,

  /// Far clip distance, meters.
  pub far_m: f64,

  pub camera: OrbitTuning,

  /// Point files to ingest at startup, each with its polyline color.
  pub point_sets: Vec<PointSetConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PointSetConfig
{
  pub path: PathBuf,

  /// RGBA, 0-255.
  pub color: [u8; 4],
}

impl Default for ViewerConfig
{
  fn default() -> Self
  {
    Self {
      fov_deg: 70.0,
      near_m: 0.5,
      far_m: EARTH_EQUATORIAL_RADIUS_M * 3.0,
      camera: OrbitTuning::default(),
      point_sets: vec![
        PointSetConfig { path: "actual_points.txt".into(), color: [255, 0, 0, 255] },
        PointSetConfig { path: "approx_points.txt".into(), color: [0, 255, 0, 255] },
        PointSetConfig { path: "approx_offset_points.txt".into(), color: [0, 0, 255, 255] },
        PointSetConfig { path: "axis_points.txt".into(), color: [255, 255, 0, 255] },
      ],
    }
  }
}

impl ViewerConfig
{
  pub fn load(path: &Path) -> Result<Self>
  {
    let file =
      File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    serde_json::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
  }

  /// Loads the config file when present, otherwise returns the defaults.
  /// A present-but-broken config is reported and ignored rather than fatal.
  pub fn load_or_default(path: &Path) -> Self
  {
    if !path.exists()
    {
      log::info!("no config at {}, using defaults", path.display());
      return Self::default();
    }

    match Self::load(path)
    {
      Ok(config) =>
      {
        log::info!("loaded config from {}", path.display());
        config
      }

      Err(err) =>
      {
        log::warn!("{err:#}; using defaults");
        Self::default()
      }
    }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn defaults_match_the_classic_viewer()
  {
    let config = ViewerConfig::default();

    assert_eq!(config.fov_deg, 70.0);
    assert_eq!(config.near_m, 0.5);
    assert_eq!(config.far_m, EARTH_EQUATORIAL_RADIUS_M * 3.0);
    assert_eq!(config.camera.drag_deg_per_px, 0.04);
    assert_eq!(config.camera.close_drag_deg_per_px, 0.001);
    assert_eq!(config.camera.close_range_altitude_m, 1_000_000.0);
    assert_eq!(config.camera.zoom_step, 1.1);
    assert_eq!(config.camera.min_altitude_m, 1.0);
    assert_eq!(config.point_sets.len(), 4);
  }

  #[test]
  fn partial_json_overrides_only_named_fields()
  {
    let config: ViewerConfig =
      serde_json::from_str(r#"{ "fov_deg": 45.0, "camera": { "zoom_step": 1.25 } }"#).unwrap();

    assert_eq!(config.fov_deg, 45.0);
    assert_eq!(config.camera.zoom_step, 1.25);
    assert_eq!(config.near_m, 0.5);
    assert_eq!(config.camera.drag_deg_per_px, 0.04);
  }

  #[test]
  fn point_sets_parse_with_colors()
  {
    let config: ViewerConfig = serde_json::from_str(
      r#"{ "point_sets": [ { "path": "tracks.txt", "color": [10, 20, 30, 255] } ] }"#,
    )
    .unwrap();

    assert_eq!(config.point_sets.len(), 1);
    assert_eq!(config.point_sets[0].color, [10, 20, 30, 255]);
  }

  #[test]
  fn missing_config_file_falls_back_to_defaults()
  {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewerConfig::load_or_default(&dir.path().join("viewer.json"));

    assert_eq!(config.fov_deg, 70.0);
  }
}
