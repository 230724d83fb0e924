use super::InputState;
use crate::camera::Camera;

/// Feeds one frame of accumulated input into the camera: orbit while the
/// left button drags, zoom on wheel scroll. The camera model owns all
/// sensitivity and clamping; this layer only routes deltas.
pub fn apply_input_to_camera(input: &InputState, camera: &mut Camera)
{
  if input.left_held && (input.mouse_dx != 0.0 || input.mouse_dy != 0.0)
  {
    camera.orbit_by_screen_delta(input.mouse_dx, input.mouse_dy);
  }

  if input.scroll != 0.0
  {
    camera.zoom_by_scroll(input.scroll);
  }
}
