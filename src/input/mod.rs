mod camera_control;

pub use camera_control::apply_input_to_camera;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::Key;

//
// ──────────────────────────────────────────────────────────────
//   InputState — per-frame accumulation of raw window events
//
//   Deltas accumulate across the events of one frame and are
//   cleared by `end_frame`.
// ──────────────────────────────────────────────────────────────
//

pub struct InputState
{
  pub mouse_x: f64,
  pub mouse_y: f64,
  pub mouse_dx: f64,
  pub mouse_dy: f64,

  pub left_held: bool,

  pub scroll: f64,

  /// Edge-triggered: true when `p` was pressed this frame.
  pub pause_pressed: bool,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self {
      mouse_x: 0.0,
      mouse_y: 0.0,
      mouse_dx: 0.0,
      mouse_dy: 0.0,

      left_held: false,

      scroll: 0.0,

      pause_pressed: false,
    }
  }

  pub fn handle_event(&mut self, event: &WindowEvent)
  {
    match event
    {
      WindowEvent::CursorMoved { position, .. } =>
      {
        let x = position.x;
        let y = position.y;

        self.mouse_dx += x - self.mouse_x;
        self.mouse_dy += y - self.mouse_y;

        self.mouse_x = x;
        self.mouse_y = y;
      }

      WindowEvent::MouseInput { state, button, .. } =>
      {
        if *button == MouseButton::Left
        {
          self.left_held = *state == ElementState::Pressed;
        }
      }

      WindowEvent::MouseWheel { delta, .. } => match delta
      {
        MouseScrollDelta::LineDelta(_, y) => self.scroll += *y as f64,
        MouseScrollDelta::PixelDelta(p) => self.scroll += p.y,
      },

      WindowEvent::KeyboardInput { event, .. } =>
      {
        if let Key::Character(text) = &event.logical_key
        {
          if text.as_str() == "p" && event.state == ElementState::Pressed && !event.repeat
          {
            self.pause_pressed = true;
          }
        }
      }

      _ =>
      {}
    }
  }

  pub fn end_frame(&mut self)
  {
    self.mouse_dx = 0.0;
    self.mouse_dy = 0.0;
    self.scroll = 0.0;
    self.pause_pressed = false;
  }
}
