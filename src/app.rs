use std::sync::Arc;

use anyhow::Result;
use glam::DMat4;
use winit::{
  application::ApplicationHandler,
  event::WindowEvent,
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::input::{apply_input_to_camera, InputState};
use crate::projection;
use crate::renderer::Renderer;
use crate::scene::Scene;

pub fn run(config: ViewerConfig) -> Result<()>
{
  let event_loop = EventLoop::new()?;
  let mut app = ViewerApp::new(config);

  event_loop.run_app(&mut app)?;
  Ok(())
}

//
// ──────────────────────────────────────────────────────────────
//   ViewerApp — frame driver
//
//   Owns the per-frame context (camera, cached projection, scene)
//   and threads it through explicit calls; nothing lives in
//   ambient globals. The view matrix is recomputed from camera
//   state every frame, the projection only on resize.
// ──────────────────────────────────────────────────────────────
//

struct ViewerApp
{
  config: ViewerConfig,
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,
  scene: Option<Scene>,
  camera: Camera,
  projection: DMat4,
  input: InputState,
  paused: bool,
}

impl ViewerApp
{
  fn new(config: ViewerConfig) -> Self
  {
    let camera = Camera::new(config.camera);

    // Placeholder until the window reports its real size.
    let projection =
      projection::compute_perspective(config.fov_deg, 16.0, 9.0, config.near_m, config.far_m);

    Self {
      config,
      window: None,
      renderer: None,
      scene: None,
      camera,
      projection,
      input: InputState::new(),
      paused: false,
    }
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop)
  {
    if self.window.is_some()
    {
      return;
    }

    let attrs = Window::default_attributes().with_title("World Point Viewer");
    let window = Arc::new(event_loop.create_window(attrs).expect("failed to create window"));

    let renderer = pollster::block_on(Renderer::new(window.clone()));

    let mut scene = Scene::build(&self.config);
    scene.setup(renderer.device(), renderer.programs());

    let size = window.inner_size();
    self.rebuild_projection(size.width, size.height);

    log::info!(
      "camera at altitude {:.0} m, elevation {:.1}°",
      self.camera.altitude(),
      self.camera.elevation().to_degrees()
    );

    self.window = Some(window);
    self.renderer = Some(renderer);
    self.scene = Some(scene);
  }

  fn rebuild_projection(&mut self, width: u32, height: u32)
  {
    self.projection = projection::compute_perspective(
      self.config.fov_deg,
      width.max(1) as f64,
      height.max(1) as f64,
      self.config.near_m,
      self.config.far_m,
    );
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w.clone(),
      _ => return,
    };

    self.input.handle_event(&event);

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
        }

        self.rebuild_projection(size.width, size.height);

        window.request_redraw();
      }

      _ =>
      {}
    }
  }

  fn frame(&mut self)
  {
    if self.input.pause_pressed
    {
      self.paused = !self.paused;
    }

    apply_input_to_camera(&self.input, &mut self.camera);
    self.input.end_frame();

    let (Some(window), Some(renderer), Some(scene)) =
      (&self.window, &mut self.renderer, &self.scene)
    else
    {
      return;
    };

    if !self.paused
    {
      let model_view =
        projection::compute_view(self.camera.position, self.camera.target, self.camera.up);

      renderer.render(scene, &model_view, &self.projection);
    }

    window.request_redraw();
  }
}

impl ApplicationHandler for ViewerApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);
    self.init_window_and_renderer(event_loop);
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop)
  {
    self.frame();
  }

  fn exiting(&mut self, _event_loop: &ActiveEventLoop)
  {
    // Release GPU buffers on every termination route, not just CloseRequested.
    if let Some(scene) = &mut self.scene
    {
      scene.cleanup();
    }
  }
}
