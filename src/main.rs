mod app;
mod camera;
mod config;
mod geometry;
mod input;
mod math;
mod points;
mod projection;
mod renderer;
mod scene;

use std::path::Path;

use anyhow::Result;

fn main() -> Result<()>
{
  // Initialise the logger so wgpu validation errors and warnings appear in the console.
  // Set RUST_LOG before launch for more verbose GPU output.

  if std::env::var_os("RUST_LOG").is_none()
  {
    std::env::set_var("RUST_LOG", "info,wgpu_hal=off,naga=warn");
  }
  env_logger::init();

  let config = config::ViewerConfig::load_or_default(Path::new("viewer.json"));

  app::run(config)
}
