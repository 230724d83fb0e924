mod core;
mod drawable;
mod pipeline;

pub use self::core::Renderer;
pub use self::drawable::{LineDrawable, LineTopology};
pub use self::pipeline::LinePrograms;
