mod orbit;

pub use orbit::{Camera, OrbitTuning};
