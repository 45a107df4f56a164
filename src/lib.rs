pub mod prelude;
pub mod error;
pub mod math;
pub mod camera;
pub mod asset;
pub mod scene;
pub mod viewer;
