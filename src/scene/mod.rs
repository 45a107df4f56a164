pub mod mesh;
pub mod material;
pub mod vertex;
pub mod flatten;
pub mod image_data;
pub mod loader;

pub use mesh::{
  IndexedMesh,
  Triangle,
  Corner,
};
pub use material::Material;
pub use vertex::{
  FlatVertex,
  FlatVertexBuffer,
};
pub use flatten::flatten;
pub use image_data::{
  ImageData,
  PixelFormat,
};
