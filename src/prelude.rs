pub use crate::error::ViewerError;
pub use crate::math::Mat4;
pub use crate::camera::CameraState;
pub use crate::asset::{
  AssetReader,
  DiskReader,
};
pub use crate::scene::{
  IndexedMesh,
  Triangle,
  Corner,
  Material,
  FlatVertex,
  FlatVertexBuffer,
  flatten,
};
pub use crate::viewer::{
  Viewer,
  ViewerSettings,
};
