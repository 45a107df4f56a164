use glam::{
  Vec2,
  Vec3,
};

/// One corner of a triangle: indices into the mesh attribute arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
  pub position_index: usize,
  pub texcoord_index: usize,
}

/// A triangle as three corners, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
  pub corners: [Corner; 3],
}

/// An indexed triangle mesh with separate position and texcoord streams.
///
/// Corner indices are not validated on construction; the flattener checks
/// them against the attribute arrays before reading.
#[derive(Debug, Default)]
pub struct IndexedMesh {
  pub positions: Vec<Vec3>,
  pub texcoords: Vec<Vec2>,
  pub triangles: Vec<Triangle>,
}

impl IndexedMesh {

  /// The number of triangles in the mesh.
  /// return: The triangle count.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

}
